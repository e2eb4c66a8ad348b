//! Test data builders

use motiongraph::features::annotation::TrajectoryTable;
use motiongraph::{Annotation, FrameId, FrameObjectState, ObjectId, ObjectProperty};

/// Builder for a scene: property records plus per-frame locations
#[derive(Debug, Default, Clone)]
pub struct SceneBuilder {
    objects: Vec<ObjectProperty>,
    trajectories: TrajectoryTable,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(mut self, id: ObjectId, shape: &str, color: &str) -> Self {
        self.objects
            .push(ObjectProperty::new(id, shape, color, "rubber"));
        self
    }

    /// Record `id` at `location` in `frame`
    pub fn at(mut self, frame: FrameId, id: ObjectId, location: &[f64]) -> Self {
        self.trajectories
            .entry(frame)
            .or_default()
            .push(FrameObjectState::new(id, frame, location.to_vec()));
        self
    }

    /// Record `id` along `path`, one (frame, location) per entry
    pub fn path(mut self, id: ObjectId, path: &[(FrameId, &[f64])]) -> Self {
        for (frame, loc) in path {
            self = self.at(*frame, id, loc);
        }
        self
    }

    pub fn properties(&self) -> &[ObjectProperty] {
        &self.objects
    }

    pub fn trajectories(&self) -> &TrajectoryTable {
        &self.trajectories
    }

    pub fn build(self) -> Annotation {
        Annotation::new(self.objects, self.trajectories).expect("valid scene")
    }
}
