//! Annotation domain models

use ahash::AHashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

use crate::shared::models::{FrameId, FrameObjectState, ObjectId, ObjectProperty};

/// Object states grouped by frame, ascending by frame id
pub type TrajectoryTable = BTreeMap<FrameId, Vec<FrameObjectState>>;

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object {0} appears more than once in object_property")]
    DuplicateObject(ObjectId),

    #[error("Frame {0} appears more than once in motion_trajectory")]
    DuplicateFrame(FrameId),
}

/// Property record merged with the motion record of one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSnapshot {
    #[serde(flatten)]
    pub property: ObjectProperty,
    pub frame_id: FrameId,
    pub location: Vec<f64>,
    pub velocity: Vec<f64>,
}

/// Parsed annotation for one scene
#[derive(Debug, Clone)]
pub struct Annotation {
    objects: Vec<ObjectProperty>,
    by_id: AHashMap<ObjectId, usize>,
    trajectories: TrajectoryTable,
}

impl Annotation {
    /// Build from already-parsed records
    pub fn new(
        objects: Vec<ObjectProperty>,
        trajectories: TrajectoryTable,
    ) -> Result<Self, AnnotationError> {
        let mut by_id = AHashMap::with_capacity(objects.len());
        for (idx, obj) in objects.iter().enumerate() {
            if by_id.insert(obj.object_id, idx).is_some() {
                return Err(AnnotationError::DuplicateObject(obj.object_id));
            }
        }

        Ok(Self {
            objects,
            by_id,
            trajectories,
        })
    }

    /// All static object properties, in document order
    pub fn objects(&self) -> &[ObjectProperty] {
        &self.objects
    }

    pub fn object(&self, object_id: ObjectId) -> Option<&ObjectProperty> {
        self.by_id.get(&object_id).map(|&idx| &self.objects[idx])
    }

    pub fn trajectories(&self) -> &TrajectoryTable {
        &self.trajectories
    }

    pub fn frame_ids(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.trajectories.keys().copied()
    }

    /// Objects present at `frame_id` with their properties merged in
    ///
    /// An unknown frame yields an empty list. Motion records whose object has
    /// no property record are skipped.
    pub fn objects_in_frame(&self, frame_id: FrameId) -> Vec<ObjectSnapshot> {
        let Some(states) = self.trajectories.get(&frame_id) else {
            return Vec::new();
        };

        states
            .iter()
            .filter_map(|state| match self.object(state.object_id) {
                Some(property) => Some(ObjectSnapshot {
                    property: property.clone(),
                    frame_id,
                    location: state.location.clone(),
                    velocity: state.velocity.clone(),
                }),
                None => {
                    warn!(
                        object_id = state.object_id,
                        frame_id, "motion record without object property, skipping"
                    );
                    None
                }
            })
            .collect()
    }
}
