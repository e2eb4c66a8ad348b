//! JSON annotation loader
//!
//! Expected document shape:
//! ```text
//! {
//!   "object_property":   [{"object_id": 0, "shape": "cube", "color": "red", ...}, ...],
//!   "motion_trajectory": [{"frame_id": 0, "objects": [{"object_id": 0,
//!                           "location": [x, y, z], "velocity": [...]}, ...]}, ...]
//! }
//! ```
//! Other fields (orientation, camera visibility, collision lists) are ignored.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use super::domain::{Annotation, AnnotationError, TrajectoryTable};
use crate::shared::models::{FrameId, FrameObjectState, ObjectId, ObjectProperty};

#[derive(Debug, Deserialize)]
struct RawAnnotation {
    object_property: Vec<ObjectProperty>,
    motion_trajectory: Vec<RawFrame>,
}

#[derive(Debug, Deserialize)]
struct RawFrame {
    frame_id: FrameId,
    #[serde(default)]
    objects: Vec<RawObjectMotion>,
}

#[derive(Debug, Deserialize)]
struct RawObjectMotion {
    object_id: ObjectId,
    location: Vec<f64>,
    #[serde(default)]
    velocity: Vec<f64>,
}

impl Annotation {
    pub fn from_json_str(json: &str) -> Result<Self, AnnotationError> {
        let raw: RawAnnotation = serde_json::from_str(json)?;

        let mut trajectories = TrajectoryTable::new();
        for frame in raw.motion_trajectory {
            let frame_id = frame.frame_id;
            let states = frame
                .objects
                .into_iter()
                .map(|m| FrameObjectState {
                    object_id: m.object_id,
                    frame_id,
                    location: m.location,
                    velocity: m.velocity,
                })
                .collect();
            if trajectories.insert(frame_id, states).is_some() {
                return Err(AnnotationError::DuplicateFrame(frame_id));
            }
        }

        debug!(
            objects = raw.object_property.len(),
            frames = trajectories.len(),
            "annotation parsed"
        );

        Annotation::new(raw.object_property, trajectories)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnnotationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
