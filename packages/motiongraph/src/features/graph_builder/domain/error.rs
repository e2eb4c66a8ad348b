use thiserror::Error;

use super::NodeKey;
use crate::config::ConfigError;
use crate::shared::models::{FrameId, ObjectId};

/// Graph construction failure; construction is all-or-nothing
#[derive(Debug, Error)]
pub enum GraphBuildError {
    #[error("No kept frames found in trajectories (configured: {configured:?})")]
    NoKeptFrames { configured: Vec<FrameId> },

    #[error("Object {object_id} at frame {frame_id} has no entry in the object property list")]
    UnknownObject { object_id: ObjectId, frame_id: FrameId },

    #[error("Object {0} appears more than once in the object property list")]
    DuplicateProperty(ObjectId),

    #[error("Object {object_id} has more than one state at frame {frame_id}")]
    DuplicateState { object_id: ObjectId, frame_id: FrameId },

    #[error("Object {object_id} at frame {frame_id}: expected {expected}-dimensional vector, found {found}")]
    DimensionMismatch {
        object_id: ObjectId,
        frame_id: FrameId,
        expected: usize,
        found: usize,
    },

    #[error("Node {0} constructed twice")]
    DuplicateNode(NodeKey),

    #[error("Invalid build configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
