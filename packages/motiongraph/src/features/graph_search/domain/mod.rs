//! Query result shapes
//!
//! All results serialize to the documents external callers consume:
//! trajectory results carry `object_id`, `path`, `collisions`, `summary`,
//! `complete_timeline`; pair results carry `object_pair`, `collisions`,
//! `collision_count`.

use serde::Serialize;

use crate::features::graph_builder::NodeKey;
use crate::shared::models::{FrameId, ObjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    ObjectPosition,
    Collision,
}

/// One object-state node on an object's path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry {
    pub frame: FrameId,
    pub node_id: NodeKey,
    pub location: Vec<f64>,
    pub velocity: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// The other object in a collision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionPartner {
    pub object_id: ObjectId,
    pub color: String,
    pub shape: String,
}

/// One collision involving the queried object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionEntry {
    pub frame: FrameId,
    pub node_id: NodeKey,
    pub collision_with: CollisionPartner,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Path or collision entry in the merged timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TimelineEntry {
    Position(PathEntry),
    Collision(CollisionEntry),
}

impl TimelineEntry {
    pub fn frame(&self) -> FrameId {
        match self {
            Self::Position(e) => e.frame,
            Self::Collision(e) => e.frame,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Position(e) => e.kind,
            Self::Collision(e) => e.kind,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrajectorySummary {
    /// Number of path entries
    pub total_frames: usize,
    pub collision_count: usize,
    /// Distinct partners, first-seen order
    pub collision_partners: Vec<ObjectId>,
}

/// Full chronological record of one object
///
/// An object absent from the graph yields an empty trajectory, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectTrajectory {
    pub object_id: ObjectId,
    pub path: Vec<PathEntry>,
    pub collisions: Vec<CollisionEntry>,
    pub summary: TrajectorySummary,
    /// `path` and `collisions` merged by frame; at equal frames path entries
    /// come before collision entries
    pub complete_timeline: Vec<TimelineEntry>,
}

impl ObjectTrajectory {
    pub fn empty(object_id: ObjectId) -> Self {
        Self {
            object_id,
            path: Vec::new(),
            collisions: Vec::new(),
            summary: TrajectorySummary::default(),
            complete_timeline: Vec::new(),
        }
    }

    /// True if the object has no node in the graph
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.collisions.is_empty()
    }
}

/// One collision node for a queried pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCollisionEntry {
    pub frame: FrameId,
    pub node_id: NodeKey,
    /// Indexed like `object_pair`
    pub colors: [String; 2],
    pub shapes: [String; 2],
}

/// Collisions between two specific objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCollisionResult {
    /// Smaller id first, whatever order the query used
    pub object_pair: [ObjectId; 2],
    pub collisions: Vec<PairCollisionEntry>,
    pub collision_count: usize,
}

impl PairCollisionResult {
    pub fn first_frame(&self) -> Option<FrameId> {
        self.collisions.first().map(|c| c.frame)
    }
}
