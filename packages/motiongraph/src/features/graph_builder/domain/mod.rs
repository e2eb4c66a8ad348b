// Graph Builder Domain Models
//
// Pure domain models: node identity, the two node variants, transition edges.
// The graph container itself lives in graph.rs.

mod error;
mod graph;

pub use error::GraphBuildError;
pub use graph::{ExportLink, ExportNode, GraphExport, GraphStats, SceneGraph};

use serde::{Serialize, Serializer};
use std::fmt;

use crate::shared::models::{FrameId, ObjectId, ObjectPair, ObjectProperty};

// ============================================================
// Node Identity
// ============================================================

/// Globally unique node identifier
///
/// Renders as `obj{id}_f{frame}` or `collision_{a}_{b}_f{frame}`, which is
/// also its serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    ObjectState { object_id: ObjectId, frame: FrameId },
    Collision { pair: ObjectPair, frame: FrameId },
}

impl NodeKey {
    pub fn object_state(object_id: ObjectId, frame: FrameId) -> Self {
        Self::ObjectState { object_id, frame }
    }

    pub fn collision(a: ObjectId, b: ObjectId, frame: FrameId) -> Self {
        Self::Collision {
            pair: ObjectPair::new(a, b),
            frame,
        }
    }

    #[inline]
    pub fn frame(&self) -> FrameId {
        match self {
            Self::ObjectState { frame, .. } | Self::Collision { frame, .. } => *frame,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectState { object_id, frame } => write!(f, "obj{}_f{}", object_id, frame),
            Self::Collision { pair, frame } => {
                write!(f, "collision_{}_{}_f{}", pair.low(), pair.high(), frame)
            }
        }
    }
}

impl Serialize for NodeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================
// Graph Node
// ============================================================

/// Object snapshot at a kept frame: static properties plus motion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectStateNode {
    #[serde(flatten)]
    pub property: ObjectProperty,
    pub frame: FrameId,
    pub location: Vec<f64>,
    pub velocity: Vec<f64>,
}

impl ObjectStateNode {
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.property.object_id
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::object_state(self.object_id(), self.frame)
    }
}

/// Onset of contact between two objects
///
/// `colors[0]`/`shapes[0]` belong to `pair.low()`, `colors[1]`/`shapes[1]`
/// to `pair.high()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionNode {
    #[serde(rename = "objects")]
    pub pair: ObjectPair,
    pub frame: FrameId,
    #[serde(rename = "color")]
    pub colors: [String; 2],
    #[serde(rename = "shape")]
    pub shapes: [String; 2],
}

impl CollisionNode {
    /// Build from the two property records, in either order
    pub fn between(a: &ObjectProperty, b: &ObjectProperty, frame: FrameId) -> Self {
        let (low, high) = if a.object_id <= b.object_id { (a, b) } else { (b, a) };
        Self {
            pair: ObjectPair::new(low.object_id, high.object_id),
            frame,
            colors: [low.color.clone(), high.color.clone()],
            shapes: [low.shape.clone(), high.shape.clone()],
        }
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::Collision {
            pair: self.pair,
            frame: self.frame,
        }
    }

    /// Color and shape of the object in `slot` (0 = smaller id)
    pub fn attributes_of(&self, slot: usize) -> Option<(&str, &str)> {
        Some((self.colors.get(slot)?.as_str(), self.shapes.get(slot)?.as_str()))
    }
}

/// Graph node: an object-state snapshot or a collision event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneNode {
    #[serde(rename = "object")]
    ObjectState(ObjectStateNode),
    Collision(CollisionNode),
}

impl SceneNode {
    pub fn key(&self) -> NodeKey {
        match self {
            Self::ObjectState(n) => n.key(),
            Self::Collision(n) => n.key(),
        }
    }

    #[inline]
    pub fn frame(&self) -> FrameId {
        match self {
            Self::ObjectState(n) => n.frame,
            Self::Collision(n) => n.frame,
        }
    }

    pub fn as_object_state(&self) -> Option<&ObjectStateNode> {
        match self {
            Self::ObjectState(n) => Some(n),
            Self::Collision(_) => None,
        }
    }

    pub fn as_collision(&self) -> Option<&CollisionNode> {
        match self {
            Self::Collision(n) => Some(n),
            Self::ObjectState(_) => None,
        }
    }

    /// Recorded location (collision events carry none)
    pub fn location(&self) -> Option<&[f64]> {
        self.as_object_state().map(|n| n.location.as_slice())
    }

    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Collision(_))
    }
}

// ============================================================
// Graph Edge
// ============================================================

/// "This object's next recorded state/event is ..." labeled with the
/// destination frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionEdge {
    pub frame: FrameId,
}
