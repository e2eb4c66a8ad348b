//! Shared models

mod object;
mod pair;

pub use object::{FrameObjectState, ObjectProperty, Shape};
pub use pair::ObjectPair;

// ═══════════════════════════════════════════════════════════════════════════
// Type Aliases
// ═══════════════════════════════════════════════════════════════════════════

/// Object identifier, unique within a scene
pub type ObjectId = u32;

/// Frame identifier (frame number in the source video)
pub type FrameId = u32;
