// Graph Search - Read-only queries over a built SceneGraph
//
// - Per-object trajectory: path, collisions, merged timeline, summary
// - Per-pair collision history, symmetric in its arguments
//
// ## Architecture
// - Domain: Result documents (ObjectTrajectory, PairCollisionResult, ...)
// - Infrastructure: SearchIndex + GraphSearcher
// - Application: SceneSearchTool (JSON facade)

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::SceneSearchTool;
pub use domain::{
    CollisionEntry, CollisionPartner, EntryKind, ObjectTrajectory, PairCollisionEntry,
    PairCollisionResult, PathEntry, TimelineEntry, TrajectorySummary,
};
pub use infrastructure::{GraphSearcher, SearchIndex};
