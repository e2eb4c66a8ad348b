// Graph Builder - Annotation to Spatio-Temporal Graph
//
// Converts per-frame object states → SceneGraph:
// - Object-state nodes at kept frames, collapsed when an object has not moved
// - Collision nodes at the onset of each contact interval, found by sampling
//   interpolated positions between consecutive kept frames
// - Edges follow each object's chain of states and events forward in time
//
// ## Architecture
// - Domain: Pure models (NodeKey, SceneNode, TransitionEdge, SceneGraph)
// - Infrastructure: Collision sampler, construction accumulator, builder
// - Application: UseCase trait

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::GraphBuilderUseCase;

// Re-exports
pub use domain::{
    CollisionNode, GraphBuildError, GraphExport, GraphStats, NodeKey, ObjectStateNode,
    SceneGraph, SceneNode, TransitionEdge,
};
pub use infrastructure::{FrameStep, GraphBuilder};
