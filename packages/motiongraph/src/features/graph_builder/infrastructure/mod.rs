// Graph Builder Infrastructure
//
// Collision sampling, the construction accumulator, and the builder that
// folds over kept-frame pairs.

pub mod accumulator;
pub mod builder;
pub mod collision;

pub use accumulator::{ConstructionState, FrameStep};
pub use builder::GraphBuilder;
pub use collision::{CollisionSampler, FrameObjects, ThresholdTable};
