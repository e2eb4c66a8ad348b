//! Feature modules
//!
//! - annotation    : per-scene annotation documents (object properties + motion)
//! - graph_builder : spatio-temporal graph with interpolated collision events
//! - graph_search  : trajectory and pairwise collision queries over a built graph

pub mod annotation;
pub mod graph_builder;
pub mod graph_search;
