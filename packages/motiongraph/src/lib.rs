/*
 * Motion Graph - Spatio-temporal scene graphs
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (ObjectProperty, FrameObjectState, ObjectPair) + geometry
 * - features/    : Vertical slices (annotation → graph_builder → graph_search)
 * - config/      : Build configuration (presets, YAML, validation)
 *
 * Data flows one way:
 *   per-frame records → GraphBuilder → SceneGraph → GraphSearcher → query results
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (annotation, graph_builder, graph_search)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{GraphBuildConfig, Preset};
pub use errors::{MotionGraphError, Result};
pub use features::annotation::Annotation;
pub use features::graph_builder::{GraphBuildError, GraphBuilder, NodeKey, SceneGraph, SceneNode};
pub use features::graph_search::{
    GraphSearcher, ObjectTrajectory, PairCollisionResult, SceneSearchTool,
};
pub use shared::models::{FrameId, FrameObjectState, ObjectId, ObjectPair, ObjectProperty};
