//! Error types for motiongraph
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::annotation::AnnotationError;
use crate::features::graph_builder::GraphBuildError;

/// Main error type for motiongraph operations
#[derive(Debug, Error)]
pub enum MotionGraphError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Annotation loading error
    #[error("Annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    /// Graph construction error
    #[error("Graph build error: {0}")]
    Build(#[from] GraphBuildError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for motiongraph operations
pub type Result<T> = std::result::Result<T, MotionGraphError>;
