//! Build Configuration System
//!
//! Two-tier configuration for graph construction:
//! - Level 1: Preset (`strict`, `tolerant`)
//! - Level 2: Field overrides, via builder methods or a versioned YAML file
//!
//! # Examples
//!
//! ```rust,ignore
//! use motiongraph::config::{GraphBuildConfig, Preset};
//!
//! let config = GraphBuildConfig::preset(Preset::Tolerant)
//!     .interp_steps(12)
//!     .build()?;
//!
//! let config = GraphBuildConfig::from_yaml("scene.yaml")?;
//! ```

pub mod build_config;
pub mod error;
pub mod io;
pub mod preset;
pub mod validation;

// Re-exports
pub use build_config::{GraphBuildConfig, DEFAULT_KEPT_FRAMES, DEFAULT_POSITION_EPSILON};
pub use error::{ConfigError, ConfigResult};
pub use io::{BuildOverrides, ConfigExportV1};
pub use preset::Preset;
pub use validation::{ConfigValidator, Validatable};
