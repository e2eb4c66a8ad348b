//! Configuration I/O (YAML)
//!
//! Defines YAML schema types. Loading/export lives in build_config.rs.

use serde::{Deserialize, Serialize};

use crate::shared::models::FrameId;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<BuildOverrides>,
}

/// Per-field overrides on top of the preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision_scale: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interp_steps: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_epsilon: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kept_frames: Option<Vec<FrameId>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_pairs: Option<bool>,
}
