//! Graph build configuration
//!
//! Progressive disclosure, like the rest of the config system:
//! - Preset: `GraphBuildConfig::preset(Preset::Tolerant)`
//! - Override: `.interp_steps(12).base_threshold(0.4)`
//! - YAML: `GraphBuildConfig::from_yaml("scene.yaml")?`

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::error::{ConfigError, ConfigResult};
use super::io::{BuildOverrides, ConfigExportV1};
use super::preset::Preset;
use super::validation::Validatable;
use crate::shared::models::FrameId;

/// Frames materialized in the graph unless configured otherwise
pub const DEFAULT_KEPT_FRAMES: [FrameId; 8] = [0, 15, 20, 25, 40, 45, 75, 80];

/// Default minimum movement before a new object-state node is created
pub const DEFAULT_POSITION_EPSILON: f64 = 1e-4;

const SUPPORTED_VERSIONS: [u32; 1] = [1];

/// Graph builder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphBuildConfig {
    preset: Preset,

    /// Multiplier on the radius-sum collision threshold (0, 100]
    pub collision_scale: f64,

    /// Fixed collision threshold for every pair (overrides radius-based)
    pub base_threshold: Option<f64>,

    /// Interpolation samples per consecutive kept-frame pair (1..=1000)
    pub interp_steps: usize,

    /// Minimum movement to avoid collapsing into the previous node
    pub position_epsilon: f64,

    /// Sparse, strictly increasing set of frames to materialize
    pub kept_frames: BTreeSet<FrameId>,

    /// Run the pairwise distance scan on rayon (needs the `parallel` feature)
    pub parallel_pairs: bool,
}

impl GraphBuildConfig {
    /// Start from a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            collision_scale: preset.collision_scale(),
            base_threshold: None,
            interp_steps: preset.interp_steps(),
            position_epsilon: DEFAULT_POSITION_EPSILON,
            kept_frames: DEFAULT_KEPT_FRAMES.into_iter().collect(),
            parallel_pairs: true,
        }
    }

    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    pub fn collision_scale(mut self, scale: f64) -> Self {
        self.collision_scale = scale;
        self
    }

    pub fn base_threshold(mut self, threshold: impl Into<Option<f64>>) -> Self {
        self.base_threshold = threshold.into();
        self
    }

    pub fn interp_steps(mut self, steps: usize) -> Self {
        self.interp_steps = steps;
        self
    }

    pub fn position_epsilon(mut self, eps: f64) -> Self {
        self.position_epsilon = eps;
        self
    }

    pub fn kept_frames(mut self, frames: impl IntoIterator<Item = FrameId>) -> Self {
        self.kept_frames = frames.into_iter().collect();
        self
    }

    pub fn parallel_pairs(mut self, enabled: bool) -> Self {
        self.parallel_pairs = enabled;
        self
    }

    /// Validate and return self
    pub fn build(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.interp_steps == 0 || self.interp_steps > 1000 {
            return Err(ConfigError::range_with_hint(
                "interp_steps",
                self.interp_steps,
                1,
                1000,
                "At least one interpolation sample per frame-pair is required",
            ));
        }

        if !self.collision_scale.is_finite()
            || self.collision_scale <= 0.0
            || self.collision_scale > 100.0
        {
            return Err(ConfigError::range_with_hint(
                "collision_scale",
                self.collision_scale,
                "0 (exclusive)",
                100,
                "Scale multiplies the radius sum and must be positive",
            ));
        }

        if !self.position_epsilon.is_finite() || self.position_epsilon < 0.0 {
            return Err(ConfigError::range_with_hint(
                "position_epsilon",
                self.position_epsilon,
                0,
                "inf",
                "Use 0 to disable position de-duplication",
            ));
        }

        if let Some(threshold) = self.base_threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(ConfigError::range_with_hint(
                    "base_threshold",
                    threshold,
                    "0 (exclusive)",
                    "inf",
                    "Omit base_threshold to use radius-based thresholds",
                ));
            }
        }

        if self.kept_frames.is_empty() {
            return Err(ConfigError::EmptyKeptFrames);
        }

        Ok(())
    }

    /// Load from a YAML file (schema v1)
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        if !SUPPORTED_VERSIONS.contains(&export.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = Self::preset(preset);
        if let Some(overrides) = export.overrides {
            config.apply_overrides(overrides);
        }

        config.build()
    }

    /// Export as YAML (schema v1, every field as an override)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: 1,
            preset: self.preset.to_string(),
            overrides: Some(BuildOverrides {
                collision_scale: Some(self.collision_scale),
                base_threshold: self.base_threshold,
                interp_steps: Some(self.interp_steps),
                position_epsilon: Some(self.position_epsilon),
                kept_frames: Some(self.kept_frames.iter().copied().collect()),
                parallel_pairs: Some(self.parallel_pairs),
            }),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    fn apply_overrides(&mut self, overrides: BuildOverrides) {
        if let Some(scale) = overrides.collision_scale {
            self.collision_scale = scale;
        }
        if overrides.base_threshold.is_some() {
            self.base_threshold = overrides.base_threshold;
        }
        if let Some(steps) = overrides.interp_steps {
            self.interp_steps = steps;
        }
        if let Some(eps) = overrides.position_epsilon {
            self.position_epsilon = eps;
        }
        if let Some(frames) = overrides.kept_frames {
            self.kept_frames = frames.into_iter().collect();
        }
        if let Some(parallel) = overrides.parallel_pairs {
            self.parallel_pairs = parallel;
        }
    }

    /// Human-readable one-line summary
    pub fn describe(&self) -> String {
        let threshold = match self.base_threshold {
            Some(t) => format!("fixed {}", t),
            None => format!("radius-sum x{}", self.collision_scale),
        };
        format!(
            "preset={} threshold={} interp_steps={} eps={} kept_frames={:?}",
            self.preset, threshold, self.interp_steps, self.position_epsilon, self.kept_frames
        )
    }
}

impl Default for GraphBuildConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl Validatable for GraphBuildConfig {
    fn validate(&self) -> ConfigResult<()> {
        GraphBuildConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "GraphBuildConfig"
    }
}
