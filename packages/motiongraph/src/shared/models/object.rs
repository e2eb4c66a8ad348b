//! Object models
//!
//! Static object descriptions and per-frame motion records.

use serde::{Deserialize, Serialize};

use super::{FrameId, ObjectId};

/// Fallback radius when the shape is unknown (same units as `location`)
const DEFAULT_RADIUS: f64 = 0.25;

/// Static description of one object in a scene
///
/// Immutable once loaded. Extra fields present in annotation files
/// (e.g. orientation hints) are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub object_id: ObjectId,

    #[serde(default)]
    pub shape: String,

    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub material: String,

    /// Explicit object diameter, preferred for radius estimation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,

    /// Object scale, used when `size` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl ObjectProperty {
    pub fn new(
        object_id: ObjectId,
        shape: impl Into<String>,
        color: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Self {
            object_id,
            shape: shape.into(),
            color: color.into(),
            material: material.into(),
            size: None,
            scale: None,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Approximate collision radius
    ///
    /// `size / 2`, then `scale / 2`, then a per-shape constant.
    pub fn approx_radius(&self) -> f64 {
        if let Some(size) = self.size {
            return size / 2.0;
        }
        if let Some(scale) = self.scale {
            return scale / 2.0;
        }
        Shape::from_name(&self.shape).default_radius()
    }
}

/// Shape classification used for radius heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Sphere,
    Cube,
    Cylinder,
    Other,
}

impl Shape {
    /// Classify a shape name (case-insensitive)
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "sphere" => Self::Sphere,
            "cube" => Self::Cube,
            "cylinder" => Self::Cylinder,
            _ => Self::Other,
        }
    }

    pub fn default_radius(&self) -> f64 {
        match self {
            Self::Sphere => 0.22,
            Self::Cube => 0.25,
            Self::Cylinder => 0.22,
            Self::Other => DEFAULT_RADIUS,
        }
    }
}

/// Observed state of one object at one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameObjectState {
    pub object_id: ObjectId,
    pub frame_id: FrameId,
    pub location: Vec<f64>,
    #[serde(default)]
    pub velocity: Vec<f64>,
}

impl FrameObjectState {
    pub fn new(object_id: ObjectId, frame_id: FrameId, location: Vec<f64>) -> Self {
        Self {
            object_id,
            frame_id,
            location,
            velocity: Vec::new(),
        }
    }

    pub fn with_velocity(mut self, velocity: Vec<f64>) -> Self {
        self.velocity = velocity;
        self
    }
}
