//! Scene annotation documents
//!
//! Holds object properties and per-frame object states already parsed from
//! the upstream annotation format (`object_property` + `motion_trajectory`).

pub mod domain;
pub mod json_loader;

pub use domain::{Annotation, AnnotationError, ObjectSnapshot, TrajectoryTable};
