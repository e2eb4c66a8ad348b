//! Canned scenes and configurations

use super::builders::SceneBuilder;
use motiongraph::{FrameId, GraphBuildConfig};

/// Fixed threshold, 4 interpolation samples, given kept frames
pub fn fixed_threshold_config(threshold: f64, frames: &[FrameId]) -> GraphBuildConfig {
    GraphBuildConfig::default()
        .kept_frames(frames.iter().copied())
        .base_threshold(threshold)
        .interp_steps(4)
}

/// Object 0 fixed at the origin; object 1 moves (5,0) → (1,0) → (0,0)
/// over frames 0, 10, 20
pub fn approach_scene() -> SceneBuilder {
    SceneBuilder::new()
        .object(0, "cube", "red")
        .object(1, "sphere", "blue")
        .path(0, &[(0, &[0.0, 0.0]), (10, &[0.0, 0.0]), (20, &[0.0, 0.0])])
        .path(1, &[(0, &[5.0, 0.0]), (10, &[1.0, 0.0]), (20, &[0.0, 0.0])])
}

/// Object 1 touches object 0 at frame 10, stays in contact through 20,
/// separates at 30, touches again at 40
pub fn bounce_scene() -> SceneBuilder {
    SceneBuilder::new()
        .object(0, "cube", "red")
        .object(1, "sphere", "blue")
        .path(
            0,
            &[
                (0, &[0.0, 0.0]),
                (10, &[0.0, 0.0]),
                (20, &[0.0, 0.0]),
                (30, &[0.0, 0.0]),
                (40, &[0.0, 0.0]),
            ],
        )
        .path(
            1,
            &[
                (0, &[3.0, 0.0]),
                (10, &[0.5, 0.0]),
                (20, &[0.4, 0.0]),
                (30, &[3.0, 0.0]),
                (40, &[0.5, 0.0]),
            ],
        )
}

pub const BOUNCE_FRAMES: [FrameId; 5] = [0, 10, 20, 30, 40];

/// Three objects on a line: 0 and 1 collide at frame 10, 2 stays far away
pub fn three_body_scene() -> SceneBuilder {
    SceneBuilder::new()
        .object(0, "cube", "red")
        .object(1, "sphere", "blue")
        .object(2, "cylinder", "green")
        .path(0, &[(0, &[0.0, 0.0, 0.0]), (10, &[1.0, 0.0, 0.0])])
        .path(1, &[(0, &[4.0, 0.0, 0.0]), (10, &[1.2, 0.0, 0.0])])
        .path(2, &[(0, &[9.0, 9.0, 0.0]), (10, &[9.0, 9.0, 0.0])])
}

/// Annotation document in the on-disk JSON shape
pub const ANNOTATION_JSON: &str = r#"{
  "object_property": [
    {"object_id": 0, "shape": "cube", "color": "gray", "material": "metal"},
    {"object_id": 1, "shape": "sphere", "color": "cyan", "material": "rubber", "size": 0.4}
  ],
  "motion_trajectory": [
    {"frame_id": 0, "objects": [
      {"object_id": 0, "location": [0.0, 0.0, 0.0], "velocity": [0.0, 0.0, 0.0]},
      {"object_id": 1, "location": [3.0, 0.0, 0.0], "velocity": [-1.0, 0.0, 0.0]}
    ]},
    {"frame_id": 5, "objects": [
      {"object_id": 0, "location": [0.0, 0.0, 0.0]},
      {"object_id": 1, "location": [2.5, 0.0, 0.0]}
    ]},
    {"frame_id": 15, "objects": [
      {"object_id": 0, "location": [0.0, 0.0, 0.0], "velocity": [0.0, 0.0, 0.0]},
      {"object_id": 1, "location": [0.3, 0.0, 0.0], "velocity": [-1.0, 0.0, 0.0]}
    ]}
  ]
}"#;
