//! Custom assertions for scene graphs and query results

use motiongraph::{ObjectTrajectory, SceneGraph};
use std::collections::HashSet;

/// Every node key appears once
pub fn assert_unique_keys(graph: &SceneGraph) {
    let mut seen = HashSet::new();
    for node in graph.nodes() {
        assert!(seen.insert(node.key()), "duplicate node {}", node.key());
    }
}

/// Every edge points forward (or sideways) in time
pub fn assert_edges_forward(graph: &SceneGraph) {
    for (src, dst, frame) in graph.edges() {
        assert!(
            src.frame() <= dst.frame(),
            "edge {} -> {} goes backwards",
            src,
            dst
        );
        assert_eq!(frame, dst.frame(), "edge label must be destination frame");
    }
}

/// Timeline holds every path and collision entry, in non-decreasing frame order
pub fn assert_timeline_complete(trajectory: &ObjectTrajectory) {
    assert_eq!(
        trajectory.complete_timeline.len(),
        trajectory.path.len() + trajectory.collisions.len(),
        "timeline for object {} is missing entries",
        trajectory.object_id
    );
    let frames: Vec<_> = trajectory
        .complete_timeline
        .iter()
        .map(|e| e.frame())
        .collect();
    assert!(
        frames.windows(2).all(|w| w[0] <= w[1]),
        "timeline frames not sorted: {:?}",
        frames
    );
}
