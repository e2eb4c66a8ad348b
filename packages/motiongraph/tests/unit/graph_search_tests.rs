// Graph Search Tests
//
// Trajectory assembly, pairwise collision queries, not-found handling and
// concurrent read access.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use motiongraph::features::graph_search::{EntryKind, TimelineEntry};
use motiongraph::{GraphBuilder, GraphSearcher, NodeKey};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn bounce_searcher() -> GraphSearcher {
    let scene = bounce_scene();
    let graph = GraphBuilder::new(fixed_threshold_config(1.0, &BOUNCE_FRAMES))
        .build(scene.properties(), scene.trajectories())
        .unwrap();
    GraphSearcher::new(Arc::new(graph))
}

// ============================================================
// Trajectory
// ============================================================

#[test]
fn test_trajectory_path_and_collisions() {
    let t = bounce_searcher().trajectory(0);

    let path: Vec<u32> = t.path.iter().map(|p| p.frame).collect();
    let collisions: Vec<u32> = t.collisions.iter().map(|c| c.frame).collect();
    assert_eq!(path, vec![0, 10, 40]);
    assert_eq!(collisions, vec![10, 40]);

    assert_eq!(t.summary.total_frames, 3);
    assert_eq!(t.summary.collision_count, 2);
    // Same partner twice, listed once
    assert_eq!(t.summary.collision_partners, vec![1]);
}

#[test]
fn test_trajectory_node_ids_and_locations() {
    let t = bounce_searcher().trajectory(1);

    assert_eq!(t.path[0].node_id, NodeKey::object_state(1, 0));
    assert_eq!(t.path[0].location, vec![3.0, 0.0]);
    assert_eq!(t.path.len(), 5);
    assert!(t.path.iter().all(|p| p.kind == EntryKind::ObjectPosition));
    assert_eq!(t.collisions[1].node_id, NodeKey::collision(0, 1, 40));
    assert_eq!(t.collisions[1].collision_with.object_id, 0);
    assert_eq!(t.collisions[1].collision_with.color, "red");
}

#[test]
fn test_timeline_is_complete_and_ordered() {
    let searcher = bounce_searcher();
    for oid in [0, 1] {
        assert_timeline_complete(&searcher.trajectory(oid));
    }

    let order: Vec<(u32, EntryKind)> = searcher
        .trajectory(0)
        .complete_timeline
        .iter()
        .map(|e| (e.frame(), e.kind()))
        .collect();
    assert_eq!(
        order,
        vec![
            (0, EntryKind::ObjectPosition),
            (10, EntryKind::ObjectPosition),
            (10, EntryKind::Collision),
            (40, EntryKind::ObjectPosition),
            (40, EntryKind::Collision),
        ]
    );
}

#[test]
fn test_timeline_entries_match_sources() {
    let t = bounce_searcher().trajectory(0);
    let positions: Vec<_> = t
        .complete_timeline
        .iter()
        .filter_map(|e| match e {
            TimelineEntry::Position(p) => Some(p.clone()),
            TimelineEntry::Collision(_) => None,
        })
        .collect();
    assert_eq!(positions, t.path);
}

#[test]
fn test_absent_object_returns_empty_trajectory() {
    let t = bounce_searcher().trajectory(42);

    assert_eq!(t.object_id, 42);
    assert!(t.path.is_empty());
    assert!(t.collisions.is_empty());
    assert!(t.complete_timeline.is_empty());
    assert_eq!(t.summary.collision_count, 0);
    assert!(t.summary.collision_partners.is_empty());
}

// ============================================================
// Pair Queries
// ============================================================

#[test]
fn test_pair_query_lists_every_interval() {
    let result = bounce_searcher().collisions_between(0, 1);

    assert_eq!(result.collision_count, 2);
    let frames: Vec<u32> = result.collisions.iter().map(|c| c.frame).collect();
    assert_eq!(frames, vec![10, 40]);
    assert_eq!(result.collisions[0].colors, ["red".to_string(), "blue".to_string()]);
    assert_eq!(result.collisions[0].shapes, ["cube".to_string(), "sphere".to_string()]);
}

#[test]
fn test_pair_query_is_symmetric() {
    let searcher = bounce_searcher();
    assert_eq!(searcher.collisions_between(0, 1), searcher.collisions_between(1, 0));
}

#[test]
fn test_pair_without_collisions_is_empty_not_error() {
    let result = bounce_searcher().collisions_between(3, 7);

    assert_eq!(result.object_pair, [3, 7]);
    assert_eq!(result.collision_count, 0);
    assert!(result.collisions.is_empty());
    assert_eq!(result.first_frame(), None);
}

#[test]
fn test_pair_result_serializes_expected_fields() {
    let result = bounce_searcher().collisions_between(1, 0);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["object_pair"], serde_json::json!([0, 1]));
    assert_eq!(value["collision_count"], 2);
    assert_eq!(value["collisions"][1]["node_id"], "collision_0_1_f40");
}

// ============================================================
// Concurrency
// ============================================================

#[test]
fn test_concurrent_queries_agree_with_sequential() {
    let searcher = bounce_searcher();
    let expected: Vec<_> = [0, 1, 2].iter().map(|&o| searcher.trajectory(o)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let local = searcher.clone();
                scope.spawn(move || {
                    [0, 1, 2]
                        .iter()
                        .map(|&o| local.trajectory(o))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_searcher_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphSearcher>();
}
