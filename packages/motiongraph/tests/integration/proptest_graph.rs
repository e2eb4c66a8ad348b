//! Property-based tests for graph construction and queries
//!
//! Random small scenes (2-5 objects, 2D, four kept frames) checked against
//! the structural guarantees of the builder and the searcher.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use motiongraph::{GraphBuilder, GraphSearcher, NodeKey, ObjectPair};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;

const FRAMES: [u32; 4] = [0, 10, 20, 30];

// Strategy for one object's locations at every kept frame
fn object_path() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-3.0..3.0f64, -3.0..3.0f64), FRAMES.len())
}

// Strategy for a whole scene: per-object paths
fn scene() -> impl Strategy<Value = SceneBuilder> {
    prop::collection::vec(object_path(), 2..=5).prop_map(|paths| {
        let shapes = ["cube", "sphere", "cylinder"];
        let mut builder = SceneBuilder::new();
        for (oid, path) in paths.iter().enumerate() {
            let oid = oid as u32;
            builder = builder.object(oid, shapes[oid as usize % shapes.len()], "gray");
            for (frame, (x, y)) in FRAMES.iter().zip(path) {
                builder = builder.at(*frame, oid, &[*x, *y]);
            }
        }
        builder
    })
}

fn object_ids(scene: &SceneBuilder) -> Vec<u32> {
    scene.properties().iter().map(|p| p.object_id).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_graph_is_well_formed(scene in scene(), threshold in 0.2..2.0f64) {
        let graph = GraphBuilder::new(fixed_threshold_config(threshold, &FRAMES))
            .build(scene.properties(), scene.trajectories())
            .unwrap();

        assert_unique_keys(&graph);
        assert_edges_forward(&graph);
        // Every object is seeded at the first frame
        for oid in object_ids(&scene) {
            prop_assert!(graph.contains(&NodeKey::object_state(oid, 0)));
        }
    }

    #[test]
    fn prop_build_is_deterministic(scene in scene(), threshold in 0.2..2.0f64) {
        let builder = GraphBuilder::new(fixed_threshold_config(threshold, &FRAMES));
        let a = builder.build(scene.properties(), scene.trajectories()).unwrap();
        let b = builder
            .clone()
            .build(scene.properties(), scene.trajectories())
            .unwrap();

        prop_assert_eq!(
            serde_json::to_string(&a.export()).unwrap(),
            serde_json::to_string(&b.export()).unwrap()
        );
    }

    #[test]
    fn prop_one_node_per_contact_interval(scene in scene(), threshold in 0.2..2.0f64) {
        let (graph, steps) = GraphBuilder::new(fixed_threshold_config(threshold, &FRAMES))
            .build_traced(scene.properties(), scene.trajectories())
            .unwrap();

        let mut active: BTreeSet<ObjectPair> = BTreeSet::new();
        let mut started_total = 0;
        for step in &steps {
            for pair in &step.ended {
                prop_assert!(active.remove(pair), "{} ended without being active", pair);
            }
            for pair in &step.started {
                prop_assert!(!active.contains(pair), "{} started twice", pair);
                let key = NodeKey::collision(pair.low(), pair.high(), step.to_frame);
                prop_assert!(graph.contains(&key), "no collision node {}", key);
                active.insert(*pair);
            }
            started_total += step.started.len();
        }
        prop_assert_eq!(graph.stats().collision_nodes, started_total);
    }

    #[test]
    fn prop_pointers_only_advance(scene in scene(), threshold in 0.2..2.0f64) {
        let (_, steps) = GraphBuilder::new(fixed_threshold_config(threshold, &FRAMES))
            .build_traced(scene.properties(), scene.trajectories())
            .unwrap();

        for window in steps.windows(2) {
            for (oid, frame) in &window[0].pointer_frames {
                prop_assert!(window[1].pointer_frames[oid] >= *frame);
            }
        }
    }

    #[test]
    fn prop_pair_queries_are_symmetric(scene in scene(), threshold in 0.2..2.0f64) {
        let graph = GraphBuilder::new(fixed_threshold_config(threshold, &FRAMES))
            .build(scene.properties(), scene.trajectories())
            .unwrap();
        let searcher = GraphSearcher::new(Arc::new(graph));
        let ids = object_ids(&scene);

        for &a in &ids {
            for &b in &ids {
                prop_assert_eq!(searcher.collisions_between(a, b), searcher.collisions_between(b, a));
            }
        }
    }

    #[test]
    fn prop_timeline_complete_and_sorted(scene in scene(), threshold in 0.2..2.0f64) {
        let graph = GraphBuilder::new(fixed_threshold_config(threshold, &FRAMES))
            .build(scene.properties(), scene.trajectories())
            .unwrap();
        let searcher = GraphSearcher::new(Arc::new(graph));

        for oid in object_ids(&scene) {
            let t = searcher.trajectory(oid);
            assert_timeline_complete(&t);
            prop_assert_eq!(t.summary.total_frames, t.path.len());
            prop_assert_eq!(t.summary.collision_count, t.collisions.len());
            // Partner counts agree with the pair view
            let from_pairs: usize = t
                .summary
                .collision_partners
                .iter()
                .map(|&p| searcher.collisions_between(oid, p).collision_count)
                .sum();
            prop_assert_eq!(from_pairs, t.collisions.len());
        }
    }
}
