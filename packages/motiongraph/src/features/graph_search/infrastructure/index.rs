// Search Index - built once per graph
//
// Object id → state nodes, object id → collision nodes, pair → collision
// nodes. Each list is sorted by frame with a stable sort, so nodes sharing a
// frame keep graph insertion order. Turns each query from O(nodes) into
// O(matches).

use ahash::AHashMap;
use petgraph::graph::NodeIndex;

use crate::features::graph_builder::{SceneGraph, SceneNode};
use crate::shared::models::{ObjectId, ObjectPair};

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    states_by_object: AHashMap<ObjectId, Vec<NodeIndex>>,
    collisions_by_object: AHashMap<ObjectId, Vec<NodeIndex>>,
    collisions_by_pair: AHashMap<ObjectPair, Vec<NodeIndex>>,
}

impl SearchIndex {
    pub fn build(graph: &SceneGraph) -> Self {
        let mut index = Self::default();

        for (idx, node) in graph.indexed_nodes() {
            match node {
                SceneNode::ObjectState(n) => {
                    index
                        .states_by_object
                        .entry(n.object_id())
                        .or_default()
                        .push(idx);
                }
                SceneNode::Collision(n) => {
                    for oid in n.pair.as_array() {
                        index.collisions_by_object.entry(oid).or_default().push(idx);
                    }
                    index.collisions_by_pair.entry(n.pair).or_default().push(idx);
                }
            }
        }

        let frame_of = |idx: &NodeIndex| graph.node_at(*idx).map(SceneNode::frame);
        for list in index
            .states_by_object
            .values_mut()
            .chain(index.collisions_by_object.values_mut())
            .chain(index.collisions_by_pair.values_mut())
        {
            list.sort_by_key(frame_of);
        }

        index
    }

    pub fn states_of(&self, object_id: ObjectId) -> &[NodeIndex] {
        self.states_by_object
            .get(&object_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn collisions_of(&self, object_id: ObjectId) -> &[NodeIndex] {
        self.collisions_by_object
            .get(&object_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn collisions_between(&self, pair: &ObjectPair) -> &[NodeIndex] {
        self.collisions_by_pair
            .get(pair)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Objects with at least one node
    pub fn object_count(&self) -> usize {
        let mut ids: Vec<ObjectId> = self
            .states_by_object
            .keys()
            .chain(self.collisions_by_object.keys())
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}
