// Construction Accumulator
//
// State threaded through the ordered fold over consecutive kept-frame pairs:
// - current-node pointer per object (only ever advances forward in frame order)
// - active collision set (pairs in contact as of the last processed pair)

use ahash::AHashMap;
use petgraph::graph::NodeIndex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::shared::models::{FrameId, ObjectId, ObjectPair};

/// Fold accumulator for graph construction
#[derive(Debug, Clone, Default)]
pub struct ConstructionState {
    current: AHashMap<ObjectId, NodeIndex>,
    active: BTreeSet<ObjectPair>,
}

impl ConstructionState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current_node(&self, object_id: ObjectId) -> Option<NodeIndex> {
        self.current.get(&object_id).copied()
    }

    pub(crate) fn advance(&mut self, object_id: ObjectId, node: NodeIndex) {
        self.current.insert(object_id, node);
    }

    pub fn pointers(&self) -> impl Iterator<Item = (ObjectId, NodeIndex)> + '_ {
        self.current.iter().map(|(&oid, &idx)| (oid, idx))
    }

    pub fn active_collisions(&self) -> &BTreeSet<ObjectPair> {
        &self.active
    }

    pub fn is_active(&self, pair: &ObjectPair) -> bool {
        self.active.contains(pair)
    }

    pub(crate) fn activate(&mut self, pair: ObjectPair) {
        self.active.insert(pair);
    }

    /// Drop active pairs missing from `sampled`; returns the ended pairs
    pub(crate) fn retain_active(&mut self, sampled: &BTreeSet<ObjectPair>) -> Vec<ObjectPair> {
        let ended: Vec<ObjectPair> = self.active.difference(sampled).copied().collect();
        for pair in &ended {
            self.active.remove(pair);
        }
        ended
    }

    pub fn tracked_objects(&self) -> usize {
        self.current.len()
    }
}

/// What one frame-pair step did
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameStep {
    pub from_frame: FrameId,
    pub to_frame: FrameId,
    /// Pairs that entered contact (one collision node each)
    pub started: Vec<ObjectPair>,
    /// Pairs that left contact
    pub ended: Vec<ObjectPair>,
    pub state_nodes_created: usize,
    pub state_nodes_collapsed: usize,
    /// Frame of each object's current-node pointer after the step
    pub pointer_frames: BTreeMap<ObjectId, FrameId>,
}
