// Graph Searcher - trajectory and pairwise collision queries
//
// Read-only over an immutable SceneGraph. The searcher owns an Arc to the
// graph plus a SearchIndex, so clones are cheap and queries can run from
// many threads at once.

use std::sync::Arc;
use tracing::debug;

use super::index::SearchIndex;
use crate::features::graph_builder::{CollisionNode, SceneGraph};
use crate::features::graph_search::domain::{
    CollisionEntry, CollisionPartner, EntryKind, ObjectTrajectory, PairCollisionEntry,
    PairCollisionResult, PathEntry, TimelineEntry, TrajectorySummary,
};
use crate::shared::models::{ObjectId, ObjectPair};

#[derive(Debug, Clone)]
pub struct GraphSearcher {
    graph: Arc<SceneGraph>,
    index: Arc<SearchIndex>,
}

impl GraphSearcher {
    pub fn new(graph: Arc<SceneGraph>) -> Self {
        let index = Arc::new(SearchIndex::build(&graph));
        Self { graph, index }
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Chronological path and collisions of one object
    pub fn trajectory(&self, object_id: ObjectId) -> ObjectTrajectory {
        let path: Vec<PathEntry> = self
            .index
            .states_of(object_id)
            .iter()
            .filter_map(|&idx| self.graph.node_at(idx)?.as_object_state())
            .map(|n| PathEntry {
                frame: n.frame,
                node_id: n.key(),
                location: n.location.clone(),
                velocity: n.velocity.clone(),
                kind: EntryKind::ObjectPosition,
            })
            .collect();

        let collisions: Vec<CollisionEntry> = self
            .index
            .collisions_of(object_id)
            .iter()
            .filter_map(|&idx| self.graph.node_at(idx)?.as_collision())
            .filter_map(|n| collision_entry(n, object_id))
            .collect();

        if path.is_empty() && collisions.is_empty() {
            debug!(object_id, "object not found in graph");
            return ObjectTrajectory::empty(object_id);
        }

        let mut partners: Vec<ObjectId> = Vec::new();
        for entry in &collisions {
            let partner = entry.collision_with.object_id;
            if !partners.contains(&partner) {
                partners.push(partner);
            }
        }

        let summary = TrajectorySummary {
            total_frames: path.len(),
            collision_count: collisions.len(),
            collision_partners: partners,
        };

        // Stable sort over path ++ collisions: states first at equal frames
        let mut complete_timeline: Vec<TimelineEntry> = path
            .iter()
            .cloned()
            .map(TimelineEntry::Position)
            .chain(collisions.iter().cloned().map(TimelineEntry::Collision))
            .collect();
        complete_timeline.sort_by_key(TimelineEntry::frame);

        ObjectTrajectory {
            object_id,
            path,
            collisions,
            summary,
            complete_timeline,
        }
    }

    /// Every collision between `a` and `b`, ascending by frame
    ///
    /// Symmetric: `(a, b)` and `(b, a)` return identical results.
    pub fn collisions_between(&self, a: ObjectId, b: ObjectId) -> PairCollisionResult {
        let pair = ObjectPair::new(a, b);
        let collisions: Vec<PairCollisionEntry> = self
            .index
            .collisions_between(&pair)
            .iter()
            .filter_map(|&idx| self.graph.node_at(idx)?.as_collision())
            .map(|n| PairCollisionEntry {
                frame: n.frame,
                node_id: n.key(),
                colors: n.colors.clone(),
                shapes: n.shapes.clone(),
            })
            .collect();

        PairCollisionResult {
            object_pair: pair.as_array(),
            collision_count: collisions.len(),
            collisions,
        }
    }
}

impl From<SceneGraph> for GraphSearcher {
    fn from(graph: SceneGraph) -> Self {
        Self::new(Arc::new(graph))
    }
}

/// Partner attributes come from the slot opposite the queried object
fn collision_entry(node: &CollisionNode, object_id: ObjectId) -> Option<CollisionEntry> {
    let slot = node.pair.position_of(object_id)?;
    let partner_id = node.pair.other(object_id)?;
    let (color, shape) = node.attributes_of(1 - slot)?;

    Some(CollisionEntry {
        frame: node.frame,
        node_id: node.key(),
        collision_with: CollisionPartner {
            object_id: partner_id,
            color: color.to_string(),
            shape: shape.to_string(),
        },
        kind: EntryKind::Collision,
    })
}
