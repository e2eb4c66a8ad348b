// Scene Graph
//
// petgraph DiGraph + key → NodeIndex map. Insertion order is preserved by
// DiGraph, so iteration (and export) is deterministic for a given build.

use ahash::AHashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;

use super::{GraphBuildError, NodeKey, SceneNode, TransitionEdge};
use crate::shared::models::FrameId;

/// Directed spatio-temporal graph of one scene
///
/// Immutable once returned by the builder; share it behind an `Arc` for
/// concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    graph: DiGraph<SceneNode, TransitionEdge>,
    key_to_node: AHashMap<NodeKey, NodeIndex>,
    kept_frames: Vec<FrameId>,
}

impl SceneGraph {
    pub(crate) fn new(kept_frames: Vec<FrameId>) -> Self {
        Self {
            graph: DiGraph::new(),
            key_to_node: AHashMap::new(),
            kept_frames,
        }
    }

    /// Insert a node, rejecting a second construction of the same key
    pub(crate) fn add_node(&mut self, node: SceneNode) -> Result<NodeIndex, GraphBuildError> {
        let key = node.key();
        if self.key_to_node.contains_key(&key) {
            return Err(GraphBuildError::DuplicateNode(key));
        }
        let idx = self.graph.add_node(node);
        self.key_to_node.insert(key, idx);
        Ok(idx)
    }

    /// Add (or relabel) the edge `from → to`
    pub(crate) fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, frame: FrameId) {
        self.graph.update_edge(from, to, TransitionEdge { frame });
    }

    /// Kept frames that were present in the data, ascending
    pub fn kept_frames(&self) -> &[FrameId] {
        &self.kept_frames
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.key_to_node.contains_key(key)
    }

    pub fn node(&self, key: &NodeKey) -> Option<&SceneNode> {
        self.key_to_node
            .get(key)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn index_of(&self, key: &NodeKey) -> Option<NodeIndex> {
        self.key_to_node.get(key).copied()
    }

    pub fn node_at(&self, idx: NodeIndex) -> Option<&SceneNode> {
        self.graph.node_weight(idx)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &SceneNode> + '_ {
        self.graph.node_weights()
    }

    /// Nodes with their indices, in insertion order
    pub fn indexed_nodes(&self) -> impl Iterator<Item = (NodeIndex, &SceneNode)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Edges as `(source, target, frame)`, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (NodeKey, NodeKey, FrameId)> + '_ {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].key(),
                self.graph[e.target()].key(),
                e.weight().frame,
            )
        })
    }

    pub fn successors(&self, key: &NodeKey) -> Vec<&SceneNode> {
        self.neighbors(key, Direction::Outgoing)
    }

    pub fn predecessors(&self, key: &NodeKey) -> Vec<&SceneNode> {
        self.neighbors(key, Direction::Incoming)
    }

    fn neighbors(&self, key: &NodeKey, dir: Direction) -> Vec<&SceneNode> {
        let Some(&idx) = self.key_to_node.get(key) else {
            return Vec::new();
        };
        let mut out: Vec<&SceneNode> = self
            .graph
            .neighbors_directed(idx, dir)
            .map(|n| &self.graph[n])
            .collect();
        // petgraph yields neighbors newest-first
        out.reverse();
        out
    }

    pub fn stats(&self) -> GraphStats {
        let collision_nodes = self.nodes().filter(|n| n.is_collision()).count();
        GraphStats {
            total_nodes: self.node_count(),
            total_edges: self.edge_count(),
            object_nodes: self.node_count() - collision_nodes,
            collision_nodes,
            kept_frames: self.kept_frames.clone(),
        }
    }

    /// Node-link document for serialization or visualization
    pub fn export(&self) -> GraphExport<'_> {
        GraphExport {
            directed: true,
            nodes: self
                .nodes()
                .map(|node| ExportNode {
                    id: node.key(),
                    node,
                })
                .collect(),
            links: self
                .edges()
                .map(|(source, target, frame)| ExportLink {
                    source,
                    target,
                    frame,
                })
                .collect(),
        }
    }
}

/// Graph statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub object_nodes: usize,
    pub collision_nodes: usize,
    pub kept_frames: Vec<FrameId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphExport<'g> {
    pub directed: bool,
    pub nodes: Vec<ExportNode<'g>>,
    pub links: Vec<ExportLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportNode<'g> {
    pub id: NodeKey,
    #[serde(flatten)]
    pub node: &'g SceneNode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportLink {
    pub source: NodeKey,
    pub target: NodeKey,
    pub frame: FrameId,
}
