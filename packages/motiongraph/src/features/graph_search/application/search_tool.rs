//! Scene Search Tool
//!
//! Facade for callers that want JSON documents rather than typed results:
//! one annotation in, one graph built, string answers out.

use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::config::{GraphBuildConfig, Preset};
use crate::features::annotation::Annotation;
use crate::features::graph_builder::{
    GraphBuildError, GraphBuilder, GraphBuilderUseCase, SceneGraph,
};
use crate::features::graph_search::domain::{ObjectTrajectory, PairCollisionResult};
use crate::features::graph_search::infrastructure::GraphSearcher;
use crate::shared::models::ObjectId;

/// Scene-level search over one annotation
#[derive(Debug, Clone)]
pub struct SceneSearchTool {
    annotation: Arc<Annotation>,
    searcher: GraphSearcher,
}

impl SceneSearchTool {
    /// Build the graph with `config`
    pub fn new(annotation: Annotation, config: GraphBuildConfig) -> Result<Self, GraphBuildError> {
        Self::with_builder(&GraphBuilder::new(config), annotation)
    }

    /// Build with the tolerant preset
    pub fn tolerant(annotation: Annotation) -> Result<Self, GraphBuildError> {
        Self::new(annotation, GraphBuildConfig::preset(Preset::Tolerant))
    }

    pub fn with_builder(
        builder: &dyn GraphBuilderUseCase,
        annotation: Annotation,
    ) -> Result<Self, GraphBuildError> {
        let graph = builder.build_scene(&annotation)?;
        Ok(Self {
            annotation: Arc::new(annotation),
            searcher: GraphSearcher::new(Arc::new(graph)),
        })
    }

    /// Load an annotation file and build its graph
    pub fn from_path(path: impl AsRef<Path>, config: GraphBuildConfig) -> crate::Result<Self> {
        let annotation = Annotation::from_path(path)?;
        Ok(Self::new(annotation, config)?)
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    pub fn graph(&self) -> &SceneGraph {
        self.searcher.graph()
    }

    pub fn searcher(&self) -> &GraphSearcher {
        &self.searcher
    }

    pub fn search_object_trajectory(&self, object_id: ObjectId) -> ObjectTrajectory {
        self.searcher.trajectory(object_id)
    }

    pub fn search_collision_between(&self, a: ObjectId, b: ObjectId) -> PairCollisionResult {
        self.searcher.collisions_between(a, b)
    }

    /// Trajectory of one object as pretty JSON
    pub fn search_object_trajectory_json(&self, object_id: ObjectId) -> String {
        to_json(&self.search_object_trajectory(object_id))
    }

    /// Collisions between two objects as pretty JSON
    pub fn search_collision_between_json(&self, a: ObjectId, b: ObjectId) -> String {
        to_json(&self.search_collision_between(a, b))
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
}
