//! Graph Builder UseCase

use crate::features::annotation::Annotation;
use crate::features::graph_builder::domain::{GraphBuildError, SceneGraph};
use crate::features::graph_builder::infrastructure::GraphBuilder;

/// Graph Builder UseCase Trait
///
/// Seam between scene-level services and the construction algorithm.
pub trait GraphBuilderUseCase: Send + Sync {
    fn build_scene(&self, annotation: &Annotation) -> Result<SceneGraph, GraphBuildError>;
}

impl GraphBuilderUseCase for GraphBuilder {
    fn build_scene(&self, annotation: &Annotation) -> Result<SceneGraph, GraphBuildError> {
        self.build_from_annotation(annotation)
    }
}
