// Graph Builder - Main Entry Point
//
// Builds the spatio-temporal SceneGraph in one pass:
// 1. Validate input (kept frames present, property records, vector dimensions)
// 2. Seed one object-state node per object at the first kept frame
// 3. Fold over consecutive kept-frame pairs, threading ConstructionState:
//    a. sample interpolated collisions
//    b. end/start collisions (one node per contact interval)
//    c. advance object-state pointers, collapsing near-static positions
//
// Construction is sequential over frame pairs; only the pairwise distance
// scan inside one interpolation step runs in parallel.

use ahash::AHashMap;
use std::collections::BTreeMap;
use tracing::{debug, info, trace, warn};

use super::accumulator::{ConstructionState, FrameStep};
use super::collision::{CollisionSampler, FrameObjects, ThresholdTable};
use crate::config::{ConfigValidator, GraphBuildConfig};
use crate::features::annotation::{Annotation, TrajectoryTable};
use crate::features::graph_builder::domain::{
    CollisionNode, GraphBuildError, ObjectStateNode, SceneGraph, SceneNode,
};
use crate::shared::geometry::distance;
use crate::shared::models::{FrameId, FrameObjectState, ObjectId, ObjectProperty};

// ============================================================
// Scene Context (validated, read-only input view)
// ============================================================

struct SceneContext<'a> {
    properties: AHashMap<ObjectId, &'a ObjectProperty>,
    frames: Vec<(FrameId, FrameObjects<'a>)>,
    thresholds: ThresholdTable,
}

impl<'a> SceneContext<'a> {
    fn property(
        &self,
        object_id: ObjectId,
        frame_id: FrameId,
    ) -> Result<&'a ObjectProperty, GraphBuildError> {
        self.properties
            .get(&object_id)
            .copied()
            .ok_or(GraphBuildError::UnknownObject {
                object_id,
                frame_id,
            })
    }

    fn kept_frames(&self) -> Vec<FrameId> {
        self.frames.iter().map(|(f, _)| *f).collect()
    }
}

// ============================================================
// Graph Builder
// ============================================================

/// Scene graph builder
///
/// ## Usage
/// ```text
/// let builder = GraphBuilder::new(GraphBuildConfig::preset(Preset::Tolerant));
/// let graph = builder.build(annotation.objects(), annotation.trajectories())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphBuildConfig,
}

impl GraphBuilder {
    pub fn new(config: GraphBuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphBuildConfig {
        &self.config
    }

    /// Build the graph for one scene
    ///
    /// ## Errors
    /// - `NoKeptFrames` if no configured kept frame exists in `trajectories`
    /// - `UnknownObject` if a kept-frame state references an object missing
    ///   from `properties`. Frames outside the kept set are never read, so
    ///   their records are not checked.
    /// - `DuplicateProperty`, `DuplicateState`, `DimensionMismatch` for other
    ///   malformed input
    /// - `InvalidConfig` if the configuration fails validation
    pub fn build(
        &self,
        properties: &[ObjectProperty],
        trajectories: &TrajectoryTable,
    ) -> Result<SceneGraph, GraphBuildError> {
        self.build_traced(properties, trajectories)
            .map(|(graph, _)| graph)
    }

    pub fn build_from_annotation(
        &self,
        annotation: &Annotation,
    ) -> Result<SceneGraph, GraphBuildError> {
        self.build(annotation.objects(), annotation.trajectories())
    }

    /// Build and also return what each frame-pair step did
    pub fn build_traced(
        &self,
        properties: &[ObjectProperty],
        trajectories: &TrajectoryTable,
    ) -> Result<(SceneGraph, Vec<FrameStep>), GraphBuildError> {
        ConfigValidator::validate_config(&self.config)?;
        let ctx = self.prepare(properties, trajectories)?;

        let mut graph = SceneGraph::new(ctx.kept_frames());
        let state = self.seed(&mut graph, &ctx)?;

        let sampler = CollisionSampler::new(
            &ctx.thresholds,
            self.config.interp_steps,
            self.config.parallel_pairs,
        );

        let (_, steps) = ctx.frames.windows(2).try_fold(
            (state, Vec::with_capacity(ctx.frames.len().saturating_sub(1))),
            |(state, mut steps), window| {
                let (state, step) =
                    self.step(&mut graph, &ctx, &sampler, state, &window[0], &window[1])?;
                steps.push(step);
                Ok::<_, GraphBuildError>((state, steps))
            },
        )?;

        info!(
            kept_frames = ctx.frames.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "scene graph built"
        );

        Ok((graph, steps))
    }

    /// Validate input and index it for construction
    fn prepare<'a>(
        &self,
        properties: &'a [ObjectProperty],
        trajectories: &'a TrajectoryTable,
    ) -> Result<SceneContext<'a>, GraphBuildError> {
        let mut by_id = AHashMap::with_capacity(properties.len());
        for prop in properties {
            if by_id.insert(prop.object_id, prop).is_some() {
                return Err(GraphBuildError::DuplicateProperty(prop.object_id));
            }
        }

        let kept: Vec<FrameId> = self
            .config
            .kept_frames
            .iter()
            .copied()
            .filter(|f| trajectories.contains_key(f))
            .collect();

        if kept.is_empty() {
            return Err(GraphBuildError::NoKeptFrames {
                configured: self.config.kept_frames.iter().copied().collect(),
            });
        }
        if kept.len() < self.config.kept_frames.len() {
            warn!(
                configured = self.config.kept_frames.len(),
                present = kept.len(),
                "some kept frames are missing from the trajectory data"
            );
        }

        let mut dims: Option<usize> = None;
        let mut frames = Vec::with_capacity(kept.len());
        for frame_id in kept {
            let states = trajectories
                .get(&frame_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            validate_frame(frame_id, states, &by_id, &mut dims)?;
            frames.push((frame_id, FrameObjects::new(states)));
        }

        let thresholds = ThresholdTable::new(
            properties,
            self.config.collision_scale,
            self.config.base_threshold,
        );

        Ok(SceneContext {
            properties: by_id,
            frames,
            thresholds,
        })
    }

    /// One object-state node per object present at the first kept frame
    fn seed(
        &self,
        graph: &mut SceneGraph,
        ctx: &SceneContext<'_>,
    ) -> Result<ConstructionState, GraphBuildError> {
        let mut state = ConstructionState::new();
        if let Some((frame, objects)) = ctx.frames.first() {
            for obj in objects.iter() {
                let prop = ctx.property(obj.object_id, *frame)?;
                let idx = graph.add_node(state_node(prop, obj, *frame))?;
                state.advance(obj.object_id, idx);
            }
            debug!(frame, objects = objects.len(), "seeded initial object states");
        }
        Ok(state)
    }

    /// Process one consecutive kept-frame pair `prev → cur`
    fn step(
        &self,
        graph: &mut SceneGraph,
        ctx: &SceneContext<'_>,
        sampler: &CollisionSampler<'_>,
        mut state: ConstructionState,
        prev: &(FrameId, FrameObjects<'_>),
        cur: &(FrameId, FrameObjects<'_>),
    ) -> Result<(ConstructionState, FrameStep), GraphBuildError> {
        let (fprev, prev_objs) = (prev.0, &prev.1);
        let (fcur, cur_objs) = (cur.0, &cur.1);

        // Collision sampling
        let sampled = sampler.sample(prev_objs, cur_objs);

        // Collision lifecycle: end, then start
        let ended = state.retain_active(&sampled);
        let mut started = Vec::new();
        for pair in &sampled {
            if state.is_active(pair) {
                continue;
            }

            let node = CollisionNode::between(
                ctx.property(pair.low(), fcur)?,
                ctx.property(pair.high(), fcur)?,
                fcur,
            );
            let idx = graph.add_node(SceneNode::Collision(node))?;
            for oid in pair.as_array() {
                if let Some(prev_node) = state.current_node(oid) {
                    graph.add_edge(prev_node, idx, fcur);
                }
                state.advance(oid, idx);
            }
            state.activate(*pair);
            trace!(%pair, frame = fcur, "collision started");
            started.push(*pair);
        }

        // Object-state advancement
        let eps = self.config.position_epsilon;
        let mut created = 0;
        let mut collapsed = 0;
        for obj in cur_objs.iter() {
            let pointer = state.current_node(obj.object_id);
            let unchanged = pointer
                .and_then(|idx| graph.node_at(idx))
                .and_then(SceneNode::location)
                .map_or(false, |loc| distance(loc, &obj.location) < eps);

            if unchanged {
                collapsed += 1;
                continue;
            }

            let prop = ctx.property(obj.object_id, fcur)?;
            let idx = graph.add_node(state_node(prop, obj, fcur))?;
            if let Some(prev_node) = pointer {
                graph.add_edge(prev_node, idx, fcur);
            }
            state.advance(obj.object_id, idx);
            created += 1;
        }

        debug!(
            from = fprev,
            to = fcur,
            started = started.len(),
            ended = ended.len(),
            created,
            collapsed,
            "frame pair processed"
        );

        let step = FrameStep {
            from_frame: fprev,
            to_frame: fcur,
            started,
            ended,
            state_nodes_created: created,
            state_nodes_collapsed: collapsed,
            pointer_frames: pointer_frames(&state, graph),
        };
        Ok((state, step))
    }
}

fn state_node(prop: &ObjectProperty, obj: &FrameObjectState, frame: FrameId) -> SceneNode {
    SceneNode::ObjectState(ObjectStateNode {
        property: prop.clone(),
        frame,
        location: obj.location.clone(),
        velocity: obj.velocity.clone(),
    })
}

fn pointer_frames(state: &ConstructionState, graph: &SceneGraph) -> BTreeMap<ObjectId, FrameId> {
    state
        .pointers()
        .filter_map(|(oid, idx)| graph.node_at(idx).map(|n| (oid, n.frame())))
        .collect()
}

/// Every state references a known object, appears once, and matches the
/// scene's dimensionality
fn validate_frame(
    frame_id: FrameId,
    states: &[FrameObjectState],
    properties: &AHashMap<ObjectId, &ObjectProperty>,
    dims: &mut Option<usize>,
) -> Result<(), GraphBuildError> {
    let mut seen = ahash::AHashSet::with_capacity(states.len());
    for state in states {
        let object_id = state.object_id;
        if !properties.contains_key(&object_id) {
            return Err(GraphBuildError::UnknownObject {
                object_id,
                frame_id,
            });
        }
        if !seen.insert(object_id) {
            return Err(GraphBuildError::DuplicateState {
                object_id,
                frame_id,
            });
        }

        let expected = *dims.get_or_insert(state.location.len());
        let mismatch = [state.location.len(), state.velocity.len()]
            .into_iter()
            .enumerate()
            // velocity may be omitted entirely
            .find(|&(i, len)| len != expected && !(i == 1 && len == 0));
        if let Some((_, found)) = mismatch {
            return Err(GraphBuildError::DimensionMismatch {
                object_id,
                frame_id,
                expected,
                found,
            });
        }
    }
    Ok(())
}

// ============================================================
// Tests
// ============================================================
