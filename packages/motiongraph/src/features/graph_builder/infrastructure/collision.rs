// Collision Sampling - Interpolated proximity checks between kept frames
//
// For each of `interp_steps` fractions t in (0, 1], every object present at
// the later frame is placed at lerp(prev, cur, t) (or at its current location
// if it was absent from the earlier frame), and every pair within its
// threshold is recorded. The union over all t is the frame-pair's new
// collision set.

use ahash::AHashMap;
use std::collections::BTreeSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::shared::geometry::{distance, lerp};
use crate::shared::models::{FrameObjectState, ObjectId, ObjectPair, ObjectProperty, Shape};

/// Per-pair collision thresholds
///
/// `(radius_a + radius_b) * scale`, or `base` for every pair when set.
#[derive(Debug, Clone)]
pub struct ThresholdTable {
    radii: AHashMap<ObjectId, f64>,
    scale: f64,
    base: Option<f64>,
}

impl ThresholdTable {
    pub fn new<'a>(
        properties: impl IntoIterator<Item = &'a ObjectProperty>,
        scale: f64,
        base: Option<f64>,
    ) -> Self {
        Self {
            radii: properties
                .into_iter()
                .map(|p| (p.object_id, p.approx_radius()))
                .collect(),
            scale,
            base,
        }
    }

    #[inline]
    pub fn radius(&self, object_id: ObjectId) -> f64 {
        self.radii
            .get(&object_id)
            .copied()
            .unwrap_or_else(|| Shape::Other.default_radius())
    }

    #[inline]
    pub fn threshold(&self, a: ObjectId, b: ObjectId) -> f64 {
        match self.base {
            Some(base) => base,
            None => (self.radius(a) + self.radius(b)) * self.scale,
        }
    }
}

/// Objects of one kept frame, in the order they were recorded
#[derive(Debug, Clone, Default)]
pub struct FrameObjects<'a> {
    order: Vec<ObjectId>,
    by_id: AHashMap<ObjectId, &'a FrameObjectState>,
}

impl<'a> FrameObjects<'a> {
    /// Caller guarantees object ids are unique within the frame
    pub fn new(states: &'a [FrameObjectState]) -> Self {
        Self {
            order: states.iter().map(|s| s.object_id).collect(),
            by_id: states.iter().map(|s| (s.object_id, s)).collect(),
        }
    }

    pub fn ids(&self) -> &[ObjectId] {
        &self.order
    }

    pub fn get(&self, object_id: ObjectId) -> Option<&'a FrameObjectState> {
        self.by_id.get(&object_id).copied()
    }

    /// States in recorded order
    pub fn iter(&self) -> impl Iterator<Item = &'a FrameObjectState> + '_ {
        self.order.iter().filter_map(move |id| self.by_id.get(id).copied())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Collision sampler for one build
pub struct CollisionSampler<'t> {
    thresholds: &'t ThresholdTable,
    interp_steps: usize,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl<'t> CollisionSampler<'t> {
    pub fn new(thresholds: &'t ThresholdTable, interp_steps: usize, parallel: bool) -> Self {
        Self {
            thresholds,
            interp_steps: interp_steps.max(1),
            parallel,
        }
    }

    /// Union of pairs touching at any sampled fraction between `prev` and `cur`
    pub fn sample(&self, prev: &FrameObjects<'_>, cur: &FrameObjects<'_>) -> BTreeSet<ObjectPair> {
        let mut collisions = BTreeSet::new();

        for s in 1..=self.interp_steps {
            let t = s as f64 / self.interp_steps as f64;
            let positions = interpolate(prev, cur, t);
            collisions.extend(self.touching_pairs(&positions));
        }

        collisions
    }

    /// Pairs within threshold at one interpolation step
    pub fn touching_pairs(&self, positions: &[(ObjectId, Vec<f64>)]) -> Vec<ObjectPair> {
        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return (0..positions.len())
                    .into_par_iter()
                    .flat_map_iter(|i| self.touching_from(positions, i))
                    .collect();
            }
        }

        (0..positions.len())
            .flat_map(|i| self.touching_from(positions, i))
            .collect()
    }

    fn touching_from<'p>(
        &'p self,
        positions: &'p [(ObjectId, Vec<f64>)],
        i: usize,
    ) -> impl Iterator<Item = ObjectPair> + 'p {
        let (oi, pi) = (positions[i].0, &positions[i].1);
        positions[i + 1..].iter().filter_map(move |(oj, pj)| {
            let d = distance(pi, pj);
            (d <= self.thresholds.threshold(oi, *oj)).then(|| ObjectPair::new(oi, *oj))
        })
    }
}

/// Positions of every object at `cur`, blended toward `cur` by `t`
pub fn interpolate(
    prev: &FrameObjects<'_>,
    cur: &FrameObjects<'_>,
    t: f64,
) -> Vec<(ObjectId, Vec<f64>)> {
    cur.iter()
        .map(|state| {
            let pos = match prev.get(state.object_id) {
                Some(before) => lerp(&before.location, &state.location, t),
                None => state.location.clone(),
            };
            (state.object_id, pos)
        })
        .collect()
}
