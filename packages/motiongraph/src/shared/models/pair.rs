//! Canonical unordered object pair

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ObjectId;

/// Unordered pair of object ids, stored as `(min, max)`
///
/// Ordering is derived from the stored tuple, so a `BTreeSet<ObjectPair>`
/// iterates pairs by smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[ObjectId; 2]", into = "[ObjectId; 2]")]
pub struct ObjectPair {
    low: ObjectId,
    high: ObjectId,
}

impl ObjectPair {
    pub fn new(a: ObjectId, b: ObjectId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    #[inline]
    pub fn low(&self) -> ObjectId {
        self.low
    }

    #[inline]
    pub fn high(&self) -> ObjectId {
        self.high
    }

    #[inline]
    pub fn contains(&self, object_id: ObjectId) -> bool {
        self.low == object_id || self.high == object_id
    }

    /// Slot (0 = smaller id, 1 = larger id) of `object_id` in this pair
    pub fn position_of(&self, object_id: ObjectId) -> Option<usize> {
        if self.low == object_id {
            Some(0)
        } else if self.high == object_id {
            Some(1)
        } else {
            None
        }
    }

    /// The partner of `object_id`, if it belongs to this pair
    pub fn other(&self, object_id: ObjectId) -> Option<ObjectId> {
        match self.position_of(object_id)? {
            0 => Some(self.high),
            _ => Some(self.low),
        }
    }

    pub fn as_array(&self) -> [ObjectId; 2] {
        [self.low, self.high]
    }
}

impl From<[ObjectId; 2]> for ObjectPair {
    fn from(ids: [ObjectId; 2]) -> Self {
        Self::new(ids[0], ids[1])
    }
}

impl From<ObjectPair> for [ObjectId; 2] {
    fn from(pair: ObjectPair) -> Self {
        pair.as_array()
    }
}

impl fmt::Display for ObjectPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}
