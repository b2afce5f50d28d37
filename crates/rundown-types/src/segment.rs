use serde::{Deserialize, Serialize};

use crate::identity::{RundownId, SegmentId};

/// One story within a rundown.
///
/// A `Segment` is an immutable snapshot. A later observation of the same
/// story (same [`SegmentId`]) is a new value, never a mutation of this one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The rundown that owns this segment.
    pub rundown_id: RundownId,
    /// External identity of the story.
    pub id: SegmentId,
    /// Position within the rundown, assigned by observation order.
    pub rank: usize,
    /// Human-readable story name.
    pub name: String,
    /// Modification marker from the source (timestamp or version token).
    pub modified: String,
    /// Excluded from on-air rotation without being deleted.
    #[serde(default)]
    pub floated: bool,
}

impl Segment {
    /// Create a segment that is not floated.
    pub fn new(
        rundown_id: RundownId,
        id: SegmentId,
        rank: usize,
        name: impl Into<String>,
        modified: impl Into<String>,
    ) -> Self {
        Self {
            rundown_id,
            id,
            rank,
            name: name.into(),
            modified: modified.into(),
            floated: false,
        }
    }

    /// Builder-style setter for the floated flag.
    pub fn with_floated(mut self, floated: bool) -> Self {
        self.floated = floated;
        self
    }

    /// Returns `true` if the observable content differs from `other`.
    ///
    /// Compares name, floated flag, and modification marker. Rank is
    /// positional and excluded.
    pub fn content_differs(&self, other: &Segment) -> bool {
        self.name != other.name || self.floated != other.floated || self.modified != other.modified
    }
}
