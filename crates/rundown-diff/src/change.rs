//! The closed vocabulary of playlist change records.

use std::fmt;

use rundown_types::{RundownId, SegmentId};
use serde::{Deserialize, Serialize};

/// One fact about a playlist transition.
///
/// Segment-level records carry the owning rundown and the segment id;
/// rundown-level records carry only the rundown id. Serialized with a
/// `type` tag so consumers can dispatch without guessing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaylistChange {
    /// A segment disappeared from a rundown present in both snapshots.
    SegmentDeleted {
        rundown_id: RundownId,
        segment_id: SegmentId,
    },
    /// A segment appeared in a rundown present in both snapshots.
    SegmentCreated {
        rundown_id: RundownId,
        segment_id: SegmentId,
    },
    /// An unmoved segment's content changed. Only produced when content
    /// detection is enabled.
    SegmentChanged {
        rundown_id: RundownId,
        segment_id: SegmentId,
    },
    /// A segment had to be repositioned within its rundown.
    SegmentMoved {
        rundown_id: RundownId,
        segment_id: SegmentId,
    },
    /// A whole rundown left the playlist.
    RundownDeleted { rundown_id: RundownId },
    /// A whole rundown joined the playlist.
    RundownCreated { rundown_id: RundownId },
}

/// Discriminant of a [`PlaylistChange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlaylistChangeKind {
    SegmentDeleted,
    SegmentCreated,
    SegmentChanged,
    SegmentMoved,
    RundownDeleted,
    RundownCreated,
}

impl PlaylistChangeKind {
    /// Every kind, in declaration order.
    pub const ALL: [PlaylistChangeKind; 6] = [
        PlaylistChangeKind::SegmentDeleted,
        PlaylistChangeKind::SegmentCreated,
        PlaylistChangeKind::SegmentChanged,
        PlaylistChangeKind::SegmentMoved,
        PlaylistChangeKind::RundownDeleted,
        PlaylistChangeKind::RundownCreated,
    ];

    /// Returns `true` for kinds that address a single segment.
    pub fn is_segment_level(self) -> bool {
        !matches!(self, PlaylistChangeKind::RundownDeleted | PlaylistChangeKind::RundownCreated)
    }

    /// Short lowercase label used in text output.
    pub fn label(self) -> &'static str {
        match self {
            PlaylistChangeKind::SegmentDeleted => "segment deleted",
            PlaylistChangeKind::SegmentCreated => "segment created",
            PlaylistChangeKind::SegmentChanged => "segment changed",
            PlaylistChangeKind::SegmentMoved => "segment moved",
            PlaylistChangeKind::RundownDeleted => "rundown deleted",
            PlaylistChangeKind::RundownCreated => "rundown created",
        }
    }
}

impl fmt::Display for PlaylistChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl PlaylistChange {
    /// The discriminant of this record.
    pub fn kind(&self) -> PlaylistChangeKind {
        match self {
            PlaylistChange::SegmentDeleted { .. } => PlaylistChangeKind::SegmentDeleted,
            PlaylistChange::SegmentCreated { .. } => PlaylistChangeKind::SegmentCreated,
            PlaylistChange::SegmentChanged { .. } => PlaylistChangeKind::SegmentChanged,
            PlaylistChange::SegmentMoved { .. } => PlaylistChangeKind::SegmentMoved,
            PlaylistChange::RundownDeleted { .. } => PlaylistChangeKind::RundownDeleted,
            PlaylistChange::RundownCreated { .. } => PlaylistChangeKind::RundownCreated,
        }
    }

    /// The rundown this record belongs to.
    pub fn rundown_id(&self) -> &RundownId {
        match self {
            PlaylistChange::SegmentDeleted { rundown_id, .. }
            | PlaylistChange::SegmentCreated { rundown_id, .. }
            | PlaylistChange::SegmentChanged { rundown_id, .. }
            | PlaylistChange::SegmentMoved { rundown_id, .. }
            | PlaylistChange::RundownDeleted { rundown_id }
            | PlaylistChange::RundownCreated { rundown_id } => rundown_id,
        }
    }

    /// The segment this record addresses, if it is segment-level.
    pub fn segment_id(&self) -> Option<&SegmentId> {
        match self {
            PlaylistChange::SegmentDeleted { segment_id, .. }
            | PlaylistChange::SegmentCreated { segment_id, .. }
            | PlaylistChange::SegmentChanged { segment_id, .. }
            | PlaylistChange::SegmentMoved { segment_id, .. } => Some(segment_id),
            PlaylistChange::RundownDeleted { .. } | PlaylistChange::RundownCreated { .. } => None,
        }
    }
}

impl fmt::Display for PlaylistChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.segment_id() {
            Some(segment) => write!(f, "{} {}/{}", self.kind(), self.rundown_id(), segment),
            None => write!(f, "{} {}", self.kind(), self.rundown_id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let moved = PlaylistChange::SegmentMoved {
            rundown_id: "R1".into(),
            segment_id: "S1".into(),
        };
        assert_eq!(moved.kind(), PlaylistChangeKind::SegmentMoved);
        assert!(moved.kind().is_segment_level());
        assert_eq!(moved.segment_id(), Some(&SegmentId::from("S1")));

        let created = PlaylistChange::RundownCreated { rundown_id: "R2".into() };
        assert_eq!(created.kind(), PlaylistChangeKind::RundownCreated);
        assert!(!created.kind().is_segment_level());
        assert_eq!(created.rundown_id(), &RundownId::from("R2"));
        assert!(created.segment_id().is_none());
    }

    #[test]
    fn display_format() {
        let deleted = PlaylistChange::SegmentDeleted {
            rundown_id: "R1".into(),
            segment_id: "S9".into(),
        };
        assert_eq!(deleted.to_string(), "segment deleted R1/S9");
        let gone = PlaylistChange::RundownDeleted { rundown_id: "R1".into() };
        assert_eq!(gone.to_string(), "rundown deleted R1");
    }

    #[test]
    fn serialized_with_type_tag() {
        let change = PlaylistChange::SegmentCreated {
            rundown_id: "R1".into(),
            segment_id: "S2".into(),
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "SegmentCreated", "rundown_id": "R1", "segment_id": "S2"})
        );
        let back: PlaylistChange = serde_json::from_value(json).unwrap();
        assert_eq!(back, change);
    }

    #[test]
    fn all_kinds_listed_once() {
        let mut kinds = PlaylistChangeKind::ALL.to_vec();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), 6);
    }
}
