//! Playlist-level diff: compare two playlist snapshots rundown by rundown.
//!
//! Rundowns are matched by id. Whole-rundown creation and deletion are
//! reported at rundown granularity only; rundowns present in both snapshots
//! are handed to the move-set resolver for segment-level classification.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rundown_types::{ResolvedPlaylist, Rundown, RundownId, SegmentId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::change::{PlaylistChange, PlaylistChangeKind};
use crate::config::DiffConfig;
use crate::move_set::{resolve_moves, MoveSet};

/// Segment classification for one rundown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentChanges {
    pub moved_segments: Vec<SegmentId>,
    pub not_moved_segments: Vec<SegmentId>,
    pub inserted_segments: Vec<SegmentId>,
    pub deleted_segments: Vec<SegmentId>,
}

impl SegmentChanges {
    /// The all-empty summary recorded for created and deleted rundowns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if all four lists are empty.
    pub fn is_empty(&self) -> bool {
        self.moved_segments.is_empty()
            && self.not_moved_segments.is_empty()
            && self.inserted_segments.is_empty()
            && self.deleted_segments.is_empty()
    }
}

impl From<MoveSet> for SegmentChanges {
    fn from(set: MoveSet) -> Self {
        Self {
            moved_segments: set.moved,
            not_moved_segments: set.not_moved,
            inserted_segments: set.inserted,
            deleted_segments: set.deleted,
        }
    }
}

/// The change set for one playlist transition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDiff {
    /// Ordered change log. Consumers may apply it front to back.
    pub changes: Vec<PlaylistChange>,
    /// Per-rundown segment classification, one entry per rundown id seen in
    /// either snapshot.
    pub segment_changes: BTreeMap<RundownId, SegmentChanges>,
}

impl PlaylistDiff {
    /// Returns `true` if the change log is empty.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of change records.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of change records of `kind`.
    pub fn count(&self, kind: PlaylistChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind() == kind).count()
    }

    /// Change records belonging to `rundown`, in log order.
    pub fn changes_for<'a>(&'a self, rundown: &'a RundownId) -> impl Iterator<Item = &'a PlaylistChange> + 'a {
        self.changes.iter().filter(move |c| c.rundown_id() == rundown)
    }

    /// Per-kind counts.
    pub fn summary(&self) -> DiffSummary {
        DiffSummary {
            rundowns_created: self.count(PlaylistChangeKind::RundownCreated),
            rundowns_deleted: self.count(PlaylistChangeKind::RundownDeleted),
            segments_created: self.count(PlaylistChangeKind::SegmentCreated),
            segments_deleted: self.count(PlaylistChangeKind::SegmentDeleted),
            segments_moved: self.count(PlaylistChangeKind::SegmentMoved),
            segments_changed: self.count(PlaylistChangeKind::SegmentChanged),
        }
    }
}

/// Per-kind counts of a [`PlaylistDiff`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub rundowns_created: usize,
    pub rundowns_deleted: usize,
    pub segments_created: usize,
    pub segments_deleted: usize,
    pub segments_moved: usize,
    pub segments_changed: usize,
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rundowns: +{} -{}; segments: +{} -{} ~{} moved {}",
            self.rundowns_created,
            self.rundowns_deleted,
            self.segments_created,
            self.segments_deleted,
            self.segments_changed,
            self.segments_moved,
        )
    }
}

/// Diff `current` against `previous` with the default configuration.
pub fn diff_playlists(current: &ResolvedPlaylist, previous: &ResolvedPlaylist) -> PlaylistDiff {
    diff_playlists_with(current, previous, &DiffConfig::default())
}

/// Diff `current` against `previous`.
///
/// Records are emitted in this order:
///
/// 1. `RundownDeleted` for every previous rundown missing from `current`,
///    in previous order.
/// 2. For every current rundown, in current order: `RundownCreated` if it is
///    new, otherwise its `SegmentMoved`, then `SegmentCreated`, then
///    `SegmentDeleted` records (followed by `SegmentChanged` when
///    [`DiffConfig::detect_content_changes`] is set).
///
/// A new rundown never yields segment-level records. When a rundown id
/// repeats within one snapshot, its first occurrence is used.
pub fn diff_playlists_with(
    current: &ResolvedPlaylist,
    previous: &ResolvedPlaylist,
    config: &DiffConfig,
) -> PlaylistDiff {
    if config.report_duplicates {
        report_duplicates("previous", previous);
        report_duplicates("current", current);
    }

    let mut changes = Vec::new();
    let mut segment_changes = BTreeMap::new();

    let mut seen = BTreeSet::new();
    for rundown in previous {
        if !seen.insert(&rundown.id) || current.contains(&rundown.id) {
            continue;
        }
        changes.push(PlaylistChange::RundownDeleted {
            rundown_id: rundown.id.clone(),
        });
        segment_changes.insert(rundown.id.clone(), SegmentChanges::empty());
    }

    let mut seen = BTreeSet::new();
    for rundown in current {
        if !seen.insert(&rundown.id) {
            continue;
        }

        let Some(prev_rundown) = previous.rundown(&rundown.id) else {
            changes.push(PlaylistChange::RundownCreated {
                rundown_id: rundown.id.clone(),
            });
            segment_changes.insert(rundown.id.clone(), SegmentChanges::empty());
            continue;
        };

        let moves = resolve_moves(&prev_rundown.segment_order(), &rundown.segment_order());
        push_segment_changes(&mut changes, &rundown.id, &moves);

        if config.detect_content_changes {
            push_content_changes(&mut changes, prev_rundown, rundown, &moves.not_moved);
        }

        debug!(
            rundown = %rundown.id,
            moved = moves.moved.len(),
            inserted = moves.inserted.len(),
            deleted = moves.deleted.len(),
            "rundown diffed"
        );

        segment_changes.insert(rundown.id.clone(), moves.into());
    }

    debug!(
        changes = changes.len(),
        rundowns = segment_changes.len(),
        "playlist diff complete"
    );

    PlaylistDiff {
        changes,
        segment_changes,
    }
}

fn push_segment_changes(changes: &mut Vec<PlaylistChange>, rundown: &RundownId, moves: &MoveSet) {
    for id in &moves.moved {
        changes.push(PlaylistChange::SegmentMoved {
            rundown_id: rundown.clone(),
            segment_id: id.clone(),
        });
    }
    for id in &moves.inserted {
        changes.push(PlaylistChange::SegmentCreated {
            rundown_id: rundown.clone(),
            segment_id: id.clone(),
        });
    }
    for id in &moves.deleted {
        changes.push(PlaylistChange::SegmentDeleted {
            rundown_id: rundown.clone(),
            segment_id: id.clone(),
        });
    }
}

fn push_content_changes(
    changes: &mut Vec<PlaylistChange>,
    previous: &Rundown,
    current: &Rundown,
    not_moved: &[SegmentId],
) {
    for id in not_moved {
        let (Some(old), Some(new)) = (previous.segment(id), current.segment(id)) else {
            continue;
        };
        if old.content_differs(new) {
            changes.push(PlaylistChange::SegmentChanged {
                rundown_id: current.id.clone(),
                segment_id: id.clone(),
            });
        }
    }
}

fn report_duplicates(side: &str, playlist: &ResolvedPlaylist) {
    for problem in playlist.validate() {
        warn!(snapshot = side, "{problem}; first occurrence wins");
    }
}
