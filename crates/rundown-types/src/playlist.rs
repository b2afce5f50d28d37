//! Rundowns and playlist snapshots.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::identity::{RundownId, SegmentId};
use crate::segment::Segment;

/// One show's ordered list of segments. Order is air order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rundown {
    pub id: RundownId,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Rundown {
    /// Create a rundown from an ordered segment list.
    pub fn new(id: RundownId, segments: Vec<Segment>) -> Self {
        Self { id, segments }
    }

    /// The segment ids in air order.
    pub fn segment_order(&self) -> Vec<SegmentId> {
        self.segments.iter().map(|s| s.id.clone()).collect()
    }

    /// The first segment carrying `id`.
    pub fn segment(&self, id: &SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| &s.id == id)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the rundown has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// One full observation of the rundowns on air at one instant.
///
/// Serializes as a plain JSON array of rundowns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedPlaylist {
    rundowns: Vec<Rundown>,
}

impl ResolvedPlaylist {
    /// Create a playlist snapshot from an ordered rundown list.
    pub fn new(rundowns: Vec<Rundown>) -> Self {
        Self { rundowns }
    }

    /// Create an empty playlist.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The rundowns in playlist order.
    pub fn rundowns(&self) -> &[Rundown] {
        &self.rundowns
    }

    /// Iterate rundowns in playlist order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rundown> {
        self.rundowns.iter()
    }

    /// The first rundown carrying `id`.
    pub fn rundown(&self, id: &RundownId) -> Option<&Rundown> {
        self.rundowns.iter().find(|r| &r.id == id)
    }

    /// Returns `true` if a rundown with `id` is present.
    pub fn contains(&self, id: &RundownId) -> bool {
        self.rundown(id).is_some()
    }

    /// Rundown ids in playlist order.
    pub fn rundown_ids(&self) -> Vec<RundownId> {
        self.rundowns.iter().map(|r| r.id.clone()).collect()
    }

    /// Number of rundowns.
    pub fn len(&self) -> usize {
        self.rundowns.len()
    }

    /// Returns `true` if the playlist has no rundowns.
    pub fn is_empty(&self) -> bool {
        self.rundowns.is_empty()
    }

    /// Report identifier collisions without rejecting the snapshot.
    ///
    /// Returns one entry per repeated rundown id and per repeated segment id
    /// within a rundown, in input order. An empty list means the snapshot is
    /// well formed.
    pub fn validate(&self) -> Vec<TypeError> {
        let mut problems = Vec::new();
        let mut seen_rundowns = BTreeSet::new();

        for rundown in &self.rundowns {
            if !seen_rundowns.insert(&rundown.id) {
                problems.push(TypeError::DuplicateRundown(rundown.id.clone()));
            }

            let mut seen_segments = BTreeSet::new();
            for segment in &rundown.segments {
                if !seen_segments.insert(&segment.id) {
                    problems.push(TypeError::DuplicateSegment {
                        rundown: rundown.id.clone(),
                        segment: segment.id.clone(),
                    });
                }
            }
        }

        problems
    }
}

impl FromIterator<Rundown> for ResolvedPlaylist {
    fn from_iter<I: IntoIterator<Item = Rundown>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResolvedPlaylist {
    type Item = &'a Rundown;
    type IntoIter = std::slice::Iter<'a, Rundown>;

    fn into_iter(self) -> Self::IntoIter {
        self.rundowns.iter()
    }
}
