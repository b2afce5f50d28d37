//! Raw story records and their mapping into segments.

use std::io::Read;
use std::path::Path;

use rundown_types::{Rundown, RundownId, Segment, SegmentId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IngestResult;

/// One story record as delivered by the newsroom system.
///
/// Only the fields the mapping needs are modelled; any other fields in the
/// source JSON are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStory {
    /// External story identity. Stories without one map to an empty id.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name of the story.
    #[serde(default)]
    pub story_name: Option<String>,
    /// Modification marker (timestamp or version token).
    #[serde(default)]
    pub modified: String,
}

impl RawStory {
    pub fn new(id: impl Into<String>, story_name: impl Into<String>, modified: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            story_name: Some(story_name.into()),
            modified: modified.into(),
        }
    }
}

/// Map raw stories into the ordered segments of `rundown_id`.
///
/// The first story gets rank 0, the next rank 1, and so on. Missing ids and
/// names become empty strings and every segment starts unfloated.
pub fn parse_stories(rundown_id: &RundownId, stories: &[RawStory]) -> Vec<Segment> {
    let segments: Vec<Segment> = stories
        .iter()
        .enumerate()
        .map(|(rank, story)| {
            Segment::new(
                rundown_id.clone(),
                SegmentId::new(story.id.clone().unwrap_or_default()),
                rank,
                story.story_name.clone().unwrap_or_default(),
                story.modified.clone(),
            )
        })
        .collect();

    debug!(rundown = %rundown_id, segments = segments.len(), "mapped stories");
    segments
}

/// Map raw stories into a whole [`Rundown`].
pub fn build_rundown(rundown_id: RundownId, stories: &[RawStory]) -> Rundown {
    let segments = parse_stories(&rundown_id, stories);
    Rundown::new(rundown_id, segments)
}

/// Read a JSON array of story records.
pub fn load_stories(reader: impl Read) -> IngestResult<Vec<RawStory>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a JSON array of story records from a file.
pub fn load_stories_from_path(path: impl AsRef<Path>) -> IngestResult<Vec<RawStory>> {
    let file = std::fs::File::open(path)?;
    load_stories(std::io::BufReader::new(file))
}
