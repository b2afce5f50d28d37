use thiserror::Error;

use crate::identity::{RundownId, SegmentId};

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    #[error("duplicate rundown id in playlist: {0}")]
    DuplicateRundown(RundownId),

    #[error("duplicate segment id {segment} in rundown {rundown}")]
    DuplicateSegment {
        rundown: RundownId,
        segment: SegmentId,
    },
}
