//! Mapping stage for rundown reconciliation.
//!
//! Turns raw newsroom story records into the [`Segment`](rundown_types::Segment)
//! sequence of one rundown. The mapping is one-shot and keeps no state: it
//! preserves input order, assigns ranks by position, and performs no
//! deduplication or identity validation.

pub mod error;
pub mod story;

pub use error::{IngestError, IngestResult};
pub use story::{build_rundown, load_stories, load_stories_from_path, parse_stories, RawStory};
