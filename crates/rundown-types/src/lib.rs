//! Foundation types for rundown reconciliation.
//!
//! This crate provides the identity and snapshot types shared by the diff
//! engine and the ingest stage. Every other rundown crate depends on
//! `rundown-types`.
//!
//! # Key Types
//!
//! - [`RundownId`] / [`SegmentId`] — Opaque external identifiers, the sole identity key
//! - [`Segment`] — One story within a rundown, an immutable snapshot value
//! - [`Rundown`] — One show's ordered list of segments
//! - [`ResolvedPlaylist`] — One full observation of the on-air state

pub mod error;
pub mod identity;
pub mod playlist;
pub mod segment;

pub use error::TypeError;
pub use identity::{RundownId, SegmentId};
pub use playlist::{ResolvedPlaylist, Rundown};
pub use segment::Segment;
