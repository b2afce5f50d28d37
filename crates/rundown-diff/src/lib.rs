//! Reconciliation engine for rundown playlists.
//!
//! Compares two [`ResolvedPlaylist`](rundown_types::ResolvedPlaylist)
//! snapshots and produces a deterministic change set: an ordered log of
//! typed change records plus a per-rundown classification of segments.
//!
//! # Key Types
//!
//! - [`MoveSet`] -- Order-preserving partition of two segment orders (LCS based)
//! - [`PlaylistChange`] / [`PlaylistChangeKind`] -- Closed vocabulary of change records
//! - [`PlaylistDiff`] / [`SegmentChanges`] -- Full change set for one transition
//! - [`DiffConfig`] -- Optional behavior switches, loadable from TOML

pub mod change;
pub mod config;
pub mod error;
pub mod move_set;
pub mod playlist_diff;

pub use change::{PlaylistChange, PlaylistChangeKind};
pub use config::DiffConfig;
pub use error::{DiffError, DiffResult};
pub use move_set::{resolve_moves, MoveSet};
pub use playlist_diff::{diff_playlists, diff_playlists_with, DiffSummary, PlaylistDiff, SegmentChanges};
