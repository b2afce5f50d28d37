use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Behavior switches for the playlist differ.
///
/// The defaults reproduce the plain membership/position diff. Missing keys
/// in a TOML document fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Emit `SegmentChanged` for unmoved segments whose name, floated flag,
    /// or modification marker differ between the two snapshots.
    pub detect_content_changes: bool,
    /// Log a warning for each duplicate rundown or segment id in the inputs.
    pub report_duplicates: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            detect_content_changes: false,
            report_duplicates: true,
        }
    }
}

impl DiffConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> DiffResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> DiffResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DiffError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> DiffResult<String> {
        toml::to_string(self).map_err(|e| DiffError::Serialization(e.to_string()))
    }
}
