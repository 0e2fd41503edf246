//! Initial snapshot loading
//!
//! A `Snapshot` is the fixed initial state handed to the stores at process
//! start: records grouped by owner, plus an optional profile for the
//! signed-in member. Snapshots are plain TOML, with dates written as
//! `"YYYY-MM-DD"` strings:
//!
//! ```toml
//! [profile]
//! nickname = "Seo-yoon"
//! emoji = "😊"
//!
//! [[records.jimin]]
//! date = "2026-01-05"
//! title = "1984"
//! note = "underline log"
//! cover = "covers/1984"
//! reactions = [{ id = "jimin-0105-1", emoji = "✨", name = "Sejun" }]
//! ```

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CalendarRecord;
use crate::profile::Profile;

/// Errors that can occur while loading a snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Failed to read the snapshot file
    #[error("Failed to read snapshot file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Snapshot document is not valid TOML
    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Initial state for the calendar and profile stores
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// Records grouped by owner; duplicate dates resolve last-write-wins
    #[serde(default)]
    pub records: BTreeMap<String, Vec<CalendarRecord>>,

    /// Profile of the signed-in member, if the snapshot carries one
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl Snapshot {
    /// Parse a snapshot from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, SnapshotError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a snapshot from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Total number of seeded records across all owners
    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    /// Check whether the snapshot carries no state at all
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0 && self.profile.is_none()
    }
}
