//! Data models for iveread
//!
//! Defines the core data structures: CalendarRecord, Reaction, and CoverRef.
//! A record is one reading-log entry, keyed by calendar date within one
//! member's record set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single dated reading-log entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarRecord {
    /// Calendar date, the unique key within an owner's record set
    pub date: NaiveDate,
    /// Book title (may be empty)
    pub title: String,
    /// Free-text comment
    pub note: String,
    /// Reference to a display image, not interpreted by the store
    #[serde(default)]
    pub cover: CoverRef,
    /// Emoji responses, insertion order preserved, append-only
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl CalendarRecord {
    /// Create an empty record for the given date
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            title: String::new(),
            note: String::new(),
            cover: CoverRef::default(),
            reactions: Vec::new(),
        }
    }

    /// Update the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Update the note
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Update the cover reference
    pub fn set_cover(&mut self, cover: impl Into<CoverRef>) {
        self.cover = cover.into();
    }

    /// Append a reaction, keeping all prior reactions in order
    ///
    /// Reactions are never de-duplicated; two reactions with the same id
    /// are kept as two entries.
    pub fn add_reaction(&mut self, reaction: Reaction) {
        self.reactions.push(reaction);
    }
}

/// One emoji response to a record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reaction {
    /// Identifier for the reaction; the store does not enforce uniqueness
    pub id: String,
    /// Short display string, e.g. "👏"
    pub emoji: String,
    /// Display name of the reacting member
    pub name: String,
}

impl Reaction {
    /// Create a reaction with a generated id
    pub fn new(emoji: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            emoji: emoji.into(),
            name: name.into(),
        }
    }

    /// Create a reaction with a caller-supplied id
    pub fn with_id(
        id: impl Into<String>,
        emoji: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            emoji: emoji.into(),
            name: name.into(),
        }
    }
}

/// Opaque reference to a display image for a record
///
/// Clients keep bundled asset handles here; the store never looks inside.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CoverRef(pub String);

impl CoverRef {
    /// Create a new cover reference
    pub fn new(asset: impl Into<String>) -> Self {
        Self(asset.into())
    }

    /// Get the underlying asset reference
    pub fn asset(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoverRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CoverRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CoverRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
