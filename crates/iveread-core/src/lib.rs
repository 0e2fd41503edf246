//! iveread Core Library
//!
//! This crate provides the shared state for iveread, a book-club app
//! prototype: every member's reading calendar and the signed-in member's
//! profile.
//!
//! # Architecture
//!
//! - In-memory stores, mutated synchronously from UI callbacks on a single
//!   logical thread; nothing is persisted and nothing is ever deleted
//! - Change events over `std::sync::mpsc` so consumers can re-render
//!   without the stores knowing anything about rendering
//!
//! # Quick Start
//!
//! ```text
//! let mut store = CalendarStore::new();
//! let events = store.subscribe();
//!
//! // Log a read
//! let mut record = CalendarRecord::new(date);
//! record.set_title("Sapiens");
//! store.add_record("me", record);
//!
//! // React to it
//! store.add_reaction("me", date, Reaction::new("👏", "Jimin"));
//!
//! // Month stats for the calendar header
//! let summary = store.month_summary("me", 2026, 1);
//! ```
//!
//! # Modules
//!
//! - `store`: calendar record store (main entry point)
//! - `models`: record, reaction, and cover types
//! - `profile`: signed-in member's profile store
//! - `event`: change events emitted by the stores
//! - `seed`: initial snapshot loading

pub mod event;
pub mod models;
pub mod profile;
pub mod seed;
pub mod store;

pub use event::{CalendarEvent, ProfileEvent};
pub use models::{CalendarRecord, CoverRef, Reaction};
pub use profile::{Profile, ProfileStore, ProfileUpdate};
pub use seed::{Snapshot, SnapshotError};
pub use store::{CalendarStore, MonthSummary, RecordSet};
