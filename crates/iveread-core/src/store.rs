//! Calendar record store
//!
//! The `CalendarStore` holds every member's reading records, keyed by owner
//! and calendar date. It is the single shared state behind the calendar
//! grid, the day-detail panel, and the reaction picker.
//!
//! ## Keys
//!
//! Owners are opaque string keys with no tie to any profile entity. Within
//! one owner's set there is at most one record per date; writing to an
//! occupied date replaces the whole record, reactions included.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = CalendarStore::new();
//! let events = store.subscribe();
//!
//! store.add_record("me", record);
//! store.add_reaction("me", date, Reaction::new("👏", "Jimin"));
//!
//! let summary = store.month_summary("me", 2026, 1);
//! ```

use std::collections::{BTreeMap, HashSet};
use std::sync::mpsc::{self, Receiver, Sender};

use chrono::NaiveDate;
use tracing::debug;

use crate::event::{broadcast, CalendarEvent};
use crate::models::{CalendarRecord, Reaction};
use crate::seed::Snapshot;

/// One owner's record set, keyed by date
pub type RecordSet = BTreeMap<NaiveDate, CalendarRecord>;

/// In-memory store of reading records for every member
///
/// All mutations are synchronous, infallible, in-memory updates; nothing is
/// ever deleted and state is discarded on restart.
pub struct CalendarStore {
    /// Records grouped by owner, then by date
    records_by_owner: BTreeMap<String, RecordSet>,
    /// Live change-event subscribers
    subscribers: Vec<Sender<CalendarEvent>>,
}

impl CalendarStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records_by_owner: BTreeMap::new(),
            subscribers: Vec::new(),
        }
    }

    /// Create a store seeded from an initial snapshot
    ///
    /// Duplicate dates within one owner's seed list resolve last-write-wins,
    /// the same as repeated [`add_record`](Self::add_record) calls. Seeding
    /// emits no events.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut store = Self::new();
        for (owner, records) in &snapshot.records {
            let record_set = store.records_by_owner.entry(owner.clone()).or_default();
            for record in records {
                record_set.insert(record.date, record.clone());
            }
        }
        store
    }

    // ==================== Mutation ====================

    /// Insert a record, replacing any existing record for that owner/date
    ///
    /// Last write wins: on overwrite the prior record is discarded whole,
    /// its reactions included. Always succeeds.
    pub fn add_record(&mut self, owner: impl Into<String>, record: CalendarRecord) {
        let owner = owner.into();
        let date = record.date;
        debug!("Adding record for {} on {}", owner, date);
        self.records_by_owner
            .entry(owner.clone())
            .or_default()
            .insert(date, record);
        broadcast(
            &mut self.subscribers,
            &CalendarEvent::RecordAdded { owner, date },
        );
    }

    /// Append a reaction to the record at (owner, date)
    ///
    /// If no record exists there, the reaction is dropped and the store is
    /// left unchanged. Reactions are never de-duplicated by id.
    pub fn add_reaction(&mut self, owner: &str, date: NaiveDate, reaction: Reaction) {
        let record = match self
            .records_by_owner
            .get_mut(owner)
            .and_then(|records| records.get_mut(&date))
        {
            Some(record) => record,
            None => {
                debug!("No record for {} on {}, dropping reaction", owner, date);
                return;
            }
        };
        record.add_reaction(reaction);
        broadcast(
            &mut self.subscribers,
            &CalendarEvent::ReactionAdded {
                owner: owner.to_string(),
                date,
            },
        );
    }

    // ==================== Queries ====================

    /// Get the full owner → date → record mapping
    pub fn records_by_owner(&self) -> &BTreeMap<String, RecordSet> {
        &self.records_by_owner
    }

    /// Get one owner's record set
    pub fn records_for(&self, owner: &str) -> Option<&RecordSet> {
        self.records_by_owner.get(owner)
    }

    /// Get a single record
    pub fn record(&self, owner: &str, date: NaiveDate) -> Option<&CalendarRecord> {
        self.records_by_owner
            .get(owner)
            .and_then(|records| records.get(&date))
    }

    /// Get one owner's records within a calendar month, in date order
    ///
    /// Returns an empty list for an unknown owner or an invalid month.
    pub fn records_in_month(&self, owner: &str, year: i32, month: u32) -> Vec<&CalendarRecord> {
        let (start, end) = match month_bounds(year, month) {
            Some(bounds) => bounds,
            None => return Vec::new(),
        };
        self.records_for(owner)
            .map(|records| records.range(start..end).map(|(_, record)| record).collect())
            .unwrap_or_default()
    }

    /// Compute one owner's reading stats for a calendar month
    pub fn month_summary(&self, owner: &str, year: i32, month: u32) -> MonthSummary {
        let records = self.records_in_month(owner, year, month);
        let titles: HashSet<&str> = records
            .iter()
            .map(|record| record.title.as_str())
            .filter(|title| !title.is_empty())
            .collect();
        MonthSummary {
            record_count: records.len(),
            unique_titles: titles.len(),
        }
    }

    // ==================== Stats ====================

    /// Total number of records across all owners
    pub fn record_count(&self) -> usize {
        self.records_by_owner.values().map(BTreeMap::len).sum()
    }

    /// Number of records for one owner
    pub fn record_count_for(&self, owner: &str) -> usize {
        self.records_for(owner).map_or(0, BTreeMap::len)
    }

    /// Check whether the store holds no records at all
    pub fn is_empty(&self) -> bool {
        self.records_by_owner.values().all(BTreeMap::is_empty)
    }

    // ==================== Subscriptions ====================

    /// Subscribe to change events
    ///
    /// Each mutation that changes state sends one event to every live
    /// subscriber; a dropped reaction sends nothing. Disconnected receivers
    /// are cleaned up on the next send.
    pub fn subscribe(&mut self) -> Receiver<CalendarEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }
}

impl Default for CalendarStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-month reading stats for one owner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthSummary {
    /// Number of days with a record in the month
    pub record_count: usize,
    /// Number of distinct non-empty titles in the month
    pub unique_titles: usize,
}

/// First day of the month and first day of the following month
fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, end))
}
