use std::sync::mpsc::Sender;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Events emitted by the calendar store when records change.
///
/// Events carry keys only; consumers re-read the store for the new state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalendarEvent {
    /// A record was inserted or overwritten at (owner, date)
    RecordAdded { owner: String, date: NaiveDate },
    /// A reaction was appended to the record at (owner, date)
    ReactionAdded { owner: String, date: NaiveDate },
}

/// Events emitted by the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileEvent {
    Updated,
}

/// Send an event to every live subscriber, dropping disconnected ones.
pub(crate) fn broadcast<E: Clone>(subscribers: &mut Vec<Sender<E>>, event: &E) {
    subscribers.retain(|tx| tx.send(event.clone()).is_ok());
}
