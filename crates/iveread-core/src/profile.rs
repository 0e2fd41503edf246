//! Profile store
//!
//! Holds the signed-in member's profile. Edits arrive as partial updates
//! from the profile form; fields not present in an update keep their
//! current value.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::{broadcast, ProfileEvent};

/// The signed-in member's profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Display nickname
    #[serde(default)]
    pub nickname: String,
    /// Account password; mock value, never verified anywhere
    #[serde(default)]
    pub password: String,
    /// Avatar emoji shown on the member strip
    #[serde(default)]
    pub emoji: String,
}

impl Profile {
    /// Create a profile with the given nickname and empty remaining fields
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            ..Self::default()
        }
    }
}

/// A partial profile edit; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub nickname: Option<String>,
    pub password: Option<String>,
    pub emoji: Option<String>,
}

/// In-memory store for the signed-in member's profile
pub struct ProfileStore {
    profile: Profile,
    subscribers: Vec<Sender<ProfileEvent>>,
}

impl ProfileStore {
    /// Create a store with the given initial profile
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            subscribers: Vec::new(),
        }
    }

    /// Get the current profile
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Apply a partial update, merging only the fields that are present
    ///
    /// Every call notifies subscribers, even when no field was present.
    pub fn update(&mut self, update: ProfileUpdate) {
        debug!("Updating profile");
        if let Some(nickname) = update.nickname {
            self.profile.nickname = nickname;
        }
        if let Some(password) = update.password {
            self.profile.password = password;
        }
        if let Some(emoji) = update.emoji {
            self.profile.emoji = emoji;
        }
        broadcast(&mut self.subscribers, &ProfileEvent::Updated);
    }

    /// Subscribe to profile change events
    pub fn subscribe(&mut self) -> Receiver<ProfileEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}
