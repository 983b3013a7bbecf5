//! # Store Events
//!
//! Events published on every state transition. Subscribers treat an event
//! as "the frame may have changed" and re-read it; the payload is for logs
//! and diagnostics, not for reconstructing state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of store event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreEventKind {
    /// A catalog fetch started
    LoadStarted,
    /// A catalog fetch completed and replaced the items
    LoadCompleted,
    /// A catalog fetch failed; previous items kept
    LoadFailed,
    /// The category filter changed
    CategoryChanged,
    /// A product was selected and the detail view opened
    ProductSelected,
    /// The detail view closed
    DetailClosed,
    /// The add-to-cart notification opened
    NotificationOpened,
    /// The add-to-cart notification dismissed (manually or by timeout)
    NotificationDismissed,
    /// The light/dark display mode toggled
    ModeToggled,
}

/// A state-transition event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreEvent {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Kind of event
    pub kind: StoreEventKind,
    /// Associated data (JSON)
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl StoreEvent {
    /// Create a new event
    pub fn new(kind: StoreEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            data: None,
        }
    }

    /// Add data to the event
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}
