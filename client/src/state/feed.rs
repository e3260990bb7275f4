//! Session state for one mounted block feed.
//!
//! DESIGN
//! ======
//! The record sequence is append-only: records are private and only
//! `push_record` can extend them, so a record never changes value or position
//! once shown. Every append bumps `revision`, which the list view and the
//! auto-scroll effect track instead of diffing the whole sequence.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use blocks::DisplayRecord;

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed, dropped, or not yet opened.
    #[default]
    Disconnected,
    /// WebSocket handshake is in progress.
    Connecting,
    /// WebSocket is open and frames are being received.
    Connected,
    /// The socket errored or closed before it ever opened.
    Failed,
}

/// Feed state scoped to a single mount of the feed page.
#[derive(Clone, Debug, Default)]
pub struct FeedState {
    /// Host-assigned identifier for labeling this session.
    pub client_id: String,
    /// Current WebSocket connection lifecycle state.
    pub connection_status: ConnectionStatus,
    /// Incremented on every append.
    pub revision: u64,
    /// Frames rejected by decoding since mount.
    pub dropped: u64,
    /// Reason for the most recent dropped frame or connection failure.
    pub last_error: Option<String>,
    records: Vec<DisplayRecord>,
}

impl FeedState {
    /// Empty state for a new mount.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self { client_id: client_id.into(), ..Self::default() }
    }

    /// Records received so far, in arrival order.
    #[must_use]
    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record to the end of the sequence.
    pub fn push_record(&mut self, record: DisplayRecord) {
        self.records.push(record);
        self.revision += 1;
    }

    /// Count a rejected frame and remember why.
    pub fn record_drop(&mut self, reason: impl Into<String>) {
        self.dropped += 1;
        self.last_error = Some(reason.into());
    }

    /// Note that a frame arrived, which proves the handshake completed.
    pub fn mark_open(&mut self) {
        if self.connection_status == ConnectionStatus::Connecting {
            self.connection_status = ConnectionStatus::Connected;
        }
    }

    /// Note that the connection could not be opened at all.
    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        self.connection_status = ConnectionStatus::Failed;
        self.last_error = Some(reason.into());
    }

    /// Note that the socket ended. Ending while still connecting is a failure.
    pub fn mark_closed(&mut self, reason: Option<String>) {
        if self.connection_status == ConnectionStatus::Connecting {
            self.mark_failed(reason.unwrap_or_else(|| "connection closed before opening".to_owned()));
            return;
        }
        self.connection_status = ConnectionStatus::Disconnected;
        if let Some(reason) = reason {
            self.last_error = Some(reason);
        }
    }

    /// Display label for the session, e.g. `user-k3j9x0a`.
    #[must_use]
    pub fn client_label(&self) -> String {
        format!("user-{}", self.client_id)
    }
}
