use serde::Serialize;
use serde_json::Value;

pub const EVENT_LIBRARY_CHANGED: &str = "library-changed";
pub const EVENT_ARCHIVE_CHANGED: &str = "archive-changed";
pub const EVENT_CHANNELS_CHANGED: &str = "channels-changed";
pub const EVENT_NEW_MESSAGE: &str = "new-message";
pub const EVENT_PROFILE_CHANGED: &str = "profile-changed";
pub const EVENT_SESSION_CHANGED: &str = "session-changed";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryChangedPayload {
    pub folders: usize,
    pub assets: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveChangedPayload {
    pub archived: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelsChangedPayload {
    pub channels: usize,
    pub active_channel_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessagePayload {
    pub channel_id: String,
    pub message_id: u64,
    pub user: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileChangedPayload {
    pub full_name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionChangedPayload {
    pub signed_in: bool,
}

/// Receives state-change notifications for whatever renders the UI.
pub trait EventSink {
    fn emit(&mut self, event: &str, payload: Value);
}

/// Sink used when no UI is attached: every event becomes a trace line.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: &str, payload: Value) {
        tracing::trace!(event, %payload, "Event");
    }
}

pub fn emit_event<S: Serialize>(sink: &mut dyn EventSink, event: &str, payload: S) {
    match serde_json::to_value(payload) {
        Ok(value) => sink.emit(event, value),
        Err(e) => tracing::error!(event, error = %e, "Failed to emit event"),
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingSink;
