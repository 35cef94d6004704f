//! Intent handlers.
//!
//! Each sub-module groups the intents of one screen. Handlers return `Some`
//! when the intent was applied and `None` when it was declined. A declined
//! intent leaves [`AppState`] untouched and is only logged, never surfaced.

pub mod archive;
pub mod chat;
pub mod library;
pub mod session;
pub mod settings;
pub mod viewer;

use std::fmt::Display;

use tracing::debug;

use crate::events::{
    ArchiveChangedPayload, ChannelsChangedPayload, LibraryChangedPayload, EVENT_ARCHIVE_CHANGED,
    EVENT_CHANNELS_CHANGED, EVENT_LIBRARY_CHANGED,
};
use crate::state::AppState;

pub(crate) fn declined(intent: &'static str, reason: impl Display) {
    debug!(intent, reason = %reason, "Intent declined");
}

/// The main tabs only exist while signed in; every intent outside
/// [`session`] goes through this first.
pub(crate) fn require_session(state: &AppState, intent: &'static str) -> Option<()> {
    if state.signed_in {
        Some(())
    } else {
        declined(intent, "signed out");
        None
    }
}

pub(crate) fn applied<T>(intent: &'static str, result: structura_store::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            declined(intent, e);
            None
        }
    }
}

pub(crate) fn notify_library(state: &mut AppState) {
    let payload = LibraryChangedPayload {
        folders: state.workspace.library.folders().len(),
        assets: state.workspace.library.total_assets(),
    };
    state.emit(EVENT_LIBRARY_CHANGED, payload);
}

pub(crate) fn notify_archive(state: &mut AppState) {
    let payload = ArchiveChangedPayload {
        archived: state.workspace.archive.len(),
    };
    state.emit(EVENT_ARCHIVE_CHANGED, payload);
}

pub(crate) fn notify_channels(state: &mut AppState) {
    let payload = ChannelsChangedPayload {
        channels: state.chat.channels().len(),
        active_channel_id: state.chat.active_channel_id().map(|id| id.to_string()),
    };
    state.emit(EVENT_CHANNELS_CHANGED, payload);
}
