//! Application state shared by every command.
//!
//! [`AppState`] owns the workspace, the chat room, the profile and the
//! transient view state, together with the injected collaborators that supply
//! time, ids and event delivery. Commands in [`crate::commands`] take it by
//! `&mut` and are the only code that mutates it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use structura_shared::clock::folder_date_label;
use structura_shared::constants::UNSORTED_FOLDER_NAME;
use structura_shared::{initials, AssetId, Clock, FolderId, IdSequence, IdSource, SystemClock};
use structura_store::{seed, ChatRoom, CommentDraft, Folder, Library, RestoreOutcome, Workspace};

use crate::config::ClientConfig;
use crate::events::{emit_event, EventSink, LogSink};

/// Editable profile shown on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Initials of the full name. Rosters and new messages use this.
    pub fn avatar(&self) -> String {
        initials(&self.full_name())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            first_name: "Andrew".into(),
            last_name: "Thomas".into(),
            email: "andrew.thomas@structura.io".into(),
        }
    }
}

/// The asset open in the full-screen viewer and the comment being composed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub asset_id: AssetId,
    pub draft: CommentDraft,
}

/// Transient navigation state of the library tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryView {
    /// Folder whose detail view is open.
    pub selected_folder: Option<FolderId>,
    pub search_query: String,
    pub viewer: Option<ViewerState>,
}

/// Central application state.
pub struct AppState {
    pub config: ClientConfig,

    /// Set by sign-in. While `false`, every intent outside
    /// [`crate::commands::session`] is declined.
    pub signed_in: bool,

    /// Folder library and archive.
    pub workspace: Workspace,

    /// Channels, rosters and messages.
    pub chat: ChatRoom,

    pub profile: Profile,
    pub library_view: LibraryView,

    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
    events: Box<dyn EventSink>,
}

impl AppState {
    /// Create the state with the wall clock, a fresh id sequence and a
    /// logging event sink.
    pub fn new(config: ClientConfig) -> Self {
        let ids = IdSequence::starting_at(config.id_start);
        Self::with_collaborators(config, Box::new(SystemClock), Box::new(ids), Box::new(LogSink))
    }

    pub fn with_collaborators(
        config: ClientConfig,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdSource>,
        events: Box<dyn EventSink>,
    ) -> Self {
        let profile = Profile::default();
        let me = seed::current_user(config.current_user_id, &profile.avatar());

        let mut state = Self {
            workspace: Workspace::new(Library::default(), config.restore_policy),
            chat: ChatRoom::new(Vec::new(), Vec::new(), me),
            config,
            signed_in: false,
            profile,
            library_view: LibraryView::default(),
            clock,
            ids,
            events,
        };
        state.reset_content();
        state
    }

    /// Put the workspace, chat, profile and views back to their starting
    /// content. Ids keep counting from where they were.
    pub fn reset_content(&mut self) {
        self.profile = Profile::default();
        self.library_view = LibraryView::default();

        let me = seed::current_user(self.config.current_user_id, &self.profile.avatar());
        let (folders, channels, messages) = if self.config.seed_mock_data {
            (
                seed::initial_folders(self.ids.as_mut()),
                seed::initial_channels(&me),
                seed::initial_messages(&me),
            )
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };

        self.workspace = Workspace::new(Library::new(folders), self.config.restore_policy);
        self.chat = ChatRoom::new(channels, messages, me);

        tracing::debug!(
            seeded = self.config.seed_mock_data,
            folders = self.workspace.library.folders().len(),
            channels = self.chat.channels().len(),
            "Content reset"
        );
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub(crate) fn next_id(&mut self) -> u64 {
        self.ids.next_id()
    }

    /// Restore an archived asset. A missing original folder is handled by the
    /// configured policy; an "Unsorted" folder created on the way takes the
    /// next id and today's label.
    pub(crate) fn restore_archived(
        &mut self,
        asset_id: AssetId,
    ) -> structura_store::Result<RestoreOutcome> {
        let label = folder_date_label(self.clock.now());
        let ids = &mut self.ids;
        self.workspace.restore_asset(asset_id, || {
            Folder::new(FolderId(ids.next_id()), UNSORTED_FOLDER_NAME, label)
        })
    }

    pub(crate) fn emit<S: Serialize>(&mut self, event: &str, payload: S) {
        emit_event(self.events.as_mut(), event, payload);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
