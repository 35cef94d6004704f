use tracing::info;

use structura_shared::AssetId;
use structura_store::{ArchivedItem, RestoreOutcome, StoreError};

use super::{applied, declined, notify_archive, notify_library, require_session};
use crate::collaborators::{Confirmation, Prompt};
use crate::state::AppState;

/// Archive an asset of the open folder after the user confirms.
pub fn archive_asset(
    state: &mut AppState,
    asset_id: AssetId,
    confirmation: &mut dyn Confirmation,
) -> Option<AssetId> {
    require_session(state, "archive_asset")?;
    let Some(folder_id) = state.library_view.selected_folder else {
        declined("archive_asset", "no folder open");
        return None;
    };
    if state.workspace.library.asset(folder_id, asset_id).is_none() {
        declined(
            "archive_asset",
            StoreError::AssetNotFound {
                folder: folder_id,
                asset: asset_id,
            },
        );
        return None;
    }

    if !confirmation.confirm(&Prompt::archive_item()) {
        declined("archive_asset", "not confirmed");
        return None;
    }

    let now = state.now();
    applied(
        "archive_asset",
        state
            .workspace
            .archive_asset(folder_id, asset_id, now)
            .map(|_| ()),
    )?;

    if state
        .library_view
        .viewer
        .as_ref()
        .is_some_and(|v| v.asset_id == asset_id)
    {
        state.library_view.viewer = None;
    }

    notify_library(state);
    notify_archive(state);
    Some(asset_id)
}

pub fn archived_items(state: &AppState) -> &[ArchivedItem] {
    state.workspace.archive.items()
}

/// Move an archived item back to its folder, or wherever the configured
/// missing-folder policy sends it.
pub fn restore(state: &mut AppState, asset_id: AssetId) -> Option<RestoreOutcome> {
    require_session(state, "restore")?;
    let outcome = applied("restore", state.restore_archived(asset_id))?;

    info!(asset_id = %asset_id, ?outcome, "Archive item handled");
    if let RestoreOutcome::Restored { .. } = outcome {
        notify_library(state);
    }
    notify_archive(state);
    Some(outcome)
}
