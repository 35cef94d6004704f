use tracing::info;

use structura_shared::clock::folder_date_label;
use structura_shared::{AssetId, FolderId};
use structura_store::{Asset, Folder, StoreError};

use super::{applied, declined, notify_library, require_session};
use crate::collaborators::ImageSource;
use crate::state::AppState;

/// Create an empty folder at the head of the library, dated today.
pub fn create_folder(state: &mut AppState, name: &str) -> Option<FolderId> {
    require_session(state, "create_folder")?;
    let id = FolderId(state.next_id());
    let date = folder_date_label(state.now());

    let folder_id = applied(
        "create_folder",
        state.workspace.library.create_folder(id, name, date).map(|f| f.id),
    )?;

    info!(folder_id = %folder_id, name = name.trim(), "Folder created");
    notify_library(state);
    Some(folder_id)
}

/// Update the search box and return the ids of the folders it matches.
pub fn search_folders(state: &mut AppState, query: &str) -> Vec<FolderId> {
    if require_session(state, "search_folders").is_none() {
        return Vec::new();
    }
    state.library_view.search_query = query.to_string();
    visible_folders(state).iter().map(|f| f.id).collect()
}

/// Folders the library grid shows for the current search query.
pub fn visible_folders(state: &AppState) -> Vec<&Folder> {
    state
        .workspace
        .library
        .search(&state.library_view.search_query)
}

pub fn open_folder(state: &mut AppState, folder_id: FolderId) -> Option<&Folder> {
    require_session(state, "open_folder")?;
    if state.workspace.library.folder(folder_id).is_none() {
        declined("open_folder", StoreError::FolderNotFound(folder_id));
        return None;
    }

    state.library_view.selected_folder = Some(folder_id);
    state.library_view.viewer = None;
    state.workspace.library.folder(folder_id)
}

pub fn close_folder(state: &mut AppState) {
    state.library_view.selected_folder = None;
    state.library_view.viewer = None;
}

/// The folder whose detail view is open, if it still exists.
pub fn selected_folder(state: &AppState) -> Option<&Folder> {
    state
        .library_view
        .selected_folder
        .and_then(|id| state.workspace.library.folder(id))
}

/// Ask the picker for an image and prepend it to the open folder.
pub fn upload_image(state: &mut AppState, picker: &mut dyn ImageSource) -> Option<AssetId> {
    require_session(state, "upload_image")?;
    let Some(folder_id) = selected_folder(state).map(|f| f.id) else {
        declined("upload_image", "no folder open");
        return None;
    };

    let Some(url) = picker.pick_image() else {
        declined("upload_image", "picker cancelled");
        return None;
    };

    let asset_id = AssetId(state.next_id());
    let asset = Asset::new(asset_id, url, Asset::upload_name(asset_id));
    applied(
        "upload_image",
        state.workspace.library.upload_asset(folder_id, asset),
    )?;

    info!(folder_id = %folder_id, asset_id = %asset_id, "Image uploaded");
    notify_library(state);
    Some(asset_id)
}
