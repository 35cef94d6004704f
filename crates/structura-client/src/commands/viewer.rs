//! Full-screen image viewer: open an asset from the selected folder, tap a
//! point on it, then type a comment pinned to that point.

use tracing::info;

use structura_shared::{AssetId, CommentId, Point, Viewport};
use structura_store::{Asset, CommentDraft, StoreError};

use super::{applied, declined, notify_library, require_session};
use crate::state::{AppState, ViewerState};

pub fn view_asset(state: &mut AppState, asset_id: AssetId) -> Option<&Asset> {
    require_session(state, "view_asset")?;
    let Some(folder_id) = state.library_view.selected_folder else {
        declined("view_asset", "no folder open");
        return None;
    };
    if state.workspace.library.asset(folder_id, asset_id).is_none() {
        declined(
            "view_asset",
            StoreError::AssetNotFound {
                folder: folder_id,
                asset: asset_id,
            },
        );
        return None;
    }

    state.library_view.viewer = Some(ViewerState {
        asset_id,
        draft: CommentDraft::default(),
    });
    state.workspace.library.asset(folder_id, asset_id)
}

pub fn close_viewer(state: &mut AppState) {
    state.library_view.viewer = None;
}

/// The asset shown in the viewer, if any.
pub fn viewed_asset(state: &AppState) -> Option<&Asset> {
    let folder_id = state.library_view.selected_folder?;
    let viewer = state.library_view.viewer.as_ref()?;
    state.workspace.library.asset(folder_id, viewer.asset_id)
}

/// Turn a tap on the displayed image into the draft's comment point.
pub fn select_point(
    state: &mut AppState,
    x_px: f64,
    y_px: f64,
    viewport: Viewport,
) -> Option<Point> {
    require_session(state, "select_point")?;
    let point = applied(
        "select_point",
        Point::from_tap(x_px, y_px, viewport).map_err(StoreError::from),
    )?;

    let Some(viewer) = state.library_view.viewer.as_mut() else {
        declined("select_point", "viewer closed");
        return None;
    };
    viewer.draft.point = Some(point);
    Some(point)
}

/// Drop the selected point and any typed text.
pub fn cancel_comment(state: &mut AppState) {
    if let Some(viewer) = state.library_view.viewer.as_mut() {
        viewer.draft = CommentDraft::default();
    }
}

/// Pin `text` at the selected point. On success the draft is cleared; on a
/// decline the selected point is kept so the user can retry.
pub fn submit_comment(state: &mut AppState, text: &str) -> Option<CommentId> {
    require_session(state, "submit_comment")?;
    let (Some(folder_id), Some(viewer)) = (
        state.library_view.selected_folder,
        state.library_view.viewer.as_ref(),
    ) else {
        declined("submit_comment", "viewer closed");
        return None;
    };

    let asset_id = viewer.asset_id;
    let draft = CommentDraft {
        point: viewer.draft.point,
        text: text.to_string(),
    };
    let comment_id = CommentId(state.next_id());
    let now = state.now();

    applied(
        "submit_comment",
        state
            .workspace
            .library
            .add_comment(folder_id, asset_id, &draft, comment_id, now)
            .map(|_| ()),
    )?;

    if let Some(viewer) = state.library_view.viewer.as_mut() {
        viewer.draft = CommentDraft::default();
    }

    info!(asset_id = %asset_id, comment_id = %comment_id, "Comment added");
    notify_library(state);
    Some(comment_id)
}
