//! Archive and restore transitions between the library and the archive.
//!
//! An asset lives in exactly one place at a time: the content of one folder,
//! or the archive. Both transitions move it in a single step and either fully
//! apply or leave both containers untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use structura_shared::constants::UNSORTED_FOLDER_NAME;
use structura_shared::{AssetId, FolderId};

use crate::archive::Archive;
use crate::error::Result;
use crate::library::Library;
use crate::models::{ArchivedItem, Folder};

/// What to do when an archived asset's original folder no longer exists.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingFolderPolicy {
    /// Remove the item from the archive and discard it.
    #[default]
    Drop,
    /// Restore into a folder named "Unsorted", creating it at the head of the
    /// library if needed.
    Unsorted,
}

/// Where a restored asset ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored { folder_id: FolderId },
    Dropped,
}

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub library: Library,
    pub archive: Archive,
    pub missing_folder_policy: MissingFolderPolicy,
}

impl Workspace {
    pub fn new(library: Library, missing_folder_policy: MissingFolderPolicy) -> Self {
        Self {
            library,
            archive: Archive::default(),
            missing_folder_policy,
        }
    }

    /// Move an asset out of its folder and onto the head of the archive.
    pub fn archive_asset(
        &mut self,
        folder_id: FolderId,
        asset_id: AssetId,
        now: DateTime<Utc>,
    ) -> Result<&ArchivedItem> {
        let (asset, folder_name) = self.library.take_asset(folder_id, asset_id)?;

        self.archive.push_front(ArchivedItem {
            asset,
            original_folder_id: folder_id,
            original_folder_name: folder_name,
            archived_at: now,
        });

        info!(
            folder_id = %folder_id,
            asset_id = %asset_id,
            archived = self.archive.len(),
            "Asset archived"
        );
        Ok(&self.archive.items()[0])
    }

    /// Take an item out of the archive and put the bare asset back at the
    /// head of its original folder.
    ///
    /// `fallback` builds the "Unsorted" folder; it is only called under
    /// [`MissingFolderPolicy::Unsorted`] when no such folder exists yet.
    pub fn restore_asset<F>(&mut self, archived_id: AssetId, fallback: F) -> Result<RestoreOutcome>
    where
        F: FnOnce() -> Folder,
    {
        let item = self.archive.take(archived_id)?;
        let original = item.original_folder_id;

        let target = if self.library.folder(original).is_some() {
            original
        } else {
            match self.missing_folder_policy {
                MissingFolderPolicy::Drop => {
                    warn!(
                        asset_id = %archived_id,
                        folder_id = %original,
                        "Original folder is gone, dropping archived asset"
                    );
                    return Ok(RestoreOutcome::Dropped);
                }
                MissingFolderPolicy::Unsorted => self.unsorted_folder(fallback),
            }
        };

        self.library.upload_asset(target, item.into_asset())?;
        info!(asset_id = %archived_id, folder_id = %target, "Asset restored");
        Ok(RestoreOutcome::Restored { folder_id: target })
    }

    fn unsorted_folder<F>(&mut self, fallback: F) -> FolderId
    where
        F: FnOnce() -> Folder,
    {
        if let Some(folder) = self
            .library
            .folders()
            .iter()
            .find(|f| f.name == UNSORTED_FOLDER_NAME)
        {
            return folder.id;
        }

        let folder = fallback();
        let id = folder.id;
        self.library.insert_front(folder);
        id
    }
}
