//! Folder and asset state machine.
//!
//! [`Library`] owns every folder. All additions are newest-first: new folders
//! go to the head of the library, new assets to the head of their folder.
//! Comments are the exception and are appended in the order they are made.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use structura_shared::constants::CURRENT_USER_DISPLAY_NAME;
use structura_shared::{AssetId, CommentId, FolderId, Point};

use crate::error::{Result, StoreError};
use crate::models::{Asset, Comment, CommentDraft, Folder};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Library {
    folders: Vec<Folder>,
}

impl Library {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn asset(&self, folder_id: FolderId, asset_id: AssetId) -> Option<&Asset> {
        self.folder(folder_id)?.asset(asset_id)
    }

    /// Folders whose name contains `query`, ignoring case. An empty query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&Folder> {
        let needle = query.to_lowercase();
        self.folders
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn total_assets(&self) -> usize {
        self.folders.iter().map(Folder::items).sum()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Insert an empty folder at the head of the library.
    pub fn create_folder(
        &mut self,
        id: FolderId,
        name: &str,
        date_label: impl Into<String>,
    ) -> Result<&Folder> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        self.folders.insert(0, Folder::new(id, name, date_label));
        debug!(folder_id = %id, name, "Folder inserted");
        Ok(&self.folders[0])
    }

    /// Put an already-built folder at the head of the library.
    pub(crate) fn insert_front(&mut self, folder: Folder) {
        self.folders.insert(0, folder);
    }

    /// Prepend `asset` to a folder. The folder cover switches to the asset
    /// only if the folder was empty.
    pub fn upload_asset(&mut self, folder_id: FolderId, asset: Asset) -> Result<()> {
        let folder = self.folder_mut(folder_id)?;
        let asset_id = asset.id;
        folder.prepend(asset);
        debug!(folder_id = %folder_id, asset_id = %asset_id, items = folder.items(), "Asset uploaded");
        Ok(())
    }

    /// Append a comment to an asset. The draft needs a selected point inside
    /// the image and non-blank text.
    pub fn add_comment(
        &mut self,
        folder_id: FolderId,
        asset_id: AssetId,
        draft: &CommentDraft,
        comment_id: CommentId,
        now: DateTime<Utc>,
    ) -> Result<&Comment> {
        if draft.text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let point = draft.point.ok_or(StoreError::NoPointSelected)?;
        let point = Point::new(point.x, point.y)?;

        let asset = self
            .folder_mut(folder_id)?
            .asset_mut(asset_id)
            .ok_or(StoreError::AssetNotFound {
                folder: folder_id,
                asset: asset_id,
            })?;

        asset.comments.push(Comment {
            id: comment_id,
            x: point.x,
            y: point.y,
            text: draft.text.clone(),
            user: CURRENT_USER_DISPLAY_NAME.to_string(),
            date: now,
        });
        debug!(
            folder_id = %folder_id,
            asset_id = %asset_id,
            comments = asset.comments.len(),
            "Comment added"
        );

        Ok(&asset.comments[asset.comments.len() - 1])
    }

    /// Remove an asset from its folder, returning it with the folder's name.
    pub(crate) fn take_asset(
        &mut self,
        folder_id: FolderId,
        asset_id: AssetId,
    ) -> Result<(Asset, String)> {
        let folder = self.folder_mut(folder_id)?;
        let asset = folder.remove(asset_id).ok_or(StoreError::AssetNotFound {
            folder: folder_id,
            asset: asset_id,
        })?;
        Ok((asset, folder.name.clone()))
    }

    pub(crate) fn folder_mut(&mut self, id: FolderId) -> Result<&mut Folder> {
        self.folders
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(StoreError::FolderNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use structura_shared::constants::DEFAULT_COVER_URL;

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::default()
    }

    fn library_with_empty_folder() -> Library {
        let mut library = Library::default();
        library.create_folder(FolderId(1), "Lofts", "Oct 24").unwrap();
        library
    }

    fn assert_counts_match(library: &Library) {
        for folder in library.folders() {
            assert_eq!(folder.items(), folder.content().len());
        }
    }

    #[test]
    fn test_create_folder_rejects_blank_names() {
        let mut library = Library::default();
        assert_eq!(
            library.create_folder(FolderId(1), "", "Oct 24").unwrap_err(),
            StoreError::EmptyName
        );
        assert_eq!(
            library.create_folder(FolderId(1), "   ", "Oct 24").unwrap_err(),
            StoreError::EmptyName
        );
        assert!(library.folders().is_empty());
    }

    #[test]
    fn test_create_folder_inserts_at_head() {
        let mut library = Library::new(vec![Folder::new(FolderId(1), "Old", "Oct 01")]);
        library.create_folder(FolderId(2), "Lofts", "Oct 24").unwrap();

        assert_eq!(library.folders().len(), 2);
        let head = &library.folders()[0];
        assert_eq!(head.name, "Lofts");
        assert_eq!(head.items(), 0);
        assert_eq!(head.cover, DEFAULT_COVER_URL);
        assert!(head.content().is_empty());
    }

    #[test]
    fn test_create_folder_trims_name() {
        let mut library = Library::default();
        let folder = library.create_folder(FolderId(1), "  Lofts ", "Oct 24").unwrap();
        assert_eq!(folder.name, "Lofts");
    }

    #[test]
    fn test_upload_sets_cover_on_first_asset_only() {
        let mut library = library_with_empty_folder();

        library
            .upload_asset(FolderId(1), Asset::new(AssetId(10), "X", "x.jpg"))
            .unwrap();
        let folder = library.folder(FolderId(1)).unwrap();
        assert_eq!(folder.items(), 1);
        assert_eq!(folder.cover, "X");
        assert_eq!(folder.content()[0].url, "X");

        library
            .upload_asset(FolderId(1), Asset::new(AssetId(11), "Y", "y.jpg"))
            .unwrap();
        let folder = library.folder(FolderId(1)).unwrap();
        assert_eq!(folder.items(), 2);
        assert_eq!(folder.cover, "X");
        let urls: Vec<&str> = folder.content().iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, ["Y", "X"]);
        assert_counts_match(&library);
    }

    #[test]
    fn test_upload_into_missing_folder() {
        let mut library = library_with_empty_folder();
        let err = library
            .upload_asset(FolderId(9), Asset::new(AssetId(10), "X", "x.jpg"))
            .unwrap_err();
        assert_eq!(err, StoreError::FolderNotFound(FolderId(9)));
        assert_eq!(library.total_assets(), 0);
    }

    #[test]
    fn test_add_comment_appends() {
        let mut library = library_with_empty_folder();
        library
            .upload_asset(FolderId(1), Asset::new(AssetId(10), "X", "x.jpg"))
            .unwrap();

        let draft = CommentDraft::new(Point { x: 40.0, y: 60.0 }, "Nice");
        library
            .add_comment(FolderId(1), AssetId(10), &draft, CommentId(20), now())
            .unwrap();
        let second = CommentDraft::new(Point { x: 1.0, y: 2.0 }, "Later");
        library
            .add_comment(FolderId(1), AssetId(10), &second, CommentId(21), now())
            .unwrap();

        let comments = &library.asset(FolderId(1), AssetId(10)).unwrap().comments;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].x, 40.0);
        assert_eq!(comments[0].y, 60.0);
        assert_eq!(comments[0].text, "Nice");
        assert_eq!(comments[0].user, CURRENT_USER_DISPLAY_NAME);
        assert_eq!(comments[1].text, "Later");
    }

    #[test]
    fn test_add_comment_declines_invalid_drafts() {
        let mut library = library_with_empty_folder();
        library
            .upload_asset(FolderId(1), Asset::new(AssetId(10), "X", "x.jpg"))
            .unwrap();

        let empty = CommentDraft::new(Point { x: 40.0, y: 60.0 }, "");
        assert_eq!(
            library
                .add_comment(FolderId(1), AssetId(10), &empty, CommentId(1), now())
                .unwrap_err(),
            StoreError::EmptyText
        );

        let no_point = CommentDraft {
            point: None,
            text: "Nice".into(),
        };
        assert_eq!(
            library
                .add_comment(FolderId(1), AssetId(10), &no_point, CommentId(1), now())
                .unwrap_err(),
            StoreError::NoPointSelected
        );

        let outside = CommentDraft::new(Point { x: 140.0, y: 60.0 }, "Nice");
        assert!(matches!(
            library.add_comment(FolderId(1), AssetId(10), &outside, CommentId(1), now()),
            Err(StoreError::InvalidPoint(_))
        ));

        let good = CommentDraft::new(Point { x: 40.0, y: 60.0 }, "Nice");
        assert_eq!(
            library
                .add_comment(FolderId(1), AssetId(99), &good, CommentId(1), now())
                .unwrap_err(),
            StoreError::AssetNotFound {
                folder: FolderId(1),
                asset: AssetId(99)
            }
        );

        assert!(library
            .asset(FolderId(1), AssetId(10))
            .unwrap()
            .comments
            .is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_on_names() {
        let library = Library::new(vec![
            Folder::new(FolderId(1), "Minimalist Lofts", "Oct 24"),
            Folder::new(FolderId(2), "Industrial Offices", "Nov 02"),
            Folder::new(FolderId(3), "Dark Modernism", "Nov 21"),
        ]);

        let hits: Vec<FolderId> = library.search("LOFT").iter().map(|f| f.id).collect();
        assert_eq!(hits, [FolderId(1)]);

        let hits: Vec<FolderId> = library.search("ism").iter().map(|f| f.id).collect();
        assert_eq!(hits, [FolderId(3)]);

        assert_eq!(library.search("").len(), 3);
        assert!(library.search("retail").is_empty());
    }
}
