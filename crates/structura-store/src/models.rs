//! Domain model structs held by the in-memory state machines.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the UI layer as part of a snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use structura_shared::clock::short_date_label;
use structura_shared::constants::DEFAULT_COVER_URL;
use structura_shared::{
    AssetId, ChannelId, CommentId, FolderId, MemberId, MemberRole, MessageId, Point,
};

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A text annotation pinned to a point on an asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    /// Horizontal position, percent of the image width.
    pub x: f64,
    /// Vertical position, percent of the image height.
    pub y: f64,
    pub text: String,
    pub user: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn point(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    pub fn date_label(&self) -> String {
        short_date_label(self.date)
    }
}

/// What the image viewer collects before a comment exists: an optional
/// selected point and the typed text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentDraft {
    pub point: Option<Point>,
    pub text: String,
}

impl CommentDraft {
    pub fn new(point: Point, text: impl Into<String>) -> Self {
        Self {
            point: Some(point),
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// An image inside a folder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub url: String,
    pub name: String,
    pub comments: Vec<Comment>,
}

impl Asset {
    pub fn new(id: AssetId, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            name: name.into(),
            comments: Vec::new(),
        }
    }

    /// File name given to images picked from the device.
    pub fn upload_name(id: AssetId) -> String {
        format!("Image_{id}.jpg")
    }
}

// ---------------------------------------------------------------------------
// Folder
// ---------------------------------------------------------------------------

/// A named, ordered collection of assets. Newest assets come first.
///
/// `items` mirrors `content.len()`; both are private so the only way to
/// change the content is through methods that keep them in step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "FolderRecord")]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    items: usize,
    /// Short creation label, e.g. `"Oct 24"`.
    pub date: String,
    pub cover: String,
    content: Vec<Asset>,
}

impl Folder {
    /// An empty folder with the default cover.
    pub fn new(id: FolderId, name: impl Into<String>, date: impl Into<String>) -> Self {
        Self::with_content(id, name, date, DEFAULT_COVER_URL, Vec::new())
    }

    pub fn with_content(
        id: FolderId,
        name: impl Into<String>,
        date: impl Into<String>,
        cover: impl Into<String>,
        content: Vec<Asset>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            items: content.len(),
            date: date.into(),
            cover: cover.into(),
            content,
        }
    }

    pub fn items(&self) -> usize {
        self.items
    }

    pub fn content(&self) -> &[Asset] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    pub fn asset(&self, id: AssetId) -> Option<&Asset> {
        self.content.iter().find(|a| a.id == id)
    }

    pub(crate) fn asset_mut(&mut self, id: AssetId) -> Option<&mut Asset> {
        self.content.iter_mut().find(|a| a.id == id)
    }

    /// Insert at the head. The cover follows the asset only when the folder
    /// was empty before.
    pub(crate) fn prepend(&mut self, asset: Asset) {
        if self.is_empty() {
            self.cover = asset.url.clone();
        }
        self.content.insert(0, asset);
        self.items = self.content.len();
    }

    pub(crate) fn remove(&mut self, id: AssetId) -> Option<Asset> {
        let index = self.content.iter().position(|a| a.id == id)?;
        let asset = self.content.remove(index);
        self.items = self.content.len();
        Some(asset)
    }
}

/// Incoming folder shape. Any `items` count in the input is ignored and
/// recomputed from `content`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FolderRecord {
    id: FolderId,
    name: String,
    date: String,
    cover: String,
    #[serde(default)]
    content: Vec<Asset>,
}

impl From<FolderRecord> for Folder {
    fn from(record: FolderRecord) -> Self {
        Folder::with_content(record.id, record.name, record.date, record.cover, record.content)
    }
}

// ---------------------------------------------------------------------------
// Archive
// ---------------------------------------------------------------------------

/// An asset removed from its folder, with enough provenance to put it back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedItem {
    #[serde(flatten)]
    pub asset: Asset,
    pub original_folder_id: FolderId,
    pub original_folder_name: String,
    pub archived_at: DateTime<Utc>,
}

impl ArchivedItem {
    pub fn id(&self) -> AssetId {
        self.asset.id
    }

    pub fn archived_date_label(&self) -> String {
        short_date_label(self.archived_at)
    }

    /// Drop the provenance and hand back the bare asset.
    pub fn into_asset(self) -> Asset {
        self.asset
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// A participant in a channel roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub role: MemberRole,
    /// Avatar initials, e.g. `"SC"`.
    pub avatar: String,
}

/// A named chat room with its own roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: ChannelId,
    /// Display name, e.g. `"# general"`.
    pub name: String,
    pub description: String,
    pub members: Vec<Member>,
}

impl Channel {
    pub fn has_member(&self, id: MemberId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }
}

/// A single chat message. Messages live in one flat list and point at their
/// channel by id only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub user: String,
    pub avatar: String,
    pub text: String,
    /// Display time, e.g. `"10:30 AM"` or `"Now"`.
    pub time: String,
    pub is_me: bool,
    pub channel_id: ChannelId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_sets_cover_only_when_empty() {
        let mut folder = Folder::new(FolderId(1), "Lofts", "Oct 24");
        assert_eq!(folder.cover, DEFAULT_COVER_URL);

        folder.prepend(Asset::new(AssetId(1), "X", "x.jpg"));
        assert_eq!(folder.cover, "X");

        folder.prepend(Asset::new(AssetId(2), "Y", "y.jpg"));
        assert_eq!(folder.cover, "X");
        assert_eq!(folder.items(), 2);
    }

    #[test]
    fn test_remove_keeps_count_in_step() {
        let content = vec![
            Asset::new(AssetId(1), "a", "a.jpg"),
            Asset::new(AssetId(2), "b", "b.jpg"),
        ];
        let mut folder = Folder::with_content(FolderId(1), "F", "Oct 24", "a", content);

        assert!(folder.remove(AssetId(3)).is_none());
        assert_eq!(folder.items(), 2);

        let removed = folder.remove(AssetId(1)).unwrap();
        assert_eq!(removed.url, "a");
        assert_eq!(folder.items(), folder.content().len());
        assert_eq!(folder.items(), 1);
    }

    #[test]
    fn test_archived_item_flattens_asset_fields() {
        let item = ArchivedItem {
            asset: Asset::new(AssetId(4), "u", "n.jpg"),
            original_folder_id: FolderId(2),
            original_folder_name: "Offices".into(),
            archived_at: DateTime::<Utc>::default(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["url"], "u");
        assert_eq!(json["originalFolderId"], 2);
        assert_eq!(json["originalFolderName"], "Offices");
    }

    #[test]
    fn test_new_folder_uses_placeholder_cover() {
        let folder = Folder::new(FolderId(1), "F", "Oct 24");
        assert!(folder.cover.contains("photo-1628151015968-3a4429e9ef04"));
        assert!(folder.is_empty());
    }

    #[test]
    fn test_deserialized_folder_counts_its_content() {
        let json = r#"{
            "id": 9,
            "name": "Imported",
            "items": 5,
            "date": "Oct 24",
            "cover": "c",
            "content": [{"id": 1, "url": "u", "name": "n.jpg", "comments": []}]
        }"#;

        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.items(), 1);
        assert_eq!(folder.items(), folder.content().len());

        let empty: Folder =
            serde_json::from_str(r#"{"id": 3, "name": "E", "items": 5, "date": "d", "cover": "c"}"#)
                .unwrap();
        assert_eq!(empty.items(), 0);
        assert!(empty.is_empty());
    }
}
