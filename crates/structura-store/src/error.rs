use thiserror::Error;

use structura_shared::{AssetId, ChannelId, FolderId, MemberId, SharedError};

/// Reasons a state transition was declined. State is always left untouched
/// when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// A folder or member name was blank after trimming.
    #[error("Name must not be empty")]
    EmptyName,

    /// A comment or message body was blank after trimming.
    #[error("Text must not be empty")]
    EmptyText,

    /// A comment was submitted before a point on the image was chosen.
    #[error("No point selected on the image")]
    NoPointSelected,

    #[error("Invalid comment point: {0}")]
    InvalidPoint(#[from] SharedError),

    #[error("Folder not found: {0}")]
    FolderNotFound(FolderId),

    #[error("Asset {asset} not found in folder {folder}")]
    AssetNotFound { folder: FolderId, asset: AssetId },

    #[error("Archived item not found: {0}")]
    ArchivedItemNotFound(AssetId),

    #[error("Channel not found: {0}")]
    ChannelNotFound(ChannelId),

    #[error("Member {member} not found in channel {channel}")]
    MemberNotFound { channel: ChannelId, member: MemberId },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
