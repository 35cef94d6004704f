//! # structura-store
//!
//! In-memory state for the Structura app: the folder library, the archive,
//! and the chat rooms. Nothing here is persisted; the containers live as long
//! as the process.
//!
//! Every mutation either applies completely or returns a [`StoreError`] and
//! leaves the container exactly as it was. Callers that present these errors
//! to a user are expected to treat them as declined intents, not failures.

pub mod archive;
pub mod chat;
pub mod library;
pub mod models;
pub mod seed;
pub mod workspace;

mod error;

pub use archive::Archive;
pub use chat::{ChatRoom, MemberPreview};
pub use error::{Result, StoreError};
pub use library::Library;
pub use models::*;
pub use workspace::{MissingFolderPolicy, RestoreOutcome, Workspace};
