//! Contracts for the pieces of the UI the intent layer waits on.
//!
//! Each call is synchronous from the state machine's point of view: it either
//! yields a value or aborts, and an abort turns the whole intent into a no-op.

/// Device image picker.
pub trait ImageSource {
    /// Returns the picked image's URL or local path, or `None` if the user
    /// backed out.
    fn pick_image(&mut self) -> Option<String>;
}

/// A two-button confirmation dialog.
pub trait Confirmation {
    /// `true` runs the confirm continuation, `false` the cancel one.
    fn confirm(&mut self, prompt: &Prompt) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

impl Prompt {
    pub fn archive_item() -> Self {
        Self {
            title: "Archive Item".into(),
            message: "Move this item to archive?".into(),
            confirm_label: "Archive",
            cancel_label: "Cancel",
        }
    }

    pub fn delete_channel(channel_name: &str) -> Self {
        Self {
            title: "Delete Group".into(),
            message: format!("Are you sure you want to delete {channel_name}?"),
            confirm_label: "Delete",
            cancel_label: "Cancel",
        }
    }

    pub fn leave_channel(channel_name: &str) -> Self {
        Self {
            title: "Leave Group".into(),
            message: format!("Are you sure you want to leave {channel_name}?"),
            confirm_label: "Leave",
            cancel_label: "Cancel",
        }
    }
}

impl<F> ImageSource for F
where
    F: FnMut() -> Option<String>,
{
    fn pick_image(&mut self) -> Option<String> {
        self()
    }
}

impl<F> Confirmation for F
where
    F: FnMut(&Prompt) -> bool,
{
    fn confirm(&mut self, prompt: &Prompt) -> bool {
        self(prompt)
    }
}
