/// Application name
pub const APP_NAME: &str = "Structura";

/// Member id of the acting local user unless configured otherwise
pub const DEFAULT_CURRENT_USER_ID: u64 = 99;

/// Display name used for messages and comments authored locally
pub const CURRENT_USER_DISPLAY_NAME: &str = "You";

/// Time label attached to freshly sent messages
pub const FRESH_MESSAGE_TIME: &str = "Now";

/// Cover shown for a folder until its first upload
pub const DEFAULT_COVER_URL: &str =
    "https://images.unsplash.com/photo-1628151015968-3a4429e9ef04?q=80&w=800&auto=format&fit=crop";

/// Folder that receives restored assets whose original folder is gone
/// (only with the `unsorted` restore policy)
pub const UNSORTED_FOLDER_NAME: &str = "Unsorted";

/// First id handed out by the default id sequence. Seed data uses ids below it.
pub const DEFAULT_ID_START: u64 = 1_000;

/// Comment coordinates are percentages of the image size
pub const PERCENT_MAX: f64 = 100.0;

/// Number of letters in a generated avatar
pub const MAX_INITIALS: usize = 2;

/// Members shown in a channel header before the "+N" overflow badge
pub const MEMBER_PREVIEW_LEN: usize = 3;

/// chrono format for folder date labels ("Oct 24")
pub const FOLDER_DATE_FORMAT: &str = "%b %d";

/// chrono format for comment and archive dates ("10/24/2024")
pub const SHORT_DATE_FORMAT: &str = "%m/%d/%Y";
