//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the app starts with zero configuration.

use structura_shared::constants::{DEFAULT_CURRENT_USER_ID, DEFAULT_ID_START};
use structura_shared::{MemberId, SharedError};
use structura_store::seed::SEEDED_MEMBER_IDS;
use structura_store::MissingFolderPolicy;

/// Client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Member id of the acting user in channel rosters. Must not be a seeded
    /// member's id or fall in the generated id range.
    /// Env: `STRUCTURA_USER_ID`
    /// Default: `99`
    pub current_user_id: MemberId,

    /// Whether the mock folders, channels and messages are loaded on start
    /// and after every sign-out.
    /// Env: `STRUCTURA_SEED` (true/false)
    /// Default: `true`
    pub seed_mock_data: bool,

    /// Where restored assets go when their folder no longer exists.
    /// Env: `STRUCTURA_RESTORE_POLICY` (`drop` / `unsorted`)
    /// Default: `drop`
    pub restore_policy: MissingFolderPolicy,

    /// First id handed out for new folders, assets, comments, members and
    /// messages. Must stay above the ids used by the seed data.
    /// Env: `STRUCTURA_ID_START`
    /// Default: `1000`
    pub id_start: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            current_user_id: MemberId(DEFAULT_CURRENT_USER_ID),
            seed_mock_data: true,
            restore_policy: MissingFolderPolicy::Drop,
            id_start: DEFAULT_ID_START,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("STRUCTURA_USER_ID") {
            match parse_u64("STRUCTURA_USER_ID", &val) {
                Ok(id) => config.current_user_id = MemberId(id),
                Err(e) => tracing::warn!(error = %e, "Invalid STRUCTURA_USER_ID, using default"),
            }
        }

        if let Some(val) = lookup("STRUCTURA_SEED") {
            config.seed_mock_data = val != "false" && val != "0";
        }

        if let Some(val) = lookup("STRUCTURA_RESTORE_POLICY") {
            match parse_restore_policy(&val) {
                Ok(policy) => config.restore_policy = policy,
                Err(e) => {
                    tracing::warn!(error = %e, "Invalid STRUCTURA_RESTORE_POLICY, using default")
                }
            }
        }

        if let Some(val) = lookup("STRUCTURA_ID_START") {
            match parse_u64("STRUCTURA_ID_START", &val) {
                Ok(start) if start >= DEFAULT_ID_START => config.id_start = start,
                Ok(start) => tracing::warn!(
                    value = start,
                    minimum = DEFAULT_ID_START,
                    "STRUCTURA_ID_START would collide with seed ids, using default"
                ),
                Err(e) => tracing::warn!(error = %e, "Invalid STRUCTURA_ID_START, using default"),
            }
        }

        let user_id = config.current_user_id.get();
        if user_id >= config.id_start || SEEDED_MEMBER_IDS.contains(&user_id) {
            tracing::warn!(
                user_id,
                id_start = config.id_start,
                "STRUCTURA_USER_ID would collide with other member ids, using default"
            );
            config.current_user_id = MemberId(DEFAULT_CURRENT_USER_ID);
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64, SharedError> {
    value.trim().parse().map_err(|_| SharedError::InvalidConfig {
        key,
        value: value.to_string(),
    })
}

fn parse_restore_policy(value: &str) -> Result<MissingFolderPolicy, SharedError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "drop" => Ok(MissingFolderPolicy::Drop),
        "unsorted" => Ok(MissingFolderPolicy::Unsorted),
        _ => Err(SharedError::InvalidConfig {
            key: "STRUCTURA_RESTORE_POLICY",
            value: value.to_string(),
        }),
    }
}
