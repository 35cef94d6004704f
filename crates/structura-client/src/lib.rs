//! # structura-client
//!
//! Application layer of Structura. UI code drives the app only through the
//! intent handlers in [`commands`], which mutate [`AppState`] and report
//! changes through its [`events::EventSink`].

pub mod collaborators;
pub mod commands;
pub mod config;
pub mod events;
pub mod state;

pub use config::ClientConfig;
pub use state::AppState;

use structura_shared::constants::APP_NAME;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("structura_client=debug,structura_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Set up logging and build the application state from the environment.
pub fn start() -> AppState {
    init_tracing();

    let config = ClientConfig::from_env();
    tracing::info!(
        app = APP_NAME,
        user_id = %config.current_user_id,
        seeded = config.seed_mock_data,
        restore_policy = ?config.restore_policy,
        "Starting"
    );

    AppState::new(config)
}
