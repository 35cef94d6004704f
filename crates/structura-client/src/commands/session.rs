//! Sign-in gate in front of the main tabs.
//!
//! There are no credentials: signing in only flips the flag. Signing out
//! throws away everything done during the session and puts the starting
//! content back.

use tracing::info;

use super::declined;
use crate::events::{SessionChangedPayload, EVENT_SESSION_CHANGED};
use crate::state::AppState;

pub fn sign_in(state: &mut AppState) -> Option<()> {
    if state.signed_in {
        declined("sign_in", "already signed in");
        return None;
    }

    state.signed_in = true;
    info!("Signed in");
    state.emit(EVENT_SESSION_CHANGED, SessionChangedPayload { signed_in: true });
    Some(())
}

pub fn sign_out(state: &mut AppState) -> Option<()> {
    if !state.signed_in {
        declined("sign_out", "not signed in");
        return None;
    }

    state.signed_in = false;
    state.reset_content();
    info!("Signed out");
    state.emit(EVENT_SESSION_CHANGED, SessionChangedPayload { signed_in: false });
    Some(())
}
