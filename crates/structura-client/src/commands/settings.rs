use tracing::info;

use super::{declined, require_session};
use crate::events::{ProfileChangedPayload, EVENT_PROFILE_CHANGED};
use crate::state::{AppState, Profile};

pub fn profile(state: &AppState) -> &Profile {
    &state.profile
}

/// Save the profile form. The acting user's avatar in every roster follows
/// the new name's initials.
pub fn update_profile<'a>(
    state: &'a mut AppState,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Option<&'a Profile> {
    require_session(state, "update_profile")?;
    let (first_name, last_name) = (first_name.trim(), last_name.trim());
    if first_name.is_empty() && last_name.is_empty() {
        declined("update_profile", "blank name");
        return None;
    }

    state.profile = Profile {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.trim().to_string(),
    };
    let payload = ProfileChangedPayload {
        full_name: state.profile.full_name(),
        avatar: state.profile.avatar(),
    };
    state.chat.set_current_user_avatar(&payload.avatar);

    info!(avatar = %payload.avatar, "Profile updated");
    state.emit(EVENT_PROFILE_CHANGED, payload);
    Some(&state.profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::chat::send_message;
    use crate::state::test_support::seeded_state;
    use structura_shared::ChannelId;

    #[test]
    fn test_update_profile_moves_avatar() {
        let (mut state, sink) = seeded_state();
        let me = state.chat.current_user().id;

        let saved = update_profile(&mut state, " maria ", "lopez", "maria@studio.io").unwrap();
        assert_eq!(saved.full_name(), "maria lopez");
        assert_eq!(state.chat.current_user().avatar, "ML");

        let general = state.chat.channel(&ChannelId::from("general")).unwrap();
        let roster_me = general.members.iter().find(|m| m.id == me).unwrap();
        assert_eq!(roster_me.avatar, "ML");
        assert_eq!(roster_me.name, "You");

        // Old messages keep the avatar they were sent with.
        assert_eq!(state.chat.messages()[1].avatar, "AT");
        let id = send_message(&mut state, "new look").unwrap();
        let last = state.chat.messages().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.avatar, "ML");

        assert_eq!(sink.names()[0], EVENT_PROFILE_CHANGED);
    }

    #[test]
    fn test_update_profile_blank_name_is_declined() {
        let (mut state, sink) = seeded_state();
        assert!(update_profile(&mut state, " ", "", "x@y.z").is_none());
        assert_eq!(profile(&state), &Profile::default());
        assert!(sink.names().is_empty());
    }

    #[test]
    fn test_single_name_profile() {
        let (mut state, _) = seeded_state();
        let saved = update_profile(&mut state, "", "Kahn", "").unwrap();
        assert_eq!(saved.avatar(), "K");
    }
}
