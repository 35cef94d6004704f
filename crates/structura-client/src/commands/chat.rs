use tracing::info;

use structura_shared::constants::MEMBER_PREVIEW_LEN;
use structura_shared::{ChannelId, MemberId, MessageId};
use structura_store::{Channel, Member, MemberPreview, Message, StoreError};

use super::{applied, declined, notify_channels, require_session};
use crate::collaborators::{Confirmation, Prompt};
use crate::events::{NewMessagePayload, EVENT_NEW_MESSAGE};
use crate::state::AppState;

/// Messages of the active channel, oldest first.
pub fn current_messages(state: &AppState) -> Vec<&Message> {
    state.chat.current_messages()
}

/// Avatar stack for the active channel's header.
pub fn active_member_preview(state: &AppState) -> Option<MemberPreview<'_>> {
    let channel_id = state.chat.active_channel_id()?;
    state.chat.member_preview(channel_id, MEMBER_PREVIEW_LEN)
}

/// Post `text` to the active channel as the acting user.
pub fn send_message(state: &mut AppState, text: &str) -> Option<MessageId> {
    require_session(state, "send_message")?;
    let Some(channel_id) = state.chat.active_channel_id().cloned() else {
        declined("send_message", "no active channel");
        return None;
    };

    let id = MessageId(state.next_id());
    let payload = applied(
        "send_message",
        state
            .chat
            .send_message(&channel_id, text, id)
            .map(|m| NewMessagePayload {
                channel_id: m.channel_id.to_string(),
                message_id: m.id.get(),
                user: m.user.clone(),
                time: m.time.clone(),
            }),
    )?;

    state.emit(EVENT_NEW_MESSAGE, payload);
    Some(id)
}

pub fn switch_channel<'a>(state: &'a mut AppState, channel_id: &ChannelId) -> Option<&'a Channel> {
    require_session(state, "switch_channel")?;
    applied("switch_channel", state.chat.switch_channel(channel_id))?;
    notify_channels(state);
    state.chat.active_channel()
}

pub fn add_member(state: &mut AppState, channel_id: &ChannelId, name: &str) -> Option<MemberId> {
    require_session(state, "add_member")?;
    let id = MemberId(state.next_id());
    let member_id = applied(
        "add_member",
        state.chat.add_member(channel_id, name, id).map(|m| m.id),
    )?;

    info!(channel = %channel_id, member_id = %member_id, "Member added");
    notify_channels(state);
    Some(member_id)
}

/// Remove someone else from a roster. The acting user leaves through
/// [`leave_channel`] instead.
pub fn remove_member(
    state: &mut AppState,
    channel_id: &ChannelId,
    member_id: MemberId,
) -> Option<Member> {
    require_session(state, "remove_member")?;
    if member_id == state.chat.current_user().id {
        declined("remove_member", "cannot remove yourself");
        return None;
    }

    let member = applied(
        "remove_member",
        state.chat.remove_member(channel_id, member_id),
    )?;

    info!(channel = %channel_id, member_id = %member_id, "Member removed");
    notify_channels(state);
    Some(member)
}

pub fn delete_channel(
    state: &mut AppState,
    channel_id: &ChannelId,
    confirmation: &mut dyn Confirmation,
) -> Option<Channel> {
    require_session(state, "delete_channel")?;
    let prompt = Prompt::delete_channel(&channel_name(state, "delete_channel", channel_id)?);
    if !confirmation.confirm(&prompt) {
        declined("delete_channel", "not confirmed");
        return None;
    }

    let channel = applied("delete_channel", state.chat.delete_channel(channel_id))?;
    notify_channels(state);
    Some(channel)
}

pub fn leave_channel(
    state: &mut AppState,
    channel_id: &ChannelId,
    confirmation: &mut dyn Confirmation,
) -> Option<()> {
    require_session(state, "leave_channel")?;
    let name = channel_name(state, "leave_channel", channel_id)?;
    if !state
        .chat
        .channel(channel_id)
        .is_some_and(|c| c.has_member(state.chat.current_user().id))
    {
        declined("leave_channel", "not a member");
        return None;
    }
    if !confirmation.confirm(&Prompt::leave_channel(&name)) {
        declined("leave_channel", "not confirmed");
        return None;
    }

    applied("leave_channel", state.chat.leave_channel(channel_id))?;
    notify_channels(state);
    Some(())
}

fn channel_name(state: &AppState, intent: &'static str, channel_id: &ChannelId) -> Option<String> {
    match state.chat.channel(channel_id) {
        Some(channel) => Some(channel.name.clone()),
        None => {
            declined(intent, StoreError::ChannelNotFound(channel_id.clone()));
            None
        }
    }
}
