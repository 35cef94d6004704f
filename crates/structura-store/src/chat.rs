//! Channel, roster and message state machine.
//!
//! [`ChatRoom`] keeps the channel list, one flat append-only message list and
//! a pointer to the active channel. The acting user is an explicit member
//! record rather than a magic id, and is only special to [`ChatRoom::leave_channel`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use structura_shared::constants::{CURRENT_USER_DISPLAY_NAME, FRESH_MESSAGE_TIME};
use structura_shared::{initials, ChannelId, MemberId, MemberRole, MessageId};

use crate::error::{Result, StoreError};
use crate::models::{Channel, Member, Message};

/// The first few members of a roster plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPreview<'a> {
    pub shown: &'a [Member],
    pub overflow: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
    channels: Vec<Channel>,
    messages: Vec<Message>,
    active_channel: Option<ChannelId>,
    current_user: Member,
}

impl ChatRoom {
    /// Build a room. The first channel starts out active.
    pub fn new(channels: Vec<Channel>, messages: Vec<Message>, current_user: Member) -> Self {
        let active_channel = channels.first().map(|c| c.id.clone());
        Self {
            channels,
            messages,
            active_channel,
            current_user,
        }
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, id: &ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| &c.id == id)
    }

    pub fn active_channel_id(&self) -> Option<&ChannelId> {
        self.active_channel.as_ref()
    }

    pub fn active_channel(&self) -> Option<&Channel> {
        self.channel(self.active_channel.as_ref()?)
    }

    pub fn current_user(&self) -> &Member {
        &self.current_user
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages of one channel in the order they were sent.
    pub fn messages_for(&self, channel_id: &ChannelId) -> impl Iterator<Item = &Message> + '_ {
        let channel_id = channel_id.clone();
        self.messages.iter().filter(move |m| m.channel_id == channel_id)
    }

    /// Messages of the active channel; empty when no channel is active.
    pub fn current_messages(&self) -> Vec<&Message> {
        match &self.active_channel {
            Some(id) => self.messages_for(id).collect(),
            None => Vec::new(),
        }
    }

    pub fn member_preview(&self, channel_id: &ChannelId, len: usize) -> Option<MemberPreview<'_>> {
        let members = &self.channel(channel_id)?.members;
        let shown = &members[..members.len().min(len)];
        Some(MemberPreview {
            shown,
            overflow: members.len() - shown.len(),
        })
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Append a message from the acting user.
    pub fn send_message(&mut self, channel_id: &ChannelId, text: &str, id: MessageId) -> Result<&Message> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        if self.channel(channel_id).is_none() {
            return Err(StoreError::ChannelNotFound(channel_id.clone()));
        }

        self.messages.push(Message {
            id,
            user: CURRENT_USER_DISPLAY_NAME.to_string(),
            avatar: self.current_user.avatar.clone(),
            text: text.to_string(),
            time: FRESH_MESSAGE_TIME.to_string(),
            is_me: true,
            channel_id: channel_id.clone(),
        });
        debug!(msg_id = %id, channel = %channel_id, "Message appended");

        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Append a regular member to a channel roster.
    pub fn add_member(&mut self, channel_id: &ChannelId, name: &str, id: MemberId) -> Result<&Member> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        let channel = self.channel_mut(channel_id)?;
        channel.members.push(Member {
            id,
            name: name.to_string(),
            role: MemberRole::Member,
            avatar: initials(name),
        });
        debug!(channel = %channel_id, member_id = %id, "Member added");

        Ok(&channel.members[channel.members.len() - 1])
    }

    /// Remove a member by id. The acting user is not protected here; callers
    /// that expose removal to the user must guard it themselves.
    pub fn remove_member(&mut self, channel_id: &ChannelId, member_id: MemberId) -> Result<Member> {
        let channel = self.channel_mut(channel_id)?;
        let index = channel
            .members
            .iter()
            .position(|m| m.id == member_id)
            .ok_or_else(|| StoreError::MemberNotFound {
                channel: channel_id.clone(),
                member: member_id,
            })?;

        let member = channel.members.remove(index);
        debug!(channel = %channel_id, member_id = %member_id, "Member removed");
        Ok(member)
    }

    /// Remove the acting user from a roster. The channel itself stays.
    pub fn leave_channel(&mut self, channel_id: &ChannelId) -> Result<Member> {
        let me = self.current_user.id;
        let member = self.remove_member(channel_id, me)?;
        info!(channel = %channel_id, "Left channel");
        Ok(member)
    }

    /// Delete a channel. If it was active, the first remaining channel
    /// becomes active, or none when the list is empty.
    ///
    /// Messages of the deleted channel stay in the flat list.
    pub fn delete_channel(&mut self, channel_id: &ChannelId) -> Result<Channel> {
        let index = self
            .channels
            .iter()
            .position(|c| &c.id == channel_id)
            .ok_or_else(|| StoreError::ChannelNotFound(channel_id.clone()))?;
        let channel = self.channels.remove(index);

        if self.active_channel.as_ref() == Some(channel_id) {
            self.active_channel = self.channels.first().map(|c| c.id.clone());
        }

        info!(
            channel = %channel_id,
            active = ?self.active_channel,
            remaining = self.channels.len(),
            "Channel deleted"
        );
        Ok(channel)
    }

    /// Point the active channel at an existing channel.
    pub fn switch_channel(&mut self, channel_id: &ChannelId) -> Result<()> {
        if self.channel(channel_id).is_none() {
            return Err(StoreError::ChannelNotFound(channel_id.clone()));
        }
        self.active_channel = Some(channel_id.clone());
        Ok(())
    }

    /// Change the acting user's avatar, here and in every roster they are in.
    /// Messages already sent keep the avatar they were sent with.
    pub fn set_current_user_avatar(&mut self, avatar: &str) {
        let me = self.current_user.id;
        self.current_user.avatar = avatar.to_string();

        for member in self.channels.iter_mut().flat_map(|c| c.members.iter_mut()) {
            if member.id == me {
                member.avatar = avatar.to_string();
            }
        }
    }

    fn channel_mut(&mut self, id: &ChannelId) -> Result<&mut Channel> {
        self.channels
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::ChannelNotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn me() -> Member {
        Member {
            id: MemberId(99),
            name: "You".into(),
            role: MemberRole::Admin,
            avatar: "AT".into(),
        }
    }

    fn member(id: u64, name: &str) -> Member {
        Member {
            id: MemberId(id),
            name: name.into(),
            role: MemberRole::Member,
            avatar: initials(name),
        }
    }

    fn channel(slug: &str, members: Vec<Member>) -> Channel {
        Channel {
            id: ChannelId::from(slug),
            name: format!("# {slug}"),
            description: String::new(),
            members,
        }
    }

    fn room() -> ChatRoom {
        ChatRoom::new(
            vec![
                channel("general", vec![member(1, "Sarah Chen"), me()]),
                channel("feedback", vec![me()]),
                channel("jobs", vec![]),
            ],
            Vec::new(),
            me(),
        )
    }

    fn general() -> ChannelId {
        ChannelId::from("general")
    }

    #[test]
    fn test_first_channel_is_active() {
        let room = room();
        assert_eq!(room.active_channel_id(), Some(&general()));
    }

    #[test]
    fn test_send_message_appends_to_channel() {
        let mut room = room();

        let msg = room.send_message(&general(), "Hi", MessageId(1)).unwrap();
        assert!(msg.is_me);
        assert_eq!(msg.user, "You");
        assert_eq!(msg.avatar, "AT");
        assert_eq!(msg.time, "Now");
        assert_eq!(msg.channel_id, general());

        assert_eq!(room.messages_for(&general()).count(), 1);
        assert_eq!(room.messages_for(&ChannelId::from("feedback")).count(), 0);
        assert_eq!(room.current_messages().len(), 1);
    }

    #[test]
    fn test_send_message_declines_blank_text() {
        let mut room = room();
        assert_eq!(
            room.send_message(&general(), "", MessageId(1)).unwrap_err(),
            StoreError::EmptyText
        );
        assert_eq!(
            room.send_message(&general(), "  \n", MessageId(1)).unwrap_err(),
            StoreError::EmptyText
        );
        assert!(room.messages().is_empty());
    }

    #[test]
    fn test_send_message_to_unknown_channel() {
        let mut room = room();
        let err = room
            .send_message(&ChannelId::from("nope"), "Hi", MessageId(1))
            .unwrap_err();
        assert_eq!(err, StoreError::ChannelNotFound(ChannelId::from("nope")));
        assert!(room.messages().is_empty());
    }

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut room = room();
        let feedback = ChannelId::from("feedback");
        room.send_message(&general(), "one", MessageId(1)).unwrap();
        room.send_message(&feedback, "elsewhere", MessageId(2)).unwrap();
        room.send_message(&general(), "two", MessageId(3)).unwrap();

        let texts: Vec<&str> = room
            .messages_for(&general())
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, ["one", "two"]);
    }

    #[test]
    fn test_add_member_computes_initials() {
        let mut room = room();
        let added = room
            .add_member(&general(), "elena rossi", MemberId(5))
            .unwrap();
        assert_eq!(added.avatar, "ER");
        assert_eq!(added.role, MemberRole::Member);

        let members = &room.channel(&general()).unwrap().members;
        assert_eq!(members.last().unwrap().id, MemberId(5));
    }

    #[test]
    fn test_add_member_declines_blank_name() {
        let mut room = room();
        assert_eq!(
            room.add_member(&general(), "   ", MemberId(5)).unwrap_err(),
            StoreError::EmptyName
        );
        assert_eq!(room.channel(&general()).unwrap().members.len(), 2);
    }

    #[test]
    fn test_remove_member_does_not_protect_current_user() {
        let mut room = room();
        let removed = room.remove_member(&general(), MemberId(99)).unwrap();
        assert_eq!(removed.id, MemberId(99));
        assert!(!room.channel(&general()).unwrap().has_member(MemberId(99)));
    }

    #[test]
    fn test_remove_unknown_member() {
        let mut room = room();
        assert_eq!(
            room.remove_member(&general(), MemberId(42)).unwrap_err(),
            StoreError::MemberNotFound {
                channel: general(),
                member: MemberId(42)
            }
        );
    }

    #[test]
    fn test_leave_channel_keeps_channel() {
        let mut room = room();
        let feedback = ChannelId::from("feedback");
        room.leave_channel(&feedback).unwrap();

        let channel = room.channel(&feedback).unwrap();
        assert!(channel.members.is_empty());
        assert_eq!(room.channels().len(), 3);

        // Leaving twice has nothing left to remove.
        assert!(room.leave_channel(&feedback).is_err());
    }

    #[test]
    fn test_delete_active_channel_activates_first_remaining() {
        let mut room = room();
        room.delete_channel(&general()).unwrap();
        assert_eq!(room.active_channel_id(), Some(&ChannelId::from("feedback")));
    }

    #[test]
    fn test_delete_inactive_channel_keeps_pointer() {
        let mut room = room();
        room.delete_channel(&ChannelId::from("jobs")).unwrap();
        assert_eq!(room.active_channel_id(), Some(&general()));
        assert_eq!(room.channels().len(), 2);
    }

    #[test]
    fn test_delete_last_channel_clears_pointer() {
        let mut room = ChatRoom::new(vec![channel("solo", vec![])], Vec::new(), me());
        room.delete_channel(&ChannelId::from("solo")).unwrap();
        assert_eq!(room.active_channel_id(), None);
        assert!(room.active_channel().is_none());
        assert!(room.current_messages().is_empty());
    }

    #[test]
    fn test_switch_channel_requires_existing_channel() {
        let mut room = room();
        room.switch_channel(&ChannelId::from("jobs")).unwrap();
        assert_eq!(room.active_channel().unwrap().name, "# jobs");

        assert!(room.switch_channel(&ChannelId::from("gone")).is_err());
        assert_eq!(room.active_channel_id(), Some(&ChannelId::from("jobs")));
    }

    #[test]
    fn test_member_preview() {
        let mut room = room();
        for (i, name) in ["Marcus V.", "Elena R.", "David K."].iter().enumerate() {
            room.add_member(&general(), name, MemberId(10 + i as u64)).unwrap();
        }

        let preview = room.member_preview(&general(), 3).unwrap();
        assert_eq!(preview.shown.len(), 3);
        assert_eq!(preview.overflow, 2);

        let preview = room.member_preview(&ChannelId::from("jobs"), 3).unwrap();
        assert!(preview.shown.is_empty());
        assert_eq!(preview.overflow, 0);
    }

    #[test]
    fn test_current_user_avatar_follows_into_rosters() {
        let mut room = room();
        room.set_current_user_avatar("AT2");
        assert_eq!(room.current_user().avatar, "AT2");
        let general = room.channel(&general()).unwrap();
        let me = general.members.iter().find(|m| m.id == MemberId(99)).unwrap();
        assert_eq!(me.avatar, "AT2");
    }
}
