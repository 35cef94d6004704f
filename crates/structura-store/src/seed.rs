//! Mock content the app starts with.
//!
//! Fixed seed ids stay below [`DEFAULT_ID_START`](structura_shared::constants::DEFAULT_ID_START);
//! generated mock assets draw their ids from the caller's [`IdSource`] so no
//! two assets share an id.

use std::ops::RangeInclusive;

use structura_shared::constants::CURRENT_USER_DISPLAY_NAME;
use structura_shared::{
    initials, AssetId, ChannelId, FolderId, IdSource, MemberId, MemberRole, MessageId,
};

use crate::models::{Asset, Channel, Folder, Member, Message};

const MOCK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=800&auto=format&fit=crop";

/// `(id, name, date label, cover, asset count)`
const FOLDERS: [(u64, &str, &str, &str, usize); 6] = [
    (1, "Minimalist Lofts", "Oct 24", "https://images.unsplash.com/photo-1505691938895-1758d7feb511?q=80&w=800&auto=format&fit=crop", 6),
    (2, "Industrial Offices", "Nov 02", "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=800&auto=format&fit=crop", 4),
    (3, "Eco-Brutalist", "Nov 15", "https://images.unsplash.com/photo-1518005020951-ecc8e1213bc4?q=80&w=800&auto=format&fit=crop", 8),
    (4, "Scandinavian Homes", "Nov 18", "https://images.unsplash.com/photo-1534349762230-e0cadf78f5da?q=80&w=800&auto=format&fit=crop", 3),
    (5, "Dark Modernism", "Nov 21", "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=800&auto=format&fit=crop", 7),
    (6, "Luxury Retail", "Nov 23", "https://images.unsplash.com/photo-1441986300917-64674bd600d8?q=80&w=800&auto=format&fit=crop", 5),
];

/// Ids of the other people in the seeded rosters.
pub const SEEDED_MEMBER_IDS: RangeInclusive<u64> = 1..=4;

/// `count` placeholder design assets named `Design_Asset_1.jpg` onwards.
pub fn generate_mock_content(count: usize, ids: &mut dyn IdSource) -> Vec<Asset> {
    (0..count)
        .map(|i| {
            Asset::new(
                AssetId(ids.next_id()),
                format!("{MOCK_IMAGE_URL}&sig={i}"),
                format!("Design_Asset_{}.jpg", i + 1),
            )
        })
        .collect()
}

pub fn initial_folders(ids: &mut dyn IdSource) -> Vec<Folder> {
    FOLDERS
        .iter()
        .map(|&(id, name, date, cover, count)| {
            Folder::with_content(FolderId(id), name, date, cover, generate_mock_content(count, ids))
        })
        .collect()
}

/// The acting user as they appear in channel rosters.
pub fn current_user(id: MemberId, avatar: &str) -> Member {
    Member {
        id,
        name: CURRENT_USER_DISPLAY_NAME.to_string(),
        role: MemberRole::Admin,
        avatar: avatar.to_string(),
    }
}

fn seeded_member(id: u64, name: &str, role: MemberRole) -> Member {
    Member {
        id: MemberId(id),
        name: name.to_string(),
        role,
        avatar: initials(name),
    }
}

pub fn initial_channels(me: &Member) -> Vec<Channel> {
    let sarah = seeded_member(1, "Sarah Chen", MemberRole::Admin);

    vec![
        Channel {
            id: ChannelId::from("general"),
            name: "# general".into(),
            description: "General discussion about architecture and design.".into(),
            members: vec![
                sarah.clone(),
                seeded_member(2, "Marcus V.", MemberRole::Member),
                seeded_member(3, "Elena R.", MemberRole::Member),
                seeded_member(4, "David K.", MemberRole::Member),
                me.clone(),
            ],
        },
        Channel {
            id: ChannelId::from("feedback"),
            name: "# feedback".into(),
            description: "Request feedback on your latest blueprints and renders.".into(),
            members: vec![sarah, me.clone()],
        },
        empty_channel("showcases", "Show off your finished projects."),
        empty_channel("jobs", "Career opportunities and freelance gigs."),
        empty_channel("resources", "Asset packs, textures, and tutorials."),
    ]
}

fn empty_channel(slug: &str, description: &str) -> Channel {
    Channel {
        id: ChannelId::from(slug),
        name: format!("# {slug}"),
        description: description.to_string(),
        members: Vec::new(),
    }
}

pub fn initial_messages(me: &Member) -> Vec<Message> {
    let general = ChannelId::from("general");
    vec![
        Message {
            id: MessageId(1),
            user: "Sarah Chen".into(),
            avatar: "SC".into(),
            text: "Has anyone tried the new brutalist texture pack?".into(),
            time: "10:30 AM".into(),
            is_me: false,
            channel_id: general.clone(),
        },
        Message {
            id: MessageId(2),
            user: CURRENT_USER_DISPLAY_NAME.into(),
            avatar: me.avatar.clone(),
            text: "Yes! It works perfectly for the museum project I'm drafting.".into(),
            time: "10:32 AM".into(),
            is_me: true,
            channel_id: general.clone(),
        },
        Message {
            id: MessageId(3),
            user: "Marcus V.".into(),
            avatar: "MV".into(),
            text: "Could you share the spec sheet for the lighting rendering? It looks incredible."
                .into(),
            time: "10:45 AM".into(),
            is_me: false,
            channel_id: general,
        },
    ]
}
