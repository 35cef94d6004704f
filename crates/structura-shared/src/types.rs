use serde::{Deserialize, Serialize};

use crate::constants::{MAX_INITIALS, PERCENT_MAX};
use crate::error::SharedError;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifies a folder (collection) in the library.
    FolderId
);
numeric_id!(
    /// Identifies an image asset. Unique across folders and the archive.
    AssetId
);
numeric_id!(CommentId);
numeric_id!(
    /// Identifies a channel member. The acting user has a fixed member id
    /// chosen by configuration.
    MemberId
);
numeric_id!(MessageId);

/// Channels are addressed by a human-readable slug (`"general"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl ChannelId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChannelId {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Member,
}

/// A position on an image, expressed as percentages of its width and height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Build a point from percentages, rejecting anything outside `[0, 100]`.
    pub fn new(x: f64, y: f64) -> Result<Self, SharedError> {
        let point = Self { x, y };
        if point.in_bounds() {
            Ok(point)
        } else {
            Err(SharedError::PointOutOfRange { x, y })
        }
    }

    /// Convert a tap in pixels into a percentage point on a viewport of the
    /// given size. Taps that land on the viewport edge (or slightly past it)
    /// are clamped.
    pub fn from_tap(x_px: f64, y_px: f64, viewport: Viewport) -> Result<Self, SharedError> {
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            return Err(SharedError::EmptyViewport);
        }
        if !(x_px.is_finite() && y_px.is_finite()) {
            return Err(SharedError::PointOutOfRange { x: x_px, y: y_px });
        }

        let x = (x_px / viewport.width * PERCENT_MAX).clamp(0.0, PERCENT_MAX);
        let y = (y_px / viewport.height * PERCENT_MAX).clamp(0.0, PERCENT_MAX);
        Ok(Self { x, y })
    }

    pub fn in_bounds(&self) -> bool {
        let range = 0.0..=PERCENT_MAX;
        range.contains(&self.x) && range.contains(&self.y)
    }
}

/// Size of the surface an image is displayed on, in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Avatar initials: the upper-cased first letter of up to the first two
/// space-separated words of `name`.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .take(MAX_INITIALS)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_words() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("Marcus V."), "MV");
    }

    #[test]
    fn test_initials_takes_first_two_words_only() {
        assert_eq!(initials("ada byron king lovelace"), "AB");
    }

    #[test]
    fn test_initials_skips_repeated_spaces() {
        assert_eq!(initials("  jo   march "), "JM");
        assert_eq!(initials("cher"), "C");
    }

    #[test]
    fn test_point_bounds() {
        assert!(Point::new(40.0, 60.0).is_ok());
        assert!(Point::new(0.0, 100.0).is_ok());
        assert!(Point::new(-1.0, 50.0).is_err());
        assert!(Point::new(50.0, 100.5).is_err());
        assert!(Point::new(f64::NAN, 50.0).is_err());
    }

    #[test]
    fn test_point_from_tap() {
        let viewport = Viewport {
            width: 200.0,
            height: 400.0,
        };
        let point = Point::from_tap(80.0, 240.0, viewport).unwrap();
        assert_eq!(point, Point { x: 40.0, y: 60.0 });

        let clamped = Point::from_tap(210.0, -4.0, viewport).unwrap();
        assert_eq!(clamped, Point { x: 100.0, y: 0.0 });
    }

    #[test]
    fn test_point_from_tap_rejects_empty_viewport() {
        let viewport = Viewport {
            width: 0.0,
            height: 400.0,
        };
        assert!(matches!(
            Point::from_tap(1.0, 1.0, viewport),
            Err(SharedError::EmptyViewport)
        ));
    }

    #[test]
    fn test_channel_id_serializes_as_slug() {
        let json = serde_json::to_string(&ChannelId::from("general")).unwrap();
        assert_eq!(json, "\"general\"");
        let id: FolderId = serde_json::from_str("7").unwrap();
        assert_eq!(id, FolderId(7));
    }
}
