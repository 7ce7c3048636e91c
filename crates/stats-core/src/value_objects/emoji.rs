//! Emoji identity - distinguishes custom and built-in emoji identifier spaces
//!
//! A custom emoji carries a platform-issued ID; a built-in ("default") emoji
//! is identified by its glyph or shortcode. The two spaces must never merge in
//! aggregation even if the identifier strings collide, so the distinction is
//! part of the type rather than a loose flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a reacted emoji
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EmojiIdentity {
    /// Custom emoji, identified by a platform-issued ID
    Custom { id: String },
    /// Built-in emoji, identified by its glyph or shortcode
    Unicode { name: String },
}

impl EmojiIdentity {
    /// Create a custom emoji identity
    pub fn custom(id: impl Into<String>) -> Self {
        Self::Custom { id: id.into() }
    }

    /// Create a built-in emoji identity
    pub fn unicode(name: impl Into<String>) -> Self {
        Self::Unicode { name: name.into() }
    }

    /// The identifier string stored in the `emoji_id` column
    #[inline]
    pub fn id(&self) -> &str {
        match self {
            Self::Custom { id } => id,
            Self::Unicode { name } => name,
        }
    }

    /// Whether this is a built-in emoji (no platform-issued ID)
    #[inline]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Unicode { .. })
    }

    /// Reconstruct an identity from its stored `(emoji_id, is_default)` pair
    pub fn from_parts(emoji_id: impl Into<String>, is_default: bool) -> Self {
        if is_default {
            Self::Unicode {
                name: emoji_id.into(),
            }
        } else {
            Self::Custom {
                id: emoji_id.into(),
            }
        }
    }
}

impl fmt::Display for EmojiIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
