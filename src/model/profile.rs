use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Avatar {
    #[default]
    Sapling,
    Droplet,
    Recycle,
}

impl Avatar {
    pub const ALL: [Avatar; 3] = [Avatar::Sapling, Avatar::Droplet, Avatar::Recycle];

    pub fn token(self) -> &'static str {
        match self {
            Avatar::Sapling => "sapling",
            Avatar::Droplet => "droplet",
            Avatar::Recycle => "recycle",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Avatar::Sapling => "Growing Sapling",
            Avatar::Droplet => "Water Droplet",
            Avatar::Recycle => "Recycle Hero",
        }
    }

    pub fn motto(self) -> &'static str {
        match self {
            Avatar::Sapling => "Watch me grow!",
            Avatar::Droplet => "Every drop counts!",
            Avatar::Recycle => "Reduce, reuse, recycle!",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Avatar::Sapling => "🌱",
            Avatar::Droplet => "💧",
            Avatar::Recycle => "♻",
        }
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAvatar(pub String);

impl FromStr for Avatar {
    type Err = UnknownAvatar;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sapling" => Ok(Avatar::Sapling),
            "droplet" => Ok(Avatar::Droplet),
            "recycle" => Ok(Avatar::Recycle),
            other => Err(UnknownAvatar(other.to_string())),
        }
    }
}

/// The persisted slice of the player: survives restarts, last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub display_name: String,
    pub avatar: Avatar,
    pub total_points: u64,
}

impl Default for ProfileSnapshot {
    fn default() -> Self {
        Self {
            display_name: "EcoHero".into(),
            avatar: Avatar::Sapling,
            total_points: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_tokens_parse_back() {
        for avatar in Avatar::ALL {
            assert_eq!(avatar.token().parse::<Avatar>(), Ok(avatar));
        }
    }

    #[test]
    fn unknown_avatar_is_rejected() {
        assert_eq!(
            "dragon".parse::<Avatar>(),
            Err(UnknownAvatar("dragon".to_string()))
        );
    }
}
