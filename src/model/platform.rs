// src/model/platform.rs
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
}

impl Platform {
    /// Combo-box order.
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Instagram, Platform::Twitter];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
        }
    }

    /// Field holding the picture a sink should thumbnail.
    pub fn picture_field(&self) -> &'static str {
        match self {
            Platform::Facebook | Platform::Instagram => "Profile Picture",
            Platform::Twitter => "profile_picture",
        }
    }

    /// What the identifier entry is expected to hold.
    pub fn identifier_hint(&self) -> &'static str {
        match self {
            Platform::Facebook => "https://www.facebook.com/<profile>",
            Platform::Instagram | Platform::Twitter => "handle (without @)",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown Platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" | "fb" => Ok(Platform::Facebook),
            "instagram" | "ig" => Ok(Platform::Instagram),
            "twitter" | "x" => Ok(Platform::Twitter),
            _ => Err(UnknownPlatform(s!(s))),
        }
    }
}
