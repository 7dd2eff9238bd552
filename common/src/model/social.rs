use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialIcon {
    #[default]
    Facebook,
    Instagram,
    Twitter,
    Youtube,
    Tiktok,
    Whatsapp,
}

impl SocialIcon {
    pub const ALL: [SocialIcon; 6] = [
        SocialIcon::Facebook,
        SocialIcon::Instagram,
        SocialIcon::Twitter,
        SocialIcon::Youtube,
        SocialIcon::Tiktok,
        SocialIcon::Whatsapp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialIcon::Facebook => "facebook",
            SocialIcon::Instagram => "instagram",
            SocialIcon::Twitter => "twitter",
            SocialIcon::Youtube => "youtube",
            SocialIcon::Tiktok => "tiktok",
            SocialIcon::Whatsapp => "whatsapp",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialIcon::Facebook => "Facebook",
            SocialIcon::Instagram => "Instagram",
            SocialIcon::Twitter => "Twitter",
            SocialIcon::Youtube => "YouTube",
            SocialIcon::Tiktok => "TikTok",
            SocialIcon::Whatsapp => "WhatsApp",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub icon: SocialIcon,
    pub label: String,
    pub url: String,
}
