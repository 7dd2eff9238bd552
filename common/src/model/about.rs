use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
}

/// Headline figure shown in the about section ("20+" sold, etc.).
/// The `value` field is free text restricted to digits and symbols.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutStat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub about_id: String,
    pub label: String,
    pub value: String,
}

impl AboutStat {
    /// Template for a freshly opened create draft.
    pub fn draft(about_id: String) -> Self {
        Self {
            about_id,
            ..Self::default()
        }
    }
}
