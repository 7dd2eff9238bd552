use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Why {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhyReason {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub why_id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl WhyReason {
    pub fn draft(why_id: String) -> Self {
        Self {
            why_id,
            icon: "🏠".to_string(),
            ..Self::default()
        }
    }
}
