use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Services {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub services_id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Service {
    pub fn draft(services_id: String) -> Self {
        Self {
            services_id,
            icon: "🏘️".to_string(),
            ..Self::default()
        }
    }
}
