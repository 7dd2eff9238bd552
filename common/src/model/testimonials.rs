use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub testimonials_id: String,
    pub name: String,
    pub role: String,
    pub image: String,
    pub rating: f32,
    pub content: String,
    /// Optional YouTube URL; validated client-side with an inline warning only.
    pub url_video: String,
}

impl Testimonial {
    pub fn draft(testimonials_id: String) -> Self {
        Self {
            id: None,
            testimonials_id,
            name: String::new(),
            role: String::new(),
            image: String::new(),
            rating: 5.0,
            content: String::new(),
            url_video: String::new(),
        }
    }
}

impl Default for Testimonial {
    fn default() -> Self {
        Self::draft(String::new())
    }
}
