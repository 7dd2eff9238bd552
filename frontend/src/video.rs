//! YouTube URL helpers for testimonial videos.
//!
//! Recognized formats: watch URLs (`youtube.com/watch?v=ID`), shorts
//! (`youtube.com/shorts/ID`), embed URLs (`youtube.com/embed/ID`) and the
//! short `youtu.be/ID` form. An unrecognized URL only produces an inline
//! warning in the editor; it never blocks saving.

use regex::Regex;

pub fn is_valid_youtube_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    let patterns = [
        r"^https?://(www\.)?youtube\.com/watch\?v=[a-zA-Z0-9_-]+",
        r"^https?://(www\.)?youtube\.com/shorts/[a-zA-Z0-9_-]+",
        r"^https?://(www\.)?youtube\.com/embed/[a-zA-Z0-9_-]+",
        r"^https?://youtu\.be/[a-zA-Z0-9_-]+",
    ];
    patterns
        .iter()
        .any(|p| Regex::new(p).unwrap().is_match(url))
}

/// Extracts the video id from any recognized URL form.
pub fn extract_video_id(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    let patterns = [
        r"youtube\.com/shorts/([a-zA-Z0-9_-]+)",
        r"[?&]v=([a-zA-Z0-9_-]+)",
        r"youtube\.com/embed/([a-zA-Z0-9_-]+)",
        r"youtu\.be/([a-zA-Z0-9_-]+)",
    ];
    for pattern in patterns {
        if let Some(caps) = Regex::new(pattern).unwrap().captures(url) {
            return caps.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

/// Converts any recognized YouTube URL to the embed form used by the video
/// player iframe. Unrecognized URLs pass through unchanged.
pub fn to_embed_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.contains("youtube.com/embed/") {
        return url.to_string();
    }
    match extract_video_id(url) {
        Some(id) => format!("https://www.youtube.com/embed/{}", id),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_supported_forms() {
        assert!(is_valid_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_valid_youtube_url("https://youtube.com/shorts/abc123_-"));
        assert!(is_valid_youtube_url("https://www.youtube.com/embed/abc123"));
        assert!(is_valid_youtube_url("https://youtu.be/abc123"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_valid_youtube_url(""));
        assert!(!is_valid_youtube_url("https://vimeo.com/12345"));
        assert!(!is_valid_youtube_url("youtube.com/watch?v=abc"));
        assert!(!is_valid_youtube_url("https://www.youtube.com/playlist?list=PL"));
    }

    #[test]
    fn converts_to_embed_form() {
        assert_eq!(
            to_embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            to_embed_url("https://youtu.be/abc123"),
            "https://www.youtube.com/embed/abc123"
        );
        // Already embed: unchanged.
        assert_eq!(
            to_embed_url("https://www.youtube.com/embed/abc123"),
            "https://www.youtube.com/embed/abc123"
        );
        // Unrecognized: passed through for the iframe to fail visibly.
        assert_eq!(to_embed_url("https://vimeo.com/1"), "https://vimeo.com/1");
    }

    #[test]
    fn extracts_ids() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=a_B-c&t=10"),
            Some("a_B-c".to_string())
        );
        assert_eq!(extract_video_id("https://example.com"), None);
    }
}
