//! Canonical video-id extraction from loosely formatted inputs.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref VIDEO_URL_RE: Regex = Regex::new(
        r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([A-Za-z0-9_-]{11})"
    )
    .unwrap();
}

/// Extracts the canonical 11-character video id from a URL or bare id.
///
/// Accepts share-short URLs, standard watch URLs, embed URLs, and bare ids.
/// Returns an empty string when nothing matches; never fails. Re-extracting
/// an already-canonical id returns it unchanged.
pub fn extract_video_id(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }

    if let Ok(parsed) = Url::parse(input) {
        if let Some(id) = id_from_url(&parsed) {
            return id;
        }
    }

    // Fall back to a raw scan for inputs the URL parser rejects, e.g.
    // scheme-less "youtu.be/..." strings.
    if let Some(captures) = VIDEO_URL_RE.captures(input) {
        if let Some(id) = captures.get(1) {
            return id.as_str().to_string();
        }
    }

    if is_bare_id(input) {
        return input.to_string();
    }

    String::new()
}

fn id_from_url(url: &Url) -> Option<String> {
    let host = url.host_str()?;

    if host.contains("youtu.be") {
        let first_segment = url.path_segments()?.next()?;
        if !first_segment.is_empty() {
            return Some(first_segment.to_string());
        }
        return None;
    }

    if host.contains("youtube.com") {
        for (key, value) in url.query_pairs() {
            if key == "v" && !value.is_empty() {
                return Some(value.into_owned());
            }
        }
        if let Some(rest) = url.path().strip_prefix("/embed/") {
            let id = rest.split('/').next().unwrap_or_default();
            if !id.is_empty() {
                return Some(id.to_string());
            }
        }
    }

    None
}

fn is_bare_id(input: &str) -> bool {
    input.len() == 11
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_share_short_url() {
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), ID);
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            ID
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            ID
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            ID
        );
    }

    #[test]
    fn test_bare_id_is_accepted_verbatim() {
        assert_eq!(extract_video_id(ID), ID);
    }

    #[test]
    fn test_idempotent_on_canonical_id() {
        let once = extract_video_id("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(extract_video_id(&once), once);
    }

    #[test]
    fn test_schemeless_url_falls_back_to_regex() {
        assert_eq!(extract_video_id("youtu.be/dQw4w9WgXcQ"), ID);
        assert_eq!(extract_video_id("www.youtube.com/watch?v=dQw4w9WgXcQ"), ID);
    }

    #[test]
    fn test_junk_yields_empty() {
        assert_eq!(extract_video_id("not a url"), "");
        assert_eq!(extract_video_id(""), "");
        assert_eq!(extract_video_id("https://example.com/watch?v=x"), "");
        assert_eq!(extract_video_id("tooshort"), "");
    }
}
