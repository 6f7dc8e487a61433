// src/domain/vlog/video.rs
//! YouTube link handling for vlog embeds.
use url::Url;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Extracts the video id from `youtube.com/watch?v=<id>` and `youtu.be/<id>` links.
pub fn youtube_video_id(video_url: &str) -> Option<String> {
    let trimmed = video_url.trim();
    let parsed = Url::parse(trimmed)
        .or_else(|_| Url::parse(&format!("https://{trimmed}")))
        .ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();

    let id = if host == "youtu.be" {
        parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_owned)
    } else if (host == "youtube.com" || host.ends_with(".youtube.com")) && parsed.path() == "/watch"
    {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
    } else {
        None
    };

    id.filter(|value| !value.is_empty())
}

/// Embed URL for the player, or the raw link when no id can be extracted.
pub fn embed_url(video_url: &str) -> String {
    match youtube_video_id(video_url) {
        Some(id) => format!("{EMBED_BASE}{id}"),
        None => video_url.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_link_shapes_yield_the_id() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?v=abc123").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            youtube_video_id("https://youtu.be/abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn extra_query_parameters_are_ignored() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?v=abc123&t=42s").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            youtube_video_id("https://youtu.be/abc123?si=share").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            youtube_video_id("youtu.be/abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn other_hosts_have_no_id_and_embed_the_raw_link() {
        let vimeo = "https://vimeo.com/12345";
        assert_eq!(youtube_video_id(vimeo), None);
        assert_eq!(embed_url(vimeo), vimeo);
        assert_eq!(youtube_video_id("https://www.youtube.com/watch"), None);
        assert_eq!(youtube_video_id("https://youtu.be/"), None);
    }

    #[test]
    fn embed_url_uses_the_player_path() {
        assert_eq!(
            embed_url("https://youtu.be/abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }
}
