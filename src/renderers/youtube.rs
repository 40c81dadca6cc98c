use url::Url;

use super::traits::{MediaRenderer, RenderError};
use super::types::{
    style_map, MediaDescriptor, MediaKind, MediaMeta, RenderOptions, StyleMap, ViewKind,
};
use crate::config::YoutubeConfig;
use crate::markup;

const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";
const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";

/// Renderer for YouTube watch and short-link URLs
///
/// Recognizes `youtube.com` URLs carrying a `v` query parameter and
/// `youtu.be` short links whose path is the video id. The media id is the
/// video id; the descriptor's `location` stores it directly.
#[derive(Debug, Clone)]
pub struct YouTubeRenderer {
    config: YoutubeConfig,
}

impl YouTubeRenderer {
    pub fn new(config: YoutubeConfig) -> Self {
        Self { config }
    }

    /// Accepts only absolute http(s) URLs; everything else is unsupported.
    fn parse(input: &str) -> Option<Url> {
        let url = Url::parse(input).ok()?;
        match url.scheme() {
            "http" | "https" => Some(url),
            _ => None,
        }
    }

    /// Video id per host form: `v` query parameter on youtube.com hosts,
    /// first path segment on youtu.be.
    fn video_id(url: &Url) -> Option<String> {
        let host = url.host_str()?;

        if host.eq_ignore_ascii_case("youtu.be") {
            return url
                .path_segments()
                .and_then(|mut segments| segments.next())
                .filter(|id| !id.is_empty())
                .map(str::to_string);
        }

        if host.eq_ignore_ascii_case("youtube.com")
            || host.to_ascii_lowercase().ends_with(".youtube.com")
        {
            return url
                .query_pairs()
                .find(|(name, _)| name == "v")
                .map(|(_, value)| value.into_owned())
                .filter(|id| !id.is_empty());
        }

        None
    }
}

impl Default for YouTubeRenderer {
    fn default() -> Self {
        Self::new(YoutubeConfig::default())
    }
}

impl MediaRenderer for YouTubeRenderer {
    fn name(&self) -> &'static str {
        "YouTube"
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Youtube
    }

    fn supported_kinds(&self) -> &'static [MediaKind] {
        &[MediaKind::Youtube]
    }

    fn style(&self, view: ViewKind) -> StyleMap {
        match view {
            ViewKind::View => style_map(&[("max-width", "100%"), ("max-height", "500px")]),
            ViewKind::Editor => style_map(&[("width", "560px"), ("height", "315px")]),
            ViewKind::Post => style_map(&[("width", "100%")]),
        }
    }

    fn icon(&self) -> &'static str {
        "youtube"
    }

    fn is_supported(&self, input: &str) -> bool {
        Self::parse(input).as_ref().and_then(Self::video_id).is_some()
    }

    fn media_id(&self, input: &str) -> Result<String, RenderError> {
        Self::parse(input)
            .as_ref()
            .and_then(Self::video_id)
            .ok_or_else(|| RenderError::MediaId {
                input: input.to_string(),
            })
    }

    fn render(
        &self,
        media: &MediaDescriptor,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let src = self.embed_url(&media.location);
        tracing::debug!(location = %media.location, "Rendering YouTube iframe embed");
        Ok(markup::iframe(&src, &options.attrs, &options.style))
    }

    fn embed_url(&self, media_id: &str) -> String {
        format!(
            "{}/{}",
            self.config.embed_base.trim_end_matches('/'),
            media_id
        )
    }

    fn meta(&self, input: &str) -> Option<MediaMeta> {
        let url = Self::parse(input)?;
        let params = url
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        Some(MediaMeta::Query { params })
    }

    fn thumbnail_url(&self, input: &str) -> Option<String> {
        let id = self.media_id(input).ok()?;
        Some(format!(
            "{}/{}/{}",
            THUMBNAIL_HOST,
            id,
            self.config.thumbnail_quality.filename()
        ))
    }

    fn native_url(&self, media: &MediaDescriptor) -> String {
        format!("{}{}", WATCH_BASE, media.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThumbnailQuality;

    fn renderer() -> YouTubeRenderer {
        YouTubeRenderer::default()
    }

    #[test]
    fn test_supports_watch_url() {
        let r = renderer();
        assert!(r.is_supported("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(r.is_supported("http://youtube.com/watch?v=abc&t=42"));
        assert!(r.is_supported("https://m.youtube.com/watch?v=abc"));
    }

    #[test]
    fn test_supports_short_link() {
        let r = renderer();
        assert!(r.is_supported("https://youtu.be/dQw4w9WgXcQ"));
        assert!(r.is_supported("https://youtu.be/dQw4w9WgXcQ?t=10"));
    }

    #[test]
    fn test_rejects_everything_else() {
        let r = renderer();
        assert!(!r.is_supported("https://www.youtube.com/feed/trending"));
        assert!(!r.is_supported("https://youtu.be/"));
        assert!(!r.is_supported("https://vimeo.com/12345"));
        assert!(!r.is_supported("clip.mp4"));
        assert!(!r.is_supported("not a url at all"));
        assert!(!r.is_supported(""));
    }

    #[test]
    fn test_media_id_from_watch_url() {
        let r = renderer();
        assert_eq!(
            r.media_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            r.media_id("https://www.youtube.com/watch?v=abc&list=PL1").unwrap(),
            "abc"
        );
    }

    #[test]
    fn test_media_id_from_short_link() {
        let r = renderer();
        assert_eq!(r.media_id("https://youtu.be/dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_media_id_failure() {
        let r = renderer();
        let err = r.media_id("https://www.youtube.com/feed/trending").unwrap_err();
        assert!(matches!(err, RenderError::MediaId { .. }));
    }

    #[test]
    fn test_media_kind() {
        let r = renderer();
        assert_eq!(
            r.media_kind("https://youtu.be/abc"),
            Some(MediaKind::Youtube)
        );
        assert_eq!(r.media_kind("clip.mp4"), None);
    }

    #[test]
    fn test_embed_url() {
        let r = renderer();
        assert_eq!(
            r.embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_embed_url_with_trailing_slash_base() {
        let mut config = YoutubeConfig::default();
        config.embed_base = "https://www.youtube-nocookie.com/embed/".to_string();
        let r = YouTubeRenderer::new(config);
        assert_eq!(
            r.embed_url("abc"),
            "https://www.youtube-nocookie.com/embed/abc"
        );
    }

    #[test]
    fn test_render_iframe() {
        let r = renderer();
        let html = r
            .render(&MediaDescriptor::new("dQw4w9WgXcQ"), &RenderOptions::default())
            .unwrap();
        assert!(html.starts_with("<iframe"));
        assert!(html.contains("src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\""));
    }

    #[test]
    fn test_render_url_resolves_id_first() {
        let r = renderer();
        let html = r
            .render_url(
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                &RenderOptions::default(),
            )
            .unwrap();
        assert!(html.contains("/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_render_url_forwards_id_failure() {
        let r = renderer();
        let err = r
            .render_url("https://www.youtube.com/feed/trending", &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::MediaId { .. }));
    }

    #[test]
    fn test_meta_is_query_mapping() {
        let r = renderer();
        let meta = r
            .meta("https://www.youtube.com/watch?v=abc&t=42s")
            .unwrap();
        match meta {
            MediaMeta::Query { params } => {
                assert_eq!(params.get("v").map(String::as_str), Some("abc"));
                assert_eq!(params.get("t").map(String::as_str), Some("42s"));
            }
            other => panic!("Expected query meta, got {:?}", other),
        }
    }

    #[test]
    fn test_meta_none_for_non_url() {
        let r = renderer();
        assert!(r.meta("clip.mp4").is_none());
    }

    #[test]
    fn test_thumbnail_url() {
        let r = renderer();
        assert_eq!(
            r.thumbnail_url("https://youtu.be/dQw4w9WgXcQ").unwrap(),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }

    #[test]
    fn test_thumbnail_quality_configurable() {
        let mut config = YoutubeConfig::default();
        config.thumbnail_quality = ThumbnailQuality::Maxres;
        let r = YouTubeRenderer::new(config);
        assert_eq!(
            r.thumbnail_url("https://youtu.be/abc").unwrap(),
            "https://img.youtube.com/vi/abc/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_thumbnail_none_when_id_unresolvable() {
        let r = renderer();
        assert!(r.thumbnail_url("https://example.com/clip").is_none());
    }

    #[test]
    fn test_native_url() {
        let r = renderer();
        assert_eq!(
            r.native_url(&MediaDescriptor::new("abc123")),
            "https://www.youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn test_style_per_view() {
        let r = renderer();
        let view = r.style(ViewKind::View);
        assert_eq!(view.get("max-width").map(String::as_str), Some("100%"));

        let editor = r.style(ViewKind::Editor);
        assert_eq!(editor.get("width").map(String::as_str), Some("560px"));

        // unknown context names fall back to the view mapping
        assert_eq!(r.style(ViewKind::parse("bogus")), r.style(ViewKind::View));
    }

    #[test]
    fn test_fixed_identity() {
        let r = renderer();
        assert_eq!(r.name(), "YouTube");
        assert_eq!(r.kind(), MediaKind::Youtube);
        assert_eq!(r.supported_kinds(), &[MediaKind::Youtube]);
        assert!(r.supported_extensions().is_empty());
        assert_eq!(r.icon(), "youtube");
    }
}
