use super::traits::{MediaRenderer, RenderError};
use super::types::{
    style_map, MediaDescriptor, MediaKind, MediaMeta, RenderOptions, StyleMap, ViewKind,
};
use crate::config::VideoConfig;
use crate::extension::file_extension;
use crate::markup;

const EXTENSIONS: &[&str] = &["mp4", "ogg", "ogv", "webm"];

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "mp4" => Some("video/mp4"),
        "ogg" | "ogv" => Some("video/ogg"),
        "webm" => Some("video/webm"),
        _ => None,
    }
}

/// Renderer for directly playable video files
///
/// Recognition is by file extension; the whole input string is the media
/// id, and the descriptor's `location` is the URL the `<source>` points at.
#[derive(Debug, Clone)]
pub struct VideoRenderer {
    config: VideoConfig,
}

impl VideoRenderer {
    pub fn new(config: VideoConfig) -> Self {
        Self { config }
    }

    /// MIME attribute value: explicit descriptor override when it parses
    /// as a media type, else the extension-table entry. `None` means the
    /// attribute is omitted from the markup.
    fn resolved_mime(&self, media: &MediaDescriptor) -> Option<String> {
        if let Some(ref mime_override) = media.mime {
            match mime_override.parse::<mime::Mime>() {
                Ok(parsed) => return Some(parsed.to_string()),
                Err(_) => {
                    tracing::warn!(mime = %mime_override, "Ignoring unparseable mime override");
                }
            }
        }

        file_extension(&media.location, '.')
            .as_deref()
            .and_then(mime_for_extension)
            .map(str::to_string)
    }
}

impl Default for VideoRenderer {
    fn default() -> Self {
        Self::new(VideoConfig::default())
    }
}

impl MediaRenderer for VideoRenderer {
    fn name(&self) -> &'static str {
        "Video"
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Video
    }

    fn supported_kinds(&self) -> &'static [MediaKind] {
        &[MediaKind::Video]
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        EXTENSIONS
    }

    fn style(&self, view: ViewKind) -> StyleMap {
        match view {
            ViewKind::View => style_map(&[("max-width", "100%"), ("max-height", "500px")]),
            ViewKind::Editor => style_map(&[("width", "560px"), ("height", "315px")]),
            ViewKind::Post => style_map(&[("width", "100%")]),
        }
    }

    fn icon(&self) -> &'static str {
        "film"
    }

    fn is_supported(&self, input: &str) -> bool {
        file_extension(input, '.')
            .map(|ext| EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }

    /// The whole input string is the identifier; never fails.
    fn media_id(&self, input: &str) -> Result<String, RenderError> {
        Ok(input.to_string())
    }

    fn render(
        &self,
        media: &MediaDescriptor,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let src = self.embed_url(&media.location);
        tracing::debug!(location = %media.location, "Rendering video embed");

        let mut out = String::from("<video");
        out.push_str(&markup::attr_string(&options.attrs));
        if self.config.controls {
            out.push_str(" controls");
        }
        out.push_str(&format!(" preload=\"{}\"", self.config.preload.as_str()));

        let css = markup::style_string(&options.style);
        if !css.is_empty() {
            out.push_str(&format!(" style=\"{}\"", markup::escape(&css)));
        }

        out.push_str(&format!("><source src=\"{}\"", markup::escape(&src)));
        if let Some(mime) = self.resolved_mime(media) {
            out.push_str(&format!(" type=\"{}\"", markup::escape(&mime)));
        }
        out.push_str(" /></video>");

        Ok(out)
    }

    fn embed_url(&self, media_id: &str) -> String {
        markup::embed_url(media_id)
    }

    fn meta(&self, input: &str) -> Option<MediaMeta> {
        let ext = file_extension(input, '.')?;
        let mime = mime_for_extension(&ext)?;
        Some(MediaMeta::File {
            extension: ext,
            mime: mime.to_string(),
        })
    }

    fn native_url(&self, media: &MediaDescriptor) -> String {
        media.location.clone()
    }
}
