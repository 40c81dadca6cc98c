use super::traits::{MediaRenderer, RenderError};
use super::types::{
    style_map, MediaDescriptor, MediaKind, MediaMeta, RenderOptions, StyleMap, ViewKind,
};
use crate::config::PdfConfig;
use crate::extension::file_extension;
use crate::markup;

const EXTENSIONS: &[&str] = &["pdf"];
const PDF_MIME: &str = "application/pdf";

/// Renderer for PDF documents embedded via `<object>`
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    config: PdfConfig,
}

impl PdfRenderer {
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }

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
            .filter(|ext| ext == "pdf")
            .map(|_| PDF_MIME.to_string())
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(PdfConfig::default())
    }
}

impl MediaRenderer for PdfRenderer {
    fn name(&self) -> &'static str {
        "PDF"
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Pdf
    }

    fn supported_kinds(&self) -> &'static [MediaKind] {
        &[MediaKind::Pdf]
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        EXTENSIONS
    }

    fn style(&self, view: ViewKind) -> StyleMap {
        match view {
            ViewKind::View => style_map(&[("max-width", "100%"), ("max-height", "750px")]),
            ViewKind::Editor => style_map(&[("width", "560px"), ("height", "750px")]),
            ViewKind::Post => style_map(&[("width", "100%")]),
        }
    }

    fn icon(&self) -> &'static str {
        "file-pdf-o"
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
        tracing::debug!(location = %media.location, "Rendering PDF embed");

        let mut out = String::from("<object");
        out.push_str(&markup::attr_string(&options.attrs));
        out.push_str(&format!(" data=\"{}\"", markup::escape(&src)));
        if let Some(mime) = self.resolved_mime(media) {
            out.push_str(&format!(" type=\"{}\"", markup::escape(&mime)));
        }

        let css = markup::style_string(&options.style);
        if !css.is_empty() {
            out.push_str(&format!(" style=\"{}\"", markup::escape(&css)));
        }

        out.push_str(&format!(
            ">{} <a href=\"{}\">Open the document.</a></object>",
            markup::escape(&self.config.fallback_text),
            markup::escape(&src)
        ));

        Ok(out)
    }

    fn embed_url(&self, media_id: &str) -> String {
        markup::embed_url(media_id)
    }

    fn meta(&self, input: &str) -> Option<MediaMeta> {
        let ext = file_extension(input, '.')?;
        if ext != "pdf" {
            return None;
        }
        Some(MediaMeta::File {
            extension: ext,
            mime: PDF_MIME.to_string(),
        })
    }

    fn native_url(&self, media: &MediaDescriptor) -> String {
        media.location.clone()
    }
}
