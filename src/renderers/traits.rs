use thiserror::Error;

use super::types::{
    MediaDescriptor, MediaKind, MediaMeta, RenderOptions, StyleMap, ViewKind,
};

/// Renderer errors
///
/// Exactly one failure class exists: an input a renderer claims to support
/// but cannot derive a media id from. Unsupported inputs, missing MIME
/// types, and missing thumbnails are all negative results, not errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not resolve a media id from '{input}'")]
    MediaId { input: String },
}

/// The media renderer contract
///
/// Each renderer is a stateless strategy over immutable constant data:
/// recognition rules, extension/MIME tables, per-context style tables.
/// Every operation is synchronous and total over well-formed string input
/// except [`MediaRenderer::media_id`] and the rendering entry points that
/// depend on it.
pub trait MediaRenderer: Send + Sync {
    /// Fixed display name.
    fn name(&self) -> &'static str;

    /// The renderer's own media kind tag.
    fn kind(&self) -> MediaKind;

    /// The kinds this renderer claims; always the singleton of
    /// [`MediaRenderer::kind`] for the built-in renderers.
    fn supported_kinds(&self) -> &'static [MediaKind];

    /// File extensions this renderer claims; empty for renderers that
    /// recognize URL patterns instead.
    fn supported_extensions(&self) -> &'static [&'static str] {
        &[]
    }

    /// Fixed CSS sizing for a view context. Callers with free-form context
    /// names go through [`ViewKind::parse`], which falls back to
    /// [`ViewKind::View`] for anything unrecognized.
    fn style(&self, view: ViewKind) -> StyleMap;

    /// Fixed icon identifier for this media kind.
    fn icon(&self) -> &'static str;

    /// Whether the input matches this renderer's recognition rule.
    /// Malformed input is unsupported, never a panic.
    fn is_supported(&self, input: &str) -> bool;

    /// The renderer's kind tag when the input is supported, else `None`.
    fn media_kind(&self, input: &str) -> Option<MediaKind> {
        self.is_supported(input).then(|| self.kind())
    }

    /// Extracts the normalized media identifier from a URL or path.
    fn media_id(&self, input: &str) -> Result<String, RenderError>;

    /// Produces the embeddable HTML fragment for a stored descriptor.
    fn render(
        &self,
        media: &MediaDescriptor,
        options: &RenderOptions,
    ) -> Result<String, RenderError>;

    /// Resolves the media id first, then renders. An id-resolution failure
    /// short-circuits rendering and is forwarded untouched.
    fn render_url(
        &self,
        input: &str,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let id = self.media_id(input)?;
        self.render(&MediaDescriptor::new(id), options)
    }

    /// The source URL placed inside generated markup for a media id.
    fn embed_url(&self, media_id: &str) -> String;

    /// Ancillary metadata for the input, when any can be derived.
    fn meta(&self, input: &str) -> Option<MediaMeta>;

    /// Thumbnail-image URL for the input. Only renderers with a thumbnail
    /// capability return `Some`.
    fn thumbnail_url(&self, _input: &str) -> Option<String> {
        None
    }

    /// A URL to the resource usable outside the embedded player context.
    fn native_url(&self, media: &MediaDescriptor) -> String;
}
