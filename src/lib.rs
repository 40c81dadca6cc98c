//! renderbox — media-type renderers for CMS content
//!
//! Given a URL or a stored media descriptor, a renderer decides whether it
//! supports the input, extracts a normalized media identifier, produces an
//! embeddable HTML fragment, and supplies auxiliary metadata (thumbnail
//! URL, icon identifier, native link, per-context CSS sizing).
//!
//! Three renderers ship with the crate: YouTube, generic video files, and
//! PDF documents. They are selected through [`renderers::RendererRegistry`]
//! by media kind or by probing an input string.

pub mod config;
pub mod extension;
pub mod markup;
pub mod renderers;

pub use config::Config;
pub use renderers::{
    MediaDescriptor, MediaKind, MediaMeta, MediaRenderer, RenderError, RenderOptions,
    RendererRegistry, ViewKind,
};
