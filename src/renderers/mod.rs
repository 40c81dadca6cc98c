//! Media renderer system
//!
//! This module provides the renderer trait, the built-in renderers, and
//! the registry used to select among them.
//!
//! ## Key Components
//!
//! - [`MediaRenderer`] - Main trait every renderer implements
//! - [`YouTubeRenderer`], [`VideoRenderer`], [`PdfRenderer`] - Built-in renderers
//! - [`RendererRegistry`] - Registry mapping kind tags to renderer instances
//! - [`MediaDescriptor`] - The `{location, mime?}` record identifying a resource
//! - [`RenderOptions`] - Extra attributes/inline style for generated fragments
//!
//! ## Example
//!
//! ```rust
//! use renderbox::renderers::{MediaRenderer, RendererRegistry, RenderOptions};
//!
//! let registry = RendererRegistry::with_defaults();
//! let renderer = registry
//!     .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!     .expect("input is a watch URL");
//!
//! let html = renderer
//!     .render_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ", &RenderOptions::default())
//!     .unwrap();
//! assert!(html.contains("/embed/dQw4w9WgXcQ"));
//! ```

mod pdf;
mod registry;
mod traits;
mod types;
mod video;
mod youtube;

pub use pdf::PdfRenderer;
pub use registry::{RegistryError, RendererRegistry};
pub use traits::{MediaRenderer, RenderError};
pub use types::{
    AttrMap, MediaDescriptor, MediaKind, MediaMeta, ParseKindError, RenderOptions, StyleMap,
    ViewKind,
};
pub use video::VideoRenderer;
pub use youtube::YouTubeRenderer;
