use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use super::pdf::PdfRenderer;
use super::traits::MediaRenderer;
use super::types::MediaKind;
use super::video::VideoRenderer;
use super::youtube::YouTubeRenderer;
use crate::config::Config;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no renderer registered for media kind: {0}")]
    NotFound(MediaKind),
}

/// Registry mapping media kind tags to renderer instances
///
/// Selection is always explicit: by kind tag through [`RendererRegistry::get`],
/// or by probing an input string through [`RendererRegistry::resolve`].
#[derive(Clone)]
pub struct RendererRegistry {
    renderers: BTreeMap<MediaKind, Arc<dyn MediaRenderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self {
            renderers: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, renderer: Arc<dyn MediaRenderer>) {
        tracing::debug!(kind = %renderer.kind(), name = renderer.name(), "Registering media renderer");
        self.renderers.insert(renderer.kind(), renderer);
    }

    pub fn get(&self, kind: MediaKind) -> Result<Arc<dyn MediaRenderer>, RegistryError> {
        self.renderers
            .get(&kind)
            .cloned()
            .ok_or(RegistryError::NotFound(kind))
    }

    pub fn has(&self, kind: MediaKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Registered kinds in deterministic (tag) order
    pub fn kinds(&self) -> Vec<MediaKind> {
        self.renderers.keys().copied().collect()
    }

    /// First registered renderer that claims the input, in deterministic
    /// kind order. `None` when nothing recognizes it.
    pub fn resolve(&self, input: &str) -> Option<Arc<dyn MediaRenderer>> {
        let found = self
            .renderers
            .values()
            .find(|renderer| renderer.is_supported(input))
            .cloned();

        if found.is_none() {
            tracing::debug!(input, "No renderer claims input");
        }
        found
    }

    /// Create the registry of built-in renderers under default configuration
    pub fn with_defaults() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create the registry of built-in renderers from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(YouTubeRenderer::new(config.youtube.clone())));
        registry.register(Arc::new(VideoRenderer::new(config.video.clone())));
        registry.register(Arc::new(PdfRenderer::new(config.pdf.clone())));
        registry
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
