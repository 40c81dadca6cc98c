//! Configuration management for renderbox
//!
//! This module provides a layered configuration system that loads settings
//! from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use renderbox::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Embed base: {}", config.youtube.embed_base);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the
//! pattern `RENDERBOX__<section>__<key>`:
//! - `RENDERBOX__YOUTUBE__EMBED_BASE=https://www.youtube-nocookie.com/embed`
//! - `RENDERBOX__YOUTUBE__THUMBNAIL_QUALITY=maxres`
//! - `RENDERBOX__VIDEO__CONTROLS=false`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/renderbox.toml`.
//! This can be overridden using the `RENDERBOX_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{Config, PdfConfig, Preload, ThumbnailQuality, VideoConfig, YoutubeConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or
    /// validation fails (bad embed base, blank fallback text).
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
