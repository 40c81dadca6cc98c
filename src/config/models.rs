use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub youtube: YoutubeConfig,
    #[serde(default)]
    pub video: VideoConfig,
    #[serde(default)]
    pub pdf: PdfConfig,
}

/// YouTube renderer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YoutubeConfig {
    /// Base URL the embed path is appended to
    #[serde(default = "default_embed_base")]
    pub embed_base: String,
    /// Image variant requested from the thumbnail host
    #[serde(default)]
    pub thumbnail_quality: ThumbnailQuality,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            embed_base: default_embed_base(),
            thumbnail_quality: ThumbnailQuality::default(),
        }
    }
}

fn default_embed_base() -> String {
    "https://www.youtube.com/embed".to_string()
}

/// Thumbnail variants served by img.youtube.com
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    /// 120x90
    Default,
    /// 320x180
    Medium,
    /// 480x360
    #[default]
    High,
    /// 640x480
    Sd,
    /// 1280x720
    Maxres,
}

impl ThumbnailQuality {
    /// File name of this variant on the image host
    pub fn filename(&self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default.jpg",
            ThumbnailQuality::Medium => "mqdefault.jpg",
            ThumbnailQuality::High => "hqdefault.jpg",
            ThumbnailQuality::Sd => "sddefault.jpg",
            ThumbnailQuality::Maxres => "maxresdefault.jpg",
        }
    }
}

/// Video-file renderer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoConfig {
    /// Emit the `controls` attribute on generated `<video>` tags
    #[serde(default = "default_controls")]
    pub controls: bool,
    /// Value of the `preload` attribute
    #[serde(default)]
    pub preload: Preload,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            controls: default_controls(),
            preload: Preload::default(),
        }
    }
}

fn default_controls() -> bool {
    true
}

/// `preload` attribute values understood by browsers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preload {
    None,
    #[default]
    Metadata,
    Auto,
}

impl Preload {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preload::None => "none",
            Preload::Metadata => "metadata",
            Preload::Auto => "auto",
        }
    }
}

/// PDF renderer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PdfConfig {
    /// Text shown when the browser cannot display the embedded document
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            fallback_text: default_fallback_text(),
        }
    }
}

fn default_fallback_text() -> String {
    "This browser cannot display embedded PDF documents.".to_string()
}
