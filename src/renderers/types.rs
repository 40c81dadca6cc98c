use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// HTML attribute mapping with deterministic iteration order
pub type AttrMap = BTreeMap<String, String>;

/// CSS property mapping with deterministic iteration order
pub type StyleMap = BTreeMap<String, String>;

/// Media kind tags, the process-wide constants renderers are keyed by
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Youtube,
    Video,
    Pdf,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Youtube => "youtube",
            MediaKind::Video => "video",
            MediaKind::Pdf => "pdf",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown media kind: {0}")]
pub struct ParseKindError(String);

impl FromStr for MediaKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youtube" => Ok(MediaKind::Youtube),
            "video" => Ok(MediaKind::Video),
            "pdf" => Ok(MediaKind::Pdf),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

/// View context a fragment is sized for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    #[default]
    View,
    Editor,
    Post,
}

impl ViewKind {
    /// Total parse over arbitrary context names; anything unrecognized
    /// falls back to [`ViewKind::View`].
    pub fn parse(input: &str) -> Self {
        match input {
            "editor" => ViewKind::Editor,
            "post" => ViewKind::Post,
            _ => ViewKind::View,
        }
    }
}

/// A stored media reference handed to a renderer
///
/// `location` is the type-specific identifier: a YouTube video id, or a
/// file path/URL for file-backed media. `mime` optionally overrides the
/// extension-table lookup. `metadata` carries caller-supplied fields this
/// crate never interprets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDescriptor {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl MediaDescriptor {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            mime: None,
            metadata: None,
        }
    }

    pub fn with_mime(location: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            mime: Some(mime.into()),
            metadata: None,
        }
    }
}

/// Extra attributes and inline style merged into a generated fragment
///
/// Defaults to no extra attributes and no inline style.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub attrs: AttrMap,
    #[serde(default)]
    pub style: StyleMap,
}

/// Ancillary metadata a renderer derives from an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaMeta {
    /// Full parsed query-string mapping (URL-pattern renderers)
    Query { params: AttrMap },
    /// Matched extension's MIME record (file-backed renderers)
    File { extension: String, mime: String },
}

/// Builds an owned style map from static property pairs.
pub(crate) fn style_map(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(prop, value)| (prop.to_string(), value.to_string()))
        .collect()
}
