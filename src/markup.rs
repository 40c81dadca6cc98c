//! Shared markup assembly for media renderers
//!
//! Every renderer builds its fragment from the same low-level pieces: an
//! attribute string assembled from a mapping, an inline-style string
//! assembled from a mapping, a generic iframe embed, and the passthrough
//! embed-URL template used by file-backed media. All interpolated values
//! go through [`escape`] before they reach the markup.

use crate::renderers::{AttrMap, StyleMap};

/// HTML-entity encoding for untrusted strings interpolated into markup.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Builds ` name="value"` attribute pairs from a mapping.
///
/// Values are entity-encoded. Empty names and `style` keys are skipped;
/// inline CSS travels through [`style_string`] instead.
pub fn attr_string(attrs: &AttrMap) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        if name.is_empty() || name.eq_ignore_ascii_case("style") {
            continue;
        }
        out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }
    out
}

/// Builds a `prop: value;` inline-CSS string from a mapping.
///
/// Returns the bare declaration list; callers wrap it in a `style`
/// attribute (and encode it) when the mapping is non-empty.
pub fn style_string(style: &StyleMap) -> String {
    let mut out = String::new();
    for (prop, value) in style {
        if prop.is_empty() {
            continue;
        }
        out.push_str(&format!("{}: {};", prop, value));
    }
    out
}

/// Generic iframe embed markup with escaped `src`, extra attributes, and
/// optional inline style.
pub fn iframe(src: &str, attrs: &AttrMap, style: &StyleMap) -> String {
    let mut out = String::from("<iframe");
    out.push_str(&format!(" src=\"{}\"", escape(src)));
    out.push_str(&attr_string(attrs));

    let css = style_string(style);
    if !css.is_empty() {
        out.push_str(&format!(" style=\"{}\"", escape(&css)));
    }

    out.push_str(" frameborder=\"0\" allowfullscreen></iframe>");
    out
}

/// Generic embed-URL template for file-backed media.
///
/// The stored location already is the URL the browser fetches, so the
/// template is the identity mapping.
pub fn embed_url(media_id: &str) -> String {
    media_id.to_string()
}
