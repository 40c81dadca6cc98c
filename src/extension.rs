//! File-extension extraction for media paths and URLs

/// Returns the lowercase trailing extension of a path or URL, split on
/// `separator`.
///
/// Query strings and fragments are stripped first, so `clip.mp4?cache=1`
/// resolves to `mp4`. Returns `None` when the separator is absent, when
/// nothing follows it, or when the tail crosses a path boundary (as in
/// `example.com/watch`).
pub fn file_extension(input: &str, separator: char) -> Option<String> {
    let path = input.split(['?', '#']).next().unwrap_or(input);
    let idx = path.rfind(separator)?;
    let tail = &path[idx + separator.len_utf8()..];

    if tail.is_empty() || tail.contains('/') || tail.contains('\\') {
        return None;
    }

    Some(tail.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_file_name() {
        assert_eq!(file_extension("clip.mp4", '.'), Some("mp4".to_string()));
        assert_eq!(file_extension("slides.PDF", '.'), Some("pdf".to_string()));
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            file_extension("/media/2024/clip.webm", '.'),
            Some("webm".to_string())
        );
    }

    #[test]
    fn test_full_url_with_query() {
        assert_eq!(
            file_extension("https://cdn.example.com/clip.ogv?cache=1&x=2", '.'),
            Some("ogv".to_string())
        );
    }

    #[test]
    fn test_fragment_stripped() {
        assert_eq!(
            file_extension("docs/report.pdf#page=3", '.'),
            Some("pdf".to_string())
        );
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(file_extension("clip", '.'), None);
        assert_eq!(file_extension("", '.'), None);
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(file_extension("clip.", '.'), None);
    }

    #[test]
    fn test_dot_in_host_only() {
        // The last dot sits in the host, so the tail crosses a path boundary
        assert_eq!(file_extension("https://example.com/watch", '.'), None);
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(file_extension("archive_tar", '_'), Some("tar".to_string()));
    }
}
