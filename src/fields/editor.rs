//! Rich-text values.
//!
//! The editor stores serialized HTML, never a proprietary document model.
//! List views show a truncated plain-text preview of that HTML.

use std::sync::OnceLock;

use regex::Regex;

/// Character budget for list-view previews.
pub const PREVIEW_LEN: usize = 120;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("static tag pattern"))
}

/// Strip markup, leaving the text content.
pub fn strip_html(html: &str) -> String {
    tag_re().replace_all(html, "").into_owned()
}

/// Plain-text preview of a rich-text value, truncated with an ellipsis.
pub fn plain_text_preview(html: &str, max_chars: usize) -> String {
    let plain = strip_html(html);
    if plain.chars().count() <= max_chars {
        return plain;
    }
    let truncated: String = plain.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>No.</p>"), "No.");
        assert_eq!(strip_html("<ul><li>a</li><li>b</li></ul>"), "ab");
        assert_eq!(strip_html("plain"), "plain");
    }

    #[test]
    fn test_preview_truncates() {
        let long = format!("<p>{}</p>", "x".repeat(200));
        let preview = plain_text_preview(&long, PREVIEW_LEN);
        assert_eq!(preview.chars().count(), PREVIEW_LEN + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_short_value_untouched() {
        assert_eq!(plain_text_preview("<p>short</p>", PREVIEW_LEN), "short");
    }
}
