//! XML text escaping for SVG output.
//!
//! Every piece of user-supplied text passes through here before it is
//! written into markup. An unescaped `<` or `&` in ticket text would
//! corrupt the document structure, so this is a correctness boundary,
//! not a cosmetic one.

/// Escape the five XML-significant characters in text content.
///
/// Replaces:
/// - `&` with `&amp;`
/// - `<` with `&lt;`
/// - `>` with `&gt;`
/// - `'` with `&apos;`
/// - `"` with `&quot;`
///
/// Everything else passes through untouched. The function is
/// context-free: feeding it already-escaped text escapes the ampersands
/// again.
///
/// # Examples
///
/// ```
/// use kaartje::escape_text;
///
/// assert_eq!(escape_text("fish & chips"), "fish &amp; chips");
/// assert_eq!(escape_text("<tspan>"), "&lt;tspan&gt;");
/// assert_eq!(escape_text("say \"hi\""), "say &quot;hi&quot;");
/// ```
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\'' => result.push_str("&apos;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_ampersand() {
        assert_eq!(escape_text("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(escape_text("<text>"), "&lt;text&gt;");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_text("it's"), "it&apos;s");
        assert_eq!(escape_text("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_escape_all_five_together() {
        assert_eq!(
            escape_text("<a href=\"x\">&'"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&apos;"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_text("Geldig op 15 december"), "Geldig op 15 december");
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn test_escaping_is_context_free() {
        // Pre-escaped input is escaped again, never passed through.
        assert_eq!(escape_text("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(escape_text("café ≤ 10€"), "café ≤ 10€");
    }
}
