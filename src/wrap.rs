//! Text measurement and greedy word wrapping.
//!
//! There is no font machinery here: widths come from a declared
//! approximation (average character width as a fixed fraction of the
//! font size) that is stable, monotonic in string length and font size,
//! and nothing more. The wrapper builds on it greedily, word by word.
//! Both halves are exposed so callers can reason about the width bound a
//! wrapped line satisfies.

/// Average glyph width as a fraction of the font size.
///
/// Real proportional fonts land around 0.5–0.6 em per character; 0.55 is
/// the slightly conservative middle the whole layout is calibrated to.
const AVG_CHAR_WIDTH: f64 = 0.55;

/// Estimate the rendered width of `text` at `font_size`, in canvas units.
///
/// This is `chars × font_size × 0.55`: a heuristic, not a measurement.
/// Callers get determinism and monotonicity, never pixel accuracy.
///
/// # Examples
///
/// ```
/// use kaartje::estimate_width;
///
/// assert_eq!(estimate_width("abcd", 10.0), 4.0 * 10.0 * 0.55);
/// assert_eq!(estimate_width("", 60.0), 0.0);
/// ```
pub fn estimate_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * AVG_CHAR_WIDTH
}

/// Greedily wrap `text` into lines no wider than `max_width`.
///
/// Tokens are produced by splitting on single spaces (runs of spaces
/// yield empty tokens that ride through the accumulator unchanged, as in
/// the original generator). The first token always seeds the first line;
/// every later token extends the current line only while the candidate
/// line measures strictly under `max_width`, and otherwise starts a new
/// one. Words are never split or truncated, so a single over-long word
/// occupies its own over-wide line.
///
/// Wrapping an empty string returns one empty line.
///
/// # Examples
///
/// ```
/// use kaartje::{estimate_width, wrap_text};
///
/// let lines = wrap_text("one two three four", 60.0, 10.0);
/// assert_eq!(lines, vec!["one two", "three four"]);
/// for line in &lines {
///     assert!(estimate_width(line, 10.0) < 60.0);
/// }
/// ```
pub fn wrap_text(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let mut words = text.split(' ');
    let mut current = words.next().unwrap_or_default().to_string();
    let mut lines = Vec::new();

    for word in words {
        let candidate = format!("{current} {word}");
        if estimate_width(&candidate, font_size) < max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    lines.push(current);
    lines
}
