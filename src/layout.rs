//! The layout engine: documents in, positioned draw lists out.
//!
//! A single downward pass over the document. The vertical cursor is a
//! plain local value threaded through one helper call per block (each
//! helper takes the cursor and hands back the advanced one), so there is
//! no layout state outside this function's stack frame, and repeated
//! calls cannot interfere.

use crate::document::Document;
use crate::options::{HeightMode, RenderOptions, TicketProfile};
use crate::wrap::wrap_text;

/// Section spacing after the header, as a multiple of the header font
/// size.
const HEADER_SECTION_GAP: f64 = 1.5;

/// One positioned run of wrapped text lines.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Wrapped lines, top to bottom.
    pub lines: Vec<String>,
    /// The x coordinate every line starts at.
    pub origin_x: f64,
    /// Baseline y of the first line.
    pub start_y: f64,
    /// Font size the lines were wrapped at.
    pub font_size: f64,
    /// Vertical advance between consecutive lines. The writer emits this
    /// exact value as the tspan `dy`, so markup offsets can never drift
    /// from the spacing the layout assumed.
    pub line_advance: f64,
}

/// The square bullet marker, as top-left corner plus side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletRect {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// One bullet item: marker plus text block.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBlock {
    pub bullet: BulletRect,
    pub text: TextBlock,
}

/// The positioned draw list for one ticket.
///
/// Ephemeral by design: computed fresh on every render, discarded after
/// serialization, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketLayout {
    /// The profile the ticket was laid out against; the writer draws
    /// with its colors, font family and canvas width.
    pub profile: TicketProfile,
    /// Canvas height after applying the profile's [`HeightMode`].
    pub canvas_height: f64,
    pub header: TextBlock,
    pub items: Vec<ItemBlock>,
}

/// Lay a document out on the vertical flow.
///
/// The header wraps at the maximum line width and is followed by a
/// section gap of 1.5× its font size. Each item then contributes a
/// bullet square aligned to the cap height of its first line and a text
/// block wrapped at `max_line_width − bullet_text_gap`, followed by one
/// line advance plus the paragraph gap.
///
/// Never fails: an empty header lays out as one empty line, an empty
/// item list as no item blocks, and non-positive font sizes or widths
/// produce degenerate (but well-formed) geometry.
///
/// # Examples
///
/// ```
/// use kaartje::{layout_ticket, Document, RenderOptions};
///
/// let doc = Document::new("Day Pass").with_item("Valid today");
/// let layout = layout_ticket(&doc, &RenderOptions::default());
/// assert_eq!(layout.header.start_y, 50.0);
/// assert_eq!(layout.items[0].bullet.x, 50.0);
/// ```
pub fn layout_ticket(doc: &Document, options: &RenderOptions) -> TicketLayout {
    let profile = options.profile;
    let header_font_size = options
        .header_font_size
        .unwrap_or(profile.header_font_size);
    let body_font_size = options.body_font_size.unwrap_or(profile.body_font_size);
    let max_line_width = options
        .max_line_width
        .unwrap_or_else(|| profile.default_line_width());

    let (header, mut cursor) = layout_header(
        &doc.header,
        profile.margin_top,
        header_font_size,
        max_line_width,
        &profile,
    );

    let mut items = Vec::with_capacity(doc.items.len());
    for item in &doc.items {
        let (block, next) =
            layout_item(item, cursor, body_font_size, max_line_width, &profile);
        items.push(block);
        cursor = next;
    }

    let canvas_height = match profile.height {
        HeightMode::Fixed(height) => height,
        HeightMode::FitContent => cursor + profile.margin_top,
    };

    TicketLayout {
        profile,
        canvas_height,
        header,
        items,
    }
}

/// Place the header block at `cursor`; returns the block and the cursor
/// below it (last line plus the section gap).
fn layout_header(
    text: &str,
    cursor: f64,
    font_size: f64,
    max_line_width: f64,
    profile: &TicketProfile,
) -> (TextBlock, f64) {
    let lines = wrap_text(text, max_line_width, font_size);
    let line_advance = font_size * profile.line_height;
    let next = cursor
        + (lines.len() - 1) as f64 * line_advance
        + font_size * HEADER_SECTION_GAP;

    let block = TextBlock {
        lines,
        origin_x: profile.margin_left,
        start_y: cursor,
        font_size,
        line_advance,
    };
    (block, next)
}

/// Place one item block at `cursor`; returns the block and the cursor
/// below it (every line, one trailing advance, the paragraph gap).
fn layout_item(
    text: &str,
    cursor: f64,
    font_size: f64,
    max_line_width: f64,
    profile: &TicketProfile,
) -> (ItemBlock, f64) {
    // The gap is measured rightward from the margin but subtracted from
    // `max_line_width`; the two reference frames coincide only at the
    // default width. Kept exactly as the original computes it.
    let wrap_width = max_line_width - profile.bullet_text_gap;
    let lines = wrap_text(text, wrap_width, font_size);
    let line_advance = font_size * profile.line_height;

    let bullet = BulletRect {
        x: profile.margin_left,
        y: cursor - font_size * profile.bullet_rise,
        size: profile.bullet_size,
    };
    let next = cursor + lines.len() as f64 * line_advance + profile.paragraph_gap;

    let text_block = TextBlock {
        lines,
        origin_x: profile.margin_left + profile.bullet_text_gap,
        start_y: cursor,
        font_size,
        line_advance,
    };
    (ItemBlock { bullet, text: text_block }, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_pass() -> Document {
        Document::new("Day Pass")
            .with_item("Valid today")
            .with_item("No refunds")
    }

    #[test]
    fn test_header_starts_at_top_margin() {
        let layout = layout_ticket(&day_pass(), &RenderOptions::default());
        assert_eq!(layout.header.start_y, 50.0);
        assert_eq!(layout.header.origin_x, 50.0);
        assert_eq!(layout.header.font_size, 60.0);
        assert_eq!(layout.header.lines, vec!["Day Pass"]);
    }

    #[test]
    fn test_first_item_sits_below_the_section_gap() {
        // One header line: 50 + 60 * 1.5 = 140.
        let layout = layout_ticket(&day_pass(), &RenderOptions::default());
        assert_eq!(layout.items[0].text.start_y, 140.0);
    }

    #[test]
    fn test_multi_line_header_advances_the_cursor() {
        let doc = Document::new("aaaa bbbb");
        let options = RenderOptions::new().with_max_line_width(200.0);
        let layout = layout_ticket(&doc, &options);
        assert_eq!(layout.header.lines.len(), 2);

        let doc = doc.with_item("x");
        let layout = layout_ticket(&doc, &options);
        assert_eq!(
            layout.items[0].text.start_y,
            50.0 + 60.0 * 1.4 + 60.0 * 1.5
        );
    }

    #[test]
    fn test_bullet_aligns_with_first_line_cap_height() {
        let layout = layout_ticket(&day_pass(), &RenderOptions::default());
        let item = &layout.items[0];
        assert_eq!(item.bullet.x, 50.0);
        assert_eq!(item.bullet.size, 26.0);
        assert_eq!(item.bullet.y, 140.0 - 24.0 * 0.7);
    }

    #[test]
    fn test_item_text_is_indented_past_the_bullet_column() {
        let layout = layout_ticket(&day_pass(), &RenderOptions::default());
        assert_eq!(layout.items[0].text.origin_x, 100.0);
        assert_eq!(layout.items[0].text.font_size, 24.0);
        assert_eq!(layout.items[0].text.line_advance, 24.0 * 1.4);
    }

    #[test]
    fn test_item_wrap_width_reserves_the_bullet_gap() {
        let doc = Document::new("H").with_item("ab cd");
        // Item wrap width is max_line_width - 50. At body size 24 the
        // candidate "ab cd" measures 66, so it wraps under a 100-wide
        // limit (wrap width 50) but not under a 200-wide one.
        let narrow = layout_ticket(&doc, &RenderOptions::new().with_max_line_width(100.0));
        assert_eq!(narrow.items[0].text.lines.len(), 2);
        let wide = layout_ticket(&doc, &RenderOptions::new().with_max_line_width(200.0));
        assert_eq!(wide.items[0].text.lines.len(), 1);
    }

    #[test]
    fn test_cursor_advances_one_line_plus_paragraph_gap_per_item() {
        let layout = layout_ticket(&day_pass(), &RenderOptions::default());
        let first = &layout.items[0];
        let second = &layout.items[1];
        assert_eq!(first.text.lines.len(), 1);
        assert_eq!(
            second.text.start_y,
            first.text.start_y + 24.0 * 1.4 + 50.0
        );
    }

    #[test]
    fn test_fixed_height_ignores_content() {
        let mut doc = day_pass();
        for _ in 0..40 {
            doc.items.push("Another condition applies to this ticket".into());
        }
        let layout = layout_ticket(&doc, &RenderOptions::default());
        assert_eq!(layout.canvas_height, 1526.0);
    }

    #[test]
    fn test_fit_content_height_is_cursor_plus_bottom_margin() {
        // Header only on the compact profile: cursor ends at
        // 50 + 32 * 1.5 = 98, plus the 50 bottom margin.
        let doc = Document::new("Header Only");
        let options = RenderOptions::new().with_profile(TicketProfile::compact());
        let layout = layout_ticket(&doc, &options);
        assert_eq!(layout.canvas_height, 148.0);
    }

    #[test]
    fn test_empty_document_degrades_to_a_minimal_layout() {
        let layout = layout_ticket(&Document::default(), &RenderOptions::default());
        assert_eq!(layout.header.lines, vec![""]);
        assert!(layout.items.is_empty());
        assert_eq!(layout.canvas_height, 1526.0);
    }

    #[test]
    fn test_zero_font_size_is_degenerate_not_fatal() {
        let doc = Document::new("H").with_item("a b c");
        let options = RenderOptions::new().with_body_font_size(0.0);
        let layout = layout_ticket(&doc, &options);
        // Everything measures zero wide, so nothing wraps.
        assert_eq!(layout.items[0].text.lines, vec!["a b c"]);
        assert_eq!(layout.items[0].bullet.y, layout.items[0].text.start_y);
    }
}
