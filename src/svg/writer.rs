//! SVG generation: serialize a [`TicketLayout`] into ticket markup.
//!
//! The markup is deliberately plain: one root element, one white
//! background rect, one `<text>` per block with one `<tspan>` per
//! wrapped line, one square `<rect>` per bullet. Every number is written
//! with the shortest decimal form that round-trips, so equal layouts
//! always serialize to byte-identical markup.

use crate::document::Document;
use crate::escape::escape_text;
use crate::layout::{layout_ticket, TextBlock, TicketLayout};
use crate::options::{RenderOptions, TicketProfile};

/// Render a document straight to ticket markup.
///
/// Equivalent to [`layout_ticket`] followed by [`generate_svg`]; the
/// intermediate layout is discarded. Rendering never fails.
///
/// # Examples
///
/// ```
/// use kaartje::{render_svg, Document, RenderOptions};
///
/// let doc = Document::new("Day Pass").with_item("Valid today");
/// let svg = render_svg(&doc, &RenderOptions::default());
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("Day Pass"));
/// ```
pub fn render_svg(doc: &Document, options: &RenderOptions) -> String {
    generate_svg(&layout_ticket(doc, options))
}

/// Serialize a computed layout into SVG markup.
pub fn generate_svg(layout: &TicketLayout) -> String {
    let profile = &layout.profile;
    let mut svg = String::new();

    // 1. Root element and white background
    svg.push_str(&format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        w = profile.canvas_width,
        h = layout.canvas_height,
    ));
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    // 2. Header text
    push_text_block(&mut svg, &layout.header, "header", profile);

    // 3. Items: bullet square, then the indented text block
    for item in &layout.items {
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{size}\" height=\"{size}\" fill=\"{}\"/>\n",
            item.bullet.x,
            item.bullet.y,
            profile.bullet_color,
            size = item.bullet.size,
        ));
        push_text_block(&mut svg, &item.text, "item", profile);
    }

    svg.push_str("</svg>");
    svg
}

/// Append one text element: a `<text>` wrapper plus one `<tspan>` per
/// line. The first tspan carries `dy="0"`, every later one the block's
/// line advance, so line positions are relative and the element moves as
/// a unit.
fn push_text_block(svg: &mut String, block: &TextBlock, role: &str, profile: &TicketProfile) {
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\" data-role=\"{}\">\n",
        block.origin_x,
        block.start_y,
        profile.font_family,
        block.font_size,
        profile.text_color,
        role,
    ));

    for (i, line) in block.lines.iter().enumerate() {
        let dy = if i == 0 { 0.0 } else { block.line_advance };
        svg.push_str(&format!(
            "    <tspan x=\"{}\" dy=\"{}\">{}</tspan>\n",
            block.origin_x,
            dy,
            escape_text(line)
        ));
    }

    svg.push_str("  </text>\n");
}
