//! SVG parsing: recover a [`Document`] from ticket markup.
//!
//! The parser reads only what the generator writes: text elements and
//! their tspans. Everything else (rects, foreign elements, unknown
//! attributes) is skipped, so markup that merely resembles a ticket
//! still parses. Text content is reassembled by joining tspans with
//! single spaces; the original line breaks are a layout artifact and are
//! not preserved.
//!
//! The reader keeps text exactly as written. Entity references arrive as
//! separate events, so trimming around them would silently eat interior
//! spaces ("A &amp; B" must come back as "A & B", not "A& B").

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::document::Document;
use crate::error::{ParseError, Result};

/// Parse ticket markup back into a [`Document`].
///
/// The header is the text element marked `data-role="header"`, or the
/// first text element when no roles are present (markup from older
/// generators carries none). Every other text element becomes one item,
/// in document order. Bullet rects and the background are ignored.
///
/// Fails only when the markup is not well-formed XML or contains no text
/// elements at all.
///
/// # Examples
///
/// ```
/// use kaartje::{parse_svg, render_svg, Document, RenderOptions};
///
/// let doc = Document::new("Day Pass").with_item("Valid today");
/// let svg = render_svg(&doc, &RenderOptions::default());
/// assert_eq!(parse_svg(&svg)?, doc);
/// # Ok::<(), kaartje::ParseError>(())
/// ```
pub fn parse_svg(markup: &str) -> Result<Document> {
    let mut reader = Reader::from_str(markup);

    // (role attribute, reassembled content) per text element, in order.
    let mut elements: Vec<(Option<String>, String)> = Vec::new();

    let mut in_text = false;
    let mut in_tspan = false;
    let mut role: Option<String> = None;
    let mut tspan_lines: Vec<String> = Vec::new();
    let mut tspan_text = String::new();
    let mut direct_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match local_name(e.name().as_ref()) {
                b"text" => {
                    in_text = true;
                    role = role_attribute(&e);
                    tspan_lines.clear();
                    direct_text.clear();
                }
                b"tspan" if in_text => {
                    in_tspan = true;
                    tspan_text.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match local_name(e.name().as_ref()) {
                b"text" => elements.push((role_attribute(&e), String::new())),
                b"tspan" if in_text => tspan_lines.push(String::new()),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_tspan {
                    tspan_text.push_str(&String::from_utf8_lossy(e.as_ref()));
                } else if in_text {
                    direct_text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if in_text {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    if let Some(resolved) = resolve_entity(&entity) {
                        if in_tspan {
                            tspan_text.push_str(&resolved);
                        } else {
                            direct_text.push_str(&resolved);
                        }
                    }
                }
            }
            Ok(Event::End(e)) => match local_name(e.name().as_ref()) {
                b"tspan" if in_tspan => {
                    in_tspan = false;
                    tspan_lines.push(std::mem::take(&mut tspan_text));
                }
                b"text" if in_text => {
                    in_text = false;
                    // Tspans win; direct text is the fallback for markup
                    // that never wrapped its content.
                    let content = if tspan_lines.is_empty() {
                        std::mem::take(&mut direct_text)
                    } else {
                        std::mem::take(&mut tspan_lines).join(" ")
                    };
                    elements.push((role.take(), content));
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
    }

    if elements.is_empty() {
        return Err(ParseError::NoTextElements);
    }

    let mut header: Option<String> = None;
    let mut items = Vec::new();
    for (role, content) in elements {
        match role.as_deref() {
            Some("header") if header.is_none() => header = Some(content),
            Some("item") => items.push(content),
            _ if header.is_none() => header = Some(content),
            _ => items.push(content),
        }
    }

    Ok(Document {
        header: header.unwrap_or_default(),
        items,
    })
}

/// Read the `data-role` attribute off a text element, if present.
fn role_attribute(e: &BytesStart) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"data-role" {
            return Some(String::from_utf8_lossy(attr.value.as_ref()).into_owned());
        }
    }
    None
}

/// Extract local name from namespaced XML name (e.g., "svg:text" -> "text").
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

/// Resolve XML entity references.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "amp" => Some("&".to_string()),
        "lt" => Some("<".to_string()),
        "gt" => Some(">".to_string()),
        "apos" => Some("'".to_string()),
        "quot" => Some("\"".to_string()),
        _ => resolve_char_ref(entity).map(|c| c.to_string()),
    }
}

/// Numeric character references: decimal `#NNN` and hex `#xHHH`.
fn resolve_char_ref(entity: &str) -> Option<char> {
    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        return None;
    };
    char::from_u32(code)
}
