//! # kaartje
//!
//! A small library for turning plain ticket text into a printable SVG,
//! and for reading that SVG back into text.
//!
//! ## Features
//!
//! - Render a header-plus-bullets [`Document`] to self-contained SVG markup
//! - Parse generated markup back into the [`Document`] it came from
//! - Deterministic greedy word wrap with a width heuristic (no font files)
//! - Two built-in ticket profiles (fixed-height poster, content-sized slip)
//!   plus per-call font and width overrides
//!
//! ## Quick Start
//!
//! ```
//! use kaartje::{parse_svg, render_svg, Document, RenderOptions};
//!
//! // First line is the header, "- " lines are items.
//! let doc = Document::from_text("Day Pass\n- Valid today\n- No refunds");
//! let svg = render_svg(&doc, &RenderOptions::default());
//!
//! // The markup reads back into the same document.
//! assert_eq!(parse_svg(&svg).unwrap(), doc);
//! ```
//!
//! ## Working with Documents
//!
//! The [`Document`] struct is the central data type: a header string plus
//! item strings, with no layout information attached. Layout happens at
//! render time and is thrown away afterwards, so editing a document and
//! re-rendering always starts from a clean slate:
//!
//! ```
//! use kaartje::{render_svg, Document, RenderOptions, TicketProfile};
//!
//! let doc = Document::new("Monthly Pass")
//!     .with_item("Valid for 30 days")
//!     .with_item("Non-transferable");
//!
//! // Same document, smaller canvas.
//! let options = RenderOptions::new().with_profile(TicketProfile::compact());
//! let svg = render_svg(&doc, &options);
//! assert!(svg.starts_with("<svg width=\"800\""));
//! ```

pub mod document;
pub mod error;
pub mod escape;
pub mod layout;
pub mod options;
pub mod svg;
pub mod wrap;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use document::Document;
pub use error::{ParseError, Result};
pub use escape::escape_text;
pub use layout::{layout_ticket, BulletRect, ItemBlock, TextBlock, TicketLayout};
pub use options::{HeightMode, RenderOptions, TicketProfile};
pub use svg::{generate_svg, parse_svg, render_svg};
pub use wrap::{estimate_width, wrap_text};
