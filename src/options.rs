//! Render configuration: ticket profiles and per-call options.
//!
//! A [`TicketProfile`] bundles the fixed canvas constants a ticket style
//! is calibrated to: dimensions, margins, bullet geometry, colors. Two
//! built-ins ship: the default [`TicketProfile::poster`] sheet and the
//! smaller [`TicketProfile::compact`] slip. [`RenderOptions`] layers the
//! per-call overrides (font sizes, wrap width) on top of a profile.

/// How the canvas height is decided.
///
/// Always explicit configuration, never inferred from content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightMode {
    /// A fixed height in canvas units. Content that overflows the canvas
    /// is clipped by the viewer; the engine does not treat it as an
    /// error.
    Fixed(f64),
    /// The final layout cursor plus a bottom margin equal to the top
    /// margin.
    FitContent,
}

const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";
const NS_BLUE: &str = "#0079D3";
const BLACK: &str = "#000000";

/// The fixed constants of one ticket style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TicketProfile {
    /// Canvas width in canvas units.
    pub canvas_width: f64,
    /// Canvas height policy.
    pub height: HeightMode,
    /// `font-family` attribute written on every text element.
    pub font_family: &'static str,
    /// Default header font size; overridable per call.
    pub header_font_size: f64,
    /// Default body font size; overridable per call.
    pub body_font_size: f64,
    /// Per-line vertical advance as a multiple of the font size.
    pub line_height: f64,
    /// Whitespace above the first baseline.
    pub margin_top: f64,
    /// Whitespace left of the header and of the bullet column.
    pub margin_left: f64,
    /// Side length of the square bullet marker.
    pub bullet_size: f64,
    /// Bullet fill color.
    pub bullet_color: &'static str,
    /// Text fill color.
    pub text_color: &'static str,
    /// Horizontal gap between the bullet column and item text.
    pub bullet_text_gap: f64,
    /// Extra vertical gap after each item.
    pub paragraph_gap: f64,
    /// How far above the first baseline the bullet square's top edge
    /// sits, as a fraction of the body font size. Aligns the marker with
    /// the cap height of the first line.
    pub bullet_rise: f64,
}

impl TicketProfile {
    /// The full-page ticket sheet: 1025-wide canvas at a fixed 1526
    /// height, 60/24 default fonts, 26-unit bullets. This is the default
    /// profile.
    pub fn poster() -> Self {
        Self {
            canvas_width: 1025.0,
            height: HeightMode::Fixed(1526.0),
            font_family: FONT_FAMILY,
            header_font_size: 60.0,
            body_font_size: 24.0,
            line_height: 1.4,
            margin_top: 50.0,
            margin_left: 50.0,
            bullet_size: 26.0,
            bullet_color: NS_BLUE,
            text_color: BLACK,
            bullet_text_gap: 50.0,
            paragraph_gap: 50.0,
            bullet_rise: 0.7,
        }
    }

    /// The small slip: 800-wide canvas whose height follows the content,
    /// 32/20 default fonts, 12-unit bullets and tighter gaps.
    pub fn compact() -> Self {
        Self {
            canvas_width: 800.0,
            height: HeightMode::FitContent,
            font_family: FONT_FAMILY,
            header_font_size: 32.0,
            body_font_size: 20.0,
            line_height: 1.4,
            margin_top: 50.0,
            margin_left: 50.0,
            bullet_size: 12.0,
            bullet_color: NS_BLUE,
            text_color: BLACK,
            bullet_text_gap: 30.0,
            paragraph_gap: 24.0,
            bullet_rise: 0.6,
        }
    }

    /// Default wrap width: canvas width minus both side margins.
    pub fn default_line_width(&self) -> f64 {
        self.canvas_width - 2.0 * self.margin_left
    }
}

impl Default for TicketProfile {
    fn default() -> Self {
        Self::poster()
    }
}

/// Per-call render options layered on a [`TicketProfile`].
///
/// `None` selects the profile default. Explicit values are honored as
/// given; non-positive ones produce degenerate output rather than an
/// error.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// The constants bundle to render against.
    pub profile: TicketProfile,
    /// Header font size; defaults to the profile's (60 on poster).
    pub header_font_size: Option<f64>,
    /// Body font size; defaults to the profile's (24 on poster).
    pub body_font_size: Option<f64>,
    /// Maximum text line width; defaults to canvas width minus both side
    /// margins (925 on poster).
    pub max_line_width: Option<f64>,
}

impl RenderOptions {
    /// Options with every field at its profile default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a different profile, keeping any overrides.
    pub fn with_profile(mut self, profile: TicketProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Override the header font size.
    pub fn with_header_font_size(mut self, size: f64) -> Self {
        self.header_font_size = Some(size);
        self
    }

    /// Override the body font size.
    pub fn with_body_font_size(mut self, size: f64) -> Self {
        self.body_font_size = Some(size);
        self
    }

    /// Override the maximum text line width.
    pub fn with_max_line_width(mut self, width: f64) -> Self {
        self.max_line_width = Some(width);
        self
    }
}
