//! The editable ticket document and its raw-text form.
//!
//! A [`Document`] is what the editor round-trips: one header line plus
//! an ordered list of bullet items. Collaborators hold the document as
//! raw text (the form a person types); the conversion rules between the
//! two live here so every entry point splits text the same way.

/// An editable ticket: one header plus ordered bullet items.
///
/// Item order is significant: items render top to bottom exactly as
/// listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub header: String,
    pub items: Vec<String>,
}

impl Document {
    /// Create a document with the given header and no items.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            items: Vec::new(),
        }
    }

    /// Append one bullet item (builder style).
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Split the editor's raw-text form into a document.
    ///
    /// The first non-blank line becomes the header, kept verbatim. Every
    /// later non-blank line becomes an item: a leading `-` marker and
    /// the whitespace after it are stripped, then the remainder is
    /// trimmed. The marker must sit at the very start of the line;
    /// indented markers are content. Zero non-blank lines produce an
    /// empty document, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaartje::Document;
    ///
    /// let doc = Document::from_text("Day Pass\n\n- Valid today\n- No refunds");
    /// assert_eq!(doc.header, "Day Pass");
    /// assert_eq!(doc.items, vec!["Valid today", "No refunds"]);
    /// ```
    pub fn from_text(raw: &str) -> Self {
        let mut non_blank = raw.lines().filter(|line| !line.trim().is_empty());
        let header = non_blank.next().unwrap_or_default().to_string();
        let items = non_blank
            .map(|line| strip_bullet(line).trim().to_string())
            .collect();
        Self { header, items }
    }

    /// Render the raw-text form: the header, a blank line, then one
    /// `- item` line per item.
    ///
    /// [`Document::from_text`] inverts this whenever header and items
    /// are themselves single non-blank lines.
    pub fn to_text(&self) -> String {
        let mut text = self.header.clone();
        if !self.items.is_empty() {
            text.push('\n');
            for item in &self.items {
                text.push_str("\n- ");
                text.push_str(item);
            }
        }
        text
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.items.is_empty()
    }
}

/// Strip a leading `-` marker and the whitespace that follows it.
fn strip_bullet(line: &str) -> &str {
    match line.strip_prefix('-') {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}
