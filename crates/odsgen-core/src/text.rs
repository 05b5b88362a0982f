//! Paragraphs of styled text
//!
//! A [`Paragraph`] becomes a `text:p` element made of [`Span`]s. Spans with
//! a text style are written as `text:span`, others as plain character data.
//! This is how `StyleFamily::Text` styles end up referenced from content.

use crate::error::Result;
use crate::style::{StyleFamily, StyleName};
use crate::xml::{attr, text};

/// A run of text with an optional text style
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    text: String,
    style: Option<StyleName>,
}

impl Span {
    /// Unstyled text
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Text in a `StyleFamily::Text` style
    pub fn styled<S: Into<String>>(text: S, style: &StyleName) -> Result<Self> {
        style.check_family(StyleFamily::Text)?;
        Ok(Self {
            text: text.into(),
            style: Some(style.clone()),
        })
    }

    /// The text of the span
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text style, if any
    pub fn style(&self) -> Option<&StyleName> {
        self.style.as_ref()
    }

    fn write_xml(&self, out: &mut String) {
        match &self.style {
            Some(style) => {
                out.push_str("<text:span");
                attr(out, "text:style-name", style.as_str());
                out.push('>');
                text(out, &self.text);
                out.push_str("</text:span>");
            }
            None => text(out, &self.text),
        }
    }
}

/// A `text:p` element
///
/// ```
/// use odsgen_core::text::Paragraph;
///
/// let paragraph = Paragraph::new().span("Page ").span("1");
/// assert_eq!(paragraph.text(), "Page 1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Paragraph {
    style: Option<StyleName>,
    spans: Vec<Span>,
}

impl Paragraph {
    /// An empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph's text style
    pub fn with_style(mut self, style: &StyleName) -> Result<Self> {
        style.check_family(StyleFamily::Text)?;
        self.style = Some(style.clone());
        Ok(self)
    }

    /// Append unstyled text
    pub fn span<S: Into<String>>(mut self, text: S) -> Self {
        self.spans.push(Span::new(text));
        self
    }

    /// Append text in a `StyleFamily::Text` style
    pub fn styled_span<S: Into<String>>(mut self, text: S, style: &StyleName) -> Result<Self> {
        self.spans.push(Span::styled(text, style)?);
        Ok(self)
    }

    /// Append a prepared span
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// The paragraph style, if any
    pub fn style(&self) -> Option<&StyleName> {
        self.style.as_ref()
    }

    /// The spans in order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Every text style this paragraph refers to
    pub fn styles(&self) -> impl Iterator<Item = &StyleName> {
        self.style
            .iter()
            .chain(self.spans.iter().filter_map(Span::style))
    }

    /// The text of all spans, without markup
    pub fn text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }

    /// Append the `text:p` element
    pub fn write_xml(&self, out: &mut String) {
        out.push_str("<text:p");
        if let Some(style) = &self.style {
            attr(out, "text:style-name", style.as_str());
        }
        if self.spans.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for span in &self.spans {
            span.write_xml(out);
        }
        out.push_str("</text:p>");
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Paragraph::new().span(text)
    }
}

impl From<String> for Paragraph {
    fn from(text: String) -> Self {
        Paragraph::new().span(text)
    }
}

impl From<Span> for Paragraph {
    fn from(span: Span) -> Self {
        Self {
            style: None,
            spans: vec![span],
        }
    }
}
