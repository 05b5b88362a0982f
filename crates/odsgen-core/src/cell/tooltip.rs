//! Cell annotations

use crate::style::Length;
use crate::text::Paragraph;
use crate::xml::attr_display;

/// A tooltip (`office:annotation`) attached to a cell
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Annotation text
    pub text: Paragraph,
    /// Box width
    pub width: Option<Length>,
    /// Box height
    pub height: Option<Length>,
    /// Show the annotation permanently instead of on hover
    pub visible: bool,
}

impl Tooltip {
    /// A hidden tooltip with default size
    pub fn new<P: Into<Paragraph>>(text: P) -> Self {
        Self {
            text: text.into(),
            width: None,
            height: None,
            visible: false,
        }
    }

    /// Set the box size
    pub fn with_size(mut self, width: Length, height: Length) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Show the annotation permanently
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub(crate) fn write_xml(&self, out: &mut String) {
        out.push_str("<office:annotation");
        if self.visible {
            attr_display(out, "office:display", "true");
        }
        if let Some(width) = self.width {
            attr_display(out, "svg:width", width);
        }
        if let Some(height) = self.height {
            attr_display(out, "svg:height", height);
        }
        out.push('>');
        self.text.write_xml(out);
        out.push_str("</office:annotation>");
    }
}

impl From<&str> for Tooltip {
    fn from(text: &str) -> Self {
        Tooltip::new(text)
    }
}

impl From<String> for Tooltip {
    fn from(text: String) -> Self {
        Tooltip::new(text)
    }
}

impl From<Paragraph> for Tooltip {
    fn from(text: Paragraph) -> Self {
        Tooltip::new(text)
    }
}
