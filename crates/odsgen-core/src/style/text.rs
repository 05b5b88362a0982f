//! Text (font) style

use super::{open_style_element, Color, Length, StyleFamily};
use crate::xml::{attr, attr_display};

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Underline style (`style:text-underline-style`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    #[default]
    Solid,
    Dotted,
    Dash,
    LongDash,
    DotDash,
    DotDotDash,
    Wave,
}

impl Underline {
    fn as_str(self) -> &'static str {
        match self {
            Underline::Solid => "solid",
            Underline::Dotted => "dotted",
            Underline::Dash => "dash",
            Underline::LongDash => "long-dash",
            Underline::DotDash => "dot-dash",
            Underline::DotDotDash => "dot-dot-dash",
            Underline::Wave => "wave",
        }
    }
}

/// Font properties
///
/// Registered on its own, a text style becomes a `style:family="text"`
/// style. Embedded in a [`super::TableCellStyle`], only its
/// `style:text-properties` element is written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    /// Font family name (e.g., "Arial")
    pub font_name: Option<String>,
    /// Font size
    pub font_size: Option<Length>,
    /// Font weight
    pub font_weight: Option<FontWeight>,
    /// Italic
    pub italic: bool,
    /// Font color
    pub color: Option<Color>,
    /// Underline style
    pub underline: Option<Underline>,
    /// Underline color (defaults to the font color)
    pub underline_color: Option<Color>,
}

impl TextStyle {
    /// Create an empty text style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font name
    pub fn with_font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font_name = Some(name.into());
        self
    }

    /// Set font size
    pub fn with_font_size(mut self, size: Length) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set font size in points
    pub fn with_font_size_pt(self, size: f64) -> Self {
        self.with_font_size(Length::pt(size))
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.font_weight = Some(if bold {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        });
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set font color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Set underline color
    pub fn with_underline_color(mut self, color: Color) -> Self {
        self.underline_color = Some(color);
        self
    }

    /// Check if no property is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Append `<style:text-properties .../>`, or nothing when empty
    pub fn write_properties(&self, out: &mut String) {
        if self.is_empty() {
            return;
        }
        out.push_str("<style:text-properties");
        if let Some(weight) = self.font_weight {
            let weight = weight.as_str();
            attr_display(out, "fo:font-weight", weight);
            attr_display(out, "style:font-weight-asian", weight);
            attr_display(out, "style:font-weight-complex", weight);
        }
        if self.italic {
            attr_display(out, "fo:font-style", "italic");
            attr_display(out, "style:font-style-asian", "italic");
            attr_display(out, "style:font-style-complex", "italic");
        }
        if let Some(color) = self.color {
            attr_display(out, "fo:color", color);
        }
        if let Some(name) = &self.font_name {
            attr(out, "style:font-name", name);
        }
        if let Some(size) = self.font_size {
            attr_display(out, "fo:font-size", size);
            attr_display(out, "style:font-size-asian", size);
            attr_display(out, "style:font-size-complex", size);
        }
        if let Some(underline) = self.underline {
            attr_display(out, "style:text-underline-style", underline.as_str());
            attr_display(out, "style:text-underline-width", "auto");
            match self.underline_color {
                Some(color) => attr_display(out, "style:text-underline-color", color),
                None => attr_display(out, "style:text-underline-color", "font-color"),
            }
        }
        out.push_str("/>");
    }

    pub(crate) fn write_xml(&self, name: &str, out: &mut String) {
        open_style_element(out, name, StyleFamily::Text, |_| {});
        self.write_properties(out);
        out.push_str("</style:style>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_properties() {
        let mut out = String::new();
        TextStyle::new().write_properties(&mut out);
        assert_eq!(out, "");
    }

    #[test]
    fn test_bold_underlined() {
        let mut out = String::new();
        TextStyle::new()
            .with_bold(true)
            .with_underline(Underline::Dash)
            .write_properties(&mut out);
        assert_eq!(
            out,
            "<style:text-properties fo:font-weight=\"bold\" style:font-weight-asian=\"bold\" \
             style:font-weight-complex=\"bold\" style:text-underline-style=\"dash\" \
             style:text-underline-width=\"auto\" style:text-underline-color=\"font-color\"/>"
        );
    }

    #[test]
    fn test_named_text_style() {
        let mut out = String::new();
        TextStyle::new()
            .with_color(Color::RED)
            .with_font_size_pt(12.0)
            .write_xml("T1", &mut out);
        assert_eq!(
            out,
            "<style:style style:name=\"T1\" style:family=\"text\"><style:text-properties \
             fo:color=\"#ff0000\" fo:font-size=\"12pt\" style:font-size-asian=\"12pt\" \
             style:font-size-complex=\"12pt\"/></style:style>"
        );
    }
}
