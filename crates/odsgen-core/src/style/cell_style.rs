//! Table cell style

use std::fmt;

use super::{
    open_style_element, Color, Length, Margins, StyleFamily, StyleName, TextStyle,
    DEFAULT_CELL_STYLE,
};
use crate::xml::{attr, attr_display};

/// Horizontal text alignment (`fo:text-align`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    #[default]
    Start,
    Center,
    End,
    Justify,
}

impl HorizontalAlign {
    fn as_str(self) -> &'static str {
        match self {
            HorizontalAlign::Start => "start",
            HorizontalAlign::Center => "center",
            HorizontalAlign::End => "end",
            HorizontalAlign::Justify => "justify",
        }
    }
}

/// Vertical alignment (`style:vertical-align`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    Top,
    Middle,
    #[default]
    Bottom,
    Automatic,
}

impl VerticalAlign {
    fn as_str(self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
            VerticalAlign::Automatic => "automatic",
        }
    }
}

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLine {
    #[default]
    Solid,
    Dotted,
    Dashed,
    Double,
}

impl BorderLine {
    fn as_str(self) -> &'static str {
        match self {
            BorderLine::Solid => "solid",
            BorderLine::Dotted => "dotted",
            BorderLine::Dashed => "dashed",
            BorderLine::Double => "double",
        }
    }
}

/// A border, written as `<width> <line> <color>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Border {
    pub width: Length,
    pub line: BorderLine,
    pub color: Color,
}

impl Border {
    /// Create a border
    pub fn new(width: Length, line: BorderLine, color: Color) -> Self {
        Self { width, line, color }
    }

    /// A thin solid black border
    pub fn thin() -> Self {
        Self::new(Length::pt(0.06), BorderLine::Solid, Color::BLACK)
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.width, self.line.as_str(), self.color)
    }
}

/// Style of a table cell
///
/// Every cell style other than `Default` inherits from a parent, `Default`
/// unless set otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TableCellStyle {
    /// Parent cell style
    pub parent: Option<StyleName>,
    /// Data (number format) style
    pub data_style: Option<StyleName>,
    /// Font properties
    pub text: TextStyle,
    /// Background color
    pub background: Option<Color>,
    /// Horizontal alignment
    pub horizontal_align: Option<HorizontalAlign>,
    /// Vertical alignment
    pub vertical_align: Option<VerticalAlign>,
    /// Wrap text
    pub wrap: bool,
    /// Border on all four sides
    pub border: Option<Border>,
    pub border_top: Option<Border>,
    pub border_bottom: Option<Border>,
    pub border_left: Option<Border>,
    pub border_right: Option<Border>,
    /// Paragraph margins
    pub margins: Margins,
}

impl TableCellStyle {
    /// Create an empty cell style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parent style
    pub fn with_parent(mut self, parent: StyleName) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the data style
    pub fn with_data_style(mut self, data_style: StyleName) -> Self {
        self.data_style = Some(data_style);
        self
    }

    /// Set font properties
    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.text = self.text.with_bold(bold);
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.text = self.text.with_italic(italic);
        self
    }

    /// Set font color
    pub fn with_font_color(mut self, color: Color) -> Self {
        self.text = self.text.with_color(color);
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set horizontal alignment
    pub fn with_horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    /// Enable text wrapping
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the same border on all sides
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Set the top border
    pub fn with_border_top(mut self, border: Border) -> Self {
        self.border_top = Some(border);
        self
    }

    /// Set the bottom border
    pub fn with_border_bottom(mut self, border: Border) -> Self {
        self.border_bottom = Some(border);
        self
    }

    /// Set the left border
    pub fn with_border_left(mut self, border: Border) -> Self {
        self.border_left = Some(border);
        self
    }

    /// Set the right border
    pub fn with_border_right(mut self, border: Border) -> Self {
        self.border_right = Some(border);
        self
    }

    /// Set paragraph margins
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub(crate) fn references(&self) -> Vec<(&StyleName, StyleFamily)> {
        let mut refs = Vec::new();
        if let Some(parent) = &self.parent {
            refs.push((parent, StyleFamily::TableCell));
        }
        if let Some(data) = &self.data_style {
            refs.push((data, StyleFamily::Data));
        }
        refs
    }

    fn has_cell_properties(&self) -> bool {
        self.background.is_some()
            || self.vertical_align.is_some()
            || self.wrap
            || self.border.is_some()
            || self.border_top.is_some()
            || self.border_bottom.is_some()
            || self.border_left.is_some()
            || self.border_right.is_some()
    }

    pub(crate) fn write_xml(&self, name: &str, out: &mut String) {
        open_style_element(out, name, StyleFamily::TableCell, |out| {
            if name != DEFAULT_CELL_STYLE {
                let parent = self
                    .parent
                    .as_ref()
                    .map_or(DEFAULT_CELL_STYLE, StyleName::as_str);
                attr(out, "style:parent-style-name", parent);
            }
            if let Some(data) = &self.data_style {
                attr(out, "style:data-style-name", data.as_str());
            }
        });

        if self.has_cell_properties() {
            out.push_str("<style:table-cell-properties");
            if let Some(color) = self.background {
                attr_display(out, "fo:background-color", color);
            }
            if self.wrap {
                attr_display(out, "fo:wrap-option", "wrap");
            }
            if let Some(align) = self.vertical_align {
                attr_display(out, "style:vertical-align", align.as_str());
            }
            let sides = [
                ("fo:border", self.border),
                ("fo:border-top", self.border_top),
                ("fo:border-bottom", self.border_bottom),
                ("fo:border-left", self.border_left),
                ("fo:border-right", self.border_right),
            ];
            for (attr_name, border) in sides {
                if let Some(border) = border {
                    attr_display(out, attr_name, border);
                }
            }
            out.push_str("/>");
        }

        if self.horizontal_align.is_some() || !self.margins.is_empty() {
            out.push_str("<style:paragraph-properties");
            if let Some(align) = self.horizontal_align {
                attr_display(out, "fo:text-align", align.as_str());
            }
            self.margins.write_attributes(out);
            out.push_str("/>");
        }

        self.text.write_properties(out);
        out.push_str("</style:style>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_cell_style_has_no_parent() {
        let mut out = String::new();
        TableCellStyle::new().write_xml(DEFAULT_CELL_STYLE, &mut out);
        assert_eq!(
            out,
            "<style:style style:name=\"Default\" style:family=\"table-cell\"></style:style>"
        );
    }

    #[test]
    fn test_full_cell_style() {
        let style = TableCellStyle::new()
            .with_background(Color::YELLOW)
            .with_wrap(true)
            .with_vertical_align(VerticalAlign::Middle)
            .with_border(Border::thin())
            .with_horizontal_align(HorizontalAlign::Center)
            .with_bold(true)
            .with_data_style(StyleName::new(StyleFamily::Data, "N1"));
        let mut out = String::new();
        style.write_xml("ce1", &mut out);
        assert_eq!(
            out,
            "<style:style style:name=\"ce1\" style:family=\"table-cell\" \
             style:parent-style-name=\"Default\" style:data-style-name=\"N1\">\
             <style:table-cell-properties fo:background-color=\"#ffff00\" fo:wrap-option=\"wrap\" \
             style:vertical-align=\"middle\" fo:border=\"0.06pt solid #000000\"/>\
             <style:paragraph-properties fo:text-align=\"center\"/>\
             <style:text-properties fo:font-weight=\"bold\" style:font-weight-asian=\"bold\" \
             style:font-weight-complex=\"bold\"/></style:style>"
        );
    }

    #[test]
    fn test_references() {
        let style = TableCellStyle::new()
            .with_parent(StyleName::new(StyleFamily::TableCell, "Heading"))
            .with_data_style(StyleName::new(StyleFamily::Data, "N1"));
        let refs = style.references();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].1, StyleFamily::TableCell);
        assert_eq!(refs[1].1, StyleFamily::Data);
    }
}
