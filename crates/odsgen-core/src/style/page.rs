//! Page layout and master page styles

use super::{Color, Length, StyleFamily, StyleName, DEFAULT_PAGE_LAYOUT};
use crate::text::Paragraph;
use crate::xml::{attr, attr_display};

/// Page orientation when printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrintOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl PrintOrientation {
    fn as_str(self) -> &'static str {
        match self {
            PrintOrientation::Portrait => "portrait",
            PrintOrientation::Landscape => "landscape",
        }
    }
}

/// Writing mode (`style:writing-mode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WritingMode {
    Lr,
    #[default]
    LrTb,
    Page,
    Rl,
    RlTb,
    Tb,
    TbLr,
    TbRl,
}

impl WritingMode {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            WritingMode::Lr => "lr",
            WritingMode::LrTb => "lr-tb",
            WritingMode::Page => "page",
            WritingMode::Rl => "rl",
            WritingMode::RlTb => "rl-tb",
            WritingMode::Tb => "tb",
            WritingMode::TbLr => "tb-lr",
            WritingMode::TbRl => "tb-rl",
        }
    }
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaperFormat {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
}

impl PaperFormat {
    /// Portrait width and height
    pub fn dimensions(self) -> (Length, Length) {
        match self {
            PaperFormat::A3 => (Length::cm(29.7), Length::cm(42.0)),
            PaperFormat::A4 => (Length::cm(21.0), Length::cm(29.7)),
            PaperFormat::A5 => (Length::cm(14.8), Length::cm(21.0)),
            PaperFormat::Letter => (Length::cm(21.59), Length::cm(27.94)),
            PaperFormat::Legal => (Length::cm(21.59), Length::cm(35.56)),
        }
    }
}

/// Margins: a value for all sides, overridden per side
///
/// A side equal to `all` is not repeated in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margins {
    pub all: Option<Length>,
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
    pub left: Option<Length>,
}

impl Margins {
    /// No margins set
    pub fn new() -> Self {
        Self::default()
    }

    /// The same margin on every side
    pub fn all(length: Length) -> Self {
        Self {
            all: Some(length),
            ..Self::default()
        }
    }

    /// Set the top margin
    pub fn with_top(mut self, length: Length) -> Self {
        self.top = Some(length);
        self
    }

    /// Set the right margin
    pub fn with_right(mut self, length: Length) -> Self {
        self.right = Some(length);
        self
    }

    /// Set the bottom margin
    pub fn with_bottom(mut self, length: Length) -> Self {
        self.bottom = Some(length);
        self
    }

    /// Set the left margin
    pub fn with_left(mut self, length: Length) -> Self {
        self.left = Some(length);
        self
    }

    /// Check if no margin is set
    pub fn is_empty(&self) -> bool {
        self.all.is_none()
            && self.top.is_none()
            && self.right.is_none()
            && self.bottom.is_none()
            && self.left.is_none()
    }

    /// Append the `fo:margin*` attributes
    pub fn write_attributes(&self, out: &mut String) {
        if let Some(all) = self.all {
            attr_display(out, "fo:margin", all);
        }
        let sides = [
            ("fo:margin-top", self.top),
            ("fo:margin-right", self.right),
            ("fo:margin-bottom", self.bottom),
            ("fo:margin-left", self.left),
        ];
        for (name, side) in sides {
            match side {
                Some(side) if Some(side) != self.all => attr_display(out, name, side),
                _ => {}
            }
        }
    }
}

/// Page geometry used for printing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageLayoutStyle {
    pub width: Length,
    pub height: Length,
    pub orientation: PrintOrientation,
    pub writing_mode: WritingMode,
    pub margins: Margins,
    pub background: Option<Color>,
}

impl Default for PageLayoutStyle {
    fn default() -> Self {
        let (width, height) = PaperFormat::default().dimensions();
        Self {
            width,
            height,
            orientation: PrintOrientation::Portrait,
            writing_mode: WritingMode::LrTb,
            margins: Margins::all(Length::cm(1.5)),
            background: None,
        }
    }
}

impl PageLayoutStyle {
    /// A4 portrait with 1.5cm margins
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a standard paper size, keeping the orientation
    pub fn with_paper_format(mut self, format: PaperFormat) -> Self {
        let (width, height) = format.dimensions();
        match self.orientation {
            PrintOrientation::Portrait => {
                self.width = width;
                self.height = height;
            }
            PrintOrientation::Landscape => {
                self.width = height;
                self.height = width;
            }
        }
        self
    }

    /// Set the orientation, swapping width and height when it changes
    pub fn with_orientation(mut self, orientation: PrintOrientation) -> Self {
        if orientation != self.orientation {
            std::mem::swap(&mut self.width, &mut self.height);
            self.orientation = orientation;
        }
        self
    }

    /// Set page margins
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set writing mode
    pub fn with_writing_mode(mut self, mode: WritingMode) -> Self {
        self.writing_mode = mode;
        self
    }

    /// Set page background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub(crate) fn write_xml(&self, name: &str, out: &mut String) {
        out.push_str("<style:page-layout");
        attr(out, "style:name", name);
        out.push_str("><style:page-layout-properties");
        attr_display(out, "fo:page-width", self.width);
        attr_display(out, "fo:page-height", self.height);
        attr_display(out, "style:num-format", "1");
        attr_display(out, "style:writing-mode", self.writing_mode.as_str());
        attr_display(out, "style:print-orientation", self.orientation.as_str());
        if let Some(color) = self.background {
            attr_display(out, "fo:background-color", color);
        }
        self.margins.write_attributes(out);
        out.push_str("/></style:page-layout>");
    }
}

/// A master page: a page layout plus header and footer
///
/// Header and footer are paragraphs, so their spans can refer to text
/// styles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MasterPageStyle {
    page_layout: StyleName,
    /// Header paragraph
    pub header: Option<Paragraph>,
    /// Footer paragraph
    pub footer: Option<Paragraph>,
}

impl Default for MasterPageStyle {
    fn default() -> Self {
        Self {
            page_layout: StyleName::new(StyleFamily::PageLayout, DEFAULT_PAGE_LAYOUT),
            header: None,
            footer: None,
        }
    }
}

impl MasterPageStyle {
    /// A master page on the default page layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another page layout
    pub fn with_page_layout(mut self, layout: StyleName) -> Self {
        self.page_layout = layout;
        self
    }

    /// Set the header (plain text or a [`Paragraph`])
    pub fn with_header<P: Into<Paragraph>>(mut self, header: P) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the footer (plain text or a [`Paragraph`])
    pub fn with_footer<P: Into<Paragraph>>(mut self, footer: P) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// The page layout of this master page
    pub fn page_layout(&self) -> &StyleName {
        &self.page_layout
    }

    pub(crate) fn references(&self) -> Vec<(&StyleName, StyleFamily)> {
        let mut refs = vec![(&self.page_layout, StyleFamily::PageLayout)];
        for paragraph in self.header.iter().chain(&self.footer) {
            refs.extend(paragraph.styles().map(|s| (s, StyleFamily::Text)));
        }
        refs
    }

    pub(crate) fn write_xml(&self, name: &str, out: &mut String) {
        out.push_str("<style:master-page");
        attr(out, "style:name", name);
        attr(out, "style:page-layout-name", self.page_layout.as_str());
        out.push('>');
        if let Some(header) = &self.header {
            out.push_str("<style:header>");
            header.write_xml(out);
            out.push_str("</style:header>");
        }
        if let Some(footer) = &self.footer {
            out.push_str("<style:footer>");
            footer.write_xml(out);
            out.push_str("</style:footer>");
        }
        out.push_str("</style:master-page>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_margins_skip_sides_equal_to_all() {
        let margins = Margins::all(Length::cm(1.0))
            .with_top(Length::cm(1.0))
            .with_left(Length::cm(2.0));
        let mut out = String::new();
        margins.write_attributes(&mut out);
        assert_eq!(out, " fo:margin=\"1cm\" fo:margin-left=\"2cm\"");
    }

    #[test]
    fn test_sides_without_all() {
        let mut out = String::new();
        Margins::new()
            .with_bottom(Length::mm(5.0))
            .write_attributes(&mut out);
        assert_eq!(out, " fo:margin-bottom=\"5mm\"");
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let layout = PageLayoutStyle::new().with_orientation(PrintOrientation::Landscape);
        assert_eq!(layout.width, Length::cm(29.7));
        assert_eq!(layout.height, Length::cm(21.0));

        let layout = layout.with_paper_format(PaperFormat::A5);
        assert_eq!(layout.width, Length::cm(21.0));
        assert_eq!(layout.height, Length::cm(14.8));
    }

    #[test]
    fn test_default_page_layout_xml() {
        let mut out = String::new();
        PageLayoutStyle::new().write_xml("pm1", &mut out);
        assert_eq!(
            out,
            "<style:page-layout style:name=\"pm1\"><style:page-layout-properties \
             fo:page-width=\"21cm\" fo:page-height=\"29.7cm\" style:num-format=\"1\" \
             style:writing-mode=\"lr-tb\" style:print-orientation=\"portrait\" \
             fo:margin=\"1.5cm\"/></style:page-layout>"
        );
    }

    #[test]
    fn test_master_page_xml() {
        let mut out = String::new();
        MasterPageStyle::new()
            .with_header("Report & summary")
            .write_xml("DefaultMasterPage", &mut out);
        assert_eq!(
            out,
            "<style:master-page style:name=\"DefaultMasterPage\" style:page-layout-name=\"pm1\">\
             <style:header><text:p>Report &amp; summary</text:p></style:header>\
             </style:master-page>"
        );
    }

    #[test]
    fn test_master_page_styled_footer() {
        let small = StyleName::new(StyleFamily::Text, "T1");
        let footer = Paragraph::new()
            .span("Page ")
            .styled_span("1", &small)
            .unwrap();
        let mut out = String::new();
        MasterPageStyle::new()
            .with_footer(footer)
            .write_xml("mp", &mut out);
        assert_eq!(
            out,
            "<style:master-page style:name=\"mp\" style:page-layout-name=\"pm1\">\
             <style:footer><text:p>Page <text:span text:style-name=\"T1\">1</text:span>\
             </text:p></style:footer></style:master-page>"
        );
    }
}
