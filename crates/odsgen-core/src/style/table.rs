//! Table, column and row styles

use super::{
    open_style_element, Length, StyleFamily, StyleName, WritingMode, DEFAULT_MASTER_PAGE,
};
use crate::xml::{attr, attr_display};

/// Style of a table column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableColumnStyle {
    /// Column width
    pub width: Length,
    /// Let the consumer compute the optimal width
    pub optimal_width: bool,
}

impl Default for TableColumnStyle {
    fn default() -> Self {
        Self {
            width: Length::cm(2.5),
            optimal_width: false,
        }
    }
}

impl TableColumnStyle {
    /// Create a column style with the default width
    pub fn new() -> Self {
        Self::default()
    }

    /// Set column width
    pub fn with_width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    /// Request optimal width
    pub fn with_optimal_width(mut self, optimal: bool) -> Self {
        self.optimal_width = optimal;
        self
    }

    pub(crate) fn write_xml(&self, name: &str, out: &mut String) {
        open_style_element(out, name, StyleFamily::TableColumn, |_| {});
        out.push_str("<style:table-column-properties");
        attr_display(out, "fo:break-before", "auto");
        attr_display(out, "style:column-width", self.width);
        if self.optimal_width {
            attr_display(out, "style:use-optimal-column-width", "true");
        }
        out.push_str("/></style:style>");
    }
}

/// Style of a table row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRowStyle {
    /// Row height
    pub height: Length,
    /// Let the consumer compute the optimal height
    pub optimal_height: bool,
}

impl Default for TableRowStyle {
    fn default() -> Self {
        Self {
            height: Length::cm(0.45),
            optimal_height: true,
        }
    }
}

impl TableRowStyle {
    /// Create a row style with the default height
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed row height
    pub fn with_height(mut self, height: Length) -> Self {
        self.height = height;
        self.optimal_height = false;
        self
    }

    /// Request optimal height
    pub fn with_optimal_height(mut self, optimal: bool) -> Self {
        self.optimal_height = optimal;
        self
    }

    pub(crate) fn write_xml(&self, name: &str, out: &mut String) {
        open_style_element(out, name, StyleFamily::TableRow, |_| {});
        out.push_str("<style:table-row-properties");
        attr_display(out, "style:row-height", self.height);
        attr_display(out, "fo:break-before", "auto");
        attr_display(out, "style:use-optimal-row-height", self.optimal_height);
        out.push_str("/></style:style>");
    }
}

/// Style of a whole table, linking it to a master page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableStyle {
    master_page: StyleName,
    /// Whether the table is displayed
    pub display: bool,
    /// Writing mode
    pub writing_mode: WritingMode,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            master_page: StyleName::new(StyleFamily::MasterPage, DEFAULT_MASTER_PAGE),
            display: true,
            writing_mode: WritingMode::LrTb,
        }
    }
}

impl TableStyle {
    /// Create a table style on the default master page
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another master page
    pub fn with_master_page(mut self, master_page: StyleName) -> Self {
        self.master_page = master_page;
        self
    }

    /// Hide or show the table
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// Set writing mode
    pub fn with_writing_mode(mut self, mode: WritingMode) -> Self {
        self.writing_mode = mode;
        self
    }

    /// The master page this table prints on
    pub fn master_page(&self) -> &StyleName {
        &self.master_page
    }

    pub(crate) fn write_xml(&self, name: &str, out: &mut String) {
        open_style_element(out, name, StyleFamily::Table, |out| {
            attr(out, "style:master-page-name", self.master_page.as_str());
        });
        out.push_str("<style:table-properties");
        attr_display(out, "table:display", self.display);
        attr_display(out, "style:writing-mode", self.writing_mode.as_str());
        out.push_str("/></style:style>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_column_style() {
        let mut out = String::new();
        TableColumnStyle::new().write_xml("co1", &mut out);
        assert_eq!(
            out,
            "<style:style style:name=\"co1\" style:family=\"table-column\">\
             <style:table-column-properties fo:break-before=\"auto\" style:column-width=\"2.5cm\"/>\
             </style:style>"
        );
    }

    #[test]
    fn test_default_row_style() {
        let mut out = String::new();
        TableRowStyle::new().write_xml("ro1", &mut out);
        assert_eq!(
            out,
            "<style:style style:name=\"ro1\" style:family=\"table-row\">\
             <style:table-row-properties style:row-height=\"0.45cm\" fo:break-before=\"auto\" \
             style:use-optimal-row-height=\"true\"/></style:style>"
        );
    }

    #[test]
    fn test_fixed_row_height() {
        let style = TableRowStyle::new().with_height(Length::cm(1.0));
        assert!(!style.optimal_height);
        assert_eq!(style.height, Length::cm(1.0));
    }

    #[test]
    fn test_default_table_style() {
        let mut out = String::new();
        TableStyle::new().write_xml("ta1", &mut out);
        assert_eq!(
            out,
            "<style:style style:name=\"ta1\" style:family=\"table\" \
             style:master-page-name=\"DefaultMasterPage\">\
             <style:table-properties table:display=\"true\" style:writing-mode=\"lr-tb\"/>\
             </style:style>"
        );
    }
}
