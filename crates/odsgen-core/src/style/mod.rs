//! Styles and the style registry
//!
//! This module contains the style types that can be registered in a
//! [`StyleRegistry`]:
//! - [`TableCellStyle`] - cell formatting
//! - [`TableColumnStyle`], [`TableRowStyle`], [`TableStyle`] - table layout
//! - [`TextStyle`] - font properties
//! - [`PageLayoutStyle`], [`MasterPageStyle`] - printing
//! - [`DataStyle`] - number, currency, date and boolean formats
//!
//! Tables, rows and cells never hold styles directly. They hold a
//! [`StyleName`], the handle returned by the registry.

mod cell_style;
mod color;
mod data;
mod length;
mod page;
mod registry;
mod table;
mod text;

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

pub use cell_style::{Border, BorderLine, HorizontalAlign, TableCellStyle, VerticalAlign};
pub use color::Color;
pub use data::{
    CurrencyStyle, DataFormat, DataStyle, DateFormat, DateStyle, Locale, NumberStyle, TimeStyle,
};
pub use length::{Length, LengthUnit};
pub use page::{
    Margins, MasterPageStyle, PageLayoutStyle, PaperFormat, PrintOrientation, WritingMode,
};
pub use registry::{RegisterMode, StyleRegistry};
pub use table::{TableColumnStyle, TableRowStyle, TableStyle};
pub use text::{FontWeight, TextStyle, Underline};

/// Name of the default cell style
pub const DEFAULT_CELL_STYLE: &str = "Default";
/// Name of the default column style
pub const DEFAULT_COLUMN_STYLE: &str = "co1";
/// Name of the default row style
pub const DEFAULT_ROW_STYLE: &str = "ro1";
/// Name of the default table style
pub const DEFAULT_TABLE_STYLE: &str = "ta1";
/// Name of the default page layout
pub const DEFAULT_PAGE_LAYOUT: &str = "pm1";
/// Name of the default master page
pub const DEFAULT_MASTER_PAGE: &str = "DefaultMasterPage";

/// A style namespace
///
/// Names are unique within a family, not across families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleFamily {
    TableCell,
    TableColumn,
    TableRow,
    Table,
    Text,
    PageLayout,
    MasterPage,
    Data,
}

impl StyleFamily {
    /// All families, in emission order
    pub const ALL: [StyleFamily; 8] = [
        StyleFamily::Data,
        StyleFamily::Text,
        StyleFamily::Table,
        StyleFamily::TableColumn,
        StyleFamily::TableRow,
        StyleFamily::TableCell,
        StyleFamily::PageLayout,
        StyleFamily::MasterPage,
    ];

    /// Prefix of generated names in this family
    pub fn prefix(self) -> &'static str {
        match self {
            StyleFamily::TableCell => "ce",
            StyleFamily::TableColumn => "co",
            StyleFamily::TableRow => "ro",
            StyleFamily::Table => "ta",
            StyleFamily::Text => "T",
            StyleFamily::PageLayout => "pm",
            StyleFamily::MasterPage => "mp",
            StyleFamily::Data => "N",
        }
    }

    /// Value of the `style:family` attribute, for families written as `style:style`
    pub fn xml_family(self) -> Option<&'static str> {
        match self {
            StyleFamily::TableCell => Some("table-cell"),
            StyleFamily::TableColumn => Some("table-column"),
            StyleFamily::TableRow => Some("table-row"),
            StyleFamily::Table => Some("table"),
            StyleFamily::Text => Some("text"),
            StyleFamily::PageLayout | StyleFamily::MasterPage | StyleFamily::Data => None,
        }
    }
}

impl fmt::Display for StyleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StyleFamily::TableCell => "table-cell",
            StyleFamily::TableColumn => "table-column",
            StyleFamily::TableRow => "table-row",
            StyleFamily::Table => "table",
            StyleFamily::Text => "text",
            StyleFamily::PageLayout => "page-layout",
            StyleFamily::MasterPage => "master-page",
            StyleFamily::Data => "data-style",
        };
        f.write_str(s)
    }
}

/// Handle to a style: family plus name
///
/// Cloning is cheap; the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleName {
    family: StyleFamily,
    name: Arc<str>,
}

impl StyleName {
    /// Create a handle without registering anything
    ///
    /// Use this to refer to styles that exist outside the registry (for
    /// example the built-in defaults). Handles for registered styles come
    /// from [`StyleRegistry`].
    pub fn new(family: StyleFamily, name: impl Into<Arc<str>>) -> Self {
        Self {
            family,
            name: name.into(),
        }
    }

    /// The family of the named style
    pub fn family(&self) -> StyleFamily {
        self.family
    }

    /// The style name
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Return `Ok` if this handle belongs to `expected`
    pub fn check_family(&self, expected: StyleFamily) -> Result<()> {
        if self.family == expected {
            Ok(())
        } else {
            Err(Error::WrongStyleFamily {
                name: self.name.to_string(),
                expected,
                actual: self.family,
            })
        }
    }

    /// Handle of the default cell style
    pub fn default_cell() -> Self {
        Self::new(StyleFamily::TableCell, DEFAULT_CELL_STYLE)
    }

    /// Handle of the default column style
    pub fn default_column() -> Self {
        Self::new(StyleFamily::TableColumn, DEFAULT_COLUMN_STYLE)
    }

    /// Handle of the default row style
    pub fn default_row() -> Self {
        Self::new(StyleFamily::TableRow, DEFAULT_ROW_STYLE)
    }

    /// Handle of the default table style
    pub fn default_table() -> Self {
        Self::new(StyleFamily::Table, DEFAULT_TABLE_STYLE)
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for StyleName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// Any style that can be registered
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Style {
    Cell(TableCellStyle),
    Column(TableColumnStyle),
    Row(TableRowStyle),
    Table(TableStyle),
    Text(TextStyle),
    PageLayout(PageLayoutStyle),
    MasterPage(MasterPageStyle),
    Data(DataStyle),
}

impl Style {
    /// Family of this style
    pub fn family(&self) -> StyleFamily {
        match self {
            Style::Cell(_) => StyleFamily::TableCell,
            Style::Column(_) => StyleFamily::TableColumn,
            Style::Row(_) => StyleFamily::TableRow,
            Style::Table(_) => StyleFamily::Table,
            Style::Text(_) => StyleFamily::Text,
            Style::PageLayout(_) => StyleFamily::PageLayout,
            Style::MasterPage(_) => StyleFamily::MasterPage,
            Style::Data(_) => StyleFamily::Data,
        }
    }

    /// Styles this style refers to, with the family each must belong to
    pub fn references(&self) -> Vec<(&StyleName, StyleFamily)> {
        match self {
            Style::Cell(s) => s.references(),
            Style::Table(s) => vec![(s.master_page(), StyleFamily::MasterPage)],
            Style::MasterPage(s) => s.references(),
            _ => Vec::new(),
        }
    }

    /// Font family this style uses, if any
    pub fn font_name(&self) -> Option<&str> {
        match self {
            Style::Cell(s) => s.text.font_name.as_deref(),
            Style::Text(s) => s.font_name.as_deref(),
            _ => None,
        }
    }

    /// Append the XML definition of this style under `name`
    pub fn write_xml(&self, name: &str, out: &mut String) {
        match self {
            Style::Cell(s) => s.write_xml(name, out),
            Style::Column(s) => s.write_xml(name, out),
            Style::Row(s) => s.write_xml(name, out),
            Style::Table(s) => s.write_xml(name, out),
            Style::Text(s) => s.write_xml(name, out),
            Style::PageLayout(s) => s.write_xml(name, out),
            Style::MasterPage(s) => s.write_xml(name, out),
            Style::Data(s) => s.write_xml(name, out),
        }
    }
}

macro_rules! impl_from_style {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Style {
                fn from(style: $ty) -> Self {
                    Style::$variant(style)
                }
            }
        )*
    };
}

impl_from_style!(
    Cell(TableCellStyle),
    Column(TableColumnStyle),
    Row(TableRowStyle),
    Table(TableStyle),
    Text(TextStyle),
    PageLayout(PageLayoutStyle),
    MasterPage(MasterPageStyle),
    Data(DataStyle),
);

/// Open a `<style:style>` element for a named style
pub(crate) fn open_style_element(
    out: &mut String,
    name: &str,
    family: StyleFamily,
    extra: impl FnOnce(&mut String),
) {
    out.push_str("<style:style");
    crate::xml::attr(out, "style:name", name);
    if let Some(family) = family.xml_family() {
        crate::xml::attr_display(out, "style:family", family);
    }
    extra(out);
    out.push('>');
}
