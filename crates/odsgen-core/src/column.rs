//! Column definitions and their run-length encoded form

use crate::run_list::RunList;
use crate::style::{StyleName, DEFAULT_CELL_STYLE, DEFAULT_COLUMN_STYLE};
use crate::xml::{attr, attr_display};

/// Default number of columns declared by a table
pub const DEFAULT_MAX_COLUMNS: usize = 1024;

/// Styles of one column
///
/// The default column (no style, no default cell style) is the blank of a
/// table's column list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Column {
    style: Option<StyleName>,
    default_cell_style: Option<StyleName>,
}

impl Column {
    /// The column style, if set
    pub fn style(&self) -> Option<&StyleName> {
        self.style.as_ref()
    }

    /// The default cell style, if set
    pub fn default_cell_style(&self) -> Option<&StyleName> {
        self.default_cell_style.as_ref()
    }

    pub(crate) fn set_style(&mut self, style: StyleName) {
        self.style = Some(style);
    }

    pub(crate) fn set_default_cell_style(&mut self, style: StyleName) {
        self.default_cell_style = Some(style);
    }

    fn style_name(&self) -> &str {
        self.style.as_ref().map_or(DEFAULT_COLUMN_STYLE, StyleName::as_str)
    }

    fn default_cell_style_name(&self) -> &str {
        self.default_cell_style
            .as_ref()
            .map_or(DEFAULT_CELL_STYLE, StyleName::as_str)
    }

    fn write_xml(&self, out: &mut String, repeat: usize) {
        out.push_str("<table:table-column");
        attr(out, "table:style-name", self.style_name());
        if repeat > 1 {
            attr_display(out, "table:number-columns-repeated", repeat);
        }
        attr(out, "table:default-cell-style-name", self.default_cell_style_name());
        out.push_str("/>");
    }
}

/// Append the `table:table-column` elements of a table
///
/// Adjacent columns with the same styles become one element with a repeat
/// count. Columns after the last defined one, up to `max_columns`, are one
/// final default run, omitted when no column is left.
pub(crate) fn write_columns(columns: &RunList<Column>, max_columns: usize, out: &mut String) {
    let mut runs: Vec<(&Column, usize)> = Vec::new();
    for column in columns {
        match runs.last_mut() {
            Some((last, count)) if *last == column => *count += 1,
            _ => runs.push((column, 1)),
        }
    }

    let remaining = max_columns.saturating_sub(columns.len());
    for (column, count) in runs {
        column.write_xml(out, count);
    }
    if remaining > 0 {
        columns.blank().write_xml(out, remaining);
    }
}
