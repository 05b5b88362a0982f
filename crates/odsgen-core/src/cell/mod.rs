//! Cells: value, style, formula, annotation and span
//!
//! This module contains:
//! - [`Cell`] - a single cell and its XML form
//! - [`CellValue`] / [`ObjectValue`] - typed and loosely typed values
//! - [`CellSetters`] - setters shared by the walkers
//! - [`Tooltip`] - cell annotations

mod setters;
mod tooltip;
mod value;

use chrono::{Duration, NaiveDateTime};

pub use setters::CellSetters;
pub use tooltip::Tooltip;
pub use value::{CellValue, ObjectValue};

use crate::error::{Error, Result};
use crate::style::{StyleFamily, StyleName};
use crate::xml::{attr, attr_display};

/// A table cell
///
/// The default cell (void, unstyled, spanning one cell) is the blank of a
/// row: a row never stores trailing default cells.
///
/// A covered cell is hidden under a merged anchor. It keeps its value but
/// never spans more than one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    value: CellValue,
    style: Option<StyleName>,
    formula: Option<String>,
    tooltip: Option<Tooltip>,
    columns_spanned: u32,
    rows_spanned: u32,
    covered: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            value: CellValue::Void,
            style: None,
            formula: None,
            tooltip: None,
            columns_spanned: 1,
            rows_spanned: 1,
            covered: false,
        }
    }
}

impl Cell {
    /// Create a void cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell holding `value`
    pub fn with_value<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// The cell value
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// The cell style, if any
    pub fn style(&self) -> Option<&StyleName> {
        self.style.as_ref()
    }

    /// The formula, if any
    pub fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    /// The tooltip, if any
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Number of columns this cell spans
    pub fn columns_spanned(&self) -> u32 {
        self.columns_spanned
    }

    /// Number of rows this cell spans
    pub fn rows_spanned(&self) -> u32 {
        self.rows_spanned
    }

    /// Check if the cell is hidden under a merge
    pub fn is_covered(&self) -> bool {
        self.covered
    }

    /// Check if the cell is part of a merge (anchor or covered)
    pub fn is_merged(&self) -> bool {
        self.covered || self.columns_spanned > 1 || self.rows_spanned > 1
    }

    /// Check if this is the default cell
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Set a prepared value
    pub fn set_value(&mut self, value: CellValue) {
        self.value = value;
    }

    /// Set a boolean value
    pub fn set_boolean(&mut self, value: bool) {
        self.value = CellValue::Boolean(value);
    }

    /// Set a currency amount
    pub fn set_currency<S: Into<String>>(&mut self, amount: f64, currency: S) {
        self.value = CellValue::currency(amount, currency);
    }

    /// Set a date value
    pub fn set_date(&mut self, value: NaiveDateTime) {
        self.value = CellValue::Date(value);
    }

    /// Set a float value
    pub fn set_float<F: Into<f64>>(&mut self, value: F) {
        self.value = CellValue::Float(value.into());
    }

    /// Set a percentage value (0.5 is 50%)
    pub fn set_percentage<F: Into<f64>>(&mut self, value: F) {
        self.value = CellValue::Percentage(value.into());
    }

    /// Set a string value
    pub fn set_string<S: Into<String>>(&mut self, value: S) {
        self.value = CellValue::String(value.into());
    }

    /// Set a time value
    pub fn set_time(&mut self, value: Duration) {
        self.value = CellValue::Time(value);
    }

    /// Set a time value in milliseconds
    pub fn set_time_millis(&mut self, millis: i64) {
        self.value = CellValue::time_millis(millis);
    }

    /// Clear the value
    pub fn set_void(&mut self) {
        self.value = CellValue::Void;
    }

    /// Set a loosely typed value, classified by its variant
    pub fn set_object<O: Into<ObjectValue>>(&mut self, value: O) {
        self.value = CellValue::from_object(value);
    }

    /// Set the formula (e.g., `of:=SUM([.A1:.A3])`)
    pub fn set_formula<S: Into<String>>(&mut self, formula: S) {
        self.formula = Some(formula.into());
    }

    /// Remove the formula
    pub fn clear_formula(&mut self) {
        self.formula = None;
    }

    /// Set the cell style
    pub fn set_style(&mut self, style: &StyleName) -> Result<()> {
        style.check_family(StyleFamily::TableCell)?;
        self.style = Some(style.clone());
        Ok(())
    }

    /// Remove the cell style
    pub fn clear_style(&mut self) {
        self.style = None;
    }

    /// Set the tooltip
    pub fn set_tooltip<T: Into<Tooltip>>(&mut self, tooltip: T) {
        self.tooltip = Some(tooltip.into());
    }

    /// Remove the tooltip
    pub fn clear_tooltip(&mut self) {
        self.tooltip = None;
    }

    /// Set the number of columns spanned
    pub fn set_columns_spanned(&mut self, n: u32) -> Result<()> {
        self.check_span(n)?;
        self.columns_spanned = n;
        Ok(())
    }

    /// Set the number of rows spanned
    pub fn set_rows_spanned(&mut self, n: u32) -> Result<()> {
        self.check_span(n)?;
        self.rows_spanned = n;
        Ok(())
    }

    /// Mark the cell covered, resetting its spans
    pub fn set_covered(&mut self) {
        self.covered = true;
        self.columns_spanned = 1;
        self.rows_spanned = 1;
    }

    fn check_span(&self, n: u32) -> Result<()> {
        if n == 0 {
            return Err(Error::InvalidSpan("a cell spans at least 1 cell".into()));
        }
        if self.covered && n > 1 {
            return Err(Error::CoveredCellSpan(n));
        }
        Ok(())
    }

    /// Append the cell element
    pub fn write_xml(&self, out: &mut String) {
        let element = if self.covered {
            "table:covered-table-cell"
        } else {
            "table:table-cell"
        };
        out.push('<');
        out.push_str(element);
        if let Some(style) = &self.style {
            attr(out, "table:style-name", style.as_str());
        }
        self.value.write_attributes(out);
        if let Some(formula) = &self.formula {
            attr(out, "table:formula", formula);
        }
        if !self.covered {
            if self.columns_spanned > 1 {
                attr_display(out, "table:number-columns-spanned", self.columns_spanned);
            }
            if self.rows_spanned > 1 {
                attr_display(out, "table:number-rows-spanned", self.rows_spanned);
            }
        }
        match &self.tooltip {
            Some(tooltip) => {
                out.push('>');
                tooltip.write_xml(out);
                out.push_str("</");
                out.push_str(element);
                out.push('>');
            }
            None => out.push_str("/>"),
        }
    }
}

/// Append `count` blank cells as one element
pub(crate) fn write_blank_cells(out: &mut String, count: usize) {
    out.push_str("<table:table-cell");
    if count > 1 {
        attr_display(out, "table:number-columns-repeated", count);
    }
    out.push_str("/>");
}
