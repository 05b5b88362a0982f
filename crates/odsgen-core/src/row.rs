//! Rows and the row walker

use crate::cell::{write_blank_cells, Cell, CellSetters, CellValue, ObjectValue};
use crate::error::{Error, Result};
use crate::index::IntoIndex;
use crate::run_list::RunList;
use crate::style::{StyleFamily, StyleName, DEFAULT_ROW_STYLE};
use crate::xml::{attr, attr_display};

/// Default number of cells reserved per row
pub const DEFAULT_ROW_CAPACITY: usize = 32;

/// A table row: cells addressed by column
///
/// Storage is sparse: `len()` is the highest non-blank column plus one, and
/// reading past it yields the default cell.
#[derive(Debug, Clone)]
pub struct Row {
    cells: RunList<Cell>,
    style: Option<StyleName>,
    attributes: Vec<(String, String)>,
    cursor: usize,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ROW_CAPACITY)
    }

    /// Create an empty row with room for `capacity` cells
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: RunList::with_capacity(Cell::default(), capacity),
            style: None,
            attributes: Vec::new(),
            cursor: 0,
        }
    }

    /// Number of cells up to the last non-default one
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if every cell is the default cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if the row would serialize like a row that was never created
    pub fn is_blank(&self) -> bool {
        self.cells.is_empty() && self.style.is_none() && self.attributes.is_empty()
    }

    /// The cells
    pub fn cells(&self) -> &RunList<Cell> {
        &self.cells
    }

    /// The cell at `col` (the default cell past the end)
    pub fn cell(&self, col: usize) -> &Cell {
        self.cells.get(col)
    }

    /// The cell at a caller-supplied position
    pub fn cell_checked<I: IntoIndex>(&self, col: I) -> Result<&Cell> {
        self.cells.get_checked(col)
    }

    /// Replace the cell at `col`, returning the previous one
    pub fn set_cell(&mut self, col: usize, cell: Cell) -> Cell {
        self.cells.set(col, cell)
    }

    /// Mutate the cell at `col` in place
    pub fn update_cell<R>(&mut self, col: usize, f: impl FnOnce(&mut Cell) -> R) -> R {
        self.cells.update(col, f)
    }

    /// Set the value of the cell at `col`
    pub fn set_value(&mut self, col: usize, value: CellValue) {
        self.update_cell(col, |c| c.set_value(value));
    }

    /// Set a string in the cell at `col`
    pub fn set_string<S: Into<String>>(&mut self, col: usize, value: S) {
        self.update_cell(col, |c| c.set_string(value));
    }

    /// Set a float in the cell at `col`
    pub fn set_float<F: Into<f64>>(&mut self, col: usize, value: F) {
        self.update_cell(col, |c| c.set_float(value));
    }

    /// Set a boolean in the cell at `col`
    pub fn set_boolean(&mut self, col: usize, value: bool) {
        self.update_cell(col, |c| c.set_boolean(value));
    }

    /// Set a loosely typed value in the cell at `col`
    pub fn set_object<O: Into<ObjectValue>>(&mut self, col: usize, value: O) {
        self.update_cell(col, |c| c.set_object(value));
    }

    /// Set the style of the cell at `col`
    pub fn set_cell_style(&mut self, col: usize, style: &StyleName) -> Result<()> {
        style.check_family(StyleFamily::TableCell)?;
        self.update_cell(col, |c| c.set_style(style))
    }

    /// Make the cell at `col` span `n` columns, covering the cells after it
    pub fn set_columns_spanned(&mut self, col: usize, n: u32) -> Result<()> {
        if n == 0 {
            return Err(Error::InvalidSpan("a cell spans at least 1 column".into()));
        }
        if self.cell(col).is_covered() && n > 1 {
            return Err(Error::CoveredCellSpan(n));
        }
        self.update_cell(col, |c| c.set_columns_spanned(n))?;
        for covered in col + 1..col + n as usize {
            self.update_cell(covered, Cell::set_covered);
        }
        Ok(())
    }

    /// The row style, if any
    pub fn style(&self) -> Option<&StyleName> {
        self.style.as_ref()
    }

    /// Set the row style
    pub fn set_style(&mut self, style: &StyleName) -> Result<()> {
        style.check_family(StyleFamily::TableRow)?;
        self.style = Some(style.clone());
        Ok(())
    }

    /// Set a custom attribute on the `table:table-row` element
    pub fn set_attribute<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Custom attributes in insertion order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Check if any cell is merged (spanning or covered)
    pub fn has_merges(&self) -> bool {
        self.cells.iter().any(Cell::is_merged)
    }

    /// A walker starting at the column the last walker stopped on
    pub fn walker(&mut self) -> RowWalker<'_> {
        RowWalker { row: self }
    }

    /// Append the row element, declared `repeat` times
    pub fn write_xml(&self, out: &mut String, repeat: usize) {
        out.push_str("<table:table-row");
        let style = self.style.as_ref().map_or(DEFAULT_ROW_STYLE, StyleName::as_str);
        attr(out, "table:style-name", style);
        if repeat > 1 {
            attr_display(out, "table:number-rows-repeated", repeat);
        }
        for (name, value) in &self.attributes {
            attr(out, name, value);
        }
        out.push('>');

        if self.cells.is_empty() {
            write_blank_cells(out, 1);
        }
        let mut blanks = 0;
        for cell in &self.cells {
            if cell.is_blank() {
                blanks += 1;
                continue;
            }
            if blanks > 0 {
                write_blank_cells(out, blanks);
                blanks = 0;
            }
            cell.write_xml(out);
        }
        out.push_str("</table:table-row>");
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

// The walker cursor is navigation state, not content.
impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.style == other.style
            && self.attributes == other.attributes
    }
}

/// Append `count` rows that were never created
pub(crate) fn write_blank_rows(out: &mut String, count: usize) {
    out.push_str("<table:table-row");
    attr_display(out, "table:style-name", DEFAULT_ROW_STYLE);
    if count > 1 {
        attr_display(out, "table:number-rows-repeated", count);
    }
    out.push('>');
    write_blank_cells(out, 1);
    out.push_str("</table:table-row>");
}

/// Cursor over the cells of one row
///
/// The position is remembered by the row, so a new walker on the same row
/// resumes where the previous one stopped.
#[derive(Debug)]
pub struct RowWalker<'a> {
    row: &'a mut Row,
}

impl RowWalker<'_> {
    /// Current column
    pub fn column(&self) -> usize {
        self.row.cursor
    }

    /// The current cell
    pub fn cell(&self) -> &Cell {
        self.row.cell(self.row.cursor)
    }

    /// Move to the next column
    pub fn next_cell(&mut self) {
        self.row.cursor += 1;
    }

    /// Move to `col`
    pub fn to<I: IntoIndex>(&mut self, col: I) -> Result<()> {
        self.row.cursor = col.into_index()?;
        Ok(())
    }

    /// Move to the next cell that is not covered by a merge
    pub fn next_non_covered(&mut self) {
        self.row.cursor += 1;
        while self.row.cell(self.row.cursor).is_covered() {
            self.row.cursor += 1;
        }
    }

    /// Column of the last non-default cell, `None` for an empty row
    pub fn last_cell_column(&self) -> Option<usize> {
        self.row.len().checked_sub(1)
    }

    /// Merge the current cell with the `n - 1` cells after it
    pub fn set_columns_spanned(&mut self, n: u32) -> Result<()> {
        self.row.set_columns_spanned(self.row.cursor, n)
    }
}

impl CellSetters for RowWalker<'_> {
    fn update_current<R>(&mut self, f: impl FnOnce(&mut Cell) -> R) -> Result<R> {
        Ok(self.row.update_cell(self.row.cursor, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn xml(row: &Row) -> String {
        let mut out = String::new();
        row.write_xml(&mut out, 1);
        out
    }

    #[test]
    fn test_empty_row_xml() {
        assert_eq!(
            xml(&Row::new()),
            "<table:table-row table:style-name=\"ro1\"><table:table-cell/></table:table-row>"
        );
    }

    #[test]
    fn test_blank_cells_collapse() {
        let mut row = Row::new();
        row.set_string(0, "a");
        row.set_float(4, 2.0);
        assert_eq!(row.len(), 5);
        assert_eq!(
            xml(&row),
            "<table:table-row table:style-name=\"ro1\">\
             <table:table-cell office:value-type=\"string\" office:string-value=\"a\"/>\
             <table:table-cell table:number-columns-repeated=\"3\"/>\
             <table:table-cell office:value-type=\"float\" office:value=\"2\"/>\
             </table:table-row>"
        );
    }

    #[test]
    fn test_style_attributes_and_repeat() {
        let mut row = Row::new();
        row.set_style(&StyleName::new(StyleFamily::TableRow, "ro2"))
            .unwrap();
        row.set_attribute("table:visibility", "collapse");
        row.set_attribute("table:visibility", "filter");
        let mut out = String::new();
        row.write_xml(&mut out, 3);
        assert_eq!(
            out,
            "<table:table-row table:style-name=\"ro2\" table:number-rows-repeated=\"3\" \
             table:visibility=\"filter\"><table:table-cell/></table:table-row>"
        );
        assert!(!row.is_blank());
    }

    #[test]
    fn test_wrong_row_style_family() {
        let mut row = Row::new();
        assert!(row.set_style(&StyleName::default_cell()).is_err());
        assert!(row.style().is_none());
    }

    #[test]
    fn test_walker_sets_cells() {
        let mut row = Row::new();
        let mut walker = row.walker();
        assert_eq!(walker.column(), 0);
        walker.set_string("a").unwrap();
        walker.next_cell();
        walker.set_float(1.5).unwrap();
        walker.to(5).unwrap();
        walker.set_boolean(true).unwrap();
        assert_eq!(walker.last_cell_column(), Some(5));
        assert!(matches!(walker.to(-2), Err(Error::NegativeIndex(-2))));

        assert_eq!(row.cell(0).value(), &CellValue::string("a"));
        assert_eq!(row.cell(1).value(), &CellValue::Float(1.5));
        assert_eq!(row.cell(5).value(), &CellValue::Boolean(true));
        assert!(row.cell(3).is_blank());
    }

    #[test]
    fn test_walker_resumes_at_remembered_column() {
        let mut row = Row::new();
        {
            let mut walker = row.walker();
            walker.to(3).unwrap();
        }
        assert_eq!(row.walker().column(), 3);

        let mut copy = row.clone();
        copy.walker().to(0).unwrap();
        assert_eq!(row, copy);
    }

    #[test]
    fn test_columns_spanned_covers_following_cells() {
        let mut row = Row::new();
        let mut walker = row.walker();
        walker.to(1).unwrap();
        walker.set_string("merged").unwrap();
        walker.set_columns_spanned(3).unwrap();
        walker.to(0).unwrap();
        walker.next_non_covered();
        assert_eq!(walker.column(), 1);
        walker.next_non_covered();
        assert_eq!(walker.column(), 4);

        assert_eq!(row.cell(1).columns_spanned(), 3);
        assert!(row.cell(2).is_covered());
        assert!(row.cell(3).is_covered());
        assert!(!row.cell(4).is_covered());
        assert!(row.has_merges());
        assert!(matches!(
            row.set_columns_spanned(2, 2),
            Err(Error::CoveredCellSpan(2))
        ));
    }

    #[test]
    fn test_set_cell_returns_previous() {
        let mut row = Row::new();
        row.set_cell(2, Cell::with_value("x"));
        let previous = row.set_cell(2, Cell::new());
        assert_eq!(previous.value(), &CellValue::string("x"));
        assert!(row.is_empty());
    }
}
