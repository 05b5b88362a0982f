//! Row and column cursor over a table

use super::Table;
use crate::cell::{Cell, CellSetters};
use crate::error::Result;
use crate::index::IntoIndex;

/// Cursor over the cells of a table
///
/// Starts on the first row that was not flushed, column 0. Moving to
/// another row resets the column.
#[derive(Debug)]
pub struct TableWalker<'a> {
    table: &'a mut Table,
    row: usize,
    col: usize,
}

impl<'a> TableWalker<'a> {
    pub(super) fn new(table: &'a mut Table) -> Self {
        let row = table.flushed;
        Self { table, row, col: 0 }
    }

    /// Current row index
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current column index
    pub fn column(&self) -> usize {
        self.col
    }

    /// The current cell, if its row exists
    pub fn cell(&self) -> Option<&Cell> {
        self.table.peek_cell(self.row, self.col)
    }

    /// Move to the first cell of the next row
    pub fn next_row(&mut self) {
        self.row += 1;
        self.col = 0;
    }

    /// Move to the first cell of `row`
    pub fn to_row<I: IntoIndex>(&mut self, row: I) -> Result<()> {
        self.row = row.into_index()?;
        self.col = 0;
        Ok(())
    }

    /// Move to the next cell of the current row
    pub fn next_cell(&mut self) {
        self.col += 1;
    }

    /// Move to `col` in the current row
    pub fn to_cell<I: IntoIndex>(&mut self, col: I) -> Result<()> {
        self.col = col.into_index()?;
        Ok(())
    }

    /// Merge a block anchored at the current cell
    pub fn set_cell_merge(&mut self, row_span: u32, col_span: u32) -> Result<()> {
        self.table
            .set_cell_merge(self.row, self.col, row_span, col_span)
    }

    /// Merge the current cell with the `n - 1` cells below it
    ///
    /// The anchor keeps its column span and the whole block is covered.
    pub fn set_rows_spanned(&mut self, n: u32) -> Result<()> {
        let col_span = self.cell().map_or(1, Cell::columns_spanned);
        self.table.set_cell_merge(self.row, self.col, n, col_span)
    }

    /// Merge the current cell with the `n - 1` cells after it
    pub fn set_columns_spanned(&mut self, n: u32) -> Result<()> {
        let col = self.col;
        self.table.row(self.row)?.set_columns_spanned(col, n)
    }
}

impl CellSetters for TableWalker<'_> {
    fn update_current<R>(&mut self, f: impl FnOnce(&mut Cell) -> R) -> Result<R> {
        let col = self.col;
        Ok(self.table.row(self.row)?.update_cell(col, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use crate::error::Error;

    #[test]
    fn test_walk_and_set() {
        let mut table = Table::new("t");
        let mut walker = table.walker();
        walker.set_string("a").unwrap();
        walker.next_cell();
        walker.set_float(1.5).unwrap();
        walker.next_row();
        walker.set_boolean(true).unwrap();
        assert_eq!(walker.row(), 1);
        assert_eq!(walker.column(), 0);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.peek_cell(0, 1).map(Cell::value), Some(&CellValue::Float(1.5)));
        assert_eq!(
            table.peek_cell(1, 0).map(Cell::value),
            Some(&CellValue::Boolean(true))
        );
    }

    #[test]
    fn test_walker_merge() {
        let mut table = Table::new("t");
        let mut walker = table.walker();
        walker.to_row(2).unwrap();
        walker.to_cell(3).unwrap();
        walker.set_cell_merge(2, 3).unwrap();
        assert!(walker.to_cell(-1).is_err());

        let anchor = table.peek_cell(2, 3).unwrap();
        assert_eq!(anchor.rows_spanned(), 2);
        assert_eq!(anchor.columns_spanned(), 3);
        assert!(table.peek_cell(3, 5).unwrap().is_covered());
        assert!(!table.peek_cell(3, 6).unwrap().is_covered());
    }

    #[test]
    fn test_rows_spanned_covers_cells_below() {
        let mut table = Table::new("t");
        let mut walker = table.walker();
        walker.set_string("a").unwrap();
        walker.set_rows_spanned(2).unwrap();
        walker.next_row();
        walker.set_string("b").unwrap();

        let anchor = table.peek_cell(0, 0).unwrap();
        assert_eq!(anchor.rows_spanned(), 2);
        assert!(!anchor.is_covered());
        let below = table.peek_cell(1, 0).unwrap();
        assert!(below.is_covered());
        assert_eq!(below.value(), &CellValue::String("b".into()));
    }

    #[test]
    fn test_rows_spanned_keeps_column_span() {
        let mut table = Table::new("t");
        let mut walker = table.walker();
        walker.to_cell(1).unwrap();
        walker.set_columns_spanned(2).unwrap();
        walker.set_rows_spanned(3).unwrap();

        assert_eq!(table.peek_cell(0, 1).unwrap().columns_spanned(), 2);
        assert!(table.peek_cell(0, 2).unwrap().is_covered());
        assert!(table.peek_cell(2, 2).unwrap().is_covered());
        assert!(table.peek_row(3).is_none());

        let mut walker = table.walker();
        walker.to_row(1).unwrap();
        walker.to_cell(1).unwrap();
        assert!(matches!(
            walker.set_rows_spanned(2),
            Err(Error::CoveredCellSpan(2))
        ));
    }

    #[test]
    fn test_walker_starts_after_flushed_rows() {
        let mut table = Table::new("t");
        for _ in 0..3 {
            table.add_row().unwrap();
        }
        let mut out = String::new();
        table.write_preamble(&mut out);
        table.append_available_rows(&mut out).unwrap();

        let mut walker = table.walker();
        assert_eq!(walker.row(), 2);
        walker.to_row(0).unwrap();
        assert!(matches!(walker.set_string("late"), Err(Error::RowFlushed(0))));
    }
}
