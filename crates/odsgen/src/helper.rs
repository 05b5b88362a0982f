//! Position-based shortcuts over tables and documents

use chrono::NaiveDateTime;
use odsgen_core::{CellPosition, CellValue, Error, Result, StyleFamily, StyleName, Table};
use odsgen_ods::OdsDocument;

/// Type of a cell value given as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Boolean,
    Currency,
    Date,
    Float,
    Percentage,
    String,
    Time,
    Void,
}

/// Shortcuts to set cells of a table by A1 position
#[derive(Debug, Clone, Copy, Default)]
pub struct TableHelper;

impl TableHelper {
    /// Set the value (and optionally the style) of the cell at `pos`
    pub fn set_cell_value(
        table: &mut Table,
        pos: &str,
        value: CellValue,
        style: Option<&StyleName>,
    ) -> Result<()> {
        let position = CellPosition::parse(pos)?;
        Self::set_cell_value_at(table, position.row, position.col, value, style)
    }

    /// Set the value (and optionally the style) of the cell at (`row`, `col`)
    pub fn set_cell_value_at(
        table: &mut Table,
        row: usize,
        col: usize,
        value: CellValue,
        style: Option<&StyleName>,
    ) -> Result<()> {
        if let Some(style) = style {
            style.check_family(StyleFamily::TableCell)?;
        }
        let row = table.row(row)?;
        if let Some(style) = style {
            row.set_cell_style(col, style)?;
        }
        row.set_value(col, value);
        Ok(())
    }

    /// Set a date (and optionally the style) at `pos`
    pub fn set_cell_date(
        table: &mut Table,
        pos: &str,
        date: NaiveDateTime,
        style: Option<&StyleName>,
    ) -> Result<()> {
        Self::set_cell_value(table, pos, CellValue::Date(date), style)
    }

    /// Set a value given as text with its type
    ///
    /// Parsing text into typed values is not available; this always fails
    /// with [`Error::NotImplemented`].
    pub fn set_cell_typed(
        _table: &mut Table,
        _pos: &str,
        _cell_type: CellType,
        _value: &str,
        _style: Option<&StyleName>,
    ) -> Result<()> {
        Err(Error::NotImplemented("setting a cell from typed text"))
    }

    /// Merge `rows` x `cols` cells anchored at `pos`
    pub fn set_cell_merge(table: &mut Table, pos: &str, rows: u32, cols: u32) -> Result<()> {
        let position = CellPosition::parse(pos)?;
        table.set_cell_merge(position.row, position.col, rows, cols)
    }
}

/// Shortcuts applied to every table of a document
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentHelper;

impl DocumentHelper {
    /// Set the same cell in every table
    pub fn set_cell_value_in_all_tables(
        document: &mut OdsDocument,
        pos: &str,
        value: CellValue,
        style: Option<&StyleName>,
    ) -> Result<()> {
        let position = CellPosition::parse(pos)?;
        for table in document.tables_mut() {
            TableHelper::set_cell_value_at(table, position.row, position.col, value.clone(), style)?;
        }
        Ok(())
    }

    /// Merge the same block in every table
    pub fn set_cell_merge_in_all_tables(
        document: &mut OdsDocument,
        pos: &str,
        rows: u32,
        cols: u32,
    ) -> Result<()> {
        let position = CellPosition::parse(pos)?;
        for table in document.tables_mut() {
            table.set_cell_merge(position.row, position.col, rows, cols)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_set_cell_value() {
        let mut table = Table::new("t");
        let style = StyleName::default_cell();
        TableHelper::set_cell_value(&mut table, "B3", CellValue::from(7.5), Some(&style)).unwrap();
        let cell = table.peek_cell(2, 1).unwrap();
        assert_eq!(cell.value(), &CellValue::Float(7.5));
        assert_eq!(cell.style(), Some(&style));
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_wrong_style_family_leaves_cell() {
        let mut table = Table::new("t");
        let err = TableHelper::set_cell_value(
            &mut table,
            "A1",
            CellValue::from("x"),
            Some(&StyleName::default_row()),
        )
        .unwrap_err();
        assert!(matches!(err, Error::WrongStyleFamily { expected: StyleFamily::TableCell, .. }));
        assert!(table.peek_row(0).is_none());
    }

    #[test]
    fn test_set_cell_date() {
        let mut table = Table::new("t");
        let date = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        TableHelper::set_cell_date(&mut table, "A1", date, None).unwrap();
        assert_eq!(table.peek_cell(0, 0).unwrap().value(), &CellValue::Date(date));
    }

    #[test]
    fn test_set_cell_typed_is_not_implemented() {
        let mut table = Table::new("t");
        let err =
            TableHelper::set_cell_typed(&mut table, "A1", CellType::Float, "1.5", None).unwrap_err();
        assert!(err.is_not_implemented());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_set_cell_merge() {
        let mut table = Table::new("t");
        TableHelper::set_cell_merge(&mut table, "B2", 2, 3).unwrap();
        let anchor = table.peek_cell(1, 1).unwrap();
        assert_eq!((anchor.rows_spanned(), anchor.columns_spanned()), (2, 3));
        assert!(table.peek_cell(2, 3).unwrap().is_covered());
        assert!(TableHelper::set_cell_merge(&mut table, "2B", 1, 1).is_err());
    }

    #[test]
    fn test_all_tables() {
        let mut document = OdsDocument::new();
        document.add_table("a").unwrap();
        document.add_table("b").unwrap();
        DocumentHelper::set_cell_value_in_all_tables(&mut document, "C1", CellValue::from(true), None)
            .unwrap();
        DocumentHelper::set_cell_merge_in_all_tables(&mut document, "A2", 1, 2).unwrap();
        for table in document.tables() {
            assert_eq!(table.peek_cell(0, 2).unwrap().value(), &CellValue::Boolean(true));
            assert!(table.peek_cell(1, 1).unwrap().is_covered());
        }
    }
}
