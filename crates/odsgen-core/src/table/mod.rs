//! Tables: sparse rows, column definitions and the flush protocol
//!
//! A [`Table`] keeps only the rows that were not yet written. Flushed rows
//! are released from memory but still count in [`Table::row_count`]; asking
//! for one again is [`Error::RowFlushed`].

mod flush;
mod settings;
mod walker;

pub use flush::FlushState;
pub use settings::{write_item, write_items, TableSettings};
pub use walker::TableWalker;

use crate::address::CellPosition;
use crate::cell::Cell;
use crate::column::{Column, DEFAULT_MAX_COLUMNS};
use crate::error::{Error, Result};
use crate::index::IntoIndex;
use crate::row::{Row, DEFAULT_ROW_CAPACITY};
use crate::run_list::RunList;
use crate::shape::DrawFrame;
use crate::style::{StyleFamily, StyleName};

/// Sizing options for a new table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of columns declared in the preamble
    pub max_columns: usize,
    /// Rows reserved up front
    pub row_capacity: usize,
    /// Cells reserved per row and column definitions reserved up front
    pub column_capacity: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_columns: DEFAULT_MAX_COLUMNS,
            row_capacity: RunList::<Option<Row>>::DEFAULT_CAPACITY,
            column_capacity: DEFAULT_ROW_CAPACITY,
        }
    }
}

impl TableOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of declared columns
    pub fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }

    /// Set the initial row capacity
    pub fn with_row_capacity(mut self, capacity: usize) -> Self {
        self.row_capacity = capacity;
        self
    }

    /// Set the initial column capacity
    pub fn with_column_capacity(mut self, capacity: usize) -> Self {
        self.column_capacity = capacity;
        self
    }
}

/// A sheet of the document
#[derive(Debug)]
pub struct Table {
    name: String,
    style: Option<StyleName>,
    columns: RunList<Column>,
    /// Rows not yet flushed; index 0 is row `flushed`
    rows: RunList<Option<Row>>,
    flushed: usize,
    state: FlushState,
    shapes: Vec<DrawFrame>,
    attributes: Vec<(String, String)>,
    settings: TableSettings,
    options: TableOptions,
}

impl Table {
    /// Create an empty table with default options
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_options(name, TableOptions::default())
    }

    /// Create an empty table
    pub fn with_options<S: Into<String>>(name: S, options: TableOptions) -> Self {
        Self {
            name: name.into(),
            style: None,
            columns: RunList::with_capacity(Column::default(), options.column_capacity),
            rows: RunList::with_capacity(None, options.row_capacity),
            flushed: 0,
            state: FlushState::Fresh,
            shapes: Vec::new(),
            attributes: Vec::new(),
            settings: TableSettings::default(),
            options,
        }
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the table (before its preamble is written)
    ///
    /// A table does not know its siblings; inside a document, rename through
    /// the document so the name stays unique.
    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<()> {
        self.check_fresh("rename")?;
        self.name = name.into();
        Ok(())
    }

    /// The table style, if set
    pub fn style(&self) -> Option<&StyleName> {
        self.style.as_ref()
    }

    /// Set the table style (before its preamble is written)
    pub fn set_style(&mut self, style: &StyleName) -> Result<()> {
        style.check_family(StyleFamily::Table)?;
        self.check_fresh("set style")?;
        self.style = Some(style.clone());
        Ok(())
    }

    /// Options the table was created with
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Current flush state
    pub fn state(&self) -> FlushState {
        self.state
    }

    /// Number of rows, flushed ones included
    ///
    /// This is the index of the last created row plus one.
    pub fn row_count(&self) -> usize {
        self.flushed + self.rows.len()
    }

    /// Index of the last created row
    pub fn last_row_index(&self) -> Option<usize> {
        self.row_count().checked_sub(1)
    }

    /// Number of rows already written out
    pub fn flushed_row_count(&self) -> usize {
        self.flushed
    }

    /// Append a new row after the last one
    pub fn add_row(&mut self) -> Result<&mut Row> {
        let index = self.row_count();
        self.row(index)
    }

    /// Get the row at `index`, creating it and the rows before it if needed
    pub fn row<I: IntoIndex>(&mut self, index: I) -> Result<&mut Row> {
        let index = index.into_index()?;
        self.check_not_closed("access a row")?;
        if index < self.flushed {
            return Err(Error::RowFlushed(index));
        }
        let capacity = self.options.column_capacity;
        Ok(self
            .rows
            .get_or_insert_with(index - self.flushed, || Row::with_capacity(capacity)))
    }

    /// Get the row of an A1-style position (e.g., "A5" is row 4)
    pub fn row_by_address(&mut self, address: &str) -> Result<&mut Row> {
        let position = CellPosition::parse(address)?;
        self.row(position.row)
    }

    /// Read a row without creating it
    ///
    /// `None` for rows never created and for flushed rows.
    pub fn peek_row(&self, index: usize) -> Option<&Row> {
        let offset = index.checked_sub(self.flushed)?;
        self.rows.get(offset).as_ref()
    }

    /// Read a cell without creating anything
    pub fn peek_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.peek_row(row).map(|r| r.cell(col))
    }

    /// The column definitions
    pub fn columns(&self) -> &RunList<Column> {
        &self.columns
    }

    /// Set the style of column `col`
    pub fn set_column_style<I: IntoIndex>(&mut self, col: I, style: &StyleName) -> Result<()> {
        style.check_family(StyleFamily::TableColumn)?;
        let col = self.column_index(col)?;
        self.check_fresh("set a column style")?;
        self.columns.update(col, |c| c.set_style(style.clone()));
        Ok(())
    }

    /// Set the default cell style of column `col`
    pub fn set_column_default_cell_style<I: IntoIndex>(
        &mut self,
        col: I,
        style: &StyleName,
    ) -> Result<()> {
        style.check_family(StyleFamily::TableCell)?;
        let col = self.column_index(col)?;
        self.check_fresh("set a column default cell style")?;
        self.columns
            .update(col, |c| c.set_default_cell_style(style.clone()));
        Ok(())
    }

    /// Shapes drawn over the table
    pub fn shapes(&self) -> &[DrawFrame] {
        &self.shapes
    }

    /// Add a shape (before the preamble is written)
    pub fn add_shape(&mut self, shape: DrawFrame) -> Result<()> {
        self.check_fresh("add a shape")?;
        self.shapes.push(shape);
        Ok(())
    }

    /// Set a custom attribute on the `table:table` element
    pub fn set_attribute<N: Into<String>, V: Into<String>>(
        &mut self,
        name: N,
        value: V,
    ) -> Result<()> {
        self.check_fresh("set an attribute")?;
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
        Ok(())
    }

    /// View settings
    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    /// Mutable view settings
    pub fn settings_mut(&mut self) -> &mut TableSettings {
        &mut self.settings
    }

    /// Freeze the first `rows` rows and `cols` columns in the view
    pub fn freeze_cells(&mut self, rows: u32, cols: u32) {
        self.settings.freeze_cells(rows, cols);
    }

    /// Merge a `row_span` x `col_span` block anchored at (`row`, `col`)
    ///
    /// The anchor gets the spans; every other cell of the block is marked
    /// covered. Rows are created as needed.
    pub fn set_cell_merge<R: IntoIndex, C: IntoIndex>(
        &mut self,
        row: R,
        col: C,
        row_span: u32,
        col_span: u32,
    ) -> Result<()> {
        let row = row.into_index()?;
        let col = col.into_index()?;
        if row_span == 0 || col_span == 0 {
            return Err(Error::InvalidSpan(format!(
                "merge of {} x {} cells",
                row_span, col_span
            )));
        }
        self.check_not_closed("merge cells")?;
        if row < self.flushed {
            return Err(Error::RowFlushed(row));
        }
        let anchor_covered = self.peek_cell(row, col).is_some_and(Cell::is_covered);
        if anchor_covered && (row_span > 1 || col_span > 1) {
            return Err(Error::CoveredCellSpan(row_span.max(col_span)));
        }

        let anchor = self.row(row)?;
        anchor.update_cell(col, |c| {
            c.set_rows_spanned(row_span)?;
            c.set_columns_spanned(col_span)
        })?;
        for r in row..row + row_span as usize {
            let current = self.row(r)?;
            for c in col..col + col_span as usize {
                if r != row || c != col {
                    current.update_cell(c, Cell::set_covered);
                }
            }
        }
        Ok(())
    }

    /// A cursor over the rows and cells, starting at the first unflushed row
    pub fn walker(&mut self) -> TableWalker<'_> {
        TableWalker::new(self)
    }

    fn column_index<I: IntoIndex>(&self, col: I) -> Result<usize> {
        let col = col.into_index()?;
        if col >= self.options.max_columns {
            return Err(Error::ColumnOutOfBounds(col, self.options.max_columns - 1));
        }
        Ok(col)
    }

    fn check_fresh(&self, operation: &'static str) -> Result<()> {
        match self.state {
            FlushState::Fresh => Ok(()),
            _ => Err(self.order_error(operation)),
        }
    }

    fn check_not_closed(&self, operation: &'static str) -> Result<()> {
        match self.state {
            FlushState::FullyFlushed => Err(self.order_error(operation)),
            _ => Ok(()),
        }
    }

    fn order_error(&self, operation: &'static str) -> Error {
        Error::FlushOrder {
            table: self.name.clone(),
            operation,
            state: self.state.to_string(),
        }
    }
}
