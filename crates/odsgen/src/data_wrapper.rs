//! Bulk loading of tabular records into a table

use odsgen_core::{CellSetters, ObjectValue, Result, StyleName, Table};

/// Placeholder written for missing values
pub const NULL_TEXT: &str = "<NULL>";

/// A source of data that can fill a table
pub trait DataWrapper {
    /// Append the data to `table` as new rows
    ///
    /// Returns `true` if at least one data row was available.
    fn add_to_table(&mut self, table: &mut Table) -> Result<bool>;
}

/// Records with named columns, such as the result of a database query
///
/// Writes a header row with the column names, then one row per record.
/// Missing values are written as `<NULL>`. When there are more than
/// `max_rows` records, the extra ones are skipped and counted in a final
/// `... (N rows remaining)` row. When there is no record, a row of empty
/// strings follows the header.
pub struct RecordsDataWrapper<I> {
    columns: Vec<String>,
    records: I,
    head_style: Option<StyleName>,
    max_rows: usize,
}

impl<I, R> RecordsDataWrapper<I>
where
    I: Iterator<Item = R>,
    R: IntoIterator<Item = Option<ObjectValue>>,
{
    /// Wrap `records` under the given column names, without row limit
    pub fn new<T>(columns: Vec<String>, records: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            columns,
            records: records.into_iter(),
            head_style: None,
            max_rows: usize::MAX,
        }
    }

    /// Style the header cells
    pub fn with_head_style(mut self, style: StyleName) -> Self {
        self.head_style = Some(style);
        self
    }

    /// Write at most `max_rows` records
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    fn write_header(&self, table: &mut Table) -> Result<()> {
        let row = table.add_row()?;
        let mut walker = row.walker();
        for name in &self.columns {
            walker.set_string(name)?;
            if let Some(style) = &self.head_style {
                walker.set_style(style)?;
            }
            walker.next_cell();
        }
        Ok(())
    }

    fn write_filler(&self, table: &mut Table, text: &str) -> Result<()> {
        let row = table.add_row()?;
        for col in 0..self.columns.len() {
            row.set_string(col, text);
        }
        Ok(())
    }
}

impl<I, R> DataWrapper for RecordsDataWrapper<I>
where
    I: Iterator<Item = R>,
    R: IntoIterator<Item = Option<ObjectValue>>,
{
    fn add_to_table(&mut self, table: &mut Table) -> Result<bool> {
        self.write_header(table)?;

        let mut count = 0usize;
        for record in self.records.by_ref() {
            count += 1;
            if count > self.max_rows {
                continue;
            }
            let row = table.add_row()?;
            let mut walker = row.walker();
            for value in record.into_iter().take(self.columns.len()) {
                match value {
                    Some(value) => walker.set_object(value)?,
                    None => walker.set_string(NULL_TEXT)?,
                }
                walker.next_cell();
            }
        }

        if count == 0 {
            self.write_filler(table, "")?;
        } else if count > self.max_rows {
            let remaining = format!("... ({} rows remaining)", count - self.max_rows);
            self.write_filler(table, &remaining)?;
        }
        log::debug!(
            "table {:?}: {} records loaded ({} skipped)",
            table.name(),
            count.min(self.max_rows),
            count.saturating_sub(self.max_rows)
        );
        Ok(count > 0)
    }
}
