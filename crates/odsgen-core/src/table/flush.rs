//! Two-phase table serialization: preamble once, then rows incrementally

use std::fmt;

use super::Table;
use crate::column::write_columns;
use crate::error::Result;
use crate::row::{write_blank_rows, Row};
use crate::shape::write_shapes;
use crate::style::DEFAULT_TABLE_STYLE;
use crate::xml::attr;

/// Where a table is in its serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushState {
    /// Nothing written yet
    #[default]
    Fresh,
    /// The `table:table` start, columns and shapes were written
    PreambleWritten,
    /// Rows below `watermark` were written and released
    PartiallyFlushed { watermark: usize },
    /// `</table:table>` was written
    FullyFlushed,
}

impl fmt::Display for FlushState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlushState::Fresh => f.write_str("fresh"),
            FlushState::PreambleWritten => f.write_str("preamble written"),
            FlushState::PartiallyFlushed { watermark } => {
                write!(f, "partially flushed up to row {}", watermark)
            }
            FlushState::FullyFlushed => f.write_str("fully flushed"),
        }
    }
}

impl Table {
    /// Append the `table:table` start tag, forms, columns and shapes
    ///
    /// Does nothing if the preamble was already written.
    pub fn write_preamble(&mut self, out: &mut String) {
        if self.state != FlushState::Fresh {
            return;
        }
        out.push_str("<table:table");
        attr(out, "table:name", &self.name);
        let style = self
            .style
            .as_ref()
            .map_or(DEFAULT_TABLE_STYLE, |s| s.as_str());
        attr(out, "table:style-name", style);
        out.push_str(" table:print=\"false\"");
        for (name, value) in &self.attributes {
            attr(out, name, value);
        }
        out.push('>');
        out.push_str(
            "<office:forms form:automatic-focus=\"false\" form:apply-design-mode=\"false\"/>",
        );
        write_columns(&self.columns, self.options.max_columns, out);
        write_shapes(&self.shapes, out);

        self.state = FlushState::PreambleWritten;
        log::debug!("table {:?}: preamble written", self.name);
    }

    /// Append every row but the last one and release them
    ///
    /// The last row stays in memory since the caller may still be filling
    /// it. Returns the number of rows written.
    pub fn append_available_rows(&mut self, out: &mut String) -> Result<usize> {
        self.check_open("append rows")?;
        let count = self.rows.len().saturating_sub(1);
        self.emit_rows(out, count);
        Ok(count)
    }

    /// Append all remaining rows and close the table element
    ///
    /// Returns the number of rows written.
    pub fn append_all_remaining(&mut self, out: &mut String) -> Result<usize> {
        self.check_open("append remaining rows")?;
        let count = self.rows.len();
        self.emit_rows(out, count);
        out.push_str("</table:table>");
        self.state = FlushState::FullyFlushed;
        log::debug!(
            "table {:?}: closed after {} rows",
            self.name,
            self.flushed
        );
        Ok(count)
    }

    /// Append the whole table in one go
    pub fn write_xml(&mut self, out: &mut String) -> Result<()> {
        self.write_preamble(out);
        self.append_all_remaining(out)?;
        Ok(())
    }

    fn check_open(&self, operation: &'static str) -> Result<()> {
        match self.state {
            FlushState::PreambleWritten | FlushState::PartiallyFlushed { .. } => Ok(()),
            FlushState::Fresh | FlushState::FullyFlushed => Err(self.order_error(operation)),
        }
    }

    fn emit_rows(&mut self, out: &mut String, count: usize) {
        if count == 0 {
            return;
        }
        write_rows(self.rows.slice(..count), out);
        self.rows.drain_front(count);
        self.flushed += count;
        self.state = FlushState::PartiallyFlushed {
            watermark: self.flushed,
        };
        log::debug!(
            "table {:?}: appended {} rows, watermark {}",
            self.name,
            count,
            self.flushed
        );
    }
}

enum RowRun<'a> {
    Blank(usize),
    Row(&'a Row, usize),
}

/// Append rows, collapsing blank runs and identical neighbours
fn write_rows(rows: &[Option<Row>], out: &mut String) {
    let mut runs: Vec<RowRun<'_>> = Vec::new();
    for row in rows {
        let row = row.as_ref().filter(|r| !r.is_blank());
        match (runs.last_mut(), row) {
            (Some(RowRun::Blank(count)), None) => *count += 1,
            (Some(RowRun::Row(last, count)), Some(row))
                if *last == row && !row.has_merges() =>
            {
                *count += 1
            }
            (_, None) => runs.push(RowRun::Blank(1)),
            (_, Some(row)) => runs.push(RowRun::Row(row, 1)),
        }
    }

    for run in runs {
        match run {
            RowRun::Blank(count) => write_blank_rows(out, count),
            RowRun::Row(row, count) => row.write_xml(out, count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::shape::{DrawFrame, SvgRectangle};
    use crate::style::{StyleFamily, StyleName};
    use crate::table::TableOptions;
    use pretty_assertions::assert_eq;

    const FORMS: &str =
        "<office:forms form:automatic-focus=\"false\" form:apply-design-mode=\"false\"/>";

    #[test]
    fn test_single_row_table() {
        let mut table = Table::new("t1");
        table.add_row().unwrap().set_string(0, "text");
        let mut out = String::new();
        table.write_xml(&mut out).unwrap();

        let expected = format!(
            "<table:table table:name=\"t1\" table:style-name=\"ta1\" table:print=\"false\">{}\
             <table:table-column table:style-name=\"co1\" table:number-columns-repeated=\"1024\" table:default-cell-style-name=\"Default\"/>\
             <table:table-row table:style-name=\"ro1\">\
             <table:table-cell office:value-type=\"string\" office:string-value=\"text\"/>\
             </table:table-row></table:table>",
            FORMS
        );
        assert_eq!(out, expected);
        assert_eq!(table.state(), FlushState::FullyFlushed);
    }

    #[test]
    fn test_preamble_written_once() {
        let mut table = Table::new("t");
        let mut once = String::new();
        table.write_preamble(&mut once);
        let mut twice = once.clone();
        table.write_preamble(&mut twice);
        assert_eq!(once, twice);
        assert_eq!(table.state(), FlushState::PreambleWritten);
    }

    #[test]
    fn test_preamble_columns_and_shapes() {
        let mut table = Table::with_options("t", TableOptions::new().with_max_columns(4));
        let wide = StyleName::new(StyleFamily::TableColumn, "co2");
        table.set_column_style(1, &wide).unwrap();
        table
            .add_shape(DrawFrame::image(
                "logo",
                "Pictures/logo.png",
                SvgRectangle::cm(0.0, 0.0, 1.0, 1.0),
            ))
            .unwrap();
        table.set_attribute("table:protected", "true").unwrap();
        let mut out = String::new();
        table.write_preamble(&mut out);

        assert!(out.starts_with(
            "<table:table table:name=\"t\" table:style-name=\"ta1\" table:print=\"false\" table:protected=\"true\">"
        ));
        assert!(out.contains(
            "<table:table-column table:style-name=\"co1\" table:default-cell-style-name=\"Default\"/>\
             <table:table-column table:style-name=\"co2\" table:default-cell-style-name=\"Default\"/>\
             <table:table-column table:style-name=\"co1\" table:number-columns-repeated=\"2\" table:default-cell-style-name=\"Default\"/>"
        ));
        assert!(out.ends_with("</table:shapes>"));
    }

    #[test]
    fn test_append_keeps_last_row() {
        let mut table = Table::new("t");
        for i in 0..3 {
            table.add_row().unwrap().set_float(0, i);
        }
        let mut out = String::new();
        table.write_preamble(&mut out);
        assert_eq!(table.append_available_rows(&mut out).unwrap(), 2);
        assert_eq!(table.state(), FlushState::PartiallyFlushed { watermark: 2 });
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.flushed_row_count(), 2);

        assert!(matches!(table.row(1), Err(Error::RowFlushed(1))));
        assert!(table.peek_row(0).is_none());
        table.row(2).unwrap().set_float(1, 9);

        assert_eq!(table.append_all_remaining(&mut out).unwrap(), 1);
        assert_eq!(out.matches("<table:table-row").count(), 3);
        assert!(out.contains("office:value=\"9\""));
        assert!(out.ends_with("</table:table-row></table:table>"));
    }

    #[test]
    fn test_append_in_wrong_state() {
        let mut table = Table::new("t");
        let mut out = String::new();
        assert!(matches!(
            table.append_available_rows(&mut out),
            Err(Error::FlushOrder { .. })
        ));
        assert!(out.is_empty());

        table.write_xml(&mut out).unwrap();
        assert!(table.append_all_remaining(&mut out).is_err());
        assert!(table.add_row().is_err());
        assert!(table.set_name("other").is_err());
    }

    #[test]
    fn test_edit_after_preamble_rejected() {
        let mut table = Table::new("t");
        let mut out = String::new();
        table.write_preamble(&mut out);
        let err = table
            .set_column_style(0, &StyleName::default_column())
            .unwrap_err();
        assert!(matches!(err, Error::FlushOrder { .. }));
        assert!(table.add_row().is_ok());
    }

    #[test]
    fn test_blank_rows_collapse() {
        let mut table = Table::new("t");
        table.row(0).unwrap().set_string(0, "first");
        table.row(4).unwrap().set_string(0, "last");
        let mut out = String::new();
        table.write_xml(&mut out).unwrap();
        assert!(out.contains(
            "<table:table-row table:style-name=\"ro1\" table:number-rows-repeated=\"3\"><table:table-cell/></table:table-row>"
        ));
        assert_eq!(out.matches("<table:table-row").count(), 3);
    }

    #[test]
    fn test_identical_rows_collapse_unless_merged() {
        let mut table = Table::new("t");
        for _ in 0..3 {
            table.add_row().unwrap().set_string(0, "same");
        }
        let mut out = String::new();
        table.write_xml(&mut out).unwrap();
        assert!(out.contains("table:number-rows-repeated=\"3\""));

        let mut merged = Table::new("m");
        for _ in 0..2 {
            let row = merged.add_row().unwrap();
            row.set_string(0, "same");
            row.set_columns_spanned(0, 2).unwrap();
        }
        let mut out = String::new();
        merged.write_xml(&mut out).unwrap();
        assert!(!out.contains("number-rows-repeated"));
        assert_eq!(out.matches("table:number-columns-spanned=\"2\"").count(), 2);
    }
}
