//! Shared helpers: reopen an archive and parse its tables

#![allow(dead_code)]

use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A cell element as read back from `content.xml`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCell {
    pub covered: bool,
    pub value_type: Option<String>,
    pub value: Option<String>,
    pub style: Option<String>,
    pub repeated: usize,
    pub columns_spanned: usize,
    pub rows_spanned: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedRow {
    pub style: Option<String>,
    pub repeated: usize,
    pub cells: Vec<ParsedCell>,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub name: String,
    /// (style, repeat) per `table:table-column` element
    pub columns: Vec<(String, usize)>,
    pub rows: Vec<ParsedRow>,
}

impl ParsedTable {
    /// Number of rows once repeats are expanded
    pub fn row_count(&self) -> usize {
        self.rows.iter().map(|r| r.repeated).sum()
    }
}

pub fn entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(str::to_owned).collect()
}

pub fn read_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Option<String> {
    e.try_get_attribute(name)
        .unwrap()
        .map(|a| a.unescape_value().unwrap().into_owned())
}

fn count(e: &BytesStart<'_>, name: &str) -> usize {
    attribute(e, name).map_or(1, |v| v.parse().unwrap())
}

fn parse_cell(e: &BytesStart<'_>, covered: bool) -> ParsedCell {
    let value_type = attribute(e, "office:value-type");
    let value = [
        "office:string-value",
        "office:value",
        "office:boolean-value",
        "office:date-value",
        "office:time-value",
    ]
    .iter()
    .find_map(|name| attribute(e, name));
    ParsedCell {
        covered,
        value_type,
        value,
        style: attribute(e, "table:style-name"),
        repeated: count(e, "table:number-columns-repeated"),
        columns_spanned: count(e, "table:number-columns-spanned"),
        rows_spanned: count(e, "table:number-rows-spanned"),
    }
}

/// Parse every `table:table` of a `content.xml`
pub fn parse_tables(content: &str) -> Vec<ParsedTable> {
    let mut reader = Reader::from_str(content);
    let mut tables = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) | Event::Empty(e) => {
                let name = e.name();
                match name.as_ref() {
                    b"table:table" => tables.push(ParsedTable {
                        name: attribute(&e, "table:name").unwrap_or_default(),
                        ..Default::default()
                    }),
                    b"table:table-column" => {
                        let table: &mut ParsedTable = tables.last_mut().unwrap();
                        table.columns.push((
                            attribute(&e, "table:style-name").unwrap_or_default(),
                            count(&e, "table:number-columns-repeated"),
                        ));
                    }
                    b"table:table-row" => {
                        let table: &mut ParsedTable = tables.last_mut().unwrap();
                        table.rows.push(ParsedRow {
                            style: attribute(&e, "table:style-name"),
                            repeated: count(&e, "table:number-rows-repeated"),
                            cells: Vec::new(),
                        });
                    }
                    b"table:table-cell" | b"table:covered-table-cell" => {
                        let covered = name.as_ref() == b"table:covered-table-cell";
                        let cell = parse_cell(&e, covered);
                        let table: &mut ParsedTable = tables.last_mut().unwrap();
                        table.rows.last_mut().unwrap().cells.push(cell);
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    tables
}
