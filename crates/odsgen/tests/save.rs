//! End-to-end tests for one-shot saves (build -> save -> reopen -> verify)

mod common;

use chrono::NaiveDate;
use common::{entry_names, parse_tables, read_entry};
use odsgen::prelude::*;
use odsgen::{DrawFrame, MasterPageStyle, SvgRectangle, Tooltip};
use pretty_assertions::assert_eq;

fn save(document: OdsDocument) -> Vec<u8> {
    document.to_bytes().unwrap()
}

#[test]
fn test_archive_layout() {
    let mut document = OdsDocument::new();
    document.add_table("t1").unwrap();
    let bytes = save(document);

    let names = entry_names(&bytes);
    assert_eq!(names[0], "mimetype");
    for name in ["content.xml", "styles.xml", "settings.xml", "meta.xml", "META-INF/manifest.xml"] {
        assert!(names.iter().any(|n| n == name), "missing {}", name);
    }
    assert_eq!(
        read_entry(&bytes, "mimetype"),
        "application/vnd.oasis.opendocument.spreadsheet"
    );
}

/// A single string cell: one default column run and one row
#[test]
fn test_single_string_cell() {
    let mut document = OdsDocument::new();
    document.add_table("t1").unwrap().add_row().unwrap().set_string(0, "hello");
    let content = read_entry(&save(document), "content.xml");

    let tables = parse_tables(&content);
    assert_eq!(tables.len(), 1);
    let table = &tables[0];
    assert_eq!(table.name, "t1");
    assert_eq!(table.columns, vec![("co1".to_string(), 1024)]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].cells.len(), 1);
    assert_eq!(table.rows[0].cells[0].value_type.as_deref(), Some("string"));
    assert_eq!(table.rows[0].cells[0].value.as_deref(), Some("hello"));
}

#[test]
fn test_value_types() {
    let mut document = OdsDocument::new();
    let table = document.add_table("values").unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 5, 17)
        .unwrap()
        .and_hms_milli_opt(13, 45, 30, 250)
        .unwrap();
    let row = table.add_row().unwrap();
    row.set_boolean(0, true);
    row.set_float(1, 3.25);
    row.set_string(2, "Special: <>&\"'");
    row.set_value(3, CellValue::Date(date));
    row.set_value(4, CellValue::time_millis(3_723_004));
    row.set_value(5, CellValue::Percentage(0.5));
    row.set_value(6, CellValue::currency(9.99, "EUR"));
    let content = read_entry(&save(document), "content.xml");

    let cells = &parse_tables(&content)[0].rows[0].cells;
    let found: Vec<(Option<&str>, Option<&str>)> = cells
        .iter()
        .map(|c| (c.value_type.as_deref(), c.value.as_deref()))
        .collect();
    assert_eq!(
        found,
        vec![
            (Some("boolean"), Some("true")),
            (Some("float"), Some("3.25")),
            (Some("string"), Some("Special: <>&\"'")),
            (Some("date"), Some("2024-05-17T13:45:30.250")),
            (Some("time"), Some("PT1H2M3.004S")),
            (Some("percentage"), Some("0.5")),
            (Some("currency"), Some("9.99")),
        ]
    );
}

#[test]
fn test_blank_runs() {
    let mut document = OdsDocument::new();
    let table = document.add_table("sparse").unwrap();
    table.row(0).unwrap().set_string(5, "f");
    table.row(10).unwrap().set_float(0, 1.0);
    let content = read_entry(&save(document), "content.xml");

    let table = &parse_tables(&content)[0];
    assert_eq!(table.row_count(), 11);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0].cells[0].repeated, 5);
    assert_eq!(table.rows[1].repeated, 9);
}

#[test]
fn test_merged_block() {
    let mut document = OdsDocument::new();
    let table = document.add_table("merge").unwrap();
    for _ in 0..4 {
        let row = table.add_row().unwrap();
        for col in 0..4 {
            row.set_string(col, "x");
        }
    }
    table.set_cell_merge(1, 1, 2, 2).unwrap();
    let content = read_entry(&save(document), "content.xml");

    let table = &parse_tables(&content)[0];
    assert_eq!(table.rows.len(), 4);
    let anchor = &table.rows[1].cells[1];
    assert!(!anchor.covered);
    assert_eq!((anchor.rows_spanned, anchor.columns_spanned), (2, 2));
    assert!(table.rows[1].cells[2].covered);
    assert!(table.rows[2].cells[1].covered);
    assert!(table.rows[2].cells[2].covered);
    assert!(!table.rows[0].cells[1].covered);
    assert!(!table.rows[3].cells[2].covered);
}

#[test]
fn test_styles_are_placed() {
    let mut document = OdsDocument::new();
    let bold = document
        .styles_mut()
        .add(TableCellStyle::new().with_bold(true))
        .unwrap();
    let wide = document
        .styles_mut()
        .add(TableColumnStyle::new().with_width(Length::cm(5.0)))
        .unwrap();
    let table = document.add_table("styled").unwrap();
    table.set_column_style(0, &wide).unwrap();
    let row = table.add_row().unwrap();
    row.set_string(0, "bold");
    row.set_cell_style(0, &bold).unwrap();
    let bytes = save(document);

    let content = read_entry(&bytes, "content.xml");
    assert!(content.contains(&format!("<style:style style:name=\"{}\" style:family=\"table-cell\"", bold)));
    assert!(content.contains("style:column-width=\"5cm\""));
    let table = &parse_tables(&content)[0];
    assert_eq!(table.columns, vec![(wide.to_string(), 1), ("co1".to_string(), 1023)]);
    assert_eq!(table.rows[0].cells[0].style.as_deref(), Some(bold.as_str()));

    let styles = read_entry(&bytes, "styles.xml");
    assert!(styles.contains("style:name=\"Default\""));
    assert!(styles.contains("<style:page-layout style:name=\"pm1\""));
    assert!(styles.contains("<style:master-page style:name=\"DefaultMasterPage\""));
}

#[test]
fn test_tooltip_and_shape() {
    let mut document = OdsDocument::new();
    document
        .add_extra_file("Pictures/logo.png", "image/png", vec![0x89, b'P', b'N', b'G'])
        .unwrap();
    let table = document.add_table("annotated").unwrap();
    table
        .add_shape(DrawFrame::image(
            "logo",
            "Pictures/logo.png",
            SvgRectangle::cm(0.0, 0.0, 2.0, 1.0),
        ))
        .unwrap();
    let row = table.add_row().unwrap();
    row.set_string(0, "see note");
    row.update_cell(0, |c| c.set_tooltip(Tooltip::new("a note").with_visible(true)));
    let bytes = save(document);

    let content = read_entry(&bytes, "content.xml");
    assert!(content.contains("<table:shapes><draw:frame"));
    assert!(content.contains("xlink:href=\"Pictures/logo.png\""));
    assert!(content.contains("<office:annotation office:display=\"true\"><text:p>a note</text:p></office:annotation>"));

    let manifest = read_entry(&bytes, "META-INF/manifest.xml");
    assert!(manifest.contains("manifest:full-path=\"Pictures/logo.png\""));
}

#[test]
fn test_text_styles_in_paragraphs() {
    let mut document = OdsDocument::new();
    let bold = document
        .styles_mut()
        .add(TextStyle::new().with_bold(true))
        .unwrap();
    let footer = Paragraph::new()
        .span("Quarterly ")
        .styled_span("report", &bold)
        .unwrap();
    document
        .styles_mut()
        .add(MasterPageStyle::new().with_footer(footer))
        .unwrap();

    let note = Paragraph::new()
        .styled_span("Checked", &bold)
        .unwrap()
        .span(" by audit");
    let row = document.add_table("notes").unwrap().add_row().unwrap();
    row.set_float(0, 3.5);
    row.update_cell(0, |c| c.set_tooltip(Tooltip::new(note)));
    let bytes = save(document);

    let span = format!("<text:span text:style-name=\"{}\">", bold);
    let content = read_entry(&bytes, "content.xml");
    assert!(content.contains(&format!(
        "<office:annotation><text:p>{}Checked</text:span> by audit</text:p></office:annotation>",
        span
    )));

    let styles = read_entry(&bytes, "styles.xml");
    assert!(styles.contains(&format!("<style:style style:name=\"{}\" style:family=\"text\"", bold)));
    assert!(styles.contains(&format!(
        "<style:footer><text:p>Quarterly {}report</text:span></text:p></style:footer>",
        span
    )));
}

#[test]
fn test_settings_and_meta() {
    let mut document = OdsDocument::new();
    document.add_table("first").unwrap();
    document.add_table("second").unwrap().freeze_cells(1, 2);
    document.set_active_table(1).unwrap();
    document.set_creation_date(
        NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap(),
    );
    let bytes = save(document);

    let settings = read_entry(&bytes, "settings.xml");
    assert!(settings.contains("<config:config-item-map-entry config:name=\"second\">"));
    assert!(settings.contains(
        "<config:config-item config:name=\"HorizontalSplitMode\" config:type=\"short\">2</config:config-item>"
    ));
    assert!(settings.contains(
        "<config:config-item config:name=\"ActiveTable\" config:type=\"string\">second</config:config-item>"
    ));

    let meta = read_entry(&bytes, "meta.xml");
    assert!(meta.contains("<meta:creation-date>2023-12-31T23:59:00</meta:creation-date>"));
    assert!(meta.contains("meta:table-count=\"2\""));
}

#[test]
fn test_save_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ods");
    let mut document = OdsDocument::new();
    document.add_table("t").unwrap().add_row().unwrap().set_float(0, 1.0);
    document.save_as(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let tables = parse_tables(&read_entry(&bytes, "content.xml"));
    assert_eq!(tables[0].rows[0].cells[0].value.as_deref(), Some("1"));
}
