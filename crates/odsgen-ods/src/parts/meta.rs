//! `meta.xml`: generator and dates

use chrono::NaiveDateTime;
use odsgen_core::xml::{attr_display, text_element};

use super::open_root;

const NAMESPACES: [(&str, &str); 5] = [
    ("office", "urn:oasis:names:tc:opendocument:xmlns:office:1.0"),
    ("xlink", "http://www.w3.org/1999/xlink"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("meta", "urn:oasis:names:tc:opendocument:xmlns:meta:1.0"),
    ("ooo", "http://openoffice.org/2004/office"),
];

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub(crate) fn write(generator: &str, created: NaiveDateTime, table_count: usize, out: &mut String) {
    let date = created.format(DATE_FORMAT).to_string();
    open_root(out, "office:document-meta", &NAMESPACES);
    out.push_str("<office:meta>");
    text_element(out, "meta:generator", generator);
    text_element(out, "meta:creation-date", &date);
    text_element(out, "dc:date", &date);
    text_element(out, "meta:editing-cycles", "1");
    out.push_str("<meta:document-statistic");
    attr_display(out, "meta:table-count", table_count);
    out.push_str("/>");
    out.push_str("</office:meta></office:document-meta>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_meta() {
        let created = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap();
        let mut out = String::new();
        write("odsgen/test", created, 2, &mut out);
        assert!(out.contains("<meta:generator>odsgen/test</meta:generator>"));
        assert!(out.contains("<meta:creation-date>2024-03-01T09:30:05</meta:creation-date>"));
        assert!(out.contains("<dc:date>2024-03-01T09:30:05</dc:date>"));
        assert!(out.contains("<meta:document-statistic meta:table-count=\"2\"/>"));
    }
}
