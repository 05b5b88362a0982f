//! `settings.xml`: view settings per table

use odsgen_core::table::{write_item, write_items};

use super::open_root;
use crate::document::OdsDocument;

const NAMESPACES: [(&str, &str); 3] = [
    ("office", "urn:oasis:names:tc:opendocument:xmlns:office:1.0"),
    ("config", "urn:oasis:names:tc:opendocument:xmlns:config:1.0"),
    ("ooo", "http://openoffice.org/2004/office"),
];

pub(crate) fn write(document: &OdsDocument, out: &mut String) {
    open_root(out, "office:document-settings", &NAMESPACES);
    out.push_str("<office:settings>");
    out.push_str("<config:config-item-set config:name=\"ooo:view-settings\">");
    let area = [
        ("VisibleAreaTop", 0),
        ("VisibleAreaLeft", 0),
        ("VisibleAreaWidth", 680),
        ("VisibleAreaHeight", 400),
    ];
    write_items(out, "int", &area);

    out.push_str("<config:config-item-map-indexed config:name=\"Views\">");
    out.push_str("<config:config-item-map-entry>");
    write_item(out, "ViewId", "string", "view1");
    out.push_str("<config:config-item-map-named config:name=\"Tables\">");
    for table in document.tables() {
        table.settings().write_xml(table.name(), out);
    }
    out.push_str("</config:config-item-map-named>");
    if let Some(active) = document.table(document.active_table()) {
        write_item(out, "ActiveTable", "string", active.name());
    }
    out.push_str("</config:config-item-map-entry>");
    out.push_str("</config:config-item-map-indexed>");
    out.push_str("</config:config-item-set>");
    out.push_str("</office:settings></office:document-settings>");
}
