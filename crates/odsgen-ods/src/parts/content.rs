//! `content.xml`: automatic styles, then the tables

use super::{open_root, write_font_faces, DOCUMENT_NAMESPACES};
use crate::document::OdsDocument;

pub(crate) const FOOTER: &str =
    "</office:spreadsheet></office:body></office:document-content>";

/// Append everything up to the first table
///
/// Drains the content automatic styles of the registry.
pub(crate) fn write_header(document: &mut OdsDocument, out: &mut String) {
    open_root(out, "office:document-content", &DOCUMENT_NAMESPACES);
    out.push_str("<office:scripts/>");
    write_font_faces(out, &document.styles().font_names());
    out.push_str("<office:automatic-styles>");
    document.styles_mut().write_content_automatic_styles(out);
    out.push_str("</office:automatic-styles>");
    out.push_str("<office:body><office:spreadsheet>");
}
