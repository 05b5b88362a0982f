//! `styles.xml`: common styles, page layouts and master pages

use odsgen_core::StyleRegistry;

use super::{open_root, write_font_faces, DOCUMENT_NAMESPACES};

pub(crate) fn write(styles: &StyleRegistry, out: &mut String) {
    open_root(out, "office:document-styles", &DOCUMENT_NAMESPACES);
    write_font_faces(out, &styles.font_names());
    out.push_str("<office:styles>");
    styles.write_common_styles(out);
    out.push_str("</office:styles><office:automatic-styles>");
    styles.write_page_layouts(out);
    out.push_str("</office:automatic-styles><office:master-styles>");
    styles.write_master_pages(out);
    out.push_str("</office:master-styles></office:document-styles>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use odsgen_core::{TableCellStyle, TextStyle};

    #[test]
    fn test_sections() {
        let mut styles = StyleRegistry::new();
        styles
            .add(TableCellStyle::new().with_text(TextStyle::new().with_font_name("Arial")))
            .unwrap();
        let mut out = String::new();
        write(&styles, &mut out);

        assert!(out.contains(
            "<office:font-face-decls><style:font-face style:name=\"Arial\" svg:font-family=\"Arial\"/></office:font-face-decls>"
        ));
        let common = out.find("<office:styles>").unwrap();
        let default = out.find("style:name=\"Default\"").unwrap();
        let layouts = out.find("<office:automatic-styles>").unwrap();
        let layout = out.find("style:name=\"pm1\"").unwrap();
        let masters = out.find("<office:master-styles>").unwrap();
        assert!(common < default && default < layouts);
        assert!(layouts < layout && layout < masters);
        assert!(out.ends_with("</office:master-styles></office:document-styles>"));
    }
}
