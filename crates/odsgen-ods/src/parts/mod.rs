//! The XML parts of the archive

pub(crate) mod content;
pub(crate) mod manifest;
pub(crate) mod meta;
pub(crate) mod settings;
pub(crate) mod styles;

use odsgen_core::xml::attr;

pub(crate) const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

pub(crate) const ODF_VERSION: &str = "1.2";

/// Namespaces declared on the root of `content.xml` and `styles.xml`
const DOCUMENT_NAMESPACES: [(&str, &str); 14] = [
    ("office", "urn:oasis:names:tc:opendocument:xmlns:office:1.0"),
    ("style", "urn:oasis:names:tc:opendocument:xmlns:style:1.0"),
    ("text", "urn:oasis:names:tc:opendocument:xmlns:text:1.0"),
    ("table", "urn:oasis:names:tc:opendocument:xmlns:table:1.0"),
    ("draw", "urn:oasis:names:tc:opendocument:xmlns:drawing:1.0"),
    ("fo", "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0"),
    ("xlink", "http://www.w3.org/1999/xlink"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("meta", "urn:oasis:names:tc:opendocument:xmlns:meta:1.0"),
    ("number", "urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0"),
    ("svg", "urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0"),
    ("of", "urn:oasis:names:tc:opendocument:xmlns:of:1.2"),
    ("form", "urn:oasis:names:tc:opendocument:xmlns:form:1.0"),
    ("ooo", "http://openoffice.org/2004/office"),
];

/// Append `<element xmlns:..="..." office:version="1.2">`
pub(crate) fn open_root(out: &mut String, element: &str, namespaces: &[(&str, &str)]) {
    out.push_str(XML_DECLARATION);
    out.push('<');
    out.push_str(element);
    for (prefix, uri) in namespaces {
        attr(out, &format!("xmlns:{}", prefix), uri);
    }
    attr(out, "office:version", ODF_VERSION);
    out.push('>');
}

/// Append `office:font-face-decls` for the fonts used by the styles
pub(crate) fn write_font_faces(out: &mut String, fonts: &[&str]) {
    if fonts.is_empty() {
        return;
    }
    out.push_str("<office:font-face-decls>");
    for font in fonts {
        out.push_str("<style:font-face");
        attr(out, "style:name", font);
        attr(out, "svg:font-family", font);
        out.push_str("/>");
    }
    out.push_str("</office:font-face-decls>");
}
