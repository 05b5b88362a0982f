//! `META-INF/manifest.xml`

use odsgen_core::xml::attr;

use super::{ODF_VERSION, XML_DECLARATION};
use crate::document::ExtraEntry;
use crate::MIMETYPE;

const PARTS: [&str; 4] = ["content.xml", "styles.xml", "settings.xml", "meta.xml"];

pub(crate) fn write(extras: &[ExtraEntry], out: &mut String) {
    out.push_str(XML_DECLARATION);
    out.push_str("<manifest:manifest xmlns:manifest=\"urn:oasis:names:tc:opendocument:xmlns:manifest:1.0\"");
    attr(out, "manifest:version", ODF_VERSION);
    out.push('>');
    write_entry(out, "/", MIMETYPE, Some(ODF_VERSION));
    for part in PARTS {
        write_entry(out, part, "text/xml", None);
    }
    for extra in extras {
        let version = match extra {
            ExtraEntry::Object { version, .. } => version.as_deref(),
            _ => None,
        };
        write_entry(out, extra.path(), extra.media_type(), version);
    }
    out.push_str("</manifest:manifest>");
}

fn write_entry(out: &mut String, path: &str, media_type: &str, version: Option<&str>) {
    out.push_str("<manifest:file-entry");
    attr(out, "manifest:full-path", path);
    if let Some(version) = version {
        attr(out, "manifest:version", version);
    }
    attr(out, "manifest:media-type", media_type);
    out.push_str("/>");
}
