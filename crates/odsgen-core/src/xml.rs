//! Helpers for emitting XML fragments into a `String`
//!
//! Fragments are appended with `std::fmt::Write`, which cannot fail for
//! `String`; escaping goes through `quick_xml::escape`.

use std::borrow::Cow;
use std::fmt::{Display, Write};

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(value)
}

/// Escape character data between tags
pub fn escape_text(value: &str) -> Cow<'_, str> {
    quick_xml::escape::partial_escape(value)
}

/// Append ` name="value"` with the value escaped
pub fn attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Append ` name="value"` for values that never need escaping (numbers, keywords)
pub fn attr_display<V: Display>(out: &mut String, name: &str, value: V) {
    let _ = write!(out, " {}=\"{}\"", name, value);
}

/// Append escaped character data
pub fn text(out: &mut String, value: &str) {
    out.push_str(&escape_text(value));
}

/// Append `<name>escaped text</name>`
pub fn text_element(out: &mut String, name: &str, value: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    text(out, value);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_escapes() {
        let mut out = String::new();
        attr(&mut out, "table:name", "a<b>&\"c\"");
        assert_eq!(out, " table:name=\"a&lt;b&gt;&amp;&quot;c&quot;\"");
    }

    #[test]
    fn test_attr_display() {
        let mut out = String::new();
        attr_display(&mut out, "table:number-columns-repeated", 1020);
        assert_eq!(out, " table:number-columns-repeated=\"1020\"");
    }

    #[test]
    fn test_text_element() {
        let mut out = String::new();
        text_element(&mut out, "text:p", "1 < 2 & 3");
        assert_eq!(out, "<text:p>1 &lt; 2 &amp; 3</text:p>");
    }
}
