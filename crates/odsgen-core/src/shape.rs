//! Shapes drawn over a table

use crate::style::Length;
use crate::xml::{attr, attr_display};

/// Position and size of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgRectangle {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
}

impl SvgRectangle {
    /// A rectangle in centimeters
    pub fn cm(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Length::cm(x),
            y: Length::cm(y),
            width: Length::cm(width),
            height: Length::cm(height),
        }
    }
}

/// What a frame displays
#[derive(Debug, Clone, PartialEq)]
pub enum FrameContent {
    /// An image, usually stored under `Pictures/` in the archive
    Image { href: String },
    /// An embedded document, stored as an extra object in the archive
    Object { href: String },
}

/// A `draw:frame` anchored to a table
#[derive(Debug, Clone, PartialEq)]
pub struct DrawFrame {
    pub name: String,
    pub z_index: u32,
    pub rect: SvgRectangle,
    pub content: FrameContent,
}

impl DrawFrame {
    /// A frame showing an image
    pub fn image<N: Into<String>, H: Into<String>>(name: N, href: H, rect: SvgRectangle) -> Self {
        Self {
            name: name.into(),
            z_index: 0,
            rect,
            content: FrameContent::Image { href: href.into() },
        }
    }

    /// A frame showing an embedded object
    pub fn object<N: Into<String>, H: Into<String>>(name: N, href: H, rect: SvgRectangle) -> Self {
        Self {
            name: name.into(),
            z_index: 0,
            rect,
            content: FrameContent::Object { href: href.into() },
        }
    }

    /// Set the stacking order
    pub fn with_z_index(mut self, z_index: u32) -> Self {
        self.z_index = z_index;
        self
    }

    pub(crate) fn write_xml(&self, out: &mut String) {
        out.push_str("<draw:frame");
        attr(out, "draw:name", &self.name);
        attr_display(out, "draw:z-index", self.z_index);
        attr_display(out, "svg:width", self.rect.width);
        attr_display(out, "svg:height", self.rect.height);
        attr_display(out, "svg:x", self.rect.x);
        attr_display(out, "svg:y", self.rect.y);
        out.push('>');
        let (element, href) = match &self.content {
            FrameContent::Image { href } => ("draw:image", href),
            FrameContent::Object { href } => ("draw:object", href),
        };
        out.push('<');
        out.push_str(element);
        attr(out, "xlink:href", href);
        out.push_str(" xlink:type=\"simple\" xlink:show=\"embed\" xlink:actuate=\"onLoad\"/>");
        out.push_str("</draw:frame>");
    }
}

/// Append `table:shapes`, or nothing when there is no shape
pub(crate) fn write_shapes(shapes: &[DrawFrame], out: &mut String) {
    if shapes.is_empty() {
        return;
    }
    out.push_str("<table:shapes>");
    for shape in shapes {
        shape.write_xml(out);
    }
    out.push_str("</table:shapes>");
}
