//! Per-table view settings (`settings.xml`)

use crate::xml::attr;

/// View state of one table, as stored in `settings.xml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSettings {
    pub cursor_position_x: i32,
    pub cursor_position_y: i32,
    pub horizontal_split_mode: i16,
    pub vertical_split_mode: i16,
    pub horizontal_split_position: i32,
    pub vertical_split_position: i32,
    pub active_split_range: i16,
    pub position_left: i32,
    pub position_right: i32,
    pub position_top: i32,
    pub position_bottom: i32,
    pub zoom_type: i16,
    pub zoom_value: i32,
    pub page_view_zoom_value: i32,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            cursor_position_x: 0,
            cursor_position_y: 0,
            horizontal_split_mode: 0,
            vertical_split_mode: 0,
            horizontal_split_position: 0,
            vertical_split_position: 0,
            active_split_range: 2,
            position_left: 0,
            position_right: 0,
            position_top: 0,
            position_bottom: 0,
            zoom_type: 0,
            zoom_value: 100,
            page_view_zoom_value: 60,
        }
    }
}

/// Split mode that freezes the panes
const SPLIT_FROZEN: i16 = 2;

impl TableSettings {
    /// Freeze the first `rows` rows and `cols` columns
    pub fn freeze_cells(&mut self, rows: u32, cols: u32) {
        let rows = i32::try_from(rows).unwrap_or(i32::MAX);
        let cols = i32::try_from(cols).unwrap_or(i32::MAX);
        self.horizontal_split_mode = SPLIT_FROZEN;
        self.vertical_split_mode = SPLIT_FROZEN;
        self.horizontal_split_position = cols;
        self.vertical_split_position = rows;
        self.active_split_range = 2;
        self.position_right = cols;
        self.position_bottom = rows;
    }

    /// Set the zoom percentage
    pub fn set_zoom(&mut self, percent: i32) {
        self.zoom_value = percent;
    }

    /// Append the `config:config-item-map-entry` for table `name`
    pub fn write_xml(&self, name: &str, out: &mut String) {
        out.push_str("<config:config-item-map-entry");
        attr(out, "config:name", name);
        out.push('>');
        let ints = [
            ("CursorPositionX", self.cursor_position_x),
            ("CursorPositionY", self.cursor_position_y),
        ];
        write_items(out, "int", &ints);
        let shorts = [
            ("HorizontalSplitMode", self.horizontal_split_mode),
            ("VerticalSplitMode", self.vertical_split_mode),
        ];
        write_items(out, "short", &shorts);
        let ints = [
            ("HorizontalSplitPosition", self.horizontal_split_position),
            ("VerticalSplitPosition", self.vertical_split_position),
        ];
        write_items(out, "int", &ints);
        write_items(out, "short", &[("ActiveSplitRange", self.active_split_range)]);
        let ints = [
            ("PositionLeft", self.position_left),
            ("PositionRight", self.position_right),
            ("PositionTop", self.position_top),
            ("PositionBottom", self.position_bottom),
        ];
        write_items(out, "int", &ints);
        write_items(out, "short", &[("ZoomType", self.zoom_type)]);
        let ints = [
            ("ZoomValue", self.zoom_value),
            ("PageViewZoomValue", self.page_view_zoom_value),
        ];
        write_items(out, "int", &ints);
        out.push_str("</config:config-item-map-entry>");
    }
}

/// Append `config:config-item` elements of one type
pub fn write_items<V: std::fmt::Display>(out: &mut String, item_type: &str, items: &[(&str, V)]) {
    for (name, value) in items {
        write_item(out, name, item_type, &value.to_string());
    }
}

/// Append one `config:config-item`
pub fn write_item(out: &mut String, name: &str, item_type: &str, value: &str) {
    out.push_str("<config:config-item");
    attr(out, "config:name", name);
    attr(out, "config:type", item_type);
    out.push('>');
    crate::xml::text(out, value);
    out.push_str("</config:config-item>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, item_type: &str, value: &str) -> String {
        format!(
            "<config:config-item config:name=\"{}\" config:type=\"{}\">{}</config:config-item>",
            name, item_type, value
        )
    }

    #[test]
    fn test_default_settings() {
        let mut out = String::new();
        TableSettings::default().write_xml("mytable", &mut out);
        let expected = [
            "<config:config-item-map-entry config:name=\"mytable\">".to_string(),
            item("CursorPositionX", "int", "0"),
            item("CursorPositionY", "int", "0"),
            item("HorizontalSplitMode", "short", "0"),
            item("VerticalSplitMode", "short", "0"),
            item("HorizontalSplitPosition", "int", "0"),
            item("VerticalSplitPosition", "int", "0"),
            item("ActiveSplitRange", "short", "2"),
            item("PositionLeft", "int", "0"),
            item("PositionRight", "int", "0"),
            item("PositionTop", "int", "0"),
            item("PositionBottom", "int", "0"),
            item("ZoomType", "short", "0"),
            item("ZoomValue", "int", "100"),
            item("PageViewZoomValue", "int", "60"),
            "</config:config-item-map-entry>".to_string(),
        ]
        .concat();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_freeze_cells() {
        let mut settings = TableSettings::default();
        settings.freeze_cells(1, 2);
        assert_eq!(settings.horizontal_split_mode, 2);
        assert_eq!(settings.vertical_split_mode, 2);
        assert_eq!(settings.horizontal_split_position, 2);
        assert_eq!(settings.vertical_split_position, 1);
        assert_eq!(settings.position_right, 2);
        assert_eq!(settings.position_bottom, 1);
    }
}
