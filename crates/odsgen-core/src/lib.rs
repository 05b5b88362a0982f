//! # odsgen-core
//!
//! Core data structures for the odsgen streaming ODS writer.
//!
//! This crate provides the in-memory model of a spreadsheet and its XML
//! fragments:
//! - [`RunList`] - Sparse sequence with an implicit blank tail
//! - [`Cell`], [`Row`], [`Table`] - The document structures
//! - [`StyleRegistry`] - Named and generated styles per family
//! - [`FlushState`] - The preamble/rows protocol used to stream a table
//!
//! ## Example
//!
//! ```rust
//! use odsgen_core::{CellValue, Table};
//!
//! let mut table = Table::new("Sheet1");
//! table.add_row().unwrap().set_string(0, "Hello");
//! table.row(2).unwrap().set_float(1, 42.0);
//! assert_eq!(table.row_count(), 3);
//!
//! let mut xml = String::new();
//! table.write_xml(&mut xml).unwrap();
//! assert!(xml.ends_with("</table:table>"));
//! # let _ = CellValue::Void;
//! ```

pub mod address;
pub mod cell;
pub mod column;
pub mod error;
pub mod index;
pub mod row;
pub mod run_list;
pub mod shape;
pub mod style;
pub mod table;
pub mod text;
pub mod xml;

// Re-exports for convenience
pub use address::CellPosition;
pub use cell::{Cell, CellSetters, CellValue, ObjectValue, Tooltip};
pub use column::{Column, DEFAULT_MAX_COLUMNS};
pub use error::{Error, Result};
pub use index::IntoIndex;
pub use row::{Row, RowWalker};
pub use run_list::RunList;
pub use shape::{DrawFrame, FrameContent, SvgRectangle};
pub use table::{FlushState, Table, TableOptions, TableSettings, TableWalker};
pub use text::{Paragraph, Span};

// Re-export the style types used at registration sites
pub use style::{
    Color, DataStyle, Length, MasterPageStyle, PageLayoutStyle, RegisterMode, Style,
    StyleFamily, StyleName, StyleRegistry, TableCellStyle, TableColumnStyle, TableRowStyle,
    TableStyle, TextStyle,
};

/// Maximum number of rows addressable in a table
pub const MAX_ROWS: usize = 1_048_576;
