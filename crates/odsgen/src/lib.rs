//! # odsgen
//!
//! A Rust library for writing OpenDocument spreadsheets (`.ods`), including
//! documents too large to hold in memory.
//!
//! ## Features
//!
//! - Sparse tables, rows and cells with typed values
//! - Cell merges, tooltips and drawn images
//! - Named and deduplicated styles (cell, column, row, table, text, page, data)
//! - Streaming: complete rows are written to the archive and released
//!
//! ## Example
//!
//! ```rust
//! use odsgen::prelude::*;
//! use std::io::Cursor;
//!
//! let mut document = OdsDocument::new();
//! let bold = document
//!     .styles_mut()
//!     .add(TableCellStyle::new().with_bold(true))
//!     .unwrap();
//!
//! let table = document.add_table("Sheet1").unwrap();
//! let row = table.add_row().unwrap();
//! row.set_string(0, "Total");
//! row.set_cell_style(0, &bold).unwrap();
//! row.set_float(1, 42.0);
//!
//! let mut writer = OdsFileWriter::new(Cursor::new(Vec::new()), document);
//! writer.save().unwrap();
//! ```
//!
//! Streaming a large table:
//!
//! ```rust
//! use odsgen::prelude::*;
//! use std::io::Cursor;
//!
//! let mut writer = OdsFileWriter::new(Cursor::new(Vec::new()), OdsDocument::new());
//! writer.prepare_for_flush().unwrap();
//! writer.add_table("data").unwrap();
//! for i in 0..10_000 {
//!     let table = writer.document_mut().last_table_mut().unwrap();
//!     table.add_row().unwrap().set_float(0, i);
//!     if i % 1000 == 0 {
//!         writer.flush_rows().unwrap();
//!     }
//! }
//! writer.finalize_flush().unwrap();
//! ```

pub mod data_wrapper;
pub mod helper;
pub mod prelude;

pub use data_wrapper::{DataWrapper, RecordsDataWrapper};
pub use helper::{CellType, DocumentHelper, TableHelper};

// Re-export core types
pub use odsgen_core::{
    // Cell types
    Cell,
    CellPosition,
    CellSetters,
    CellValue,
    Column,
    DrawFrame,
    // Error types
    Error,
    FlushState,
    FrameContent,
    IntoIndex,
    ObjectValue,
    Paragraph,
    Result,
    Row,
    RowWalker,
    RunList,
    Span,
    SvgRectangle,
    // Main types
    Table,
    TableOptions,
    TableSettings,
    TableWalker,
    Tooltip,

    // Constants
    DEFAULT_MAX_COLUMNS,
    MAX_ROWS,
};

// Re-export all style types
pub use odsgen_core::style::{
    Border, BorderLine, Color, CurrencyStyle, DataFormat, DataStyle, DateFormat, DateStyle,
    FontWeight, HorizontalAlign, Length, LengthUnit, Locale, Margins, MasterPageStyle,
    NumberStyle, PageLayoutStyle, PaperFormat, PrintOrientation, RegisterMode, Style,
    StyleFamily, StyleName, StyleRegistry, TableCellStyle, TableColumnStyle, TableRowStyle,
    TableStyle, TextStyle, TimeStyle, Underline, VerticalAlign, WritingMode,
};

// Re-export archive types
pub use odsgen_ods::{ExtraEntry, OdsDocument, OdsError, OdsFileWriter, OdsResult, WriterOptions};

use std::io::Cursor;
use std::path::Path;

/// Extension trait for OdsDocument to write it in one call
pub trait OdsDocumentExt {
    /// Save the document to a file
    fn save_as<P: AsRef<Path>>(self, path: P) -> OdsResult<()>;

    /// Write the document into an in-memory archive
    fn to_bytes(self) -> OdsResult<Vec<u8>>;
}

impl OdsDocumentExt for OdsDocument {
    fn save_as<P: AsRef<Path>>(self, path: P) -> OdsResult<()> {
        let mut writer = OdsFileWriter::create(path, self)?;
        writer.save()?;
        let mut file = writer.into_inner()?;
        std::io::Write::flush(&mut file)?;
        Ok(())
    }

    fn to_bytes(self) -> OdsResult<Vec<u8>> {
        let mut writer = OdsFileWriter::new(Cursor::new(Vec::new()), self);
        writer.save()?;
        Ok(writer.into_inner()?.into_inner())
    }
}
