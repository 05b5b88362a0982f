//! Prelude module - common imports for odsgen users
//!
//! ```rust
//! use odsgen::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellPosition,
    CellSetters,
    CellValue,
    // Style types
    Color,
    DataStyle,
    // Helpers
    DataWrapper,
    DocumentHelper,
    // Error types
    Error,
    Length,
    ObjectValue,
    // Archive types
    OdsDocument,
    OdsDocumentExt,
    OdsError,
    OdsFileWriter,
    OdsResult,
    Paragraph,
    RecordsDataWrapper,
    RegisterMode,
    Result,
    Row,
    StyleName,
    // Main types
    Table,
    TableCellStyle,
    TableColumnStyle,
    TableHelper,
    TableOptions,
    TableRowStyle,
    TableStyle,
    TextStyle,
    WriterOptions,
};
