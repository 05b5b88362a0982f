//! # odsgen-ods
//!
//! ODS (OpenDocument Spreadsheet) archive writer for odsgen.
//!
//! [`OdsFileWriter`] writes an [`OdsDocument`] either in one call
//! ([`OdsFileWriter::save`]) or incrementally, flushing completed rows into
//! `content.xml` as they are produced.

pub mod document;
pub mod error;
pub mod options;
pub mod writer;

mod parts;

pub use document::{ExtraEntry, OdsDocument};
pub use error::{OdsError, OdsResult};
pub use options::WriterOptions;
pub use writer::OdsFileWriter;

/// Media type of an ODS archive, stored uncompressed as the first entry
pub const MIMETYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";
