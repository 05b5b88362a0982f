//! ODS archive writer
//!
//! Two ways to produce an archive:
//!
//! - [`OdsFileWriter::save`] writes the whole document in one call.
//! - The streaming protocol: [`OdsFileWriter::prepare_for_flush`], then any
//!   number of [`OdsFileWriter::add_table`] / [`OdsFileWriter::flush_rows`],
//!   then [`OdsFileWriter::finalize_flush`]. Rows are written to
//!   `content.xml` as they are flushed and released from memory.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use odsgen_core::{FlushState, Table};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::document::{ExtraEntry, OdsDocument};
use crate::error::{OdsError, OdsResult};
use crate::options::WriterOptions;
use crate::parts::{content, manifest, meta, settings, styles};
use crate::MIMETYPE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing written
    Idle,
    /// `content.xml` is open and receiving tables
    Streaming,
    /// The archive is complete
    Finished,
}

impl Phase {
    fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Streaming => "streaming",
            Phase::Finished => "finished",
        }
    }
}

/// Writes an [`OdsDocument`] into a ZIP archive
pub struct OdsFileWriter<W: Write + Seek> {
    zip: Option<ZipWriter<W>>,
    finished: Option<W>,
    document: OdsDocument,
    options: WriterOptions,
    phase: Phase,
}

impl OdsFileWriter<BufWriter<File>> {
    /// Create a writer to a new file at `path`
    pub fn create<P: AsRef<Path>>(path: P, document: OdsDocument) -> OdsResult<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), document))
    }
}

impl<W: Write + Seek> OdsFileWriter<W> {
    /// Create a writer with default options
    pub fn new(writer: W, document: OdsDocument) -> Self {
        Self::with_options(writer, document, WriterOptions::default())
    }

    /// Create a writer
    pub fn with_options(writer: W, document: OdsDocument, options: WriterOptions) -> Self {
        Self {
            zip: Some(ZipWriter::new(writer)),
            finished: None,
            document,
            options,
            phase: Phase::Idle,
        }
    }

    /// The document being written
    pub fn document(&self) -> &OdsDocument {
        &self.document
    }

    /// The document being written, mutably
    pub fn document_mut(&mut self) -> &mut OdsDocument {
        &mut self.document
    }

    /// Whether the archive is complete
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Write the whole document in one go
    pub fn save(&mut self) -> OdsResult<()> {
        self.check_phase(Phase::Idle, "save")?;
        self.prepare_for_flush()?;
        self.finalize_flush()
    }

    /// Start streaming
    ///
    /// Writes `mimetype`, then opens `content.xml` with its automatic
    /// styles. Styles registered later for content go to `styles.xml`.
    pub fn prepare_for_flush(&mut self) -> OdsResult<()> {
        self.check_phase(Phase::Idle, "prepare for flush")?;
        self.document.check_table_names()?;
        let options = self.file_options();
        let zip = zip_mut(&mut self.zip, self.phase, "prepare for flush")?;

        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file("mimetype", stored)?;
        zip.write_all(MIMETYPE.as_bytes())?;
        log::debug!("entry written: mimetype");

        zip.start_file("content.xml", options)?;
        let mut out = String::new();
        content::write_header(&mut self.document, &mut out);
        zip.write_all(out.as_bytes())?;

        self.phase = Phase::Streaming;
        Ok(())
    }

    /// Append a table
    ///
    /// While streaming, every previous table is closed first: its remaining
    /// rows are written and it can no longer be changed. A name already
    /// taken fails before anything is closed.
    pub fn add_table<S: Into<String>>(&mut self, name: S) -> OdsResult<&mut Table> {
        let name = name.into();
        if self.phase != Phase::Finished {
            self.document.check_name_free(&name, None)?;
        }
        match self.phase {
            Phase::Finished => return Err(self.state_error("add a table")),
            Phase::Streaming => {
                let mut out = String::new();
                for table in self.document.tables_mut() {
                    close_table(table, &mut out)?;
                }
                self.write_content(&out, "add a table")?;
            }
            Phase::Idle => {}
        }
        self.document.add_table(name)
    }

    /// Write the rows of the current table that are complete
    ///
    /// The current table is the last one; its preamble is written on the
    /// first flush and its last row is kept for further edits. Any earlier
    /// table still open is closed.
    pub fn flush_rows(&mut self) -> OdsResult<()> {
        self.check_phase(Phase::Streaming, "flush rows")?;
        let mut out = String::new();
        if let Some((current, previous)) = self.document.tables_mut().split_last_mut() {
            for table in previous {
                close_table(table, &mut out)?;
            }
            if current.state() != FlushState::FullyFlushed {
                current.write_preamble(&mut out);
                current.append_available_rows(&mut out)?;
            }
        }
        self.write_content(&out, "flush rows")
    }

    /// Finish streaming and complete the archive
    ///
    /// Closes every table and `content.xml`, then writes `styles.xml`,
    /// `settings.xml`, `meta.xml`, the extra entries and the manifest.
    pub fn finalize_flush(&mut self) -> OdsResult<()> {
        self.check_phase(Phase::Streaming, "finalize")?;
        self.document.check_table_names()?;
        if self.document.table_count() == 0 {
            log::warn!("writing a spreadsheet without any table");
        }
        let mut out = String::new();
        for table in self.document.tables_mut() {
            close_table(table, &mut out)?;
        }
        out.push_str(content::FOOTER);
        self.write_content(&out, "finalize")?;
        log::debug!("entry written: content.xml");

        let options = self.file_options();
        let zip = zip_mut(&mut self.zip, self.phase, "finalize")?;

        let mut out = String::new();
        styles::write(self.document.styles(), &mut out);
        write_entry(zip, "styles.xml", options, out.as_bytes())?;

        let mut out = String::new();
        settings::write(&self.document, &mut out);
        write_entry(zip, "settings.xml", options, out.as_bytes())?;

        let mut out = String::new();
        meta::write(
            &self.options.generator,
            self.document.creation_date(),
            self.document.table_count(),
            &mut out,
        );
        write_entry(zip, "meta.xml", options, out.as_bytes())?;

        for extra in self.document.extras() {
            match extra {
                ExtraEntry::File { path, data, .. } => write_entry(zip, path, options, data)?,
                ExtraEntry::Dir { path } | ExtraEntry::Object { path, .. } => {
                    zip.add_directory(path.as_str(), options)?;
                    log::debug!("directory written: {}", path);
                }
            }
        }

        let mut out = String::new();
        manifest::write(self.document.extras(), &mut out);
        write_entry(zip, "META-INF/manifest.xml", options, out.as_bytes())?;

        if let Some(zip) = self.zip.take() {
            self.finished = Some(zip.finish()?);
        }
        self.phase = Phase::Finished;
        Ok(())
    }

    /// Return the underlying writer of a finished archive
    pub fn into_inner(mut self) -> OdsResult<W> {
        match self.finished.take() {
            Some(writer) => Ok(writer),
            None => Err(self.state_error("return the writer")),
        }
    }

    fn file_options(&self) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(self.options.compression_level)
    }

    fn write_content(&mut self, out: &str, operation: &'static str) -> OdsResult<()> {
        if out.is_empty() {
            return Ok(());
        }
        let zip = zip_mut(&mut self.zip, self.phase, operation)?;
        zip.write_all(out.as_bytes())?;
        Ok(())
    }

    fn check_phase(&self, expected: Phase, operation: &'static str) -> OdsResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.state_error(operation))
        }
    }

    fn state_error(&self, operation: &'static str) -> OdsError {
        OdsError::WriterState {
            operation,
            state: self.phase.as_str(),
        }
    }
}

fn zip_mut<'a, W: Write + Seek>(
    zip: &'a mut Option<ZipWriter<W>>,
    phase: Phase,
    operation: &'static str,
) -> OdsResult<&'a mut ZipWriter<W>> {
    zip.as_mut().ok_or(OdsError::WriterState {
        operation,
        state: phase.as_str(),
    })
}

fn write_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    options: SimpleFileOptions,
    data: &[u8],
) -> OdsResult<()> {
    zip.start_file(name, options)?;
    zip.write_all(data)?;
    log::debug!("entry written: {} ({} bytes)", name, data.len());
    Ok(())
}

fn close_table(table: &mut Table, out: &mut String) -> OdsResult<()> {
    if table.state() != FlushState::FullyFlushed {
        table.write_preamble(out);
        table.append_all_remaining(out)?;
    }
    Ok(())
}
