//! The document: tables, styles and extra archive entries

use chrono::NaiveDateTime;
use odsgen_core::{Error, StyleRegistry, Table, TableOptions};

use crate::error::{OdsError, OdsResult};

/// Entry names the writer produces itself
const RESERVED_ENTRIES: [&str; 6] = [
    "mimetype",
    "content.xml",
    "styles.xml",
    "settings.xml",
    "meta.xml",
    "META-INF/manifest.xml",
];

/// An archive entry added next to the generated parts
///
/// Every extra entry is listed in `META-INF/manifest.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraEntry {
    /// A file stored as is (e.g., an image under `Pictures/`)
    File {
        path: String,
        media_type: String,
        data: Vec<u8>,
    },
    /// A directory; the path ends with `/`
    Dir { path: String },
    /// An embedded object directory with its media type and ODF version
    Object {
        path: String,
        media_type: String,
        version: Option<String>,
    },
}

impl ExtraEntry {
    /// Path inside the archive
    pub fn path(&self) -> &str {
        match self {
            ExtraEntry::File { path, .. }
            | ExtraEntry::Dir { path }
            | ExtraEntry::Object { path, .. } => path,
        }
    }

    /// Media type declared in the manifest (empty for plain directories)
    pub fn media_type(&self) -> &str {
        match self {
            ExtraEntry::File { media_type, .. } | ExtraEntry::Object { media_type, .. } => {
                media_type
            }
            ExtraEntry::Dir { .. } => "",
        }
    }
}

/// A spreadsheet document
///
/// Owns the tables, the [`StyleRegistry`] and the extra entries. Cells and
/// tables refer to styles by [`odsgen_core::StyleName`] handles obtained
/// from the registry.
#[derive(Debug)]
pub struct OdsDocument {
    tables: Vec<Table>,
    styles: StyleRegistry,
    extras: Vec<ExtraEntry>,
    active_table: usize,
    table_options: TableOptions,
    created: NaiveDateTime,
}

impl Default for OdsDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl OdsDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::with_table_options(TableOptions::default())
    }

    /// Create an empty document whose tables use `options`
    pub fn with_table_options(options: TableOptions) -> Self {
        Self {
            tables: Vec::new(),
            styles: StyleRegistry::new(),
            extras: Vec::new(),
            active_table: 0,
            table_options: options,
            created: chrono::Local::now().naive_local(),
        }
    }

    /// Append a table using the document's table options
    ///
    /// Table names are unique within a document; a name already taken is
    /// [`OdsError::DuplicateTable`]. When streaming, prefer
    /// [`crate::OdsFileWriter::add_table`], which also closes the previous
    /// table.
    pub fn add_table<S: Into<String>>(&mut self, name: S) -> OdsResult<&mut Table> {
        let options = self.table_options;
        self.add_table_with_options(name, options)
    }

    /// Append a table with its own options
    pub fn add_table_with_options<S: Into<String>>(
        &mut self,
        name: S,
        options: TableOptions,
    ) -> OdsResult<&mut Table> {
        let name = name.into();
        self.check_name_free(&name, None)?;
        let index = self.tables.len();
        self.tables.push(Table::with_options(name, options));
        Ok(&mut self.tables[index])
    }

    /// Rename the table at `index`
    ///
    /// Fails when another table already has `name`, or when the table's
    /// preamble was written.
    pub fn rename_table<S: Into<String>>(&mut self, index: usize, name: S) -> OdsResult<()> {
        let name = name.into();
        if index >= self.tables.len() {
            return Err(no_table(index, self.tables.len()));
        }
        self.check_name_free(&name, Some(index))?;
        self.tables[index].set_name(name)?;
        Ok(())
    }

    /// Check that no two tables share a name
    ///
    /// [`Table::set_name`] cannot see the other tables, so the writer checks
    /// again before writing.
    pub(crate) fn check_table_names(&self) -> OdsResult<()> {
        for (index, table) in self.tables.iter().enumerate() {
            if self.tables[..index].iter().any(|t| t.name() == table.name()) {
                return Err(OdsError::DuplicateTable(table.name().to_owned()));
            }
        }
        Ok(())
    }

    pub(crate) fn check_name_free(&self, name: &str, except: Option<usize>) -> OdsResult<()> {
        let taken = self
            .tables
            .iter()
            .enumerate()
            .any(|(i, t)| Some(i) != except && t.name() == name);
        if taken {
            return Err(OdsError::DuplicateTable(name.to_owned()));
        }
        Ok(())
    }

    /// Number of tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// All tables in document order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// All tables, mutably
    pub fn tables_mut(&mut self) -> &mut [Table] {
        &mut self.tables
    }

    /// Table at `index`
    pub fn table(&self, index: usize) -> Option<&Table> {
        self.tables.get(index)
    }

    /// Table at `index`, mutably
    pub fn table_mut(&mut self, index: usize) -> Option<&mut Table> {
        self.tables.get_mut(index)
    }

    /// First table named `name`
    pub fn table_by_name(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.name() == name)
    }

    /// The last table added
    pub fn last_table_mut(&mut self) -> Option<&mut Table> {
        self.tables.last_mut()
    }

    /// The style registry
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// The style registry, mutably
    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.styles
    }

    /// Index of the table shown when the document is opened
    pub fn active_table(&self) -> usize {
        self.active_table
    }

    /// Select the table shown when the document is opened
    pub fn set_active_table(&mut self, index: usize) -> OdsResult<()> {
        if index >= self.tables.len() {
            return Err(no_table(index, self.tables.len()));
        }
        self.active_table = index;
        Ok(())
    }

    /// Creation date written to `meta.xml`
    pub fn creation_date(&self) -> NaiveDateTime {
        self.created
    }

    /// Override the creation date
    pub fn set_creation_date(&mut self, date: NaiveDateTime) {
        self.created = date;
    }

    /// Extra entries in insertion order
    pub fn extras(&self) -> &[ExtraEntry] {
        &self.extras
    }

    /// Add a file to the archive
    pub fn add_extra_file<P: Into<String>, M: Into<String>>(
        &mut self,
        path: P,
        media_type: M,
        data: Vec<u8>,
    ) -> OdsResult<()> {
        let path = path.into();
        self.push_extra(ExtraEntry::File {
            path,
            media_type: media_type.into(),
            data,
        })
    }

    /// Add a directory to the archive
    pub fn add_extra_dir<P: Into<String>>(&mut self, path: P) -> OdsResult<()> {
        self.push_extra(ExtraEntry::Dir {
            path: dir_path(path.into()),
        })
    }

    /// Add an embedded object directory (e.g., a chart sub-document)
    pub fn add_extra_object<P: Into<String>, M: Into<String>>(
        &mut self,
        path: P,
        media_type: M,
        version: Option<&str>,
    ) -> OdsResult<()> {
        self.push_extra(ExtraEntry::Object {
            path: dir_path(path.into()),
            media_type: media_type.into(),
            version: version.map(str::to_owned),
        })
    }

    fn push_extra(&mut self, entry: ExtraEntry) -> OdsResult<()> {
        let path = entry.path();
        if path.is_empty()
            || RESERVED_ENTRIES.contains(&path)
            || self.extras.iter().any(|e| e.path() == path)
        {
            return Err(OdsError::DuplicateEntry(path.to_owned()));
        }
        self.extras.push(entry);
        Ok(())
    }
}

fn no_table(index: usize, count: usize) -> OdsError {
    Error::other(format!("no table at index {} ({} tables)", index, count)).into()
}

fn dir_path(mut path: String) -> String {
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tables() {
        let mut document = OdsDocument::new();
        document.add_table("first").unwrap();
        document.add_table("second").unwrap().add_row().unwrap();
        assert_eq!(document.table_count(), 2);
        assert_eq!(document.table_by_name("second").unwrap().row_count(), 1);
        assert!(document.table_by_name("third").is_none());
    }

    #[test]
    fn test_table_names_are_unique() {
        let mut document = OdsDocument::new();
        document.add_table("dup").unwrap();
        assert!(matches!(
            document.add_table("dup"),
            Err(OdsError::DuplicateTable(name)) if name == "dup"
        ));
        assert_eq!(document.table_count(), 1);

        document.add_table("other").unwrap();
        assert!(matches!(
            document.rename_table(1, "dup"),
            Err(OdsError::DuplicateTable(_))
        ));
        document.rename_table(1, "other").unwrap();
        document.rename_table(1, "renamed").unwrap();
        assert_eq!(document.table(1).unwrap().name(), "renamed");
        assert!(document.rename_table(5, "x").is_err());
    }

    #[test]
    fn test_rename_behind_the_document() {
        let mut document = OdsDocument::new();
        document.add_table("a").unwrap();
        document.add_table("b").unwrap();
        document.check_table_names().unwrap();

        document.table_mut(1).unwrap().set_name("a").unwrap();
        assert!(matches!(
            document.check_table_names(),
            Err(OdsError::DuplicateTable(name)) if name == "a"
        ));
    }

    #[test]
    fn test_table_options_apply() {
        let options = TableOptions::new().with_max_columns(16);
        let mut document = OdsDocument::with_table_options(options);
        assert_eq!(document.add_table("t").unwrap().options().max_columns, 16);
    }

    #[test]
    fn test_active_table() {
        let mut document = OdsDocument::new();
        assert!(document.set_active_table(0).is_err());
        document.add_table("a").unwrap();
        document.add_table("b").unwrap();
        document.set_active_table(1).unwrap();
        assert_eq!(document.active_table(), 1);
    }

    #[test]
    fn test_extra_entries() {
        let mut document = OdsDocument::new();
        document
            .add_extra_file("Pictures/a.png", "image/png", vec![1, 2, 3])
            .unwrap();
        document.add_extra_dir("Thumbnails").unwrap();
        document
            .add_extra_object("Object 1", "application/vnd.oasis.opendocument.chart", Some("1.2"))
            .unwrap();

        let paths: Vec<&str> = document.extras().iter().map(ExtraEntry::path).collect();
        assert_eq!(paths, ["Pictures/a.png", "Thumbnails/", "Object 1/"]);

        assert!(matches!(
            document.add_extra_dir("Thumbnails/"),
            Err(OdsError::DuplicateEntry(_))
        ));
        assert!(matches!(
            document.add_extra_file("content.xml", "text/xml", Vec::new()),
            Err(OdsError::DuplicateEntry(_))
        ));
    }
}
