//! Writer configuration

/// Options for [`crate::OdsFileWriter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Deflate level for compressed entries; `None` uses the zip default
    pub compression_level: Option<i64>,
    /// Value of `meta:generator` in `meta.xml`
    pub generator: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            compression_level: None,
            generator: format!("odsgen/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl WriterOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deflate level (0-9)
    pub fn with_compression_level(mut self, level: i64) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Set the generator recorded in `meta.xml`
    pub fn with_generator<S: Into<String>>(mut self, generator: S) -> Self {
        self.generator = generator.into();
        self
    }
}
