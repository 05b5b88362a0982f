//! Style registry: named, deduplicated styles per family

use std::sync::Arc;

use ahash::AHashMap;

use super::{
    MasterPageStyle, PageLayoutStyle, Style, StyleFamily, StyleName, TableCellStyle,
    TableColumnStyle, TableRowStyle, TableStyle, DEFAULT_CELL_STYLE, DEFAULT_COLUMN_STYLE,
    DEFAULT_MASTER_PAGE, DEFAULT_PAGE_LAYOUT, DEFAULT_ROW_STYLE, DEFAULT_TABLE_STYLE,
};
use crate::error::{Error, Result};

/// How [`StyleRegistry::register`] treats an existing name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterMode {
    /// Fail with [`Error::StyleExists`] if the name is taken
    Create,
    /// Fail with [`Error::StyleNotFound`] if the name is free
    Update,
    /// Create or replace
    #[default]
    CreateOrUpdate,
}

/// Where a style is written in the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// `office:automatic-styles` of `content.xml`
    ContentAutomatic,
    /// `office:styles` of `styles.xml`
    Common,
    /// `office:automatic-styles` of `styles.xml`
    StylesAutomatic,
    /// `office:master-styles` of `styles.xml`
    Master,
}

impl Placement {
    fn for_style(style: &Style, generated: bool) -> Self {
        match style.family() {
            StyleFamily::TableCell if generated => Placement::ContentAutomatic,
            StyleFamily::TableCell | StyleFamily::Text | StyleFamily::Data => Placement::Common,
            StyleFamily::TableColumn | StyleFamily::TableRow | StyleFamily::Table => {
                Placement::ContentAutomatic
            }
            StyleFamily::PageLayout => Placement::StylesAutomatic,
            StyleFamily::MasterPage => Placement::Master,
        }
    }
}

#[derive(Debug)]
struct Entry {
    name: Arc<str>,
    style: Style,
    placement: Placement,
    in_content: bool,
}

/// Key for style lookup (hash-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StyleKey(u64);

impl StyleKey {
    fn from_style(style: &Style) -> Self {
        use std::hash::{Hash, Hasher};
        let mut hasher = ahash::AHasher::default();
        style.hash(&mut hasher);
        StyleKey(hasher.finish())
    }
}

#[derive(Debug, Default)]
struct FamilyStyles {
    entries: Vec<Entry>,
    by_name: AHashMap<Arc<str>, usize>,
    by_content: AHashMap<StyleKey, usize>,
    counter: u32,
}

impl FamilyStyles {
    fn find_same(&self, style: &Style) -> Option<usize> {
        let idx = *self.by_content.get(&StyleKey::from_style(style))?;
        // Verify it's actually the same (hash collision check)
        (self.entries[idx].style == *style).then_some(idx)
    }
}

/// Registry of every style of a document
///
/// Styles are grouped by [`StyleFamily`]; names are unique per family.
/// The built-in defaults (`Default`, `co1`, `ro1`, `ta1`, `pm1`,
/// `DefaultMasterPage`) are registered on creation.
///
/// Content styles (columns, rows, tables and generated cell styles) are
/// written once into `content.xml`. A content style registered after that
/// point is written into `styles.xml` instead.
#[derive(Debug)]
pub struct StyleRegistry {
    families: [FamilyStyles; 8],
    content_written: bool,
}

fn slot(family: StyleFamily) -> usize {
    family as usize
}

impl StyleRegistry {
    /// Create a registry holding the default styles
    pub fn new() -> Self {
        let mut registry = Self {
            families: std::array::from_fn(|_| FamilyStyles::default()),
            content_written: false,
        };
        let defaults: [(&str, Style); 6] = [
            (DEFAULT_PAGE_LAYOUT, PageLayoutStyle::new().into()),
            (DEFAULT_MASTER_PAGE, MasterPageStyle::new().into()),
            (DEFAULT_TABLE_STYLE, TableStyle::new().into()),
            (DEFAULT_COLUMN_STYLE, TableColumnStyle::new().into()),
            (DEFAULT_ROW_STYLE, TableRowStyle::new().into()),
            (DEFAULT_CELL_STYLE, TableCellStyle::new().into()),
        ];
        for (name, style) in defaults {
            let placement = Placement::for_style(&style, false);
            registry.insert(Arc::from(name), style, placement);
        }
        registry
    }

    /// Register `style` under `name`
    ///
    /// Styles the new style refers to (parent, data style, master page,
    /// page layout) must already be registered.
    pub fn register(
        &mut self,
        name: &str,
        style: impl Into<Style>,
        mode: RegisterMode,
    ) -> Result<StyleName> {
        let style = style.into();
        if name.is_empty() {
            return Err(Error::other("style name must not be empty"));
        }
        self.check_references(&style)?;

        let family = style.family();
        let existing = self.families[slot(family)].by_name.get(name).copied();
        match (existing, mode) {
            (Some(_), RegisterMode::Create) => Err(Error::StyleExists {
                family,
                name: name.to_string(),
            }),
            (None, RegisterMode::Update) => Err(Error::StyleNotFound {
                family,
                name: name.to_string(),
            }),
            (Some(idx), _) => Ok(self.replace(family, idx, style)),
            (None, _) => {
                let placement = Placement::for_style(&style, false);
                Ok(self.insert(Arc::from(name), style, placement))
            }
        }
    }

    /// Add a style under a generated name, reusing an identical style
    ///
    /// If a style with the same content is already registered in the family,
    /// its name is returned and nothing is added.
    pub fn add(&mut self, style: impl Into<Style>) -> Result<StyleName> {
        let style = style.into();
        self.check_references(&style)?;

        let family = style.family();
        let styles = &self.families[slot(family)];
        if let Some(idx) = styles.find_same(&style) {
            return Ok(StyleName::new(family, Arc::clone(&styles.entries[idx].name)));
        }

        let name = self.generate_name(family);
        let placement = Placement::for_style(&style, true);
        Ok(self.insert(Arc::from(name), style, placement))
    }

    /// Generate a free name `<prefix><n>` in `family`
    ///
    /// The counter never goes back, so a name is never generated twice.
    pub fn generate_name(&mut self, family: StyleFamily) -> String {
        let styles = &mut self.families[slot(family)];
        loop {
            styles.counter += 1;
            let candidate = format!("{}{}", family.prefix(), styles.counter);
            if !styles.by_name.contains_key(candidate.as_str()) {
                return candidate;
            }
        }
    }

    /// Look up a style by handle
    pub fn lookup(&self, name: &StyleName) -> Option<&Style> {
        self.get(name.family(), name.as_str())
    }

    /// Look up a style by family and name
    pub fn get(&self, family: StyleFamily, name: &str) -> Option<&Style> {
        let styles = &self.families[slot(family)];
        styles.by_name.get(name).map(|&idx| &styles.entries[idx].style)
    }

    /// Get a handle for a registered name
    pub fn name(&self, family: StyleFamily, name: &str) -> Result<StyleName> {
        let styles = &self.families[slot(family)];
        match styles.by_name.get_key_value(name) {
            Some((name, _)) => Ok(StyleName::new(family, Arc::clone(name))),
            None => Err(Error::StyleNotFound {
                family,
                name: name.to_string(),
            }),
        }
    }

    /// Check if the handle refers to a registered style
    pub fn contains(&self, name: &StyleName) -> bool {
        self.lookup(name).is_some()
    }

    /// Styles of a family in registration order
    pub fn styles(&self, family: StyleFamily) -> impl Iterator<Item = (&str, &Style)> {
        self.families[slot(family)]
            .entries
            .iter()
            .map(|e| (&*e.name, &e.style))
    }

    /// Number of styles in a family
    pub fn len(&self, family: StyleFamily) -> usize {
        self.families[slot(family)].entries.len()
    }

    /// Distinct font names used by registered styles, in first-use order
    pub fn font_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for family in [StyleFamily::Text, StyleFamily::TableCell] {
            for entry in &self.families[slot(family)].entries {
                if let Some(font) = entry.style.font_name() {
                    if !names.contains(&font) {
                        names.push(font);
                    }
                }
            }
        }
        names
    }

    /// Whether the `content.xml` automatic styles were already written
    pub fn is_content_written(&self) -> bool {
        self.content_written
    }

    /// Append the `content.xml` automatic styles not yet written
    ///
    /// Marks them written; later calls only see styles registered since.
    pub fn write_content_automatic_styles(&mut self, out: &mut String) {
        for family in StyleFamily::ALL {
            for entry in self.families[slot(family)].entries.iter_mut() {
                if entry.placement == Placement::ContentAutomatic && !entry.in_content {
                    entry.style.write_xml(&entry.name, out);
                    entry.in_content = true;
                }
            }
        }
        self.content_written = true;
    }

    /// Append the `office:styles` children of `styles.xml`
    ///
    /// Includes content styles that missed `content.xml`.
    pub fn write_common_styles(&self, out: &mut String) {
        self.write_matching(out, |e| {
            e.placement == Placement::Common
                || (e.placement == Placement::ContentAutomatic && !e.in_content)
        });
    }

    /// Append the page layouts (`office:automatic-styles` of `styles.xml`)
    pub fn write_page_layouts(&self, out: &mut String) {
        self.write_matching(out, |e| e.placement == Placement::StylesAutomatic);
    }

    /// Append the master pages (`office:master-styles` of `styles.xml`)
    pub fn write_master_pages(&self, out: &mut String) {
        self.write_matching(out, |e| e.placement == Placement::Master);
    }

    fn write_matching(&self, out: &mut String, filter: impl Fn(&Entry) -> bool) {
        for family in StyleFamily::ALL {
            for entry in self.families[slot(family)].entries.iter().filter(|e| filter(e)) {
                entry.style.write_xml(&entry.name, out);
            }
        }
    }

    fn check_references(&self, style: &Style) -> Result<()> {
        for (name, family) in style.references() {
            name.check_family(family)?;
            if !self.contains(name) {
                return Err(Error::StyleNotFound {
                    family,
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn insert(&mut self, name: Arc<str>, style: Style, placement: Placement) -> StyleName {
        let family = style.family();
        if placement == Placement::ContentAutomatic && self.content_written {
            log::warn!(
                "{} style {:?} registered after content.xml styles were written; writing it to styles.xml",
                family,
                &*name
            );
        }
        let key = StyleKey::from_style(&style);
        let styles = &mut self.families[slot(family)];
        let idx = styles.entries.len();
        styles.by_name.insert(Arc::clone(&name), idx);
        styles.by_content.entry(key).or_insert(idx);
        styles.entries.push(Entry {
            name: Arc::clone(&name),
            style,
            placement,
            in_content: false,
        });
        StyleName::new(family, name)
    }

    fn replace(&mut self, family: StyleFamily, idx: usize, style: Style) -> StyleName {
        let styles = &mut self.families[slot(family)];
        let old_key = StyleKey::from_style(&styles.entries[idx].style);
        if styles.by_content.get(&old_key) == Some(&idx) {
            styles.by_content.remove(&old_key);
        }
        styles
            .by_content
            .entry(StyleKey::from_style(&style))
            .or_insert(idx);

        let entry = &mut styles.entries[idx];
        if entry.in_content {
            log::warn!(
                "{} style {:?} updated after it was written to content.xml",
                family,
                &*entry.name
            );
        }
        entry.style = style;
        StyleName::new(family, Arc::clone(&entry.name))
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
