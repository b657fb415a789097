use indexmap::IndexMap;

/// One `key=value` entry of a resource bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    /// Value with continuation lines joined.
    pub value: String,
    /// Line of the `key=` line (1-indexed).
    pub line: usize,
    /// Preceded by a comment carrying the intentional marker (`# YESI18N`),
    /// so the entry is never reported as unused.
    pub intentional: bool,
    /// How many source literals (or module/layer references) hit this key.
    pub usage_count: usize,
}

impl CatalogEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
            intentional: false,
            usage_count: 0,
        }
    }

    pub fn is_possibly_unused(&self) -> bool {
        self.usage_count == 0 && !self.intentional
    }
}

/// A line that could not be parsed as `key=value`.
///
/// Recovered locally: the line is skipped and the warning is surfaced
/// to the caller instead of being counted as a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    pub file_path: String,
    pub line: usize,
    pub text: String,
}

impl std::fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: incorrect key: {}", self.file_path, self.line, self.text)
    }
}

/// A parsed resource bundle, keyed in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub file_path: String,
    pub entries: IndexMap<String, CatalogEntry>,
    pub warnings: Vec<CatalogWarning>,
}

impl Catalog {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            entries: IndexMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Insert an entry. A duplicate key replaces the earlier value but keeps
    /// its position.
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Record one usage of `key`. Returns false if the key is not defined.
    pub fn mark_used(&mut self, key: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.usage_count += 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A locale-specific catalog, e.g. `Bundle_ja.properties`.
#[derive(Debug, Clone)]
pub struct TranslatedCatalog {
    /// Locale code taken from the file name (`ja`, `zh_CN`).
    pub locale: String,
    /// File stem without the locale suffix (`Bundle`).
    pub base_name: String,
    pub catalog: Catalog,
}

/// The catalogs of one package, owned by a single group verification run.
#[derive(Debug, Clone, Default)]
pub struct PackageCatalogs {
    pub primary: Option<Catalog>,
    pub secondary: Vec<Catalog>,
    pub translated: Vec<TranslatedCatalog>,
}

impl PackageCatalogs {
    /// Record a usage of `key` in the primary and every secondary catalog.
    /// Returns true if any of them defines the key.
    pub fn mark_used(&mut self, key: &str) -> bool {
        let mut found = false;
        if let Some(primary) = &mut self.primary {
            found |= primary.mark_used(key);
        }
        for catalog in &mut self.secondary {
            found |= catalog.mark_used(key);
        }
        found
    }

    pub fn translated_for(&self, locale: &str) -> Option<&TranslatedCatalog> {
        self.translated.iter().find(|t| t.locale == locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_used_counts_every_hit() {
        let mut catalog = Catalog::new("Bundle.properties");
        catalog.insert(CatalogEntry::new("Key_correct", "Correct", 1));

        assert!(catalog.mark_used("Key_correct"));
        assert!(catalog.mark_used("Key_correct"));
        assert!(!catalog.mark_used("Key_missing"));

        let entry = catalog.get("Key_correct").unwrap();
        assert_eq!(entry.usage_count, 2);
        assert!(!entry.is_possibly_unused());
    }

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let mut catalog = Catalog::new("Bundle.properties");
        catalog.insert(CatalogEntry::new("a", "1", 1));
        catalog.insert(CatalogEntry::new("b", "2", 2));
        catalog.insert(CatalogEntry::new("a", "3", 3));

        let keys: Vec<&str> = catalog.entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(catalog.get("a").unwrap().value, "3");
        assert_eq!(catalog.get("a").unwrap().line, 3);
    }

    #[test]
    fn test_package_mark_used_hits_every_catalog() {
        let mut primary = Catalog::new("Bundle.properties");
        primary.insert(CatalogEntry::new("shared", "x", 1));
        let mut secondary = Catalog::new("Other.properties");
        secondary.insert(CatalogEntry::new("shared", "y", 1));
        secondary.insert(CatalogEntry::new("only_secondary", "z", 2));

        let mut catalogs = PackageCatalogs {
            primary: Some(primary),
            secondary: vec![secondary],
            translated: Vec::new(),
        };

        assert!(catalogs.mark_used("shared"));
        assert!(catalogs.mark_used("only_secondary"));
        assert!(!catalogs.mark_used("nowhere"));

        let primary = catalogs.primary.as_ref().unwrap();
        assert_eq!(primary.get("shared").unwrap().usage_count, 1);
        assert_eq!(catalogs.secondary[0].get("shared").unwrap().usage_count, 1);
    }

    #[test]
    fn test_intentional_entry_is_never_unused() {
        let mut entry = CatalogEntry::new("k", "v", 1);
        assert!(entry.is_possibly_unused());
        entry.intentional = true;
        assert!(!entry.is_possibly_unused());
    }
}
