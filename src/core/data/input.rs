use std::{collections::BTreeMap, path::PathBuf};

/// A source file handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// A form file with the same base name exists next to the source.
    pub generated: bool,
}

/// A translated catalog handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedFile {
    pub path: PathBuf,
    pub base_name: String,
    pub locale: String,
}

/// Everything belonging to one package (directory) of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInput {
    /// Package path relative to the source root, `/`-separated
    /// (e.g. `org/example/ui`); empty for the default package.
    pub sub_path: String,
    /// Directory new translated catalogs are written to.
    pub dir: PathBuf,
    pub primary: Option<PathBuf>,
    pub secondary: Vec<PathBuf>,
    pub translated: Vec<TranslatedFile>,
    pub sources: Vec<SourceFile>,
}

impl PackageInput {
    pub fn new(sub_path: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            sub_path: sub_path.into(),
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// Existing translated catalog for `locale` next to the primary catalog.
    pub fn translated_for(&self, base_name: &str, locale: &str) -> Option<&TranslatedFile> {
        self.translated
            .iter()
            .find(|t| t.locale == locale && t.base_name == base_name)
    }
}

/// The package holding the module's own catalog, as declared in its manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCatalogRef {
    /// File the declaration came from (reported when the package is missing).
    pub declared_in: String,
    pub sub_path: String,
}

/// A `(package, key)` pair some metadata file expects to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReference {
    pub sub_path: String,
    pub key: String,
    /// Where the reference comes from, for the finding message.
    pub origin: String,
}

/// Outcome of loading the group's reference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSet {
    /// Declared in metadata but not present on disk.
    Missing { declared: String },
    /// Present but could not be read or parsed.
    Unreadable { file: String, error: String },
    Loaded {
        file: String,
        entries: Vec<CatalogReference>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMetadata {
    pub module_catalog: Option<ModuleCatalogRef>,
    pub references: Option<ReferenceSet>,
}

/// One group (module) as supplied by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInput {
    /// Stable relative path from the repository root, `/`-separated.
    pub identity: String,
    pub root: PathBuf,
    /// Packages keyed (and therefore ordered) by sub-path.
    pub packages: BTreeMap<String, PackageInput>,
    pub metadata: GroupMetadata,
}

impl GroupInput {
    pub fn new(identity: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            identity: identity.into(),
            root: root.into(),
            packages: BTreeMap::new(),
            metadata: GroupMetadata::default(),
        }
    }

    /// Get or create the package for `sub_path`.
    pub fn package_mut(&mut self, sub_path: &str, dir: impl Into<PathBuf>) -> &mut PackageInput {
        self.packages
            .entry(sub_path.to_string())
            .or_insert_with(|| PackageInput::new(sub_path, dir))
    }
}
