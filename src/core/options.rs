//! Engine configuration constants.
//!
//! Every marker and heuristic list the scanner relies on lives here with its
//! default, so callers (usually `config::Config`) can override them.

pub const DEFAULT_SUPPRESSION_MARKER: &str = "NOI18N";
pub const DEFAULT_INTENTIONAL_MARKER: &str = "YESI18N";
pub const DEFAULT_LOOKUP_IDENTIFIER: &str = "NbBundle";
pub const DEFAULT_FONT_IDENTIFIER: &str = "Font";
pub const DEFAULT_KNOWN_FONTS: &[&str] = &["Tahoma", "Courier", "Arial", "Dialog"];
pub const DEFAULT_PRIMARY_CATALOG_NAME: &str = "Bundle.properties";
pub const DEFAULT_MANDATORY_MODULE_KEYS: &[&str] =
    &["OpenIDE-Module-Display-Category", "OpenIDE-Module-Name"];
pub const DEFAULT_OPTIONAL_MODULE_KEYS: &[&str] = &[
    "OpenIDE-Module-Long-Description",
    "OpenIDE-Module-Short-Description",
];

/// Settings for the string-literal extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Line-comment token exempting the line's literals (`// NOI18N`).
    pub suppression_marker: String,
    /// Identifier that introduces a bundle lookup call (`NbBundle.getMessage`).
    pub lookup_identifier: String,
    /// Identifier of the font constructor in generated UI code.
    pub font_identifier: String,
    /// Font family names ignored on a font-identifier line.
    pub known_fonts: Vec<String>,
    /// Drop literals whose trimmed text has at most one character.
    pub skip_trivial: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            suppression_marker: DEFAULT_SUPPRESSION_MARKER.to_string(),
            lookup_identifier: DEFAULT_LOOKUP_IDENTIFIER.to_string(),
            font_identifier: DEFAULT_FONT_IDENTIFIER.to_string(),
            known_fonts: DEFAULT_KNOWN_FONTS.iter().map(|s| s.to_string()).collect(),
            skip_trivial: true,
        }
    }
}

/// Keys every module catalog must (or may) define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleKeys {
    pub mandatory: Vec<String>,
    pub optional: Vec<String>,
}

impl Default for ModuleKeys {
    fn default() -> Self {
        Self {
            mandatory: DEFAULT_MANDATORY_MODULE_KEYS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            optional: DEFAULT_OPTIONAL_MODULE_KEYS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Options for one scan invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub extractor: ExtractorConfig,
    /// Catalog comment token marking an entry as intentionally unreferenced.
    pub intentional_marker: String,
    /// File name of the primary catalog in each package.
    pub primary_catalog_name: String,
    pub module_keys: ModuleKeys,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            intentional_marker: DEFAULT_INTENTIONAL_MARKER.to_string(),
            primary_catalog_name: DEFAULT_PRIMARY_CATALOG_NAME.to_string(),
            module_keys: ModuleKeys::default(),
        }
    }
}

impl ScanOptions {
    /// Primary catalog file name without extension (`Bundle`).
    pub fn primary_catalog_stem(&self) -> &str {
        self.primary_catalog_name
            .strip_suffix(".properties")
            .unwrap_or(&self.primary_catalog_name)
    }
}
