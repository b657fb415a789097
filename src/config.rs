use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_FONT_IDENTIFIER, DEFAULT_INTENTIONAL_MARKER, DEFAULT_KNOWN_FONTS,
    DEFAULT_LOOKUP_IDENTIFIER, DEFAULT_MANDATORY_MODULE_KEYS, DEFAULT_OPTIONAL_MODULE_KEYS,
    DEFAULT_PRIMARY_CATALOG_NAME, DEFAULT_SUPPRESSION_MARKER, DiscoveryOptions, ExtractorConfig,
    ModuleKeys, ScanOptions,
};

pub const CONFIG_FILE_NAME: &str = ".bundlecheckrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_top_dirs")]
    pub top_dirs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_filter: Option<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub scan_all_bundles: bool,
    #[serde(default = "default_primary_catalog_name")]
    pub primary_catalog_name: String,
    #[serde(default = "default_suppression_marker")]
    pub suppression_marker: String,
    #[serde(default = "default_intentional_marker")]
    pub intentional_marker: String,
    #[serde(default = "default_lookup_identifier")]
    pub lookup_identifier: String,
    #[serde(default = "default_font_identifier")]
    pub font_identifier: String,
    #[serde(default = "default_known_fonts")]
    pub known_fonts: Vec<String>,
    #[serde(default = "default_skip_trivial_strings")]
    pub skip_trivial_strings: bool,
    #[serde(default = "default_mandatory_module_keys")]
    pub mandatory_module_keys: Vec<String>,
    #[serde(default = "default_optional_module_keys")]
    pub optional_module_keys: Vec<String>,
    #[serde(default)]
    pub escape_non_ascii: bool,
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn default_top_dirs() -> Vec<String> {
    vec![".".to_string()]
}

fn default_primary_catalog_name() -> String {
    DEFAULT_PRIMARY_CATALOG_NAME.to_string()
}

fn default_suppression_marker() -> String {
    DEFAULT_SUPPRESSION_MARKER.to_string()
}

fn default_intentional_marker() -> String {
    DEFAULT_INTENTIONAL_MARKER.to_string()
}

fn default_lookup_identifier() -> String {
    DEFAULT_LOOKUP_IDENTIFIER.to_string()
}

fn default_font_identifier() -> String {
    DEFAULT_FONT_IDENTIFIER.to_string()
}

fn default_known_fonts() -> Vec<String> {
    to_strings(DEFAULT_KNOWN_FONTS)
}

fn default_skip_trivial_strings() -> bool {
    true
}

fn default_mandatory_module_keys() -> Vec<String> {
    to_strings(DEFAULT_MANDATORY_MODULE_KEYS)
}

fn default_optional_module_keys() -> Vec<String> {
    to_strings(DEFAULT_OPTIONAL_MODULE_KEYS)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_dirs: default_top_dirs(),
            module_filter: None,
            ignores: Vec::new(),
            scan_all_bundles: false,
            primary_catalog_name: default_primary_catalog_name(),
            suppression_marker: default_suppression_marker(),
            intentional_marker: default_intentional_marker(),
            lookup_identifier: default_lookup_identifier(),
            font_identifier: default_font_identifier(),
            known_fonts: default_known_fonts(),
            skip_trivial_strings: default_skip_trivial_strings(),
            mandatory_module_keys: default_mandatory_module_keys(),
            optional_module_keys: default_optional_module_keys(),
            escape_non_ascii: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid `ignores` glob patterns or an empty
    /// primary catalog name.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.primary_catalog_name.trim().is_empty() {
            bail!("'primaryCatalogName' must not be empty");
        }

        if self.top_dirs.is_empty() {
            bail!("'topDirs' must list at least one directory");
        }

        Ok(())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extractor: ExtractorConfig {
                suppression_marker: self.suppression_marker.clone(),
                lookup_identifier: self.lookup_identifier.clone(),
                font_identifier: self.font_identifier.clone(),
                known_fonts: self.known_fonts.clone(),
                skip_trivial: self.skip_trivial_strings,
            },
            intentional_marker: self.intentional_marker.clone(),
            primary_catalog_name: self.primary_catalog_name.clone(),
            module_keys: ModuleKeys {
                mandatory: self.mandatory_module_keys.clone(),
                optional: self.optional_module_keys.clone(),
            },
        }
    }

    pub fn discovery_options(&self, verbose: bool) -> DiscoveryOptions {
        DiscoveryOptions {
            top_dirs: self.top_dirs.clone(),
            module_filter: self.module_filter.clone(),
            ignores: self.ignores.clone(),
            scan_all_bundles: self.scan_all_bundles,
            primary_catalog_name: self.primary_catalog_name.clone(),
            verbose,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
