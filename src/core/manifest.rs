//! Module manifest (`manifest.mf`) reader.
//!
//! Only the main section matters: `Name: value` attributes up to the first
//! blank line, where a line starting with a single space continues the
//! previous value.

use std::path::Path;

use anyhow::Result;
use indexmap::IndexMap;

use crate::core::parsers::read_text;

pub const MANIFEST_FILE_NAME: &str = "manifest.mf";
pub const MODULE_ATTRIBUTE: &str = "OpenIDE-Module";
pub const LOCALIZING_BUNDLE_ATTRIBUTE: &str = "OpenIDE-Module-Localizing-Bundle";
pub const LAYER_ATTRIBUTE: &str = "OpenIDE-Module-Layer";

/// Main-section attributes of a manifest, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    attributes: IndexMap<String, String>,
}

impl Manifest {
    pub fn parse(content: &str) -> Self {
        let mut attributes: IndexMap<String, String> = IndexMap::new();
        let mut last: Option<String> = None;

        for line in content.lines() {
            if line.trim().is_empty() {
                break;
            }
            if let Some(continued) = line.strip_prefix(' ') {
                if let Some(name) = &last
                    && let Some(value) = attributes.get_mut(name)
                {
                    value.push_str(continued);
                }
                continue;
            }
            if let Some((name, value)) = line.split_once(':') {
                let name = name.trim().to_string();
                attributes.insert(name.clone(), value.trim_start().to_string());
                last = Some(name);
            }
        }

        Self { attributes }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::parse(&read_text(path)?))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.trim_end())
    }

    /// The manifest declares a NetBeans module.
    pub fn is_module(&self) -> bool {
        self.get(MODULE_ATTRIBUTE).is_some_and(|v| !v.is_empty())
    }

    /// Package of the module's localizing bundle
    /// (`org/example/Bundle.properties` → `org/example`).
    pub fn localizing_bundle_package(&self) -> Option<String> {
        let bundle = self.get(LOCALIZING_BUNDLE_ATTRIBUTE)?;
        let package = match bundle.rfind('/') {
            Some(idx) => &bundle[..idx],
            None => "",
        };
        Some(package.to_string())
    }

    /// Layer file path relative to the source root.
    pub fn layer(&self) -> Option<&str> {
        self.get(LAYER_ATTRIBUTE).filter(|v| !v.is_empty())
    }
}
