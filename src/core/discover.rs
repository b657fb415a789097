//! Group discovery on disk.
//!
//! Every child directory of a configured top directory is a candidate
//! module: a NetBeans module when its `manifest.mf` declares
//! `OpenIDE-Module`, otherwise a Maven project when it has a `pom.xml`.
//! Files under the module's source roots are classified into packages.

use std::{
    fs,
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

use colored::Colorize;
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

use crate::core::{
    GroupInput, GroupMetadata, ModuleCatalogRef, ReferenceSet, SourceFile, TranslatedFile,
    layer::load_layer,
    manifest::{MANIFEST_FILE_NAME, Manifest},
    options::DEFAULT_PRIMARY_CATALOG_NAME,
};

const NETBEANS_SOURCE_ROOT: &str = "src";
const MAVEN_SOURCE_ROOTS: &[&str] = &["src/main/java", "src/main/resources"];
const MAVEN_PROJECT_FILE: &str = "pom.xml";
const FORM_EXTENSION: &str = "form";

/// `Bundle_ja.properties`, `Messages_zh_CN.properties`.
static TRANSLATED_CATALOG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<base>[^_]+)_(?P<locale>[A-Za-z]{2}(?:_[A-Za-z]{2})?)\.properties$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Directories (relative to the root) whose children are modules.
    pub top_dirs: Vec<String>,
    /// Only modules whose directory name contains this substring.
    pub module_filter: Option<String>,
    /// Glob patterns, matched against paths relative to the source root.
    pub ignores: Vec<String>,
    /// Also verify catalogs other than the primary one.
    pub scan_all_bundles: bool,
    pub primary_catalog_name: String,
    pub verbose: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            top_dirs: vec![".".to_string()],
            module_filter: None,
            ignores: Vec::new(),
            scan_all_bundles: false,
            primary_catalog_name: DEFAULT_PRIMARY_CATALOG_NAME.to_string(),
            verbose: false,
        }
    }
}

/// Result of discovering groups.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Groups sorted by identity.
    pub groups: Vec<GroupInput>,
    pub skipped_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModuleKind {
    NetBeans,
    Maven,
}

/// What a file under a source root is.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FileRole {
    Source,
    Primary,
    Translated { base_name: String, locale: String },
    Secondary,
}

fn classify(file_name: &str, primary_catalog_name: &str) -> Option<FileRole> {
    if file_name.ends_with(".java") {
        return Some(FileRole::Source);
    }
    if file_name == primary_catalog_name {
        return Some(FileRole::Primary);
    }
    if let Some(caps) = TRANSLATED_CATALOG_REGEX.captures(file_name) {
        return Some(FileRole::Translated {
            base_name: caps["base"].to_string(),
            locale: caps["locale"].to_string(),
        });
    }
    file_name
        .ends_with(".properties")
        .then_some(FileRole::Secondary)
}

/// `/`-separated form of a relative path, dropping `.` components.
fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn detect_module(dir: &Path) -> Option<(ModuleKind, Option<Manifest>)> {
    let manifest_path = dir.join(MANIFEST_FILE_NAME);
    if manifest_path.is_file()
        && let Ok(manifest) = Manifest::load(&manifest_path)
        && manifest.is_module()
    {
        return Some((ModuleKind::NetBeans, Some(manifest)));
    }
    dir.join(MAVEN_PROJECT_FILE)
        .is_file()
        .then_some((ModuleKind::Maven, None))
}

fn compile_ignores(ignores: &[String], verbose: bool) -> Vec<Pattern> {
    ignores
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect()
}

/// Find every module under the configured top directories of `root`.
pub fn discover_groups(root: &Path, options: &DiscoveryOptions) -> Discovery {
    let ignores = compile_ignores(&options.ignores, options.verbose);
    let mut discovery = Discovery::default();

    for top_dir in &options.top_dirs {
        let top = root.join(top_dir);
        let children = match fs::read_dir(&top) {
            Ok(entries) => entries,
            Err(e) => {
                if options.verbose {
                    eprintln!(
                        "{} Cannot read top directory {}: {}",
                        "warning:".bold().yellow(),
                        top.display(),
                        e
                    );
                }
                continue;
            }
        };

        let mut module_dirs: Vec<PathBuf> = children
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_dir())
            .collect();
        module_dirs.sort();

        for dir in module_dirs {
            if let Some(filter) = options.module_filter.as_deref()
                && !dir
                    .file_name()
                    .is_some_and(|name| name.to_string_lossy().contains(filter))
            {
                continue;
            }
            let identity = to_slash_path(dir.strip_prefix(root).unwrap_or(&dir));
            let Some((kind, manifest)) = detect_module(&dir) else {
                continue;
            };
            if discovery.groups.iter().any(|g| g.identity == identity) {
                continue;
            }

            let group = build_group(
                &identity,
                &dir,
                kind,
                manifest.as_ref(),
                &ignores,
                options,
                &mut discovery.skipped_count,
            );
            discovery.groups.push(group);
        }
    }

    discovery.groups.sort_by(|a, b| a.identity.cmp(&b.identity));
    discovery
}

fn build_group(
    identity: &str,
    module_dir: &Path,
    kind: ModuleKind,
    manifest: Option<&Manifest>,
    ignores: &[Pattern],
    options: &DiscoveryOptions,
    skipped_count: &mut usize,
) -> GroupInput {
    let mut group = GroupInput::new(identity, module_dir);
    let source_roots: Vec<PathBuf> = match kind {
        ModuleKind::NetBeans => vec![module_dir.join(NETBEANS_SOURCE_ROOT)],
        ModuleKind::Maven => MAVEN_SOURCE_ROOTS
            .iter()
            .map(|r| module_dir.join(r))
            .collect(),
    };

    for source_root in &source_roots {
        if source_root.is_dir() {
            collect_files(&mut group, source_root, ignores, options, skipped_count);
        }
    }

    if let Some(manifest) = manifest {
        group.metadata = manifest_metadata(manifest, module_dir, &source_roots[0]);
    }

    group
}

fn collect_files(
    group: &mut GroupInput,
    source_root: &Path,
    ignores: &[Pattern],
    options: &DiscoveryOptions,
    skipped_count: &mut usize,
) {
    for entry in WalkDir::new(source_root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                *skipped_count += 1;
                if options.verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(source_root).unwrap_or(path);
        let relative_str = to_slash_path(relative);
        if ignores.iter().any(|p| p.matches(&relative_str)) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let Some(role) = classify(&file_name, &options.primary_catalog_name) else {
            continue;
        };

        let sub_path = relative.parent().map(to_slash_path).unwrap_or_default();
        let dir = path.parent().unwrap_or(source_root).to_path_buf();
        let package = group.package_mut(&sub_path, &dir);

        match role {
            FileRole::Source => package.sources.push(SourceFile {
                path: path.to_path_buf(),
                generated: path.with_extension(FORM_EXTENSION).is_file(),
            }),
            FileRole::Primary if package.primary.is_none() => {
                // New translations go next to the primary catalog.
                package.dir = dir;
                package.primary = Some(path.to_path_buf());
            }
            FileRole::Primary => {
                // Same package under a second source root.
                package.secondary.push(path.to_path_buf());
            }
            FileRole::Translated { base_name, locale } => {
                package.translated.push(TranslatedFile {
                    path: path.to_path_buf(),
                    base_name,
                    locale,
                });
            }
            FileRole::Secondary if options.scan_all_bundles => {
                package.secondary.push(path.to_path_buf());
            }
            FileRole::Secondary => {}
        }
    }
}

fn manifest_metadata(manifest: &Manifest, module_dir: &Path, source_root: &Path) -> GroupMetadata {
    let declared_in = module_dir.join(MANIFEST_FILE_NAME);

    let module_catalog = manifest
        .localizing_bundle_package()
        .map(|sub_path| ModuleCatalogRef {
            declared_in: declared_in.to_string_lossy().into_owned(),
            sub_path,
        });

    let references = manifest.layer().map(|layer| {
        let path = source_root.join(layer);
        if !path.is_file() {
            return ReferenceSet::Missing {
                declared: layer.to_string(),
            };
        }
        let file = path.to_string_lossy().into_owned();
        match load_layer(&path) {
            Ok(entries) => ReferenceSet::Loaded { file, entries },
            Err(e) => ReferenceSet::Unreadable {
                file,
                error: format!("{:#}", e),
            },
        }
    });

    GroupMetadata {
        module_catalog,
        references,
    }
}
