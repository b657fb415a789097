//! Per-group parsing and verification.
//!
//! A group is parsed in two halves that run concurrently (catalogs and
//! sources), then verified sequentially: the group owns its catalogs
//! exclusively, so usage counting needs no locking.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        CatalogWarning, GroupInput, GroupMetadata, PackageCatalogs, PackageInput, ScanOptions,
        SourceModel, TranslatedCatalog,
        extract::extract_source,
        parsers::{catalog::parse_catalog_file, java::JavaTokenizer},
        verify::cross_reference,
    },
    findings::{Finding, FindingKind},
    rules::{
        check_missing_keys, check_module_catalog, check_redundant_suppressions, check_references,
        check_unused_entries,
    },
};

/// File counters printed in the per-group summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupCounts {
    pub sources: usize,
    pub primary_catalogs: usize,
    pub secondary_catalogs: usize,
    pub translated_catalogs: usize,
}

/// A group with every file parsed, ready for verification or export.
#[derive(Debug)]
pub struct ParsedGroup {
    pub identity: String,
    pub root: PathBuf,
    /// Catalogs keyed by package sub-path.
    pub catalogs: BTreeMap<String, PackageCatalogs>,
    /// Extracted sources keyed by package sub-path, sorted by path.
    pub sources: BTreeMap<String, Vec<SourceModel>>,
    pub metadata: GroupMetadata,
    pub counts: GroupCounts,
    /// Files that could not be read.
    pub read_failures: Vec<Finding>,
}

/// Verification result for one group.
#[derive(Debug, Clone)]
pub struct GroupReport {
    pub identity: String,
    pub root: PathBuf,
    pub findings: Vec<Finding>,
    pub counts: GroupCounts,
    pub warnings: Vec<CatalogWarning>,
}

impl GroupReport {
    pub fn problem_count(&self) -> usize {
        self.findings.len()
    }

    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity() == crate::findings::Severity::Error)
    }

    pub fn count_by_kind(&self) -> BTreeMap<FindingKind, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.kind).or_default() += 1;
        }
        counts
    }

    pub fn count_by_file(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.file.as_str()).or_default() += 1;
        }
        counts
    }
}

#[derive(Default)]
struct LoadedCatalogs {
    catalogs: BTreeMap<String, PackageCatalogs>,
    failures: Vec<Finding>,
}

#[derive(Default)]
struct LoadedSources {
    sources: BTreeMap<String, Vec<SourceModel>>,
    failures: Vec<Finding>,
}

fn unreadable(path: &Path, err: anyhow::Error) -> Finding {
    Finding::new(
        FindingKind::UnreadableFile,
        path.to_string_lossy(),
        1,
        format!("{:#}", err),
    )
}

impl ParsedGroup {
    /// Parse every catalog and source of `input`.
    ///
    /// Unreadable files become `UnreadableFile` findings; the rest of the
    /// group is still parsed.
    pub fn parse(input: &GroupInput, options: &ScanOptions) -> Self {
        let (loaded_catalogs, loaded_sources) = rayon::join(
            || load_catalogs(input.packages.values(), options),
            || load_sources(input.packages.values(), options),
        );

        let mut counts = GroupCounts::default();
        for package in loaded_catalogs.catalogs.values() {
            counts.primary_catalogs += usize::from(package.primary.is_some());
            counts.secondary_catalogs += package.secondary.len();
            counts.translated_catalogs += package.translated.len();
        }
        counts.sources = loaded_sources.sources.values().map(Vec::len).sum();

        let mut read_failures = loaded_catalogs.failures;
        read_failures.extend(loaded_sources.failures);

        Self {
            identity: input.identity.clone(),
            root: input.root.clone(),
            catalogs: loaded_catalogs.catalogs,
            sources: loaded_sources.sources,
            metadata: input.metadata.clone(),
            counts,
            read_failures,
        }
    }

    /// Cross-reference sources with catalogs and run every rule.
    ///
    /// Findings are ordered: read failures, module catalog, layer
    /// references, then per package (sorted by sub-path) its sources,
    /// primary catalog and secondary catalogs.
    pub fn verify(mut self, options: &ScanOptions) -> GroupReport {
        for (sub_path, sources) in &mut self.sources {
            let catalogs = self.catalogs.entry(sub_path.clone()).or_default();
            cross_reference(sources, catalogs);
        }

        let mut findings = std::mem::take(&mut self.read_failures);

        if let Some(module_catalog) = &self.metadata.module_catalog {
            let catalog = self
                .catalogs
                .get_mut(&module_catalog.sub_path)
                .and_then(|package| package.primary.as_mut());
            findings.extend(check_module_catalog(
                module_catalog,
                catalog,
                &options.module_keys,
            ));
        }

        if let Some(references) = &self.metadata.references {
            findings.extend(check_references(references, &mut self.catalogs));
        }

        for (sub_path, catalogs) in &self.catalogs {
            if let Some(sources) = self.sources.get(sub_path) {
                for source in sources {
                    findings.extend(check_missing_keys(source));
                    findings.extend(check_redundant_suppressions(source));
                }
            }
            if let Some(primary) = &catalogs.primary {
                findings.extend(check_unused_entries(primary));
            }
            for secondary in &catalogs.secondary {
                findings.extend(check_unused_entries(secondary));
            }
        }

        let warnings = self
            .catalogs
            .values()
            .flat_map(|package| {
                package
                    .primary
                    .iter()
                    .chain(package.secondary.iter())
                    .chain(package.translated.iter().map(|t| &t.catalog))
            })
            .flat_map(|catalog| catalog.warnings.iter().cloned())
            .collect();

        GroupReport {
            identity: self.identity,
            root: self.root,
            findings,
            counts: self.counts,
            warnings,
        }
    }
}

fn load_catalogs<'a>(
    packages: impl Iterator<Item = &'a PackageInput>,
    options: &ScanOptions,
) -> LoadedCatalogs {
    let marker = options.intentional_marker.as_str();
    let mut loaded = LoadedCatalogs::default();

    for package in packages {
        let mut catalogs = PackageCatalogs::default();

        if let Some(path) = &package.primary {
            match parse_catalog_file(path, marker) {
                Ok(catalog) => catalogs.primary = Some(catalog),
                Err(err) => loaded.failures.push(unreadable(path, err)),
            }
        }
        for path in &package.secondary {
            match parse_catalog_file(path, marker) {
                Ok(catalog) => catalogs.secondary.push(catalog),
                Err(err) => loaded.failures.push(unreadable(path, err)),
            }
        }
        for translated in &package.translated {
            match parse_catalog_file(&translated.path, marker) {
                Ok(catalog) => catalogs.translated.push(TranslatedCatalog {
                    locale: translated.locale.clone(),
                    base_name: translated.base_name.clone(),
                    catalog,
                }),
                Err(err) => loaded.failures.push(unreadable(&translated.path, err)),
            }
        }

        loaded.catalogs.insert(package.sub_path.clone(), catalogs);
    }

    loaded
}

fn load_sources<'a>(
    packages: impl Iterator<Item = &'a PackageInput>,
    options: &ScanOptions,
) -> LoadedSources {
    let mut loaded = LoadedSources::default();

    for package in packages {
        let mut files: Vec<_> = package.sources.iter().collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let mut models = Vec::with_capacity(files.len());
        for file in files {
            match extract_source(&JavaTokenizer, &file.path, file.generated, &options.extractor) {
                Ok(model) => models.push(model),
                Err(err) => loaded.failures.push(unreadable(&file.path, err)),
            }
        }
        if !models.is_empty() {
            loaded.sources.insert(package.sub_path.clone(), models);
        }
    }

    loaded
}
