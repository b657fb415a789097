use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{GroupInput, ScanOptions, discover_groups},
};

/// Configuration and discovered groups shared by the scanning commands.
pub struct ScanContext {
    pub config: Config,
    /// Canonical repository root; group identities are relative to it.
    pub root: PathBuf,
    pub groups: Vec<GroupInput>,
    pub skipped_count: usize,
}

impl ScanContext {
    /// Load the configuration, apply command line overrides and discover groups.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root = args
            .root
            .canonicalize()
            .with_context(|| format!("Invalid root directory: {}", args.root.display()))?;

        let config_result = load_config(&root)?;
        if args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(filter) = &args.module_filter {
            config.module_filter = Some(filter.clone());
        }
        if args.all_bundles {
            config.scan_all_bundles = true;
        }

        let discovery = discover_groups(&root, &config.discovery_options(args.verbose));

        if args.verbose {
            eprintln!("Note: Found {} module(s) to scan", discovery.groups.len());
        }

        Ok(Self {
            config,
            root,
            groups: discovery.groups,
            skipped_count: discovery.skipped_count,
        })
    }

    pub fn scan_options(&self) -> ScanOptions {
        self.config.scan_options()
    }
}
