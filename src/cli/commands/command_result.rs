use std::path::PathBuf;

use crate::core::{
    ScanReport,
    baseline::Regression,
    translation::{ImportPlan, UnmatchedPackage},
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Export(ExportSummary),
    Import(ImportSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub root: PathBuf,
    pub report: ScanReport,
    /// Present when the check ran against a baseline file.
    pub regressions: Option<Vec<Regression>>,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub row_count: usize,
    pub group_count: usize,
}

#[derive(Debug)]
pub struct ImportSummary {
    pub root: PathBuf,
    pub plan: ImportPlan,
    pub is_apply: bool,
    pub applied_count: usize,
}

impl ImportSummary {
    pub fn unmatched(&self) -> &[UnmatchedPackage] {
        &self.plan.unmatched
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running bundlecheck commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// Paths skipped during discovery because they could not be accessed.
    pub skipped_count: usize,
}
