//! Scan orchestration across groups.
//!
//! Groups are independent, so they are parsed and verified in parallel and
//! merged afterwards. Reports are sorted by identity, which makes the output
//! independent of scheduling order.

use rayon::prelude::*;

use crate::{
    core::{
        GroupInput, ScanOptions,
        group::{GroupReport, ParsedGroup},
    },
    findings::Severity,
};

/// Result of verifying every group of a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Per-group reports, sorted by identity.
    pub groups: Vec<GroupReport>,
}

impl ScanReport {
    pub fn total_problems(&self) -> usize {
        self.groups.iter().map(GroupReport::problem_count).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.groups.iter().any(GroupReport::has_errors)
    }

    /// Number of error-severity findings across all groups.
    pub fn error_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|group| &group.findings)
            .filter(|finding| finding.severity() == Severity::Error)
            .count()
    }

    pub fn group(&self, identity: &str) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.identity == identity)
    }
}

/// Parse every group in parallel, sorted by identity.
pub fn parse_groups(inputs: &[GroupInput], options: &ScanOptions) -> Vec<ParsedGroup> {
    let mut groups: Vec<ParsedGroup> = inputs
        .par_iter()
        .map(|input| ParsedGroup::parse(input, options))
        .collect();
    groups.sort_by(|a, b| a.identity.cmp(&b.identity));
    groups
}

/// Parse and verify every group.
pub fn scan(inputs: &[GroupInput], options: &ScanOptions) -> ScanReport {
    let mut groups: Vec<GroupReport> = inputs
        .par_iter()
        .map(|input| ParsedGroup::parse(input, options).verify(options))
        .collect();
    groups.sort_by(|a, b| a.identity.cmp(&b.identity));
    ScanReport { groups }
}
