//! Report formatting and printing.
//!
//! Findings are listed per module, grouped under the heading of their kind.
//! Paths are shown relative to the repository root. Reports go to stdout,
//! diagnostics (catalog warnings, unmatched translations) to stderr.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, ExportSummary, ImportSummary, InitSummary,
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::GroupReport,
    findings::{FindingKind, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, verbose, out, err),
        CommandSummary::Export(summary) => print_export(summary, out),
        CommandSummary::Import(summary) => print_import(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out),
    }

    print_skipped_warning_to(result.skipped_count, verbose, err);
}

/// Print a warning about paths discovery could not access.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) skipped due to access errors (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn relative_path(root: &Path, file: &str) -> String {
    Path::new(file)
        .strip_prefix(root)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| file.to_string())
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

// ============================================================
// check
// ============================================================

fn print_check<W: Write, E: Write>(
    summary: &CheckSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    let report = &summary.report;

    for group in &report.groups {
        for warning in &group.warnings {
            let _ = writeln!(
                err,
                "{} {}:{}: incorrect key: {}",
                "warning:".bold().yellow(),
                relative_path(&summary.root, &warning.file_path),
                warning.line,
                warning.text
            );
        }

        if group.problem_count() > 0 || verbose {
            print_group(group, &summary.root, out);
        }
    }

    print_totals(summary, out);
}

fn print_group<W: Write>(group: &GroupReport, root: &Path, out: &mut W) {
    let counts = &group.counts;
    let _ = writeln!(
        out,
        "{}: Scanned {} Java sources, {} primary and {} translated resource bundles. Found {} potential problems.",
        group.identity.bold(),
        counts.sources,
        counts.primary_catalogs + counts.secondary_catalogs,
        counts.translated_catalogs,
        group.problem_count()
    );

    for kind in FindingKind::ALL {
        let mut findings = group.findings.iter().filter(|f| f.kind == kind).peekable();
        if findings.peek().is_none() {
            continue;
        }

        let severity = match kind.severity() {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };
        let _ = writeln!(
            out,
            "  {}: {}  {}",
            severity,
            kind.description(),
            kind.to_string().dimmed().cyan()
        );

        for finding in findings {
            let _ = writeln!(
                out,
                "    {} {}:{}: {}",
                "-->".blue(),
                relative_path(root, &finding.file),
                finding.line,
                finding.message
            );
        }
    }

    let _ = writeln!(out);
}

fn print_totals<W: Write>(summary: &CheckSummary, out: &mut W) {
    let report = &summary.report;

    for group in report.groups.iter().filter(|g| g.problem_count() > 0) {
        let _ = writeln!(out, "{} = {}", group.identity, group.problem_count());
    }
    let total = report.total_problems();
    let _ = writeln!(out, "total={}", total);

    if let Some(regressions) = &summary.regressions {
        for regression in regressions {
            let _ = writeln!(out, "{} {}", FAILURE_MARK.red(), regression);
        }
        if regressions.is_empty() {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                "No module exceeds its baseline".green()
            );
        }
        return;
    }

    if total == 0 {
        let modules = report.groups.len();
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} - no problems found",
                modules,
                plural(modules, "module", "modules")
            )
            .green()
        );
    } else {
        let errors = report.error_count();
        let warnings = total - errors;
        let _ = writeln!(
            out,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total,
            errors,
            plural(errors, "error", "errors").red(),
            warnings,
            plural(warnings, "warning", "warnings").yellow()
        );
    }
}

// ============================================================
// export / import / init
// ============================================================

fn print_export<W: Write>(summary: &ExportSummary, out: &mut W) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} {} from {} {} to {}",
            summary.row_count,
            plural(summary.row_count, "entry", "entries"),
            summary.group_count,
            plural(summary.group_count, "module", "modules"),
            summary.output.display()
        )
        .green()
    );
}

fn print_import<W: Write, E: Write>(summary: &ImportSummary, out: &mut W, err: &mut E) {
    for unmatched in summary.unmatched() {
        let _ = writeln!(
            err,
            "{} {} translation(s) for {}/{} match no scanned package",
            "warning:".bold().yellow(),
            unmatched.keys,
            unmatched.group,
            unmatched.sub_path
        );
    }

    let catalogs = &summary.plan.catalogs;
    for catalog in catalogs {
        let _ = writeln!(
            out,
            "  {} {} ({} {})",
            catalog.action.as_str().cyan(),
            relative_path(&summary.root, &catalog.path.to_string_lossy()),
            catalog.entry_count(),
            plural(catalog.entry_count(), "key", "keys")
        );
    }

    if catalogs.is_empty() {
        let _ = writeln!(out, "No translations to import.");
    } else if summary.is_apply {
        let _ = writeln!(
            out,
            "{} {} bundle(s).",
            "Wrote".green().bold(),
            summary.applied_count
        );
    } else {
        let _ = writeln!(
            out,
            "{} {} bundle(s).",
            "Would write".yellow().bold(),
            catalogs.len()
        );
        let _ = writeln!(out, "Run with {} to write these bundles.", "--apply".cyan());
    }
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
