use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary, context::ScanContext, helper::finish};
use crate::{
    cli::args::CheckCommand,
    core::{
        baseline::{compare_to_baseline, load_baseline},
        scan,
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let report = scan(&ctx.groups, &ctx.scan_options());

    let regressions = match &cmd.baseline {
        Some(path) => {
            let expected = load_baseline(path)?;
            Some(compare_to_baseline(&report, &expected))
        }
        None => None,
    };

    // With a baseline only regressions fail the run.
    let error_count = match &regressions {
        Some(regressions) => regressions.len(),
        None => report.error_count(),
    };

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            root: ctx.root,
            report,
            regressions,
        }),
        error_count,
        ctx.skipped_count,
    ))
}
