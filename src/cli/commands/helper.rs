use super::{CommandResult, CommandSummary};

pub fn finish(summary: CommandSummary, error_count: usize, skipped_count: usize) -> CommandResult {
    // Only `check` turns problems into a failing exit status.
    let exit_on_errors = matches!(summary, CommandSummary::Check(_));

    CommandResult {
        summary,
        error_count,
        exit_on_errors,
        skipped_count,
    }
}
