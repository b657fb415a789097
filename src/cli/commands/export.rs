use anyhow::Result;

use super::{CommandResult, CommandSummary, ExportSummary, context::ScanContext, helper::finish};
use crate::{
    cli::args::ExportCommand,
    core::{
        parse_groups,
        translation::{export_rows, write_table},
    },
};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let options = ctx.scan_options();

    let groups = parse_groups(&ctx.groups, &options);
    let rows = export_rows(&groups, &cmd.language, options.primary_catalog_stem());
    write_table(&cmd.output, &rows)?;

    Ok(finish(
        CommandSummary::Export(ExportSummary {
            output: cmd.output,
            row_count: rows.len(),
            group_count: groups.len(),
        }),
        0,
        ctx.skipped_count,
    ))
}
