use std::path::Path;

use anyhow::Result;

use super::{CommandResult, CommandSummary, ImportSummary, context::ScanContext, helper::finish};
use crate::{
    cli::args::ImportCommand,
    core::translation::{ImportOptions, plan_import, read_table},
};

pub fn import(cmd: ImportCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let options = ctx.scan_options();

    let table = read_table(&cmd.input)?;
    let header = catalog_header(&cmd.language, &cmd.input);
    let plan = plan_import(
        &ctx.groups,
        &table,
        &ImportOptions {
            locale: &cmd.language,
            header: &header,
            primary_stem: options.primary_catalog_stem(),
            escape_non_ascii: ctx.config.escape_non_ascii,
        },
    );

    let applied_count = if cmd.apply { plan.apply()? } else { 0 };

    Ok(finish(
        CommandSummary::Import(ImportSummary {
            root: ctx.root,
            plan,
            is_apply: cmd.apply,
            applied_count,
        }),
        0,
        ctx.skipped_count,
    ))
}

/// Comment lines written at the top of every regenerated bundle.
fn catalog_header(language: &str, input: &Path) -> Vec<String> {
    let source = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    vec![
        format!("# Translation for language '{}'.", language),
        format!(
            "# Generated by bundlecheck from {}; edit the table and import again instead of editing this file.",
            source
        ),
    ]
}
