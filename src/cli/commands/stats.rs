use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{CommandResult, CommandSummary, FileStats, StatsSummary, helper::finish};
use crate::{
    core::{CatalogCounts, CheckContext, LoadedCatalog},
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let summary = summarize(&ctx.catalogs, args.json);
    let parse_errors = ctx.parse_errors.iter().cloned().map(Issue::ParseError).collect();

    Ok(finish(
        CommandSummary::Stats(summary),
        parse_errors,
        ctx.files_checked(),
    ))
}

pub fn summarize(catalogs: &[LoadedCatalog], json: bool) -> StatsSummary {
    let files: Vec<FileStats> = catalogs
        .iter()
        .map(|loaded| FileStats {
            path: loaded.path.clone(),
            language: loaded.language.clone(),
            counts: loaded.catalog.counts(),
        })
        .collect();

    let mut total = CatalogCounts::default();
    for file in &files {
        total.add(&file.counts);
    }

    StatsSummary { files, total, json }
}
