use std::path::Path;

use anyhow::{Ok, Result};
use tracing::debug;

use super::super::args::CleanCommand;
use super::helper::finish;
use super::{CleanFile, CleanSummary, CommandResult, CommandSummary, RemovedMessage};
use crate::{
    core::{CheckContext, LoadedCatalog, MessageKey, writer::write_ts_file},
    issues::Issue,
};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let mut ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let mut files = Vec::new();
    for loaded in &mut ctx.catalogs {
        let removed = inactive_messages(loaded);
        if removed.is_empty() {
            continue;
        }

        if apply {
            let count = loaded.catalog.drop_inactive();
            write_ts_file(Path::new(&loaded.path), &loaded.catalog)?;
            debug!(path = %loaded.path, count, "rewrote catalog");
        }

        files.push(CleanFile {
            path: loaded.path.clone(),
            removed,
        });
    }

    let parse_errors = ctx.parse_errors.iter().cloned().map(Issue::ParseError).collect();

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            files,
            is_apply: apply,
        }),
        parse_errors,
        ctx.files_checked(),
    ))
}

/// Vanished and obsolete messages of a catalog, in file order.
pub fn inactive_messages(loaded: &LoadedCatalog) -> Vec<RemovedMessage> {
    loaded
        .catalog
        .messages()
        .filter(|(_, msg)| !msg.is_active())
        .map(|(context, message)| RemovedMessage {
            key: MessageKey::of(context, message),
            state: message.state(),
            line: message.line,
        })
        .collect()
}
