//! Unfinished translation rule.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationState},
    issues::UnfinishedIssue,
    rules::{checked_messages, sort_by_location},
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    check_unfinished(&ctx.catalogs, &ctx.ignore_contexts)
}

/// Messages marked `type="unfinished"`. These show the source text at runtime.
pub fn check_unfinished(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<UnfinishedIssue> {
    let mut issues: Vec<UnfinishedIssue> = catalogs
        .iter()
        .flat_map(|loaded| {
            checked_messages(loaded, ignore_contexts)
                .filter(|(_, msg)| msg.state() == TranslationState::Unfinished)
                .map(move |(context, message)| UnfinishedIssue {
                    context: loaded.message_context(context, message),
                })
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
