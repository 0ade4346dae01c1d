//! Placeholder mismatch detection rule.
//!
//! A finished translation must use the same `%1`..`%99` placeholders as its
//! source, otherwise `QString::arg` fills in the wrong values or leaves
//! `%2` visible. Numerus forms may drop `%n`.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationState, placeholder::compare},
    issues::PlaceholderMismatchIssue,
    rules::{checked_messages, sort_by_location},
};

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    check_placeholders(&ctx.catalogs, &ctx.ignore_contexts)
}

pub fn check_placeholders(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for (context, message) in checked_messages(loaded, ignore_contexts) {
            // Unfinished drafts are never shown.
            if message.state() != TranslationState::Finished {
                continue;
            }

            let texts = message.translation.texts(message.numerus);
            let diff = compare(&message.source, &texts, message.numerus);
            if !diff.is_empty() {
                issues.push(PlaceholderMismatchIssue {
                    context: loaded.message_context(context, message),
                    diff,
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
