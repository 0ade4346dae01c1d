//! Empty translation rule.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationState},
    issues::EmptyTranslationIssue,
    rules::{checked_messages, sort_by_location},
};

pub fn check_empty_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    check_empty(&ctx.catalogs, &ctx.ignore_contexts)
}

/// Finished messages whose translation (every numerus form, for plurals) is empty.
pub fn check_empty(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<EmptyTranslationIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for (context, message) in checked_messages(loaded, ignore_contexts) {
            if message.state() == TranslationState::Finished
                && message.translation.is_empty(message.numerus)
            {
                issues.push(EmptyTranslationIssue {
                    context: loaded.message_context(context, message),
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
