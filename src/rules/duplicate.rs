//! Duplicate message detection rule.
//!
//! Qt resolves a lookup to a single entry, so a second message with the same
//! `(context, source, comment)` in one file can never be shown.

use std::collections::{HashMap, HashSet};

use crate::{
    core::{CheckContext, LoadedCatalog, MessageKey},
    issues::DuplicateMessageIssue,
    rules::{checked_messages, sort_by_location},
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateMessageIssue> {
    check_duplicates(&ctx.catalogs, &ctx.ignore_contexts)
}

/// Report every repeated key. The first occurrence is the one kept at runtime.
pub fn check_duplicates(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<DuplicateMessageIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let mut first_lines: HashMap<MessageKey, usize> = HashMap::new();

        for (context, message) in checked_messages(loaded, ignore_contexts) {
            let key = MessageKey::of(context, message);
            match first_lines.get(&key) {
                Some(&first_line) => issues.push(DuplicateMessageIssue {
                    context: loaded.message_context(context, message),
                    comment: message.comment.clone(),
                    first_line,
                }),
                None => {
                    first_lines.insert(key, message.line);
                }
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
