//! Helper functions shared by rule implementations.

use std::collections::HashSet;

use crate::core::{Context, LoadedCatalog, Message, MessageContext};

/// Messages a rule looks at: active (not vanished or obsolete) and outside the
/// ignored contexts.
pub fn checked_messages<'a>(
    loaded: &'a LoadedCatalog,
    ignore_contexts: &'a HashSet<String>,
) -> impl Iterator<Item = (&'a Context, &'a Message)> + 'a {
    loaded
        .catalog
        .messages()
        .filter(move |(ctx, msg)| msg.is_active() && !ignore_contexts.contains(&ctx.name))
}

/// Sort issues by file path, then line, then source for deterministic output.
pub fn sort_by_location<T>(issues: &mut [T], context: impl Fn(&T) -> &MessageContext) {
    issues.sort_by(|a, b| {
        let (a, b) = (context(a), context(b));
        a.location
            .file_path
            .cmp(&b.location.file_path)
            .then_with(|| a.location.line.cmp(&b.location.line))
            .then_with(|| a.source.cmp(&b.source))
    });
}
