//! Numerus form count rule.
//!
//! A numerus message needs one form per plural category of the target language
//! (Russian: one, few, many, other). Missing forms make the runtime fall back to
//! the last form, extra forms are never selected.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationState},
    issues::NumerusMismatchIssue,
    rules::{checked_messages, sort_by_location},
};

pub fn check_numerus_issues(ctx: &CheckContext) -> Vec<NumerusMismatchIssue> {
    check_numerus(&ctx.catalogs, &ctx.ignore_contexts)
}

pub fn check_numerus(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<NumerusMismatchIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let Some(rule) = loaded.plural_rule() else {
            debug!(
                path = %loaded.path,
                language = ?loaded.language,
                "unknown plural rule, numerus check skipped"
            );
            continue;
        };
        let expected = rule.form_count();
        let language = loaded.language.clone().unwrap_or_default();
        let categories = rule
            .categories()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        for (context, message) in checked_messages(loaded, ignore_contexts) {
            if !message.numerus {
                continue;
            }
            let found = message.translation.forms.len();
            // An unfinished message without any forms has simply not been started.
            if found == 0 && message.state() == TranslationState::Unfinished {
                continue;
            }
            if found != expected {
                issues.push(NumerusMismatchIssue {
                    context: loaded.message_context(context, message),
                    language: language.clone(),
                    expected,
                    found,
                    categories: categories.clone(),
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
