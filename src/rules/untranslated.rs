//! Untranslated value detection rule.
//!
//! Detects finished translations that are identical to their source, which may
//! indicate that the text was copied instead of translated. Sources without
//! letters ("%1 %2", "...", "100%") are expected to stay the same and are skipped,
//! as are catalogs whose target language is the source language.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationState},
    issues::UntranslatedIssue,
    rules::{checked_messages, sort_by_location},
    utils::contains_alphabetic,
};

pub fn check_untranslated_issues(ctx: &CheckContext) -> Vec<UntranslatedIssue> {
    check_untranslated(
        &ctx.catalogs,
        &ctx.ignore_contexts,
        &ctx.config.source_language,
    )
}

/// Check for untranslated values.
///
/// # Arguments
/// * `catalogs` - Loaded catalogs
/// * `ignore_contexts` - Contexts that are never reported
/// * `source_language` - Language of the source texts (e.g., "en")
pub fn check_untranslated(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &HashSet<String>,
    source_language: &str,
) -> Vec<UntranslatedIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        if loaded
            .language
            .as_deref()
            .is_some_and(|lang| same_language(lang, source_language))
        {
            continue;
        }

        for (context, message) in checked_messages(loaded, ignore_contexts) {
            if message.state() != TranslationState::Finished
                || !contains_alphabetic(&message.source)
            {
                continue;
            }

            let texts = message.translation.texts(message.numerus);
            let identical = texts.iter().any(|t| !t.is_empty())
                && texts
                    .iter()
                    .filter(|t| !t.is_empty())
                    .all(|t| *t == message.source);

            if identical {
                issues.push(UntranslatedIssue {
                    context: loaded.message_context(context, message),
                    language: loaded.language.clone(),
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}

/// Compare the primary language subtags: `en_US` and `en` are the same language.
fn same_language(a: &str, b: &str) -> bool {
    let primary = |s: &str| {
        s.split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    };
    primary(a) == primary(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, Context, Message, Translation};

    fn loaded(language: &str, messages: Vec<Message>) -> Vec<LoadedCatalog> {
        let mut catalog = Catalog::new(Some(language.to_string()));
        catalog
            .contexts
            .push(Context::with_messages("MainWindow", messages));
        vec![LoadedCatalog::new("app.ts", catalog, None)]
    }

    #[test]
    fn test_check_untranslated_none() {
        let catalogs = loaded(
            "ru",
            vec![Message::new("Submit", Translation::finished("Отправить"))],
        );
        assert!(check_untranslated(&catalogs, &HashSet::new(), "en").is_empty());
    }

    #[test]
    fn test_check_untranslated_identical() {
        let catalogs = loaded(
            "ru",
            vec![
                Message::new("OK", Translation::finished("OK")),
                Message::new("%1 %2", Translation::finished("%1 %2")),
                Message::new("Cancel", Translation::unfinished("Cancel")),
            ],
        );
        let issues = check_untranslated(&catalogs, &HashSet::new(), "en");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].context.source, "OK");
        assert_eq!(issues[0].language.as_deref(), Some("ru"));
    }

    #[test]
    fn test_check_untranslated_variants() {
        let mut msg = Message::new("Open", Translation::finished("Open"));
        msg.translation.variants = vec!["Open".into(), "Открыть".into()];
        let catalogs = loaded("ru", vec![msg]);
        assert!(check_untranslated(&catalogs, &HashSet::new(), "en").is_empty());
    }

    #[test]
    fn test_source_language_catalog_is_skipped() {
        let catalogs = loaded(
            "en_US",
            vec![Message::new("OK", Translation::finished("OK"))],
        );
        assert!(check_untranslated(&catalogs, &HashSet::new(), "en").is_empty());
    }

    #[test]
    fn test_same_language() {
        assert!(same_language("en_US", "en"));
        assert!(same_language("EN-gb", "en"));
        assert!(!same_language("ru", "en"));
    }
}
