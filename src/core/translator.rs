//! Runtime lookup over loaded catalogs.
//!
//! The table is built once from one or more catalogs. Lookups never fail: whatever
//! cannot be translated falls back to the source text, the same way a Qt
//! application shows the English string for an unfinished entry.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::core::{
    Catalog, Message, MessageKey, TranslationState, placeholder::substitute_count,
    plural::PluralRule,
};

#[derive(Debug, Default)]
pub struct Translator {
    language: Option<String>,
    plural_rule: Option<PluralRule>,
    messages: HashMap<MessageKey, Message>,
}

impl Translator {
    /// Build the lookup table from a single catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self::from_catalogs(vec![catalog])
    }

    /// Build the lookup table from several catalogs of the same language.
    ///
    /// Later catalogs override earlier ones. Within a catalog the first active
    /// message with a given key wins.
    pub fn from_catalogs(catalogs: Vec<Catalog>) -> Self {
        let mut translator = Translator::default();

        for catalog in catalogs {
            if translator.language.is_none() {
                translator.language = catalog.language.clone();
            }
            let mut seen = HashSet::new();
            for context in catalog.contexts {
                for message in context.messages {
                    if !message.is_active() {
                        continue;
                    }
                    let key = MessageKey::new(
                        &context.name,
                        &message.source,
                        message.comment_or_empty(),
                    );
                    if !seen.insert(key.clone()) {
                        debug!(%key, "duplicate message ignored");
                        continue;
                    }
                    translator.messages.insert(key, message);
                }
            }
        }

        translator.plural_rule = translator
            .language
            .as_deref()
            .and_then(PluralRule::for_language);
        translator
    }

    /// Use a specific plural rule instead of the one derived from the catalog language.
    pub fn with_plural_rule(mut self, rule: PluralRule) -> Self {
        self.plural_rule = Some(rule);
        self
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The plural rule used for numerus messages. Unknown languages use one/other.
    pub fn plural_rule(&self) -> PluralRule {
        self.plural_rule.unwrap_or(PluralRule::OneOther)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Find a message by its key. A disambiguation comment that has no exact match
    /// falls back to the entry without comment.
    pub fn lookup(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&Message> {
        let comment = comment.unwrap_or_default();
        self.messages
            .get(&MessageKey::new(context, source, comment))
            .or_else(|| {
                if comment.is_empty() {
                    None
                } else {
                    self.messages.get(&MessageKey::new(context, source, ""))
                }
            })
    }

    /// Translate a string, falling back to `source` when no usable translation exists.
    ///
    /// `n` selects the numerus form and replaces `%n`; all other placeholders are
    /// returned verbatim for the caller to fill in.
    pub fn translate(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: Option<i64>,
    ) -> String {
        self.try_translate(context, source, comment, n)
            .unwrap_or_else(|| with_count(source, n))
    }

    /// Like [`Translator::translate`], but `None` where the source text would be shown.
    pub fn try_translate(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: Option<i64>,
    ) -> Option<String> {
        let message = self.lookup(context, source, comment)?;
        let text = self.translated_text(message, n)?;
        Some(with_count(text, n))
    }

    fn translated_text<'a>(&self, message: &'a Message, n: Option<i64>) -> Option<&'a str> {
        if message.state() != TranslationState::Finished {
            return None;
        }

        let text = if message.numerus {
            let forms = &message.translation.forms;
            let index = self.plural_rule().form_index(n.unwrap_or(1));
            forms.get(index).or_else(|| forms.last())?.as_str()
        } else {
            message.translation.text.as_str()
        };

        if text.is_empty() { None } else { Some(text) }
    }
}

fn with_count(text: &str, n: Option<i64>) -> String {
    match n {
        Some(n) => substitute_count(text, n),
        None => text.to_string(),
    }
}
