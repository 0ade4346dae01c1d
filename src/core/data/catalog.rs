use std::fmt;

/// State of a translation, mirroring the `type` attribute of `<translation>`.
///
/// - no attribute: `Finished`
/// - `type="unfinished"`: not yet reviewed, the runtime shows the source text
/// - `type="vanished"`: the source string disappeared from the code
/// - `type="obsolete"`: legacy spelling of `vanished` written by older lupdate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TranslationState {
    #[default]
    Finished,
    Unfinished,
    Vanished,
    Obsolete,
}

impl TranslationState {
    /// Parse the value of the `type` attribute.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "vanished" => Some(Self::Vanished),
            "obsolete" => Some(Self::Obsolete),
            _ => None,
        }
    }

    /// Value for the `type` attribute, `None` for finished translations.
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
            Self::Obsolete => Some("obsolete"),
        }
    }

    /// Vanished and obsolete messages are kept for reference only.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Finished | Self::Unfinished)
    }
}

impl fmt::Display for TranslationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "finished"),
            Self::Unfinished => write!(f, "unfinished"),
            Self::Vanished => write!(f, "vanished"),
            Self::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// Where lupdate found the string in the application's source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Source file, relative to the `.ts` file.
    pub filename: String,
    /// Absolute line number. Relative `+N`/`-N` forms are resolved on load.
    pub line: Option<i64>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: Option<i64>) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub state: TranslationState,
    /// Plain translation text. For `variants="yes"` this is the first length variant.
    pub text: String,
    /// Numerus forms, in the order of the target language's plural categories.
    /// A form with length variants holds its first variant.
    pub forms: Vec<String>,
    /// Length variants of each numerus form, indexed like `forms`. Empty when no
    /// form has variants.
    pub form_variants: Vec<Vec<String>>,
    /// Length variants (longest first), empty when the translation has none.
    pub variants: Vec<String>,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            state: TranslationState::Unfinished,
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn numerus(state: TranslationState, forms: Vec<String>) -> Self {
        Self {
            state,
            forms,
            ..Default::default()
        }
    }

    /// All translated strings: the numerus forms (with their length variants) for
    /// plural messages, the length variants or the text otherwise.
    pub fn texts(&self, numerus: bool) -> Vec<&str> {
        if numerus {
            self.forms
                .iter()
                .enumerate()
                .flat_map(|(i, form)| match self.form_variants.get(i) {
                    Some(variants) if !variants.is_empty() => {
                        variants.iter().map(String::as_str).collect()
                    }
                    _ => vec![form.as_str()],
                })
                .collect()
        } else if !self.variants.is_empty() {
            self.variants.iter().map(String::as_str).collect()
        } else {
            vec![self.text.as_str()]
        }
    }

    /// True when there is nothing a user could see in place of the source text.
    pub fn is_empty(&self, numerus: bool) -> bool {
        self.texts(numerus).iter().all(|t| t.is_empty())
    }
}

/// One `<message>` of a context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Optional message id (`<message id="...">`).
    pub id: Option<String>,
    /// `numerus="yes"`: the translation carries plural forms.
    pub numerus: bool,
    pub locations: Vec<Location>,
    pub source: String,
    pub old_source: Option<String>,
    /// Disambiguation comment, part of the lookup key.
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    /// Developer note for translators (`<extracomment>`).
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub translation: Translation,
    /// Raw XML of children without a field here (`<userdata>`, `<extra-*>`),
    /// written back unchanged.
    pub extras: Vec<String>,
    /// Line in the `.ts` file where the message starts. Diagnostics only.
    pub line: usize,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        Self {
            source: source.into(),
            translation,
            ..Default::default()
        }
    }

    pub fn comment_or_empty(&self) -> &str {
        self.comment.as_deref().unwrap_or_default()
    }

    pub fn state(&self) -> TranslationState {
        self.translation.state
    }

    pub fn is_active(&self) -> bool {
        self.translation.state.is_active()
    }

    /// Text shown in reports: the plain translation or the first numerus form.
    pub fn display_translation(&self) -> &str {
        if self.numerus {
            self.translation
                .forms
                .first()
                .map(String::as_str)
                .unwrap_or_default()
        } else {
            &self.translation.text
        }
    }
}

/// A `<context>`: the strings of one class or dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub comment: Option<String>,
    pub messages: Vec<Message>,
    /// Raw XML of unknown children, written back after the name.
    pub extras: Vec<String>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_messages(name: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            name: name.into(),
            messages,
            ..Default::default()
        }
    }
}

/// Lookup key of a message: `(context, source, disambiguation)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub comment: String,
}

impl MessageKey {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: comment.into(),
        }
    }

    pub fn of(context: &Context, message: &Message) -> Self {
        Self::new(&context.name, &message.source, message.comment_or_empty())
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment.is_empty() {
            write!(f, "{}::\"{}\"", self.context, self.source)
        } else {
            write!(f, "{}::\"{}\" ({})", self.context, self.source, self.comment)
        }
    }
}

/// A whole `.ts` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Format version of the `<TS>` root (e.g., "2.1").
    pub version: String,
    /// Target language (e.g., "ru" or "ru_RU").
    pub language: Option<String>,
    pub source_language: Option<String>,
    /// Raw XML of `<TS>` children other than contexts, such as `<dependencies>`.
    pub extras: Vec<String>,
    pub contexts: Vec<Context>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: "2.1".to_string(),
            language: None,
            source_language: None,
            extras: Vec::new(),
            contexts: Vec::new(),
        }
    }
}

/// Message counts of a catalog, by state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Vanished and obsolete messages.
    pub obsolete: usize,
    pub numerus: usize,
}

impl CatalogCounts {
    /// Share of active messages that are finished, in percent.
    pub fn completion(&self) -> f64 {
        let active = self.finished + self.unfinished;
        if active == 0 {
            return 100.0;
        }
        self.finished as f64 * 100.0 / active as f64
    }

    pub fn add(&mut self, other: &CatalogCounts) {
        self.contexts += other.contexts;
        self.messages += other.messages;
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.obsolete += other.obsolete;
        self.numerus += other.numerus;
    }
}

impl Catalog {
    pub fn new(language: Option<String>) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Iterate over all messages together with their context.
    pub fn messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |msg| (ctx, msg)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    pub fn counts(&self) -> CatalogCounts {
        let mut counts = CatalogCounts {
            contexts: self.contexts.len(),
            ..Default::default()
        };
        for (_, msg) in self.messages() {
            counts.messages += 1;
            match msg.state() {
                TranslationState::Finished => counts.finished += 1,
                TranslationState::Unfinished => counts.unfinished += 1,
                TranslationState::Vanished | TranslationState::Obsolete => counts.obsolete += 1,
            }
            if msg.numerus {
                counts.numerus += 1;
            }
        }
        counts
    }

    /// Remove vanished and obsolete messages, then contexts left without messages.
    ///
    /// Returns the number of removed messages.
    pub fn drop_inactive(&mut self) -> usize {
        let before = self.message_count();
        for ctx in &mut self.contexts {
            ctx.messages.retain(Message::is_active);
        }
        self.contexts.retain(|c| !c.messages.is_empty());
        before - self.message_count()
    }
}
