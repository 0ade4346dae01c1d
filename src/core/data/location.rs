/// Position of a message inside a `.ts` file.
///
/// Used for error reporting; the line is where the `<message>` element starts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the translation file (e.g., "./translations/app_ru.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// A message as shown in reports: where it is, which context it belongs to,
/// its source text and its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// The context name (e.g., "ProgressBarWidget").
    pub context: String,
    /// The English source text.
    pub source: String,
    /// The translation text (first numerus form for plural messages).
    pub translation: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        context: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            location,
            context: context.into(),
            source: source.into(),
            translation: translation.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_context_accessors() {
        let loc = MessageLocation::new("./translations/app_ru.ts", 5);
        let ctx = MessageContext::new(loc, "ProgressBarWidget", "Time: %1", "Время: %1");
        assert_eq!(ctx.file_path(), "./translations/app_ru.ts");
        assert_eq!(ctx.line(), 5);
        assert_eq!(ctx.context, "ProgressBarWidget");
        assert_eq!(ctx.translation, "Время: %1");
    }

    #[test]
    fn test_location_ordering() {
        let a = MessageLocation::new("a.ts", 10);
        let b = MessageLocation::new("a.ts", 2);
        let c = MessageLocation::new("b.ts", 1);
        let mut locs = vec![c.clone(), a.clone(), b.clone()];
        locs.sort();
        assert_eq!(locs, vec![b, a, c]);
    }
}
