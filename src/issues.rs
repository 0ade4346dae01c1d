//! Issue types for translation catalog checks.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it.

use enum_dispatch::enum_dispatch;

use crate::core::{MessageContext, placeholder::PlaceholderDiff};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Duplicate,
    Placeholder,
    Numerus,
    Unfinished,
    Empty,
    Untranslated,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Duplicate => write!(f, "duplicate"),
            Rule::Placeholder => write!(f, "placeholder"),
            Rule::Numerus => write!(f, "numerus"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Empty => write!(f, "empty"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Messages (MessageContext)
// ============================================================

/// Second active message with the same `(context, source, comment)` in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    pub context: MessageContext,
    /// Disambiguation comment of the duplicated key.
    pub comment: Option<String>,
    /// Line of the first message with this key.
    pub first_line: usize,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Duplicate
    }
}

/// Finished translation whose placeholders differ from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    pub diff: PlaceholderDiff,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Placeholder
    }
}

/// Numerus message with the wrong number of forms for the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusMismatchIssue {
    pub context: MessageContext,
    pub language: String,
    pub expected: usize,
    pub found: usize,
    /// Plural categories of the language, in form order (e.g., "one, few, many, other").
    pub categories: String,
}

impl NumerusMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Numerus
    }
}

/// Translation marked `type="unfinished"`; the source text is shown at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Finished translation without text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub context: MessageContext,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Empty
    }
}

/// Finished translation identical to its source (possibly not translated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    pub language: Option<String>,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a translation catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Duplicate(DuplicateMessageIssue),
    Placeholder(PlaceholderMismatchIssue),
    Numerus(NumerusMismatchIssue),
    Unfinished(UnfinishedIssue),
    Empty(EmptyTranslationIssue),
    Untranslated(UntranslatedIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Duplicate(_) => DuplicateMessageIssue::severity(),
            Issue::Placeholder(_) => PlaceholderMismatchIssue::severity(),
            Issue::Numerus(_) => NumerusMismatchIssue::severity(),
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::Empty(_) => EmptyTranslationIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Duplicate(_) => DuplicateMessageIssue::rule(),
            Issue::Placeholder(_) => PlaceholderMismatchIssue::rule(),
            Issue::Numerus(_) => NumerusMismatchIssue::rule(),
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::Empty(_) => EmptyTranslationIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a `.ts` file.
    Message(&'a MessageContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types and dispatched on `Issue` through
/// `enum_dispatch`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text or error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("add a <comment> to disambiguate, or remove one of the messages")
    }

    fn details(&self) -> Option<String> {
        Some(match &self.comment {
            Some(comment) => format!(
                "already defined at line {} (comment: \"{}\")",
                self.first_line, comment
            ),
            None => format!("already defined at line {}", self.first_line),
        })
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} in \"{}\"", self.diff, self.context.translation))
    }
}

impl Report for NumerusMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "expected {} form(s) for {} ({}), found {}",
            self.expected, self.language, self.categories, self.found
        ))
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.context.translation.is_empty() {
            Some("not translated yet, the source text is shown".to_string())
        } else {
            Some(format!(
                "draft \"{}\" is not used, the source text is shown",
                self.context.translation
            ))
        }
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("translation is empty, the source text is shown".to_string())
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(match &self.language {
            Some(language) => format!("translation is identical to the source ({})", language),
            None => "translation is identical to the source".to_string(),
        })
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    /// Get file path for sorting.
    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    /// Get line number for sorting.
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use crate::core::{
        MessageLocation,
        placeholder::{Placeholder, PlaceholderDiff},
    };
    use crate::issues::*;

    fn ctx(file: &str, line: usize, source: &str, translation: &str) -> MessageContext {
        MessageContext::new(
            MessageLocation::new(file, line),
            "ProgressBarWidget",
            source,
            translation,
        )
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Rule::Duplicate.to_string(), "duplicate");
        assert_eq!(Rule::Placeholder.to_string(), "placeholder");
        assert_eq!(Rule::Numerus.to_string(), "numerus");
        assert_eq!(Rule::ParseError.to_string(), "parse-error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_severities() {
        let unfinished = Issue::Unfinished(UnfinishedIssue {
            context: ctx("a.ts", 1, "Speed: %1", ""),
        });
        assert_eq!(unfinished.severity(), Severity::Warning);
        assert_eq!(unfinished.rule(), Rule::Unfinished);

        let numerus = Issue::Numerus(NumerusMismatchIssue {
            context: ctx("a.ts", 1, "%n file(s)", "%n файл"),
            language: "ru".to_string(),
            expected: 4,
            found: 3,
            categories: "one, few, many, other".to_string(),
        });
        assert_eq!(numerus.severity(), Severity::Error);
        assert_eq!(
            numerus.details().unwrap(),
            "expected 4 form(s) for ru (one, few, many, other), found 3"
        );
    }

    #[test]
    fn test_placeholder_details() {
        let mut diff = PlaceholderDiff::default();
        diff.missing.insert(Placeholder::Arg(2));
        let issue = PlaceholderMismatchIssue {
            context: ctx("a.ts", 3, "Elements: %1/%2", "Элементы: %1"),
            diff,
        };
        assert_eq!(issue.message(), "Elements: %1/%2");
        assert_eq!(issue.details().unwrap(), "missing %2 in \"Элементы: %1\"");
    }

    #[test]
    fn test_duplicate_details() {
        let issue = DuplicateMessageIssue {
            context: ctx("a.ts", 20, "Open", "Открыть"),
            comment: Some("menu".to_string()),
            first_line: 8,
        };
        assert_eq!(
            issue.details().unwrap(),
            "already defined at line 8 (comment: \"menu\")"
        );
        assert!(issue.hint().is_some());
    }

    #[test]
    fn test_issue_ordering() {
        let late = Issue::Empty(EmptyTranslationIssue {
            context: ctx("a.ts", 30, "B", ""),
        });
        let early = Issue::Unfinished(UnfinishedIssue {
            context: ctx("a.ts", 10, "A", ""),
        });
        let other_file = Issue::ParseError(ParseErrorIssue {
            file_path: "0.ts".to_string(),
            error: "broken".to_string(),
        });

        let mut issues = vec![late.clone(), early.clone(), other_file.clone()];
        issues.sort();
        assert_eq!(issues, vec![other_file, early, late]);
    }
}
