//! Qt placeholder tokens in source and translation strings.
//!
//! Qt strings use `%1`..`%99` for `QString::arg` substitutions and `%n` for the
//! quantity of numerus messages. Both accept an `L` modifier (`%L1`, `%Ln`) that only
//! changes number formatting, so `%L1` and `%1` are the same placeholder here.
//! `QString::arg` has no escape for `%`, so the `%1` in `100%%1` is live.

use std::{collections::BTreeSet, fmt, sync::LazyLock};

use regex::Regex;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?([1-9][0-9]?|n)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// `%1`..`%99`
    Arg(u8),
    /// `%n`
    Count,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Arg(n) => write!(f, "%{}", n),
            Placeholder::Count => write!(f, "%n"),
        }
    }
}

/// All distinct placeholders of a string, in ascending order.
pub fn placeholders(text: &str) -> BTreeSet<Placeholder> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let token = &caps[1];
            if token == "n" {
                Some(Placeholder::Count)
            } else {
                token.parse().ok().map(Placeholder::Arg)
            }
        })
        .collect()
}

/// Placeholder differences between a source string and its translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderDiff {
    /// In the source but not in the translation.
    pub missing: BTreeSet<Placeholder>,
    /// In the translation but not in the source.
    pub unexpected: BTreeSet<Placeholder>,
}

impl PlaceholderDiff {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

impl fmt::Display for PlaceholderDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |set: &BTreeSet<Placeholder>| {
            set.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        match (self.missing.is_empty(), self.unexpected.is_empty()) {
            (false, false) => write!(
                f,
                "missing {}; unexpected {}",
                join(&self.missing),
                join(&self.unexpected)
            ),
            (false, true) => write!(f, "missing {}", join(&self.missing)),
            (true, false) => write!(f, "unexpected {}", join(&self.unexpected)),
            (true, true) => Ok(()),
        }
    }
}

/// Compare the placeholders of `source` with every non-empty translated text.
///
/// Numerus forms may leave out `%n` (e.g. "одна вкладка"), but must not drop
/// any other placeholder.
pub fn compare(source: &str, translations: &[&str], numerus: bool) -> PlaceholderDiff {
    let expected = placeholders(source);
    let mut diff = PlaceholderDiff::default();

    for text in translations.iter().filter(|t| !t.is_empty()) {
        let actual = placeholders(text);
        for p in expected.difference(&actual) {
            if numerus && *p == Placeholder::Count {
                continue;
            }
            diff.missing.insert(*p);
        }
        diff.unexpected.extend(actual.difference(&expected).copied());
    }

    diff
}

/// Replace `%n` and `%Ln` with the quantity. Other placeholders stay untouched.
pub fn substitute_count(text: &str, n: i64) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &regex::Captures<'_>| {
            if &caps[1] == "n" {
                n.to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[Placeholder]) -> BTreeSet<Placeholder> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("Elements: %1/%2"),
            set(&[Placeholder::Arg(1), Placeholder::Arg(2)])
        );
        assert_eq!(placeholders("%n tab(s)"), set(&[Placeholder::Count]));
        assert_eq!(
            placeholders("%L1 of %Ln"),
            set(&[Placeholder::Arg(1), Placeholder::Count])
        );
        assert_eq!(placeholders("Document: %p%"), set(&[]));
        assert_eq!(placeholders("100%% done"), set(&[]));
        assert_eq!(placeholders("Progress 100%%1"), set(&[Placeholder::Arg(1)]));
        assert_eq!(placeholders("%12 and %0"), set(&[Placeholder::Arg(12)]));
    }

    #[test]
    fn test_compare_matching() {
        let diff = compare("Elements: %1/%2", &["Элементы: %1/%2"], false);
        assert!(diff.is_empty());

        // Order may change in the translation.
        let diff = compare("%1 of %2", &["%2 из %1"], false);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_compare_missing_and_unexpected() {
        let diff = compare("Total: %1", &["Всего: %2"], false);
        assert_eq!(diff.missing, set(&[Placeholder::Arg(1)]));
        assert_eq!(diff.unexpected, set(&[Placeholder::Arg(2)]));
        assert_eq!(diff.to_string(), "missing %1; unexpected %2");
    }

    #[test]
    fn test_compare_double_percent_before_placeholder() {
        let diff = compare("Done: %1", &["Готово: %%1"], false);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_compare_skips_empty_translations() {
        let diff = compare("Speed: %1", &[""], false);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_compare_numerus_may_omit_count() {
        let diff = compare(
            "%n tab(s) in %1",
            &["одна вкладка в %1", "%n вкладки в %1", "%n вкладок в %1"],
            true,
        );
        assert!(diff.is_empty());

        let diff = compare("%n tab(s) in %1", &["%n вкладка"], true);
        assert_eq!(diff.missing, set(&[Placeholder::Arg(1)]));

        let diff = compare("%n tab(s)", &["вкладки"], false);
        assert_eq!(diff.missing, set(&[Placeholder::Count]));
    }

    #[test]
    fn test_substitute_count() {
        assert_eq!(substitute_count("%n вкладок", 5), "5 вкладок");
        assert_eq!(substitute_count("%Ln of %1", 21), "21 of %1");
        assert_eq!(substitute_count("Time: %1", 3), "Time: %1");
        assert_eq!(substitute_count("50%% of %n", 2), "50%% of 2");
        assert_eq!(substitute_count("%%n files", 3), "%3 files");
    }
}
