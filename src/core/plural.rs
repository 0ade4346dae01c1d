//! Plural rules for numerus messages.
//!
//! A numerus message stores one translated form per plural category of the target
//! language, in the order returned by [`PluralRule::categories`]. Selecting a form
//! for a quantity `n` means finding the category of `n` and taking the form at that
//! category's position.

use std::fmt;

use self::PluralCategory::*;

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Plural rule families for the languages Qt ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// No plural distinction (Japanese, Chinese, Korean, ...).
    Single,
    /// `one` for 1, `other` for everything else (English, German, ...).
    OneOther,
    /// `one` for 0 and 1 (French, Brazilian Portuguese).
    French,
    /// Russian, Ukrainian, Belarusian.
    EastSlavic,
    Polish,
    /// Czech, Slovak.
    Czech,
    Arabic,
}

impl PluralRule {
    /// Find the rule for a language code such as `ru`, `ru_RU`, `ru-RU` or `pt_BR`.
    pub fn for_language(language: &str) -> Option<PluralRule> {
        let normalized = language.replace('-', "_");
        let mut parts = normalized.split('_');
        let lang = parts.next()?.to_ascii_lowercase();
        let region = parts.next().map(|r| r.to_ascii_uppercase());

        let rule = match (lang.as_str(), region.as_deref()) {
            ("pt", Some("BR")) => PluralRule::French,
            ("ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "tr" | "lo" | "my", _) => {
                PluralRule::Single
            }
            (
                "en" | "de" | "nl" | "sv" | "da" | "nb" | "nn" | "no" | "fi" | "es" | "it" | "pt"
                | "el" | "hu" | "bg" | "et" | "he" | "ca" | "eu" | "gl" | "eo" | "af" | "sq"
                | "az" | "ka" | "ur" | "hi" | "bn" | "fa" | "ta" | "te" | "ml" | "kn" | "mr",
                _,
            ) => PluralRule::OneOther,
            ("fr", _) => PluralRule::French,
            ("ru" | "uk" | "be", _) => PluralRule::EastSlavic,
            ("pl", _) => PluralRule::Polish,
            ("cs" | "sk", _) => PluralRule::Czech,
            ("ar", _) => PluralRule::Arabic,
            _ => return None,
        };
        Some(rule)
    }

    /// Plural categories in the order numerus forms are stored.
    pub fn categories(self) -> &'static [PluralCategory] {
        match self {
            PluralRule::Single => &[Other],
            PluralRule::OneOther | PluralRule::French => &[One, Other],
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::Czech => {
                &[One, Few, Many, Other]
            }
            PluralRule::Arabic => &[Zero, One, Two, Few, Many, Other],
        }
    }

    /// Number of numerus forms a message must carry.
    pub fn form_count(self) -> usize {
        self.categories().len()
    }

    /// Category of an integer quantity. Negative quantities use their absolute value.
    pub fn category(self, n: i64) -> PluralCategory {
        let n = n.unsigned_abs();
        let mod10 = n % 10;
        let mod100 = n % 100;
        match self {
            PluralRule::Single => Other,
            PluralRule::OneOther => {
                if n == 1 {
                    One
                } else {
                    Other
                }
            }
            PluralRule::French => {
                if n <= 1 {
                    One
                } else {
                    Other
                }
            }
            PluralRule::EastSlavic => {
                if mod10 == 1 && mod100 != 11 {
                    One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    Few
                } else {
                    Many
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    Few
                } else {
                    Many
                }
            }
            PluralRule::Czech => match n {
                1 => One,
                2..=4 => Few,
                _ => Other,
            },
            PluralRule::Arabic => {
                if n == 0 {
                    Zero
                } else if n == 1 {
                    One
                } else if n == 2 {
                    Two
                } else if (3..=10).contains(&mod100) {
                    Few
                } else if (11..=99).contains(&mod100) {
                    Many
                } else {
                    Other
                }
            }
        }
    }

    /// Position of the form for quantity `n`.
    pub fn form_index(self, n: i64) -> usize {
        let category = self.category(n);
        self.categories()
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0)
    }
}
