//! Rule implementations for tsglot.
//!
//! This module contains pure functions that check loaded catalogs for problems.
//! Each function takes only the specific inputs it needs (not a full Context)
//! and returns a specific issue type. A thin `check_*_issues(&CheckContext)`
//! wrapper feeds each one from the loaded project.
//!
//! ## Module Structure
//!
//! - `helpers`: Message filtering and sorting shared by all rules
//! - `duplicate`: Same `(context, source, comment)` twice in one file
//! - `placeholder`: `%1`/`%n` differences between source and translation
//! - `numerus`: Wrong number of plural forms for the target language
//! - `unfinished`: Translations still marked unfinished
//! - `empty`: Finished translations without text
//! - `untranslated`: Translations identical to their source

pub mod duplicate;
pub mod empty;
pub mod helpers;
pub mod numerus;
pub mod placeholder;
pub mod unfinished;
pub mod untranslated;

pub use helpers::{checked_messages, sort_by_location};
