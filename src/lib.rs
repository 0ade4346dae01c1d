//! tsglot - Qt Linguist `.ts` catalogs for Rust
//!
//! tsglot is a CLI tool and library that reads, queries, checks and rewrites
//! Qt Linguist translation files. It resolves translations at runtime with
//! source fallback and plural-rule aware numerus forms, and detects
//! placeholder, numerus and completeness problems in catalogs.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (check, stats, lookup, clean, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, `.ts` reader and writer, plural rules, translator
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Checks run against loaded catalogs
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
