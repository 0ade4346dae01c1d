//! Core engine: reading, modelling, querying and writing `.ts` catalogs.
//!
//! ## Module Structure
//!
//! - `data`: Catalog model and report locations
//! - `parsers`: `.ts` XML reader
//! - `writer`: `.ts` XML writer
//! - `scanner`: Discovery of `.ts` files below the translations directory
//! - `plural`: Plural rules that order numerus forms
//! - `placeholder`: `%1`/`%n` placeholder handling
//! - `translator`: Runtime lookup with source fallback
//! - `context`: `CheckContext`, the loaded project shared by all commands

pub mod context;
pub mod data;
pub mod parsers;
pub mod placeholder;
pub mod plural;
pub mod scanner;
pub mod translator;
pub mod writer;

pub use context::{CheckContext, LoadedCatalog};
pub use data::{
    Catalog, CatalogCounts, Context, Location, Message, MessageContext, MessageKey,
    MessageLocation, Translation, TranslationState,
};
pub use translator::Translator;
