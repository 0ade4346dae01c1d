//! Core data types for loaded translation catalogs.
//!
//! ## Module Structure
//!
//! - `catalog`: The `.ts` document model (Catalog, Context, Message, Translation)
//! - `location`: Report locations inside `.ts` files (MessageLocation, MessageContext)

pub mod catalog;
pub mod location;

pub use catalog::{
    Catalog, CatalogCounts, Context, Location, Message, MessageKey, Translation,
    TranslationState,
};
pub use location::{MessageContext, MessageLocation};
