//! File parsers for translation files.
//!
//! - `ts`: Qt Linguist `.ts` (XML) reader

pub mod ts;

pub use ts::{TsParseError, parse_ts_file, parse_ts_str};
