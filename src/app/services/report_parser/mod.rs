//! Sectioned input-file parsing for stations and availability reports
//!
//! The input format is line-oriented UTF-8 text with two ordered sections,
//! announced by the literal headers `[Stations]` and
//! `[Charger Availability Reports]`. Blank lines are ignored. Parsing is
//! strict and fail-fast: the first violation aborts with an error carrying
//! the 1-based line number, and no partial data is returned.

pub mod field_parsers;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export the parser entry points
pub use parser::{ParsedInput, parse_file, parse_str};
