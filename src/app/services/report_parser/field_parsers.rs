//! Token-level field parsing for input lines
//!
//! Helper functions for parsing the individual whitespace-separated tokens
//! of station and report lines, with line-numbered error context.

use std::num::IntErrorKind;

use crate::{Error, Result};

/// Parse an ID token as an unsigned 32-bit integer
pub fn parse_id(token: &str, field: &'static str, line: usize) -> Result<u32> {
    token
        .parse::<u32>()
        .map_err(|e| classify_int_error(e.kind(), token, field, "uint32", line))
}

/// Parse a time token as an unsigned 64-bit integer
pub fn parse_time(token: &str, field: &'static str, line: usize) -> Result<u64> {
    token
        .parse::<u64>()
        .map_err(|e| classify_int_error(e.kind(), token, field, "uint64", line))
}

/// Parse the up flag token, case-insensitive `true`/`false`
pub fn parse_up_flag(token: &str, line: usize) -> Result<bool> {
    if token.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if token.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::invalid_up_flag(line))
    }
}

/// Distinguish out-of-range tokens from tokens that are not integers at all
fn classify_int_error(
    kind: &IntErrorKind,
    token: &str,
    field: &'static str,
    width: &'static str,
    line: usize,
) -> Error {
    match kind {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Error::out_of_range(field, width, line)
        }
        _ => Error::invalid_integer(token, line),
    }
}
