//! HTTP handlers: parse and validate path input, dispatch one read query.

pub mod artists;
pub mod counts;
pub mod eras;
pub mod galleries;
pub mod genres;
pub mod paintings;

use crate::error::AppError;

/// Parse a key path segment. Every id route requires an integer; no case
/// transform is applied to id segments anywhere.
pub(crate) fn parse_id(segment: &str) -> Result<i64, AppError> {
    segment
        .parse()
        .map_err(|_| AppError::validation("parameter must be a number"))
}

/// Canonical form for substring segments: lower-cased before the ILIKE pattern is
/// built, so mixed-case inputs produce identical queries.
pub(crate) fn normalize_substring(segment: &str) -> String {
    segment.to_lowercase()
}
