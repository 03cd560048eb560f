//! Range and index list parsing for array steps
//!
//! Ranges are `from:to` with either side optional; index lists are comma
//! separated integers.

use crate::jsonpath::error::{JsonPathError, JsonPathResult};

/// Parse `from:to`; unparsable or empty sides become open ends
pub fn parse_range(tail: &str) -> JsonPathResult<(Option<i64>, Option<i64>)> {
    let parts: Vec<&str> = tail.split(':').collect();
    let [from, to] = parts.as_slice() else {
        return Err(JsonPathError::malformed_range(tail));
    };
    Ok((parse_bound(from), parse_bound(to)))
}

#[inline]
fn parse_bound(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Parse a comma separated index list; any bad piece fails the whole list
pub fn parse_indices(tail: &str) -> JsonPathResult<Vec<i64>> {
    tail.split(',')
        .map(|piece| {
            let piece = piece.trim();
            piece
                .parse::<i64>()
                .map_err(|_| JsonPathError::invalid_index(piece))
        })
        .collect()
}
