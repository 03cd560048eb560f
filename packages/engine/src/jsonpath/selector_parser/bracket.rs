//! Bracket contents parsing
//!
//! Chooses between the filter, range, all-elements and index forms based on the
//! text between the brackets.

use super::slice::{parse_indices, parse_range};
use crate::jsonpath::{
    ast::Step,
    error::{JsonPathError, JsonPathResult},
};

/// Parse bracket contents `tail` for the child `name`
pub fn parse_bracket(name: &str, tail: &str) -> JsonPathResult<Step> {
    let name = name.to_string();

    if tail.contains('?') {
        let predicate = parse_filter_bracket(tail)?;
        return Ok(Step::Filter { name, predicate });
    }

    if tail.contains(':') {
        let (from, to) = parse_range(tail)?;
        return Ok(Step::Range { name, from, to });
    }

    if tail == "*" {
        return Ok(Step::Range {
            name,
            from: None,
            to: None,
        });
    }

    Ok(Step::Index {
        name,
        indices: parse_indices(tail)?,
    })
}

/// Extract the predicate text from `?( ... )`
fn parse_filter_bracket(tail: &str) -> JsonPathResult<String> {
    let predicate = tail
        .strip_prefix("?(")
        .and_then(|rest| rest.strip_suffix(')'))
        .map(str::trim)
        .ok_or_else(|| JsonPathError::malformed_filter(tail))?;

    if predicate.is_empty() {
        return Err(JsonPathError::malformed_filter(tail));
    }
    Ok(predicate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonpath::error::ErrorKind;

    #[test]
    fn filter_predicate_is_trimmed() {
        assert_eq!(
            parse_bracket("items", "?( @.v > 2 )").unwrap(),
            Step::Filter {
                name: "items".into(),
                predicate: "@.v > 2".into()
            }
        );
    }

    #[test]
    fn filter_requires_parenthesized_form() {
        for tail in ["?@.v", "?(@.v", "@.v)?", "?()", "?(  )"] {
            let err = parse_bracket("items", tail).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedFilter, "tail {tail:?}");
        }
    }

    #[test]
    fn star_selects_everything() {
        assert_eq!(
            parse_bracket("nums", "*").unwrap(),
            Step::Range {
                name: "nums".into(),
                from: None,
                to: None
            }
        );
    }

    #[test]
    fn question_mark_takes_precedence_over_colon() {
        let step = parse_bracket("a", "?(@.t == 1:2)").unwrap();
        assert!(matches!(step, Step::Filter { .. }));
    }
}
