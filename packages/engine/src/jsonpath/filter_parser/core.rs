//! Whitespace-delimited predicate parser
//!
//! `@.isbn`                 => `@.isbn`, exists
//! `@.price < 10`           => `@.price`, `<`, `10`
//! `@.price <= $.expensive` => `@.price`, `<=`, `$.expensive`
//! `@.author =~ /.*REES/i`  => `@.author`, match, `/.*REES/i`

use crate::jsonpath::{
    ast::{FilterOperator, Operand, Predicate},
    error::{JsonPathError, JsonPathResult},
};

/// Parse predicate text
///
/// The first whitespace-delimited run is the left operand. When nothing else
/// follows, the operator is `exists`. Otherwise the second run is the operator
/// and everything after it, trimmed, is the right operand. Quoting is not
/// honored.
///
/// # Errors
/// Returns `MalformedFilter` for blank predicate text.
pub fn parse_predicate(text: &str) -> JsonPathResult<Predicate> {
    let (left, rest) = split_run(text);
    if left.is_empty() {
        return Err(JsonPathError::malformed_filter(text));
    }
    let left = Operand::parse(left);

    let (op, rest) = split_run(rest);
    if op.is_empty() {
        return Ok(Predicate {
            left,
            operator: FilterOperator::Exists,
            right: None,
        });
    }

    Ok(Predicate {
        left,
        operator: FilterOperator::from_token(op),
        right: Some(Operand::parse(rest.trim())),
    })
}

/// Split off the first whitespace-delimited run
fn split_run(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], &text[end..]),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonpath::ast::ComparisonOp;

    #[test]
    fn single_operand_is_exists() {
        let p = parse_predicate("@.isbn").unwrap();
        assert_eq!(p.left, Operand::Current("@.isbn".into()));
        assert_eq!(p.operator, FilterOperator::Exists);
        assert_eq!(p.right, None);
    }

    #[test]
    fn comparison_with_literal_and_root_reference() {
        let p = parse_predicate("@.price < 10").unwrap();
        assert_eq!(p.operator, FilterOperator::Comparison(ComparisonOp::Less));
        assert_eq!(p.right, Some(Operand::Literal("10".into())));

        let p = parse_predicate("@.price   <=   $.expensive").unwrap();
        assert_eq!(p.operator, FilterOperator::Comparison(ComparisonOp::LessEq));
        assert_eq!(p.right, Some(Operand::Root("$.expensive".into())));
    }

    #[test]
    fn remainder_is_rejoined_as_right_operand() {
        let p = parse_predicate("@.name == John  Smith ").unwrap();
        assert_eq!(p.right, Some(Operand::Literal("John  Smith".into())));
    }

    #[test]
    fn match_and_unknown_operators_are_kept_for_evaluation() {
        assert_eq!(
            parse_predicate("@.author =~ /.*REES/i").unwrap().operator,
            FilterOperator::Match
        );
        assert_eq!(
            parse_predicate("@.a != 1").unwrap().operator,
            FilterOperator::Unknown("!=".into())
        );
    }

    #[test]
    fn operator_without_right_operand_compares_to_empty_literal() {
        let p = parse_predicate("@.a ==").unwrap();
        assert_eq!(p.right, Some(Operand::Literal(String::new())));
    }

    #[test]
    fn blank_predicate_is_malformed() {
        assert!(parse_predicate("   ").is_err());
    }
}
