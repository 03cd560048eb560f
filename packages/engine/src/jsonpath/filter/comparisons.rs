//! Comparison operations for filter predicates
//!
//! Both sides are rendered to text. When both texts are numbers the comparison
//! is numeric (exact for integers), otherwise it is a lexicographic comparison
//! of the texts.

use std::cmp::Ordering;

use super::property::OperandValue;
use crate::jsonpath::ast::ComparisonOp;

/// Compare two resolved operands using the specified operator
pub fn compare_values(left: &OperandValue<'_>, op: ComparisonOp, right: &OperandValue<'_>) -> bool {
    let left = left.textual();
    let right = right.textual();

    let ordering = match (left.trim().parse::<i64>(), right.trim().parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => match (as_number(&left), as_number(&right)) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => left.as_ref().cmp(right.as_ref()),
        },
    };

    tracing::trace!(
        target: "pathq::jsonpath::filter",
        left = %left,
        right = %right,
        op = op.as_str(),
        ordering = ?ordering,
        "cmp_any"
    );

    match op {
        ComparisonOp::Less => ordering == Ordering::Less,
        ComparisonOp::LessEq => ordering != Ordering::Greater,
        ComparisonOp::Equal => ordering == Ordering::Equal,
        ComparisonOp::GreaterEq => ordering != Ordering::Less,
        ComparisonOp::Greater => ordering == Ordering::Greater,
    }
}

#[inline]
fn as_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn cmp(left: OperandValue<'_>, op: ComparisonOp, right: OperandValue<'_>) -> bool {
        compare_values(&left, op, &right)
    }

    #[test]
    fn numbers_compare_numerically() {
        use OperandValue::{Literal, Value};
        assert!(cmp(Value(json!(5)), ComparisonOp::Greater, Literal("2")));
        assert!(cmp(Value(json!(10)), ComparisonOp::Less, Literal("9.5e1")));
        assert!(cmp(Value(json!(10.0)), ComparisonOp::Equal, Literal("10")));
        assert!(!cmp(Value(json!(9)), ComparisonOp::Greater, Literal("10")));
        assert!(cmp(Value(json!(-3)), ComparisonOp::LessEq, Literal("-3")));
    }

    #[test]
    fn large_integers_compare_exactly() {
        use OperandValue::{Literal, Value};
        assert!(cmp(
            Value(json!(9007199254740993_i64)),
            ComparisonOp::Greater,
            Literal("9007199254740992")
        ));
    }

    #[test]
    fn non_numeric_operands_compare_textually() {
        use OperandValue::{Literal, Value};
        assert!(cmp(Value(json!("red")), ComparisonOp::Equal, Literal("\"red\"")));
        assert!(cmp(Value(json!("apple")), ComparisonOp::Less, Literal("banana")));
        assert!(cmp(Value(json!(true)), ComparisonOp::Equal, Literal("true")));
        assert!(cmp(Value(json!(null)), ComparisonOp::Equal, Literal("null")));
        assert!(!cmp(Value(json!("10")), ComparisonOp::Equal, Literal("ten")));
    }

    #[test]
    fn numeric_strings_compare_as_numbers() {
        use OperandValue::{Literal, Value};
        assert!(cmp(Value(json!("10")), ComparisonOp::Greater, Literal("9")));
    }

    #[test]
    fn nan_text_is_not_a_number() {
        use OperandValue::{Literal, Value};
        assert!(cmp(Value(json!("nan")), ComparisonOp::Greater, Literal("5")));
    }
}
