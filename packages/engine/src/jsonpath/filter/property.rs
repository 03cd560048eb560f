//! Operand resolution for filter predicates
//!
//! Explicit operand paths are a restricted form of path evaluation: only key
//! steps and single-index steps are allowed.

use std::borrow::Cow;

use serde_json::Value;

use crate::jsonpath::{
    ast::{Operand, Step},
    core_evaluator::{get_index, get_key},
    error::{JsonPathError, JsonPathResult},
    selector_parser::classify,
    tokenizer::tokenize,
};

/// A resolved operand
#[derive(Debug, Clone, PartialEq)]
pub enum OperandValue<'a> {
    /// Value reached by an explicit `@.` or `$.` path
    Value(Value),
    /// Literal text from the predicate
    Literal(&'a str),
}

impl OperandValue<'_> {
    /// Textual representation used for comparisons
    ///
    /// Strings compare by content, literals lose one pair of matching quotes,
    /// everything else renders as JSON.
    pub fn textual(&self) -> Cow<'_, str> {
        match self {
            OperandValue::Literal(text) => Cow::Borrowed(strip_quotes(text)),
            OperandValue::Value(Value::String(s)) => Cow::Borrowed(s.as_str()),
            OperandValue::Value(other) => Cow::Owned(other.to_string()),
        }
    }
}

fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

/// Operand resolution utilities
pub struct PropertyResolver;

impl PropertyResolver {
    /// Resolve an operand against the element under test and the document root
    pub fn resolve<'a>(
        operand: &'a Operand,
        element: &Value,
        root: &Value,
    ) -> JsonPathResult<OperandValue<'a>> {
        match operand {
            Operand::Current(path) => Self::resolve_path(element, path).map(OperandValue::Value),
            Operand::Root(path) => Self::resolve_path(root, path).map(OperandValue::Value),
            Operand::Literal(text) => Ok(OperandValue::Literal(text.as_str())),
        }
    }

    /// Evaluate an explicit operand path rooted at `base`
    ///
    /// Errors name the operand in their message and carry no step, so the
    /// enclosing filter step is what gets annotated.
    pub fn resolve_path(base: &Value, path: &str) -> JsonPathResult<Value> {
        let tokens = tokenize(path)?;
        tracing::trace!(
            target: "pathq::jsonpath::filter",
            path = %path,
            steps = ?tokens,
            "resolving operand path"
        );

        let mut current: Option<Value> = None;
        for token in tokens.iter().skip(1) {
            let value = current.as_ref().unwrap_or(base);
            let next = Self::apply_operand_step(value, token).map_err(|e| {
                JsonPathError::new(
                    e.kind,
                    format!("{} (filter operand '{path}', at '{token}')", e.message),
                )
            })?;
            current = Some(next);
        }

        Ok(current.unwrap_or_else(|| base.clone()))
    }

    fn apply_operand_step(value: &Value, token: &str) -> JsonPathResult<Value> {
        match classify(token)? {
            Step::Key { name } => get_key(value, &name),
            Step::Index { name, indices } => match indices.as_slice() {
                [index] => get_index(&get_key(value, &name)?, *index),
                _ => Err(JsonPathError::unsupported("multiple indices in a filter operand")),
            },
            other => Err(JsonPathError::unsupported(format!(
                "{} step in a filter operand",
                other.op_name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::jsonpath::error::ErrorKind;

    #[test]
    fn resolves_keys_and_single_indices() {
        let element = json!({"a": {"b": [10, 20, 30]}});
        assert_eq!(
            PropertyResolver::resolve_path(&element, "@.a.b[-1]").unwrap(),
            json!(30)
        );
        assert_eq!(PropertyResolver::resolve_path(&element, "@").unwrap(), element);
    }

    #[test]
    fn operand_errors_name_the_operand_and_leave_step_unset() {
        let err = PropertyResolver::resolve_path(&json!({"a": 1}), "@.b").unwrap_err();
        assert_eq!(err.kind, ErrorKind::KeyNotFound);
        assert_eq!(err.step(), None);
        assert!(err.message.contains("'@.b'"), "{}", err.message);
    }

    #[test]
    fn rejects_steps_other_than_key_and_index() {
        let element = json!({"a": [1, 2, 3]});
        for path in ["@.a[0,1]", "@.a[0:1]", "@.a[?(@.x)]", "@..a"] {
            let err = PropertyResolver::resolve_path(&element, path).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Unsupported, "path {path}");
        }
    }

    #[test]
    fn literal_quotes_are_stripped_once() {
        assert_eq!(OperandValue::Literal("\"red\"").textual(), "red");
        assert_eq!(OperandValue::Literal("'red'").textual(), "red");
        assert_eq!(OperandValue::Literal("\"red'").textual(), "\"red'");
        assert_eq!(OperandValue::Value(json!("\"q\"")).textual(), "\"q\"");
        assert_eq!(OperandValue::Value(json!(1.5)).textual(), "1.5");
    }
}
