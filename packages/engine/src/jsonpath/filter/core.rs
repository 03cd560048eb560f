//! Core filter evaluator
//!
//! Applies a predicate to every element of an array, or every value of an
//! object, keeping the ones that match.

use serde_json::Value;

use super::{
    comparisons::compare_values,
    property::{OperandValue, PropertyResolver},
};
use crate::{
    jsonpath::{
        ast::{FilterOperator, Predicate},
        core_evaluator::property_operations::type_name,
        error::{JsonPathError, JsonPathResult},
        filter_parser::parse_predicate,
    },
    telemetry::{NoopSink, TraceEvent, TraceSink},
};

/// Select the members of `collection` that satisfy `predicate_text`
///
/// `root` is the document `$.` operands are resolved against.
///
/// # Errors
/// Returns `NotFilterable` when `collection` is neither an array nor an
/// object, and propagates predicate parse and evaluation errors.
pub fn get_filtered(collection: &Value, root: &Value, predicate_text: &str) -> JsonPathResult<Vec<Value>> {
    FilterEvaluator::new(root, &NoopSink).get_filtered(collection, predicate_text)
}

/// Filter evaluator bound to a document root and a trace sink
pub struct FilterEvaluator<'a> {
    root: &'a Value,
    sink: &'a dyn TraceSink,
}

impl<'a> FilterEvaluator<'a> {
    #[inline]
    pub fn new(root: &'a Value, sink: &'a dyn TraceSink) -> Self {
        Self { root, sink }
    }

    /// Select matching members, preserving array order
    ///
    /// Object values are visited in key order; the keys themselves are
    /// discarded.
    pub fn get_filtered(&self, collection: &Value, predicate_text: &str) -> JsonPathResult<Vec<Value>> {
        let predicate = parse_predicate(predicate_text)?;

        tracing::debug!(
            target: "pathq::jsonpath::filter",
            predicate = %predicate,
            collection = type_name(collection),
            "get_filtered"
        );

        let candidates: Box<dyn Iterator<Item = &Value> + '_> = match collection {
            Value::Array(items) => Box::new(items.iter()),
            Value::Object(map) => Box::new(map.values()),
            other => return Err(JsonPathError::not_filterable(type_name(other))),
        };

        let mut results = Vec::new();
        for element in candidates {
            let matched = self.eval_predicate(element, &predicate)?;
            self.sink.record(&TraceEvent::FilterEvaluated {
                predicate: predicate_text,
                matched,
            });
            if matched {
                results.push(element.clone());
            }
        }
        Ok(results)
    }

    /// Evaluate a parsed predicate against one element
    pub fn eval_predicate(&self, element: &Value, predicate: &Predicate) -> JsonPathResult<bool> {
        match &predicate.operator {
            FilterOperator::Exists => self.exists(element, predicate),
            FilterOperator::Match => Err(JsonPathError::unsupported("regex match (=~)")),
            FilterOperator::Unknown(op) => Err(JsonPathError::invalid_operator(op.as_str())),
            FilterOperator::Comparison(op) => {
                let left = PropertyResolver::resolve(&predicate.left, element, self.root)?;
                let right = match &predicate.right {
                    Some(operand) => PropertyResolver::resolve(operand, element, self.root)?,
                    None => OperandValue::Literal(""),
                };
                Ok(compare_values(&left, *op, &right))
            }
        }
    }

    /// Presence test; a lookup that misses, or lands on `null`, is absent
    fn exists(&self, element: &Value, predicate: &Predicate) -> JsonPathResult<bool> {
        match PropertyResolver::resolve(&predicate.left, element, self.root) {
            Ok(OperandValue::Value(Value::Null)) => Ok(false),
            Ok(_) => Ok(true),
            Err(e) if !e.kind.is_syntax() => Ok(false),
            Err(e) => Err(e),
        }
    }
}
