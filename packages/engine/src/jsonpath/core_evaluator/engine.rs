//! Path evaluator
//!
//! Drives a lookup: tokenize, take the working copy, then fold the value
//! through each step in order, stopping at the first error.

use std::borrow::Cow;

use serde_json::Value;

use super::{
    array_operations::{get_index, get_range},
    property_operations::{PropertyOperations, get_key},
};
use crate::{
    config::{DescentMode, FilterRoot, LookupConfig},
    jsonpath::{
        ast::Step,
        error::{JsonPathError, JsonPathResult},
        filter::FilterEvaluator,
        selector_parser::classify,
        tokenizer::tokenize,
    },
    telemetry::{TraceEvent, TraceSink},
};

/// Evaluator for a single lookup configuration and trace sink
///
/// Holds no state between calls; every lookup tokenizes, copies and walks
/// afresh.
pub struct PathEvaluator<'a> {
    config: &'a LookupConfig,
    sink: &'a dyn TraceSink,
}

impl<'a> PathEvaluator<'a> {
    #[inline]
    pub fn new(config: &'a LookupConfig, sink: &'a dyn TraceSink) -> Self {
        Self { config, sink }
    }

    /// Evaluate `path` against `document`
    ///
    /// Each token is classified just before it is applied, so an error in an
    /// earlier step is reported even when a later token is malformed.
    ///
    /// # Errors
    /// Returns the first tokenizer, classification or accessor error,
    /// annotated with the token of the failing step.
    pub fn lookup(&self, document: &Value, path: &str) -> JsonPathResult<Value> {
        self.sink.record(&TraceEvent::Started { path });
        let result = self.tokenize(path).and_then(|tokens| {
            let steps = tokens
                .iter()
                .skip(1)
                .map(|token| (token.as_str(), classify(token).map(Cow::Owned)));
            self.evaluate(document, steps)
        });
        self.report(result)
    }

    /// Evaluate pre-classified steps (anchor excluded) of `expression` against `document`
    pub(crate) fn evaluate_compiled(
        &self,
        document: &Value,
        expression: &str,
        steps: &[(String, Step)],
    ) -> JsonPathResult<Value> {
        self.sink.record(&TraceEvent::Started { path: expression });
        let steps = steps
            .iter()
            .map(|(token, step)| (token.as_str(), Ok(Cow::Borrowed(step))));
        let result = self.evaluate(document, steps);
        self.report(result)
    }

    /// Tokenize `path` and check its anchor
    pub(crate) fn tokenize(&self, path: &str) -> JsonPathResult<Vec<String>> {
        if path.len() > self.config.max_path_length {
            return Err(JsonPathError::unsupported(format!(
                "path of {} bytes (configured maximum is {})",
                path.len(),
                self.config.max_path_length
            )));
        }

        let tokens = tokenize(path)?;
        tracing::debug!(
            target: "pathq::jsonpath",
            jsonpath = %path,
            steps = ?tokens,
            "tokenize"
        );
        self.sink.record(&TraceEvent::Tokenized {
            path,
            tokens: &tokens,
        });

        match tokens.first().map(String::as_str) {
            Some("$" | "@") => Ok(tokens),
            _ => Err(JsonPathError::invalid_anchor(path)),
        }
    }

    fn evaluate<'s, I>(&self, document: &Value, steps: I) -> JsonPathResult<Value>
    where
        I: IntoIterator<Item = (&'s str, JsonPathResult<Cow<'s, Step>>)>,
    {
        let working = document.clone();
        tracing::trace!(target: "pathq::jsonpath", "deepcopy");
        self.sink.record(&TraceEvent::DeepCopied);

        let filter_root = match self.config.filter_root {
            FilterRoot::Original => document,
            FilterRoot::WorkingCopy => &working,
        };

        let mut current: Option<Value> = None;
        for (token, step) in steps {
            let value = current.as_ref().unwrap_or(&working);
            let step = step.map_err(|e| e.with_step(token))?;
            let next = self
                .apply_step(value, filter_root, &step)
                .map_err(|e| e.with_step(token))?;

            tracing::trace!(
                target: "pathq::jsonpath",
                token = %token,
                op = step.op_name(),
                "step applied"
            );
            self.sink.record(&TraceEvent::StepApplied {
                token,
                op: step.op_name(),
            });
            current = Some(next);
        }

        Ok(current.unwrap_or(working))
    }

    /// Apply one step to the current value
    fn apply_step(&self, value: &Value, filter_root: &Value, step: &Step) -> JsonPathResult<Value> {
        match step {
            Step::Root(anchor) => Err(JsonPathError::unsupported(format!(
                "anchor '{anchor}' after the start of a path"
            ))),
            Step::Key { name } => get_key(value, name),
            Step::WildcardScan => match self.config.descent {
                DescentMode::Passthrough => Ok(value.clone()),
                DescentMode::Search => Ok(Value::Array(PropertyOperations::collect_descendants(value))),
            },
            Step::Index { name, indices } => {
                let keyed = get_key(value, name)?;
                match indices.as_slice() {
                    [] => Err(JsonPathError::empty_index_set()),
                    [index] => get_index(&keyed, *index),
                    many if many.len() > self.config.max_indices => {
                        Err(JsonPathError::unsupported(format!(
                            "index step with {} indices (configured maximum is {})",
                            many.len(),
                            self.config.max_indices
                        )))
                    }
                    many => many
                        .iter()
                        .map(|&index| get_index(&keyed, index))
                        .collect::<JsonPathResult<Vec<_>>>()
                        .map(Value::Array),
                }
            }
            Step::Range { name, from, to } => get_range(&get_key(value, name)?, *from, *to),
            Step::Filter { name, predicate } => {
                let keyed = get_key(value, name)?;
                FilterEvaluator::new(filter_root, self.sink)
                    .get_filtered(&keyed, predicate)
                    .map(Value::Array)
            }
        }
    }

    fn report(&self, result: JsonPathResult<Value>) -> JsonPathResult<Value> {
        if let Err(error) = &result {
            tracing::debug!(
                target: "pathq::jsonpath",
                kind = %error.kind,
                step = ?error.step,
                "lookup failed: {error}"
            );
            self.sink.record(&TraceEvent::Failed { error });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{jsonpath::error::ErrorKind, telemetry::NoopSink};

    fn eval(doc: &Value, path: &str) -> JsonPathResult<Value> {
        PathEvaluator::new(&LookupConfig::default(), &NoopSink).lookup(doc, path)
    }

    #[test]
    fn anchor_only_returns_whole_document() {
        let doc = json!({"a": 1});
        assert_eq!(eval(&doc, "$").unwrap(), doc);
        assert_eq!(eval(&doc, "@").unwrap(), doc);
    }

    #[test]
    fn data_error_on_earlier_step_wins_over_later_syntax_error() {
        let doc = json!({"a": 1});
        let err = eval(&doc, "$.missing.b[x]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::KeyNotFound);
        assert_eq!(err.step(), Some("missing"));
    }

    #[test]
    fn malformed_step_is_annotated() {
        let err = eval(&json!({"a": [1]}), "$.a[1:2:3]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedRange);
        assert_eq!(err.step(), Some("a[1:2:3]"));
    }

    #[test]
    fn hand_built_empty_index_step_fails() {
        let config = LookupConfig::default();
        let evaluator = PathEvaluator::new(&config, &NoopSink);
        let steps = vec![(
            "a".to_string(),
            Step::Index {
                name: "a".into(),
                indices: vec![],
            },
        )];
        let err = evaluator
            .evaluate_compiled(&json!({"a": [1]}), "$.a[]", &steps)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyIndexSet);
    }

    #[test]
    fn too_many_indices_are_rejected() {
        let config = LookupConfig::default().with_max_indices(2);
        let evaluator = PathEvaluator::new(&config, &NoopSink);
        let doc = json!({"a": [1, 2, 3]});
        assert_eq!(evaluator.lookup(&doc, "$.a[0,1]").unwrap(), json!([1, 2]));
        let err = evaluator.lookup(&doc, "$.a[0,1,2]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unsupported);
    }

    #[test]
    fn overlong_path_is_rejected() {
        let config = LookupConfig::default().with_max_path_length(4);
        let evaluator = PathEvaluator::new(&config, &NoopSink);
        assert!(evaluator.lookup(&json!({"a": 1}), "$.a").is_ok());
        let err = evaluator.lookup(&json!({"ab": 1}), "$.ab.c").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unsupported);
    }

    #[test]
    fn root_anchor_mid_path_is_unsupported() {
        let err = eval(&json!({"a": {"b": 1}}), "$.a.$").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unsupported);
    }
}
