//! `JSONPath` expression compiler
//!
//! Tokenizes and classifies a path once so it can be evaluated against many
//! documents.

use std::fmt;

use serde_json::Value;

use crate::{
    config::LookupConfig,
    jsonpath::{
        ast::Step,
        core_evaluator::PathEvaluator,
        error::JsonPathResult,
        selector_parser::classify,
    },
    telemetry::{NoopSink, TraceSink},
};

/// A compiled path expression
///
/// Unlike a one-shot lookup, compilation classifies every step up front, so a
/// malformed step is reported before any document is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    expression: String,
    anchor: String,
    steps: Vec<(String, Step)>,
}

impl JsonPath {
    /// Compile `expression` with the default configuration
    ///
    /// # Errors
    /// Returns the first tokenizer or classification error.
    ///
    /// # Examples
    /// ```
    /// use pathq_engine::jsonpath::JsonPath;
    /// use serde_json::json;
    ///
    /// let path = JsonPath::compile("$.store.book[1].price").unwrap();
    /// let doc = json!({"store": {"book": [{"price": 10}, {"price": 20}]}});
    /// assert_eq!(path.evaluate(&doc).unwrap(), json!(20));
    /// ```
    pub fn compile(expression: &str) -> JsonPathResult<Self> {
        Self::compile_with(expression, &LookupConfig::default())
    }

    /// Compile `expression`, enforcing the path length limit of `config`
    ///
    /// # Errors
    /// Returns the first tokenizer or classification error.
    pub fn compile_with(expression: &str, config: &LookupConfig) -> JsonPathResult<Self> {
        let mut tokens = PathEvaluator::new(config, &NoopSink)
            .tokenize(expression)?
            .into_iter();
        let anchor = tokens.next().unwrap_or_default();

        let steps = tokens
            .map(|token| match classify(&token) {
                Ok(step) => Ok((token, step)),
                Err(e) => Err(e.with_step(token)),
            })
            .collect::<JsonPathResult<Vec<_>>>()?;

        Ok(Self {
            expression: expression.to_string(),
            anchor,
            steps,
        })
    }

    /// Evaluate against `document` with the default configuration
    ///
    /// # Errors
    /// Returns the first accessor or filter error.
    pub fn evaluate(&self, document: &Value) -> JsonPathResult<Value> {
        self.evaluate_with(document, &LookupConfig::default(), &NoopSink)
    }

    /// Evaluate against `document` with an explicit configuration and trace sink
    ///
    /// # Errors
    /// Returns the first accessor or filter error.
    pub fn evaluate_with(
        &self,
        document: &Value,
        config: &LookupConfig,
        sink: &dyn TraceSink,
    ) -> JsonPathResult<Value> {
        PathEvaluator::new(config, sink).evaluate_compiled(document, &self.expression, &self.steps)
    }

    /// The original expression string
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The leading anchor (`$` or `@`)
    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// The classified steps, anchor excluded
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().map(|(_, step)| step)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSONPath('{}')", self.expression)
    }
}
