//! Terminal methods for `PathQuery`
//!
//! Every terminal method validates the configuration before touching the
//! document.

use pathq_engine::{JsonPath, NoopSink, Validator};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::core::PathQuery;
use crate::error::QueryResult;

impl PathQuery<'_> {
    /// Evaluate against `document`
    ///
    /// # Errors
    /// Returns [`QueryError::Config`](crate::QueryError::Config) for an invalid
    /// configuration and [`QueryError::Path`](crate::QueryError::Path) when the
    /// lookup fails.
    pub fn lookup(&self, document: &Value) -> QueryResult<Value> {
        self.config.validate()?;
        tracing::debug!(target: "pathq::query", path = %self.path, "lookup");
        let sink = self.sink.unwrap_or(&NoopSink);
        Ok(pathq_engine::lookup_with(document, &self.path, &self.config, sink)?)
    }

    /// Evaluate against `document` and deserialize the result into `T`
    ///
    /// # Errors
    /// As [`PathQuery::lookup`], plus
    /// [`QueryError::Deserialize`](crate::QueryError::Deserialize) when the
    /// result does not fit `T`.
    pub fn lookup_as<T: DeserializeOwned>(&self, document: &Value) -> QueryResult<T> {
        let value = self.lookup(document)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Compile the path once for repeated evaluation
    ///
    /// # Errors
    /// Returns configuration, tokenizer and classification errors.
    pub fn compile(&self) -> QueryResult<JsonPath> {
        self.config.validate()?;
        Ok(JsonPath::compile_with(&self.path, &self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use pathq_engine::{ErrorKind, LookupStats};
    use serde_json::json;

    use super::*;
    use crate::error::QueryError;

    #[test]
    fn invalid_config_is_rejected_before_lookup() {
        let stats = LookupStats::new();
        let err = PathQuery::new("$.a")
            .max_indices(0)
            .trace(&stats)
            .lookup(&json!({"a": 1}))
            .unwrap_err();
        assert!(matches!(err, QueryError::Config(_)));
        assert_eq!(stats.lookups(), 0);
    }

    #[test]
    fn lookup_errors_keep_their_kind() {
        let err = PathQuery::new("$.b").lookup(&json!({"a": 1})).unwrap_err();
        assert_eq!(err.as_path_error().map(|e| e.kind), Some(ErrorKind::KeyNotFound));
    }

    #[test]
    fn compiled_query_matches_direct_lookup() {
        let doc = json!({"a": [1, 2, 3]});
        let query = PathQuery::new("$.a[1:2]");
        let compiled = query.compile().unwrap();
        assert_eq!(compiled.evaluate(&doc).unwrap(), query.lookup(&doc).unwrap());
    }
}
