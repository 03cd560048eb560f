//! Core `PathQuery` structure and configuration methods

use std::fmt;

use pathq_engine::{DescentMode, FilterRoot, LookupConfig, TraceSink};

/// Fluent builder for a single path lookup
///
/// # Examples
/// ```
/// use pathq::{DescentMode, PathQuery};
/// use serde_json::json;
///
/// let doc = json!({"a": {"author": "x"}, "b": {"author": "y"}});
/// let authors = PathQuery::new("$..author")
///     .descent(DescentMode::Search)
///     .lookup(&doc)
///     .unwrap();
/// assert_eq!(authors, json!(["x", "y"]));
/// ```
#[derive(Clone)]
pub struct PathQuery<'a> {
    pub(crate) path: String,
    pub(crate) config: LookupConfig,
    pub(crate) sink: Option<&'a dyn TraceSink>,
}

impl<'a> PathQuery<'a> {
    /// Start a query for `path` with the default configuration
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            config: LookupConfig::default(),
            sink: None,
        }
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: LookupConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how `..` steps are applied
    #[must_use]
    pub fn descent(mut self, descent: DescentMode) -> Self {
        self.config = self.config.with_descent(descent);
        self
    }

    /// Set which document `$.` filter operands resolve against
    #[must_use]
    pub fn filter_root(mut self, filter_root: FilterRoot) -> Self {
        self.config = self.config.with_filter_root(filter_root);
        self
    }

    #[must_use]
    pub fn max_path_length(mut self, max: usize) -> Self {
        self.config = self.config.with_max_path_length(max);
        self
    }

    #[must_use]
    pub fn max_indices(mut self, max: usize) -> Self {
        self.config = self.config.with_max_indices(max);
        self
    }

    /// Send lookup events to `sink`
    #[must_use]
    pub fn trace(mut self, sink: &'a dyn TraceSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The path this query evaluates
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The configuration this query evaluates with
    #[must_use]
    pub fn lookup_config(&self) -> &LookupConfig {
        &self.config
    }
}

impl fmt::Debug for PathQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathQuery")
            .field("path", &self.path)
            .field("config", &self.config)
            .field("traced", &self.sink.is_some())
            .finish()
    }
}
