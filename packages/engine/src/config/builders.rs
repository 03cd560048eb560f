//! Builder methods for lookup configuration
//!
//! Fluent `with_*` methods for configuring [`LookupConfig`] instances.

use super::types::{DescentMode, FilterRoot, LookupConfig};

impl LookupConfig {
    /// Choose how `..` steps are applied
    ///
    /// # Examples
    /// ```
    /// use pathq_engine::config::{DescentMode, LookupConfig};
    ///
    /// let config = LookupConfig::default().with_descent(DescentMode::Search);
    /// assert_eq!(config.descent, DescentMode::Search);
    /// ```
    #[must_use]
    pub fn with_descent(mut self, descent: DescentMode) -> Self {
        self.descent = descent;
        self
    }

    /// Choose the document `$.` filter operands are resolved against
    #[must_use]
    pub fn with_filter_root(mut self, filter_root: FilterRoot) -> Self {
        self.filter_root = filter_root;
        self
    }

    /// Set the longest accepted path
    #[must_use]
    pub fn with_max_path_length(mut self, max: usize) -> Self {
        self.max_path_length = max;
        self
    }

    /// Set the most indices accepted in one index step
    #[must_use]
    pub fn with_max_indices(mut self, max: usize) -> Self {
        self.max_indices = max;
        self
    }
}
