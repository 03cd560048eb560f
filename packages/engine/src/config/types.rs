//! Core lookup configuration structure and field definitions

use serde::{Deserialize, Serialize};

/// Default upper bound on path length, in bytes
pub(crate) const DEFAULT_MAX_PATH_LENGTH: usize = 4096;

/// Default upper bound on indices in one index step
pub(crate) const DEFAULT_MAX_INDICES: usize = 1024;

/// How a recursive-descent (`..`) step is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescentMode {
    /// The scan step leaves the current value untouched
    #[default]
    Passthrough,
    /// The scan step expands the current value into itself plus every
    /// descendant (pre-order), so the next key step matches at any depth
    Search,
}

/// Which document `$.` operands inside a filter predicate are resolved against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterRoot {
    /// The caller's document as passed to the lookup
    #[default]
    Original,
    /// The deep copy taken at the start of the lookup
    WorkingCopy,
}

/// Lookup configuration
///
/// Central configuration struct for a single lookup. The defaults reproduce
/// the engine's standard behavior, so `LookupConfig::default()` is what the
/// plain `lookup` entry point uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Recursive descent handling
    pub descent: DescentMode,

    /// Root used for `$.` references inside filters
    pub filter_root: FilterRoot,

    /// Longest accepted path, in bytes
    pub max_path_length: usize,

    /// Most indices accepted in one index step
    pub max_indices: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            descent: DescentMode::Passthrough,
            filter_root: FilterRoot::Original,
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            max_indices: DEFAULT_MAX_INDICES,
        }
    }
}
