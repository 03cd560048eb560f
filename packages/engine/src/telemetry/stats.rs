//! Lookup statistics

use std::sync::atomic::{AtomicU64, Ordering};

use super::sink::{TraceEvent, TraceSink};

/// Counting trace sink
///
/// Safe to share between threads; every counter is updated with relaxed
/// atomics.
#[derive(Debug, Default)]
pub struct LookupStats {
    /// Number of lookups started, including ones rejected before evaluation
    pub lookups: AtomicU64,
    /// Number of steps applied successfully
    pub steps_applied: AtomicU64,
    /// Number of predicate evaluations
    pub filter_evaluations: AtomicU64,
    /// Number of predicate evaluations that matched
    pub filter_matches: AtomicU64,
    /// Number of failed lookups
    pub errors: AtomicU64,
}

impl LookupStats {
    /// Create new lookup statistics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn steps_applied(&self) -> u64 {
        self.steps_applied.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn filter_evaluations(&self) -> u64 {
        self.filter_evaluations.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn filter_matches(&self) -> u64 {
        self.filter_matches.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn errors(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }
}

impl TraceSink for LookupStats {
    fn record(&self, event: &TraceEvent<'_>) {
        match event {
            TraceEvent::Started { .. } => {
                self.lookups.fetch_add(1, Ordering::Relaxed);
            }
            TraceEvent::Tokenized { .. } | TraceEvent::DeepCopied => {}
            TraceEvent::StepApplied { .. } => {
                self.steps_applied.fetch_add(1, Ordering::Relaxed);
            }
            TraceEvent::FilterEvaluated { matched, .. } => {
                self.filter_evaluations.fetch_add(1, Ordering::Relaxed);
                if *matched {
                    self.filter_matches.fetch_add(1, Ordering::Relaxed);
                }
            }
            TraceEvent::Failed { .. } => {
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}
