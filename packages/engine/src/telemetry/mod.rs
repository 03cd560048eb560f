//! Lookup tracing and statistics
//!
//! The evaluator reports what it does to an injected [`TraceSink`]. The default
//! sink discards everything; [`TracingSink`] forwards events to `tracing` and
//! [`LookupStats`] counts them.

pub mod sink;
pub mod stats;

pub use sink::{NoopSink, TraceEvent, TraceSink, TracingSink};
pub use stats::LookupStats;
