//! Trace sink interface and the built-in sinks

use crate::jsonpath::error::JsonPathError;

/// Something the evaluator did during a lookup
#[derive(Debug, Clone, Copy)]
pub enum TraceEvent<'a> {
    /// A lookup began; recorded before the path is checked
    Started { path: &'a str },
    /// The path was split into tokens (anchor included)
    Tokenized {
        path: &'a str,
        tokens: &'a [String],
    },
    /// The working copy of the document was taken
    DeepCopied,
    /// One step was applied successfully
    StepApplied {
        token: &'a str,
        op: &'static str,
    },
    /// A predicate was evaluated against one candidate element
    FilterEvaluated {
        predicate: &'a str,
        matched: bool,
    },
    /// The lookup failed
    Failed { error: &'a JsonPathError },
}

/// Receiver for evaluator trace events
pub trait TraceSink: Send + Sync {
    /// Record one event
    fn record(&self, event: &TraceEvent<'_>);
}

/// Sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    #[inline]
    fn record(&self, _event: &TraceEvent<'_>) {}
}

/// Sink that forwards events to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, event: &TraceEvent<'_>) {
        match event {
            TraceEvent::Started { path } => {
                tracing::debug!(target: "pathq::trace", path = %path, "lookup");
            }
            TraceEvent::Tokenized { path, tokens } => {
                tracing::debug!(target: "pathq::trace", path = %path, tokens = ?tokens, "tokenize");
            }
            TraceEvent::DeepCopied => {
                tracing::debug!(target: "pathq::trace", "deepcopy");
            }
            TraceEvent::StepApplied { token, op } => {
                tracing::debug!(target: "pathq::trace", token = %token, op = %op, "step");
            }
            TraceEvent::FilterEvaluated { predicate, matched } => {
                tracing::debug!(
                    target: "pathq::trace",
                    predicate = %predicate,
                    matched = matched,
                    "eval_filter"
                );
            }
            TraceEvent::Failed { error } => {
                tracing::debug!(
                    target: "pathq::trace",
                    kind = %error.kind,
                    step = ?error.step,
                    error = %error,
                    "lookup failed"
                );
            }
        }
    }
}
