//! `JSONPath` step and predicate definitions
//!
//! Core type definitions for representing one classified path token (a [`Step`])
//! and the parsed form of a filter predicate.

use std::fmt;

/// One classified unit of a path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Leading anchor (`$` for the document root, `@` for the current node)
    Root(String),

    /// Child property access (`.name`)
    Key {
        /// Name of the child to select
        name: String,
    },

    /// Recursive descent marker (`..`)
    WildcardScan,

    /// Positional access on the array found under `name` (`name[0]`, `name[0,-1]`)
    Index {
        /// Name of the child holding the array (may be empty for a bare bracket)
        name: String,
        /// Requested positions in the order written, duplicates allowed
        indices: Vec<i64>,
    },

    /// Inclusive sub-sequence of the array found under `name` (`name[1:3]`, `name[*]`)
    Range {
        /// Name of the child holding the array
        name: String,
        /// First position, `None` for open start
        from: Option<i64>,
        /// Last position (inclusive), `None` for open end
        to: Option<i64>,
    },

    /// Predicate selection over the collection found under `name` (`name[?(@.v > 2)]`)
    Filter {
        /// Name of the child holding the collection
        name: String,
        /// Trimmed predicate text between `?(` and `)`
        predicate: String,
    },
}

impl Step {
    /// Child name this step descends into before applying its operation
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Step::Root(_) | Step::WildcardScan => None,
            Step::Key { name }
            | Step::Index { name, .. }
            | Step::Range { name, .. }
            | Step::Filter { name, .. } => Some(name),
        }
    }

    /// Short operation label used in logs and trace events
    #[must_use]
    pub fn op_name(&self) -> &'static str {
        match self {
            Step::Root(_) => "root",
            Step::Key { .. } => "key",
            Step::WildcardScan => "scan",
            Step::Index { .. } => "idx",
            Step::Range { .. } => "range",
            Step::Filter { .. } => "filter",
        }
    }
}

/// Comparison operators for filter predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// Less than comparison (<)
    Less,
    /// Less than or equal comparison (<=)
    LessEq,
    /// Equality comparison (==)
    Equal,
    /// Greater than or equal comparison (>=)
    GreaterEq,
    /// Greater than comparison (>)
    Greater,
}

impl ComparisonOp {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOp::Less => "<",
            ComparisonOp::LessEq => "<=",
            ComparisonOp::Equal => "==",
            ComparisonOp::GreaterEq => ">=",
            ComparisonOp::Greater => ">",
        }
    }
}

/// Operator position of a predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOperator {
    /// Unary presence test (`[?(@.isbn)]`)
    Exists,
    /// Regular expression match (`=~`), reserved
    Match,
    /// Ordering or equality comparison
    Comparison(ComparisonOp),
    /// Anything else; rejected when the predicate is evaluated
    Unknown(String),
}

impl FilterOperator {
    /// Map an operator token to its operator
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "<" => FilterOperator::Comparison(ComparisonOp::Less),
            "<=" => FilterOperator::Comparison(ComparisonOp::LessEq),
            "==" => FilterOperator::Comparison(ComparisonOp::Equal),
            ">=" => FilterOperator::Comparison(ComparisonOp::GreaterEq),
            ">" => FilterOperator::Comparison(ComparisonOp::Greater),
            "=~" => FilterOperator::Match,
            other => FilterOperator::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOperator::Exists => f.write_str("exists"),
            FilterOperator::Match => f.write_str("=~"),
            FilterOperator::Comparison(op) => f.write_str(op.as_str()),
            FilterOperator::Unknown(op) => f.write_str(op),
        }
    }
}

/// One side of a predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Sub-path relative to the element under test (`@.price`)
    Current(String),
    /// Sub-path relative to the document root (`$.expensive`)
    Root(String),
    /// Literal text used as-is (`10`, `"red"`)
    Literal(String),
}

impl Operand {
    /// Classify operand text by its prefix
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.starts_with("@.") {
            Operand::Current(text.to_string())
        } else if text.starts_with("$.") {
            Operand::Root(text.to_string())
        } else {
            Operand::Literal(text.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Operand::Current(s) | Operand::Root(s) | Operand::Literal(s) => s,
        }
    }
}

/// Parsed filter predicate: `left`, operator, optional `right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub left: Operand,
    pub operator: FilterOperator,
    /// Absent for `exists`
    pub right: Option<Operand>,
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.operator, &self.right) {
            (FilterOperator::Exists, _) | (_, None) => f.write_str(self.left.as_str()),
            (op, Some(right)) => write!(f, "{} {} {}", self.left.as_str(), op, right.as_str()),
        }
    }
}
