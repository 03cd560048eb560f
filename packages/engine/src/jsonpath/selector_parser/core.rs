//! Core step classifier
//!
//! Dispatches a token to the root, scan, key or bracket forms.

use crate::jsonpath::{
    ast::Step,
    error::{JsonPathError, JsonPathResult},
    tokenizer::SCAN_MARKER,
};

/// Classify a single path token
///
/// # Errors
/// Returns `MalformedBracket`, `MalformedFilter`, `MalformedRange` or
/// `InvalidIndex` when the bracketed part of the token is not recognized.
///
/// # Examples
/// ```
/// use pathq_engine::jsonpath::{ast::Step, selector_parser::classify};
///
/// let step = classify("b[0]").unwrap();
/// assert_eq!(step, Step::Index { name: "b".into(), indices: vec![0] });
/// ```
pub fn classify(token: &str) -> JsonPathResult<Step> {
    StepClassifier::new(token).classify()
}

/// Classifier for an individual path token
pub struct StepClassifier<'a> {
    pub(super) token: &'a str,
}

impl<'a> StepClassifier<'a> {
    #[inline]
    pub fn new(token: &'a str) -> Self {
        Self { token }
    }

    /// Determine the operation kind of the token and decode its arguments
    pub fn classify(&self) -> JsonPathResult<Step> {
        if self.token == "$" {
            return Ok(Step::Root("$".to_string()));
        }
        if self.token == SCAN_MARKER {
            return Ok(Step::WildcardScan);
        }

        let Some(bracket_idx) = self.token.find('[') else {
            return Ok(Step::Key {
                name: self.token.to_string(),
            });
        };

        let name = &self.token[..bracket_idx];
        let tail = self.bracket_contents(&self.token[bracket_idx..])?;

        tracing::trace!(
            target: "pathq::jsonpath::classify",
            key = %name,
            tail = %tail,
            "parsing token"
        );

        super::bracket::parse_bracket(name, tail)
    }

    /// Strip the surrounding brackets, requiring at least one character inside
    fn bracket_contents(&self, bracketed: &'a str) -> JsonPathResult<&'a str> {
        bracketed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .filter(|inner| !inner.is_empty())
            .ok_or_else(|| JsonPathError::malformed_bracket(self.token))
    }
}
