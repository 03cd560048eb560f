//! Core tokenizer state machine
//!
//! Scans a path one character at a time, accumulating a buffer that is emitted
//! as a token at each step separator or at the closing bracket of a bracketed
//! segment.

use crate::jsonpath::error::{JsonPathError, JsonPathResult};

/// Synthetic token emitted for a recursive-descent (`..`) marker
pub const SCAN_MARKER: &str = "*";

/// Tokenize a path into its anchor and step tokens
///
/// # Errors
/// Returns `InvalidAnchor` when the path does not start with `$` or `@`.
///
/// # Examples
/// ```
/// use pathq_engine::jsonpath::tokenizer::tokenize;
///
/// let tokens = tokenize("$.a.b[0]").unwrap();
/// assert_eq!(tokens, vec!["$", "a", "b[0]"]);
/// ```
pub fn tokenize(path: &str) -> JsonPathResult<Vec<String>> {
    PathTokenizer::new(path).tokenize()
}

/// Character-at-a-time path tokenizer
pub struct PathTokenizer<'a> {
    input: &'a str,
    tokens: Vec<String>,
    buffer: String,
}

impl<'a> PathTokenizer<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Consume the tokenizer and produce the token sequence
    ///
    /// # Errors
    /// Returns `InvalidAnchor` when the path does not start with `$` or `@`.
    pub fn tokenize(mut self) -> JsonPathResult<Vec<String>> {
        let input = self.input;
        let mut chars = input.chars();

        match chars.next() {
            Some(anchor @ ('$' | '@')) => self.tokens.push(anchor.to_string()),
            _ => return Err(JsonPathError::invalid_anchor(input)),
        }

        for ch in chars {
            self.buffer.push(ch);

            if self.buffer == "." {
                continue;
            }
            if self.buffer == ".." {
                self.push_scan_marker();
                self.reset_to_separator();
                continue;
            }

            if self.buffer.contains('[') {
                // a `]` escaped with a backslash does not close the bracket
                if ch == ']' && !self.buffer.ends_with("\\]") {
                    let token = std::mem::take(&mut self.buffer);
                    self.push_stripped(&token);
                }
            } else if ch == '.' {
                let mut token = std::mem::take(&mut self.buffer);
                token.pop();
                self.push_stripped(&token);
                self.reset_to_separator();
            }
        }

        self.flush();
        Ok(self.tokens)
    }

    /// Emit the buffer left over at end of input
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let token = std::mem::take(&mut self.buffer);
        let token = token.strip_prefix('.').unwrap_or(&token);
        if token == SCAN_MARKER {
            self.push_scan_marker();
        } else {
            self.tokens.push(token.to_string());
        }
    }

    fn push_stripped(&mut self, token: &str) {
        let token = token.strip_prefix('.').unwrap_or(token);
        self.tokens.push(token.to_string());
    }

    /// Runs of scan markers collapse to one
    fn push_scan_marker(&mut self) {
        if self.tokens.last().map(String::as_str) != Some(SCAN_MARKER) {
            self.tokens.push(SCAN_MARKER.to_string());
        }
    }

    fn reset_to_separator(&mut self) {
        self.buffer.clear();
        self.buffer.push('.');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonpath::error::ErrorKind;

    fn toks(path: &str) -> Vec<String> {
        tokenize(path).expect("path should tokenize")
    }

    #[test]
    fn splits_dotted_keys_and_brackets() {
        assert_eq!(toks("$.a.b[0]"), vec!["$", "a", "b[0]"]);
        assert_eq!(toks("$.store.book[0,1].price"), vec!["$", "store", "book[0,1]", "price"]);
    }

    #[test]
    fn accepts_current_node_anchor() {
        assert_eq!(toks("@.price"), vec!["@", "price"]);
        assert_eq!(toks("@"), vec!["@"]);
    }

    #[test]
    fn rejects_missing_anchor() {
        for path in ["store.book", "", ".a", "a$"] {
            let err = tokenize(path).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidAnchor, "path {path:?}");
        }
    }

    #[test]
    fn double_dot_emits_single_scan_marker() {
        assert_eq!(toks("$..author"), vec!["$", "*", "author"]);
        assert_eq!(toks("$.a..b"), vec!["$", "a", "*", "b"]);
        assert_eq!(toks("$...b"), vec!["$", "*", "b"]);
    }

    #[test]
    fn trailing_wildcard_is_deduplicated() {
        assert_eq!(toks("$..*"), vec!["$", "*"]);
        assert_eq!(toks("$.a.*"), vec!["$", "a", "*"]);
    }

    #[test]
    fn filter_bracket_is_one_token_even_with_dots_and_spaces() {
        assert_eq!(
            toks("$.items[?(@.v > 2)]"),
            vec!["$", "items[?(@.v > 2)]"]
        );
        assert_eq!(
            toks("$.book[?(@.price <= $.expensive)].title"),
            vec!["$", "book[?(@.price <= $.expensive)]", "title"]
        );
    }

    #[test]
    fn escaped_bracket_does_not_close_segment() {
        assert_eq!(toks(r"$.a[x\]y]"), vec!["$", r"a[x\]y]"]);
    }

    #[test]
    fn consecutive_brackets_become_separate_tokens() {
        assert_eq!(toks("$.a[0][1]"), vec!["$", "a[0]", "[1]"]);
    }

    #[test]
    fn trailing_separator_flushes_empty_token() {
        assert_eq!(toks("$.a."), vec!["$", "a", ""]);
    }
}
