//! Route pattern compilation.
//!
//! A route pattern is a plain `regex` expression. It is compiled here with
//! full-string anchoring, so a route matches the entire path end to end,
//! never a prefix or substring: `/pippo` matches `/pippo` and nothing else,
//! not `/pippo/` and not `/p/ippo`.

use regex::Regex;

use crate::error::RouterError;

/// Compiles a route pattern with full-string anchoring.
///
/// The pattern is wrapped in `^(?:...)$` before compilation. The
/// non-capturing group keeps top-level alternations contained and leaves
/// the capture group numbering untouched.
pub(crate) fn compile(pattern: &str) -> Result<Regex, RouterError> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| RouterError::PatternCompile {
        pattern: pattern.to_string(),
        source,
    })
}

/// Number of capture groups declared by a compiled pattern.
///
/// `captures_len` counts the implicit whole-match group; the anchoring
/// wrapper adds no groups of its own.
pub(crate) fn group_count(regex: &Regex) -> usize {
    regex.captures_len() - 1
}
