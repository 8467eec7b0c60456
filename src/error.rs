//! Error types for registration and construction.
//!
//! Every variant is returned eagerly from the call that caused it and is
//! never caught inside the crate: a pattern that does not compile, or a
//! handler whose arity disagrees with its pattern, is a call-site bug to
//! fix, not a runtime condition to recover from. Dispatch itself has no
//! error channel at all — a path that matches nothing is a normal, silent
//! outcome.

use thiserror::Error;

/// Errors returned from route registration and dispatcher construction.
#[derive(Error, Debug)]
pub enum RouterError {
    /// The route pattern is not a valid regular expression.
    #[error("invalid route pattern {pattern:?}: {source}")]
    PatternCompile {
        /// The pattern text as supplied to `add`.
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The pattern's capture group count disagrees with the handler's
    /// declared argument count.
    #[error(
        "route pattern {pattern:?} declares {groups} capture group(s) \
         but the handler takes {args} argument(s)"
    )]
    ArityMismatch {
        /// The pattern text as supplied to `add`.
        pattern: String,
        /// Capture groups declared by the pattern.
        groups: usize,
        /// Arguments accepted by the supplied handler.
        args: usize,
    },

    /// A required collaborator was missing at construction time.
    #[error("dispatcher configuration incomplete: {0}")]
    Configuration(&'static str),
}
