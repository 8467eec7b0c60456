//! Arity-tagged route handlers.
//!
//! The handler for a route is a sum type whose tag is its arity: a pattern
//! with two capture groups takes an [`Handler::Arity2`], and registration
//! rejects anything else. Each variant wraps an *unbound* function over the
//! receiver type `R`; the receiver itself is held by the
//! [`Dispatcher`](crate::Dispatcher) and supplied at invocation time, so a
//! handler value is nothing more than "which method to call and how many
//! captures it expects".

use std::fmt;

/// A route handler taking zero to three captured path segments.
///
/// Captures are handed over as opaque `&str`s in left-to-right group
/// order. No conversion or validation happens beyond the regex having
/// matched; it is up to the handler to parse them further.
///
/// # Examples
///
/// ```
/// use caret_router::Handler;
///
/// struct Views;
///
/// impl Views {
///     fn index(&mut self) {}
///     fn year_archive(&mut self, _year: &str) {}
/// }
///
/// assert_eq!(Handler::Arity0(Views::index).arity(), 0);
/// assert_eq!(Handler::Arity1(Views::year_archive).arity(), 1);
/// ```
pub enum Handler<R> {
    /// Handler for a pattern with no capture groups.
    Arity0(fn(&mut R)),
    /// Handler for a pattern with one capture group.
    Arity1(fn(&mut R, &str)),
    /// Handler for a pattern with two capture groups.
    Arity2(fn(&mut R, &str, &str)),
    /// Handler for a pattern with three capture groups.
    Arity3(fn(&mut R, &str, &str, &str)),
}

impl<R> Handler<R> {
    /// Number of captured arguments this handler accepts.
    pub fn arity(&self) -> usize {
        match self {
            Handler::Arity0(_) => 0,
            Handler::Arity1(_) => 1,
            Handler::Arity2(_) => 2,
            Handler::Arity3(_) => 3,
        }
    }

    /// Invokes the handler against `receiver` with the captured groups.
    ///
    /// `captures` holds exactly `self.arity()` strings; the route table
    /// establishes that at registration and the match preserves it.
    pub(crate) fn invoke(&self, receiver: &mut R, captures: &[String]) {
        match self {
            Handler::Arity0(f) => f(receiver),
            Handler::Arity1(f) => f(receiver, &captures[0]),
            Handler::Arity2(f) => f(receiver, &captures[0], &captures[1]),
            Handler::Arity3(f) => f(receiver, &captures[0], &captures[1], &captures[2]),
        }
    }
}

// Manual impls: the derives would demand `R: Copy`/`R: Debug`, but a
// handler is a bare fn pointer whatever the receiver type is.
impl<R> Clone for Handler<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Handler<R> {}

impl<R> fmt::Debug for Handler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler::Arity{}", self.arity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Recorder {
        fn zero(&mut self) {
            self.calls.push("zero".to_string());
        }
        fn three(&mut self, a: &str, b: &str, c: &str) {
            self.calls.push(format!("{}/{}/{}", a, b, c));
        }
    }

    #[test]
    fn test_arity_tags() {
        assert_eq!(Handler::Arity0(Recorder::zero).arity(), 0);
        assert_eq!(Handler::Arity3(Recorder::three).arity(), 3);
    }

    #[test]
    fn test_invoke_passes_captures_in_order() {
        let mut recorder = Recorder::default();
        let handler = Handler::Arity3(Recorder::three);
        let captures = vec!["2014".to_string(), "03".to_string(), "1".to_string()];
        handler.invoke(&mut recorder, &captures);
        assert_eq!(recorder.calls, vec!["2014/03/1"]);
    }

    #[test]
    fn test_invoke_arity0_ignores_captures_slice() {
        let mut recorder = Recorder::default();
        Handler::Arity0(Recorder::zero).invoke(&mut recorder, &[]);
        assert_eq!(recorder.calls, vec!["zero"]);
    }
}
