//! # Caret Router
//!
//! A regex-based URL dispatcher inspired by Django's URLconf.
//!
//! Routes are plain regular expressions evaluated in registration order
//! against the full path, and the **first** match wins — so the order of
//! the calls to `add` is significant, exactly as in a Django `urlpatterns`
//! list. To capture a value from the path, put a grouping parenthesis
//! around it; every capture reaches the handler as an opaque string, in
//! left-to-right group order, and the handler's declared arity must equal
//! the pattern's group count (checked at registration).
//!
//! ## Example
//!
//! ```
//! use caret_router::{Dispatcher, Handler};
//!
//! #[derive(Default)]
//! struct News {
//!     last_view: String,
//! }
//!
//! impl News {
//!     fn special_case_2003(&mut self) {
//!         self.last_view = "special-2003".to_string();
//!     }
//!     fn year_archive(&mut self, year: &str) {
//!         self.last_view = format!("year-{}", year);
//!     }
//!     fn month_archive(&mut self, year: &str, month: &str) {
//!         self.last_view = format!("month-{}-{}", year, month);
//!     }
//! }
//!
//! let mut news = News::default();
//! let mut dispatcher = Dispatcher::new(&mut news);
//!
//! dispatcher.add(r"/articles/2003/", Handler::Arity0(News::special_case_2003)).unwrap();
//! dispatcher.add(r"/articles/(\d{4})/", Handler::Arity1(News::year_archive)).unwrap();
//! dispatcher.add(r"/articles/(\d{4})/(\d{2})/", Handler::Arity2(News::month_archive)).unwrap();
//!
//! dispatcher.on_path_changed("/articles/2005/03/");
//! assert_eq!(news.last_view, "month-2005-03");
//! ```
//!
//! ## Matching rules
//!
//! - Matching is anchored: the whole path must satisfy the pattern, so
//!   `/pippo` never matches `/pippo/` or `/p/ippo`.
//! - The table is append-only and insertion order is match-priority order;
//!   a later, more specific pattern never shadows an earlier one.
//! - A path that matches no route dispatches nothing. Callers that want a
//!   "not found" view can install [`Dispatcher::on_unmatched`] or register
//!   a trailing `.*` catch-all.

use regex::Regex;
use std::fmt;

mod dispatcher;
mod error;
mod handler;
mod pattern;

pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use error::RouterError;
pub use handler::Handler;

// ============================================================================
// Core Types
// ============================================================================

/// A single registered route: an anchored pattern bound to a handler.
pub struct Route<R> {
    regex: Regex,
    pattern: String,
    arity: usize,
    handler: Handler<R>,
}

impl<R> Route<R> {
    /// The pattern text as supplied at registration.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Capture groups declared by the pattern, equal to the handler's
    /// argument count.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the captured groups when `path` matches this route end to
    /// end, or `None` when it does not.
    ///
    /// The result holds exactly [`arity`](Route::arity) strings. A group
    /// that did not participate in the match (one side of an alternation,
    /// say) captures the empty string.
    pub fn matches(&self, path: &str) -> Option<Vec<String>> {
        let caps = self.regex.captures(path)?;
        Some(
            (1..=self.arity)
                .map(|i| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect(),
        )
    }
}

impl<R> fmt::Debug for Route<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("arity", &self.arity)
            .finish()
    }
}

/// Result of matching a path against the table: the winning route and its
/// captured groups.
pub struct RouteMatch<'t, R> {
    route: &'t Route<R>,
    captures: Vec<String>,
}

impl<'t, R> RouteMatch<'t, R> {
    /// The route that won the scan.
    pub fn route(&self) -> &'t Route<R> {
        self.route
    }

    /// The captured groups, one per capture group, in left-to-right group
    /// order. Exactly `route().arity()` entries.
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    pub(crate) fn invoke(&self, receiver: &mut R) {
        self.route.handler.invoke(receiver, &self.captures);
    }
}

impl<R> fmt::Debug for RouteMatch<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("route", &self.route)
            .field("captures", &self.captures)
            .finish()
    }
}

// ============================================================================
// Route Table
// ============================================================================

/// Ordered table of routes. Insertion order is match-priority order.
///
/// The table is append-only: entries are never removed, reordered or
/// deduplicated, so registering the same pattern twice keeps both entries
/// and the earlier one keeps winning.
///
/// # Examples
///
/// ```
/// use caret_router::{Handler, RouteTable};
///
/// struct Views;
/// impl Views {
///     fn user(&mut self, _id: &str) {}
/// }
///
/// let mut table: RouteTable<Views> = RouteTable::new();
/// table.add(r"/users/(\d+)", Handler::Arity1(Views::user)).unwrap();
///
/// let m = table.match_route("/users/42").unwrap();
/// assert_eq!(m.captures(), ["42"]);
/// assert!(table.match_route("/users/").is_none());
/// ```
pub struct RouteTable<R> {
    routes: Vec<Route<R>>,
}

impl<R> RouteTable<R> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a route at the end of the table.
    ///
    /// Compiles `pattern` (full-string anchored) and checks that its
    /// capture group count equals the handler's arity. On any failure the
    /// table is left unchanged.
    ///
    /// # Errors
    ///
    /// [`RouterError::PatternCompile`] when `pattern` is not a valid
    /// regex; [`RouterError::ArityMismatch`] when group count and handler
    /// arity disagree.
    pub fn add(&mut self, pattern: &str, handler: Handler<R>) -> Result<(), RouterError> {
        let regex = pattern::compile(pattern)?;
        let groups = pattern::group_count(&regex);
        let args = handler.arity();
        if groups != args {
            return Err(RouterError::ArityMismatch {
                pattern: pattern.to_string(),
                groups,
                args,
            });
        }
        tracing::debug!("registered route {:?} (arity {})", pattern, args);
        self.routes.push(Route {
            regex,
            pattern: pattern.to_string(),
            arity: args,
            handler,
        });
        Ok(())
    }

    /// Scans the table in registration order and returns the first route
    /// matching the full `path`, with its captures.
    ///
    /// There is no error path: any string, the empty one included, either
    /// matches some route or it does not.
    pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_, R>> {
        // Short-circuits on the first match; earliest registration wins.
        self.routes.iter().find_map(|route| {
            route
                .matches(path)
                .map(|captures| RouteMatch { route, captures })
        })
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates the routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<R>> {
        self.routes.iter()
    }
}

impl<R> Default for RouteTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for RouteTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .finish()
    }
}
