//! The dispatch side: one path-change event in, at most one handler out.

use crate::error::RouterError;
use crate::handler::Handler;
use crate::RouteTable;

/// Dispatches path-change events to the first matching route's handler.
///
/// The dispatcher owns its [`RouteTable`] and holds an exclusive borrow of
/// the receiver for its whole lifetime: every handler resolves against
/// that one receiver, the receiver is statically guaranteed to outlive the
/// dispatcher, and a dispatch can never re-enter while another is running
/// because [`on_path_changed`](Dispatcher::on_path_changed) takes
/// `&mut self`.
///
/// The host is expected to call `on_path_changed` synchronously, one event
/// at a time, whenever its current path changes — for a GUI shell that is
/// typically its internal-path-changed notification.
///
/// # Examples
///
/// ```
/// use caret_router::{Dispatcher, Handler};
///
/// #[derive(Default)]
/// struct Blog {
///     year: Option<String>,
/// }
///
/// impl Blog {
///     fn year_archive(&mut self, year: &str) {
///         self.year = Some(year.to_string());
///     }
/// }
///
/// let mut blog = Blog::default();
/// let mut dispatcher = Dispatcher::new(&mut blog);
/// dispatcher.add(r"/articles/(\d{4})/", Handler::Arity1(Blog::year_archive)).unwrap();
///
/// dispatcher.on_path_changed("/articles/1999/");
/// dispatcher.on_path_changed("/articles/99/"); // no match, nothing happens
///
/// assert_eq!(blog.year.as_deref(), Some("1999"));
/// ```
pub struct Dispatcher<'h, R> {
    table: RouteTable<R>,
    receiver: &'h mut R,
    unmatched: Option<fn(&mut R, &str)>,
}

impl<'h, R> Dispatcher<'h, R> {
    /// Creates a dispatcher bound to `receiver` with an empty table.
    pub fn new(receiver: &'h mut R) -> Self {
        Self {
            table: RouteTable::new(),
            receiver,
            unmatched: None,
        }
    }

    /// Starts building a dispatcher.
    ///
    /// Useful when routes are assembled before the receiver is attached;
    /// [`DispatcherBuilder::build`] validates the configuration as a unit.
    pub fn builder() -> DispatcherBuilder<'h, R> {
        DispatcherBuilder::new()
    }

    /// Registers a route. See [`RouteTable::add`].
    pub fn add(&mut self, pattern: &str, handler: Handler<R>) -> Result<(), RouterError> {
        self.table.add(pattern, handler)
    }

    /// Installs a callback invoked with the path when no route matched.
    ///
    /// Off by default: a miss is silent. This is the explicit opt-in for a
    /// "not found" view; registering a trailing `.*` route achieves the
    /// same from the table side.
    pub fn on_unmatched(&mut self, callback: fn(&mut R, &str)) {
        self.unmatched = Some(callback);
    }

    /// The routes registered so far, in priority order.
    pub fn table(&self) -> &RouteTable<R> {
        &self.table
    }

    /// Entry point for the host's path-change notification.
    ///
    /// Scans the table in registration order and invokes the first
    /// matching route's handler with the captured groups — synchronously,
    /// exactly once per event. A path that matches nothing invokes nothing
    /// (unless an [unmatched callback](Dispatcher::on_unmatched) is
    /// installed). A handler's own failure is not this component's
    /// contract; a panic propagates to the caller unmodified.
    pub fn on_path_changed(&mut self, path: &str) {
        match self.table.match_route(path) {
            Some(matched) => {
                tracing::trace!("path {:?} matched route {:?}", path, matched.route().pattern());
                matched.invoke(self.receiver);
            }
            None => {
                tracing::trace!("no route matched path {:?}", path);
                if let Some(callback) = self.unmatched {
                    callback(self.receiver, path);
                }
            }
        }
    }
}

/// Builder for [`Dispatcher`].
///
/// Routes may be registered before the receiver is attached; `build`
/// fails with [`RouterError::Configuration`] when the receiver
/// collaborator was never supplied.
///
/// # Examples
///
/// ```
/// use caret_router::{Dispatcher, Handler};
///
/// #[derive(Default)]
/// struct Views {
///     hits: usize,
/// }
///
/// impl Views {
///     fn home(&mut self) {
///         self.hits += 1;
///     }
/// }
///
/// let mut views = Views::default();
/// let mut dispatcher = Dispatcher::builder()
///     .route("/", Handler::Arity0(Views::home))
///     .unwrap()
///     .receiver(&mut views)
///     .build()
///     .unwrap();
///
/// dispatcher.on_path_changed("/");
/// assert_eq!(views.hits, 1);
/// ```
pub struct DispatcherBuilder<'h, R> {
    table: RouteTable<R>,
    receiver: Option<&'h mut R>,
    unmatched: Option<fn(&mut R, &str)>,
}

impl<'h, R> DispatcherBuilder<'h, R> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            table: RouteTable::new(),
            receiver: None,
            unmatched: None,
        }
    }

    /// Attaches the receiver that handlers resolve against.
    pub fn receiver(mut self, receiver: &'h mut R) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Registers a route (functional builder).
    pub fn route(mut self, pattern: &str, handler: Handler<R>) -> Result<Self, RouterError> {
        self.table.add(pattern, handler)?;
        Ok(self)
    }

    /// Installs the unmatched callback.
    pub fn unmatched(mut self, callback: fn(&mut R, &str)) -> Self {
        self.unmatched = Some(callback);
        self
    }

    /// Builds the dispatcher.
    ///
    /// # Errors
    ///
    /// [`RouterError::Configuration`] when no receiver was attached.
    pub fn build(self) -> Result<Dispatcher<'h, R>, RouterError> {
        let receiver = self
            .receiver
            .ok_or(RouterError::Configuration("no receiver attached"))?;
        Ok(Dispatcher {
            table: self.table,
            receiver,
            unmatched: self.unmatched,
        })
    }
}

impl<'h, R> Default for DispatcherBuilder<'h, R> {
    fn default() -> Self {
        Self::new()
    }
}
