pub mod automaton;
mod errors;
mod format;
mod matcher;
pub mod path;
pub mod pattern;
pub mod route;
pub mod types;

pub use automaton::{AutomatonGraph, TransitionTable};
pub use errors::{RouterError, RouterResult};
pub use format::FormatError;
pub use route::{Route, RouteSpec};
pub use types::{ParamValue, Params, RouteId, RouteMatch, RouteParams};

use std::sync::Arc;

use parking_lot::RwLock;

use crate::path::normalize_path;

/// An immutable compiled routing table: the registered routes plus the
/// shared transition table built from them. Registration produces a new
/// value rather than mutating in place, which is what makes the publish
/// step of [`Router`] a plain pointer swap.
#[derive(Debug)]
pub struct RoutingTable {
    routes: Vec<Arc<Route>>,
    table: TransitionTable,
}

impl RoutingTable {
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            table: automaton::build(&[]),
        }
    }

    /// Returns a new table with `specs` appended, plus the ids assigned to
    /// them. All specs bind before anything is built, so a bad pattern in
    /// the batch leaves the existing table untouched.
    pub fn with_routes(&self, specs: &[RouteSpec]) -> RouterResult<(RoutingTable, Vec<RouteId>)> {
        let mut routes = self.routes.clone();
        let mut ids = Vec::with_capacity(specs.len());
        for spec in specs {
            let id = RouteId(routes.len() as u32);
            let route = Route::bind(id, spec)?;
            routes.push(Arc::new(route));
            ids.push(id);
        }
        let table = automaton::build(&routes);
        Ok((RoutingTable { routes, table }, ids))
    }

    /// Matches a pre-normalized path. `None` means no registered route
    /// admits the path.
    pub fn recognize(&self, path: &str) -> Option<RouteMatch> {
        matcher::recognize(&self.table, &self.routes, path)
    }

    pub fn generate(&self, route: RouteId, params: &Params) -> RouterResult<String> {
        let route = self
            .routes
            .get(route.index())
            .ok_or(RouterError::UnknownRoute { id: route })?;
        Ok(format::evaluate(route.pattern(), params)?)
    }

    pub fn generate_named(&self, name: &str, params: &Params) -> RouterResult<String> {
        let route = self
            .routes
            .iter()
            .find(|route| route.name() == Some(name))
            .ok_or_else(|| RouterError::UnknownRouteName {
                name: name.to_string(),
            })?;
        Ok(format::evaluate(route.pattern(), params)?)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index()).map(Arc::as_ref)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn transition_table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn graph(&self) -> AutomatonGraph {
        self.table.graph()
    }
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterOptions {
    /// Run [`normalize_path`] on every path handed to `recognize`. Off by
    /// default; the engine's contract assumes callers normalize once at
    /// the edge.
    pub normalize_incoming: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            normalize_incoming: false,
        }
    }
}

/// Concurrent owner of a [`RoutingTable`]. Registration rebuilds the table
/// off to the side and publishes it with an atomic swap; matches in flight
/// keep reading the snapshot they started with.
#[derive(Debug)]
pub struct Router {
    inner: RwLock<Arc<RoutingTable>>,
    options: RouterOptions,
}

impl Router {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            inner: RwLock::new(Arc::new(RoutingTable::empty())),
            options: options.unwrap_or_default(),
        }
    }

    pub fn add(&self, spec: RouteSpec) -> RouterResult<RouteId> {
        let mut guard = self.inner.write();
        let (next, ids) = guard.with_routes(std::slice::from_ref(&spec))?;
        *guard = Arc::new(next);
        Ok(ids[0])
    }

    /// Registers every spec or none of them.
    pub fn add_bulk<I>(&self, specs: I) -> RouterResult<Vec<RouteId>>
    where
        I: IntoIterator<Item = RouteSpec>,
    {
        let specs: Vec<RouteSpec> = specs.into_iter().collect();
        let mut guard = self.inner.write();
        let (next, ids) = guard.with_routes(&specs)?;
        *guard = Arc::new(next);
        Ok(ids)
    }

    pub fn recognize(&self, path: &str) -> Option<RouteMatch> {
        let snapshot = self.snapshot();
        if self.options.normalize_incoming {
            snapshot.recognize(&normalize_path(path))
        } else {
            snapshot.recognize(path)
        }
    }

    pub fn generate(&self, route: RouteId, params: &Params) -> RouterResult<String> {
        self.snapshot().generate(route, params)
    }

    pub fn generate_named(&self, name: &str, params: &Params) -> RouterResult<String> {
        self.snapshot().generate_named(name, params)
    }

    /// The currently published table. Matches against the returned value
    /// stay consistent even while registrations continue.
    pub fn snapshot(&self) -> Arc<RoutingTable> {
        Arc::clone(&self.inner.read())
    }

    pub fn graph(&self) -> AutomatonGraph {
        self.snapshot().graph()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(None)
    }
}
