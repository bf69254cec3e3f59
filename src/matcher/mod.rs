mod tokens;

use std::sync::Arc;

use crate::automaton::{TransitionTable, accepting_candidates};
use crate::route::Route;
use crate::types::RouteMatch;

pub(crate) use tokens::segment_spans;

/// Matches a path against the shared table. The simulation yields candidate
/// routes in registration order; the first whose whole-path expression
/// admits the path wins and supplies the captures. Failure is a value.
#[tracing::instrument(level = "trace", skip(table, routes))]
pub(crate) fn recognize(
    table: &TransitionTable,
    routes: &[Arc<Route>],
    path: &str,
) -> Option<RouteMatch> {
    let candidates = accepting_candidates(table, path, segment_spans(path));
    for id in candidates {
        let Some(route) = routes.get(id.index()) else {
            debug_assert!(false, "accepting state references unknown route");
            continue;
        };
        match route.pattern().extract(path) {
            Some(params) => {
                tracing::trace!(route = route.source(), "route recognized");
                return Some(RouteMatch { route: id, params });
            }
            // A shared accepting state can admit paths its route does not;
            // the whole-path check is the arbiter.
            None => {
                tracing::trace!(route = route.source(), "candidate rejected by whole-path check");
            }
        }
    }
    None
}
