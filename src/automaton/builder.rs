use std::sync::Arc;

use smallvec::smallvec;

use crate::pattern::PatternNode;
use crate::route::{Pattern, Route};

use super::table::{Frontier, TransitionTable, push_unique};

/// Compiles the registered routes into one shared transition table by
/// merging each bound pattern in registration order. Prefix sharing falls
/// out of edge reuse: two routes with a common compiled prefix traverse the
/// same early states.
#[tracing::instrument(level = "debug", skip(routes), fields(routes = routes.len() as u64))]
pub(crate) fn build(routes: &[Arc<Route>]) -> TransitionTable {
    let mut table = TransitionTable::new();
    for route in routes {
        merge_route(&mut table, route);
    }
    tracing::debug!(states = table.state_count() as u64, "transition table built");
    table
}

fn merge_route(table: &mut TransitionTable, route: &Route) {
    let start: Frontier = smallvec![0];
    let frontier = merge_node(table, route.pattern(), route.pattern().ast().root(), start);
    for &state in &frontier {
        table.mark_accepting(state, route.id());
    }
}

/// Walks one pattern depth-first, carrying the frontier of states reached
/// so far. Optional groups keep the pre-group frontier alive alongside the
/// merged child; alternation merges every branch from the same origin.
fn merge_node(
    table: &mut TransitionTable,
    pattern: &Pattern,
    node: &PatternNode,
    frontier: Frontier,
) -> Frontier {
    match node {
        PatternNode::Literal(text) => table.advance_string(&frontier, text),
        PatternNode::Slash => table.advance_string(&frontier, "/"),
        PatternNode::Dot => table.advance_string(&frontier, "."),
        PatternNode::Symbol(sym) | PatternNode::Star(sym) => {
            match pattern.requirement(&sym.name) {
                Some(requirement) => {
                    let requirement = Arc::clone(requirement);
                    table.advance_requirement(&frontier, &requirement)
                }
                // Binding attaches a requirement to every dynamic name.
                None => {
                    debug_assert!(false, "unbound dynamic name '{}'", sym.name);
                    frontier
                }
            }
        }
        PatternNode::Group(child) => {
            let mut merged = merge_node(table, pattern, child, frontier.clone());
            for state in frontier {
                push_unique(&mut merged, state);
            }
            merged
        }
        PatternNode::Cat(left, right) => {
            let middle = merge_node(table, pattern, left, frontier);
            merge_node(table, pattern, right, middle)
        }
        PatternNode::Or(children) => {
            let mut union = Frontier::new();
            for child in children {
                for state in merge_node(table, pattern, child, frontier.clone()) {
                    push_unique(&mut union, state);
                }
            }
            union
        }
        PatternNode::Dummy => frontier,
    }
}
