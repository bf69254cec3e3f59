use smallvec::{SmallVec, smallvec};

use crate::types::RouteId;

use super::table::{StateId, TransitionTable};

/// One live configuration of the simulation. `slice_start` is set while a
/// general requirement edge is being retried over a growing slice of the
/// input, which is how a glob keeps consuming tokens across separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Thread {
    state: StateId,
    slice_start: Option<usize>,
}

type Threads = SmallVec<[Thread; 8]>;

/// Simulates the table over the tokenized path and returns the route ids of
/// every accepting state still live after the last token, in registration
/// order. The caller verifies each candidate against its whole-path
/// expression; this pass only prunes.
pub(crate) fn accepting_candidates(
    table: &TransitionTable,
    path: &str,
    tokens: impl Iterator<Item = (usize, usize)>,
) -> SmallVec<[RouteId; 4]> {
    let mut threads: Threads = smallvec![Thread {
        state: 0,
        slice_start: None,
    }];

    for (start, end) in tokens {
        if threads.is_empty() {
            break;
        }
        let token = &path[start..end];
        let token_is_plain = is_plain_token(token);
        let mut next = Threads::new();

        for thread in &threads {
            let state = thread.state;
            match thread.slice_start {
                None => {
                    // Exact-text edges are checked first, then the
                    // default-segment lane, then general requirements.
                    if let Some(target) = table.string_next(state, token) {
                        push_thread(&mut next, target, None);
                    }
                    if token_is_plain && let Some(target) = table.stdparam_next(state) {
                        push_thread(&mut next, target, None);
                    }
                    let edges = table.regexp_edges(state);
                    for (requirement, target) in edges {
                        if requirement.matches(token) {
                            push_thread(&mut next, *target, None);
                        }
                    }
                    // Whether or not a requirement matched this single
                    // token, it may still match a longer slice; keep a
                    // retry thread anchored at this token.
                    if !edges.is_empty() {
                        push_thread(&mut next, state, Some(start));
                    }
                }
                Some(slice_start) => {
                    let slice = &path[slice_start..end];
                    for (requirement, target) in table.regexp_edges(state) {
                        if requirement.matches(slice) {
                            push_thread(&mut next, *target, None);
                        }
                    }
                    push_thread(&mut next, state, Some(slice_start));
                }
            }
        }

        threads = next;
    }

    let mut routes: SmallVec<[RouteId; 4]> = SmallVec::new();
    for thread in &threads {
        if thread.slice_start.is_some() {
            continue;
        }
        for &route in table.accepting_routes(thread.state) {
            if !routes.contains(&route) {
                routes.push(route);
            }
        }
    }
    // Registration order is match precedence; route ids preserve it.
    routes.sort_unstable();
    routes
}

#[inline]
fn is_plain_token(token: &str) -> bool {
    !token.is_empty() && !matches!(token.as_bytes()[0], b'/' | b'.' | b'?')
}

#[inline]
fn push_thread(threads: &mut Threads, state: StateId, slice_start: Option<usize>) {
    let thread = Thread { state, slice_start };
    if !threads.contains(&thread) {
        threads.push(thread);
    }
}
