use std::sync::Arc;

use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::route::NameRequirement;
use crate::types::RouteId;

pub type StateId = u32;

/// The set of states simultaneously reachable while merging or matching a
/// path prefix. Optional groups fork it, which is why it is a set.
pub(crate) type Frontier = SmallVec<[StateId; 4]>;

/// The shared matching structure all registered routes compile into: an
/// arena of integer states with three transition lanes per state.
///
/// Exact-text edges are checked first; the default-segment lane covers the
/// ubiquitous `[^./?]+` requirement without touching the regex engine; the
/// general lane holds every other requirement, which the simulator may
/// retry across several input tokens (glob semantics).
///
/// Accepting lists are candidate supersets in registration order: state
/// sharing across routes can make a state reachable by a path its route
/// does not actually admit, and the matcher's whole-path verification is
/// the final arbiter.
#[derive(Debug)]
pub struct TransitionTable {
    string_moves: Vec<FastHashMap<Box<str>, StateId>>,
    stdparam_moves: Vec<Option<StateId>>,
    regexp_moves: Vec<Vec<(Arc<NameRequirement>, StateId)>>,
    accepting: FastHashMap<StateId, Vec<RouteId>>,
}

impl TransitionTable {
    pub(crate) fn new() -> Self {
        let mut table = Self {
            string_moves: Vec::new(),
            stdparam_moves: Vec::new(),
            regexp_moves: Vec::new(),
            accepting: FastHashMap::new(),
        };
        table.add_state();
        table
    }

    fn add_state(&mut self) -> StateId {
        let id = self.string_moves.len() as StateId;
        self.string_moves.push(FastHashMap::new());
        self.stdparam_moves.push(None);
        self.regexp_moves.push(Vec::new());
        id
    }

    pub fn state_count(&self) -> usize {
        self.string_moves.len()
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains_key(&state)
    }

    pub fn accepting_routes(&self, state: StateId) -> &[RouteId] {
        self.accepting
            .get(&state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn mark_accepting(&mut self, state: StateId, route: RouteId) {
        let list = self.accepting.entry(state).or_default();
        if !list.contains(&route) {
            list.push(route);
        }
    }

    /// Advances every frontier state over an exact-text edge, reusing
    /// existing edges and converging the states that lack one onto a shared
    /// target.
    pub(crate) fn advance_string(&mut self, frontier: &[StateId], label: &str) -> Frontier {
        let mut next = Frontier::new();
        let mut missing = Frontier::new();
        for &state in frontier {
            match self.string_moves[state as usize].get(label) {
                Some(&target) => push_unique(&mut next, target),
                None => missing.push(state),
            }
        }
        if !missing.is_empty() {
            let target = match next.first() {
                Some(&existing) => existing,
                None => self.add_state(),
            };
            for &state in &missing {
                self.string_moves[state as usize].insert(label.into(), target);
            }
            push_unique(&mut next, target);
        }
        next
    }

    /// Advances every frontier state over a requirement edge. Edges are
    /// keyed by the requirement's raw source, so identical requirements
    /// from the same state share one edge regardless of which route added
    /// them.
    pub(crate) fn advance_requirement(
        &mut self,
        frontier: &[StateId],
        requirement: &Arc<NameRequirement>,
    ) -> Frontier {
        let mut next = Frontier::new();
        let mut missing = Frontier::new();
        for &state in frontier {
            let existing = if requirement.is_default_segment() {
                self.stdparam_moves[state as usize]
            } else {
                self.regexp_moves[state as usize]
                    .iter()
                    .find(|(candidate, _)| candidate.raw() == requirement.raw())
                    .map(|(_, target)| *target)
            };
            match existing {
                Some(target) => push_unique(&mut next, target),
                None => missing.push(state),
            }
        }
        if !missing.is_empty() {
            let target = match next.first() {
                Some(&existing) => existing,
                None => self.add_state(),
            };
            for &state in &missing {
                if requirement.is_default_segment() {
                    self.stdparam_moves[state as usize] = Some(target);
                } else {
                    self.regexp_moves[state as usize].push((Arc::clone(requirement), target));
                }
            }
            push_unique(&mut next, target);
        }
        next
    }

    #[inline]
    pub(crate) fn string_next(&self, state: StateId, token: &str) -> Option<StateId> {
        self.string_moves[state as usize].get(token).copied()
    }

    #[inline]
    pub(crate) fn stdparam_next(&self, state: StateId) -> Option<StateId> {
        self.stdparam_moves[state as usize]
    }

    #[inline]
    pub(crate) fn regexp_edges(&self, state: StateId) -> &[(Arc<NameRequirement>, StateId)] {
        &self.regexp_moves[state as usize]
    }

    pub(crate) fn string_transitions(
        &self,
    ) -> impl Iterator<Item = (StateId, &str, StateId)> + '_ {
        self.string_moves
            .iter()
            .enumerate()
            .flat_map(|(state, moves)| {
                moves
                    .iter()
                    .map(move |(label, &target)| (state as StateId, &**label, target))
            })
    }

    pub(crate) fn requirement_transitions(
        &self,
    ) -> impl Iterator<Item = (StateId, &str, StateId)> + '_ {
        let std = self
            .stdparam_moves
            .iter()
            .enumerate()
            .filter_map(|(state, &target)| {
                target.map(|target| {
                    (
                        state as StateId,
                        crate::route::DEFAULT_SEGMENT_REQUIREMENT,
                        target,
                    )
                })
            });
        let general = self
            .regexp_moves
            .iter()
            .enumerate()
            .flat_map(|(state, edges)| {
                edges
                    .iter()
                    .map(move |(req, target)| (state as StateId, req.raw(), *target))
            });
        std.chain(general)
    }

    pub(crate) fn accepting_states(&self) -> impl Iterator<Item = (StateId, &[RouteId])> + '_ {
        self.accepting
            .iter()
            .map(|(&state, routes)| (state, routes.as_slice()))
    }
}

#[inline]
pub(crate) fn push_unique(frontier: &mut Frontier, state: StateId) {
    if !frontier.contains(&state) {
        frontier.push(state);
    }
}
