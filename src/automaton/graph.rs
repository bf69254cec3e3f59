use std::fmt::Write;

use serde::Serialize;

use crate::types::RouteId;

use super::table::{StateId, TransitionTable};

/// Read-only projection of the transition table for visualization tooling.
#[derive(Debug, Clone, Serialize)]
pub struct AutomatonGraph {
    pub states: usize,
    pub transitions: Vec<GraphTransition>,
    pub accepting: Vec<AcceptingState>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphTransition {
    pub from: StateId,
    pub to: StateId,
    pub label: String,
    pub kind: TransitionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Literal,
    Requirement,
}

#[derive(Debug, Clone, Serialize)]
pub struct AcceptingState {
    pub state: StateId,
    pub routes: Vec<RouteId>,
}

impl TransitionTable {
    pub fn graph(&self) -> AutomatonGraph {
        let mut transitions: Vec<GraphTransition> = self
            .string_transitions()
            .map(|(from, label, to)| GraphTransition {
                from,
                to,
                label: label.to_string(),
                kind: TransitionKind::Literal,
            })
            .chain(
                self.requirement_transitions()
                    .map(|(from, label, to)| GraphTransition {
                        from,
                        to,
                        label: label.to_string(),
                        kind: TransitionKind::Requirement,
                    }),
            )
            .collect();
        transitions.sort_by(|a, b| (a.from, a.to, &a.label).cmp(&(b.from, b.to, &b.label)));

        let mut accepting: Vec<AcceptingState> = self
            .accepting_states()
            .map(|(state, routes)| AcceptingState {
                state,
                routes: routes.to_vec(),
            })
            .collect();
        accepting.sort_by_key(|entry| entry.state);

        AutomatonGraph {
            states: self.state_count(),
            transitions,
            accepting,
        }
    }
}

impl AutomatonGraph {
    /// Renders the graph in Graphviz DOT form, accepting states drawn as
    /// double circles and requirement edges dashed.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph transition_table {\n  rankdir = LR;\n");
        for entry in &self.accepting {
            let _ = writeln!(out, "  {} [shape = doublecircle];", entry.state);
        }
        for transition in &self.transitions {
            let style = match transition.kind {
                TransitionKind::Literal => "solid",
                TransitionKind::Requirement => "dashed",
            };
            let _ = writeln!(
                out,
                "  {} -> {} [label = \"{}\", style = {}];",
                transition.from,
                transition.to,
                transition.label.replace('\\', "\\\\").replace('"', "\\\""),
                style
            );
        }
        out.push_str("}\n");
        out
    }
}
