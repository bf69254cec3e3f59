mod builder;
mod graph;
mod simulate;
mod table;

pub use graph::{AcceptingState, AutomatonGraph, GraphTransition, TransitionKind};
pub use table::{StateId, TransitionTable};

pub(crate) use builder::build;
pub(crate) use simulate::accepting_candidates;
