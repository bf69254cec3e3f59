mod analysis;
mod ast;
mod error;
mod parser;
mod visit;

pub use analysis::{PatternFlags, analyze, find_duplicate_name};
pub use ast::{PatternAst, PatternNode, SymbolNode};
pub use error::{PatternError, PatternResult};
pub use parser::parse_pattern;
pub use visit::DepthFirst;
