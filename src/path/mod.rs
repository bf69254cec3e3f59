mod escape;
mod normalize;

pub use escape::{escape_fragment, escape_segment};
pub use normalize::normalize_path;
