use hashbrown::HashSet;

use super::ast::PatternNode;

bitflags::bitflags! {
    /// Structural summary of a pattern tree, computed once at bind time and
    /// cheap to test during matching and generation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PatternFlags: u8 {
        const HAS_STAR   = 1 << 0;
        const HAS_GROUP  = 1 << 1;
        const HAS_OR     = 1 << 2;
        const HAS_DOT    = 1 << 3;
    }
}

pub fn analyze(root: &PatternNode) -> PatternFlags {
    let mut flags = PatternFlags::empty();
    for node in root.iter() {
        match node {
            PatternNode::Star(_) => flags |= PatternFlags::HAS_STAR,
            PatternNode::Group(_) => flags |= PatternFlags::HAS_GROUP,
            PatternNode::Or(_) => flags |= PatternFlags::HAS_OR,
            PatternNode::Dot => flags |= PatternFlags::HAS_DOT,
            _ => {}
        }
    }
    flags
}

/// Returns the first dynamic name that appears more than once, in pre-order.
pub fn find_duplicate_name(root: &PatternNode) -> Option<&str> {
    let mut seen = HashSet::new();
    for name in root.names() {
        if !seen.insert(name) {
            return Some(name);
        }
    }
    None
}
