use super::analysis::{self, PatternFlags};
use super::visit::DepthFirst;

/// A parsed pattern. The tree is immutable once built; requirement binding
/// happens in a separate layer so the same tree shape can be reused across
/// compilation contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternAst {
    root: PatternNode,
}

impl PatternAst {
    pub(crate) fn new(root: PatternNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &PatternNode {
        &self.root
    }

    pub fn names(&self) -> Vec<&str> {
        self.root.names()
    }

    pub fn path_params(&self) -> Vec<&str> {
        self.root.path_params()
    }

    pub fn is_glob(&self) -> bool {
        self.root.is_glob()
    }

    pub fn flags(&self) -> PatternFlags {
        analysis::analyze(&self.root)
    }
}

impl std::fmt::Display for PatternAst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// A named dynamic segment. `Star` wraps the same payload as `Symbol`; the
/// surrounding variant decides whether the capture may span separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNode {
    pub name: String,
}

impl SymbolNode {
    pub(crate) fn new(name: String) -> Self {
        Self { name }
    }
}

/// The closed set of pattern node kinds. Every capability over the tree
/// (enumeration, stringification, binding, merging, emission) is a `match`
/// over this enum, so adding a kind is a compile-enforced sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternNode {
    /// Fixed text between separators.
    Literal(String),
    /// The `/` separator.
    Slash,
    /// The `.` separator introducing a format segment.
    Dot,
    /// A named dynamic segment bound to a single-segment requirement.
    Symbol(SymbolNode),
    /// A named wildcard capturing across separators.
    Star(SymbolNode),
    /// An optional subtree; the matcher and the generator may elide it.
    Group(Box<PatternNode>),
    /// Left-then-right sequence; the parser nests these to the right.
    Cat(Box<PatternNode>, Box<PatternNode>),
    /// Alternation, compared in declaration order.
    Or(Vec<PatternNode>),
    /// Empty branch placeholder; matches nothing and emits nothing.
    Dummy,
}

impl PatternNode {
    /// Depth-first, left-to-right enumeration of this node and all of its
    /// descendants. Lazy and restartable.
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst::new(self)
    }

    /// All dynamic names in pre-order, `Star` names included.
    pub fn names(&self) -> Vec<&str> {
        self.iter()
            .filter_map(|node| match node {
                PatternNode::Symbol(sym) | PatternNode::Star(sym) => Some(sym.name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Dynamic names excluding `Star` captures.
    pub fn path_params(&self) -> Vec<&str> {
        self.iter()
            .filter_map(|node| match node {
                PatternNode::Symbol(sym) => Some(sym.name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn is_glob(&self) -> bool {
        self.iter()
            .any(|node| matches!(node, PatternNode::Star(_)))
    }
}

fn write_literal(f: &mut std::fmt::Formatter<'_>, text: &str) -> std::fmt::Result {
    for ch in text.chars() {
        if matches!(ch, '(' | ')' | ':' | '*' | '|' | '\\') {
            f.write_str("\\")?;
        }
        std::fmt::Write::write_char(f, ch)?;
    }
    Ok(())
}

impl std::fmt::Display for PatternNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternNode::Literal(text) => write_literal(f, text),
            PatternNode::Slash => f.write_str("/"),
            PatternNode::Dot => f.write_str("."),
            PatternNode::Symbol(sym) => write!(f, ":{}", sym.name),
            PatternNode::Star(sym) => write!(f, "*{}", sym.name),
            PatternNode::Group(child) => write!(f, "({child})"),
            PatternNode::Cat(left, right) => write!(f, "{left}{right}"),
            PatternNode::Or(children) => {
                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{child}")?;
                }
                Ok(())
            }
            PatternNode::Dummy => Ok(()),
        }
    }
}
