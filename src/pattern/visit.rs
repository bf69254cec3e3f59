use super::ast::PatternNode;

/// Depth-first, left-to-right walk over a pattern tree, yielding each node
/// once, parent before children. Backed by an explicit stack so deeply
/// nested groups cannot overflow the call stack.
#[derive(Debug, Clone)]
pub struct DepthFirst<'a> {
    stack: Vec<&'a PatternNode>,
}

impl<'a> DepthFirst<'a> {
    pub(crate) fn new(root: &'a PatternNode) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a PatternNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        match node {
            PatternNode::Cat(left, right) => {
                self.stack.push(right);
                self.stack.push(left);
            }
            PatternNode::Group(child) => {
                self.stack.push(child);
            }
            PatternNode::Or(children) => {
                self.stack.extend(children.iter().rev());
            }
            PatternNode::Literal(_)
            | PatternNode::Slash
            | PatternNode::Dot
            | PatternNode::Symbol(_)
            | PatternNode::Star(_)
            | PatternNode::Dummy => {}
        }
        Some(node)
    }
}
