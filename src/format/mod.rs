mod error;

pub use error::{FormatError, FormatResult};

use crate::path::{escape_fragment, escape_segment, normalize_path};
use crate::pattern::PatternNode;
use crate::route::Pattern;
use crate::types::Params;

/// Emits a concrete, escaped path for one bound pattern. Optional groups
/// collapse unless a dynamic segment inside them has a parameter that
/// differs from its recorded default; alternation emits its first
/// satisfiable branch.
#[tracing::instrument(level = "trace", skip(pattern, params), fields(pattern = pattern.source()))]
pub(crate) fn evaluate(pattern: &Pattern, params: &Params) -> FormatResult<String> {
    let mut output = String::with_capacity(pattern.source().len());
    emit(pattern.ast().root(), pattern, params, &mut output)?;
    Ok(normalize_path(&output))
}

fn emit(
    node: &PatternNode,
    pattern: &Pattern,
    params: &Params,
    output: &mut String,
) -> FormatResult<()> {
    match node {
        PatternNode::Literal(text) => output.push_str(text),
        PatternNode::Slash => output.push('/'),
        PatternNode::Dot => output.push('.'),
        PatternNode::Symbol(sym) => {
            let value = params
                .get(&sym.name)
                .ok_or_else(|| FormatError::MissingParameter {
                    name: sym.name.clone(),
                })?;
            output.push_str(&escape_segment(&value.render()));
        }
        PatternNode::Star(sym) => {
            let value = params
                .get(&sym.name)
                .ok_or_else(|| FormatError::MissingParameter {
                    name: sym.name.clone(),
                })?;
            output.push_str(&escape_fragment(&value.render()));
        }
        PatternNode::Group(child) => {
            if group_wanted(child, pattern, params) {
                emit(child, pattern, params, output)?;
            }
        }
        PatternNode::Cat(left, right) => {
            emit(left, pattern, params, output)?;
            emit(right, pattern, params, output)?;
        }
        PatternNode::Or(children) => {
            let branch = children
                .iter()
                .find(|child| branch_satisfiable(child, params))
                .ok_or(FormatError::AmbiguousAlternation)?;
            emit(branch, pattern, params, output)?;
        }
        PatternNode::Dummy => {}
    }
    Ok(())
}

/// The optional-group dry run: emit the subtree only when at least one
/// dynamic segment inside it has a parameter supplied with a non-default
/// value.
fn group_wanted(child: &PatternNode, pattern: &Pattern, params: &Params) -> bool {
    child.iter().any(|node| match node {
        PatternNode::Symbol(sym) | PatternNode::Star(sym) => match params.get(&sym.name) {
            Some(value) => pattern.default_for(&sym.name) != Some(value.render().as_ref()),
            None => false,
        },
        _ => false,
    })
}

/// A branch is satisfiable when every dynamic segment outside its optional
/// groups has a parameter.
fn branch_satisfiable(branch: &PatternNode, params: &Params) -> bool {
    match branch {
        PatternNode::Symbol(sym) | PatternNode::Star(sym) => params.contains_key(&sym.name),
        PatternNode::Cat(left, right) => {
            branch_satisfiable(left, params) && branch_satisfiable(right, params)
        }
        PatternNode::Or(children) => children.iter().any(|child| branch_satisfiable(child, params)),
        PatternNode::Group(_) => true,
        PatternNode::Literal(_) | PatternNode::Slash | PatternNode::Dot | PatternNode::Dummy => {
            true
        }
    }
}
