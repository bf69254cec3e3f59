use std::sync::Arc;

use hashbrown::HashMap as FastHashMap;
use regex::Regex;

use crate::pattern::{
    PatternAst, PatternError, PatternFlags, PatternNode, PatternResult, parse_pattern,
};
use crate::types::RouteParams;

use super::requirement::{
    DEFAULT_SEGMENT_REQUIREMENT, GLOB_FALLBACK_REQUIREMENT, NameRequirement,
    glob_default_requirement,
};

/// A pattern with its requirements resolved: the parsed tree, one compiled
/// requirement per dynamic name, the structural summary, and an anchored
/// whole-path expression used to verify candidates and extract captures.
/// Immutable once bound.
#[derive(Debug)]
pub struct Pattern {
    source: Box<str>,
    ast: PatternAst,
    requirements: FastHashMap<Box<str>, Arc<NameRequirement>>,
    names: Vec<Box<str>>,
    path_params: Vec<Box<str>>,
    flags: PatternFlags,
    defaults: FastHashMap<Box<str>, Box<str>>,
    full_match: Regex,
}

impl Pattern {
    /// Parses `source` and attaches requirements. Dynamic names without an
    /// explicit entry fall back to their kind's default: `[^./?]+` for a
    /// symbol, and for a glob the three-valued `formatted` table (with `.+`
    /// as the compile-time fallback when the table injects nothing).
    pub fn bind(
        source: &str,
        requirements: &[(String, String)],
        formatted: Option<bool>,
        defaults: &[(String, String)],
    ) -> PatternResult<Self> {
        let ast = parse_pattern(source)?;

        let explicit: FastHashMap<&str, &str> = requirements
            .iter()
            .map(|(name, raw)| (name.as_str(), raw.as_str()))
            .collect();

        let mut bound: FastHashMap<Box<str>, Arc<NameRequirement>> = FastHashMap::new();
        let mut names = Vec::new();
        let mut path_params = Vec::new();
        for node in ast.root().iter() {
            let (sym, is_glob) = match node {
                PatternNode::Symbol(sym) => (sym, false),
                PatternNode::Star(sym) => (sym, true),
                _ => continue,
            };
            let raw = match explicit.get(sym.name.as_str()) {
                Some(raw) => *raw,
                None if is_glob => {
                    glob_default_requirement(formatted).unwrap_or(GLOB_FALLBACK_REQUIREMENT)
                }
                None => DEFAULT_SEGMENT_REQUIREMENT,
            };
            let requirement = Arc::new(NameRequirement::compile(&sym.name, raw)?);
            bound.insert(sym.name.as_str().into(), requirement);
            names.push(Box::<str>::from(sym.name.as_str()));
            if !is_glob {
                path_params.push(Box::<str>::from(sym.name.as_str()));
            }
        }

        let full_match = compile_full_match(source, ast.root(), &bound)?;
        let flags = ast.flags();

        Ok(Self {
            source: source.into(),
            ast,
            requirements: bound,
            names,
            path_params,
            flags,
            defaults: defaults
                .iter()
                .map(|(name, value)| (name.as_str().into(), value.as_str().into()))
                .collect(),
            full_match,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &PatternAst {
        &self.ast
    }

    pub fn requirement(&self, name: &str) -> Option<&Arc<NameRequirement>> {
        self.requirements.get(name)
    }

    /// Dynamic names in pre-order, globs included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| &**name)
    }

    /// Dynamic names excluding glob captures.
    pub fn path_params(&self) -> impl Iterator<Item = &str> {
        self.path_params.iter().map(|name| &**name)
    }

    pub fn is_glob(&self) -> bool {
        self.flags.contains(PatternFlags::HAS_STAR)
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    pub fn default_for(&self, name: &str) -> Option<&str> {
        self.defaults.get(name).map(|value| &**value)
    }

    /// Whole-path verification plus capture extraction. Returns `None` when
    /// the path does not satisfy this pattern; captures left empty by an
    /// elided optional group are omitted from the map.
    pub fn extract(&self, path: &str) -> Option<RouteParams> {
        let captures = self.full_match.captures(path)?;
        let mut params = RouteParams::with_capacity(self.names.len());
        for name in self.full_match.capture_names().flatten() {
            if let Some(capture) = captures.name(name) {
                params.insert(name.to_string(), capture.as_str().to_string());
            }
        }
        Some(params)
    }
}

fn compile_full_match(
    source: &str,
    root: &PatternNode,
    requirements: &FastHashMap<Box<str>, Arc<NameRequirement>>,
) -> PatternResult<Regex> {
    let mut expression = String::with_capacity(source.len() * 2 + 8);
    expression.push_str(r"\A");
    append_regex(root, requirements, &mut expression);
    expression.push_str(r"\z");
    Regex::new(&expression).map_err(|err| PatternError::UncompilablePattern {
        pattern: source.to_string(),
        source: Box::new(err),
    })
}

fn append_regex(
    node: &PatternNode,
    requirements: &FastHashMap<Box<str>, Arc<NameRequirement>>,
    out: &mut String,
) {
    match node {
        PatternNode::Literal(text) => out.push_str(&regex::escape(text)),
        PatternNode::Slash => out.push('/'),
        PatternNode::Dot => out.push_str(r"\."),
        PatternNode::Symbol(sym) | PatternNode::Star(sym) => {
            let raw = requirements
                .get(sym.name.as_str())
                .map(|req| req.raw())
                .unwrap_or(DEFAULT_SEGMENT_REQUIREMENT);
            out.push_str("(?P<");
            out.push_str(&sym.name);
            out.push('>');
            out.push_str(raw);
            out.push(')');
        }
        PatternNode::Group(child) => {
            out.push_str("(?:");
            append_regex(child, requirements, out);
            out.push_str(")?");
        }
        PatternNode::Cat(left, right) => {
            append_regex(left, requirements, out);
            append_regex(right, requirements, out);
        }
        PatternNode::Or(children) => {
            out.push_str("(?:");
            for (index, child) in children.iter().enumerate() {
                if index > 0 {
                    out.push('|');
                }
                append_regex(child, requirements, out);
            }
            out.push(')');
        }
        PatternNode::Dummy => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_defaults_per_node_kind() {
        let pattern =
            Pattern::bind("/files/*rest/:name", &[], None, &[]).expect("pattern should bind");
        let rest = pattern.requirement("rest").expect("glob requirement");
        let name = pattern.requirement("name").expect("symbol requirement");
        assert_eq!(rest.raw(), ".+?");
        assert_eq!(name.raw(), DEFAULT_SEGMENT_REQUIREMENT);
        assert!(pattern.is_glob());
    }

    #[test]
    fn explicit_requirement_wins_over_defaults() {
        let pattern = Pattern::bind(
            "/users/:id",
            &[("id".to_string(), r"\d+".to_string())],
            None,
            &[],
        )
        .expect("pattern should bind");
        let req = pattern.requirement("id").expect("requirement");
        assert_eq!(req.raw(), r"\d+");
        assert!(pattern.extract("/users/42").is_some());
        assert!(pattern.extract("/users/abc").is_none());
    }

    #[test]
    fn unformatted_glob_falls_back_to_greedy() {
        let pattern =
            Pattern::bind("/files/*rest", &[], Some(false), &[]).expect("pattern should bind");
        let rest = pattern.requirement("rest").expect("glob requirement");
        assert_eq!(rest.raw(), GLOB_FALLBACK_REQUIREMENT);
    }

    #[test]
    fn extract_omits_elided_group_captures() {
        let pattern =
            Pattern::bind("/users/:id(.:format)", &[], None, &[]).expect("pattern should bind");
        let params = pattern.extract("/users/42").expect("path should match");
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
        assert!(!params.contains_key("format"));

        let params = pattern.extract("/users/42.json").expect("path should match");
        assert_eq!(params.get("format").map(String::as_str), Some("json"));
    }

    #[test]
    fn names_and_path_params_exclude_globs_appropriately() {
        let pattern =
            Pattern::bind("/files/*rest(.:format)", &[], None, &[]).expect("pattern should bind");
        let names: Vec<&str> = pattern.names().collect();
        let path_params: Vec<&str> = pattern.path_params().collect();
        assert_eq!(names, ["rest", "format"]);
        assert_eq!(path_params, ["format"]);
    }
}
