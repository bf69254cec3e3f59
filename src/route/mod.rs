mod binding;
mod requirement;

pub use binding::Pattern;
pub use requirement::{
    DEFAULT_SEGMENT_REQUIREMENT, GLOB_FALLBACK_REQUIREMENT, GLOB_FORMAT_REQUIREMENT,
    NameRequirement, glob_default_requirement,
};

use crate::pattern::PatternResult;
use crate::types::RouteId;

/// Everything a caller supplies to register one route. Construct with
/// [`RouteSpec::new`] and refine with the builder-style setters.
#[derive(Debug, Clone)]
pub struct RouteSpec {
    pub(crate) pattern: String,
    pub(crate) requirements: Vec<(String, String)>,
    pub(crate) formatted: Option<bool>,
    pub(crate) name: Option<String>,
    pub(crate) defaults: Vec<(String, String)>,
}

impl RouteSpec {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            requirements: Vec::new(),
            formatted: None,
            name: None,
            defaults: Vec::new(),
        }
    }

    /// Constrains a dynamic name to a regex. Whole-token semantics; anchors
    /// are rejected at registration.
    pub fn requirement(mut self, name: impl Into<String>, regex: impl Into<String>) -> Self {
        self.requirements.push((name.into(), regex.into()));
        self
    }

    /// Sets the format-negotiation flag. Unset means "unspecified", which
    /// shares the formatted glob default; `false` suppresses it.
    pub fn formatted(mut self, formatted: bool) -> Self {
        self.formatted = Some(formatted);
        self
    }

    /// Names the route for generation lookups.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Records a default value; a parameter equal to its default does not
    /// force an optional group to be emitted during generation.
    pub fn default_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.push((name.into(), value.into()));
        self
    }
}

/// A registered route: the bound pattern plus its identity. The id doubles
/// as the memo handed back by matching, and registration order of ids is
/// the precedence order of the whole table.
#[derive(Debug)]
pub struct Route {
    id: RouteId,
    name: Option<Box<str>>,
    pattern: Pattern,
}

impl Route {
    pub(crate) fn bind(id: RouteId, spec: &RouteSpec) -> PatternResult<Self> {
        let pattern = Pattern::bind(
            &spec.pattern,
            &spec.requirements,
            spec.formatted,
            &spec.defaults,
        )?;
        Ok(Self {
            id,
            name: spec.name.as_deref().map(Box::from),
            pattern,
        })
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn source(&self) -> &str {
        self.pattern.source()
    }
}
