use regex::Regex;

use crate::pattern::{PatternError, PatternResult};

/// Default requirement for a single dynamic segment: everything except the
/// three structural separators.
pub const DEFAULT_SEGMENT_REQUIREMENT: &str = "[^./?]+";

/// Implicit glob requirement when the route participates in format
/// negotiation: lazy, so a trailing literal `.format` segment can still be
/// peeled off by a following optional group.
pub const GLOB_FORMAT_REQUIREMENT: &str = ".+?";

/// Compile-time fallback for a glob with no requirement bound at all.
pub const GLOB_FALLBACK_REQUIREMENT: &str = ".+";

/// The implicit glob requirement, keyed by the three-valued `formatted`
/// flag. Kept as a literal table: `true` and unset share the lazy default
/// so a trailing format segment stays peelable, while `false` suppresses
/// any implicit requirement.
pub fn glob_default_requirement(formatted: Option<bool>) -> Option<&'static str> {
    match formatted {
        Some(true) => Some(GLOB_FORMAT_REQUIREMENT),
        None => Some(GLOB_FORMAT_REQUIREMENT),
        Some(false) => None,
    }
}

/// A per-name matching constraint: the raw regex source as supplied (or
/// defaulted), plus a whole-token anchored compilation of it.
#[derive(Debug)]
pub struct NameRequirement {
    raw: Box<str>,
    anchored: Regex,
}

impl NameRequirement {
    pub fn compile(name: &str, raw: &str) -> PatternResult<Self> {
        reject_anchors(name, raw)?;
        let anchored = Regex::new(&format!(r"\A(?:{raw})\z")).map_err(|source| {
            PatternError::InvalidRequirement {
                name: name.to_string(),
                source: Box::new(source),
            }
        })?;
        Ok(Self {
            raw: raw.into(),
            anchored,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this is the default single-segment requirement, which the
    /// automaton fast-paths without invoking the regex engine.
    pub fn is_default_segment(&self) -> bool {
        &*self.raw == DEFAULT_SEGMENT_REQUIREMENT
    }

    /// Whole-string match of a candidate capture.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        self.anchored.is_match(candidate)
    }
}

impl PartialEq for NameRequirement {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for NameRequirement {}

/// Requirements are embedded into larger anchored expressions, so anchors of
/// their own would silently change meaning; reject them at registration.
fn reject_anchors(name: &str, raw: &str) -> PatternResult<()> {
    let leading = raw.starts_with('^') || raw.starts_with(r"\A");
    let trailing = (raw.ends_with('$') && !raw.ends_with(r"\$"))
        || raw.ends_with(r"\z")
        || raw.ends_with(r"\Z");
    if leading || trailing {
        return Err(PatternError::AnchoredRequirement {
            name: name.to_string(),
        });
    }
    Ok(())
}
