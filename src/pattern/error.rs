use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("group opened at byte {start} in pattern '{pattern}' is never closed")]
    UnterminatedGroup { pattern: String, start: usize },
    #[error("unexpected ')' at byte {index} in pattern '{pattern}'")]
    UnexpectedClosingParenthesis { pattern: String, index: usize },
    #[error("group opened at byte {start} in pattern '{pattern}' is empty")]
    EmptyGroup { pattern: String, start: usize },
    #[error("dynamic segment at byte {index} in pattern '{pattern}' is missing a name")]
    MissingName { pattern: String, index: usize },
    #[error(
        "name '{name}' in pattern '{pattern}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    InvalidNameStart {
        pattern: String,
        name: String,
        found: char,
    },
    #[error("dynamic name '{name}' appears more than once in pattern '{pattern}'")]
    DuplicateName { pattern: String, name: String },
    #[error("escape character at byte {index} in pattern '{pattern}' is not followed by anything")]
    LoneEscape { pattern: String, index: usize },
    #[error("requirement for '{name}' is not a valid regular expression")]
    InvalidRequirement {
        name: String,
        #[source]
        source: Box<regex::Error>,
    },
    #[error("requirement for '{name}' contains a regexp anchor, which is not allowed in routing requirements")]
    AnchoredRequirement { name: String },
    #[error("pattern '{pattern}' does not compose into a valid matcher")]
    UncompilablePattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
