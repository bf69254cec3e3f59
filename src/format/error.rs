use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing required parameter ':{name}' for path generation")]
    MissingParameter { name: String },
    #[error("no alternation branch is satisfiable with the supplied parameters")]
    AmbiguousAlternation,
}

pub type FormatResult<T> = Result<T, FormatError>;
