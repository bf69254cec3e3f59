use thiserror::Error;

use crate::format::FormatError;
use crate::pattern::PatternError;
use crate::types::RouteId;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("no route registered with id {id:?}")]
    UnknownRoute { id: RouteId },
    #[error("no route registered under the name '{name}'")]
    UnknownRouteName { name: String },
}

pub type RouterResult<T> = Result<T, RouterError>;
