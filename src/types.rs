use std::collections::HashMap;

/// Captured parameters of a successful match, keyed by dynamic name.
pub type RouteParams = HashMap<String, String>;

/// Parameters supplied to path generation.
pub type Params = HashMap<String, ParamValue>;

/// Opaque handle for a registered route; assigned at registration and used
/// as the memo in match results. Ordering follows registration order, which
/// is also match precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct RouteId(pub(crate) u32);

impl RouteId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result of a successful recognition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: RouteId,
    pub params: RouteParams,
}

/// A generation parameter: a single value, or a list that a glob joins with
/// `/` before escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Value(String),
    List(Vec<String>),
}

impl ParamValue {
    /// Flattens the value into the string the formatter escapes.
    pub(crate) fn render(&self) -> std::borrow::Cow<'_, str> {
        match self {
            ParamValue::Value(value) => std::borrow::Cow::Borrowed(value),
            ParamValue::List(values) => std::borrow::Cow::Owned(values.join("/")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Value(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Value(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        ParamValue::List(values.iter().map(|value| value.to_string()).collect())
    }
}
