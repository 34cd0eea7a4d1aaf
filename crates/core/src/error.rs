//! Validation error model.

use serde::Serialize;
use thiserror::Error;

/// Category of a failed constraint, serialized as `snake_case` in error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Payload could not be parsed into the declared shape (bad JSON, wrong
    /// type, missing required field, forbidden extra field).
    Parse,
    /// Number was not strictly greater than the bound.
    GreaterThan,
    /// String exceeded its maximum length.
    StringTooLong,
    /// List exceeded its maximum number of entries.
    TooManyItems,
    /// Value was not an absolute http(s) URL.
    InvalidUrl,
}

/// A single violated constraint, before it is attached to a field location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Violation {
    pub kind: ErrorKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A violated constraint at a dotted location (`products.0.price`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{loc}: {message}")]
pub struct FieldError {
    pub loc: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(loc: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a structural (deserialization) failure.
    pub fn parse(loc: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(loc, ErrorKind::Parse, message)
    }

    fn prefixed(mut self, prefix: &str) -> Self {
        self.loc = join_loc(prefix, &self.loc);
        self
    }
}

/// All constraint violations found in one payload.
///
/// Never empty when returned as an `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Append `other`, prefixing each location with `prefix`.
    pub fn merge_nested(&mut self, prefix: &str, other: ValidationErrors) {
        self.0
            .extend(other.0.into_iter().map(|e| e.prefixed(prefix)));
    }

    /// Prefix every location with `prefix` (e.g. `body`).
    pub fn nest(self, prefix: &str) -> Self {
        Self(self.0.into_iter().map(|e| e.prefixed(prefix)).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// True if some error sits exactly at `loc`.
    pub fn has(&self, loc: &str) -> bool {
        self.0.iter().any(|e| e.loc == loc)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn join_loc(prefix: &str, loc: &str) -> String {
    match (prefix.is_empty(), loc.is_empty()) {
        (true, _) => loc.to_string(),
        (_, true) => prefix.to_string(),
        _ => format!("{prefix}.{loc}"),
    }
}
