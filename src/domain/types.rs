//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! query-safe parameter names) so that once a value reaches the domain layer it
//! can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest accepted query parameter name.
pub const MAX_INDEX_PARAMETER_LEN: usize = 64;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided name cannot be used as a URL query key.
    #[error("invalid query parameter name: {0}")]
    InvalidParameterName(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(EntityId, "Unique identifier for a content entity.");
id_newtype!(RevisionId, "Identifier of a stored entity revision.");

/// Returns `true` when `value` only contains characters that survive a query
/// string untouched.
fn is_query_safe(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Name of the query parameter that carries the current page index.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct IndexParameterName(String);

impl IndexParameterName {
    /// Trims and validates a parameter name.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if trimmed.len() > MAX_INDEX_PARAMETER_LEN || !is_query_safe(trimmed) {
            return Err(TypeConstraintError::InvalidParameterName(
                trimmed.to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the name as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IndexParameterName {
    fn default() -> Self {
        Self(crate::domain::pager::DEFAULT_INDEX_PARAMETER.to_string())
    }
}

impl Display for IndexParameterName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for IndexParameterName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<String> for IndexParameterName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for IndexParameterName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IndexParameterName> for String {
    fn from(value: IndexParameterName) -> Self {
        value.0
    }
}

/// Named rendering variant of an entity such as `full` or `teaser`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ViewMode(String);

impl ViewMode {
    /// Validates that the view mode is a non-empty, query-safe machine name.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !is_query_safe(trimmed) {
            return Err(TypeConstraintError::InvalidParameterName(
                trimmed.to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// View mode of a top-level page.
    pub fn full() -> Self {
        Self("full".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ViewMode {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ViewMode> for String {
    fn from(value: ViewMode) -> Self {
        value.0
    }
}
