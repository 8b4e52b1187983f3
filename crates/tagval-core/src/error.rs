// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validation failure types.

use std::fmt;

/// The constraint a value failed.
///
/// Bound texts for numeric ranges are kept exactly as written in the
/// annotation, so messages echo `-4.22` rather than a reformatted float.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Collection has fewer items than `min_items`.
    TooFewItems {
        /// Required minimum.
        min: usize
    },

    /// Collection has more items than `max_items`.
    TooManyItems {
        /// Allowed maximum.
        max: usize
    },

    /// String has fewer characters than `min_len`.
    TooShort {
        /// Required minimum, in characters.
        min: usize
    },

    /// String has more characters than `max_len`.
    TooLong {
        /// Allowed maximum, in characters.
        max: usize
    },

    /// Number is below `min`.
    BelowMinimum {
        /// Bound as written in the annotation.
        min: &'static str
    },

    /// Number is above `max`.
    AboveMaximum {
        /// Bound as written in the annotation.
        max: &'static str
    },

    /// Required optional value is absent.
    Missing,

    /// Failure reported by a custom validator.
    Custom(String)
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewItems { min } => write!(f, "must contain at least {} items", min),
            Self::TooManyItems { max } => write!(f, "must contain at most {} items", max),
            Self::TooShort { min } => write!(f, "must be at least {} characters long", min),
            Self::TooLong { max } => write!(f, "must be at most {} characters long", max),
            Self::BelowMinimum { min } => write!(f, "must be greater than or equal to {}", min),
            Self::AboveMaximum { max } => write!(f, "must be less than or equal to {}", max),
            Self::Missing => f.write_str("is required"),
            Self::Custom(message) => f.write_str(message)
        }
    }
}

/// A failed check, naming the field path it was found at.
///
/// Paths are dotted (`dog.name`); collection elements append `[]`, map keys
/// and values append `[key]` / `[value]`.
///
/// # Example
///
/// ```rust
/// use tagval_core::{ValidationError, Violation};
///
/// let err = ValidationError::new("name", Violation::TooShort { min: 3 });
/// assert_eq!(err.to_string(), "name: must be at least 3 characters long");
///
/// let nested = err.at("owner");
/// assert_eq!(nested.field(), "owner.name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field:     String,
    violation: Violation
}

impl ValidationError {
    /// Create an error for a field.
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            violation
        }
    }

    /// Create a field-less error carrying a custom message.
    ///
    /// Generated code roots it at the field whose validator returned it.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(String::new(), Violation::Custom(message.into()))
    }

    /// Re-root this error under `parent`.
    ///
    /// An empty field takes `parent` as-is; an empty `parent` leaves the
    /// error unchanged. Element suffixes (`[]`, `[key]`, `[value]`) attach
    /// without a dot.
    #[must_use]
    pub fn at(mut self, parent: &str) -> Self {
        if parent.is_empty() {
            return self;
        }
        self.field = if self.field.is_empty() {
            parent.to_string()
        } else if self.field.starts_with('[') {
            format!("{}{}", parent, self.field)
        } else {
            format!("{}.{}", parent, self.field)
        };
        self
    }

    /// Path of the offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The violated constraint.
    pub const fn violation(&self) -> &Violation {
        &self.violation
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.violation)
        } else {
            write!(f, "{}: {}", self.field, self.violation)
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::custom(message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::custom(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_field() {
        let err = ValidationError::new("urls", Violation::TooFewItems { min: 1 });
        assert_eq!(err.to_string(), "urls: must contain at least 1 items");
    }

    #[test]
    fn display_without_field() {
        let err = ValidationError::custom("dog name too long");
        assert_eq!(err.to_string(), "dog name too long");
        assert_eq!(err.field(), "");
    }

    #[test]
    fn at_fills_empty_field() {
        let err = ValidationError::custom("bad").at("some");
        assert_eq!(err.field(), "some");
        assert_eq!(err.violation(), &Violation::Custom("bad".to_string()));
    }

    #[test]
    fn at_prefixes_nested_field() {
        let err = ValidationError::new("name", Violation::Missing)
            .at("dogs[]")
            .at("owner");
        assert_eq!(err.field(), "owner.dogs[].name");
    }

    #[test]
    fn at_attaches_element_suffix() {
        let err = ValidationError::new("[value]", Violation::Missing).at("aliases");
        assert_eq!(err.field(), "aliases[value]");
    }

    #[test]
    fn at_empty_parent_is_noop() {
        let err = ValidationError::new("name", Violation::Missing).at("");
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn numeric_bounds_echo_text() {
        let below = Violation::BelowMinimum { min: "-4.22" };
        let above = Violation::AboveMaximum { max: "42.55" };
        assert_eq!(below.to_string(), "must be greater than or equal to -4.22");
        assert_eq!(above.to_string(), "must be less than or equal to 42.55");
    }

    #[test]
    fn length_messages() {
        assert_eq!(
            Violation::TooLong { max: 64 }.to_string(),
            "must be at most 64 characters long"
        );
        assert_eq!(
            Violation::TooManyItems { max: 2 }.to_string(),
            "must contain at most 2 items"
        );
        assert_eq!(Violation::Missing.to_string(), "is required");
    }

    #[test]
    fn from_strings() {
        let owned: ValidationError = String::from("owned").into();
        let borrowed: ValidationError = "borrowed".into();
        assert_eq!(owned.to_string(), "owned");
        assert_eq!(borrowed.to_string(), "borrowed");
    }
}
