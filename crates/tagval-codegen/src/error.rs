// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator-time errors.
//!
//! Two families, both fatal for the field they occur on:
//!
//! | Type | Raised by | Example |
//! |------|-----------|---------|
//! | [`ParseError`] | [`parse_tags`](crate::parse_tags) | `item=[min=1` (unclosed bracket) |
//! | [`ConfigError`] | `set_tag` / `validate` | `min_items=-1`, `nullable` on a `String` |
//!
//! [`Error`] unifies them for [`TypeBuilder::apply`](crate::TypeBuilder::apply).

use thiserror::Error;

use crate::tag::{MAX_DEPTH, TagKey};

/// Malformed annotation text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tag `{input}` at position {position}: {kind}")]
pub struct ParseError {
    /// The whole annotation being parsed.
    pub input:    String,
    /// Byte offset of the problem.
    pub position: usize,
    /// What went wrong.
    pub kind:     ParseErrorKind
}

/// Reason a [`ParseError`] was raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// An entry with no key, e.g. `min=1,,max=2` or `item=[]`.
    #[error("empty tag key")]
    EmptyKey,

    /// A `,` with nothing after it.
    #[error("trailing separator")]
    TrailingSeparator,

    /// A `[` that is never closed.
    #[error("unclosed `[`")]
    UnclosedBracket,

    /// A character that cannot appear here, such as a stray `]`.
    #[error("unexpected `{0}`")]
    UnexpectedCharacter(char),

    /// A key outside the vocabulary.
    #[error("unknown tag key `{0}`")]
    UnknownKey(String),

    /// `min` without `=value`.
    #[error("tag `{0}` requires a parameter")]
    MissingParameter(TagKey),

    /// `nullable=1`.
    #[error("tag `{0}` does not take a parameter")]
    UnexpectedParameter(TagKey),

    /// `item=5`.
    #[error("tag `{0}` expects a `[...]` scope")]
    ExpectedScope(TagKey),

    /// `min=[...]`.
    #[error("tag `{0}` does not take a `[...]` scope")]
    UnexpectedScope(TagKey),

    /// Scopes nested deeper than [`MAX_DEPTH`].
    #[error("tags nested deeper than {max} scopes", max = MAX_DEPTH)]
    TooDeep
}

/// A tag that cannot configure the node it was applied to, or a
/// configuration that contradicts itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The key is valid but means nothing for this node.
    #[error("tag `{tag}` is not supported for {target}")]
    UnrecognizedTag {
        /// Offending tag as written.
        tag:    String,
        /// Node description, e.g. `"string"` or `"map"`.
        target: &'static str
    },

    /// The same simple tag applied twice to one node.
    #[error("tag `{key}` is specified more than once")]
    DuplicateTag {
        /// Repeated key.
        key: TagKey
    },

    /// Bound text that is not a number of the expected kind.
    #[error("bound `{key}={value}` is not a valid {expected}")]
    MalformedBound {
        /// Bound key.
        key:      TagKey,
        /// Bound text.
        value:    String,
        /// What was expected, e.g. `"integer"`.
        expected: &'static str
    },

    /// A size or length bound below zero.
    #[error("bound `{key}={value}` can't be less than 0")]
    NegativeBound {
        /// Bound key.
        key:   TagKey,
        /// Bound text.
        value: String
    },

    /// Lower bound above upper bound.
    #[error("lower bound `{min_key}={min}` exceeds upper bound `{max_key}={max}`")]
    InvertedBounds {
        /// Lower bound key.
        min_key: TagKey,
        /// Lower bound text.
        min:     String,
        /// Upper bound key.
        max_key: TagKey,
        /// Upper bound text.
        max:     String
    },

    /// Both `nullable` and `not_null` on one optional.
    #[error("`nullable` and `not_null` can't be combined")]
    ConflictingNullability,

    /// A `func=` entry that is not `.method` or a function path.
    #[error("invalid validator reference `{reference}` in `func={chain}`")]
    InvalidValidatorRef {
        /// Offending entry.
        reference: String,
        /// Whole chain.
        chain:     String
    },

    /// A hand-built tag whose shape does not match its key.
    #[error("tag `{tag}` is malformed: expected {expected}")]
    MalformedTag {
        /// Offending tag as written.
        tag:      String,
        /// Expected shape.
        expected: &'static str
    },

    /// Failure inside an `item`/`key`/`value` scope.
    #[error("in `{scope}=[...]`: {source}")]
    Nested {
        /// Scope key.
        scope:  TagKey,
        /// Underlying failure.
        source: Box<ConfigError>
    },

    /// Failure on a struct field.
    #[error("field `{field}`: {source}")]
    Field {
        /// Field name.
        field:  String,
        /// Underlying failure.
        source: Box<ConfigError>
    }
}

impl ConfigError {
    pub(crate) fn nested(scope: TagKey, source: Self) -> Self {
        Self::Nested {
            scope,
            source: Box::new(source)
        }
    }

    pub(crate) fn field(field: impl Into<String>, source: Self) -> Self {
        Self::Field {
            field:  field.into(),
            source: Box::new(source)
        }
    }

    /// Innermost failure, skipping `Nested`/`Field` wrappers.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Nested { source, .. } | Self::Field { source, .. } => source.root_cause(),
            other => other
        }
    }
}

/// Any failure while applying a raw annotation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Annotation text did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A parsed tag did not fit the node.
    #[error(transparent)]
    Config(#[from] ConfigError)
}
