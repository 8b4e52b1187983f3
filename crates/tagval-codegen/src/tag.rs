// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotation grammar.
//!
//! Turns a raw annotation string into an ordered sequence of [`Tag`] nodes.
//!
//! # Grammar
//!
//! ```text
//! tags  := entry (',' entry)*
//! entry := key
//!        | key '=' param
//!        | key '=' '[' entry (',' entry)* ']'
//! ```
//!
//! Commas inside `[...]` never split the enclosing entry. Parameters are
//! opaque at this level, so `func=.a;b` keeps its `;` chain intact for
//! [`ValidatorChain`](crate::ValidatorChain).
//!
//! # Vocabulary
//!
//! | Key | Shape | Meaning |
//! |-----|-------|---------|
//! | `min`, `max` | param | Numeric range |
//! | `min_len`, `max_len` | param | String length in characters |
//! | `min_items`, `max_items` | param | Collection size |
//! | `nullable`, `not_null` | flag | Optional value policy |
//! | `item`, `key`, `value` | scope | Tags for elements, map keys, map values |
//! | `func` | param | Custom validator chain |

use std::fmt;

use crate::error::{ConfigError, ParseError, ParseErrorKind};

/// Maximum `[...]` nesting accepted by [`parse_tags`].
pub const MAX_DEPTH: usize = 16;

/// A key from the fixed tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKey {
    /// `min=N`: numeric lower bound.
    Min,
    /// `max=N`: numeric upper bound.
    Max,
    /// `min_len=N`: minimum string length.
    MinLen,
    /// `max_len=N`: maximum string length.
    MaxLen,
    /// `min_items=N`: minimum collection size.
    MinItems,
    /// `max_items=N`: maximum collection size.
    MaxItems,
    /// `nullable`: an absent optional value is accepted.
    Nullable,
    /// `not_null`: an optional value must be present.
    NotNull,
    /// `item=[...]`: tags for collection elements.
    Item,
    /// `key=[...]`: tags for map keys.
    Key,
    /// `value=[...]`: tags for map values.
    Value,
    /// `func=ref[;ref...]`: custom validator chain.
    Func
}

/// How a key is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagShape {
    /// Bare key, no `=`.
    Flag,
    /// `key=param`.
    Param,
    /// `key=[...]`.
    Scope
}

impl TagKey {
    /// Every key in the vocabulary.
    pub const ALL: [Self; 12] = [
        Self::Min,
        Self::Max,
        Self::MinLen,
        Self::MaxLen,
        Self::MinItems,
        Self::MaxItems,
        Self::Nullable,
        Self::NotNull,
        Self::Item,
        Self::Key,
        Self::Value,
        Self::Func
    ];

    /// Key as written in annotations.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::MinLen => "min_len",
            Self::MaxLen => "max_len",
            Self::MinItems => "min_items",
            Self::MaxItems => "max_items",
            Self::Nullable => "nullable",
            Self::NotNull => "not_null",
            Self::Item => "item",
            Self::Key => "key",
            Self::Value => "value",
            Self::Func => "func"
        }
    }

    /// Expected syntactic shape.
    pub const fn shape(self) -> TagShape {
        match self {
            Self::Nullable | Self::NotNull => TagShape::Flag,
            Self::Item | Self::Key | Self::Value => TagShape::Scope,
            _ => TagShape::Param
        }
    }

    /// Look up a key by its annotation spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed unit of an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// `key` or `key=param`.
    Simple {
        /// Tag key.
        key:   TagKey,
        /// Parameter text, trimmed.
        param: Option<String>
    },

    /// `key=[...]`.
    Scope {
        /// Tag key.
        key:  TagKey,
        /// Nested tags in written order.
        tags: Vec<Tag>
    }
}

impl Tag {
    /// Create a bare flag tag.
    pub const fn flag(key: TagKey) -> Self {
        Self::Simple {
            key,
            param: None
        }
    }

    /// Create a `key=param` tag.
    pub fn param(key: TagKey, param: impl Into<String>) -> Self {
        Self::Simple {
            key,
            param: Some(param.into())
        }
    }

    /// Create a `key=[...]` tag.
    pub const fn scope(key: TagKey, tags: Vec<Tag>) -> Self {
        Self::Scope {
            key,
            tags
        }
    }

    /// The tag key.
    pub const fn key(&self) -> TagKey {
        match self {
            Self::Simple { key, .. } | Self::Scope { key, .. } => *key
        }
    }

    /// Parameter of a `key=param` tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedTag`] for flags and scopes.
    pub fn expect_param(&self) -> Result<&str, ConfigError> {
        match self {
            Self::Simple { param: Some(param), .. } => Ok(param),
            _ => Err(ConfigError::MalformedTag {
                tag:      self.to_string(),
                expected: "`key=value`"
            })
        }
    }

    /// Nested tags of a `key=[...]` tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedTag`] for simple tags.
    pub fn expect_scope(&self) -> Result<&[Tag], ConfigError> {
        match self {
            Self::Scope { tags, .. } => Ok(tags),
            Self::Simple { .. } => Err(ConfigError::MalformedTag {
                tag:      self.to_string(),
                expected: "`key=[...]`"
            })
        }
    }

    /// Ensure this is a bare flag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedTag`] when a parameter or scope is
    /// attached.
    pub fn expect_flag(&self) -> Result<(), ConfigError> {
        match self {
            Self::Simple { param: None, .. } => Ok(()),
            _ => Err(ConfigError::MalformedTag {
                tag:      self.to_string(),
                expected: "a bare key"
            })
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple { key, param: None } => write!(f, "{}", key),
            Self::Simple { key, param: Some(param) } => write!(f, "{}={}", key, param),
            Self::Scope { key, tags } => {
                write!(f, "{}=[", key)?;
                for (index, tag) in tags.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", tag)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Parse an annotation into tags.
///
/// Whitespace around keys and parameters is ignored. An empty annotation
/// yields no tags.
///
/// # Errors
///
/// Returns a [`ParseError`] pointing at the byte offset of the first
/// problem: unbalanced brackets, an empty key, a trailing separator, a key
/// outside the vocabulary, a key written in the wrong shape, or nesting
/// deeper than [`MAX_DEPTH`].
///
/// # Example
///
/// ```rust
/// use tagval_codegen::{Tag, TagKey, parse_tags};
///
/// let tags = parse_tags("item=[min=1,max=2]").unwrap();
/// assert_eq!(tags, vec![Tag::scope(TagKey::Item, vec![
///     Tag::param(TagKey::Min, "1"),
///     Tag::param(TagKey::Max, "2"),
/// ])]);
/// ```
pub fn parse_tags(input: &str) -> Result<Vec<Tag>, ParseError> {
    let mut parser = Parser {
        input,
        pos: 0,
        depth: 0
    };
    parser.skip_whitespace();
    if parser.at_end() {
        return Ok(Vec::new());
    }
    parser.entries(false)
}

struct Parser<'a> {
    input: &'a str,
    pos:   usize,
    depth: usize
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn error_at(&self, position: usize, kind: ParseErrorKind) -> ParseError {
        ParseError {
            input: self.input.to_string(),
            position,
            kind
        }
    }

    fn unexpected(&self) -> ParseError {
        let found = self.input[self.pos..].chars().next().unwrap_or_default();
        self.error_at(self.pos, ParseErrorKind::UnexpectedCharacter(found))
    }

    /// Read until one of `stops` or the end, returning the trimmed slice and
    /// the offset where it started.
    fn read_until(&mut self, stops: &[u8]) -> (&'a str, usize) {
        let start = self.pos;
        while self.peek().is_some_and(|byte| !stops.contains(&byte)) {
            self.pos += 1;
        }
        let raw: &'a str = &self.input[start..self.pos];
        let leading = raw.len() - raw.trim_start().len();
        (raw.trim(), start + leading)
    }

    fn entries(&mut self, nested: bool) -> Result<Vec<Tag>, ParseError> {
        let mut tags = Vec::new();
        loop {
            tags.push(self.entry()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    let comma = self.pos;
                    self.pos += 1;
                    self.skip_whitespace();
                    if matches!(self.peek(), None | Some(b']')) {
                        return Err(self.error_at(comma, ParseErrorKind::TrailingSeparator));
                    }
                }
                Some(b']') if nested => {
                    self.pos += 1;
                    return Ok(tags);
                }
                None if !nested => return Ok(tags),
                None => {
                    return Err(self.error_at(self.pos, ParseErrorKind::UnclosedBracket));
                }
                Some(_) => return Err(self.unexpected())
            }
        }
    }

    fn entry(&mut self) -> Result<Tag, ParseError> {
        self.skip_whitespace();
        let (name, key_pos) = self.read_until(b"=,[]");
        if name.is_empty() {
            return Err(self.error_at(key_pos, ParseErrorKind::EmptyKey));
        }
        let key = TagKey::from_name(name)
            .ok_or_else(|| self.error_at(key_pos, ParseErrorKind::UnknownKey(name.to_string())))?;

        match self.peek() {
            Some(b'[') => Err(self.unexpected()),
            Some(b'=') => {
                self.pos += 1;
                self.skip_whitespace();
                if self.peek() == Some(b'[') {
                    self.scope(key, key_pos)
                } else {
                    self.param(key, key_pos)
                }
            }
            _ => match key.shape() {
                TagShape::Flag => Ok(Tag::flag(key)),
                TagShape::Param => {
                    Err(self.error_at(key_pos, ParseErrorKind::MissingParameter(key)))
                }
                TagShape::Scope => Err(self.error_at(key_pos, ParseErrorKind::ExpectedScope(key)))
            }
        }
    }

    fn scope(&mut self, key: TagKey, key_pos: usize) -> Result<Tag, ParseError> {
        if key.shape() != TagShape::Scope {
            return Err(self.error_at(key_pos, ParseErrorKind::UnexpectedScope(key)));
        }
        if self.depth >= MAX_DEPTH {
            return Err(self.error_at(self.pos, ParseErrorKind::TooDeep));
        }
        self.pos += 1;
        self.depth += 1;
        let tags = self.entries(true)?;
        self.depth -= 1;
        Ok(Tag::scope(key, tags))
    }

    fn param(&mut self, key: TagKey, key_pos: usize) -> Result<Tag, ParseError> {
        let (param, param_pos) = self.read_until(b",[]");
        if self.peek() == Some(b'[') {
            return Err(self.unexpected());
        }
        match key.shape() {
            TagShape::Flag => Err(self.error_at(key_pos, ParseErrorKind::UnexpectedParameter(key))),
            TagShape::Scope => Err(self.error_at(key_pos, ParseErrorKind::ExpectedScope(key))),
            TagShape::Param if param.is_empty() => {
                Err(self.error_at(param_pos, ParseErrorKind::MissingParameter(key)))
            }
            TagShape::Param => Ok(Tag::param(key, param))
        }
    }
}
