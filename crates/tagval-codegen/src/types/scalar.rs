// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Integers, floats, strings, bytes and booleans.
//!
//! | Kind | Tags | Check |
//! |------|------|-------|
//! | Integer | `min`, `max`, `func` | value widened to `i128` |
//! | Float | `min`, `max`, `func` | value at its own width |
//! | String | `min_len`, `max_len`, `func` | length in `char`s |
//! | Byte, Bool | `func` | none built in |

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    bound::{Bound, ordered, parse_slot, set_once},
    fail, unrecognized
};
use crate::{
    config::GenConfig,
    error::ConfigError,
    func::{Receiver, ValidatorChain},
    name::NameContext,
    tag::{Tag, TagKey}
};

/// Leaf value category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Any native integer width.
    Integer,
    /// `f32` or `f64`.
    Float,
    /// Owned or borrowed text.
    String,
    /// A single byte.
    Byte,
    /// `bool`.
    Bool
}

impl ScalarKind {
    /// Name used in error messages.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Byte => "byte",
            Self::Bool => "bool"
        }
    }
}

/// Scalar node being configured.
#[derive(Debug, Clone)]
pub struct ScalarBuilder {
    kind:    ScalarKind,
    min:     Option<String>,
    max:     Option<String>,
    min_len: Option<String>,
    max_len: Option<String>,
    func:    Option<String>
}

impl ScalarBuilder {
    pub(crate) const fn new(kind: ScalarKind) -> Self {
        Self {
            kind,
            min: None,
            max: None,
            min_len: None,
            max_len: None,
            func: None
        }
    }

    /// Leaf category.
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub(crate) fn set_tag(&mut self, tag: &Tag) -> Result<(), ConfigError> {
        use ScalarKind::{Float, Integer, String};

        match (self.kind, tag.key()) {
            (Integer | Float, TagKey::Min) => set_once(&mut self.min, tag),
            (Integer | Float, TagKey::Max) => set_once(&mut self.max, tag),
            (String, TagKey::MinLen) => set_once(&mut self.min_len, tag),
            (String, TagKey::MaxLen) => set_once(&mut self.max_len, tag),
            (_, TagKey::Func) => set_once(&mut self.func, tag),
            (kind, _) => Err(unrecognized(tag, kind.describe()))
        }
    }

    pub(crate) fn validate(self) -> Result<ScalarDef, ConfigError> {
        let checks = match self.kind {
            ScalarKind::Integer => {
                let min = parse_slot(TagKey::Min, self.min, Bound::<i128>::integer)?;
                let max = parse_slot(TagKey::Max, self.max, Bound::<i128>::integer)?;
                ordered((TagKey::Min, &min), (TagKey::Max, &max))?;
                Checks::Integer {
                    min,
                    max
                }
            }
            ScalarKind::Float => {
                let min = parse_slot(TagKey::Min, self.min, Bound::<f64>::float)?;
                let max = parse_slot(TagKey::Max, self.max, Bound::<f64>::float)?;
                ordered((TagKey::Min, &min), (TagKey::Max, &max))?;
                Checks::Float {
                    min,
                    max
                }
            }
            ScalarKind::String => {
                let min = parse_slot(TagKey::MinLen, self.min_len, Bound::<usize>::count)?;
                let max = parse_slot(TagKey::MaxLen, self.max_len, Bound::<usize>::count)?;
                ordered((TagKey::MinLen, &min), (TagKey::MaxLen, &max))?;
                Checks::Length {
                    min,
                    max
                }
            }
            ScalarKind::Byte | ScalarKind::Bool => Checks::None
        };
        let funcs = ValidatorChain::parse_slot(self.func.as_deref())?;
        Ok(ScalarDef {
            kind: self.kind,
            checks,
            funcs
        })
    }
}

#[derive(Debug, Clone)]
enum Checks {
    Integer {
        min: Option<Bound<i128>>,
        max: Option<Bound<i128>>
    },
    Float {
        min: Option<Bound<f64>>,
        max: Option<Bound<f64>>
    },
    Length {
        min: Option<Bound<usize>>,
        max: Option<Bound<usize>>
    },
    None
}

/// Validated scalar node.
#[derive(Debug, Clone)]
pub struct ScalarDef {
    kind:   ScalarKind,
    checks: Checks,
    funcs:  ValidatorChain
}

impl ScalarDef {
    /// Leaf category.
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub(crate) fn generate(
        &self,
        out: &mut TokenStream,
        cfg: &mut GenConfig,
        name: &NameContext<'_>
    ) {
        let value = name.full();
        let field = name.field_name();
        match &self.checks {
            Checks::Integer { min, max } if min.is_some() || max.is_some() => {
                let below = limit(min, Bound::<i128>::literal)
                    .map(|(bound, text)| (quote!(__tagval_wide.is_some_and(|n| n < #bound)), text));
                let above = limit(max, Bound::<i128>::literal)
                    .map(|(bound, text)| (quote!(__tagval_wide.is_none_or(|n| n > #bound)), text));
                let body = range(cfg, field, below, above);
                out.extend(quote! {
                    {
                        let __tagval_wide =
                            <i128 as ::core::convert::TryFrom<_>>::try_from(*#value).ok();
                        #body
                    }
                });
            }
            Checks::Float { min, max } => {
                let below = limit(min, Bound::<f64>::literal)
                    .map(|(bound, text)| (quote!((*#value) < #bound), text));
                let above = limit(max, Bound::<f64>::literal)
                    .map(|(bound, text)| (quote!((*#value) > #bound), text));
                out.extend(range(cfg, field, below, above));
            }
            Checks::Length { min, max } if min.is_some() || max.is_some() => {
                let mut body = TokenStream::new();
                if let Some(min) = min {
                    let limit = min.literal();
                    let fail = fail(cfg, field, quote!(TooShort { min: #limit }));
                    body.extend(quote! { if __tagval_len < #limit { #fail } });
                }
                if let Some(max) = max {
                    let limit = max.literal();
                    let fail = fail(cfg, field, quote!(TooLong { max: #limit }));
                    body.extend(quote! { if __tagval_len > #limit { #fail } });
                }
                out.extend(quote! {
                    {
                        let __tagval_len = (#value).chars().count();
                        #body
                    }
                });
            }
            Checks::Integer { .. } | Checks::Length { .. } | Checks::None => {}
        }
        self.funcs.generate(out, cfg, name, Receiver::Value);
    }
}

fn limit<'a, T>(
    bound: &'a Option<Bound<T>>,
    literal: fn(&Bound<T>) -> TokenStream
) -> Option<(TokenStream, &'a str)> {
    bound
        .as_ref()
        .map(|bound| (literal(bound), bound.text.as_str()))
}

/// Emit one failing branch per present bound.
///
/// Each condition is true when the value is out of range.
fn range(
    cfg: &mut GenConfig,
    field: &str,
    below: Option<(TokenStream, &str)>,
    above: Option<(TokenStream, &str)>
) -> TokenStream {
    let mut out = TokenStream::new();
    if let Some((condition, text)) = below {
        let fail = fail(cfg, field, quote!(BelowMinimum { min: #text }));
        out.extend(quote! { if #condition { #fail } });
    }
    if let Some((condition, text)) = above {
        let fail = fail(cfg, field, quote!(AboveMaximum { max: #text }));
        out.extend(quote! { if #condition { #fail } });
    }
    out
}
