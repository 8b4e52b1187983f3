// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Option<T>`.
//!
//! An absent value is an error unless the node is tagged `nullable`. Every
//! other tag configures the wrapped value, so `nullable,min_len=1` checks
//! the length only when a value is present.

use proc_macro2::TokenStream;
use quote::quote;

use super::{TypeBuilder, TypeDef, bound::set_flag, fail};
use crate::{
    config::GenConfig,
    error::ConfigError,
    name::NameContext,
    tag::{Tag, TagKey}
};

/// Optional node being configured.
#[derive(Debug, Clone)]
pub struct PointerBuilder {
    nullable: bool,
    not_null: bool,
    inner:    Box<TypeBuilder>
}

impl PointerBuilder {
    pub(crate) fn new(inner: TypeBuilder) -> Self {
        Self {
            nullable: false,
            not_null: false,
            inner:    Box::new(inner)
        }
    }

    pub(crate) fn set_tag(&mut self, tag: &Tag) -> Result<(), ConfigError> {
        match tag.key() {
            TagKey::Nullable => set_flag(&mut self.nullable, tag),
            TagKey::NotNull => set_flag(&mut self.not_null, tag),
            _ => self.inner.set_tag(tag)
        }
    }

    pub(crate) fn validate(self) -> Result<PointerDef, ConfigError> {
        if self.nullable && self.not_null {
            return Err(ConfigError::ConflictingNullability);
        }
        Ok(PointerDef {
            nullable: self.nullable,
            inner:    Box::new(self.inner.validate()?)
        })
    }
}

/// Validated optional node.
#[derive(Debug, Clone)]
pub struct PointerDef {
    nullable: bool,
    inner:    Box<TypeDef>
}

impl PointerDef {
    /// Whether an absent value is accepted.
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// The wrapped node.
    pub fn inner(&self) -> &TypeDef {
        &self.inner
    }

    pub(crate) fn generate(
        &self,
        out: &mut TokenStream,
        cfg: &mut GenConfig,
        name: &NameContext<'_>
    ) {
        let value = name.full();
        let (binding, present) = name.present();
        let mut checks = TokenStream::new();
        self.inner.generate(&mut checks, cfg, &present);

        match (self.nullable, checks.is_empty()) {
            (true, true) => {}
            (true, false) => out.extend(quote! {
                if let ::core::option::Option::Some(#binding) = #value {
                    #checks
                }
            }),
            (false, true) => {
                let fail = fail(cfg, name.field_name(), quote!(Missing));
                out.extend(quote! {
                    if (#value).is_none() { #fail }
                });
            }
            (false, false) => {
                let fail = fail(cfg, name.field_name(), quote!(Missing));
                out.extend(quote! {
                    match #value {
                        ::core::option::Option::Some(#binding) => { #checks }
                        ::core::option::Option::None => { #fail }
                    }
                });
            }
        }
    }
}
