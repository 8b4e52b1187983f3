// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Named wrappers over another node.
//!
//! An alias generates exactly the checks of the node it wraps, then its own
//! `func=` chain. Methods in that chain are resolved on the alias type
//! itself (`<Alias>::check(value)`), so an alias can carry validators the
//! wrapped type does not have.
//!
//! Collection bounds are not accepted on an alias; they belong on the
//! wrapped collection.

use proc_macro2::TokenStream;
use syn::Type;

use super::{TypeBuilder, TypeDef, bound::set_once, unrecognized};
use crate::{
    config::GenConfig,
    error::ConfigError,
    func::{Receiver, ValidatorChain},
    name::NameContext,
    tag::{Tag, TagKey}
};

/// How the wrapped value is reached from the alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasMode {
    /// `type Alias = Inner;` the alias value is the inner value.
    Transparent,
    /// `struct Alias(Inner);` the inner value is field `.0`.
    Newtype
}

/// Alias node being configured.
#[derive(Debug, Clone)]
pub struct AliasBuilder {
    ty:    Type,
    mode:  AliasMode,
    inner: Box<TypeBuilder>,
    func:  Option<String>
}

impl AliasBuilder {
    pub(crate) fn new(ty: Type, mode: AliasMode, inner: TypeBuilder) -> Self {
        Self {
            ty,
            mode,
            inner: Box::new(inner),
            func: None
        }
    }

    /// The wrapped node, for tags written on the wrapped field itself.
    pub fn inner_mut(&mut self) -> &mut TypeBuilder {
        &mut self.inner
    }

    pub(crate) fn set_tag(&mut self, tag: &Tag) -> Result<(), ConfigError> {
        match tag.key() {
            TagKey::Func => set_once(&mut self.func, tag),
            TagKey::MinItems | TagKey::MaxItems => Err(unrecognized(tag, "alias")),
            _ => self.inner.set_tag(tag)
        }
    }

    pub(crate) fn validate(self) -> Result<AliasDef, ConfigError> {
        let inner = self.inner.validate()?;
        let funcs = ValidatorChain::parse_slot(self.func.as_deref())?;
        Ok(AliasDef {
            ty: self.ty,
            mode: self.mode,
            inner: Box::new(inner),
            funcs
        })
    }
}

/// Validated alias node.
#[derive(Debug, Clone)]
pub struct AliasDef {
    ty:    Type,
    mode:  AliasMode,
    inner: Box<TypeDef>,
    funcs: ValidatorChain
}

impl AliasDef {
    /// The wrapped node.
    pub fn inner(&self) -> &TypeDef {
        &self.inner
    }

    /// How the wrapped value is reached.
    pub const fn mode(&self) -> AliasMode {
        self.mode
    }

    pub(crate) fn generate(
        &self,
        out: &mut TokenStream,
        cfg: &mut GenConfig,
        name: &NameContext<'_>
    ) {
        match self.mode {
            AliasMode::Transparent => self.inner.generate(out, cfg, name),
            AliasMode::Newtype => self.inner.generate(out, cfg, &name.newtype())
        }
        self.funcs.generate(out, cfg, name, Receiver::Type(&self.ty));
    }
}
