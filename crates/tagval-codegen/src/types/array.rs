// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Sequences and sets.

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    TypeBuilder, TypeDef,
    bound::{Bound, ordered, parse_slot, set_once},
    forward_scope, size_guards, unrecognized
};
use crate::{
    config::GenConfig,
    error::ConfigError,
    name::NameContext,
    tag::{Tag, TagKey}
};

/// Collection node being configured.
#[derive(Debug, Clone)]
pub struct ArrayBuilder {
    min:  Option<String>,
    max:  Option<String>,
    item: Box<TypeBuilder>
}

impl ArrayBuilder {
    pub(crate) fn new(item: TypeBuilder) -> Self {
        Self {
            min:  None,
            max:  None,
            item: Box::new(item)
        }
    }

    pub(crate) fn set_tag(&mut self, tag: &Tag) -> Result<(), ConfigError> {
        match tag.key() {
            TagKey::MinItems => set_once(&mut self.min, tag),
            TagKey::MaxItems => set_once(&mut self.max, tag),
            TagKey::Item => forward_scope(&mut self.item, tag),
            _ => Err(unrecognized(tag, "array"))
        }
    }

    pub(crate) fn validate(self) -> Result<ArrayDef, ConfigError> {
        let min = parse_slot(TagKey::MinItems, self.min, Bound::<usize>::count)?;
        let max = parse_slot(TagKey::MaxItems, self.max, Bound::<usize>::count)?;
        ordered((TagKey::MinItems, &min), (TagKey::MaxItems, &max))?;
        let item = self
            .item
            .validate()
            .map_err(|err| ConfigError::nested(TagKey::Item, err))?;
        Ok(ArrayDef {
            min,
            max,
            item: Box::new(item)
        })
    }
}

/// Validated collection node.
#[derive(Debug, Clone)]
pub struct ArrayDef {
    min:  Option<Bound<usize>>,
    max:  Option<Bound<usize>>,
    item: Box<TypeDef>
}

impl ArrayDef {
    /// Element node.
    pub fn item(&self) -> &TypeDef {
        &self.item
    }

    pub(crate) fn generate(
        &self,
        out: &mut TokenStream,
        cfg: &mut GenConfig,
        name: &NameContext<'_>
    ) {
        size_guards(out, cfg, name, self.min.as_ref(), self.max.as_ref());

        let (binding, item) = name.item();
        let mut checks = TokenStream::new();
        self.item.generate(&mut checks, cfg, &item);
        if checks.is_empty() {
            return;
        }
        let value = name.full();
        out.extend(quote! {
            for #binding in (#value).iter() {
                #checks
            }
        });
    }
}
