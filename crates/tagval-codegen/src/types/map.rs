// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Key/value collections.
//!
//! Keys are checked before values within each entry, and key configuration
//! errors are reported before value configuration errors.

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

/// Map node being configured.
#[derive(Debug, Clone)]
pub struct MapBuilder {
    min:   Option<String>,
    max:   Option<String>,
    key:   Box<TypeBuilder>,
    value: Box<TypeBuilder>
}

impl MapBuilder {
    pub(crate) fn new(key: TypeBuilder, value: TypeBuilder) -> Self {
        Self {
            min:   None,
            max:   None,
            key:   Box::new(key),
            value: Box::new(value)
        }
    }

    pub(crate) fn set_tag(&mut self, tag: &Tag) -> Result<(), ConfigError> {
        match tag.key() {
            TagKey::MinItems => set_once(&mut self.min, tag),
            TagKey::MaxItems => set_once(&mut self.max, tag),
            TagKey::Key => forward_scope(&mut self.key, tag),
            TagKey::Value => forward_scope(&mut self.value, tag),
            _ => Err(unrecognized(tag, "map"))
        }
    }

    pub(crate) fn validate(self) -> Result<MapDef, ConfigError> {
        let min = parse_slot(TagKey::MinItems, self.min, Bound::<usize>::count)?;
        let max = parse_slot(TagKey::MaxItems, self.max, Bound::<usize>::count)?;
        ordered((TagKey::MinItems, &min), (TagKey::MaxItems, &max))?;
        let key = self
            .key
            .validate()
            .map_err(|err| ConfigError::nested(TagKey::Key, err))?;
        let value = self
            .value
            .validate()
            .map_err(|err| ConfigError::nested(TagKey::Value, err))?;
        Ok(MapDef {
            min,
            max,
            key: Box::new(key),
            value: Box::new(value)
        })
    }
}

/// Validated map node.
#[derive(Debug, Clone)]
pub struct MapDef {
    min:   Option<Bound<usize>>,
    max:   Option<Bound<usize>>,
    key:   Box<TypeDef>,
    value: Box<TypeDef>
}

impl MapDef {
    /// Key node.
    pub fn key(&self) -> &TypeDef {
        &self.key
    }

    /// Value node.
    pub fn value(&self) -> &TypeDef {
        &self.value
    }

    pub(crate) fn generate(
        &self,
        out: &mut TokenStream,
        cfg: &mut GenConfig,
        name: &NameContext<'_>
    ) {
        size_guards(out, cfg, name, self.min.as_ref(), self.max.as_ref());

        let (key_binding, key) = name.map_key();
        let (value_binding, value) = name.map_value();
        let mut key_checks = TokenStream::new();
        let mut value_checks = TokenStream::new();
        self.key.generate(&mut key_checks, cfg, &key);
        self.value.generate(&mut value_checks, cfg, &value);
        if key_checks.is_empty() && value_checks.is_empty() {
            return;
        }

        let key_pattern = if key_checks.is_empty() {
            quote!(_)
        } else {
            quote!(#key_binding)
        };
        let value_pattern = if value_checks.is_empty() {
            quote!(_)
        } else {
            quote!(#value_binding)
        };
        let map = name.full();
        out.extend(quote! {
            for (#key_pattern, #value_pattern) in (#map).iter() {
                #key_checks
                #value_checks
            }
        });
    }
}
