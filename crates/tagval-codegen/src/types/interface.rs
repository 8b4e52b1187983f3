// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Trait objects. Only custom validators can inspect them.
//!
//! A trait object stored behind `Box`, `Arc`, `Rc` or a reference is
//! dereferenced first, so free functions receive `&dyn Trait` rather than
//! `&Box<dyn Trait>`.

use proc_macro2::TokenStream;

use super::{bound::set_once, unrecognized};
use crate::{
    config::GenConfig,
    error::ConfigError,
    func::{Receiver, ValidatorChain},
    name::NameContext,
    tag::{Tag, TagKey}
};

/// Trait-object node being configured.
#[derive(Debug, Clone, Default)]
pub struct InterfaceBuilder {
    func:     Option<String>,
    indirect: bool
}

impl InterfaceBuilder {
    /// Node for a trait object reached through one pointer.
    pub(crate) fn indirect() -> Self {
        Self {
            func:     None,
            indirect: true
        }
    }

    pub(crate) fn set_tag(&mut self, tag: &Tag) -> Result<(), ConfigError> {
        match tag.key() {
            TagKey::Func => set_once(&mut self.func, tag),
            _ => Err(unrecognized(tag, "interface"))
        }
    }

    pub(crate) fn validate(self) -> Result<InterfaceDef, ConfigError> {
        let funcs = ValidatorChain::parse_slot(self.func.as_deref())?;
        Ok(InterfaceDef {
            funcs,
            indirect: self.indirect
        })
    }
}

/// Validated trait-object node.
#[derive(Debug, Clone)]
pub struct InterfaceDef {
    funcs:    ValidatorChain,
    indirect: bool
}

impl InterfaceDef {
    /// Custom validators, in call order.
    pub fn funcs(&self) -> &ValidatorChain {
        &self.funcs
    }

    /// Whether the trait object sits behind a pointer.
    pub const fn is_indirect(&self) -> bool {
        self.indirect
    }

    pub(crate) fn generate(
        &self,
        out: &mut TokenStream,
        cfg: &mut GenConfig,
        name: &NameContext<'_>
    ) {
        if self.indirect {
            self.funcs.generate(out, cfg, &name.pointee(), Receiver::Value);
        } else {
            self.funcs.generate(out, cfg, name, Receiver::Value);
        }
    }
}
