// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structs, either walked field by field or delegated to their own
//! `Validate` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Member;

use super::{TypeBuilder, TypeDef, bound::set_once, unrecognized};
use crate::{
    config::{GenConfig, Symbol},
    error::ConfigError,
    func::{Receiver, ValidatorChain},
    name::NameContext,
    tag::{Tag, TagKey}
};

/// A named struct member and its node.
#[derive(Debug, Clone)]
pub struct Field<T> {
    /// Member used to reach the field (`name` or `0`).
    pub member: Member,
    /// Name used in error messages.
    pub name:   String,
    /// The field's node.
    pub ty:     T
}

impl Field<TypeBuilder> {
    /// Field reached through `member`, reported as `name`.
    pub fn new(member: Member, name: impl Into<String>, ty: TypeBuilder) -> Self {
        Self {
            member,
            name: name.into(),
            ty
        }
    }
}

#[derive(Debug, Clone)]
enum Shape<T> {
    Inline(Vec<Field<T>>),
    Opaque
}

/// Struct node being configured.
#[derive(Debug, Clone)]
pub struct StructBuilder {
    shape: Shape<TypeBuilder>,
    func:  Option<String>
}

impl StructBuilder {
    pub(crate) const fn inline(fields: Vec<Field<TypeBuilder>>) -> Self {
        Self {
            shape: Shape::Inline(fields),
            func:  None
        }
    }

    pub(crate) const fn opaque() -> Self {
        Self {
            shape: Shape::Opaque,
            func:  None
        }
    }

    /// Mutable access to an inline field by its reported name.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut TypeBuilder> {
        match &mut self.shape {
            Shape::Inline(fields) => fields
                .iter_mut()
                .find(|field| field.name == name)
                .map(|field| &mut field.ty),
            Shape::Opaque => None
        }
    }

    pub(crate) fn set_tag(&mut self, tag: &Tag) -> Result<(), ConfigError> {
        match tag.key() {
            TagKey::Func => set_once(&mut self.func, tag),
            _ => Err(unrecognized(tag, "struct"))
        }
    }

    pub(crate) fn validate(self) -> Result<StructDef, ConfigError> {
        let shape = match self.shape {
            Shape::Inline(fields) => Shape::Inline(
                fields
                    .into_iter()
                    .map(|field| {
                        let ty = field
                            .ty
                            .validate()
                            .map_err(|err| ConfigError::field(field.name.clone(), err))?;
                        Ok(Field {
                            member: field.member,
                            name: field.name,
                            ty
                        })
                    })
                    .collect::<Result<Vec<_>, ConfigError>>()?
            ),
            Shape::Opaque => Shape::Opaque
        };
        let funcs = ValidatorChain::parse_slot(self.func.as_deref())?;
        Ok(StructDef {
            shape,
            funcs
        })
    }
}

/// Validated struct node.
#[derive(Debug, Clone)]
pub struct StructDef {
    shape: Shape<TypeDef>,
    funcs: ValidatorChain
}

impl StructDef {
    /// Fields in declaration order; empty for an opaque struct.
    pub fn fields(&self) -> &[Field<TypeDef>] {
        match &self.shape {
            Shape::Inline(fields) => fields,
            Shape::Opaque => &[]
        }
    }

    /// Whether checks are delegated to the type's own implementation.
    pub const fn is_opaque(&self) -> bool {
        matches!(self.shape, Shape::Opaque)
    }

    pub(crate) fn generate(
        &self,
        out: &mut TokenStream,
        cfg: &mut GenConfig,
        name: &NameContext<'_>
    ) {
        match &self.shape {
            Shape::Inline(fields) => {
                for field in fields {
                    field
                        .ty
                        .generate(out, cfg, &name.member(&field.member, &field.name));
                }
            }
            Shape::Opaque => {
                cfg.require(Symbol::Validate);
                let value = name.full();
                let field = name.field_name();
                out.extend(quote! {
                    if let ::core::result::Result::Err(err) = Validate::validate(#value) {
                        return ::core::result::Result::Err(err.at(#field));
                    }
                });
            }
        }
        self.funcs.generate(out, cfg, name, Receiver::Value);
    }
}
