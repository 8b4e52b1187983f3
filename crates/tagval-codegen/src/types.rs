// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Composable type model.
//!
//! Every field type is described by a tree of nodes, one variant per
//! handler. A tree goes through two phases:
//!
//! 1. [`TypeBuilder`]: created empty for a shape, configured by
//!    [`TypeBuilder::set_tag`] once per tag. Parameters stay raw text.
//! 2. [`TypeDef`]: produced by [`TypeBuilder::validate`], which parses every
//!    bound and validator chain. Read-only; consumed by
//!    [`TypeDef::generate`].
//!
//! # Handlers
//!
//! | Variant | Rust shape | Tags |
//! |---------|------------|------|
//! | Scalar | integers, floats, strings, `u8`, `bool` | see [`ScalarKind`] |
//! | Pointer | `Option<T>` | `nullable`, `not_null`; rest forwarded |
//! | Array | `Vec<T>`, sets, slices | `min_items`, `max_items`, `item` |
//! | Map | `HashMap<K, V>`, `BTreeMap<K, V>` | `min_items`, `max_items`, `key`, `value` |
//! | Struct | nested struct | `func` |
//! | Alias | type alias, newtype | `func`; rest forwarded |
//! | Interface | `dyn Trait`, `Box<dyn Trait>`, `&dyn Trait` | `func` |
//! | Skip | fn pointers, channels, tuples | none |
//!
//! # Example
//!
//! ```rust
//! use tagval_codegen::{GenConfig, NameContext, NameScope, ScalarKind, TypeBuilder};
//!
//! let mut urls = TypeBuilder::array(TypeBuilder::scalar(ScalarKind::String));
//! urls.apply("min_items=1,item=[max_len=256]").unwrap();
//! let urls = urls.validate().unwrap();
//!
//! let scope = NameScope::new();
//! let name = NameContext::new(&scope, quote::quote!(&self.urls), "urls");
//! let mut cfg = GenConfig::default();
//! let mut out = proc_macro2::TokenStream::new();
//! urls.generate(&mut out, &mut cfg, &name);
//!
//! assert!(out.to_string().contains("TooFewItems"));
//! ```

mod alias;
mod array;
mod bound;
mod interface;
mod map;
mod pointer;
mod scalar;
mod structure;


use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;
use tracing::trace;

pub use self::{
    alias::{AliasBuilder, AliasDef, AliasMode},
    array::{ArrayBuilder, ArrayDef},
    bound::Bound,
    interface::{InterfaceBuilder, InterfaceDef},
    map::{MapBuilder, MapDef},
    pointer::{PointerBuilder, PointerDef},
    scalar::{ScalarBuilder, ScalarDef, ScalarKind},
    structure::{Field, StructBuilder, StructDef}
};
use crate::{
    config::{GenConfig, Symbol},
    error::{ConfigError, Error},
    name::NameContext,
    tag::{Tag, parse_tags}
};

/// A type-model node being configured.
#[derive(Debug, Clone)]
pub enum TypeBuilder {
    /// Leaf value.
    Scalar(ScalarBuilder),
    /// Optional value.
    Pointer(PointerBuilder),
    /// Sequence or set.
    Array(ArrayBuilder),
    /// Key/value collection.
    Map(MapBuilder),
    /// Nested struct.
    Struct(StructBuilder),
    /// Named wrapper over another node.
    Alias(AliasBuilder),
    /// Trait object.
    Interface(InterfaceBuilder),
    /// Not validated.
    Skip
}

impl TypeBuilder {
    /// Leaf node of `kind`.
    pub const fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar(ScalarBuilder::new(kind))
    }

    /// Optional wrapping `inner`; required unless tagged `nullable`.
    pub fn pointer(inner: Self) -> Self {
        Self::Pointer(PointerBuilder::new(inner))
    }

    /// Collection of `item` elements.
    pub fn array(item: Self) -> Self {
        Self::Array(ArrayBuilder::new(item))
    }

    /// Map from `key` to `value`.
    pub fn map(key: Self, value: Self) -> Self {
        Self::Map(MapBuilder::new(key, value))
    }

    /// Struct whose fields are validated in place, in the given order.
    pub fn inline_struct(fields: Vec<Field<Self>>) -> Self {
        Self::Struct(StructBuilder::inline(fields))
    }

    /// Struct validated through its own `Validate` implementation.
    pub fn opaque_struct() -> Self {
        Self::Struct(StructBuilder::opaque())
    }

    /// Wrapper named `ty` around `inner`.
    pub fn alias(ty: Type, mode: AliasMode, inner: Self) -> Self {
        Self::Alias(AliasBuilder::new(ty, mode, inner))
    }

    /// Trait object reached as `&dyn Trait`, checked only by custom
    /// validators.
    pub fn interface() -> Self {
        Self::Interface(InterfaceBuilder::default())
    }

    /// Trait object behind `Box`, `Arc`, `Rc` or a reference.
    pub fn indirect_interface() -> Self {
        Self::Interface(InterfaceBuilder::indirect())
    }

    /// Node that accepts no tags and generates nothing.
    pub const fn skip() -> Self {
        Self::Skip
    }

    /// Name used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Scalar(scalar) => scalar.kind().describe(),
            Self::Pointer(_) => "optional",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Struct(_) => "struct",
            Self::Alias(_) => "alias",
            Self::Interface(_) => "interface",
            Self::Skip => "skipped type"
        }
    }

    /// Configure this node with one tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnrecognizedTag`] when the key means nothing
    /// for this node, [`ConfigError::DuplicateTag`] when a simple tag is
    /// repeated, and [`ConfigError::Nested`] when a scope's inner tag fails.
    pub fn set_tag(&mut self, tag: &Tag) -> Result<(), ConfigError> {
        trace!(tag = %tag, target = self.describe(), "applying tag");
        match self {
            Self::Scalar(scalar) => scalar.set_tag(tag),
            Self::Pointer(pointer) => pointer.set_tag(tag),
            Self::Array(array) => array.set_tag(tag),
            Self::Map(map) => map.set_tag(tag),
            Self::Struct(structure) => structure.set_tag(tag),
            Self::Alias(alias) => alias.set_tag(tag),
            Self::Interface(interface) => interface.set_tag(tag),
            Self::Skip => Err(unrecognized(tag, "skipped type"))
        }
    }

    /// Parse `annotation` and apply every tag in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed text and [`Error::Config`] for
    /// the first tag this node rejects.
    pub fn apply(&mut self, annotation: &str) -> Result<(), Error> {
        for tag in parse_tags(annotation)? {
            self.set_tag(&tag)?;
        }
        Ok(())
    }

    /// Parse bounds and validator chains, freezing the tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking a node's own bounds
    /// before its children.
    pub fn validate(self) -> Result<TypeDef, ConfigError> {
        Ok(match self {
            Self::Scalar(scalar) => TypeDef::Scalar(scalar.validate()?),
            Self::Pointer(pointer) => TypeDef::Pointer(pointer.validate()?),
            Self::Array(array) => TypeDef::Array(array.validate()?),
            Self::Map(map) => TypeDef::Map(map.validate()?),
            Self::Struct(structure) => TypeDef::Struct(structure.validate()?),
            Self::Alias(alias) => TypeDef::Alias(alias.validate()?),
            Self::Interface(interface) => TypeDef::Interface(interface.validate()?),
            Self::Skip => TypeDef::Skip
        })
    }
}

/// A validated type-model node.
#[derive(Debug, Clone)]
pub enum TypeDef {
    /// Leaf value.
    Scalar(ScalarDef),
    /// Optional value.
    Pointer(PointerDef),
    /// Sequence or set.
    Array(ArrayDef),
    /// Key/value collection.
    Map(MapDef),
    /// Nested struct.
    Struct(StructDef),
    /// Named wrapper over another node.
    Alias(AliasDef),
    /// Trait object.
    Interface(InterfaceDef),
    /// Not validated.
    Skip
}

impl TypeDef {
    /// Append the checks for the value described by `name` to `out`.
    ///
    /// Runtime symbols used by the emitted code are recorded in `cfg`.
    /// Nothing is appended when the node has no checks.
    pub fn generate(&self, out: &mut TokenStream, cfg: &mut GenConfig, name: &NameContext<'_>) {
        trace!(field = name.field_name(), depth = name.depth(), "generating checks");
        match self {
            Self::Scalar(scalar) => scalar.generate(out, cfg, name),
            Self::Pointer(pointer) => pointer.generate(out, cfg, name),
            Self::Array(array) => array.generate(out, cfg, name),
            Self::Map(map) => map.generate(out, cfg, name),
            Self::Struct(structure) => structure.generate(out, cfg, name),
            Self::Alias(alias) => alias.generate(out, cfg, name),
            Self::Interface(interface) => interface.generate(out, cfg, name),
            Self::Skip => {}
        }
    }
}

pub(crate) fn unrecognized(tag: &Tag, target: &'static str) -> ConfigError {
    ConfigError::UnrecognizedTag {
        tag: tag.to_string(),
        target
    }
}

/// `return Err(ValidationError::new(field, Violation::..))`.
pub(crate) fn fail(cfg: &mut GenConfig, field: &str, violation: TokenStream) -> TokenStream {
    cfg.require(Symbol::ValidationError);
    cfg.require(Symbol::Violation);
    quote! {
        return ::core::result::Result::Err(ValidationError::new(#field, Violation::#violation));
    }
}

/// Apply every tag of a scope to `inner`, wrapping failures.
pub(crate) fn forward_scope(inner: &mut TypeBuilder, tag: &Tag) -> Result<(), ConfigError> {
    let scope = tag.key();
    for nested in tag.expect_scope()? {
        inner
            .set_tag(nested)
            .map_err(|err| ConfigError::nested(scope, err))?;
    }
    Ok(())
}

/// Length guards shared by arrays and maps.
pub(crate) fn size_guards(
    out: &mut TokenStream,
    cfg: &mut GenConfig,
    name: &NameContext<'_>,
    min: Option<&Bound<usize>>,
    max: Option<&Bound<usize>>
) {
    let value = name.full();
    let field = name.field_name();
    if let Some(min) = min.filter(|min| min.value > 0) {
        let limit = min.literal();
        let fail = fail(cfg, field, quote!(TooFewItems { min: #limit }));
        out.extend(quote! { if (#value).len() < #limit { #fail } });
    }
    if let Some(max) = max {
        let limit = max.literal();
        let fail = fail(cfg, field, quote!(TooManyItems { max: #limit }));
        out.extend(quote! { if (#value).len() > #limit { #fail } });
    }
}
