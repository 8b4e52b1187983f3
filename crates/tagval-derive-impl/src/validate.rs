// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validate derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! validate.rs (orchestrator)
//! │
//! ├── parse.rs    → #[validate("...")] / #[validate(skip)] arguments
//! └── resolve.rs  → Rust type → TypeBuilder
//!
//! tagval-codegen
//! ├── TypeBuilder::apply     → tags onto each field's node
//! ├── TypeBuilder::validate  → bounds and validator chains checked
//! └── Generator              → impl Validate
//! ```
//!
//! Each field is resolved and tagged independently, so one derive reports
//! every malformed field at once. Bound and chain problems found while
//! freezing the tree are reported on the field they belong to.

mod parse;
mod resolve;

use darling::{
    FromDeriveInput, FromField,
    ast::{Data, Style},
    util::Ignored
};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use syn::{
    Attribute, DeriveInput, Generics, Ident, Index, LitStr, Member, Type, ext::IdentExt,
    parse_macro_input, parse_quote, spanned::Spanned
};
use tagval_codegen::{AliasMode, ConfigError, Field, Generator, TypeBuilder, TypeDef};

use self::{parse::Annotations, resolve::resolve};

/// Struct-level input.
#[derive(Debug, FromDeriveInput)]
#[darling(forward_attrs(validate), supports(struct_any))]
struct ValidateInput {
    ident:    Ident,
    generics: Generics,
    data:     Data<Ignored, ValidateField>,
    attrs:    Vec<Attribute>
}

/// Field-level input.
#[derive(Debug, FromField)]
#[darling(forward_attrs(validate))]
struct ValidateField {
    ident: Option<Ident>,
    ty:    Type,
    attrs: Vec<Attribute>
}

/// Where a field's diagnostics point.
struct Located {
    name: String,
    span: Span
}

/// Main entry point for the Validate derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let input = ValidateInput::from_derive_input(input)?;
    let def = build(&input)?;
    Ok(Generator::default().generate_impl(&input.ident, &input.generics, &def))
}

/// Resolve, tag and freeze the whole struct.
fn build(input: &ValidateInput) -> darling::Result<TypeDef> {
    let fields = input.data.as_ref().take_struct().ok_or_else(|| {
        darling::Error::custom("Validate can only be derived for structs").with_span(&input.ident)
    })?;

    let mut errors = darling::Error::accumulator();
    let container = errors.handle(container_annotations(&input.attrs));

    let mut prepared = Vec::with_capacity(fields.len());
    let mut located = Vec::with_capacity(fields.len());
    for (index, field) in fields.iter().enumerate() {
        if let Some((field, location)) = errors.handle(prepare(index, field)) {
            prepared.push(field);
            located.push(location);
        }
    }
    errors.finish()?;

    let container = container.unwrap_or_default();
    let newtype = fields.style == Style::Tuple && fields.len() == 1;
    let mut builder = if newtype {
        let inner = prepared
            .pop()
            .map_or_else(TypeBuilder::skip, |field| field.ty);
        TypeBuilder::alias(parse_quote!(Self), AliasMode::Newtype, inner)
    } else {
        TypeBuilder::inline_struct(prepared)
    };
    apply(&mut builder, &container.tags, None)?;

    builder.validate().map_err(|err| {
        let fallback = if newtype {
            located.first().map(|location| location.span)
        } else {
            container.tags.first().map(LitStr::span)
        };
        let span = match &err {
            ConfigError::Field { field, .. } => located
                .iter()
                .find(|location| &location.name == field)
                .map(|location| location.span),
            _ => fallback
        };
        syn::Error::new(span.unwrap_or_else(|| input.ident.span()), err).into()
    })
}

fn container_annotations(attrs: &[Attribute]) -> darling::Result<Annotations> {
    let annotations = Annotations::from_attrs(attrs)?;
    match annotations.skip.first() {
        Some(skip) => {
            Err(darling::Error::custom("`skip` applies to fields only").with_span(skip))
        }
        None => Ok(annotations)
    }
}

/// Resolve one field's type and apply its tags.
fn prepare(index: usize, field: &ValidateField) -> darling::Result<(Field<TypeBuilder>, Located)> {
    let (member, name) = match &field.ident {
        Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
        None => (Member::Unnamed(Index::from(index)), index.to_string())
    };
    let annotations = Annotations::from_attrs(&field.attrs)?;
    let span = annotations
        .tags
        .first()
        .map_or_else(|| field.ty.span(), LitStr::span);

    let builder = if annotations.is_skipped()? {
        TypeBuilder::skip()
    } else {
        let mut builder = resolve(&field.ty);
        apply(&mut builder, &annotations.tags, Some(&name))?;
        builder
    };

    Ok((Field::new(member, name.clone(), builder), Located {
        name,
        span
    }))
}

fn apply(builder: &mut TypeBuilder, tags: &[LitStr], field: Option<&str>) -> darling::Result<()> {
    for lit in tags {
        builder.apply(&lit.value()).map_err(|err| {
            let message = match field {
                Some(field) => format!("field `{field}`: {err}"),
                None => err.to_string()
            };
            darling::Error::custom(message).with_span(lit)
        })?;
    }
    Ok(())
}
