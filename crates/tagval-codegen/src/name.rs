// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Value expressions and binding names for generated code.
//!
//! A [`NameContext`] answers two questions while the type model is walked:
//! which expression reaches the value being checked, and which field name
//! goes into its error messages. The expression is always of reference type
//! (`&T`), so every handler can call methods, take lengths or dereference
//! without knowing how the value was reached.
//!
//! Bindings introduced by loops and optional unwrapping are minted by a
//! [`NameScope`] shared by one generated routine. They carry a `__tagval_`
//! prefix so they never shadow a validator path such as `item=[func=x]`:
//!
//! ```text
//! for __tagval_item in (&(self).urls).iter() { .. }
//! for (__tagval_key, __tagval_value) in (&(self).dict).iter() {
//!     for __tagval_item1 in (__tagval_value).iter() { .. }
//! }
//! ```

use std::{cell::RefCell, collections::BTreeMap};

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Ident, Member};

/// Binding prefix for collection elements.
const ITEM: &str = "__tagval_item";
/// Binding prefix for map keys.
const KEY: &str = "__tagval_key";
/// Binding prefix for map values.
const VALUE: &str = "__tagval_value";
/// Binding prefix for unwrapped optionals.
const PRESENT: &str = "__tagval_present";

/// Per-routine registry of minted binding names.
///
/// The first binding with a prefix gets the bare prefix, later ones a
/// counter suffix (`__tagval_item1`, `__tagval_item2`, …), so no two
/// bindings in one routine share a name, siblings included.
#[derive(Debug, Default)]
pub struct NameScope {
    minted: RefCell<BTreeMap<&'static str, usize>>
}

impl NameScope {
    /// Create an empty scope for one routine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next unused identifier for `prefix`.
    pub fn mint(&self, prefix: &'static str) -> Ident {
        let mut minted = self.minted.borrow_mut();
        let count = minted.entry(prefix).or_insert(0);
        let ident = if *count == 0 {
            Ident::new(prefix, Span::call_site())
        } else {
            format_ident!("{}{}", prefix, *count)
        };
        *count += 1;
        ident
    }
}

/// Where the current value lives in generated code.
#[derive(Debug, Clone)]
pub struct NameContext<'s> {
    expr:  TokenStream,
    field: String,
    depth: usize,
    scope: &'s NameScope
}

impl<'s> NameContext<'s> {
    /// Context for the receiver of a generated `fn validate(&self)`.
    pub fn root(scope: &'s NameScope) -> Self {
        Self::new(scope, quote!(self), "")
    }

    /// Context for an arbitrary reference expression.
    ///
    /// `expr` must evaluate to `&T`.
    pub fn new(scope: &'s NameScope, expr: TokenStream, field: impl Into<String>) -> Self {
        Self {
            expr,
            field: field.into(),
            depth: 0,
            scope
        }
    }

    /// Expression reaching the current value, of type `&T`.
    pub fn full(&self) -> &TokenStream {
        &self.expr
    }

    /// Field path used in error messages.
    pub fn field_name(&self) -> &str {
        &self.field
    }

    /// Number of bindings between the root and this value.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for a struct member.
    pub fn member(&self, member: &Member, field: &str) -> Self {
        let base = &self.expr;
        Self {
            expr:  quote!(&(#base).#member),
            field: join(&self.field, field),
            depth: self.depth,
            scope: self.scope
        }
    }

    /// Context for the wrapped value of a single-field tuple struct.
    pub fn newtype(&self) -> Self {
        self.member(&Member::from(0), "")
    }

    /// Context for the value behind a pointer: `&**expr`.
    ///
    /// Turns `&Box<dyn Trait>` or `&&dyn Trait` into `&dyn Trait`.
    pub fn pointee(&self) -> Self {
        let base = &self.expr;
        Self {
            expr:  quote!(&**(#base)),
            field: self.field.clone(),
            depth: self.depth,
            scope: self.scope
        }
    }

    /// Binding and context for one collection element.
    pub fn item(&self) -> (Ident, Self) {
        self.bind(ITEM, format!("{}[]", self.field))
    }

    /// Binding and context for a map key.
    pub fn map_key(&self) -> (Ident, Self) {
        self.bind(KEY, format!("{}[key]", self.field))
    }

    /// Binding and context for a map value.
    pub fn map_value(&self) -> (Ident, Self) {
        self.bind(VALUE, format!("{}[value]", self.field))
    }

    /// Binding and context for the value inside a present optional.
    pub fn present(&self) -> (Ident, Self) {
        self.bind(PRESENT, self.field.clone())
    }

    fn bind(&self, prefix: &'static str, field: String) -> (Ident, Self) {
        let ident = self.scope.mint(prefix);
        let name = Self {
            expr: quote!(#ident),
            field,
            depth: self.depth + 1,
            scope: self.scope
        };
        (ident, name)
    }
}

fn join(parent: &str, field: &str) -> String {
    match (parent.is_empty(), field.is_empty()) {
        (true, _) => field.to_string(),
        (_, true) => parent.to_string(),
        _ => format!("{}.{}", parent, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_suffixes_per_prefix() {
        let scope = NameScope::new();
        assert_eq!(scope.mint("x").to_string(), "x");
        assert_eq!(scope.mint("x").to_string(), "x1");
        assert_eq!(scope.mint("k").to_string(), "k");
        assert_eq!(scope.mint("x").to_string(), "x2");
    }

    #[test]
    fn root_is_self() {
        let scope = NameScope::new();
        let root = NameContext::root(&scope);
        assert_eq!(root.full().to_string(), "self");
        assert_eq!(root.field_name(), "");
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn member_builds_reference_path() {
        let scope = NameScope::new();
        let root = NameContext::root(&scope);
        let member: Member = syn::parse_quote!(dog);
        let dog = root.member(&member, "dog");
        let name: Member = syn::parse_quote!(name);
        let dog_name = dog.member(&name, "name");

        assert_eq!(dog.full().to_string(), "& (self) . dog");
        assert_eq!(dog_name.field_name(), "dog.name");
        assert!(dog_name.full().to_string().contains(". name"));
    }

    #[test]
    fn newtype_keeps_field_name() {
        let scope = NameScope::new();
        let tags = NameContext::new(&scope, quote!(&(self).tags), "tags");
        let inner = tags.newtype();
        assert_eq!(inner.field_name(), "tags");
        assert!(inner.full().to_string().ends_with(". 0"));
    }

    #[test]
    fn sibling_loops_get_distinct_names() {
        let scope = NameScope::new();
        let root = NameContext::root(&scope);
        let first: Member = syn::parse_quote!(urls);
        let second: Member = syn::parse_quote!(tags);

        let (x, _) = root.member(&first, "urls").item();
        let (x1, _) = root.member(&second, "tags").item();
        assert_eq!(x.to_string(), "__tagval_item");
        assert_eq!(x1.to_string(), "__tagval_item1");
    }

    #[test]
    fn bindings_deepen_and_name_fields() {
        let scope = NameScope::new();
        let dict = NameContext::new(&scope, quote!(&(self).dict), "dict");
        let (k, key) = dict.map_key();
        let (v, value) = dict.map_value();
        let (x, item) = value.item();

        assert_eq!((k.to_string(), v.to_string(), x.to_string()), (
            "__tagval_key".to_string(),
            "__tagval_value".to_string(),
            "__tagval_item".to_string()
        ));
        assert_eq!(key.field_name(), "dict[key]");
        assert_eq!(item.field_name(), "dict[value][]");
        assert_eq!(item.depth(), 2);
        assert_eq!(item.full().to_string(), "__tagval_item");
    }

    #[test]
    fn pointee_derefs_twice() {
        let scope = NameScope::new();
        let shape = NameContext::new(&scope, quote!(&(self).shape), "shape");
        let inner = shape.pointee();
        assert_eq!(inner.full().to_string(), "& * * (& (self) . shape)");
        assert_eq!(inner.field_name(), "shape");
    }

    #[test]
    fn present_keeps_field() {
        let scope = NameScope::new();
        let last = NameContext::new(&scope, quote!(&(self).last_name), "last_name");
        let (p, inner) = last.present();
        assert_eq!(p.to_string(), "__tagval_present");
        assert_eq!(inner.field_name(), "last_name");
        assert_eq!(inner.depth(), 1);
    }
}
