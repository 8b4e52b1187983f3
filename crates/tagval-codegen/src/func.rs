// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Custom validator chains (`func=`).
//!
//! A chain is a `;`-separated list of references:
//!
//! | Reference | Generated call |
//! |-----------|----------------|
//! | `.check` | `value.check()` |
//! | `.check` on an alias | `<Alias>::check(value)` |
//! | `path::to::check` | `path::to::check(value)` |
//!
//! Every validator returns `Result<(), E>` with `E: Into<ValidationError>`.
//! Calls run left to right; the first error is re-rooted at the field and
//! returned, so later validators never run.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Path, Type};

use crate::{
    config::{GenConfig, Symbol},
    error::ConfigError,
    name::NameContext
};

/// One entry of a `func=` chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorRef {
    /// `.name`: a method on the value.
    Method(Ident),
    /// `path::name`: a free function taking the value by reference.
    Function(Path)
}

/// How `.method` references reach the value.
#[derive(Debug, Clone, Copy)]
pub enum Receiver<'a> {
    /// Method-call syntax on the value itself.
    Value,
    /// Fully qualified call on a declared type, used by aliases.
    Type(&'a Type)
}

/// Parsed `func=` chain, in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorChain {
    refs: Vec<ValidatorRef>
}

impl ValidatorChain {
    /// Parse the parameter of a `func=` tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValidatorRef`] for an empty entry, a
    /// `.` not followed by an identifier, or text that is not a Rust path.
    pub fn parse(chain: &str) -> Result<Self, ConfigError> {
        let invalid = |reference: &str| ConfigError::InvalidValidatorRef {
            reference: reference.to_string(),
            chain:     chain.to_string()
        };
        let refs = chain
            .split(';')
            .map(str::trim)
            .map(|reference| match reference.strip_prefix('.') {
                Some(method) => syn::parse_str::<Ident>(method)
                    .map(ValidatorRef::Method)
                    .map_err(|_| invalid(reference)),
                None if reference.is_empty() => Err(invalid(reference)),
                None => syn::parse_str::<Path>(reference)
                    .map(ValidatorRef::Function)
                    .map_err(|_| invalid(reference))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            refs
        })
    }

    /// Parse an optional `func=` parameter; absent means an empty chain.
    pub(crate) fn parse_slot(chain: Option<&str>) -> Result<Self, ConfigError> {
        chain.map(Self::parse).transpose().map(Option::unwrap_or_default)
    }

    /// References in call order.
    pub fn refs(&self) -> &[ValidatorRef] {
        &self.refs
    }

    /// Whether the chain calls nothing.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Emit one fail-fast call per reference.
    pub fn generate(
        &self,
        out: &mut TokenStream,
        cfg: &mut GenConfig,
        name: &NameContext<'_>,
        receiver: Receiver<'_>
    ) {
        if self.refs.is_empty() {
            return;
        }
        cfg.require(Symbol::ValidationError);
        let value = name.full();
        let field = name.field_name();
        for reference in &self.refs {
            let call = match (reference, receiver) {
                (ValidatorRef::Method(method), Receiver::Value) => quote!((#value).#method()),
                (ValidatorRef::Method(method), Receiver::Type(ty)) => {
                    quote!(<#ty>::#method(#value))
                }
                (ValidatorRef::Function(path), _) => quote!(#path(#value))
            };
            out.extend(quote! {
                if let ::core::result::Result::Err(err) = #call {
                    return ::core::result::Result::Err(
                        ::core::convert::Into::<ValidationError>::into(err).at(#field)
                    );
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::NameScope;

    fn emit(chain: &str, receiver: Receiver<'_>) -> (String, GenConfig) {
        let scope = NameScope::new();
        let name = NameContext::new(&scope, quote!(&(self).name), "name");
        let mut cfg = GenConfig::default();
        let mut out = TokenStream::new();
        ValidatorChain::parse(chain)
            .unwrap()
            .generate(&mut out, &mut cfg, &name, receiver);
        (out.to_string(), cfg)
    }

    #[test]
    fn parse_methods_and_functions() {
        let chain = ValidatorChain::parse(".a; crate::checks::b").unwrap();
        assert_eq!(chain.refs().len(), 2);
        assert!(matches!(&chain.refs()[0], ValidatorRef::Method(ident) if ident == "a"));
        assert!(matches!(&chain.refs()[1], ValidatorRef::Function(_)));
    }

    #[test]
    fn parse_rejects_bad_references() {
        for chain in [".a;;b", ".", ".1abc", "not a path", ".a;"] {
            let err = ValidatorChain::parse(chain).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValidatorRef { .. }),
                "{chain}"
            );
        }
    }

    #[test]
    fn calls_in_order() {
        let (code, _) = emit(".a;b", Receiver::Value);
        let a = code.find(". a ()").unwrap();
        let b = code.find("b (& (self) . name)").unwrap();
        assert!(a < b);
        assert_eq!(code.matches("return").count(), 2);
    }

    #[test]
    fn errors_are_rooted_at_field() {
        let (code, cfg) = emit(".a", Receiver::Value);
        assert!(code.contains("Into :: < ValidationError > :: into (err) . at (\"name\")"));
        assert_eq!(cfg.symbols().collect::<Vec<_>>(), vec![Symbol::ValidationError]);
    }

    #[test]
    fn alias_receiver_uses_qualified_call() {
        let ty: Type = syn::parse_quote!(Tags);
        let (code, _) = emit(".validate", Receiver::Type(&ty));
        assert!(code.contains("< Tags > :: validate (& (self) . name)"));
    }

    #[test]
    fn empty_chain_emits_nothing() {
        let scope = NameScope::new();
        let name = NameContext::root(&scope);
        let mut cfg = GenConfig::default();
        let mut out = TokenStream::new();
        ValidatorChain::default().generate(&mut out, &mut cfg, &name, Receiver::Value);
        assert!(out.is_empty());
        assert!(cfg.imports().is_empty());
    }
}
