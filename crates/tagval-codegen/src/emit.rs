// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code emission engine.
//!
//! Walks a validated [`TypeDef`] tree top-down and assembles one
//! `Validate` implementation per unit:
//!
//! ```rust,ignore
//! impl ::tagval::Validate for User {
//!     fn validate(&self) -> ::core::result::Result<(), ::tagval::ValidationError> {
//!         use ::tagval::{ValidationError, Violation};
//!         // checks, in field declaration order
//!         ::core::result::Result::Ok(())
//!     }
//! }
//! ```
//!
//! The `use` line lists only the runtime symbols the checks refer to, and
//! is omitted when there are none.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Ident, Path};
use tracing::debug;

use crate::{
    config::GenConfig,
    name::{NameContext, NameScope},
    types::TypeDef
};

/// Produces `Validate` implementations.
#[derive(Debug, Clone)]
pub struct Generator {
    runtime: Path
}

impl Generator {
    /// Generator for code referring to the runtime crate at `runtime`.
    pub fn new(runtime: Path) -> Self {
        Self {
            runtime
        }
    }

    /// Path of the runtime crate.
    pub fn runtime(&self) -> &Path {
        &self.runtime
    }

    /// Checks for `self`, preceded by the imports they need.
    ///
    /// Runs one pass with a fresh [`GenConfig`] and [`NameScope`].
    pub fn generate_body(&self, def: &TypeDef) -> TokenStream {
        let scope = NameScope::new();
        let mut cfg = GenConfig::new(self.runtime.clone());
        let mut checks = TokenStream::new();
        def.generate(&mut checks, &mut cfg, &NameContext::root(&scope));
        let imports = cfg.imports();
        quote! {
            #imports
            #checks
        }
    }

    /// Full `impl Validate for #ident` block.
    pub fn generate_impl(&self, ident: &Ident, generics: &Generics, def: &TypeDef) -> TokenStream {
        let runtime = &self.runtime;
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        let body = self.generate_body(def);
        debug!(unit = %ident, "generated validation routine");

        quote! {
            impl #impl_generics #runtime::Validate for #ident #ty_generics #where_clause {
                fn validate(&self) -> ::core::result::Result<(), #runtime::ValidationError> {
                    #body
                    ::core::result::Result::Ok(())
                }
            }
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(syn::parse_quote!(::tagval))
    }
}
