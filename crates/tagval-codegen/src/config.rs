// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-pass generation state.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

/// Runtime item that generated code refers to by its short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// The `Validate` trait, for delegating to nested types.
    Validate,
    /// The `ValidationError` type, for converting custom validator errors.
    ValidationError,
    /// The `Violation` enum, for built-in checks.
    Violation
}

impl Symbol {
    /// Item name inside the runtime crate.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validate => "Validate",
            Self::ValidationError => "ValidationError",
            Self::Violation => "Violation"
        }
    }
}

/// Accumulator for one generated routine.
///
/// Type handlers call [`GenConfig::require`] for every runtime symbol they
/// emit; [`GenConfig::imports`] then renders a single `use` covering exactly
/// those symbols.
#[derive(Debug, Clone)]
pub struct GenConfig {
    runtime: Path,
    symbols: BTreeSet<Symbol>
}

impl GenConfig {
    /// Create an empty accumulator for code referring to `runtime`.
    pub fn new(runtime: Path) -> Self {
        Self {
            runtime,
            symbols: BTreeSet::new()
        }
    }

    /// Path of the runtime crate, `::tagval` by default.
    pub fn runtime(&self) -> &Path {
        &self.runtime
    }

    /// Record that generated code uses `symbol`.
    pub fn require(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol);
    }

    /// Symbols recorded so far, in a stable order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// `use` declaration for the recorded symbols, empty when none are.
    pub fn imports(&self) -> TokenStream {
        if self.symbols.is_empty() {
            return TokenStream::new();
        }
        let runtime = &self.runtime;
        let names = self
            .symbols
            .iter()
            .map(|symbol| syn::Ident::new(symbol.as_str(), proc_macro2::Span::call_site()));
        quote! { use #runtime::{#(#names),*}; }
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self::new(syn::parse_quote!(::tagval))
    }
}
