// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # tagval
//!
//! One crate, all features. Re-exports:
//! - [`Validate`] derive macro from `tagval-derive-impl`
//! - All types from `tagval-core` ([`Validate`], [`ValidationError`],
//!   [`Violation`])
//! - The generator engine as `codegen`, with the `codegen` feature
//!
//! # Quick Start
//!
//! ```rust
//! use tagval::{Validate, Violation};
//!
//! #[derive(Validate)]
//! struct Signup {
//!     #[validate("min_len=3,max_len=32")]
//!     login: String,
//!     #[validate("min=18")]
//!     age: u32,
//! }
//!
//! let signup = Signup {
//!     login: "al".to_string(),
//!     age:   30
//! };
//! let err = signup.validate().unwrap_err();
//! assert_eq!(err.field(), "login");
//! assert_eq!(err.violation(), &Violation::TooShort { min: 3 });
//! ```

pub use tagval_core::*;
pub use tagval_derive_impl::Validate;

/// Tag grammar, type model and code emission, for embedding in other
/// generators.
#[cfg(feature = "codegen")]
#[cfg_attr(docsrs, doc(cfg(feature = "codegen")))]
pub use tagval_codegen as codegen;
