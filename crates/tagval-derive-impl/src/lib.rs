// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(Validate)]
//! #[validate("func=.check_totals")]          // Struct-level validators
//! pub struct Order {
//!     #[validate("min_len=3,max_len=64")]     // String length in chars
//!     pub name: String,
//!
//!     #[validate("nullable,min=0")]           // Optional, checked when present
//!     pub discount: Option<u32>,
//!
//!     #[validate("min_items=1,item=[max_len=256]")]
//!     pub urls: Vec<String>,
//!
//!     #[validate("key=[max_len=64]")]
//!     #[validate("value=[min=-35,max=34]")]   // Repeatable
//!     pub dict: HashMap<String, i32>,
//!
//!     #[validate(skip)]                       // Not validated
//!     pub cache: Cache,
//! }
//! ```

mod validate;

use proc_macro::TokenStream;

/// Derive a `Validate` implementation from `#[validate("...")]` tags.
///
/// # Tags
///
/// | Tag | Applies to | Check |
/// |-----|------------|-------|
/// | `min=N`, `max=N` | integers, floats | value range |
/// | `min_len=N`, `max_len=N` | strings | length in `char`s |
/// | `min_items=N`, `max_items=N` | collections, maps | number of items |
/// | `nullable` | `Option<T>` | `None` is accepted |
/// | `not_null` | `Option<T>` | `None` is rejected (default) |
/// | `item=[...]` | collections | tags for every element |
/// | `key=[...]`, `value=[...]` | maps | tags for keys and values |
/// | `func=ref;ref` | any | custom validators, left to right |
///
/// A `func=` reference is either `.method`, called on the value, or a path
/// to a free function receiving the value by reference. Both return
/// `Result<(), E>` with `E: Into<ValidationError>`.
///
/// # Field Types
///
/// | Rust type | Model |
/// |-----------|-------|
/// | integers, `f32`, `f64`, `u8`, `bool` | scalar |
/// | `String`, `&str`, `Cow<str>` | string |
/// | `Option<T>` | optional |
/// | `Vec<T>`, `VecDeque<T>`, sets, arrays, slices | collection |
/// | `HashMap<K, V>`, `BTreeMap<K, V>`, `IndexMap<K, V>` | map |
/// | `Box<dyn Trait>`, `Arc<dyn Trait>`, `&dyn Trait` | custom validators only |
/// | `fn(..)`, channels, tuples, `PhantomData` | not validated |
/// | any other type | delegates to its own `Validate` |
///
/// Foreign types without a `Validate` implementation need
/// `#[validate(skip)]`.
///
/// # Containers
///
/// - Structs with named fields validate every field in declaration order,
///   then the container's `func=` validators.
/// - A tuple struct with one field is a newtype: container tags apply to
///   the wrapped value, and `.method` validators are looked up on the
///   newtype itself.
/// - Other tuple structs validate fields `0`, `1`, ….
///
/// Enums and unions are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use tagval::Validate;
///
/// #[derive(Validate)]
/// pub struct User {
///     #[validate("min_len=3,max_len=64")]
///     pub name: String,
///     #[validate("min=18,max=105")]
///     pub age: u32,
///     pub dog: Dog,
/// }
///
/// #[derive(Validate)]
/// pub struct Dog {
///     #[validate("min_len=1,max_len=64")]
///     pub name: String,
/// }
/// ```
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    validate::derive(input)
}
