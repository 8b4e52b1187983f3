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

//! # Architecture
//!
//! ```text
//! lib.rs
//! │
//! ├── tag.rs      → Annotation grammar (Tag, TagKey, parse_tags)
//! ├── types/      → Type model (TypeBuilder → TypeDef)
//! │   ├── scalar.rs     → Integer, Float, String, Byte, Bool
//! │   ├── pointer.rs    → Option<T>
//! │   ├── array.rs      → Vec<T>, sets, slices
//! │   ├── map.rs        → HashMap<K, V>, BTreeMap<K, V>
//! │   ├── structure.rs  → Inline and opaque structs
//! │   ├── alias.rs      → Type aliases and newtypes
//! │   └── interface.rs  → dyn Trait
//! ├── func.rs     → func= validator chains
//! ├── name.rs     → Value expressions and binding names
//! ├── config.rs   → Runtime symbol accumulation
//! ├── emit.rs     → impl Validate assembly
//! └── error.rs    → ParseError, ConfigError
//! ```

mod config;
mod emit;
mod error;
mod func;
mod name;
mod tag;
mod types;

pub use config::{GenConfig, Symbol};
pub use emit::Generator;
pub use error::{ConfigError, Error, ParseError, ParseErrorKind};
pub use func::{Receiver, ValidatorChain, ValidatorRef};
pub use name::{NameContext, NameScope};
pub use tag::{MAX_DEPTH, Tag, TagKey, TagShape, parse_tags};
pub use types::{
    AliasBuilder, AliasDef, AliasMode, ArrayBuilder, ArrayDef, Bound, Field, InterfaceBuilder,
    InterfaceDef, MapBuilder, MapDef, PointerBuilder, PointerDef, ScalarBuilder, ScalarDef,
    ScalarKind, StructBuilder, StructDef, TypeBuilder, TypeDef
};
