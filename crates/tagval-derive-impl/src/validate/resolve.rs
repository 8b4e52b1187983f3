// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust type → type model mapping.
//!
//! Resolution is syntactic: the last path segment decides, so
//! `std::collections::HashMap<K, V>` and an imported `HashMap<K, V>` are
//! treated alike, and a user type named `Vec` is taken for the standard one.
//!
//! | Rust type | Node |
//! |-----------|------|
//! | `i8`..`i128`, `u16`..`u128`, `isize`, `usize` | integer |
//! | `u8` | byte |
//! | `f32`, `f64` | float |
//! | `String`, `str`, `Cow<str>` | string |
//! | `bool` | bool |
//! | `Option<T>` | pointer |
//! | `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, sets, `BinaryHeap<T>`, `[T; N]`, `[T]` | array |
//! | `HashMap<K, V>`, `BTreeMap<K, V>`, `IndexMap<K, V>` | map |
//! | `dyn Trait`, `impl Trait` | interface |
//! | `Box<dyn Trait>`, `Arc<dyn Trait>`, `Rc<dyn Trait>`, `&dyn Trait` | interface, dereferenced |
//! | `fn(..)`, tuples, `PhantomData<T>`, channel endpoints, `char`, `!`, raw pointers | skip |
//! | `&str`, `&[T]`, `&[T; N]` | as the referenced type |
//! | any other type | opaque struct |

use syn::{GenericArgument, PathArguments, PathSegment, Type};
use tagval_codegen::{ScalarKind, TypeBuilder};

const INTEGERS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u16", "u32", "u64", "u128", "usize"
];

const SEQUENCES: &[&str] = &[
    "Vec",
    "VecDeque",
    "LinkedList",
    "HashSet",
    "BTreeSet",
    "IndexSet",
    "BinaryHeap"
];

const MAPS: &[&str] = &["HashMap", "BTreeMap", "IndexMap"];

const UNVALIDATED: &[&str] = &[
    "char",
    "PhantomData",
    "PhantomPinned",
    "Sender",
    "SyncSender",
    "Receiver",
    "UnboundedSender",
    "UnboundedReceiver"
];

/// Builder for a field of type `ty`.
pub fn resolve(ty: &Type) -> TypeBuilder {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .map_or_else(TypeBuilder::opaque_struct, resolve_segment),
        Type::Path(_) => TypeBuilder::opaque_struct(),
        Type::Reference(reference) => resolve_reference(&reference.elem),
        Type::Array(array) => TypeBuilder::array(resolve(&array.elem)),
        Type::Slice(slice) => TypeBuilder::array(resolve(&slice.elem)),
        Type::Paren(paren) => resolve(&paren.elem),
        Type::Group(group) => resolve(&group.elem),
        Type::TraitObject(_) | Type::ImplTrait(_) => TypeBuilder::interface(),
        _ => TypeBuilder::skip()
    }
}

fn resolve_segment(segment: &PathSegment) -> TypeBuilder {
    let name = segment.ident.to_string();
    let args = type_args(segment);

    match (name.as_str(), args.as_slice()) {
        ("String" | "str", _) => TypeBuilder::scalar(ScalarKind::String),
        ("bool", _) => TypeBuilder::scalar(ScalarKind::Bool),
        ("u8", _) => TypeBuilder::scalar(ScalarKind::Byte),
        ("f32" | "f64", _) => TypeBuilder::scalar(ScalarKind::Float),
        (name, _) if INTEGERS.contains(&name) => TypeBuilder::scalar(ScalarKind::Integer),
        (name, _) if UNVALIDATED.contains(&name) => TypeBuilder::skip(),
        ("Option", [inner]) => TypeBuilder::pointer(resolve(inner)),
        ("Cow", [inner]) if is_str(inner) => TypeBuilder::scalar(ScalarKind::String),
        ("Box" | "Arc" | "Rc", [Type::TraitObject(_)]) => TypeBuilder::indirect_interface(),
        (name, [item, ..]) if SEQUENCES.contains(&name) => TypeBuilder::array(resolve(item)),
        (name, [key, value, ..]) if MAPS.contains(&name) => {
            TypeBuilder::map(resolve(key), resolve(value))
        }
        _ => TypeBuilder::opaque_struct()
    }
}

fn resolve_reference(elem: &Type) -> TypeBuilder {
    match elem {
        Type::Path(_) if is_str(elem) => TypeBuilder::scalar(ScalarKind::String),
        Type::Slice(_) | Type::Array(_) => resolve(elem),
        Type::TraitObject(_) => TypeBuilder::indirect_interface(),
        Type::Paren(paren) => resolve_reference(&paren.elem),
        _ => TypeBuilder::opaque_struct()
    }
}

/// Type arguments of `segment`, lifetimes and consts excluded.
fn type_args(segment: &PathSegment) -> Vec<&Type> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None
            })
            .collect(),
        _ => Vec::new()
    }
}

fn is_str(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("str"))
}
