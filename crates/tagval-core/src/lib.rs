// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for tagval.
//!
//! This crate provides the runtime surface used by `#[derive(Validate)]`
//! generated code. It can also be used standalone for manual
//! implementations.
//!
//! # Overview
//!
//! - [`Validate`] — Trait implemented by every generated routine
//! - [`ValidationError`] — Failure naming the offending field path
//! - [`Violation`] — The violated constraint
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `tagval` directly, which re-exports this crate.
//! For manual implementations:
//!
//! ```rust
//! use tagval_core::{Validate, ValidationError, Violation};
//!
//! struct Port(u16);
//!
//! impl Validate for Port {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         if self.0 < 1024 {
//!             return Err(ValidationError::new(
//!                 "port",
//!                 Violation::BelowMinimum { min: "1024" }
//!             ));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! assert!(Port(80).validate().is_err());
//! assert!(Port(8080).validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod prelude;

use std::{rc::Rc, sync::Arc};

pub use error::{ValidationError, Violation};

/// A value that can check its own invariants.
///
/// Generated implementations run field checks in declaration order and
/// return the first failure.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Validate)]
/// pub struct User {
///     #[validate("min_len=3,max_len=64")]
///     pub name: String,
/// }
///
/// user.validate()?;
/// ```
pub trait Validate {
    /// Run all checks, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Rc<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Arc<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even(u32);

    impl Validate for Even {
        fn validate(&self) -> Result<(), ValidationError> {
            if self.0 % 2 == 0 {
                Ok(())
            } else {
                Err(ValidationError::custom("must be even"))
            }
        }
    }

    #[test]
    fn reference_delegates() {
        let value = Even(3);
        assert!((&value).validate().is_err());
        assert!((&Even(4)).validate().is_ok());
    }

    #[test]
    fn smart_pointers_delegate() {
        assert!(Box::new(Even(2)).validate().is_ok());
        assert!(Rc::new(Even(1)).validate().is_err());
        assert!(Arc::new(Even(1)).validate().is_err());
    }

    #[test]
    fn trait_objects_delegate() {
        let boxed: Box<dyn Validate> = Box::new(Even(5));
        let err = boxed.validate().unwrap_err();
        assert_eq!(err.to_string(), "must be even");
    }
}
