// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Raw tag slots and bound parsing shared by the type handlers.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::{
    error::ConfigError,
    tag::{Tag, TagKey}
};

/// Store the parameter of `tag` in an empty slot.
pub(crate) fn set_once(slot: &mut Option<String>, tag: &Tag) -> Result<(), ConfigError> {
    if slot.is_some() {
        return Err(ConfigError::DuplicateTag {
            key: tag.key()
        });
    }
    *slot = Some(tag.expect_param()?.to_string());
    Ok(())
}

/// Raise a flag that has not been raised yet.
pub(crate) fn set_flag(flag: &mut bool, tag: &Tag) -> Result<(), ConfigError> {
    tag.expect_flag()?;
    if *flag {
        return Err(ConfigError::DuplicateTag {
            key: tag.key()
        });
    }
    *flag = true;
    Ok(())
}

/// A bound as written plus its parsed value.
///
/// The text is kept for error messages, so `-4.22` is echoed verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound<T> {
    /// Parameter text from the annotation.
    pub text:  String,
    /// Parsed value.
    pub value: T
}

impl Bound<usize> {
    /// Parse a collection-size or string-length bound.
    pub(crate) fn count(key: TagKey, text: &str) -> Result<Self, ConfigError> {
        let value = text.parse::<i128>().map_err(|_| ConfigError::MalformedBound {
            key,
            value: text.to_string(),
            expected: "non-negative integer"
        })?;
        if value < 0 {
            return Err(ConfigError::NegativeBound {
                key,
                value: text.to_string()
            });
        }
        let value = usize::try_from(value).map_err(|_| ConfigError::MalformedBound {
            key,
            value: text.to_string(),
            expected: "size"
        })?;
        Ok(Self {
            text: text.to_string(),
            value
        })
    }

    pub(crate) fn literal(&self) -> TokenStream {
        let value = Literal::usize_unsuffixed(self.value);
        quote!(#value)
    }
}

impl Bound<i128> {
    /// Parse an integer range bound.
    ///
    /// Exponent and fractional forms are accepted when they denote a whole
    /// number (`1e3`, `10.0`).
    pub(crate) fn integer(key: TagKey, text: &str) -> Result<Self, ConfigError> {
        let malformed = || ConfigError::MalformedBound {
            key,
            value: text.to_string(),
            expected: "integer"
        };
        let value = match text.parse::<i128>() {
            Ok(value) => value,
            Err(_) => {
                let float = text.parse::<f64>().map_err(|_| malformed())?;
                if !float.is_finite() || float.fract() != 0.0 || float.abs() >= i128::MAX as f64 {
                    return Err(malformed());
                }
                float as i128
            }
        };
        Ok(Self {
            text: text.to_string(),
            value
        })
    }

    pub(crate) fn literal(&self) -> TokenStream {
        let magnitude = Literal::u128_unsuffixed(self.value.unsigned_abs());
        if self.value < 0 {
            quote!(-#magnitude)
        } else {
            quote!(#magnitude)
        }
    }
}

impl Bound<f64> {
    /// Parse a floating-point range bound.
    pub(crate) fn float(key: TagKey, text: &str) -> Result<Self, ConfigError> {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self {
                text: text.to_string(),
                value
            }),
            _ => Err(ConfigError::MalformedBound {
                key,
                value: text.to_string(),
                expected: "number"
            })
        }
    }

    pub(crate) fn literal(&self) -> TokenStream {
        let magnitude = Literal::f64_unsuffixed(self.value.abs());
        if self.value.is_sign_negative() && self.value != 0.0 {
            quote!(-#magnitude)
        } else {
            quote!(#magnitude)
        }
    }
}

/// Parse an optional slot with `parse`.
pub(crate) fn parse_slot<T>(
    key: TagKey,
    slot: Option<String>,
    parse: fn(TagKey, &str) -> Result<Bound<T>, ConfigError>
) -> Result<Option<Bound<T>>, ConfigError> {
    slot.map(|text| parse(key, &text)).transpose()
}

/// Reject a lower bound above the upper bound.
pub(crate) fn ordered<T: PartialOrd>(
    (min_key, min): (TagKey, &Option<Bound<T>>),
    (max_key, max): (TagKey, &Option<Bound<T>>)
) -> Result<(), ConfigError> {
    match (min, max) {
        (Some(min), Some(max)) if min.value > max.value => Err(ConfigError::InvertedBounds {
            min_key,
            min: min.text.clone(),
            max_key,
            max: max.text.clone()
        }),
        _ => Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_param() {
        let mut slot = None;
        let tag = Tag::param(TagKey::Min, "1");
        set_once(&mut slot, &tag).unwrap();
        assert_eq!(
            set_once(&mut slot, &tag),
            Err(ConfigError::DuplicateTag {
                key: TagKey::Min
            })
        );
        assert_eq!(slot.as_deref(), Some("1"));
    }

    #[test]
    fn duplicate_flag() {
        let mut flag = false;
        let tag = Tag::flag(TagKey::Nullable);
        set_flag(&mut flag, &tag).unwrap();
        assert!(set_flag(&mut flag, &tag).is_err());
    }

    #[test]
    fn count_bounds() {
        assert_eq!(Bound::count(TagKey::MinItems, "3").unwrap().value, 3);
        assert_eq!(
            Bound::count(TagKey::MinItems, "-1"),
            Err(ConfigError::NegativeBound {
                key:   TagKey::MinItems,
                value: "-1".to_string()
            })
        );
        assert!(matches!(
            Bound::count(TagKey::MaxLen, "abc"),
            Err(ConfigError::MalformedBound { .. })
        ));
    }

    #[test]
    fn integer_bounds() {
        assert_eq!(Bound::integer(TagKey::Min, "-35").unwrap().value, -35);
        assert_eq!(Bound::integer(TagKey::Max, "1e3").unwrap().value, 1000);
        assert!(Bound::integer(TagKey::Max, "4.5").is_err());
        assert!(Bound::integer(TagKey::Max, "inf").is_err());
    }

    #[test]
    fn float_bounds() {
        let bound = Bound::float(TagKey::Min, "-4.22").unwrap();
        assert_eq!(bound.text, "-4.22");
        assert!(Bound::float(TagKey::Min, "NaN").is_err());
        assert!(Bound::float(TagKey::Min, "four").is_err());
    }

    #[test]
    fn literals_split_sign() {
        let negative = Bound::integer(TagKey::Min, "-35").unwrap();
        assert_eq!(negative.literal().to_string(), "- 35");
        let float = Bound::float(TagKey::Max, "42.55").unwrap();
        assert_eq!(float.literal().to_string(), "42.55");
    }

    #[test]
    fn inverted() {
        let min = Some(Bound::count(TagKey::MinLen, "5").unwrap());
        let max = Some(Bound::count(TagKey::MaxLen, "3").unwrap());
        assert!(matches!(
            ordered((TagKey::MinLen, &min), (TagKey::MaxLen, &max)),
            Err(ConfigError::InvertedBounds { .. })
        ));
        assert!(ordered((TagKey::MinLen, &min), (TagKey::MaxLen, &None)).is_ok());
    }
}
