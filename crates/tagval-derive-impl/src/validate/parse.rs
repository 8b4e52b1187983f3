// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[validate(...)]` attribute arguments.
//!
//! | Form | Meaning |
//! |------|---------|
//! | `#[validate("min=1,max=5")]` | Tags, applied in order |
//! | `#[validate(skip)]` | Field is not validated |
//!
//! The attribute is repeatable; tags from every occurrence are applied to
//! the same node in source order.

use syn::{
    Attribute, LitStr,
    parse::{Parse, ParseStream}
};

mod kw {
    syn::custom_keyword!(skip);
}

/// One `#[validate(...)]` occurrence.
#[derive(Debug, Clone)]
pub enum Annotation {
    /// Annotation text, kept as a literal for error spans.
    Tags(LitStr),
    /// `skip` keyword.
    Skip(kw::skip)
}

impl Parse for Annotation {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(LitStr) {
            Ok(Self::Tags(input.parse()?))
        } else if lookahead.peek(kw::skip) {
            Ok(Self::Skip(input.parse()?))
        } else {
            Err(lookahead.error())
        }
    }
}

/// Every annotation on an item, with skip markers separated out.
#[derive(Debug, Default)]
pub struct Annotations {
    /// Tag literals in source order.
    pub tags: Vec<LitStr>,
    /// `skip` markers.
    pub skip: Vec<kw::skip>
}

impl Annotations {
    /// Parse all `#[validate(...)]` attributes in `attrs`.
    ///
    /// Attributes with other paths are ignored. Every malformed attribute
    /// is reported, not just the first.
    pub fn from_attrs(attrs: &[Attribute]) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let mut annotations = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("validate")) {
            match errors.handle(attr.parse_args::<Annotation>().map_err(darling::Error::from)) {
                Some(Annotation::Tags(lit)) => annotations.tags.push(lit),
                Some(Annotation::Skip(kw)) => annotations.skip.push(kw),
                None => {}
            }
        }

        errors.finish_with(annotations)
    }

    /// Whether the item is excluded from validation.
    ///
    /// # Errors
    ///
    /// `skip` combined with tags on the same item.
    pub fn is_skipped(&self) -> darling::Result<bool> {
        match (self.skip.first(), self.tags.first()) {
            (Some(_), Some(lit)) => Err(darling::Error::custom(
                "`skip` can't be combined with validation tags"
            )
            .with_span(lit)),
            (skip, None) => Ok(skip.is_some()),
            (None, Some(_)) => Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn parses_tag_string() {
        let annotation: Annotation = syn::parse_str("\"min=1,max=5\"").unwrap();
        match annotation {
            Annotation::Tags(lit) => assert_eq!(lit.value(), "min=1,max=5"),
            Annotation::Skip(_) => panic!("expected tags")
        }
    }

    #[test]
    fn parses_skip() {
        let annotation: Annotation = syn::parse_str("skip").unwrap();
        assert!(matches!(annotation, Annotation::Skip(_)));
    }

    #[test]
    fn rejects_other_tokens() {
        assert!(syn::parse_str::<Annotation>("min = 1").is_err());
        assert!(syn::parse_str::<Annotation>("42").is_err());
    }

    #[test]
    fn collects_in_source_order() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[validate("key=[max_len=64]")]),
            parse_quote!(#[doc = "ignored"]),
            parse_quote!(#[validate("value=[min=1]")]),
        ];
        let annotations = Annotations::from_attrs(&attrs).unwrap();
        let tags: Vec<String> = annotations.tags.iter().map(LitStr::value).collect();
        assert_eq!(tags, ["key=[max_len=64]", "value=[min=1]"]);
        assert!(!annotations.is_skipped().unwrap());
    }

    #[test]
    fn skip_alone() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[validate(skip)])];
        assert!(Annotations::from_attrs(&attrs).unwrap().is_skipped().unwrap());
    }

    #[test]
    fn skip_with_tags_is_rejected() {
        let attrs: Vec<Attribute> =
            vec![parse_quote!(#[validate(skip)]), parse_quote!(#[validate("min=1")])];
        let annotations = Annotations::from_attrs(&attrs).unwrap();
        assert!(annotations.is_skipped().is_err());
    }

    #[test]
    fn reports_every_malformed_attribute() {
        let attrs: Vec<Attribute> =
            vec![parse_quote!(#[validate(min = 1)]), parse_quote!(#[validate(nothing)])];
        let err = Annotations::from_attrs(&attrs).unwrap_err();
        assert_eq!(err.len(), 2);
    }
}
