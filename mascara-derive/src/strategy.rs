//! Parsing of `#[mask(...)]` field attributes.
//!
//! This module maps attribute syntax to field decisions and produces
//! structured errors for invalid forms.

use proc_macro2::{Ident, Span};
use quote::format_ident;
use syn::{Attribute, Meta, Result, spanned::Spanned};

/// `mask` table keys and the `MaskKind` variant each one names.
const MASK_KEYS: &[(&str, &str)] = &[
    ("accent", "Accent"),
    ("capitalize", "Capitalize"),
    ("datetime", "Datetime"),
    ("name", "Name"),
    ("search", "Search"),
    ("cnpj", "Cnpj"),
    ("cpf", "Cpf"),
    ("currency", "Currency"),
    ("date", "Date"),
    ("phone", "Phone"),
    ("time", "Time"),
    ("zipcode", "Zipcode"),
];

/// Field strategy based on `#[mask(...)]` attributes.
///
/// | Attribute          | Strategy       | Behavior                            |
/// |--------------------|----------------|-------------------------------------|
/// | None               | `Passthrough`  | Field is left as is                 |
/// | `#[mask(key)]`     | `Kind(variant)`| Apply the `MaskKind` named by `key` |
/// | `#[mask(nested)]`  | `Nested`       | Walk the field's own `MaskFields`   |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    Passthrough,
    /// The `MaskKind` variant to apply.
    Kind(Ident),
    Nested,
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[mask] attributes on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

fn valid_keys() -> String {
    MASK_KEYS
        .iter()
        .map(|(key, _)| *key)
        .chain(std::iter::once("nested"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn strategy_for_key(key: &Ident) -> Result<Strategy> {
    if key == "nested" {
        return Ok(Strategy::Nested);
    }
    MASK_KEYS
        .iter()
        .find(|(name, _)| key == name)
        .map(|(_, variant)| Strategy::Kind(format_ident!("{}", variant, span = key.span())))
        .ok_or_else(|| {
            syn::Error::new(
                key.span(),
                format!("unknown mask key `{key}`; expected one of: {}", valid_keys()),
            )
        })
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "missing mask key: use #[mask(key)] (e.g., #[mask(cpf)], #[mask(phone)])",
                ));
            }
            Meta::List(list) => match syn::parse2::<Ident>(list.tokens.clone()) {
                Ok(key) => {
                    set_strategy(&mut strategy, strategy_for_key(&key)?, attr.span())?;
                }
                Err(_) => {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected a single mask key (e.g., #[mask(cpf)])",
                    ));
                }
            },
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[mask(key)] syntax (e.g., #[mask(cpf)], #[mask(phone)])",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Passthrough))
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    fn error_for(tokens: proc_macro2::TokenStream) -> String {
        parse_field_strategy(&parse_attrs(tokens))
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn no_attribute_passes_through() {
        let strategy = parse_field_strategy(&parse_attrs(quote! {})).unwrap();
        assert!(matches!(strategy, Strategy::Passthrough));
    }

    #[test]
    fn key_maps_to_variant() {
        let strategy = parse_field_strategy(&parse_attrs(quote! { #[mask(zipcode)] })).unwrap();
        match strategy {
            Strategy::Kind(variant) => assert_eq!(variant, "Zipcode"),
            other => panic!("expected Kind, got {other:?}"),
        }
    }

    #[test]
    fn every_key_is_accepted() {
        for (key, variant) in MASK_KEYS {
            let key = format_ident!("{}", key);
            match strategy_for_key(&key).unwrap() {
                Strategy::Kind(ident) => assert_eq!(ident, variant),
                other => panic!("expected Kind, got {other:?}"),
            }
        }
    }

    #[test]
    fn nested_is_recognized() {
        let strategy = parse_field_strategy(&parse_attrs(quote! { #[mask(nested)] })).unwrap();
        assert!(matches!(strategy, Strategy::Nested));
    }

    #[test]
    fn bare_mask_errors_with_missing_key() {
        assert!(error_for(quote! { #[mask] }).contains("missing mask key"));
    }

    #[test]
    fn unknown_key_lists_valid_keys() {
        let message = error_for(quote! { #[mask(rg)] });
        assert!(message.contains("unknown mask key `rg`"));
        assert!(message.contains("cpf"));
        assert!(message.contains("nested"));
    }

    #[test]
    fn multiple_mask_attributes_error() {
        let message = error_for(quote! {
            #[mask(cpf)]
            #[mask(phone)]
        });
        assert!(message.contains("multiple"));
    }

    #[test]
    fn name_value_syntax_error() {
        assert!(error_for(quote! { #[mask = "cpf"] }).contains("#[mask(key)]"));
    }

    #[test]
    fn malformed_key_error() {
        assert!(error_for(quote! { #[mask(cpf, phone)] }).contains("single mask key"));
        assert!(error_for(quote! { #[mask(123)] }).contains("single mask key"));
    }

    #[test]
    fn other_attributes_ignored() {
        let strategy = parse_field_strategy(&parse_attrs(quote! {
            #[derive(Clone)]
            #[serde(skip)]
        }))
        .unwrap();
        assert!(matches!(strategy, Strategy::Passthrough));
    }
}
