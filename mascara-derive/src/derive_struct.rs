//! Struct-specific `MaskFields` derivation.
//!
//! This module generates the per-field mask and unmask statements and collects
//! generic parameters that require trait bounds.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{DataStruct, Fields, Result, spanned::Spanned};

use crate::{
    DeriveOutput, crate_path,
    generics::collect_generics_from_type,
    strategy::{Strategy, parse_field_strategy},
    types::is_scalar_type,
};

/// Accumulated statements and generics while walking the fields.
struct FieldWalk<'a> {
    generics: &'a syn::Generics,
    mask: Vec<TokenStream>,
    unmask: Vec<TokenStream>,
    applicable_generics: Vec<Ident>,
    nested_generics: Vec<Ident>,
}

impl FieldWalk<'_> {
    fn push(&mut self, field: &syn::Field, binding: &Ident) -> Result<()> {
        let span = field.span();
        let ty = &field.ty;
        match parse_field_strategy(&field.attrs)? {
            Strategy::Passthrough => {}
            Strategy::Kind(variant) => {
                if is_scalar_type(ty) {
                    return Err(syn::Error::new_spanned(
                        ty,
                        "#[mask(key)] applies to string-like fields \
                         (String, Option<String>, Vec<String>, ...)",
                    ));
                }
                collect_generics_from_type(ty, self.generics, &mut self.applicable_generics);
                let applicable = crate_path("MaskApplicable");
                let kind = crate_path("MaskKind");
                self.mask.push(quote_spanned! { span =>
                    let #binding = #applicable::apply_mask(#binding, #kind::#variant);
                });
                self.unmask.push(quote_spanned! { span =>
                    let #binding = #applicable::apply_unmask(#binding, #kind::#variant);
                });
            }
            Strategy::Nested => {
                collect_generics_from_type(ty, self.generics, &mut self.nested_generics);
                let fields = crate_path("MaskFields");
                self.mask.push(quote_spanned! { span =>
                    let #binding = #fields::mask_fields(#binding);
                });
                self.unmask.push(quote_spanned! { span =>
                    let #binding = #fields::unmask_fields(#binding);
                });
            }
        }
        Ok(())
    }

    fn finish(self, destructure: &TokenStream) -> DeriveOutput {
        let mask = self.mask;
        let unmask = self.unmask;
        DeriveOutput {
            mask_body: quote! {
                let #destructure = self;
                #(#mask)*
                #destructure
            },
            unmask_body: quote! {
                let #destructure = self;
                #(#unmask)*
                #destructure
            },
            applicable_generics: self.applicable_generics,
            nested_generics: self.nested_generics,
        }
    }
}

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    let mut walk = FieldWalk {
        generics,
        mask: Vec::new(),
        unmask: Vec::new(),
        applicable_generics: Vec::new(),
        nested_generics: Vec::new(),
    };

    let destructure = match &data.fields {
        Fields::Named(fields) => {
            let mut bindings = Vec::new();
            for field in &fields.named {
                let ident = field
                    .ident
                    .clone()
                    .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
                walk.push(field, &ident)?;
                bindings.push(ident);
            }
            quote! { Self { #(#bindings),* } }
        }
        Fields::Unnamed(fields) => {
            let mut bindings = Vec::new();
            for (index, field) in fields.unnamed.iter().enumerate() {
                let ident = format_ident!("field_{index}", span = Span::call_site());
                walk.push(field, &ident)?;
                bindings.push(ident);
            }
            quote! { Self ( #(#bindings),* ) }
        }
        Fields::Unit => quote! { Self },
    };

    Ok(walk.finish(&destructure))
}
