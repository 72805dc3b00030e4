//! Derive macros for `mascara`.
//!
//! This crate generates the field walk behind `#[derive(Masked)]`. It reads
//! `#[mask(...)]` field attributes and emits a `mascara::MaskFields`
//! implementation that applies the named `mask` table entries.
//!
//! The masking functions themselves live in the main `mascara` crate and run at
//! runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod derive_struct;
mod generics;
mod strategy;
mod types;
use derive_struct::derive_struct;
use generics::add_bounds;

/// Derives `mascara::MaskFields` for structs.
///
/// # Field Attributes
///
/// - **No annotation**: the field passes through unchanged.
///
/// - `#[mask(key)]`: applies the `mask` table entry named `key` (`cpf`, `cnpj`,
///   `phone`, `currency`, `date`, `time`, `zipcode`, `name`, `capitalize`,
///   `accent`, `datetime`, `search`). Works for `String`, `Option<String>`,
///   `Vec<String>`, `Box<String>` and any other `MaskApplicable` type.
///   `unmask_fields` applies the inverse entry, if the key has one.
///
/// - `#[mask(nested)]`: walks the field through its own `MaskFields`
///   implementation.
///
/// Enums and unions are rejected.
///
/// # Example
///
/// ```ignore
/// #[derive(Masked)]
/// struct Address {
///     #[mask(zipcode)]
///     zipcode: String,
/// }
///
/// #[derive(Masked)]
/// struct Customer {
///     #[mask(cpf)]
///     cpf: String,
///     #[mask(nested)]
///     address: Address,
/// }
/// ```
#[proc_macro_derive(Masked, attributes(mask))]
pub fn derive_masked(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the mascara crate root.
///
/// Handles crate renaming (e.g., `my_masks = { package = "mascara", ... }`)
/// and the case where the derive is used inside mascara itself.
fn crate_root() -> TokenStream {
    match crate_name("mascara") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::mascara },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    mask_body: TokenStream,
    unmask_body: TokenStream,
    applicable_generics: Vec<Ident>,
    nested_generics: Vec<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let output = match data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Masked` can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Masked` can only be derived for structs",
            ));
        }
    };

    let fields_path = crate_path("MaskFields");
    let bounded = add_bounds(
        generics,
        &output.applicable_generics,
        &crate_path("MaskApplicable"),
    );
    let bounded = add_bounds(bounded, &output.nested_generics, &fields_path);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let mask_body = output.mask_body;
    let unmask_body = output.unmask_body;

    Ok(quote! {
        impl #impl_generics #fields_path for #ident #ty_generics #where_clause {
            fn mask_fields(self) -> Self {
                #mask_body
            }

            fn unmask_fields(self) -> Self {
                #unmask_body
            }
        }
    })
}
