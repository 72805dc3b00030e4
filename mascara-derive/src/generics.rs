//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that appear in annotated fields.
//! `PhantomData<T>` is skipped, so marker parameters never pick up a bound.

use proc_macro2::TokenStream;
use syn::{Ident, parse_quote};

fn push_if_generic(ident: &Ident, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if generics.type_params().any(|param| param.ident == *ident)
        && !result.iter().any(|g| g == ident)
    {
        result.push(ident.clone());
    }
}

fn visit_path_arguments(
    args: &syn::PathArguments,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match args {
        syn::PathArguments::AngleBracketed(args) => {
            for arg in &args.args {
                match arg {
                    syn::GenericArgument::Type(inner_ty) => visit_type(inner_ty, generics, result),
                    syn::GenericArgument::AssocType(assoc) => {
                        visit_type(&assoc.ty, generics, result);
                    }
                    _ => {}
                }
            }
        }
        syn::PathArguments::Parenthesized(args) => {
            for input in &args.inputs {
                visit_type(input, generics, result);
            }
            if let syn::ReturnType::Type(_, output) = &args.output {
                visit_type(output, generics, result);
            }
        }
        syn::PathArguments::None => {}
    }
}

fn visit_path(path: &syn::Path, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "PhantomData")
    {
        return;
    }

    for segment in &path.segments {
        push_if_generic(&segment.ident, generics, result);
        visit_path_arguments(&segment.arguments, generics, result);
    }
}

fn visit_type(ty: &syn::Type, generics: &syn::Generics, result: &mut Vec<Ident>) {
    match ty {
        syn::Type::Path(type_path) => {
            if let Some(qself) = &type_path.qself {
                visit_type(&qself.ty, generics, result);
            }
            visit_path(&type_path.path, generics, result);
        }
        syn::Type::Reference(reference) => visit_type(&reference.elem, generics, result),
        syn::Type::Slice(slice) => visit_type(&slice.elem, generics, result),
        syn::Type::Array(array) => visit_type(&array.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                visit_type(elem, generics, result);
            }
        }
        syn::Type::Paren(paren) => visit_type(&paren.elem, generics, result),
        syn::Type::Group(group) => visit_type(&group.elem, generics, result),
        _ => {}
    }
}

/// Records the type parameters of `generics` that appear in `ty`.
pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    visit_type(ty, generics, result);
}

/// Adds `bound` to every type parameter listed in `used_generics`.
pub(crate) fn add_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
    bound: &TokenStream,
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#bound));
        }
    }
    generics
}
