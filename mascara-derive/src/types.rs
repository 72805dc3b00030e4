//! Type utilities for the derive macro.

/// Checks if a type is a bare primitive scalar (`i32`, `bool`, `f64`, ...).
///
/// Qualified paths, generic types and aliases are not recognized; those fall
/// through to the `MaskApplicable` bound and its own compile error.
pub(crate) fn is_scalar_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() || path.path.segments.len() != 1
    {
        return false;
    }
    path.path.segments.last().is_some_and(|segment| {
        segment.arguments.is_empty()
            && matches!(
                segment.ident.to_string().as_str(),
                "i8" | "i16"
                    | "i32"
                    | "i64"
                    | "i128"
                    | "isize"
                    | "u8"
                    | "u16"
                    | "u32"
                    | "u64"
                    | "u128"
                    | "usize"
                    | "f32"
                    | "f64"
                    | "bool"
                    | "char"
            )
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn parse_type(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as Type")
    }

    #[test]
    fn primitives_are_scalar() {
        for tokens in [quote! { i32 }, quote! { u64 }, quote! { bool }, quote! { f64 }] {
            assert!(is_scalar_type(&parse_type(tokens)));
        }
    }

    #[test]
    fn strings_and_containers_are_not_scalar() {
        assert!(!is_scalar_type(&parse_type(quote! { String })));
        assert!(!is_scalar_type(&parse_type(quote! { Option<u64> })));
    }

    #[test]
    fn qualified_paths_are_not_scalar() {
        assert!(!is_scalar_type(&parse_type(quote! { std::primitive::u64 })));
        assert!(!is_scalar_type(&parse_type(quote! { ::std::primitive::u64 })));
    }
}
