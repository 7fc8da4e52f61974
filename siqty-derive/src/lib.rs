//! Derive macro implementation used by `siqty-core`.
//!
//! `siqty-derive` is an implementation detail of this workspace. The `Dimension` derive expands in terms of
//! `crate::Dimension`, `crate::Unit` and `crate::UnitRegistry`, so it is intended to be used by `siqty-core` (or by
//! crates that expose an identical crate-root API).
//!
//! Most users should depend on `siqty` instead and use the predefined quantities.
//!
//! # Generated impls
//!
//! For a dimension tag `AccelerationDim`, the derive implements `crate::Dimension for AccelerationDim` with:
//!
//! - `NAME`: the human readable dimension name,
//! - `SI_UNIT`: the unit constant named by `si`, looked up on `crate::Unit<AccelerationDim>`,
//! - `UNITS`: `crate::Unit::<AccelerationDim>::ALL` (emitted by `define_units!`),
//! - `registry()`: a lazily built symbol registry stored in a per-dimension `OnceLock`.
//!
//! # Attributes
//!
//! The derive reads a required `#[dimension(...)]` attribute:
//!
//! - `name = "Acceleration"`: dimension name used in diagnostics
//! - `si = METRES_PER_SECOND_SQUARED`: name of the SI unit constant

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Ident, LitStr, Token,
};

/// Derive `crate::Dimension` for a dimension tag declared as an empty enum.
///
/// The derive must be paired with a `#[dimension(...)]` attribute providing `name` and `si`.
///
/// This macro is intended for use by `siqty-core`.
#[proc_macro_derive(Dimension, attributes(dimension))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let tag = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "dimension tags cannot be generic",
        ));
    }

    match &input.data {
        Data::Enum(data) if data.variants.is_empty() => {}
        _ => {
            return Err(syn::Error::new_spanned(
                tag,
                "dimension tags must be empty enums",
            ))
        }
    }

    let attr = parse_dimension_attribute(&input.attrs)?;
    let name = &attr.name;
    let si = &attr.si;

    // The registry static names the tag directly: `Self` is not allowed inside a nested static.
    let expanded = quote! {
        impl crate::Dimension for #tag {
            const NAME: &'static str = #name;
            const SI_UNIT: crate::Unit<Self> = crate::Unit::<#tag>::#si;
            const UNITS: &'static [crate::Unit<Self>] = crate::Unit::<#tag>::ALL;

            fn registry() -> &'static crate::UnitRegistry<Self> {
                static REGISTRY: ::std::sync::OnceLock<crate::UnitRegistry<#tag>> =
                    ::std::sync::OnceLock::new();
                REGISTRY.get_or_init(|| {
                    crate::UnitRegistry::new(
                        <#tag as crate::Dimension>::NAME,
                        <#tag as crate::Dimension>::UNITS,
                    )
                })
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    name: LitStr,
    si: Ident,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut si: Option<Ident> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "si" => {
                    si = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let si = si.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `si`"))?;

        Ok(DimensionAttribute { name, si })
    }
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    for attr in attrs {
        if attr.path().is_ident("dimension") {
            return attr.parse_args::<DimensionAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[dimension(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn parse_dimension_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", si = METRES)]
            pub enum LengthDim {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert_eq!(attr.name.value(), "Length");
        assert_eq!(attr.si.to_string(), "METRES");
    }

    #[test]
    fn parse_dimension_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum LengthDim {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[dimension(...)] attribute"));
    }

    #[test]
    fn parse_dimension_attribute_missing_name() {
        let input: DeriveInput = parse_quote! {
            #[dimension(si = METRES)]
            pub enum LengthDim {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `name`"));
    }

    #[test]
    fn parse_dimension_attribute_missing_si() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length")]
            pub enum LengthDim {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `si`"));
    }

    #[test]
    fn parse_dimension_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", si = METRES, ratio = 1.0)]
            pub enum LengthDim {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("unknown attribute"));
    }

    #[test]
    fn derive_rejects_struct_and_union() {
        let unit_struct: DeriveInput = parse_quote! {
            #[dimension(name = "Length", si = METRES)]
            pub struct LengthDim;
        };
        let union: DeriveInput = parse_quote! {
            #[dimension(name = "Length", si = METRES)]
            pub union LengthDim { raw: u8 }
        };

        for input in [unit_struct, union] {
            let err = derive_dimension_impl(input).err().unwrap();
            assert!(err.to_string().contains("dimension tags must be empty enums"));
        }
    }

    #[test]
    fn attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            name = "Length", si = METRES,
        };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.name.value(), "Length");
    }

    #[test]
    fn attribute_parse_empty() {
        let tokens = quote! {};
        let result: syn::Result<DimensionAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn derive_emits_dimension_impl() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", si = METRES)]
            pub enum LengthDim {}
        };

        let code = derive_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Dimension for LengthDim"));
        assert!(code.contains("const NAME : & 'static str = \"Length\""));
        assert!(code.contains("crate :: Unit :: < LengthDim > :: METRES"));
        assert!(code.contains("crate :: Unit :: < LengthDim > :: ALL"));
        assert!(code.contains("OnceLock"));
    }

    #[test]
    fn derive_rejects_inhabited_enum() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", si = METRES)]
            pub enum LengthDim { Metre }
        };

        let err = derive_dimension_impl(input).err().unwrap();
        assert!(err.to_string().contains("must be empty enums"));
    }

    #[test]
    fn derive_rejects_generic_tag() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", si = METRES)]
            pub struct LengthDim<T>(T);
        };

        let err = derive_dimension_impl(input).err().unwrap();
        assert!(err.to_string().contains("cannot be generic"));
    }

    #[test]
    fn derive_error_becomes_compile_error() {
        let input: DeriveInput = parse_quote! {
            pub enum LengthDim {}
        };
        let err = derive_dimension_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
