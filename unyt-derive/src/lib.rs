//! Derive macro implementation used by `unyt-core`.
//!
//! `unyt-derive` is an implementation detail of this workspace. The `Unit`
//! derive expands in terms of `crate::Unit` and `crate::Quantity`, so it is
//! intended to be used by `unyt-core` (or by crates that expose an identical
//! crate-root API). Downstream crates should declare units with the `unit!`
//! macro instead.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit>` (formats as `<value> <symbol>`)
//! - `From<Repr> for crate::Quantity<MyUnit>` (constructor semantics)
//! - `PartialEq<Repr> for crate::Quantity<MyUnit>` (raw-value comparison)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `repr = u32`: primitive storage type
//! - `symbol = "mV"`: displayed unit symbol
//! - `init = some_fn` (optional): construction-time transform applied by
//!   `Quantity::new`; identity when omitted

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitStr, Path, Token, Type,
};

/// Derive `crate::Unit` plus `Display` and `From<Repr>` impls for
/// `crate::Quantity<ThisUnit>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `repr`
/// and `symbol`, and optionally `init`.
///
/// This macro is intended for use by `unyt-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse the #[unit(...)] attribute
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let repr = &unit_attr.repr;
    let symbol = &unit_attr.symbol;

    // Without an init clause the trait's identity default applies.
    let init_fn = unit_attr.init.as_ref().map(|path| {
        quote! {
            #[inline]
            fn init(value: #repr) -> #repr {
                #path(value)
            }
        }
    });

    let expanded = quote! {
        impl crate::Unit for #name {
            type Repr = #repr;
            const SYMBOL: &'static str = #symbol;
            #init_fn
        }

        impl ::core::fmt::Display for crate::Quantity<#name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <#name as crate::Unit>::SYMBOL)
            }
        }

        impl ::core::convert::From<#repr> for crate::Quantity<#name> {
            #[inline]
            fn from(value: #repr) -> Self {
                Self::new(value)
            }
        }

        impl ::core::cmp::PartialEq<#repr> for crate::Quantity<#name> {
            #[inline]
            fn eq(&self, other: &#repr) -> bool {
                self.value() == *other
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    repr: Type,
    symbol: LitStr,
    init: Option<Path>,
    // Future extensions:
    // long_name: Option<LitStr>,
    // plural: Option<LitStr>,
    // aliases: Option<Vec<LitStr>>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut repr: Option<Type> = None;
        let mut symbol: Option<LitStr> = None;
        let mut init: Option<Path> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "repr" => {
                    repr = Some(input.parse()?);
                }
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "init" => {
                    init = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let repr = repr
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `repr`"))?;
        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        Ok(UnitAttribute { repr, symbol, init })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(repr = u32, symbol = "mV")]
            pub struct Millivolt;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "mV");
        assert!(attr.init.is_none());
    }

    #[test]
    fn test_parse_unit_attribute_with_init() {
        let input: DeriveInput = parse_quote! {
            #[unit(repr = u16, symbol = "cal", init = apply_offset)]
            pub struct Calibrated;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        let init = attr.init.expect("init path should be parsed");
        assert!(init.is_ident("apply_offset"));
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Millivolt;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_repr() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "mV")]
            pub struct Millivolt;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing required attribute `repr`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(repr = u32)]
            pub struct Millivolt;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(repr = u32, symbol = "mV", unknown = "value")]
            pub struct Millivolt;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("unknown attribute"));
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[unit(repr = u32, symbol = "mV")]
            pub struct Millivolt;
        };

        let result = derive_unit_impl(input);
        assert!(result.is_ok());
        let tokens = result.unwrap();
        let code = tokens.to_string();
        assert!(code.contains("impl crate :: Unit for Millivolt"));
        assert!(code.contains("type Repr = u32"));
        assert!(code.contains("const SYMBOL : & 'static str = \"mV\""));
        assert!(code.contains("PartialEq < u32 > for crate :: Quantity < Millivolt >"));
        // No init clause: the trait's identity default applies.
        assert!(!code.contains("fn init"));
    }

    #[test]
    fn test_derive_unit_impl_with_init() {
        let input: DeriveInput = parse_quote! {
            #[unit(repr = u16, symbol = "cal", init = apply_offset)]
            pub struct Calibrated;
        };

        let result = derive_unit_impl(input);
        assert!(result.is_ok());
        let tokens = result.unwrap();
        let code = tokens.to_string();
        assert!(code.contains("fn init"));
        assert!(code.contains("apply_offset (value)"));
    }

    #[test]
    fn test_derive_unit_impl_float_repr() {
        let input: DeriveInput = parse_quote! {
            #[unit(repr = f64, symbol = "rad")]
            pub struct Radian;
        };

        let result = derive_unit_impl(input);
        assert!(result.is_ok());
        let code = result.unwrap().to_string();
        assert!(code.contains("type Repr = f64"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            repr = u32, symbol = "mV",
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "mV");
    }

    #[test]
    fn test_unit_attribute_parse_no_trailing_comma() {
        let tokens = quote! {
            repr = u32, symbol = "mV"
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "mV");
    }

    #[test]
    fn test_unit_attribute_parse_duplicate_symbol() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            repr = u32, symbol = "V", symbol = "mV"
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "mV");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        // Test error handling in derive_unit_impl
        let input: DeriveInput = parse_quote! {
            pub struct Millivolt;
        };
        let result = derive_unit_impl(input);
        assert!(result.is_err());
        // The error should contain information about missing attribute
        let err = result.err().unwrap();
        let err_tokens = err.to_compile_error();
        let code = err_tokens.to_string();
        assert!(code.contains("compile_error"));
    }
}
