//! Derive macro implementation used by `qvec-core`.
//!
//! `qvec-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of `crate::Unit`
//! and `crate::UnitDescriptor`, so it is intended to be used by `qvec-core` (or by crates that expose an identical
//! crate-root API).
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`, with a `DESCRIPTOR` constant built from the attribute
//! - `From<MyUnit> for crate::UnitDescriptor<Dim>`, so the marker value can be passed where a descriptor is expected
//! - `core::fmt::Display for MyUnit` (formats as the symbol)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "km"`: displayed unit symbol (required)
//! - `dimension = Length`: dimension marker type (required)
//! - `scale = 1000.0`: factor to the SI unit of the dimension (required)
//! - `offset = 273.15`: additive offset to SI (default `0.0`)
//! - `absolute = true`: whether absolute quantities may use this unit (default `false`)
//! - `name = "kilometer"`: human-readable name (default: the type name in snake case)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitBool, LitStr, Token,
};

/// Derive `crate::Unit`, `From<Self> for crate::UnitDescriptor<Dim>` and `Display`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing at least `symbol`, `dimension`, and `scale`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let scale = &unit_attr.scale;
    let name = match &unit_attr.name {
        Some(name) => name.value(),
        None => snake_case(&ident.to_string()),
    };
    let offset = match &unit_attr.offset {
        Some(offset) => quote!(#offset),
        None => quote!(0.0),
    };
    let absolute = unit_attr.absolute.as_ref().map_or(false, LitBool::value);

    let expanded = quote! {
        impl crate::Unit for #ident {
            type Dim = #dimension;
            const DESCRIPTOR: crate::UnitDescriptor<#dimension> =
                crate::UnitDescriptor::new(#name, #symbol, #scale, #offset, #absolute);
        }

        impl ::core::convert::From<#ident> for crate::UnitDescriptor<#dimension> {
            #[inline]
            fn from(_: #ident) -> Self {
                <#ident as crate::Unit>::DESCRIPTOR
            }
        }

        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<#ident as crate::Unit>::DESCRIPTOR.symbol())
            }
        }
    };

    Ok(expanded)
}

fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    scale: Expr,
    offset: Option<Expr>,
    absolute: Option<LitBool>,
    name: Option<LitStr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut scale: Option<Expr> = None;
        let mut offset: Option<Expr> = None;
        let mut absolute: Option<LitBool> = None;
        let mut name: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => symbol = Some(input.parse()?),
                "dimension" => dimension = Some(input.parse()?),
                "scale" => scale = Some(input.parse()?),
                "offset" => offset = Some(input.parse()?),
                "absolute" => absolute = Some(input.parse()?),
                "name" => name = Some(input.parse()?),
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

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let scale = scale
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `scale`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            scale,
            offset,
            absolute,
            name,
        })
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
