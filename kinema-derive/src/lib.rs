//! `#[derive(Unit)]` for `kinema-core`.
//!
//! The expansion names `crate::Unit` and `crate::Quantity`, so the derive only works inside `kinema-core` (the crate
//! that owns both items). Downstream code uses the predefined units re-exported by `kinema`.
//!
//! # Generated impls
//!
//! For a marker type `Meter` annotated with `#[unit(symbol = "m", dimension = Length)]`:
//!
//! - `crate::Unit for Meter` with `SYMBOL = "m"` and `Dim = Length`
//! - `core::fmt::Display for crate::Quantity<Meter>`, printing `<value> m`
//!
//! # Attributes
//!
//! Both keys of `#[unit(...)]` are required and may appear once:
//!
//! - `symbol = "m"`: non-empty printable symbol
//! - `dimension = Length`: the dimension marker type

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, Attribute, DeriveInput, LitStr, Type};

/// Derive `crate::Unit` and `Display for crate::Quantity<Self>`.
///
/// Requires a `#[unit(symbol = "...", dimension = ...)]` attribute. Generic marker types are rejected: a unit is a
/// single concrete tag.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    derive_unit_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "unit marker types cannot be generic",
        ));
    }

    let name = &input.ident;
    let UnitAttribute { symbol, dimension } = parse_unit_attribute(name, &input.attrs)?;

    Ok(quote! {
        impl crate::Unit for #name {
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
        }

        impl ::core::fmt::Display for crate::Quantity<#name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <#name as crate::Unit>::SYMBOL)
            }
        }
    })
}

/// Contents of `#[unit(...)]`.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Type,
}

fn parse_unit_attribute(name: &syn::Ident, attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    let attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("unit"))
        .ok_or_else(|| syn::Error::new_spanned(name, "missing #[unit(...)] attribute"))?;

    let mut symbol: Option<LitStr> = None;
    let mut dimension: Option<Type> = None;

    attr.parse_nested_meta(|meta| {
        let key = meta.path.to_token_stream().to_string();
        match key.as_str() {
            "symbol" => {
                if symbol.is_some() {
                    return Err(meta.error("duplicate attribute `symbol`"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new_spanned(&lit, "`symbol` must not be empty"));
                }
                symbol = Some(lit);
            }
            "dimension" => {
                if dimension.is_some() {
                    return Err(meta.error("duplicate attribute `dimension`"));
                }
                dimension = Some(meta.value()?.parse()?);
            }
            other => return Err(meta.error(format!("unknown attribute `{other}`"))),
        }
        Ok(())
    })?;

    let symbol =
        symbol.ok_or_else(|| syn::Error::new_spanned(attr, "missing required attribute `symbol`"))?;
    let dimension = dimension
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required attribute `dimension`"))?;

    Ok(UnitAttribute { symbol, dimension })
}
