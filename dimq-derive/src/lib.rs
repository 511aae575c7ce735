//! Derive macro implementation used by `dimq-core`.
//!
//! `dimq-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of `crate::Unit`,
//! so it is intended to be used by `dimq-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `dimq` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for MyUnit` (writes the symbol)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: printed unit suffix; any `&'static str` constant expression, so `concat!("k", "m")` works
//! - `dimension = LengthDim`: dimension vector type
//! - `ratio = 1000.0`: size of one unit in the base unit of the dimension; any `f64` constant expression

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, DeriveInput, Expr, Ident, Token, Type,
};

/// Derive `crate::Unit` and `Display` for a unit marker.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`.
///
/// This macro is intended for use by `dimq-core`.
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
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "unit markers cannot be generic",
        ));
    }

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let ratio = &unit_attr.ratio;

    let expanded = quote! {
        impl crate::Unit for #name {
            const RATIO: f64 = #ratio;
            const SYMBOL: &'static str = #symbol;
            type Dim = #dimension;
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<#name as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: Expr,
    dimension: Type,
    ratio: Expr,
}

/// One `key = value` entry of the `#[unit(...)]` attribute.
enum UnitKey {
    Symbol(Ident, Expr),
    Dimension(Ident, Type),
    Ratio(Ident, Expr),
}

impl UnitKey {
    fn ident(&self) -> &Ident {
        match self {
            UnitKey::Symbol(ident, _) | UnitKey::Dimension(ident, _) | UnitKey::Ratio(ident, _) => ident,
        }
    }
}

impl Parse for UnitKey {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        match ident.to_string().as_str() {
            "symbol" => Ok(UnitKey::Symbol(ident, input.parse()?)),
            "dimension" => Ok(UnitKey::Dimension(ident, input.parse()?)),
            "ratio" => Ok(UnitKey::Ratio(ident, input.parse()?)),
            other => Err(syn::Error::new(
                ident.span(),
                format!("unknown attribute `{}`", other),
            )),
        }
    }
}

/// Stores `value` in an empty slot; a filled slot means the key was repeated.
fn fill<T>(slot: &mut Option<T>, ident: &Ident, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            ident.span(),
            format!("duplicate attribute `{}`", ident),
        ));
    }
    *slot = Some(value);
    Ok(())
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let keys = Punctuated::<UnitKey, Token![,]>::parse_terminated(input)?;

        let mut symbol = None;
        let mut dimension = None;
        let mut ratio = None;
        for key in keys {
            let ident = key.ident().clone();
            match key {
                UnitKey::Symbol(_, expr) => fill(&mut symbol, &ident, expr)?,
                UnitKey::Dimension(_, ty) => fill(&mut dimension, &ident, ty)?,
                UnitKey::Ratio(_, expr) => fill(&mut ratio, &ident, expr)?,
            }
        }

        let missing = |name: &str| syn::Error::new(input.span(), format!("missing required attribute `{}`", name));
        Ok(UnitAttribute {
            symbol: symbol.ok_or_else(|| missing("symbol"))?,
            dimension: dimension.ok_or_else(|| missing("dimension"))?,
            ratio: ratio.ok_or_else(|| missing("ratio"))?,
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
