//! Procedural macros used by `ratio-units-core` and `ratio-units`.
//!
//! `ratio-units-macros` is an implementation detail of this workspace. The `Scale` derive expands in terms of
//! `crate::Scale`, `crate::Suffix`, `crate::Rational` and `crate::Unit`, so it is intended to be used by
//! `ratio-units-core` (or by crates that expose an identical crate-root API). The `unit!` macro expands to
//! `::ratio_units::literals::*` and is re-exported by the `ratio-units` facade.
//!
//! Most users should depend on `ratio-units` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a scale marker type `MyScale`, the derive implements:
//!
//! - `crate::Scale for MyScale`, with the reduced ratio
//! - `crate::Suffix<Category> for MyScale`
//! - optionally a `type Alias<V> = crate::Unit<V, MyScale, Category>`
//!
//! # Attributes
//!
//! The derive reads a required `#[scale(...)]` attribute:
//!
//! - `ratio = 1 / 10` (or `ratio = 100`): positive integer ratio to the category's base scale
//! - `category = SomeCategory`: category marker type
//! - `suffix = "mm"`: display suffix
//! - `alias = Millimeters` (optional): name of the generated unit alias

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, Lit, LitInt, LitStr, Token, Type,
};

/// Derive `crate::Scale` and `crate::Suffix<Category>` for a scale marker type.
///
/// The derive must be paired with a `#[scale(...)]` attribute providing `ratio`, `category` and `suffix`, and
/// optionally `alias`.
///
/// This macro is intended for use by `ratio-units-core`.
#[proc_macro_derive(Scale, attributes(scale))]
pub fn derive_scale(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_scale_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Builds a unit value from a numeric literal followed by a scale suffix.
///
/// `unit!(12.3 mm)` is `Millimeters<LiteralFloat>`, `unit!(5 cm)` is `Centimeters<LiteralInt>`. A leading `-` is
/// accepted. Literals with a type suffix (`5u8`) are rejected; call the `literals` functions directly to choose
/// another payload type.
#[proc_macro]
pub fn unit(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as UnitLiteral);
    expand_unit(&literal).into()
}

fn derive_scale_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "scale markers cannot be generic",
        ));
    }

    let name = &input.ident;
    let vis = &input.vis;
    let attr = parse_scale_attribute(&input.attrs)?;

    let num = Literal::i128_unsuffixed(attr.num);
    let den = Literal::i128_unsuffixed(attr.den);
    let category = &attr.category;
    let suffix = &attr.suffix;

    let alias = attr.alias.as_ref().map(|alias| {
        let doc = format!("A value measured in `{}`.", suffix.value());
        quote! {
            #[doc = #doc]
            #vis type #alias<V> = crate::Unit<V, #name, #category>;
        }
    });

    Ok(quote! {
        impl crate::Scale for #name {
            const RATIO: crate::Rational = crate::Rational::new(#num, #den);
        }

        impl crate::Suffix<#category> for #name {
            const SUFFIX: &'static str = #suffix;
        }

        #alias
    })
}

/// Parsed contents of the `#[scale(...)]` attribute.
struct ScaleAttribute {
    num: i128,
    den: i128,
    category: Type,
    suffix: LitStr,
    alias: Option<Ident>,
}

/// Parses `N` or `N / D` with positive integer literals.
fn parse_ratio(input: ParseStream) -> syn::Result<(i128, i128)> {
    let num = parse_positive(input)?;
    if input.peek(Token![/]) {
        input.parse::<Token![/]>()?;
        Ok((num, parse_positive(input)?))
    } else {
        Ok((num, 1))
    }
}

fn parse_positive(input: ParseStream) -> syn::Result<i128> {
    let lit: LitInt = input.parse()?;
    let value = lit.base10_parse::<i128>()?;
    if value == 0 {
        return Err(syn::Error::new(lit.span(), "ratio terms must be non-zero"));
    }
    Ok(value)
}

impl Parse for ScaleAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut ratio: Option<(i128, i128)> = None;
        let mut category: Option<Type> = None;
        let mut suffix: Option<LitStr> = None;
        let mut alias: Option<Ident> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "ratio" => {
                    ratio = Some(parse_ratio(input)?);
                }
                "category" => {
                    category = Some(input.parse()?);
                }
                "suffix" => {
                    let lit: LitStr = input.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "suffix must not be empty"));
                    }
                    suffix = Some(lit);
                }
                "alias" => {
                    alias = Some(input.parse()?);
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

        let (num, den) =
            ratio.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;
        let category = category.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `category`")
        })?;
        let suffix = suffix
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `suffix`"))?;

        Ok(ScaleAttribute {
            num,
            den,
            category,
            suffix,
            alias,
        })
    }
}

fn parse_scale_attribute(attrs: &[Attribute]) -> syn::Result<ScaleAttribute> {
    for attr in attrs {
        if attr.path().is_ident("scale") {
            return attr.parse_args::<ScaleAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[scale(...)] attribute",
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// unit! literals
// ─────────────────────────────────────────────────────────────────────────────

/// Parsed `unit!` input: `[-] <literal> <suffix>`.
struct UnitLiteral {
    minus: Option<Token![-]>,
    literal: Lit,
    suffix: Ident,
}

impl Parse for UnitLiteral {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let minus: Option<Token![-]> = input.parse()?;
        let literal: Lit = input.parse()?;

        let type_suffix = match &literal {
            Lit::Int(lit) => lit.suffix(),
            Lit::Float(lit) => lit.suffix(),
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "expected an integer or floating-point literal",
                ))
            }
        };
        if !type_suffix.is_empty() {
            return Err(syn::Error::new(
                literal.span(),
                format!(
                    "literal type suffix `{}` is not allowed; use the `literals` functions to pick a payload type",
                    type_suffix
                ),
            ));
        }

        let suffix: Ident = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the unit suffix"));
        }

        Ok(UnitLiteral {
            minus,
            literal,
            suffix,
        })
    }
}

fn expand_unit(unit: &UnitLiteral) -> TokenStream2 {
    let payload = match unit.literal {
        Lit::Float(_) => format_ident!("LiteralFloat"),
        _ => format_ident!("LiteralInt"),
    };
    let minus = &unit.minus;
    let literal = &unit.literal;
    let suffix = &unit.suffix;

    quote! {
        ::ratio_units::literals::#suffix::<::ratio_units::#payload>(#minus #literal)
    }
}
