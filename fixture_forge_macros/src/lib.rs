//! Procedural macros for `fixture_forge`.
//!
//! The [`Fixture`] derive declares one typed field per struct member and a
//! canonical creator that reads every member through a look-up. Each member
//! must state its default with `#[fixture(default = <expr>)]`, or
//! `#[fixture(default)]` to use `Default::default()`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `fixture_forge::Fixture`.
///
/// For every member `name: Ty` the derive generates an associated function
/// `name_field() -> &'static fixture_forge::Field<Ty>` that returns the same
/// field on every call, so overrides can target it.
///
/// Use `#[fixture(crate = "path")]` on the struct when the runtime crate is
/// renamed in `Cargo.toml`.
#[proc_macro_derive(Fixture, attributes(fixture))]
pub fn derive_fixture(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
