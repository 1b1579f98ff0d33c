//! Expansion of `#[derive(Fixture)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;

/// Expands the derive for `input`, or reports the first problem found.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = crate_path::resolve(parsed.attrs.crate_path.as_ref());
    Ok(generate::fixture_impl(&parsed, &krate))
}
