//! Code generation for the `Fixture` derive macro.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;
use syn::ext::IdentExt;

use super::parse::{DefaultValue, Member, ParsedInput};

/// Name of the associated function exposing the field of `member`.
pub(crate) fn accessor_ident(member: &Ident) -> Ident {
    format_ident!("{}_field", member.unraw())
}

fn default_tokens(member: &Member) -> TokenStream {
    let ty = &member.ty;
    match &member.default {
        DefaultValue::Expr(expr) => quote! { #expr },
        DefaultValue::Implicit => quote! { <#ty as ::core::default::Default>::default() },
    }
}

/// Generates the field accessor for one member.
///
/// The field lives in a function-local `LazyLock`, so every call returns the
/// same field identity.
fn accessor(member: &Member, krate: &TokenStream) -> TokenStream {
    let Member { ident, ty, vis, .. } = member;
    let name = ident.unraw().to_string();
    let fn_ident = accessor_ident(ident);
    let default = default_tokens(member);
    let doc = format!("Field declaration backing the `{name}` member.");
    quote! {
        #[doc = #doc]
        #[must_use]
        #vis fn #fn_ident() -> &'static #krate::Field<#ty> {
            static FIELD: ::std::sync::LazyLock<#krate::Field<#ty>> =
                ::std::sync::LazyLock::new(|| #krate::Field::new(#name, #default));
            &FIELD
        }
    }
}

/// Generates the accessors and the `Fixture` implementation.
pub(crate) fn fixture_impl(parsed: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &parsed.ident;
    let lookup = if parsed.members.is_empty() {
        format_ident!("_lookup")
    } else {
        format_ident!("lookup")
    };
    let accessors = parsed.members.iter().map(|m| accessor(m, krate));
    let reads = parsed.members.iter().map(|m| {
        let member = &m.ident;
        let fn_ident = accessor_ident(member);
        quote! { #member: #lookup.get(Self::#fn_ident())? }
    });
    quote! {
        impl #ident {
            #( #accessors )*
        }

        impl #krate::Fixture for #ident {
            fn create(
                #lookup: &mut #krate::LookUp<'_>,
            ) -> #krate::FixtureResult<Self> {
                ::core::result::Result::Ok(Self {
                    #( #reads, )*
                })
            }
        }
    }
}
