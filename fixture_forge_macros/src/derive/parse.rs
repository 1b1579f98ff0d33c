//! Input parsing for the `Fixture` derive macro.
//!
//! Parsing validates the whole input up front so expansion only deals with
//! well-formed structs whose members all declare a default.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Type, Visibility};

/// Struct-level `#[fixture(...)]` settings.
#[derive(Default)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// How a member obtains its declared default.
pub(crate) enum DefaultValue {
    /// `#[fixture(default = <expr>)]`.
    Expr(Box<Expr>),
    /// `#[fixture(default)]`, meaning `Default::default()`.
    Implicit,
}

/// A struct member together with its declared default.
pub(crate) struct Member {
    pub ident: Ident,
    pub ty: Type,
    pub vis: Visibility,
    pub default: DefaultValue,
}

/// Everything generation needs to know about the input struct.
pub(crate) struct ParsedInput {
    pub ident: Ident,
    pub attrs: StructAttrs,
    pub members: Vec<Member>,
}

/// Gathers the struct identifier, its attributes, and every member.
///
/// Rejects enums, unions, tuple and unit structs, generic structs, unknown
/// attribute keys, and members without a default.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    if let Some(param) = input.generics.params.first() {
        return Err(syn::Error::new_spanned(
            param,
            "Fixture cannot be derived for generic structs",
        ));
    }
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Fixture requires named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Fixture can only be derived for structs",
            ));
        }
    };
    let members = named.iter().map(parse_member).collect::<syn::Result<_>>()?;
    Ok(ParsedInput {
        ident: input.ident.clone(),
        attrs,
        members,
    })
}

/// Iterate all `#[fixture(...)]` attributes once and apply a callback.
fn parse_fixture_attrs<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("fixture")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta, allowed: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("path"), ToString::to_string);
    meta.error(format!("unknown fixture attribute `{key}`; expected {allowed}"))
}

pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_fixture_attrs(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let lit = meta.value()?.parse::<LitStr>()?;
            let path: syn::Path = lit.parse()?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            Err(unknown_key(meta, "`crate`"))
        }
    })?;
    Ok(out)
}

fn parse_member(field: &syn::Field) -> syn::Result<Member> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "Fixture requires named fields"));
    };
    let mut declared = None;
    parse_fixture_attrs(&field.attrs, |meta| {
        if !meta.path.is_ident("default") {
            return Err(unknown_key(meta, "`default`"));
        }
        if declared.is_some() {
            return Err(meta.error("duplicate `default` for this field"));
        }
        let value = if meta.input.peek(syn::Token![=]) {
            DefaultValue::Expr(Box::new(meta.value()?.parse()?))
        } else {
            DefaultValue::Implicit
        };
        declared = Some(value);
        Ok(())
    })?;
    let Some(default) = declared else {
        return Err(syn::Error::new_spanned(
            field,
            format!(
                "field `{ident}` needs `#[fixture(default = ...)]` or `#[fixture(default)]`"
            ),
        ));
    };
    Ok(Member {
        ident,
        ty: field.ty.clone(),
        vis: field.vis.clone(),
        default,
    })
}
