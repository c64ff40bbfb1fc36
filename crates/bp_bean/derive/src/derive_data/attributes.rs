//! Parsing of `#[bean(...)]` attributes.

use proc_macro2::Span;
use syn::{Attribute, LitStr, Path, meta::ParseNestedMeta, spanned::Spanned};

use crate::BEAN_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Type attributes

/// A method named by `getter = path` or `fallible_getter = path`.
pub(crate) struct GetterMethod {
    pub path: Path,
    pub fallible: bool,
}

/// Attributes on the type.
///
/// - `#[bean(getter = get_full_name)]`: adds a `&self` method returning a reference.
/// - `#[bean(fallible_getter = get_email)]`: adds a `&self` method returning
///   `Result<&V, E>`.
/// - `#[bean(type_path = "demo::JavaBean")]`: overrides the reported type path.
/// - `#[bean(auto_register)]`: registers the type for `BeanRegistry::auto_register`.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub getters: Vec<GetterMethod>,
    pub type_path: Option<LitStr>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(BEAN_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("getter") {
            let path: Path = meta.value()?.parse()?;
            self.getters.push(GetterMethod { path, fallible: false });
        } else if meta.path.is_ident("fallible_getter") {
            let path: Path = meta.value()?.parse()?;
            self.getters.push(GetterMethod { path, fallible: true });
        } else if meta.path.is_ident("type_path") {
            if self.type_path.is_some() {
                return Err(meta.error("duplicate `type_path`"));
            }
            self.type_path = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("auto_register") {
            self.auto_register = Some(meta.path.span());
        } else if meta.path.is_ident("skip") || meta.path.is_ident("rename") {
            return Err(meta.error("`skip` and `rename` apply to fields"));
        } else {
            return Err(meta.error(
                "expected `getter`, `fallible_getter`, `type_path` or `auto_register`",
            ));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Field attributes

/// Attributes on a named field.
///
/// - `#[bean(skip)]`: the field is not a member.
/// - `#[bean(rename = "fieldA")]`: the member name used for matching.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub skip: bool,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(BEAN_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        this.skip = true;
                        Ok(())
                    } else if meta.path.is_ident("rename") {
                        this.rename = Some(meta.value()?.parse()?);
                        Ok(())
                    } else {
                        Err(meta.error("expected `skip` or `rename`"))
                    }
                })?;
            }
        }
        Ok(this)
    }
}
