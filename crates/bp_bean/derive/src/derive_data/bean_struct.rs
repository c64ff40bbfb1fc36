use proc_macro2::Span;
use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr, Path, Type, spanned::Spanned};

use super::{FieldAttributes, GetterMethod, TypeAttributes};

/// Where a member reads its value from.
pub(crate) enum MemberSource {
    Field { ident: Ident, ty: Type },
    Method { path: Path, fallible: bool },
}

/// One member of the generated `BeanInfo`, in declaration order.
pub(crate) struct BeanMember {
    pub name: LitStr,
    pub source: MemberSource,
}

/// A struct deriving `Bean`.
pub(crate) struct BeanStruct<'a> {
    bp_bean_path: Path,
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    pub members: Vec<BeanMember>,
}

impl<'a> BeanStruct<'a> {
    pub fn from_derive_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => fields,
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Bean` cannot be derived for tuple structs: members need names",
                    ));
                }
                Fields::Unit => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Bean` cannot be derived for unit structs",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Bean` can only be derived for structs with named fields",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Bean` can only be derived for structs with named fields",
                ));
            }
        };

        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "beans are `'static`: lifetime parameters are not supported",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        if let Some(type_path) = &attrs.type_path
            && !input.generics.params.is_empty()
        {
            return Err(syn::Error::new(
                type_path.span(),
                "`type_path` is not supported on generic types",
            ));
        }

        if let Some(span) = attrs.auto_register
            && !input.generics.params.is_empty()
        {
            return Err(syn::Error::new(
                span,
                "`auto_register` is not supported on generic types",
            ));
        }

        let mut members = Vec::with_capacity(fields.named.len() + attrs.getters.len());

        for field in &fields.named {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.skip {
                continue;
            }
            // Named fields always have an ident.
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let name = field_attrs
                .rename
                .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
            members.push(BeanMember {
                name,
                source: MemberSource::Field {
                    ident,
                    ty: field.ty.clone(),
                },
            });
        }

        for GetterMethod { path, fallible } in &attrs.getters {
            let Some(last) = path.segments.last() else {
                return Err(syn::Error::new(path.span(), "expected a method name"));
            };
            members.push(BeanMember {
                name: LitStr::new(&last.ident.to_string(), last.ident.span()),
                source: MemberSource::Method {
                    path: path.clone(),
                    fallible: *fallible,
                },
            });
        }

        check_member_names(&members)?;

        Ok(Self {
            bp_bean_path: crate::path::bp_bean(),
            ident: &input.ident,
            generics: &input.generics,
            attrs,
            members,
        })
    }

    #[inline]
    pub fn bp_bean_path(&self) -> &Path {
        &self.bp_bean_path
    }

    /// Generic types share one `static` cell between instantiations.
    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    #[cfg_attr(not(feature = "auto_register"), allow(dead_code))]
    #[inline]
    pub fn auto_register(&self) -> Option<Span> {
        self.attrs.auto_register
    }
}

/// Member names ignore case and `_` when matched, so two names that
/// only differ there would shadow each other.
fn check_member_names(members: &[BeanMember]) -> syn::Result<()> {
    let folded: Vec<String> = members
        .iter()
        .map(|member| {
            member
                .name
                .value()
                .chars()
                .filter(|&c| c != '_')
                .flat_map(char::to_lowercase)
                .collect()
        })
        .collect();

    for (index, member) in members.iter().enumerate() {
        if let Some(other) = folded[..index].iter().position(|f| *f == folded[index]) {
            return Err(syn::Error::new(
                member.name.span(),
                format!(
                    "member `{}` differs from `{}` only by case or `_`",
                    member.name.value(),
                    members[other].name.value(),
                ),
            ));
        }
    }
    Ok(())
}
