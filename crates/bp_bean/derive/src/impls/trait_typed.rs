use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

use crate::derive_data::{BeanStruct, MemberSource};

/// Generate `Typed`.
///
/// ```ignore
/// impl Typed for Foo {
///     fn bean_info() -> &'static BeanInfo {
///         static CELL: BeanInfoCell = BeanInfoCell::new();
///         CELL.get_or_init(|| BeanInfo::new::<Self>([
///             GetterInfo::field::<Self, u32>("id", |this| &this.id),
///             GetterInfo::method::<Self, _>("get_name", Self::get_name),
///         ]))
///     }
/// }
/// ```
pub(crate) fn impl_trait_typed(bean: &BeanStruct) -> TokenStream {
    let info_ = crate::path::info_(bean.bp_bean_path());
    let impls_ = crate::path::impls_(bean.bp_bean_path());
    let ident = bean.ident;
    let (impl_generics, ty_generics, _) = bean.generics.split_for_impl();
    let where_clause = super::where_clause_with_bounds(bean);

    let members = bean.members.iter().map(|member| {
        let name = &member.name;
        let method = |path: &syn::Path| {
            if path.segments.len() == 1 {
                quote! { Self::#path }
            } else {
                quote! { #path }
            }
        };
        match &member.source {
            MemberSource::Field { ident, ty } => quote_spanned! { ty.span() =>
                #info_::GetterInfo::field::<Self, #ty>(#name, |this| &this.#ident)
            },
            MemberSource::Method { path, fallible: false } => {
                let method = method(path);
                quote_spanned! { path.span() =>
                    #info_::GetterInfo::method::<Self, _>(#name, #method)
                }
            }
            MemberSource::Method { path, fallible: true } => {
                let method = method(path);
                quote_spanned! { path.span() =>
                    #info_::GetterInfo::fallible::<Self, _, _>(#name, #method)
                }
            }
        }
    });

    let with_type_path = match &bean.attrs.type_path {
        Some(path) => quote! { .with_type_path(#path) },
        None => TokenStream::new(),
    };

    let build_info = quote! {
        #info_::BeanInfo::new::<Self>([ #(#members,)* ]) #with_type_path
    };

    let get_info = if bean.is_generic() {
        quote! {
            static CELL: #impls_::GenericBeanInfoCell = #impls_::GenericBeanInfoCell::new();
            CELL.get_or_insert::<Self>(|| #build_info)
        }
    } else {
        quote! {
            static CELL: #impls_::BeanInfoCell = #impls_::BeanInfoCell::new();
            CELL.get_or_init(|| #build_info)
        }
    };

    quote! {
        impl #impl_generics #info_::Typed for #ident #ty_generics #where_clause {
            fn bean_info() -> &'static #info_::BeanInfo {
                #get_info
            }
        }
    }
}
