use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::BeanStruct;

/// Generate `FieldValue`, so the bean can be a member of other beans.
pub(crate) fn impl_trait_field_value(bean: &BeanStruct) -> TokenStream {
    let info_ = crate::path::info_(bean.bp_bean_path());
    let field_value_ = crate::path::field_value_(bean.bp_bean_path());
    let ident = bean.ident;
    let (impl_generics, ty_generics, _) = bean.generics.split_for_impl();
    let where_clause = super::where_clause_with_bounds(bean);

    quote! {
        impl #impl_generics #field_value_ for #ident #ty_generics #where_clause {
            #[inline]
            fn value_type() -> #info_::ValueType {
                #info_::ValueType::bean::<Self>()
            }

            #[inline]
            fn read_value(&self) -> ::core::option::Option<&dyn ::core::any::Any> {
                ::core::option::Option::Some(self)
            }
        }
    }
}
