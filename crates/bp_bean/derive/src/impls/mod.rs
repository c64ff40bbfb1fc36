// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_field_value;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use auto_register::get_auto_register_impl;
pub(crate) use trait_field_value::impl_trait_field_value;
pub(crate) use trait_typed::impl_trait_typed;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::BeanStruct;

/// The `where` clause shared by the generated impls.
///
/// Every type parameter must itself be a `FieldValue`, which also makes the
/// bean `Send + Sync + 'static`.
pub(crate) fn where_clause_with_bounds(bean: &BeanStruct) -> TokenStream {
    let field_value_ = crate::path::field_value_(bean.bp_bean_path());
    let params = bean.generics.type_params().map(|param| &param.ident);
    let predicates = bean
        .generics
        .where_clause
        .as_ref()
        .map(|clause| clause.predicates.iter())
        .into_iter()
        .flatten();

    quote! {
        where
            #(#params: #field_value_,)*
            #(#predicates,)*
    }
}
