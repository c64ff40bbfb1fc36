//! Paths into `bp_bean` used by generated code.
//!
//! Only the crate root needs the manifest scan; everything else is spelled
//! relative to it, so a moved module only needs a change here.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the access path to the `bp_bean` crate.
///
/// 1. For crates that depend on `bp_bean`, `::bp_bean` is returned.
/// 2. For crates that depend on `beanpath`, `::beanpath::bean` is returned.
/// 3. Otherwise `::bp_bean` is returned, which may be wrong.
///
/// This reads the caller's `Cargo.toml`, so it is called once per macro
/// invocation and the result passed around.
pub(crate) fn bp_bean() -> syn::Path {
    bp_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("bp_bean"))
}

#[inline(always)]
pub(crate) fn info_(bp_bean_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_bean_path::info
    }
}

#[inline(always)]
pub(crate) fn impls_(bp_bean_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_bean_path::impls
    }
}

#[inline(always)]
pub(crate) fn field_value_(bp_bean_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_bean_path::FieldValue
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(bp_bean_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_bean_path::__macro_exports::auto_register
    }
}
