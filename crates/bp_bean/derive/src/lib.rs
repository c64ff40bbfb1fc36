//! See following macros:
//!
//! - [`Bean`]
//! - [`impl_auto_register`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static BEAN_ATTRIBUTE_NAME: &str = "bean";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Bean Derivation
///
/// `#[derive(Bean)]` implements `Typed` and `FieldValue` for a struct with
/// named fields. Every field becomes a member, in declaration order. The
/// struct then works as a `&dyn Bean` and as a member of other beans.
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ## Field attributes
///
/// - `#[bean(skip)]`: leave the field out.
/// - `#[bean(rename = "fieldA")]`: the name paths match against.
///
/// ## Type attributes
///
/// - `#[bean(getter = get_full_name)]`: add a `&self` method returning a
///   reference. Paths only reach it when its name starts with a configured
///   getter prefix (`get_`, `is_` by default).
/// - `#[bean(fallible_getter = get_email)]`: same, for a method returning
///   `Result<&V, E>` where `E` converts into `Box<dyn Error + Send + Sync>`.
/// - `#[bean(type_path = "demo::JavaBean")]`: the type path reported by the
///   bean. Not available on generic types.
/// - `#[bean(auto_register)]`: include the type in
///   `BeanRegistry::auto_register`. Not available on generic types.
///
/// Two members whose names differ only by case or `_` are an error.
///
/// ## Generics
///
/// Every type parameter must implement `FieldValue`. Lifetime parameters
/// are not supported.
///
/// ## Example
///
/// ```rust, ignore
/// #[derive(Bean)]
/// #[bean(getter = get_display_name, auto_register)]
/// struct Person {
///     #[bean(rename = "givenName")]
///     first: String,
///     last: String,
///     #[bean(skip)]
///     cache: Vec<u8>,
/// }
///
/// impl Person {
///     fn get_display_name(&self) -> &String {
///         &self.first
///     }
/// }
/// ```
#[proc_macro_derive(Bean, attributes(bean))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let bean = match derive_data::BeanStruct::from_derive_input(&ast) {
        Ok(bean) => bean,
        Err(err) => return err.into_compile_error().into(),
    };

    let typed = impls::impl_trait_typed(&bean);
    let field_value = impls::impl_trait_field_value(&bean);
    let auto_register = impls::get_auto_register_impl(&bean);

    TokenStream::from(quote! {
        #typed

        #field_value

        #auto_register
    })
}

/// Registers a type for `BeanRegistry::auto_register`.
///
/// For beans implemented by hand, or derived without
/// `#[bean(auto_register)]`. Generic types must be fully specified.
///
/// ```rust, ignore
/// impl_auto_register!(Celsius);
/// impl_auto_register!(Wrapper<u32>);
/// ```
///
/// Without the `auto_register` feature this expands to nothing.
#[proc_macro]
pub fn impl_auto_register(_input: TokenStream) -> TokenStream {
    #[cfg(not(feature = "auto_register"))]
    return TokenStream::new();

    #[cfg(feature = "auto_register")]
    {
        let type_path = parse_macro_input!(_input as syn::Type);

        let bp_bean_path = path::bp_bean();
        let auto_register_ = path::auto_register_(&bp_bean_path);

        TokenStream::from(quote! {
            const _: () = {
                #auto_register_::inventory::submit!{
                    #auto_register_::__AutoRegisterFunc(
                        <#type_path as #auto_register_::__RegisterType>::__register
                    )
                }
            };
        })
    }
}
