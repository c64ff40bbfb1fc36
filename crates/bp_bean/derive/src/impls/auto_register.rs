use proc_macro2::TokenStream;

use crate::derive_data::BeanStruct;

/// Generate the `auto_register` submission.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(bean: &BeanStruct) -> TokenStream {
    use quote::quote_spanned;

    // Generic types were rejected while parsing.
    let Some(span) = bean.auto_register() else {
        return TokenStream::new();
    };

    let auto_register_ = crate::path::auto_register_(bean.bp_bean_path());
    let ident = bean.ident;

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

/// Generate the `auto_register` submission.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &BeanStruct) -> TokenStream {
    TokenStream::new()
}
