use core::any::Any;

use crate::info::{BeanInfo, Typed};

/// An object-safe view of a [`Typed`] value.
///
/// This is what the accessor cache reads from: the concrete type is only
/// known at run time, through [`reflect_bean_info`](Bean::reflect_bean_info).
///
/// Implemented for every [`Typed`] type; there is no need to implement it
/// by hand.
///
/// ```
/// use bp_bean::Bean;
///
/// #[derive(Bean)]
/// struct Tag { label: String }
///
/// let tag = Tag { label: "x".into() };
/// let erased: &dyn Bean = &tag;
/// assert_eq!(erased.reflect_bean_info().type_name(), "Tag");
/// assert!(erased.as_any().is::<Tag>());
/// ```
///
/// # Rejected definitions
///
/// Members whose names only differ by case or `_` would shadow each other:
///
/// ```compile_fail
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// #[allow(non_snake_case)]
/// struct Reading { field_a: u8, fieldA: u8 }
/// ```
///
/// ```compile_fail
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// struct Reading {
///     value: u8,
///     #[bean(rename = "VALUE")]
///     raw: u8,
/// }
/// ```
///
/// ```compile_fail
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// #[bean(getter = get_value)]
/// struct Reading { get_value: u8 }
///
/// impl Reading {
///     fn get_value(&self) -> &u8 {
///         &self.get_value
///     }
/// }
/// ```
///
/// Renaming one of them works:
///
/// ```
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// struct Reading {
///     value: u8,
///     #[bean(rename = "rawValue")]
///     raw: u8,
/// }
/// ```
///
/// Only structs with named fields are beans:
///
/// ```compile_fail
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// struct Pair(u8, u8);
/// ```
///
/// ```compile_fail
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// struct Marker;
/// ```
///
/// ```compile_fail
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// enum Level { Low, High }
/// ```
///
/// ```compile_fail
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// union Bits { int: u32, float: f32 }
/// ```
///
/// Beans are `'static`:
///
/// ```compile_fail
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// struct Borrowed<'a> { name: &'a str }
/// ```
///
/// A generic bean has one info per instantiation, so it cannot name a
/// single type path or register itself:
///
/// ```compile_fail
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// #[bean(type_path = "demo::Slot")]
/// struct Slot<T> { value: T }
/// ```
///
/// ```compile_fail
/// # use bp_bean::Bean;
/// #[derive(Bean)]
/// #[bean(auto_register)]
/// struct Slot<T> { value: T }
/// ```
///
/// Register concrete instantiations with
/// [`impl_auto_register!`](crate::derive::impl_auto_register) instead.
pub trait Bean: Any + Send + Sync {
    /// Returns the [`BeanInfo`] of the underlying type.
    fn reflect_bean_info(&self) -> &'static BeanInfo;

    /// Casts to `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Typed> Bean for T {
    #[inline]
    fn reflect_bean_info(&self) -> &'static BeanInfo {
        T::bean_info()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::access::AccessorCache;
    use crate::info::{MemberKind, Typed};
    use crate::{Bean, FieldValue};
    use alloc::string::String;
    use alloc::vec::Vec;

    #[derive(Bean)]
    #[bean(type_path = "demo::Customer", getter = get_label)]
    struct Customer {
        #[bean(rename = "fieldA")]
        id: u64,
        label: String,
        #[bean(skip)]
        #[allow(dead_code)]
        scratch: Vec<u8>,
    }

    impl Customer {
        fn get_label(&self) -> &String {
            &self.label
        }
    }

    #[derive(Bean)]
    struct Slot<T> {
        value: T,
        spare: Option<T>,
    }

    #[test]
    fn derived_members_follow_declaration_order() {
        let info = Customer::bean_info();
        let members: Vec<_> = info.iter().map(|m| (m.name(), m.kind())).collect();
        assert_eq!(
            members,
            [
                ("fieldA", MemberKind::Field),
                ("label", MemberKind::Field),
                ("get_label", MemberKind::Method),
                ("type_path", MemberKind::Introspection),
            ]
        );
    }

    #[test]
    fn custom_type_path_is_reported() {
        let customer = Customer {
            id: 1,
            label: String::from("c-1"),
            scratch: Vec::new(),
        };
        let erased: &dyn Bean = &customer;
        assert_eq!(erased.reflect_bean_info().type_path(), "demo::Customer");
        assert_eq!(erased.reflect_bean_info().type_name(), "Customer");

        let introspection = Customer::bean_info().introspection().unwrap();
        let reported = introspection.getter().invoke(&customer).unwrap().unwrap();
        assert_eq!(reported.downcast_ref::<&str>(), Some(&"demo::Customer"));
    }

    #[test]
    fn renamed_and_skipped_fields() {
        let cache = AccessorCache::new();
        let customer = Customer {
            id: 7,
            label: String::from("gold"),
            scratch: Vec::new(),
        };

        assert_eq!(cache.get_field_as::<u64>(&customer, "field_a").unwrap(), Some(&7));
        assert!(cache.get_field_value(&customer, "id").is_err());
        assert!(cache.get_field_value(&customer, "scratch").is_err());
    }

    #[test]
    fn generic_beans_have_one_info_per_instantiation() {
        let small = <Slot<u8>>::bean_info();
        let text = <Slot<String>>::bean_info();
        assert!(!core::ptr::eq(small, text));
        assert!(core::ptr::eq(small, <Slot<u8>>::bean_info()));

        assert!(small.member("value").unwrap().value_type().is::<u8>());
        assert!(text.member("spare").unwrap().value_type().is_nullable());
        assert!(<Slot<u8> as FieldValue>::value_type().is_bean());

        let cache = AccessorCache::new();
        let slot = Slot {
            value: String::from("x"),
            spare: None,
        };
        assert_eq!(cache.get_field_as::<String>(&slot, "value").unwrap().unwrap(), "x");
        assert!(cache.get_field_value(&slot, "spare").unwrap().is_none());
    }
}
