use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::time::Duration;

use crate::FieldValue;
use crate::info::ValueType;

macro_rules! impl_leaf_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                #[inline]
                fn value_type() -> ValueType {
                    ValueType::leaf::<Self>()
                }

                #[inline]
                fn read_value(&self) -> Option<&dyn Any> {
                    Some(self)
                }
            }
        )*
    };
}

impl_leaf_value!(
    bool, char, (),
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    String, &'static str, Cow<'static, str>,
    Duration,
);

impl<T: Any + Send + Sync> FieldValue for Vec<T> {
    #[inline]
    fn value_type() -> ValueType {
        ValueType::leaf::<Self>()
    }

    #[inline]
    fn read_value(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl<T: Any + Send + Sync> FieldValue for Box<[T]> {
    #[inline]
    fn value_type() -> ValueType {
        ValueType::leaf::<Self>()
    }

    #[inline]
    fn read_value(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    #[inline]
    fn value_type() -> ValueType {
        T::value_type().nullable()
    }

    #[inline]
    fn read_value(&self) -> Option<&dyn Any> {
        self.as_ref().and_then(T::read_value)
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    #[inline]
    fn value_type() -> ValueType {
        T::value_type()
    }

    #[inline]
    fn read_value(&self) -> Option<&dyn Any> {
        T::read_value(self)
    }
}

impl<T: FieldValue> FieldValue for Arc<T> {
    #[inline]
    fn value_type() -> ValueType {
        T::value_type()
    }

    #[inline]
    fn read_value(&self) -> Option<&dyn Any> {
        T::read_value(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::FieldValue;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;

    #[test]
    fn wrappers_read_through() {
        let boxed: Option<Box<String>> = Some(Box::new(String::from("inner")));
        let value = boxed.read_value().unwrap();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "inner");

        let shared = Arc::new(5_u32);
        assert_eq!(shared.read_value().unwrap().downcast_ref::<u32>(), Some(&5));
    }

    #[test]
    fn nested_option_is_absent_at_any_level() {
        let outer: Option<Option<u8>> = Some(None);
        assert!(outer.read_value().is_none());
        assert!(<Option<Option<u8>>>::value_type().is_nullable());
        assert!(<Option<Option<u8>>>::value_type().is::<u8>());
    }

    #[test]
    fn leaves_are_not_beans() {
        assert!(!<String as FieldValue>::value_type().is_bean());
        assert!(!<Box<u64> as FieldValue>::value_type().is_bean());
    }
}
