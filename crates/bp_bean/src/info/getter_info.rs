use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;
use core::error::Error;
use core::fmt;

use thiserror::Error;

use crate::FieldValue;
use crate::info::{Typed, ValueType};

// -----------------------------------------------------------------------------
// MemberKind

/// How a member reads its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// A public field read in place.
    Field,
    /// A `&self` method. It takes part in resolution only when its name
    /// starts with one of the configured getter prefixes.
    Method,
    /// Reports the receiver's type path. Never selected by path resolution.
    Introspection,
}

// -----------------------------------------------------------------------------
// GetterError

/// Failure raised by a single accessor call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GetterError {
    /// The receiver handed to the accessor is not of the declaring type.
    #[error("receiver is not a `{expected}`")]
    ReceiverMismatch { expected: &'static str },
    /// A fallible getter returned an error.
    #[error("{0}")]
    Failed(Box<dyn Error + Send + Sync>),
}

// -----------------------------------------------------------------------------
// Getter

/// The result of a [`Getter`] call. `Ok(None)` is an absent value.
pub type GetResult<'a> = Result<Option<&'a dyn Any>, GetterError>;

/// A type-erased, shareable zero-argument read accessor.
#[derive(Clone)]
pub struct Getter(Arc<dyn for<'a> Fn(&'a dyn Any) -> GetResult<'a> + Send + Sync>);

impl Getter {
    #[inline]
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a dyn Any) -> GetResult<'a> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Calls the accessor on `receiver`.
    #[inline]
    pub fn invoke<'a>(&self, receiver: &'a dyn Any) -> GetResult<'a> {
        (self.0)(receiver)
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Getter(..)")
    }
}

#[inline]
fn downcast_receiver<T: Any>(receiver: &dyn Any) -> Result<&T, GetterError> {
    receiver
        .downcast_ref::<T>()
        .ok_or(GetterError::ReceiverMismatch {
            expected: core::any::type_name::<T>(),
        })
}

// -----------------------------------------------------------------------------
// GetterInfo

/// One read accessor of a bean type.
///
/// # Examples
///
/// ```
/// use bp_bean::info::{GetterInfo, MemberKind};
///
/// struct Point { x: i32 }
///
/// let info = GetterInfo::field::<Point, i32>("x", |p| &p.x);
/// let point = Point { x: 7 };
///
/// let value = info.getter().invoke(&point).unwrap().unwrap();
/// assert_eq!(value.downcast_ref::<i32>(), Some(&7));
/// assert_eq!(info.kind(), MemberKind::Field);
/// assert!(info.value_type().is::<i32>());
/// ```
#[derive(Clone, Debug)]
pub struct GetterInfo {
    name: &'static str,
    kind: MemberKind,
    value_type: ValueType,
    getter: Getter,
}

impl GetterInfo {
    /// Name of the introspection member every [`BeanInfo`](crate::info::BeanInfo) carries.
    pub const INTROSPECTION_NAME: &'static str = "type_path";

    /// A field read in place.
    pub fn field<T: Any, V: FieldValue>(name: &'static str, read: fn(&T) -> &V) -> Self {
        Self::infallible(name, MemberKind::Field, read)
    }

    /// A `&self` method returning a reference.
    pub fn method<T: Any, V: FieldValue>(name: &'static str, read: fn(&T) -> &V) -> Self {
        Self::infallible(name, MemberKind::Method, read)
    }

    /// A `&self` method that may fail.
    ///
    /// The error is boxed into [`GetterError::Failed`].
    pub fn fallible<T, V, E>(name: &'static str, read: fn(&T) -> Result<&V, E>) -> Self
    where
        T: Any,
        V: FieldValue,
        E: Into<Box<dyn Error + Send + Sync>> + 'static,
    {
        let getter = Getter::new(move |receiver| {
            let this = downcast_receiver::<T>(receiver)?;
            match read(this) {
                Ok(value) => Ok(value.read_value()),
                Err(err) => Err(GetterError::Failed(err.into())),
            }
        });
        Self {
            name,
            kind: MemberKind::Method,
            value_type: V::value_type(),
            getter,
        }
    }

    pub(crate) fn introspection<T: Typed>() -> Self {
        let getter = Getter::new(|receiver| {
            downcast_receiver::<T>(receiver)?;
            Ok(Some(T::bean_info().ty().path_ref() as &dyn Any))
        });
        Self {
            name: Self::INTROSPECTION_NAME,
            kind: MemberKind::Introspection,
            value_type: ValueType::leaf::<&'static str>(),
            getter,
        }
    }

    fn infallible<T: Any, V: FieldValue>(
        name: &'static str,
        kind: MemberKind,
        read: fn(&T) -> &V,
    ) -> Self {
        let getter = Getter::new(move |receiver| {
            let this = downcast_receiver::<T>(receiver)?;
            Ok(read(this).read_value())
        });
        Self {
            name,
            kind,
            value_type: V::value_type(),
            getter,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    #[inline]
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    #[inline]
    pub fn getter(&self) -> &Getter {
        &self.getter
    }
}

#[cfg(test)]
mod tests {
    use super::{GetterError, GetterInfo, MemberKind};
    use alloc::string::String;

    struct Account {
        id: u64,
        owner: Option<String>,
    }

    impl Account {
        fn get_owner(&self) -> Result<&String, &'static str> {
            self.owner.as_ref().ok_or("no owner")
        }
    }

    #[test]
    fn field_reads_in_place() {
        let info = GetterInfo::field::<Account, u64>("id", |a| &a.id);
        let account = Account { id: 9, owner: None };
        let value = info.getter().invoke(&account).unwrap().unwrap();
        assert!(core::ptr::eq(value.downcast_ref::<u64>().unwrap(), &account.id));
    }

    #[test]
    fn option_field_reads_as_absent() {
        let info = GetterInfo::field::<Account, Option<String>>("owner", |a| &a.owner);
        let account = Account { id: 1, owner: None };
        assert!(info.getter().invoke(&account).unwrap().is_none());
        assert!(info.value_type().is_nullable());
        assert!(info.value_type().is::<String>());
    }

    #[test]
    fn fallible_error_is_boxed() {
        let info = GetterInfo::fallible("get_owner", Account::get_owner);
        assert_eq!(info.kind(), MemberKind::Method);

        let account = Account { id: 1, owner: None };
        let err = info.getter().invoke(&account).unwrap_err();
        assert!(matches!(err, GetterError::Failed(_)));
        assert_eq!(alloc::format!("{err}"), "no owner");
    }

    #[test]
    fn fallible_with_owned_error() {
        fn owner_len(account: &Account) -> Result<&String, String> {
            account
                .owner
                .as_ref()
                .ok_or_else(|| alloc::format!("account {} has no owner", account.id))
        }

        let info = GetterInfo::fallible("get_owner", owner_len);

        let owned = Account { id: 2, owner: Some(String::from("Ada")) };
        let value = info.getter().invoke(&owned).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "Ada");

        let orphan = Account { id: 3, owner: None };
        let err = info.getter().invoke(&orphan).unwrap_err();
        assert_eq!(alloc::format!("{err}"), "account 3 has no owner");
    }

    #[test]
    fn wrong_receiver_is_reported() {
        let info = GetterInfo::field::<Account, u64>("id", |a| &a.id);
        let err = info.getter().invoke(&5_u8).unwrap_err();
        assert!(matches!(err, GetterError::ReceiverMismatch { .. }));
    }
}
