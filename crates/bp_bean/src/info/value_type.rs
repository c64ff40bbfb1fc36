use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{BeanInfo, Typed};

/// The declared result of a read accessor.
///
/// Wrappers are looked through: `Option<Box<Address>>` is described as
/// `Address` with [`is_nullable`](Self::is_nullable) set.
///
/// For bean values the [`BeanInfo`] is kept as a function pointer, so a bean
/// may refer to its own type without recursing while its info is built.
#[derive(Clone, Copy)]
pub struct ValueType {
    id: TypeId,
    type_path: &'static str,
    nullable: bool,
    bean_info: Option<fn() -> &'static BeanInfo>,
}

impl ValueType {
    /// A value the resolver cannot descend into.
    #[inline]
    pub fn leaf<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
            nullable: false,
            bean_info: None,
        }
    }

    /// A bean value, which further path segments may address.
    #[inline]
    pub fn bean<T: Typed>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
            nullable: false,
            bean_info: Some(T::bean_info),
        }
    }

    /// Marks the value as possibly absent.
    #[inline]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The compiler's type path of the value.
    ///
    /// For bean values this may differ from [`BeanInfo::type_path`] when the
    /// bean declares a custom path.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub fn is_bean(&self) -> bool {
        self.bean_info.is_some()
    }

    /// Returns the [`BeanInfo`] of a bean value, `None` for leaves.
    #[inline]
    pub fn bean_info(&self) -> Option<&'static BeanInfo> {
        self.bean_info.map(|f| f())
    }

    /// Returns `true` if the value is a `T`.
    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueType")
            .field("type_path", &self.type_path)
            .field("nullable", &self.nullable)
            .field("bean", &self.is_bean())
            .finish()
    }
}
