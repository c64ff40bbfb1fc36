//! Containers for static storage of [`BeanInfo`].
//!
//! A non-generic type keeps its info in a [`BeanInfoCell`], which is a
//! [`OnceLock`].
//!
//! For a generic type the `static CELL` inside `bean_info` is shared by every
//! instantiation, so [`GenericBeanInfoCell`] maps each `TypeId` to a leaked
//! `&'static BeanInfo`.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use bp_utils::TypeIdMap;

use crate::info::BeanInfo;

/// Static storage of the [`BeanInfo`] of a non-generic type.
///
/// See [`Typed`](crate::info::Typed) for an example.
pub struct BeanInfoCell(OnceLock<BeanInfo>);

impl BeanInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first use.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &BeanInfo
    where
        F: FnOnce() -> BeanInfo,
    {
        self.0.get_or_init(f)
    }
}

/// Static storage of the [`BeanInfo`] of a generic type.
///
/// ```
/// use core::any::Any;
/// use bp_bean::{
///     FieldValue,
///     impls::GenericBeanInfoCell,
///     info::{BeanInfo, GetterInfo, Typed},
/// };
///
/// struct Wrapper<T> {
///     inner: T,
/// }
///
/// impl<T: FieldValue> Typed for Wrapper<T> {
///     fn bean_info() -> &'static BeanInfo {
///         static CELL: GenericBeanInfoCell = GenericBeanInfoCell::new();
///         CELL.get_or_insert::<Self>(|| BeanInfo::new::<Self>([
///             GetterInfo::field::<Self, T>("inner", |w| &w.inner),
///         ]))
///     }
/// }
///
/// let a = <Wrapper<u8>>::bean_info();
/// let b = <Wrapper<String>>::bean_info();
/// assert!(a.member("inner").unwrap().value_type().is::<u8>());
/// assert!(b.member("inner").unwrap().value_type().is::<String>());
/// ```
pub struct GenericBeanInfoCell(RwLock<TypeIdMap<&'static BeanInfo>>);

impl GenericBeanInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the info stored for `G`, building it with `f` on first use.
    ///
    /// `f` runs without the lock held, so it may call `bean_info` of other
    /// instantiations. If two threads race, the first insert wins and the
    /// other info is leaked.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> BeanInfo) -> &BeanInfo {
        let type_id = TypeId::of::<G>();
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static BeanInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: BeanInfo) -> &'static BeanInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

impl Default for BeanInfoCell {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for GenericBeanInfoCell {
    fn default() -> Self {
        Self::new()
    }
}
