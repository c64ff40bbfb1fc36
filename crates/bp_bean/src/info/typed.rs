use crate::info::BeanInfo;

// -----------------------------------------------------------------------------
// Typed

/// A type with a static [`BeanInfo`].
///
/// Implemented by [`#[derive(Bean)]`](crate::derive::Bean). Every `Typed`
/// type is also a [`Bean`](crate::Bean).
///
/// # Manually Impl
///
/// For non-generic types, store the info in a [`BeanInfoCell`]. A bean that
/// can appear as a member of another bean also implements
/// [`FieldValue`](crate::FieldValue) with [`ValueType::bean`].
///
/// ```
/// use core::any::Any;
/// use bp_bean::{
///     FieldValue,
///     impls::BeanInfoCell,
///     info::{BeanInfo, GetterInfo, Typed, ValueType},
/// };
///
/// struct Celsius {
///     degrees: f64,
/// }
///
/// impl Typed for Celsius {
///     fn bean_info() -> &'static BeanInfo {
///         static CELL: BeanInfoCell = BeanInfoCell::new();
///         CELL.get_or_init(|| BeanInfo::new::<Self>([
///             GetterInfo::field::<Self, f64>("degrees", |c| &c.degrees),
///         ]))
///     }
/// }
///
/// impl FieldValue for Celsius {
///     fn value_type() -> ValueType { ValueType::bean::<Self>() }
///     fn read_value(&self) -> Option<&dyn Any> { Some(self) }
/// }
///
/// assert_eq!(Celsius::bean_info().type_name(), "Celsius");
/// ```
///
/// Generic types use [`GenericBeanInfoCell`] instead, since the `static`
/// is shared by every instantiation.
///
/// [`BeanInfoCell`]: crate::impls::BeanInfoCell
/// [`GenericBeanInfoCell`]: crate::impls::GenericBeanInfoCell
/// [`ValueType::bean`]: crate::info::ValueType::bean
pub trait Typed: Send + Sync + 'static {
    /// Returns the static description of this type.
    fn bean_info() -> &'static BeanInfo;
}
