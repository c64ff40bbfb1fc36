use core::any::Any;

use crate::info::ValueType;

/// A type that can be the result of a bean accessor.
///
/// [`read_value`](FieldValue::read_value) turns a reference to the stored
/// value into the reference handed to the next accessor of a path, or to the
/// caller. Wrappers look through themselves: `Option<T>` reads as its content
/// or as an absent value, `Box<T>` and `Arc<T>` read as `T`.
///
/// Implemented for primitives, strings, `Duration`, `Vec<T>`, the wrappers
/// above, and every `#[derive(Bean)]` type. The full list is in
/// [`impls`](crate::impls).
pub trait FieldValue: Any + Send + Sync {
    /// Describes what [`read_value`](FieldValue::read_value) yields.
    fn value_type() -> ValueType
    where
        Self: Sized;

    /// Returns the value to hand on, `None` if it is absent.
    fn read_value(&self) -> Option<&dyn Any>;
}
