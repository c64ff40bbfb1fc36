//! Utilities for implementing [`Typed`](crate::info::Typed) by hand, and the
//! built-in [`FieldValue`](crate::FieldValue) implementations.
//!
//! - [`BeanInfoCell`]: static storage for a non-generic type.
//! - [`GenericBeanInfoCell`]: static storage shared by every instantiation
//!   of a generic type.
//!
//! ## Implemented Menu
//!
//! Leaves (never descended into):
//! - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `()`
//! - `String`, `&'static str`, `Cow<'static, str>`
//! - `core::time::Duration`
//! - `Vec<T>`, `Box<[T]>`
//!
//! Wrappers (read as their content):
//! - `Option<T>`: absent when `None`
//! - `Box<T>`, `Arc<T>`

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod values;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{BeanInfoCell, GenericBeanInfoCell};
