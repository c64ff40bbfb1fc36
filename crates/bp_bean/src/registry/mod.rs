//! A registry of bean types, for lookups by name when no value is at hand.
//!
//! Typical uses are checking configured paths at startup with
//! [`BeanRegistry::validate`], and warming an
//! [`AccessorCache`](crate::access::AccessorCache) with
//! [`prepare_all`](crate::access::AccessorCache::prepare_all).
//!
//! ## auto_register
//!
//! See [`BeanRegistry::auto_register`].
//!
//! We use the [`inventory`] crate for static registration. Not every platform
//! supports it; where it does not, `auto_register` returns `false` and
//! registers nothing.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod bean_registry;

// -----------------------------------------------------------------------------
// Exports

pub use bean_registry::{BeanRegistry, BeanRegistryArc};
