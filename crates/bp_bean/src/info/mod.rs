//! Static descriptions of bean types and their read accessors.
//!
//! - [`Typed`]: a type with a static [`BeanInfo`].
//! - [`BeanInfo`]: the type identity plus the ordered list of members.
//! - [`GetterInfo`]: one zero-argument read accessor and what it yields.
//! - [`ValueType`]: the declared result of an accessor.
//! - [`BeanType`]: `TypeId`, type path and short name.

// -----------------------------------------------------------------------------
// Modules

mod bean_info;
mod bean_type;
mod getter_info;
mod typed;
mod value_type;

// -----------------------------------------------------------------------------
// Exports

pub use bean_info::BeanInfo;
pub use bean_type::BeanType;
pub use getter_info::{GetResult, Getter, GetterError, GetterInfo, MemberKind};
pub use typed::Typed;
pub use value_type::ValueType;
