//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod bean_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, GetterMethod, TypeAttributes};
pub(crate) use bean_struct::{BeanStruct, MemberSource};
