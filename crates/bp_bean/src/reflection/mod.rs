// -----------------------------------------------------------------------------
// Modules

mod bean;
mod field_value;

// -----------------------------------------------------------------------------
// Exports

pub use bean::Bean;
pub use field_value::FieldValue;
