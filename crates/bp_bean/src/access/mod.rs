//! Path-based reads of nested bean values.
//!
//! A path is a dot-separated list of member names, such as
//! `nestedJavaBean.fieldA`. Each segment selects one read accessor of the
//! current bean:
//!
//! - Matching ignores case and `_`, and a segment matches any member
//!   whose name *ends with* it. `bean` finds `nested_java_bean`.
//! - Fields always take part. Methods take part when their name starts with
//!   a getter prefix (`get_`, `is_` by default).
//! - The introspection member (`type_path`) never takes part.
//! - When several members match, [`MatchPolicy`] decides.
//!
//! The pieces:
//!
//! - [`FieldPath`]: a parsed path.
//! - [`PathResolver`]: turns a path into a [`ComposedAccessor`] for one type.
//! - [`AccessorCache`]: memoizes composed accessors per (type, path).
//! - [`get_field_value`]: a read through the process-wide cache.
//!
//! # Absent values
//!
//! An `Option` member that is `None` is absent. Absent before the last
//! segment is [`AccessError::NullIntermediate`]; absent at the last segment
//! is `Ok(None)`.
//!
//! # Examples
//!
//! ```
//! use bp_bean::{Bean, access::AccessorCache};
//!
//! #[derive(Bean)]
//! struct NestedJavaBean {
//!     field_a: String,
//!     nested_java_bean: Option<Box<NestedJavaBean>>,
//! }
//!
//! let bean = NestedJavaBean {
//!     field_a: "outer".into(),
//!     nested_java_bean: Some(Box::new(NestedJavaBean {
//!         field_a: "inner".into(),
//!         nested_java_bean: None,
//!     })),
//! };
//!
//! let cache = AccessorCache::new();
//! let inner = cache.get_field_as::<String>(&bean, "nestedJavaBean.fieldA").unwrap();
//! assert_eq!(inner.unwrap(), "inner");
//!
//! // Suffix match: `bean` selects `nested_java_bean`.
//! let same = cache.get_field_as::<String>(&bean, "bean.field_a").unwrap();
//! assert_eq!(same.unwrap(), "inner");
//!
//! // The second level is absent, so reading through it fails.
//! assert!(cache.get_field_value(&bean, "bean.bean.fieldA").is_err());
//! ```

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod name;

mod cache;
mod composed;
mod error;
mod path;
mod resolver;
mod segment;

// -----------------------------------------------------------------------------
// Exports

pub use cache::{AccessorCache, CacheStats, get_field_value, global};
pub use composed::ComposedAccessor;
pub use error::{AccessError, MalformedReason};
pub use path::FieldPath;
pub use resolver::{MatchPolicy, PathResolver, ResolverConfig};
pub use segment::SegmentAccessor;
