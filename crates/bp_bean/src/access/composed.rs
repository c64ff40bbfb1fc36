use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::access::{AccessError, FieldPath, SegmentAccessor};
use crate::info::{BeanType, ValueType};

/// The chain of accessors a path resolved to on one bean type.
///
/// Applying it calls each accessor on the previous result. A value absent
/// before the last segment is an error; an absent last value is `Ok(None)`.
///
/// # Examples
///
/// ```
/// use bp_bean::{Bean, access::{FieldPath, PathResolver}, info::Typed};
///
/// #[derive(Bean)]
/// struct Inner { value: u32 }
///
/// #[derive(Bean)]
/// struct Outer { inner: Inner }
///
/// let path = FieldPath::parse("inner.value").unwrap();
/// let chain = PathResolver::default().build_chain(Outer::bean_info(), &path).unwrap();
/// assert_eq!(chain.len(), 2);
///
/// let outer = Outer { inner: Inner { value: 3 } };
/// assert_eq!(chain.apply_as::<u32>(&outer).unwrap(), Some(&3));
/// ```
pub struct ComposedAccessor {
    start: BeanType,
    path: FieldPath,
    chain: Box<[SegmentAccessor]>,
}

impl ComposedAccessor {
    pub(crate) fn new(start: BeanType, path: FieldPath, chain: Box<[SegmentAccessor]>) -> Self {
        debug_assert_eq!(path.len(), chain.len());
        Self { start, path, chain }
    }

    /// Reads the value at the end of the path, starting from `receiver`.
    ///
    /// # Errors
    ///
    /// - [`AccessError::NullIntermediate`] if a value before the last
    ///   segment is absent.
    /// - [`AccessError::InvocationFailure`] if an accessor fails, including
    ///   when `receiver` is not of the start type.
    pub fn apply<'a>(&self, receiver: &'a dyn Any) -> Result<Option<&'a dyn Any>, AccessError> {
        let Some((last, hops)) = self.chain.split_last() else {
            return Ok(Some(receiver));
        };

        let mut current = receiver;
        for hop in hops {
            current = hop
                .invoke(current)?
                .ok_or_else(|| AccessError::NullIntermediate {
                    path: Box::from(self.path.as_str()),
                    segment: Box::from(hop.segment()),
                    position: hop.position(),
                })?;
        }
        last.invoke(current)
    }

    /// Like [`apply`](Self::apply), then downcasts the value to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::TypeMismatch`] if the value is not a `T`.
    pub fn apply_as<'a, T: Any>(&self, receiver: &'a dyn Any) -> Result<Option<&'a T>, AccessError> {
        match self.apply(receiver)? {
            None => Ok(None),
            Some(value) => value
                .downcast_ref::<T>()
                .map(Some)
                .ok_or_else(|| AccessError::TypeMismatch {
                    path: Box::from(self.path.as_str()),
                    expected: core::any::type_name::<T>(),
                    found: self.value_type().type_path(),
                }),
        }
    }

    /// The bean type the chain starts from.
    #[inline]
    pub fn start_type(&self) -> &BeanType {
        &self.start
    }

    #[inline]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Number of accessors, equal to the number of path segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, SegmentAccessor> {
        self.chain.iter()
    }

    /// The declared result of the last accessor.
    pub fn value_type(&self) -> ValueType {
        match self.chain.last() {
            Some(last) => last.value_type(),
            None => ValueType::leaf::<()>(),
        }
    }
}

impl fmt::Debug for ComposedAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedAccessor")
            .field("start", &self.start)
            .field("path", &self.path)
            .field("chain", &self.chain)
            .finish()
    }
}

impl fmt::Display for ComposedAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in self.chain.iter() {
            if !first {
                f.write_str(" -> ")?;
            }
            first = false;
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}
