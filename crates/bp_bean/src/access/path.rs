use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::access::name;
use crate::access::{AccessError, MalformedReason};

/// A parsed dot-separated field path, such as `nested.field_a`.
///
/// Every segment is non-empty and contains at least one character other
/// than `_`. Segments are not otherwise restricted: whether a segment names
/// anything is decided against a concrete type at resolution.
///
/// # Examples
///
/// ```
/// use bp_bean::access::FieldPath;
///
/// let path = FieldPath::parse("nestedBean.fieldA").unwrap();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.segment(1), Some("fieldA"));
/// assert_eq!(path.to_string(), "nestedBean.fieldA");
///
/// assert!(FieldPath::parse("a..b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: Box<str>,
    spans: Box<[Range<usize>]>,
}

impl FieldPath {
    /// Splits `path` on `.`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::MalformedPath`] for an empty path, an empty
    /// segment, or a segment made only of `_`.
    pub fn parse(path: &str) -> Result<Self, AccessError> {
        let malformed = |offset, reason| AccessError::MalformedPath {
            path: Box::from(path),
            offset,
            reason,
        };

        if path.is_empty() {
            return Err(malformed(0, MalformedReason::EmptyPath));
        }

        let mut spans = Vec::new();
        let mut start = 0;
        for segment in path.split('.') {
            let end = start + segment.len();
            if segment.is_empty() {
                return Err(malformed(start, MalformedReason::EmptySegment));
            }
            if name::is_blank(segment) {
                return Err(malformed(start, MalformedReason::BlankSegment));
            }
            spans.push(start..end);
            start = end + 1;
        }

        Ok(Self {
            raw: Box::from(path),
            spans: spans.into_boxed_slice(),
        })
    }

    /// The path as written.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of segments, at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    pub fn segment(&self, position: usize) -> Option<&str> {
        self.spans.get(position).map(|span| &self.raw[span.clone()])
    }

    /// Byte offset of a segment in the path.
    #[inline]
    pub fn offset(&self, position: usize) -> Option<usize> {
        self.spans.get(position).map(|span| span.start)
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.spans.iter().map(|span| &self.raw[span.clone()])
    }
}

impl fmt::Debug for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.segments()).finish()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl core::str::FromStr for FieldPath {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldPath;
    use crate::access::{AccessError, MalformedReason};
    use alloc::vec::Vec;

    fn reason(path: &str) -> (usize, MalformedReason) {
        match FieldPath::parse(path) {
            Err(AccessError::MalformedPath { offset, reason, .. }) => (offset, reason),
            other => panic!("expected a malformed path, got {other:?}"),
        }
    }

    #[test]
    fn splits_on_dots() {
        let path = FieldPath::parse("a.bb.ccc").unwrap();
        assert_eq!(path.segments().collect::<Vec<_>>(), ["a", "bb", "ccc"]);
        assert_eq!(path.offset(2), Some(5));
        assert_eq!(path.segment(3), None);
    }

    #[test]
    fn single_segment() {
        let path = FieldPath::parse("fieldA").unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.as_str(), "fieldA");
    }

    #[test]
    fn rejects_empty_segments() {
        assert_eq!(reason(""), (0, MalformedReason::EmptyPath));
        assert_eq!(reason(".a"), (0, MalformedReason::EmptySegment));
        assert_eq!(reason("a..b"), (2, MalformedReason::EmptySegment));
        assert_eq!(reason("a.b."), (4, MalformedReason::EmptySegment));
        assert_eq!(reason("a.__"), (2, MalformedReason::BlankSegment));
    }
}
