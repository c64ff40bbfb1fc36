use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::access::AccessError;
use crate::info::{BeanInfo, Getter, GetterInfo, MemberKind, ValueType};

/// The accessor selected for one path segment.
///
/// Holds a clone of the member's [`Getter`] together with enough context to
/// report failures against the path the caller wrote.
#[derive(Clone)]
pub struct SegmentAccessor {
    getter: Getter,
    owner: &'static str,
    member: &'static str,
    kind: MemberKind,
    value_type: ValueType,
    segment: Box<str>,
    position: usize,
}

impl SegmentAccessor {
    pub(crate) fn new(
        owner: &'static BeanInfo,
        member: &'static GetterInfo,
        segment: &str,
        position: usize,
    ) -> Self {
        Self {
            getter: member.getter().clone(),
            owner: owner.type_path(),
            member: member.name(),
            kind: member.kind(),
            value_type: member.value_type(),
            segment: Box::from(segment),
            position,
        }
    }

    /// Calls the accessor on `receiver`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::InvocationFailure`] if the call fails.
    #[inline]
    pub fn invoke<'a>(&self, receiver: &'a dyn Any) -> Result<Option<&'a dyn Any>, AccessError> {
        self.getter
            .invoke(receiver)
            .map_err(|source| AccessError::InvocationFailure {
                type_path: self.owner,
                accessor: self.member,
                source,
            })
    }

    /// Type path of the bean declaring the member.
    #[inline]
    pub fn owner_type_path(&self) -> &'static str {
        self.owner
    }

    #[inline]
    pub fn member_name(&self) -> &'static str {
        self.member
    }

    #[inline]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    #[inline]
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The path segment as written.
    #[inline]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Debug for SegmentAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentAccessor")
            .field("owner", &self.owner)
            .field("member", &self.member)
            .field("segment", &self.segment)
            .field("position", &self.position)
            .finish()
    }
}

impl fmt::Display for SegmentAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.owner, self.member)
    }
}
