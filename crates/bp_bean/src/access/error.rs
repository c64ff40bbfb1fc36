use alloc::boxed::Box;
use core::fmt;

use thiserror::Error;

use crate::info::GetterError;

/// Why a path string was rejected before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The path is the empty string.
    EmptyPath,
    /// Two dots in a row, or a leading or trailing dot.
    EmptySegment,
    /// A segment made of `_` only.
    BlankSegment,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EmptyPath => "path is empty",
            Self::EmptySegment => "empty segment",
            Self::BlankSegment => "segment has no name characters",
        })
    }
}

/// An error from reading a value by path.
///
/// Errors raised while building an accessor are never cached: the same
/// request is resolved again next time and fails the same way.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AccessError {
    /// The path string is not a dot-separated list of names.
    #[error("malformed path `{path}` at offset {offset}: {reason}")]
    MalformedPath {
        path: Box<str>,
        offset: usize,
        reason: MalformedReason,
    },
    /// No readable member of `type_path` matches the segment, or the value
    /// reached before it is not a bean.
    #[error("segment `{segment}` (#{position}) does not match any accessor of `{type_path}`")]
    UnresolvableSegment {
        type_path: &'static str,
        segment: Box<str>,
        position: usize,
    },
    /// Several members match and the resolver is configured to refuse
    /// guessing.
    #[error("segment `{segment}` (#{position}) is ambiguous on `{type_path}`: {candidates:?}")]
    AmbiguousSegment {
        type_path: &'static str,
        segment: Box<str>,
        position: usize,
        candidates: Box<[&'static str]>,
    },
    /// A value before the last segment is absent.
    #[error("`{segment}` (#{position}) is absent while reading `{path}`")]
    NullIntermediate {
        path: Box<str>,
        segment: Box<str>,
        position: usize,
    },
    /// An accessor call failed.
    #[error("accessor `{type_path}::{accessor}` failed")]
    InvocationFailure {
        type_path: &'static str,
        accessor: &'static str,
        source: GetterError,
    },
    /// The value exists but is not of the requested type.
    #[error("`{path}` yields `{found}`, not `{expected}`")]
    TypeMismatch {
        path: Box<str>,
        expected: &'static str,
        found: &'static str,
    },
    /// No registered bean has this type path or name.
    #[error("no bean registered as `{name}`")]
    UnregisteredType { name: Box<str> },
}

impl AccessError {
    /// Returns `true` for errors raised while turning a path into an accessor,
    /// as opposed to errors raised while reading a particular value.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedPath { .. }
                | Self::UnresolvableSegment { .. }
                | Self::AmbiguousSegment { .. }
                | Self::UnregisteredType { .. }
        )
    }
}
