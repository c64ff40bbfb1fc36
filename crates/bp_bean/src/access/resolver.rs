use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use crate::access::name;
use crate::access::{AccessError, ComposedAccessor, FieldPath, SegmentAccessor};
use crate::info::{BeanInfo, GetterInfo, MemberKind};

// -----------------------------------------------------------------------------
// Config

/// Which member wins when several match a segment.
///
/// A member matches a segment when its name ends with the segment, ignoring
/// case and `_`. It matches exactly when the names are equal after a
/// getter prefix is stripped from a method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchPolicy {
    /// The first match in declaration order, even when a later member
    /// matches exactly.
    #[default]
    FirstSuffix,
    /// An exact match if there is one, else the first match in declaration
    /// order.
    PreferExact,
    /// An exact match if there is one, else the only match. Several inexact
    /// matches are an [`AccessError::AmbiguousSegment`].
    Unique,
}

/// Settings of a [`PathResolver`].
///
/// # Examples
///
/// ```
/// use bp_bean::access::{MatchPolicy, ResolverConfig};
///
/// let config = ResolverConfig::default()
///     .with_match_policy(MatchPolicy::Unique)
///     .with_getter_prefixes(["get_", "is_", "has_"]);
/// assert_eq!(config.getter_prefixes.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// A method takes part in resolution only when its name starts with one
    /// of these. Fields always take part. Default: `get_`, `is_`.
    pub getter_prefixes: Vec<Cow<'static, str>>,
    /// Default: [`MatchPolicy::FirstSuffix`].
    pub match_policy: MatchPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            getter_prefixes: vec![Cow::Borrowed("get_"), Cow::Borrowed("is_")],
            match_policy: MatchPolicy::default(),
        }
    }
}

impl ResolverConfig {
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    pub fn with_getter_prefixes<I, P>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Cow<'static, str>>,
    {
        self.getter_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }
}

// -----------------------------------------------------------------------------
// PathResolver

/// Turns a [`FieldPath`] into a [`ComposedAccessor`] for a bean type.
///
/// Resolution reads only static type information. Whether a value is absent
/// at run time is not known here, so a nullable member is followed like any
/// other.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    config: ResolverConfig,
}

impl PathResolver {
    #[inline]
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves every segment of `path`, starting at `start`.
    ///
    /// # Errors
    ///
    /// - [`AccessError::UnresolvableSegment`] if a segment matches nothing,
    ///   or follows a value that is not a bean.
    /// - [`AccessError::AmbiguousSegment`] under [`MatchPolicy::Unique`].
    pub fn build_chain(
        &self,
        start: &'static BeanInfo,
        path: &FieldPath,
    ) -> Result<ComposedAccessor, AccessError> {
        let mut chain = Vec::with_capacity(path.len());
        let mut current = Some(start);
        let mut reached = start.type_path();

        for (position, segment) in path.segments().enumerate() {
            let Some(info) = current else {
                return Err(AccessError::UnresolvableSegment {
                    type_path: reached,
                    segment: Box::from(segment),
                    position,
                });
            };

            let member = self.resolve_segment(info, segment, position)?;
            log::trace!(
                "`{}`: segment `{segment}` -> `{}`",
                info.type_path(),
                member.name(),
            );
            chain.push(SegmentAccessor::new(info, member, segment, position));

            let value_type = member.value_type();
            current = value_type.bean_info();
            reached = match current {
                Some(next) => next.type_path(),
                None => value_type.type_path(),
            };
        }

        Ok(ComposedAccessor::new(
            *start.ty(),
            path.clone(),
            chain.into_boxed_slice(),
        ))
    }

    /// Selects the member of `info` that `segment` names.
    ///
    /// `position` is only used for error reporting.
    pub fn resolve_segment(
        &self,
        info: &'static BeanInfo,
        segment: &str,
        position: usize,
    ) -> Result<&'static GetterInfo, AccessError> {
        let mut candidates = info
            .iter()
            .filter(|member| self.is_readable(member))
            .filter(|member| name::ends_with_ignore_case(member.name(), segment));

        let selected = match self.config.match_policy {
            MatchPolicy::FirstSuffix => candidates.next(),
            MatchPolicy::PreferExact => {
                let mut first = None;
                for member in candidates {
                    if self.is_exact(member, segment) {
                        return Ok(member);
                    }
                    first.get_or_insert(member);
                }
                first
            }
            MatchPolicy::Unique => {
                let all: Vec<_> = candidates.collect();
                if let Some(exact) = all.iter().copied().find(|member| self.is_exact(member, segment)) {
                    return Ok(exact);
                }
                if all.len() > 1 {
                    return Err(AccessError::AmbiguousSegment {
                        type_path: info.type_path(),
                        segment: Box::from(segment),
                        position,
                        candidates: all.iter().map(|member| member.name()).collect(),
                    });
                }
                all.first().copied()
            }
        };

        selected.ok_or_else(|| AccessError::UnresolvableSegment {
            type_path: info.type_path(),
            segment: Box::from(segment),
            position,
        })
    }

    /// Fields always, methods with a getter prefix, never introspection.
    fn is_readable(&self, member: &GetterInfo) -> bool {
        match member.kind() {
            MemberKind::Field => true,
            MemberKind::Method => self.getter_prefix(member.name()).is_some(),
            MemberKind::Introspection => false,
        }
    }

    fn is_exact(&self, member: &GetterInfo, segment: &str) -> bool {
        let name = match member.kind() {
            MemberKind::Method => self
                .getter_prefix(member.name())
                .map_or(member.name(), |prefix| &member.name()[prefix.len()..]),
            _ => member.name(),
        };
        name::eq_ignore_case(name, segment)
    }

    fn getter_prefix(&self, name: &str) -> Option<&str> {
        self.config
            .getter_prefixes
            .iter()
            .map(|prefix| &**prefix)
            .find(|prefix| name.starts_with(prefix))
    }
}
