use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::{Any, TypeId};
use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, PoisonError, RwLock};

use bp_utils::TypeIdMap;
use bp_utils::hash::HashMap;

use crate::Bean;
use crate::access::{AccessError, ComposedAccessor, FieldPath, PathResolver, ResolverConfig};
use crate::info::{BeanInfo, Typed};
use crate::registry::BeanRegistry;

type PathTable = RwLock<HashMap<Box<str>, Arc<ComposedAccessor>>>;

// -----------------------------------------------------------------------------
// CacheStats

/// A snapshot of [`AccessorCache`] counters.
///
/// `hits + misses` is the number of accessor lookups. Every miss either
/// fails to resolve or builds an accessor; a build that lost the race to
/// install also counts in `discarded_builds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub builds: u64,
    pub discarded_builds: u64,
    /// Bean types with at least one lookup.
    pub types: usize,
    /// Cached (type, path) pairs.
    pub entries: usize,
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    builds: AtomicU64,
    discarded_builds: AtomicU64,
}

// -----------------------------------------------------------------------------
// AccessorCache

/// A thread-safe memo of composed accessors, keyed by bean type then by path.
///
/// The first request for a (type, path) pair resolves the path and stores
/// the accessor; later requests reuse it. Resolution runs without any lock
/// held. When several threads build the same entry at once, the first
/// install wins and every caller gets that accessor.
///
/// Failed resolutions are not stored. Entries are never evicted, so memory
/// grows with the number of distinct (type, path) pairs requested.
///
/// # Examples
///
/// ```
/// use bp_bean::{Bean, access::AccessorCache};
///
/// #[derive(Bean)]
/// struct Leaf { value: u32 }
///
/// #[derive(Bean)]
/// struct Root { leaf: Option<Leaf> }
///
/// let cache = AccessorCache::new();
/// let root = Root { leaf: Some(Leaf { value: 1 }) };
///
/// assert_eq!(cache.get_field_as::<u32>(&root, "leaf.value").unwrap(), Some(&1));
/// assert_eq!(cache.get_field_as::<u32>(&root, "LEAF.VALUE").unwrap(), Some(&1));
///
/// let empty = Root { leaf: None };
/// assert!(cache.get_field_value(&empty, "leaf.value").is_err());
/// assert!(cache.get_field_value(&empty, "leaf").unwrap().is_none());
///
/// assert_eq!(cache.stats().entries, 3);
/// ```
pub struct AccessorCache {
    resolver: PathResolver,
    types: RwLock<TypeIdMap<Arc<PathTable>>>,
    counters: Counters,
}

impl Default for AccessorCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessorCache {
    /// Creates an empty cache with the default [`ResolverConfig`].
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            resolver: PathResolver::new(config),
            types: RwLock::new(TypeIdMap::new()),
            counters: Counters::default(),
        }
    }

    #[inline]
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Reads the value at `path` from `bean`.
    ///
    /// `Ok(None)` means the last value on the path is absent.
    ///
    /// # Errors
    ///
    /// See [`AccessError`]. Resolution errors are returned the same way on
    /// every call; they are not cached.
    pub fn get_field_value<'a>(
        &self,
        bean: &'a dyn Bean,
        path: &str,
    ) -> Result<Option<&'a dyn Any>, AccessError> {
        let info = bean.reflect_bean_info();
        self.accessor(info, path)?.apply(bean.as_any())
    }

    /// Like [`get_field_value`](Self::get_field_value), then downcasts the
    /// value to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::TypeMismatch`] if the value is not a `T`.
    pub fn get_field_as<'a, T: Any>(
        &self,
        bean: &'a dyn Bean,
        path: &str,
    ) -> Result<Option<&'a T>, AccessError> {
        let info = bean.reflect_bean_info();
        self.accessor(info, path)?.apply_as::<T>(bean.as_any())
    }

    /// Returns the accessor for `path` on the type described by `info`,
    /// building and storing it on first use.
    pub fn accessor(
        &self,
        info: &'static BeanInfo,
        path: &str,
    ) -> Result<Arc<ComposedAccessor>, AccessError> {
        let table = self.table(info.type_id());

        if let Some(found) = table.read().unwrap_or_else(PoisonError::into_inner).get(path) {
            self.counters.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(found.clone());
        }

        self.counters.misses.fetch_add(1, Ordering::Relaxed);
        log::debug!("accessor cache miss: `{}` on `{}`", path, info.type_path());

        let parsed = FieldPath::parse(path)?;
        let built = Arc::new(self.resolver.build_chain(info, &parsed)?);
        self.counters.builds.fetch_add(1, Ordering::Relaxed);

        Ok(self.install(&table, info, path, built))
    }

    /// Resolves and stores `path` for `T` ahead of time.
    pub fn prepare<T: Typed>(&self, path: &str) -> Result<Arc<ComposedAccessor>, AccessError> {
        self.accessor(T::bean_info(), path)
    }

    /// Resolves and stores each of `paths` for every bean in `registry`.
    ///
    /// Pairs that do not resolve are skipped. Returns the number of pairs that
    /// resolved.
    pub fn prepare_all<'p>(
        &self,
        registry: &BeanRegistry,
        paths: impl IntoIterator<Item = &'p str> + Clone,
    ) -> usize {
        let mut resolved = 0;
        for info in registry.iter() {
            for path in paths.clone() {
                match self.accessor(info, path) {
                    Ok(_) => resolved += 1,
                    Err(err) => log::trace!("skip `{path}` on `{}`: {err}", info.type_path()),
                }
            }
        }
        resolved
    }

    /// Returns `true` if an accessor for `path` on `type_id` is stored.
    pub fn contains(&self, type_id: TypeId, path: &str) -> bool {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .is_some_and(|table| {
                table
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .contains_key(path)
            })
    }

    /// Number of stored (type, path) pairs.
    pub fn len(&self) -> usize {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|table| table.read().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let types = self.types.read().unwrap_or_else(PoisonError::into_inner);
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            builds: self.counters.builds.load(Ordering::Relaxed),
            discarded_builds: self.counters.discarded_builds.load(Ordering::Relaxed),
            types: types.len(),
            entries: types
                .values()
                .map(|table| table.read().unwrap_or_else(PoisonError::into_inner).len())
                .sum(),
        }
    }

    #[inline(never)]
    fn table(&self, type_id: TypeId) -> Arc<PathTable> {
        if let Some(table) = self
            .types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            return table.clone();
        }

        self.types
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, Default::default)
            .clone()
    }

    #[inline(never)]
    fn install(
        &self,
        table: &PathTable,
        info: &'static BeanInfo,
        path: &str,
        built: Arc<ComposedAccessor>,
    ) -> Arc<ComposedAccessor> {
        let mut table = table.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = table.get(path) {
            self.counters.discarded_builds.fetch_add(1, Ordering::Relaxed);
            log::debug!(
                "accessor for `{}` on `{}` already installed, discarding ours",
                path,
                info.type_path(),
            );
            return existing.clone();
        }

        log::debug!("installed accessor `{}` on `{}`: {built}", path, info.type_path());
        table.insert(Box::from(path), built.clone());
        built
    }
}

// -----------------------------------------------------------------------------
// Global

static GLOBAL: LazyLock<AccessorCache> = LazyLock::new(AccessorCache::new);

/// The process-wide cache behind [`get_field_value`].
///
/// Prefer owning an [`AccessorCache`] where one can be passed around; the
/// global one uses the default [`ResolverConfig`] and is never cleared.
#[inline]
pub fn global() -> &'static AccessorCache {
    &GLOBAL
}

/// Reads the value at `path` from `bean` through the [`global`] cache.
///
/// ```
/// use bp_bean::{Bean, get_field_value};
///
/// #[derive(Bean)]
/// struct Flag { enabled: bool }
///
/// let flag = Flag { enabled: true };
/// let value = get_field_value(&flag, "enabled").unwrap().unwrap();
/// assert_eq!(value.downcast_ref::<bool>(), Some(&true));
/// ```
#[inline]
pub fn get_field_value<'a>(
    bean: &'a dyn Bean,
    path: &str,
) -> Result<Option<&'a dyn Any>, AccessError> {
    GLOBAL.get_field_value(bean, path)
}

#[cfg(test)]
mod tests {
    use super::{AccessorCache, CacheStats};
    use crate::access::AccessError;
    use crate::info::Typed;
    use crate::{Bean, get_field_value};
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::any::TypeId;
    use std::sync::Barrier;
    use std::thread;

    #[derive(Bean)]
    struct NestedJavaBean {
        field_a: String,
        nested_java_bean: Option<Box<NestedJavaBean>>,
    }

    #[derive(Bean)]
    struct JavaBean {
        field_a: String,
        nested_java_bean: Option<Box<NestedJavaBean>>,
    }

    fn nested(field_a: &str, next: Option<NestedJavaBean>) -> NestedJavaBean {
        NestedJavaBean {
            field_a: String::from(field_a),
            nested_java_bean: next.map(Box::new),
        }
    }

    fn java_bean() -> JavaBean {
        let third = nested("nested-3", None);
        let second = nested("nested-2", Some(third));
        let first = nested("nested-1", Some(second));
        JavaBean {
            field_a: String::from("fieldA"),
            nested_java_bean: Some(Box::new(first)),
        }
    }

    fn read<'a>(cache: &AccessorCache, bean: &'a dyn Bean, path: &str) -> Option<&'a String> {
        cache.get_field_as::<String>(bean, path).unwrap()
    }

    #[test]
    fn reads_flat_and_nested() {
        let cache = AccessorCache::new();
        let bean = java_bean();

        assert_eq!(read(&cache, &bean, "fieldA").unwrap(), "fieldA");
        assert_eq!(read(&cache, &bean, "nestedJavaBean.fieldA").unwrap(), "nested-1");
        assert_eq!(
            read(&cache, &bean, "nestedJavaBean.nestedJavaBean.fieldA").unwrap(),
            "nested-2"
        );
        assert_eq!(
            read(&cache, &bean, "nestedJavaBean.nestedJavaBean.nestedJavaBean.fieldA").unwrap(),
            "nested-3"
        );
    }

    #[test]
    fn results_point_into_the_bean() {
        let cache = AccessorCache::new();
        let bean = java_bean();
        let value = read(&cache, &bean, "field_a").unwrap();
        assert!(core::ptr::eq(value, &bean.field_a));
    }

    #[test]
    fn second_read_reuses_the_accessor() {
        let cache = AccessorCache::new();
        let info = JavaBean::bean_info();

        let first = cache.accessor(info, "nestedJavaBean.fieldA").unwrap();
        let second = cache.accessor(info, "nestedJavaBean.fieldA").unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                builds: 1,
                discarded_builds: 0,
                types: 1,
                entries: 1,
            }
        );
    }

    #[test]
    fn entries_are_per_type() {
        let cache = AccessorCache::new();
        let outer = java_bean();
        let inner = nested("inner", None);

        assert_eq!(read(&cache, &outer, "fieldA").unwrap(), "fieldA");
        assert_eq!(read(&cache, &inner, "fieldA").unwrap(), "inner");

        assert!(cache.contains(TypeId::of::<JavaBean>(), "fieldA"));
        assert!(cache.contains(TypeId::of::<NestedJavaBean>(), "fieldA"));
        assert_eq!(cache.stats().types, 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn absent_values() {
        let cache = AccessorCache::new();
        let bean = JavaBean {
            field_a: String::new(),
            nested_java_bean: None,
        };

        assert!(cache.get_field_value(&bean, "nestedJavaBean").unwrap().is_none());

        match cache.get_field_value(&bean, "nestedJavaBean.fieldA") {
            Err(AccessError::NullIntermediate { path, segment, position }) => {
                assert_eq!(&*path, "nestedJavaBean.fieldA");
                assert_eq!(&*segment, "nestedJavaBean");
                assert_eq!(position, 0);
            }
            other => panic!("expected a null intermediate, got {other:?}"),
        }

        // The accessor itself was fine and stays cached.
        assert!(cache.contains(TypeId::of::<JavaBean>(), "nestedJavaBean.fieldA"));
    }

    #[test]
    fn failed_resolution_is_not_cached() {
        let cache = AccessorCache::new();
        let bean = java_bean();

        for _ in 0..2 {
            assert!(matches!(
                cache.get_field_value(&bean, "fieldA.missing"),
                Err(AccessError::UnresolvableSegment { position: 1, .. })
            ));
            assert!(matches!(
                cache.get_field_value(&bean, "a..b"),
                Err(AccessError::MalformedPath { .. })
            ));
        }

        let stats = cache.stats();
        assert_eq!(stats.misses, 4);
        assert_eq!(stats.builds, 0);
        assert_eq!(stats.entries, 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn type_mismatch_names_both_types() {
        let cache = AccessorCache::new();
        let bean = java_bean();

        match cache.get_field_as::<u32>(&bean, "fieldA") {
            Err(AccessError::TypeMismatch { expected, found, .. }) => {
                assert_eq!(expected, "u32");
                assert_eq!(found, core::any::type_name::<String>());
            }
            other => panic!("expected a type mismatch, got {other:?}"),
        }
    }

    #[test]
    fn prepare_installs_ahead_of_reads() {
        let cache = AccessorCache::new();
        let prepared = cache.prepare::<JavaBean>("nestedJavaBean.fieldA").unwrap();
        assert_eq!(prepared.len(), 2);

        let bean = java_bean();
        assert_eq!(read(&cache, &bean, "nestedJavaBean.fieldA").unwrap(), "nested-1");
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn concurrent_builds_converge_on_one_accessor() {
        const THREADS: usize = 8;

        let cache = AccessorCache::new();
        let barrier = Barrier::new(THREADS);
        let path = "nestedJavaBean.nestedJavaBean.fieldA";

        let accessors: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        cache.accessor(JavaBean::bean_info(), path).unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let first = &accessors[0];
        assert!(accessors.iter().all(|a| Arc::ptr_eq(a, first)));

        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hits + stats.misses, THREADS as u64);
        assert_eq!(stats.builds, stats.misses);
        assert_eq!(stats.builds - stats.discarded_builds, 1);
    }

    #[test]
    fn concurrent_reads_agree() {
        let cache = AccessorCache::new();
        let bean = java_bean();

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        let value = read(&cache, &bean, "nestedJavaBean.nestedJavaBean.fieldA");
                        assert_eq!(value.unwrap(), "nested-2");
                    }
                });
            }
        });

        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn earliest_declared_suffix_match_wins() {
        #[derive(Bean)]
        struct Author {
            surname: String,
            name: String,
        }

        let author = Author {
            surname: String::from("Lovelace"),
            name: String::from("Ada"),
        };

        let cache = AccessorCache::new();
        assert_eq!(read(&cache, &author, "name").unwrap(), "Lovelace");
        assert_eq!(read(&cache, &author, "surname").unwrap(), "Lovelace");

        let value = get_field_value(&author, "name").unwrap().unwrap();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "Lovelace");
    }

    #[test]
    fn global_cache() {
        let bean = java_bean();
        let value = get_field_value(&bean, "nestedJavaBean.fieldA").unwrap().unwrap();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "nested-1");
        assert!(super::global().contains(TypeId::of::<JavaBean>(), "nestedJavaBean.fieldA"));
    }
}
