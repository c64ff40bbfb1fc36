use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bp_utils::TypeIdMap;
use bp_utils::hash::{HashMap, HashSet};

use crate::access::{AccessError, FieldPath, PathResolver};
use crate::info::{BeanInfo, Typed, ValueType};

// -----------------------------------------------------------------------------
// BeanRegistry

/// A store of [`BeanInfo`] by `TypeId`, type path and short type name.
///
/// Registering a bean also registers every bean type reachable through its
/// members.
///
/// # Example
///
/// ```
/// use bp_bean::{Bean, registry::BeanRegistry};
///
/// #[derive(Bean)]
/// struct Engine { power: u32 }
///
/// #[derive(Bean)]
/// struct Car { engine: Engine }
///
/// let mut registry = BeanRegistry::new();
/// registry.register::<Car>();
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.get_with_type_name("Engine").is_some());
/// ```
pub struct BeanRegistry {
    infos: TypeIdMap<&'static BeanInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    pub(crate) auto_register_available: bool,
}

impl Default for BeanRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl BeanRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            infos: TypeIdMap::new(),
            type_path_to_id: HashMap::default(),
            type_name_to_id: HashMap::default(),
            ambiguous_names: HashSet::default(),
            auto_register_available: false,
        }
    }

    fn add_new_type_indices(&mut self, info: &'static BeanInfo) {
        let ty = info.ty();
        let type_name = ty.name();

        if !self.ambiguous_names.contains(type_name) {
            if let Some(other) = self.type_name_to_id.remove(type_name) {
                log::warn!(
                    "bean name `{type_name}` is ambiguous: `{}` and a type registered as {other:?}",
                    ty.path(),
                );
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, ty.id());
            }
        }

        self.type_path_to_id.insert(ty.path(), ty.id());
    }

    /// Registers `T` and the bean types reachable from it.
    #[inline]
    pub fn register<T: Typed>(&mut self) {
        self.register_info(T::bean_info());
    }

    /// Registers a bean by its info, with its dependencies.
    ///
    /// Returns `false` if the type was already registered, in which case
    /// nothing changes.
    pub fn register_info(&mut self, info: &'static BeanInfo) -> bool {
        if !self.infos.try_insert(info.type_id(), || info) {
            return false;
        }
        self.add_new_type_indices(info);
        log::trace!("registered bean `{}`", info.type_path());

        for member in info {
            if let Some(dependency) = member.value_type().bean_info() {
                self.register_info(dependency);
            }
        }
        true
    }

    /// Registers every non-generic bean marked `#[bean(auto_register)]` or
    /// declared with `impl_auto_register!`, with their dependencies.
    ///
    /// Repeated calls are cheap and do not insert duplicates.
    ///
    /// Returns `true` if static registration works on this platform. Always
    /// `false` without the `auto_register` feature.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use core::any::TypeId;
    /// use bp_bean::{Bean, registry::BeanRegistry};
    ///
    /// #[derive(Bean)]
    /// #[bean(auto_register)]
    /// struct Invoice {
    ///     total: u64,
    /// }
    ///
    /// let mut registry = BeanRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Invoice>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(not(feature = "auto_register"))]
        return false;

        #[cfg(feature = "auto_register")]
        {
            if self.auto_register_available {
                return true;
            }
            crate::__macro_exports::auto_register::__register_types(self);
            self.auto_register_available
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.infos.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static BeanInfo> {
        self.infos.get(&type_id).copied()
    }

    /// Looks up a bean by its full type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static BeanInfo> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Looks up a bean by its short type name.
    ///
    /// Returns `None` if the name is unknown or [ambiguous](Self::is_ambiguous).
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static BeanInfo> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if several registered beans have this short name.
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Iterates over the registered beans, in no particular order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static BeanInfo> + '_ {
        self.infos.values().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Checks that `path` resolves on the bean named `type_name`, without
    /// caching anything.
    ///
    /// `type_name` is tried as a full type path first, then as a short name.
    /// Returns the declared type of the value the path yields.
    ///
    /// # Errors
    ///
    /// [`AccessError::UnregisteredType`] if no bean matches `type_name`, or
    /// any resolution error of the path.
    ///
    /// # Example
    ///
    /// ```
    /// use bp_bean::{Bean, access::PathResolver, registry::BeanRegistry};
    ///
    /// #[derive(Bean)]
    /// struct Sensor { reading: Option<f64> }
    ///
    /// let mut registry = BeanRegistry::new();
    /// registry.register::<Sensor>();
    ///
    /// let resolver = PathResolver::default();
    /// let value = registry.validate(&resolver, "Sensor", "reading").unwrap();
    /// assert!(value.is::<f64>() && value.is_nullable());
    ///
    /// assert!(registry.validate(&resolver, "Sensor", "reading.unit").is_err());
    /// assert!(registry.validate(&resolver, "Gauge", "reading").is_err());
    /// ```
    pub fn validate(
        &self,
        resolver: &PathResolver,
        type_name: &str,
        path: &str,
    ) -> Result<ValueType, AccessError> {
        let info = self
            .get_with_type_path(type_name)
            .or_else(|| self.get_with_type_name(type_name))
            .ok_or_else(|| AccessError::UnregisteredType {
                name: Box::from(type_name),
            })?;
        let path = FieldPath::parse(path)?;
        Ok(resolver.build_chain(info, &path)?.value_type())
    }
}

impl fmt::Debug for BeanRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// BeanRegistryArc

/// A shared, lockable [`BeanRegistry`].
#[derive(Clone, Default)]
pub struct BeanRegistryArc {
    pub internal: Arc<RwLock<BeanRegistry>>,
}

impl BeanRegistryArc {
    /// Takes a read lock on the underlying [`BeanRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, BeanRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`BeanRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, BeanRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for BeanRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}
