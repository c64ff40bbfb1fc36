use core::any::{Any, TypeId};
use core::fmt;

/// The identity of a bean type.
///
/// `path` is the full type path and `name` its last path segment, generic
/// arguments included (`my_app::model::Pair<u8>` -> `Pair<u8>`).
#[derive(Clone, Copy)]
pub struct BeanType {
    id: TypeId,
    path: &'static str,
    name: &'static str,
}

impl BeanType {
    /// Describes `T` with the compiler's type path.
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self::with_path::<T>(core::any::type_name::<T>())
    }

    /// Describes `T` under a caller-chosen type path.
    #[inline]
    pub fn with_path<T: Any + ?Sized>(path: &'static str) -> Self {
        Self::with_path_of(TypeId::of::<T>(), path)
    }

    pub(crate) fn with_path_of(id: TypeId, path: &'static str) -> Self {
        Self {
            id,
            path,
            name: short_name(path),
        }
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        self.path
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this describes `T`.
    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    pub(crate) fn path_ref(&self) -> &&'static str {
        &self.path
    }
}

impl fmt::Debug for BeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for BeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl PartialEq for BeanType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BeanType {}

fn short_name(path: &'static str) -> &'static str {
    let head = match path.find('<') {
        Some(generics) => &path[..generics],
        None => path,
    };
    match head.rfind("::") {
        Some(sep) => &path[sep + 2..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::{BeanType, short_name};

    #[test]
    fn short_name_keeps_generic_arguments() {
        assert_eq!(short_name("app::model::Person"), "Person");
        assert_eq!(short_name("app::Pair<core::option::Option<u8>>"), "Pair<core::option::Option<u8>>");
        assert_eq!(short_name("Plain"), "Plain");
    }

    #[test]
    fn custom_path_keeps_type_id() {
        struct Local;
        let ty = BeanType::with_path::<Local>("demo::Renamed");
        assert!(ty.is::<Local>());
        assert_eq!(ty.path(), "demo::Renamed");
        assert_eq!(ty.name(), "Renamed");
        assert_eq!(ty, BeanType::of::<Local>());
    }
}
