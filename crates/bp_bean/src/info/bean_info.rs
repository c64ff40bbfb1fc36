use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::TypeId;

use bp_utils::hash::HashMap;

use crate::access::name;
use crate::info::{BeanType, GetterInfo, MemberKind, Typed};

/// The static description of a bean type: its identity and its read
/// accessors in declaration order.
///
/// An introspection member named [`GetterInfo::INTROSPECTION_NAME`] is always
/// appended last. It reports the type path and is never selected by path
/// resolution.
///
/// # Panics
///
/// [`BeanInfo::new`] panics when two members have the same name once
/// case and `_` are ignored (`fieldA` and `field_a`). `#[derive(Bean)]`
/// reports the same condition at compile time.
///
/// # Examples
///
/// ```
/// use bp_bean::{Bean, info::{MemberKind, Typed}};
///
/// #[derive(Bean)]
/// struct Order {
///     id: u64,
///     note: String,
/// }
///
/// let info = Order::bean_info();
/// assert_eq!(info.type_name(), "Order");
///
/// let names: Vec<_> = info.iter().map(|m| m.name()).collect();
/// assert_eq!(names, ["id", "note", "type_path"]);
/// assert_eq!(info.member("note").unwrap().kind(), MemberKind::Field);
/// ```
#[derive(Debug)]
pub struct BeanInfo {
    ty: BeanType,
    members: Box<[GetterInfo]>,
    index: HashMap<&'static str, usize>,
}

impl BeanInfo {
    /// Creates the description of `T`.
    pub fn new<T: Typed>(members: impl IntoIterator<Item = GetterInfo>) -> Self {
        let ty = BeanType::of::<T>();
        let mut members: Vec<GetterInfo> = members.into_iter().collect();

        for (index, member) in members.iter().enumerate() {
            if let Some(other) = members[..index]
                .iter()
                .find(|other| name::eq_ignore_case(other.name(), member.name()))
            {
                panic!(
                    "`{}` declares members `{}` and `{}` that differ only by case or `_`",
                    ty.path(),
                    other.name(),
                    member.name(),
                );
            }
        }

        let index = members
            .iter()
            .enumerate()
            .map(|(index, member)| (member.name(), index))
            .collect();

        members.push(GetterInfo::introspection::<T>());

        Self {
            ty,
            members: members.into_boxed_slice(),
            index,
        }
    }

    /// Replaces the compiler's type path with `path`.
    pub fn with_type_path(mut self, path: &'static str) -> Self {
        self.ty = BeanType::with_path_of(self.ty.id(), path);
        self
    }

    #[inline]
    pub fn ty(&self) -> &BeanType {
        &self.ty
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.ty.id()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty.name()
    }

    /// Looks up a declared member by its exact name.
    ///
    /// The introspection member is not indexed.
    pub fn member(&self, name: &str) -> Option<&GetterInfo> {
        self.index.get(name).map(|&index| &self.members[index])
    }

    #[inline]
    pub fn member_at(&self, index: usize) -> Option<&GetterInfo> {
        self.members.get(index)
    }

    /// Iterates over all members in declaration order, introspection last.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, GetterInfo> {
        self.members.iter()
    }

    /// Number of members, introspection included.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns the introspection member.
    pub fn introspection(&self) -> Option<&GetterInfo> {
        self.members
            .last()
            .filter(|member| member.kind() == MemberKind::Introspection)
    }
}

impl<'a> IntoIterator for &'a BeanInfo {
    type Item = &'a GetterInfo;
    type IntoIter = core::slice::Iter<'a, GetterInfo>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::impls::BeanInfoCell;
    use crate::info::{BeanInfo, GetterInfo, MemberKind, Typed};
    use alloc::string::String;

    struct Clash {
        field_a: u8,
        field_b: String,
    }

    impl Typed for Clash {
        fn bean_info() -> &'static BeanInfo {
            static CELL: BeanInfoCell = BeanInfoCell::new();
            CELL.get_or_init(|| {
                BeanInfo::new::<Self>([
                    GetterInfo::field::<Self, u8>("field_a", |c| &c.field_a),
                    GetterInfo::field::<Self, String>("fieldB", |c| &c.field_b),
                ])
            })
        }
    }

    #[test]
    fn introspection_is_appended() {
        let info = Clash::bean_info();
        assert_eq!(info.len(), 3);

        let last = info.introspection().unwrap();
        assert_eq!(last.kind(), MemberKind::Introspection);
        assert!(info.member(GetterInfo::INTROSPECTION_NAME).is_none());

        let clash = Clash { field_a: 0, field_b: String::new() };
        let path = last.getter().invoke(&clash).unwrap().unwrap();
        assert_eq!(path.downcast_ref::<&'static str>(), Some(&info.type_path()));
    }

    #[test]
    #[should_panic(expected = "differ only by case")]
    fn normalized_collision_panics() {
        struct Twice {
            a: u8,
        }
        impl Typed for Twice {
            fn bean_info() -> &'static BeanInfo {
                unreachable!()
            }
        }
        BeanInfo::new::<Twice>([
            GetterInfo::field::<Twice, u8>("field_a", |t| &t.a),
            GetterInfo::field::<Twice, u8>("FieldA", |t| &t.a),
        ]);
    }

    #[test]
    fn custom_type_path() {
        struct Renamed;
        impl Typed for Renamed {
            fn bean_info() -> &'static BeanInfo {
                unreachable!()
            }
        }
        let info = BeanInfo::new::<Renamed>([]).with_type_path("demo::Alias");
        assert_eq!(info.type_path(), "demo::Alias");
        assert_eq!(info.type_name(), "Alias");
        assert!(info.ty().is::<Renamed>());
    }
}
