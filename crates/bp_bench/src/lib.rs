//! Demo beans shaped like a typical configuration object: a top-level bean
//! holding a chain of nested beans of one self-referential type.

use bp_bean::Bean;

/// Paths read by the benchmarks, one per nesting depth.
pub const PATHS: [&str; 4] = [
    "fieldA",
    "nestedJavaBean.fieldA",
    "nestedJavaBean.nestedJavaBean.fieldA",
    "nestedJavaBean.nestedJavaBean.nestedJavaBean.fieldA",
];

#[derive(Bean, Debug, Clone, PartialEq, Eq, Default)]
#[bean(auto_register)]
pub struct JavaBean {
    pub field_a: String,
    pub nested_java_bean: Option<Box<NestedJavaBean>>,
}

#[derive(Bean, Debug, Clone, PartialEq, Eq, Default)]
#[bean(auto_register)]
pub struct NestedJavaBean {
    pub field_a: String,
    pub nested_java_bean: Option<Box<NestedJavaBean>>,
}

impl NestedJavaBean {
    pub fn new(field_a: impl Into<String>) -> Self {
        Self {
            field_a: field_a.into(),
            nested_java_bean: None,
        }
    }

    pub fn with_nested(mut self, nested: NestedJavaBean) -> Self {
        self.nested_java_bean = Some(Box::new(nested));
        self
    }
}

/// A `JavaBean` with three nested levels, `nested-1` to `nested-3`.
pub fn sample() -> JavaBean {
    let third = NestedJavaBean::new("nested-3");
    let second = NestedJavaBean::new("nested-2").with_nested(third);
    let first = NestedJavaBean::new("nested-1").with_nested(second);
    JavaBean {
        field_a: String::from("fieldA"),
        nested_java_bean: Some(Box::new(first)),
    }
}

#[cfg(test)]
mod tests {
    use super::{PATHS, sample};
    use bp_bean::access::AccessorCache;

    #[test]
    fn every_path_reads_its_level() {
        let cache = AccessorCache::new();
        let bean = sample();
        let expected = ["fieldA", "nested-1", "nested-2", "nested-3"];

        for (path, expected) in PATHS.iter().zip(expected) {
            let value = cache.get_field_as::<String>(&bean, path).unwrap();
            assert_eq!(value.map(String::as_str), Some(expected));
        }
        assert_eq!(cache.len(), PATHS.len());
    }
}
