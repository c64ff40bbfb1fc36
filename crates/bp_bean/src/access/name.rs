//! Member name comparison.
//!
//! Names compare equal when they agree after lowercasing and removal of
//! `_`, so a path written as `nestedJavaBean` finds `nested_java_bean`.
//! Lowercasing is the full Unicode mapping of [`char::to_lowercase`].

#[inline]
fn folded(name: &str) -> impl DoubleEndedIterator<Item = char> + '_ {
    name.chars().filter(|&c| c != '_').flat_map(char::to_lowercase)
}

/// Returns `true` if `a` and `b` are the same name.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    folded(a).eq(folded(b))
}

/// Returns `true` if `name` ends with `suffix`.
pub(crate) fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    let mut name = folded(name).rev();
    folded(suffix).rev().all(|c| name.next() == Some(c))
}

/// Returns `true` if `name` is empty once `_` is removed.
pub(crate) fn is_blank(name: &str) -> bool {
    folded(name).next().is_none()
}

#[cfg(test)]
mod tests {
    use super::{ends_with_ignore_case, eq_ignore_case, is_blank};

    #[test]
    fn case_and_underscores_are_ignored() {
        assert!(eq_ignore_case("field_a", "fieldA"));
        assert!(eq_ignore_case("FIELDA", "field_a"));
        assert!(!eq_ignore_case("field_a", "field_b"));
        assert!(!eq_ignore_case("field", "field_a"));
    }

    #[test]
    fn suffix_match() {
        assert!(ends_with_ignore_case("get_field_a", "fieldA"));
        assert!(ends_with_ignore_case("nested_java_bean", "BEAN"));
        assert!(ends_with_ignore_case("name", "name"));
        assert!(!ends_with_ignore_case("name", "surname"));
        assert!(!ends_with_ignore_case("field_a", "field"));
    }

    #[test]
    fn non_ascii_names_fold() {
        assert!(eq_ignore_case("größe", "GRÖßE"));
        assert!(eq_ignore_case("Ärger", "ärger"));
        assert!(ends_with_ignore_case("max_größe", "Größe"));
        assert!(ends_with_ignore_case("straße", "ẞE"));
        assert!(!eq_ignore_case("größe", "grösse"));
    }

    #[test]
    fn blank_names() {
        assert!(is_blank("__"));
        assert!(is_blank(""));
        assert!(!is_blank("_a"));
    }
}
