//! Type descriptor normalization.
//!
//! Maps the heterogeneous family of type-name spellings used by different
//! source languages onto the closed [`CanonicalKind`] set. The alias sets
//! are data: adding a spelling is a table change, not a code change.

use crate::core::CanonicalKind;

const STRING_ALIASES: &[&str] = &["String", "str", "string", "char*"];
const INTEGER_ALIASES: &[&str] = &["int", "Integer", "long", "short", "byte", "Long", "number"];
const FLOAT_ALIASES: &[&str] = &["float", "double", "Float", "Double"];
const BOOLEAN_ALIASES: &[&str] = &["boolean", "Boolean", "bool"];

/// Substrings that mark a descriptor as array-shaped. Checked before the
/// scalar alias sets: `int[]` must classify as Array, not Integer.
const ARRAY_MARKERS: &[&str] = &["[]", "List", "Array"];

/// Classify a descriptor. Total: descriptors matching no rule map to
/// `Unknown`, the deliberate permissive fallback.
pub fn normalize(descriptor: &str) -> CanonicalKind {
    if is_array_descriptor(descriptor) {
        return CanonicalKind::Array;
    }
    if STRING_ALIASES.contains(&descriptor) {
        return CanonicalKind::String;
    }
    if INTEGER_ALIASES.contains(&descriptor) {
        return CanonicalKind::Integer;
    }
    if FLOAT_ALIASES.contains(&descriptor) {
        return CanonicalKind::Float;
    }
    if BOOLEAN_ALIASES.contains(&descriptor) {
        return CanonicalKind::Boolean;
    }
    if descriptor.contains("Map") || descriptor.contains("dict") || descriptor == "object" {
        return CanonicalKind::Object;
    }
    CanonicalKind::Unknown
}

pub fn is_array_descriptor(descriptor: &str) -> bool {
    ARRAY_MARKERS.iter().any(|marker| descriptor.contains(marker))
}

/// Strip one array layer off a descriptor: `int[]` -> `int`,
/// `List[str]` -> `str`, `Array<number>` -> `number`, `List<Integer>` ->
/// `Integer`. The strip is textual and lossy when several array markers
/// coexist; the fallback removes the first marker occurrence so that
/// repeated stripping strictly shrinks the descriptor and always
/// terminates on a non-array form.
pub fn element_descriptor(descriptor: &str) -> String {
    if let Some(inner) = descriptor.strip_suffix("[]") {
        return inner.to_string();
    }
    if let Some(inner) = descriptor
        .strip_prefix("List[")
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return inner.to_string();
    }
    if let Some(inner) = descriptor
        .strip_prefix("Array<")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return inner.to_string();
    }
    if let Some(inner) = descriptor
        .strip_prefix("List<")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return inner.to_string();
    }
    for marker in ARRAY_MARKERS {
        if let Some(pos) = descriptor.find(marker) {
            let mut stripped = String::with_capacity(descriptor.len() - marker.len());
            stripped.push_str(&descriptor[..pos]);
            stripped.push_str(&descriptor[pos + marker.len()..]);
            return stripped;
        }
    }
    descriptor.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_aliases_normalize() {
        assert_eq!(normalize("int"), CanonicalKind::Integer);
        assert_eq!(normalize("Long"), CanonicalKind::Integer);
        assert_eq!(normalize("number"), CanonicalKind::Integer);
        assert_eq!(normalize("double"), CanonicalKind::Float);
        assert_eq!(normalize("str"), CanonicalKind::String);
        assert_eq!(normalize("char*"), CanonicalKind::String);
        assert_eq!(normalize("bool"), CanonicalKind::Boolean);
    }

    #[test]
    fn array_markers_take_precedence_over_scalars() {
        assert_eq!(normalize("int[]"), CanonicalKind::Array);
        assert_eq!(normalize("List[str]"), CanonicalKind::Array);
        assert_eq!(normalize("Array<number>"), CanonicalKind::Array);
        assert_eq!(normalize("List<Integer>"), CanonicalKind::Array);
    }

    #[test]
    fn object_spellings_normalize() {
        assert_eq!(normalize("Map<String,Integer>"), CanonicalKind::Object);
        assert_eq!(normalize("dict[str,int]"), CanonicalKind::Object);
        assert_eq!(normalize("object"), CanonicalKind::Object);
    }

    #[test]
    fn unmatched_descriptors_fall_through() {
        assert_eq!(normalize("vector<int>"), CanonicalKind::Unknown);
        assert_eq!(normalize(""), CanonicalKind::Unknown);
        assert_eq!(normalize("TreeNode"), CanonicalKind::Unknown);
    }

    #[test]
    fn element_strip_handles_each_form() {
        assert_eq!(element_descriptor("int[]"), "int");
        assert_eq!(element_descriptor("List[str]"), "str");
        assert_eq!(element_descriptor("Array<number>"), "number");
        assert_eq!(element_descriptor("List<Integer>"), "Integer");
        assert_eq!(element_descriptor("int[][]"), "int[]");
    }

    #[test]
    fn element_strip_always_terminates() {
        // Bare and mangled marker spellings shrink on every pass until no
        // marker remains.
        let mut descriptor = "ListListList".to_string();
        let mut passes = 0;
        while is_array_descriptor(&descriptor) {
            descriptor = element_descriptor(&descriptor);
            passes += 1;
            assert!(passes < 10, "strip failed to terminate");
        }
        assert_eq!(descriptor, "");
    }
}
