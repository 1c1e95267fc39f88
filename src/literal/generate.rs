//! Example literal generation, the mirror of validation.
//!
//! Deterministic by contract: the same descriptor always yields
//! byte-identical output, so generated literals are safe to embed in
//! documentation and snapshots.

use super::descriptor::{element_descriptor, normalize};
use crate::core::CanonicalKind;

/// Produce a syntactically valid example literal for a descriptor.
/// Array descriptors yield exactly two recursively generated elements;
/// unknown descriptors yield the empty string.
pub fn example(descriptor: &str) -> String {
    if descriptor.is_empty() {
        return String::new();
    }

    match normalize(descriptor) {
        CanonicalKind::Array => {
            let element = example(&element_descriptor(descriptor));
            format!("[{element}, {element}]")
        }
        CanonicalKind::String => "\"example\"".to_string(),
        CanonicalKind::Integer => "42".to_string(),
        CanonicalKind::Float => "3.14".to_string(),
        CanonicalKind::Boolean => "true".to_string(),
        CanonicalKind::Object => "{\"key\": \"value\"}".to_string(),
        CanonicalKind::Unknown => String::new(),
    }
}
