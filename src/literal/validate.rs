//! Literal syntax validation, dispatched over [`CanonicalKind`].
//!
//! All failure paths resolve to a [`ValidationResult`]; this module never
//! panics on caller input, including malformed nested object literals.

use once_cell::sync::Lazy;
use regex::Regex;

use super::descriptor::{element_descriptor, normalize};
use crate::core::{CanonicalKind, ValidationResult};

static INTEGER_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").unwrap());
static FLOAT_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// Check a raw literal against its declared type descriptor.
///
/// Empty literal or descriptor short-circuits to invalid before any
/// normalization runs. Unknown descriptors accept every literal.
pub fn validate(literal: &str, descriptor: &str) -> ValidationResult {
    if literal.is_empty() || descriptor.is_empty() {
        return ValidationResult::invalid("Value and data type must not be empty");
    }

    match normalize(descriptor) {
        CanonicalKind::Array => validate_array(literal, descriptor),
        CanonicalKind::String => validate_string(literal),
        CanonicalKind::Integer => validate_integer(literal),
        CanonicalKind::Float => validate_float(literal),
        CanonicalKind::Boolean => validate_boolean(literal),
        CanonicalKind::Object => validate_object(literal),
        CanonicalKind::Unknown => ValidationResult::valid("Value accepted"),
    }
}

fn validate_array(literal: &str, descriptor: &str) -> ValidationResult {
    if !literal.starts_with('[') || !literal.ends_with(']') || literal.len() < 2 {
        return ValidationResult::invalid("Array literal must be wrapped in square brackets");
    }

    let content = &literal[1..literal.len() - 1];
    if content.trim().is_empty() {
        return ValidationResult::valid("Array literal is valid");
    }

    // Top-level split on every comma, with no bracket or quote depth
    // tracking: elements that themselves contain commas are split apart.
    let element_type = element_descriptor(descriptor);
    for element in content.split(',').map(str::trim) {
        let element_check = validate(element, &element_type);
        if !element_check.is_valid {
            return ValidationResult::invalid(format!(
                "Invalid array element: {}",
                element_check.message
            ));
        }
    }

    ValidationResult::valid("Array literal is valid")
}

fn validate_string(literal: &str) -> ValidationResult {
    let double_quoted = literal.starts_with('"') && literal.ends_with('"');
    let single_quoted = literal.starts_with('\'') && literal.ends_with('\'');
    if literal.len() < 2 || (!double_quoted && !single_quoted) {
        return ValidationResult::invalid(
            "String literal must be wrapped in matching double or single quotes",
        );
    }
    ValidationResult::valid("String literal is valid")
}

fn validate_integer(literal: &str) -> ValidationResult {
    if !INTEGER_LITERAL.is_match(literal) {
        return ValidationResult::invalid("Not a valid integer literal");
    }
    ValidationResult::valid("Integer literal is valid")
}

fn validate_float(literal: &str) -> ValidationResult {
    if !FLOAT_LITERAL.is_match(literal) {
        return ValidationResult::invalid("Not a valid float literal");
    }
    ValidationResult::valid("Float literal is valid")
}

fn validate_boolean(literal: &str) -> ValidationResult {
    if literal != "true" && literal != "false" {
        return ValidationResult::invalid("Boolean literal must be exactly 'true' or 'false'");
    }
    ValidationResult::valid("Boolean literal is valid")
}

fn validate_object(literal: &str) -> ValidationResult {
    if !literal.starts_with('{') || !literal.ends_with('}') || literal.len() < 2 {
        return ValidationResult::invalid("Object literal must be wrapped in curly braces");
    }
    match serde_json::from_str::<serde_json::Value>(literal) {
        Ok(_) => ValidationResult::valid("Object literal is valid"),
        Err(err) => ValidationResult::invalid(format!("Object literal is not well-formed: {err}")),
    }
}
