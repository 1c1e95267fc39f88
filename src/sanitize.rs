//! Recursive payload sanitization.
//!
//! Produces a structural copy of an object-shaped value with null entries
//! dropped and angle brackets stripped out of string leaves. The caller's
//! tree is never mutated or aliased into the result.

use serde_json::{Map, Value};

/// Sanitize a decoded payload. Identity for non-object input; for objects,
/// entries that are null are dropped, string entries lose every `<` and
/// `>`, nested objects are sanitized recursively, and every other value
/// kind (arrays included) passes through unchanged. Idempotent.
pub fn sanitize(value: &Value) -> Value {
    let Value::Object(entries) = value else {
        return value.clone();
    };

    let mut sanitized = Map::with_capacity(entries.len());
    for (key, entry) in entries {
        match entry {
            Value::Null => {}
            Value::String(text) => {
                sanitized.insert(key.clone(), Value::String(text.replace(['<', '>'], "")));
            }
            Value::Object(_) => {
                sanitized.insert(key.clone(), sanitize(entry));
            }
            other => {
                sanitized.insert(key.clone(), other.clone());
            }
        }
    }
    Value::Object(sanitized)
}
