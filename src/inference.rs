//! Value-shape type inference.
//!
//! Classifies already-decoded values by their runtime shape, independent
//! of any declared descriptor, and aggregates tags across a collection of
//! test-case records.

use im::HashSet;
use log::debug;
use serde_json::Value;

use crate::core::{TestCaseRecord, TypeTag};

/// Whether a JSON number carries an integral value. `3.0` counts: the
/// distinction is by value, not by how the literal was written.
pub(crate) fn is_integral(n: &serde_json::Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
}

/// Infer a semantic tag from the shape of a decoded value. Numbers with
/// an integral value are `Integer`, all other numbers `Float`.
pub fn infer_tag(value: &Value) -> TypeTag {
    match value {
        Value::Array(_) => TypeTag::Array,
        Value::String(_) => TypeTag::String,
        Value::Number(n) => {
            if is_integral(n) {
                TypeTag::Integer
            } else {
                TypeTag::Float
            }
        }
        Value::Bool(_) => TypeTag::Boolean,
        Value::Null => TypeTag::Null,
        Value::Object(_) => TypeTag::Object,
    }
}

/// Union the inferred tags of every input element and expected output
/// across a collection of records.
///
/// Each record's `input_data` is expected to decode to a JSON array of
/// `{input, dataType}` items and its `expected_output_data` to a
/// `{expectedOutput, dataType}` object. Malformed encodings are skipped,
/// not reported: callers needing per-record diagnostics must re-decode
/// themselves.
pub fn collect_type_tags(records: &[TestCaseRecord]) -> HashSet<TypeTag> {
    let mut tags = HashSet::new();

    for record in records {
        if let Some(encoded) = record.input_data.as_deref() {
            match serde_json::from_str::<Value>(encoded) {
                Ok(Value::Array(items)) => {
                    for item in &items {
                        if let Some(input) = item.get("input") {
                            tags.insert(infer_tag(input));
                        }
                    }
                }
                Ok(_) => {}
                Err(err) => debug!("skipping malformed input payload: {err}"),
            }
        }

        if let Some(encoded) = record.expected_output_data.as_deref() {
            match serde_json::from_str::<Value>(encoded) {
                Ok(output) => {
                    if let Some(expected) = output.get("expectedOutput") {
                        tags.insert(infer_tag(expected));
                    }
                }
                Err(err) => debug!("skipping malformed output payload: {err}"),
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(input_data: &str, expected_output_data: &str) -> TestCaseRecord {
        TestCaseRecord {
            input_data: Some(input_data.to_string()),
            expected_output_data: Some(expected_output_data.to_string()),
            ..TestCaseRecord::empty()
        }
    }

    #[test]
    fn tags_follow_value_shape() {
        assert_eq!(infer_tag(&json!([1, 2])), TypeTag::Array);
        assert_eq!(infer_tag(&json!("hi")), TypeTag::String);
        assert_eq!(infer_tag(&json!(3)), TypeTag::Integer);
        assert_eq!(infer_tag(&json!(3.5)), TypeTag::Float);
        assert_eq!(infer_tag(&json!(3.0)), TypeTag::Integer);
        assert_eq!(infer_tag(&json!(true)), TypeTag::Boolean);
        assert_eq!(infer_tag(&Value::Null), TypeTag::Null);
        assert_eq!(infer_tag(&json!({"k": 1})), TypeTag::Object);
    }

    #[test]
    fn collects_input_and_output_tags() {
        let records = vec![record(
            r#"[{"input": 5, "dataType": "int"}]"#,
            r#"{"expectedOutput": "five", "dataType": "String"}"#,
        )];

        let tags = collect_type_tags(&records);
        let expected: HashSet<TypeTag> = [TypeTag::Integer, TypeTag::String].into_iter().collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn explicit_null_input_contributes_null_tag() {
        let records = vec![record(
            r#"[{"input": null, "dataType": "int"}, {"dataType": "int"}]"#,
            r#"{"dataType": "int"}"#,
        )];

        // The absent "input" and "expectedOutput" keys contribute nothing.
        let tags = collect_type_tags(&records);
        let expected: HashSet<TypeTag> = [TypeTag::Null].into_iter().collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn malformed_encodings_are_skipped() {
        let _ = env_logger::builder().is_test(true).try_init();

        let records = vec![
            record("not json", "also not json"),
            record(
                r#"[{"input": [1, 2], "dataType": "int[]"}]"#,
                r#"{"expectedOutput": true, "dataType": "boolean"}"#,
            ),
        ];

        let tags = collect_type_tags(&records);
        let expected: HashSet<TypeTag> = [TypeTag::Array, TypeTag::Boolean].into_iter().collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn records_without_payloads_contribute_nothing() {
        let tags = collect_type_tags(&[TestCaseRecord::empty()]);
        assert!(tags.is_empty());
    }
}
