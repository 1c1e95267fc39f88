//! Test-case record structure validation and repair.
//!
//! Works over caller-owned [`TestCaseRecord`]s: checks required fields
//! and the two encoded JSON payloads, fills defaults into partially
//! authored records, and runs the validate-and-fix pass a submission
//! batch goes through before leaving the authoring surface.

use serde_json::{json, Value};

use crate::config::StructureLimits;
use crate::core::TestCaseRecord;

/// Outcome of structure validation: hard errors plus advisory warnings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Outcome of the batch validate-and-fix pass.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub fixed: Vec<TestCaseRecord>,
}

/// Validate one record against the default limits.
pub fn validate_structure(record: &TestCaseRecord) -> StructureReport {
    validate_structure_with(record, &StructureLimits::default())
}

/// Validate one record: every required field present, `input_data` an
/// encoded array of `{input, dataType}` items, `expected_output_data` an
/// encoded `{expectedOutput, dataType}` object, numeric fields within the
/// configured limits. A zero numeric field skips its range check; only
/// absence is reported, by the required-field pass.
pub fn validate_structure_with(
    record: &TestCaseRecord,
    limits: &StructureLimits,
) -> StructureReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (name, present) in required_fields(record) {
        if !present {
            errors.push(format!("Missing required field: {name}"));
        }
    }

    match serde_json::from_str::<Value>(record.input_data.as_deref().unwrap_or("[]")) {
        Ok(Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                let has_input = item.get("input").is_some();
                let has_data_type = item.get("dataType").is_some();
                if !has_input || !has_data_type {
                    errors.push(format!(
                        "Input item {} missing 'input' or 'dataType' field",
                        index + 1
                    ));
                }
            }
        }
        Ok(_) => errors.push("inputData must be a JSON array".to_string()),
        Err(_) => errors.push("inputData must be valid JSON".to_string()),
    }

    match serde_json::from_str::<Value>(record.expected_output_data.as_deref().unwrap_or("{}")) {
        Ok(output) => {
            if output.get("expectedOutput").is_none() || output.get("dataType").is_none() {
                errors.push("expectedOutputData missing required fields".to_string());
            }
        }
        Err(_) => errors.push("expectedOutputData must be valid JSON".to_string()),
    }

    if let Some(time_limit) = record.time_limit.filter(|&t| t != 0) {
        if time_limit < limits.min_time_limit_ms {
            errors.push(format!(
                "timeLimit must be at least {}ms",
                limits.min_time_limit_ms
            ));
        }
    }
    if let Some(memory_limit) = record.memory_limit.filter(|&m| m != 0) {
        if memory_limit < limits.min_memory_limit_kb {
            errors.push(format!(
                "memoryLimit must be at least {}KB",
                limits.min_memory_limit_kb
            ));
        }
    }
    if let Some(weight) = record.weight.filter(|&w| w != 0.0) {
        if weight < limits.min_weight || weight > limits.max_weight {
            warnings.push(format!(
                "weight should be between {} and {}",
                limits.min_weight, limits.max_weight
            ));
        }
    }
    if let Some(test_order) = record.test_order.filter(|&t| t != 0) {
        if test_order < 1 {
            errors.push("testOrder must be greater than 0".to_string());
        }
    }

    StructureReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn required_fields(record: &TestCaseRecord) -> [(&'static str, bool); 12] {
    [
        ("inputData", record.input_data.is_some()),
        ("inputType", record.input_type.is_some()),
        ("outputType", record.output_type.is_some()),
        ("expectedOutputData", record.expected_output_data.is_some()),
        ("description", record.description.is_some()),
        ("isExample", record.is_example.is_some()),
        ("isHidden", record.is_hidden.is_some()),
        ("timeLimit", record.time_limit.is_some()),
        ("memoryLimit", record.memory_limit.is_some()),
        ("weight", record.weight.is_some()),
        ("testOrder", record.test_order.is_some()),
        ("comparisonMode", record.comparison_mode.is_some()),
    ]
}

/// Fill system defaults into every absent field of a partial record.
pub fn complete_test_case(partial: TestCaseRecord) -> TestCaseRecord {
    let defaults = TestCaseRecord::default();
    TestCaseRecord {
        input_data: partial.input_data.or(defaults.input_data),
        input_type: partial.input_type.or(defaults.input_type),
        output_type: partial.output_type.or(defaults.output_type),
        expected_output_data: partial.expected_output_data.or(defaults.expected_output_data),
        description: partial.description.or(defaults.description),
        is_example: partial.is_example.or(defaults.is_example),
        is_hidden: partial.is_hidden.or(defaults.is_hidden),
        time_limit: partial.time_limit.or(defaults.time_limit),
        memory_limit: partial.memory_limit.or(defaults.memory_limit),
        weight: partial.weight.or(defaults.weight),
        test_order: partial.test_order.or(defaults.test_order),
        comparison_mode: partial.comparison_mode.or(defaults.comparison_mode),
        epsilon: partial.epsilon.or(defaults.epsilon),
    }
}

/// Complete every record and renumber `test_order` sequentially.
pub fn format_test_cases(records: Vec<TestCaseRecord>) -> Vec<TestCaseRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let mut formatted = complete_test_case(record);
            formatted.test_order = Some(index as i64 + 1);
            formatted
        })
        .collect()
}

/// Batch validate-and-fix against the default limits.
pub fn prepare_for_submission(records: Vec<TestCaseRecord>) -> SubmissionReport {
    prepare_for_submission_with(records, &StructureLimits::default())
}

/// Validate every record, then repair what can be repaired: defaults
/// filled in, `test_order` renumbered, and encoded payload fields that do
/// not parse replaced by the default payloads (each repair is recorded as
/// an error so the caller knows the batch was touched).
pub fn prepare_for_submission_with(
    records: Vec<TestCaseRecord>,
    limits: &StructureLimits,
) -> SubmissionReport {
    let mut errors = Vec::new();
    let mut fixed = Vec::with_capacity(records.len());

    if records.len() < limits.min_test_cases {
        errors.push(format!(
            "At least {} test cases are required",
            limits.min_test_cases
        ));
    }

    for (index, record) in records.into_iter().enumerate() {
        let validation = validate_structure_with(&record, limits);
        if !validation.is_valid {
            errors.push(format!(
                "Test case {}: {}",
                index + 1,
                validation.errors.join(", ")
            ));
        }

        let mut repaired = complete_test_case(record);
        repaired.test_order = Some(index as i64 + 1);

        if let Some(encoded) = repaired.input_data.as_deref() {
            if serde_json::from_str::<Value>(encoded).is_err() {
                repaired.input_data = Some(json!([{"input": "", "dataType": "string"}]).to_string());
                errors.push(format!("Test case {}: Fixed invalid inputData JSON", index + 1));
            }
        }
        if let Some(encoded) = repaired.expected_output_data.as_deref() {
            if serde_json::from_str::<Value>(encoded).is_err() {
                repaired.expected_output_data =
                    Some(json!({"expectedOutput": "", "dataType": "string"}).to_string());
                errors.push(format!(
                    "Test case {}: Fixed invalid expectedOutputData JSON",
                    index + 1
                ));
            }
        }

        fixed.push(repaired);
    }

    SubmissionReport {
        is_valid: errors.is_empty(),
        errors,
        fixed,
    }
}

/// Quick authoring-aid heuristic over raw text: which descriptor spelling
/// does a typed-in value look like?
pub fn detect_literal_kind(value: &str) -> &'static str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "string";
    }
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        return "array";
    }
    if trimmed == "true" || trimmed == "false" {
        return "boolean";
    }
    if trimmed.parse::<f64>().is_ok() {
        return if trimmed.contains('.') { "double" } else { "int" };
    }
    "string"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_passes_structure_validation() {
        let report = validate_structure(&TestCaseRecord::default());
        assert!(report.is_valid, "{:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_fields_are_each_reported() {
        let report = validate_structure(&TestCaseRecord::empty());
        assert!(!report.is_valid);
        assert!(report
            .errors
            .contains(&"Missing required field: inputData".to_string()));
        assert!(report
            .errors
            .contains(&"Missing required field: comparisonMode".to_string()));
    }

    #[test]
    fn payload_shapes_are_checked() {
        let record = TestCaseRecord {
            input_data: Some(r#"[{"input": 1}]"#.to_string()),
            expected_output_data: Some(r#"{"expectedOutput": 2}"#.to_string()),
            ..TestCaseRecord::default()
        };
        let report = validate_structure(&record);
        assert!(report
            .errors
            .contains(&"Input item 1 missing 'input' or 'dataType' field".to_string()));
        assert!(report
            .errors
            .contains(&"expectedOutputData missing required fields".to_string()));
    }

    #[test]
    fn numeric_limits_apply() {
        let record = TestCaseRecord {
            time_limit: Some(50),
            memory_limit: Some(512),
            weight: Some(20.0),
            ..TestCaseRecord::default()
        };
        let report = validate_structure(&record);
        assert!(report.errors.contains(&"timeLimit must be at least 100ms".to_string()));
        assert!(report
            .errors
            .contains(&"memoryLimit must be at least 1024KB".to_string()));
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn zero_numeric_fields_skip_range_checks() {
        let record = TestCaseRecord {
            time_limit: Some(0),
            weight: Some(0.0),
            ..TestCaseRecord::default()
        };
        let report = validate_structure(&record);
        assert!(report.is_valid, "{:?}", report.errors);
    }

    #[test]
    fn complete_fills_only_absent_fields() {
        let partial = TestCaseRecord {
            description: Some("custom".to_string()),
            ..TestCaseRecord::empty()
        };
        let completed = complete_test_case(partial);
        assert_eq!(completed.description.as_deref(), Some("custom"));
        assert_eq!(completed.time_limit, Some(1000));
        assert_eq!(completed.comparison_mode.as_deref(), Some("EXACT"));
    }

    #[test]
    fn format_renumbers_test_order() {
        let formatted = format_test_cases(vec![
            TestCaseRecord {
                test_order: Some(7),
                ..TestCaseRecord::default()
            },
            TestCaseRecord::empty(),
        ]);
        assert_eq!(formatted[0].test_order, Some(1));
        assert_eq!(formatted[1].test_order, Some(2));
    }

    #[test]
    fn submission_pass_repairs_broken_payloads() {
        let broken = TestCaseRecord {
            input_data: Some("not json".to_string()),
            ..TestCaseRecord::default()
        };
        let report = prepare_for_submission(vec![broken, TestCaseRecord::default()]);

        assert!(!report.is_valid);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Fixed invalid inputData JSON")));
        assert_eq!(report.fixed.len(), 2);

        let repaired: Value =
            serde_json::from_str(report.fixed[0].input_data.as_deref().unwrap()).unwrap();
        assert!(repaired.is_array());
        assert_eq!(report.fixed[1].test_order, Some(2));
    }

    #[test]
    fn submission_pass_requires_minimum_batch() {
        let report = prepare_for_submission(vec![TestCaseRecord::default()]);
        assert!(!report.is_valid);
        assert!(report.errors[0].contains("At least 2 test cases"));
    }

    #[test]
    fn literal_kind_heuristic() {
        assert_eq!(detect_literal_kind("[1, 2]"), "array");
        assert_eq!(detect_literal_kind("true"), "boolean");
        assert_eq!(detect_literal_kind("42"), "int");
        assert_eq!(detect_literal_kind(" -3.5 "), "double");
        assert_eq!(detect_literal_kind("hello"), "string");
        assert_eq!(detect_literal_kind(""), "string");
    }
}
