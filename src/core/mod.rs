use serde::{Deserialize, Serialize};
use serde_json::json;

/// Canonical classification of a type descriptor string.
///
/// Every descriptor maps to exactly one kind; spellings with no matching
/// rule fall through to `Unknown`, which validators treat as pass-through.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CanonicalKind {
    Array,
    String,
    Integer,
    Float,
    Boolean,
    Object,
    Unknown,
}

impl std::fmt::Display for CanonicalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(CanonicalKind, &str)] = &[
            (CanonicalKind::Array, "Array"),
            (CanonicalKind::String, "String"),
            (CanonicalKind::Integer, "Integer"),
            (CanonicalKind::Float, "Float"),
            (CanonicalKind::Boolean, "Boolean"),
            (CanonicalKind::Object, "Object"),
            (CanonicalKind::Unknown, "Unknown"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(k, _)| k == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Semantic tag inferred from the runtime shape of a decoded value,
/// independent of any declared descriptor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    Array,
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Object,
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(TypeTag, &str)] = &[
            (TypeTag::Array, "Array"),
            (TypeTag::String, "String"),
            (TypeTag::Integer, "Integer"),
            (TypeTag::Float, "Float"),
            (TypeTag::Boolean, "Boolean"),
            (TypeTag::Null, "Null"),
            (TypeTag::Object, "Object"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(t, _)| t == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Outcome of a literal or signature validation. Never an error channel:
/// failures are values, and `message` is populated on both outcomes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Source languages the type-descriptor tables cover.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    Python,
    Cpp,
    JavaScript,
}

impl Language {
    /// Resolve a language from its common name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        static NAME_MAP: &[(&[&str], Language)] = &[
            (&["java"], Language::Java),
            (&["python", "py"], Language::Python),
            (&["cpp", "c++"], Language::Cpp),
            (&["javascript", "js"], Language::JavaScript),
        ];

        let lowered = name.to_lowercase();
        NAME_MAP
            .iter()
            .find(|(names, _)| names.contains(&lowered.as_str()))
            .map(|(_, lang)| *lang)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Language, &str)] = &[
            (Language::Java, "Java"),
            (Language::Python, "Python"),
            (Language::Cpp, "C++"),
            (Language::JavaScript, "JavaScript"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(l, _)| l == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// A test-case record as callers hold it: declared types plus the two
/// JSON-encoded payload fields (`input_data` is an encoded array of
/// `{input, dataType}` items, `expected_output_data` an encoded
/// `{expectedOutput, dataType}` object). All fields are optional so that
/// partially authored records can flow through validation and repair.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseRecord {
    pub input_data: Option<String>,
    pub input_type: Option<String>,
    pub output_type: Option<String>,
    pub expected_output_data: Option<String>,
    pub description: Option<String>,
    pub is_example: Option<bool>,
    pub is_hidden: Option<bool>,
    pub time_limit: Option<i64>,
    pub memory_limit: Option<i64>,
    pub weight: Option<f64>,
    pub test_order: Option<i64>,
    pub comparison_mode: Option<String>,
    pub epsilon: Option<f64>,
}

impl Default for TestCaseRecord {
    fn default() -> Self {
        Self {
            input_data: Some(json!([{"input": "", "dataType": "string"}]).to_string()),
            input_type: Some("string".to_string()),
            output_type: Some("string".to_string()),
            expected_output_data: Some(
                json!({"expectedOutput": "", "dataType": "string"}).to_string(),
            ),
            description: Some("Test case".to_string()),
            is_example: Some(false),
            is_hidden: Some(false),
            time_limit: Some(1000),
            memory_limit: Some(262_144),
            weight: Some(1.0),
            test_order: Some(1),
            comparison_mode: Some("EXACT".to_string()),
            epsilon: None,
        }
    }
}

impl TestCaseRecord {
    /// An entirely empty record, unlike `default()` which carries the
    /// system defaults for every required field.
    pub fn empty() -> Self {
        Self {
            input_data: None,
            input_type: None,
            output_type: None,
            expected_output_data: None,
            description: None,
            is_example: None,
            is_hidden: None,
            time_limit: None,
            memory_limit: None,
            weight: None,
            test_order: None,
            comparison_mode: None,
            epsilon: None,
        }
    }
}

/// Subject of topic classification: explicit tags plus free-text title
/// and description.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub topics: Option<Vec<String>>,
    pub title: Option<String>,
    pub description: Option<String>,
}
