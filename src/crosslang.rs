//! Cross-language type mapping.
//!
//! Bridges the per-language type spellings (Java, Python, C++,
//! JavaScript) through a universal type vocabulary, so a test case
//! authored against one language's declared types can be re-expressed for
//! another. The mapping tables are data; the first spelling in each row
//! is the preferred rendering for that language.

use std::collections::HashMap;

use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Language, TestCaseRecord};
use crate::inference::is_integral;

/// Language-neutral type vocabulary.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UniversalType {
    Integer,
    Float,
    Boolean,
    String,
    Character,
    IntegerArray,
    FloatArray,
    BooleanArray,
    StringArray,
    IntegerList,
    FloatList,
    StringList,
    StringMap,
    IntegerMap,
    Object,
}

impl UniversalType {
    pub fn as_str(&self) -> &'static str {
        static NAMES: &[(UniversalType, &str)] = &[
            (UniversalType::Integer, "integer"),
            (UniversalType::Float, "float"),
            (UniversalType::Boolean, "boolean"),
            (UniversalType::String, "string"),
            (UniversalType::Character, "character"),
            (UniversalType::IntegerArray, "integer_array"),
            (UniversalType::FloatArray, "float_array"),
            (UniversalType::BooleanArray, "boolean_array"),
            (UniversalType::StringArray, "string_array"),
            (UniversalType::IntegerList, "integer_list"),
            (UniversalType::FloatList, "float_list"),
            (UniversalType::StringList, "string_list"),
            (UniversalType::StringMap, "string_map"),
            (UniversalType::IntegerMap, "integer_map"),
            (UniversalType::Object, "object"),
        ];

        NAMES
            .iter()
            .find(|(u, _)| u == self)
            .map(|(_, s)| *s)
            .unwrap_or("object")
    }
}

impl std::fmt::Display for UniversalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

type TypeRow = (UniversalType, &'static [&'static str]);

const JAVA_TYPES: &[TypeRow] = &[
    (UniversalType::Integer, &["int", "Integer", "long", "Long"]),
    (UniversalType::Float, &["double", "Double", "float", "Float"]),
    (UniversalType::Boolean, &["boolean", "Boolean"]),
    (UniversalType::String, &["String"]),
    (UniversalType::Character, &["char", "Character"]),
    (UniversalType::IntegerArray, &["int[]", "Integer[]"]),
    (UniversalType::FloatArray, &["double[]", "Double[]"]),
    (UniversalType::BooleanArray, &["boolean[]", "Boolean[]"]),
    (UniversalType::StringArray, &["String[]"]),
    (UniversalType::IntegerList, &["List<Integer>", "ArrayList<Integer>"]),
    (UniversalType::FloatList, &["List<Double>", "ArrayList<Double>"]),
    (UniversalType::StringList, &["List<String>", "ArrayList<String>"]),
    (UniversalType::StringMap, &["Map<String,Integer>", "HashMap<String,Integer>"]),
];

const PYTHON_TYPES: &[TypeRow] = &[
    (UniversalType::Integer, &["int"]),
    (UniversalType::Float, &["float"]),
    (UniversalType::Boolean, &["bool"]),
    (UniversalType::String, &["str"]),
    (UniversalType::IntegerArray, &["List[int]", "list[int]"]),
    (UniversalType::FloatArray, &["List[float]", "list[float]"]),
    (UniversalType::BooleanArray, &["List[bool]", "list[bool]"]),
    (UniversalType::StringArray, &["List[str]", "list[str]"]),
    (UniversalType::IntegerList, &["List[int]"]),
    (UniversalType::FloatList, &["List[float]"]),
    (UniversalType::StringList, &["List[str]"]),
    (UniversalType::StringMap, &["Dict[str,int]", "dict[str,int]"]),
];

const CPP_TYPES: &[TypeRow] = &[
    (UniversalType::Integer, &["int", "long", "short"]),
    (UniversalType::Float, &["double", "float"]),
    (UniversalType::Boolean, &["bool"]),
    (UniversalType::String, &["string"]),
    (UniversalType::Character, &["char"]),
    (UniversalType::IntegerArray, &["int[]"]),
    (UniversalType::FloatArray, &["double[]"]),
    (UniversalType::BooleanArray, &["bool[]"]),
    (UniversalType::StringArray, &["string[]"]),
    (UniversalType::IntegerList, &["vector<int>"]),
    (UniversalType::FloatList, &["vector<double>"]),
    (UniversalType::StringList, &["vector<string>"]),
    (UniversalType::StringMap, &["map<string,int>"]),
];

const JAVASCRIPT_TYPES: &[TypeRow] = &[
    (UniversalType::Integer, &["number"]),
    (UniversalType::Float, &["number"]),
    (UniversalType::Boolean, &["boolean"]),
    (UniversalType::String, &["string"]),
    (UniversalType::Character, &["string"]),
    (UniversalType::IntegerArray, &["number[]"]),
    (UniversalType::FloatArray, &["number[]"]),
    (UniversalType::BooleanArray, &["boolean[]"]),
    (UniversalType::StringArray, &["string[]"]),
    (UniversalType::IntegerList, &["Array<number>"]),
    (UniversalType::FloatList, &["Array<number>"]),
    (UniversalType::StringList, &["Array<string>"]),
    (UniversalType::StringMap, &["object", "Map"]),
];

pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language::Java,
    Language::Python,
    Language::Cpp,
    Language::JavaScript,
];

fn type_rows(language: Language) -> &'static [TypeRow] {
    match language {
        Language::Java => JAVA_TYPES,
        Language::Python => PYTHON_TYPES,
        Language::Cpp => CPP_TYPES,
        Language::JavaScript => JAVASCRIPT_TYPES,
    }
}

// Spelling -> universal, derived from the forward tables. A spelling that
// appears in several rows resolves to the last row, so Python's
// `List[int]` reads as integer_list and JavaScript's `number` as float.
static REVERSE_MAPPING: Lazy<HashMap<Language, HashMap<&'static str, UniversalType>>> =
    Lazy::new(|| {
        let mut mapping = HashMap::new();
        for &language in SUPPORTED_LANGUAGES {
            let reverse: &mut HashMap<&'static str, UniversalType> =
                mapping.entry(language).or_default();
            for (universal, spellings) in type_rows(language) {
                for spelling in *spellings {
                    reverse.insert(*spelling, *universal);
                }
            }
        }
        mapping
    });

/// Resolve a language-specific spelling to its universal type. Unknown
/// spellings fall back to `Object`.
pub fn to_universal(language: Language, language_type: &str) -> UniversalType {
    match REVERSE_MAPPING
        .get(&language)
        .and_then(|reverse| reverse.get(language_type))
    {
        Some(universal) => *universal,
        None => {
            warn!("unknown type '{language_type}' for language {language}");
            UniversalType::Object
        }
    }
}

/// Render a universal type in a language's preferred spelling. Types the
/// language has no row for render as `"object"`.
pub fn to_language_type(universal: UniversalType, language: Language) -> &'static str {
    match type_rows(language)
        .iter()
        .find(|(u, _)| *u == universal)
        .and_then(|(_, spellings)| spellings.first().copied())
    {
        Some(spelling) => spelling,
        None => {
            warn!("no mapping for universal type '{universal}' in {language}");
            "object"
        }
    }
}

/// Re-express a type spelling from one language in another.
pub fn convert_type(original: &str, from: Language, to: Language) -> &'static str {
    to_language_type(to_universal(from, original), to)
}

/// Detect the universal type of a decoded value. Arrays classify by their
/// first element; an empty array reads as an integer list.
pub fn detect_universal_type(value: &Value) -> UniversalType {
    match value {
        Value::Null => UniversalType::Object,
        Value::Number(n) => {
            if is_integral(n) {
                UniversalType::Integer
            } else {
                UniversalType::Float
            }
        }
        Value::Bool(_) => UniversalType::Boolean,
        Value::String(_) => UniversalType::String,
        Value::Array(items) => match items.first() {
            None => UniversalType::IntegerList,
            Some(Value::Number(n)) if is_integral(n) => UniversalType::IntegerList,
            Some(Value::Number(_)) => UniversalType::FloatList,
            Some(Value::String(_)) => UniversalType::StringList,
            Some(Value::Bool(_)) => UniversalType::BooleanArray,
            Some(_) => UniversalType::Object,
        },
        Value::Object(_) => UniversalType::Object,
    }
}

pub fn supported_languages() -> &'static [Language] {
    SUPPORTED_LANGUAGES
}

pub fn is_language_supported(name: &str) -> bool {
    Language::from_name(name).is_some()
}

/// Every spelling a language's tables accept.
pub fn valid_types_for_language(language: Language) -> Vec<&'static str> {
    type_rows(language)
        .iter()
        .flat_map(|(_, spellings)| spellings.iter().copied())
        .collect()
}

pub fn is_valid_type_for_language(data_type: &str, language: Language) -> bool {
    REVERSE_MAPPING
        .get(&language)
        .is_some_and(|reverse| reverse.contains_key(data_type))
}

const JAVA_EXAMPLES: &[(&str, &str)] = &[
    ("int", "42"),
    ("String", "\"hello\""),
    ("boolean", "true"),
    ("int[]", "[1, 2, 3]"),
    ("List<Integer>", "[1, 2, 3]"),
];

const PYTHON_EXAMPLES: &[(&str, &str)] = &[
    ("int", "42"),
    ("str", "'hello'"),
    ("bool", "True"),
    ("List[int]", "[1, 2, 3]"),
];

const CPP_EXAMPLES: &[(&str, &str)] = &[
    ("int", "42"),
    ("string", "hello"),
    ("bool", "true"),
    ("vector<int>", "[1, 2, 3]"),
];

const JAVASCRIPT_EXAMPLES: &[(&str, &str)] = &[
    ("number", "42"),
    ("string", "\"hello\""),
    ("boolean", "true"),
    ("number[]", "[1, 2, 3]"),
];

/// A display-ready example literal for a type as that language writes it.
pub fn example_for_type(data_type: &str, language: Language) -> &'static str {
    let examples = match language {
        Language::Java => JAVA_EXAMPLES,
        Language::Python => PYTHON_EXAMPLES,
        Language::Cpp => CPP_EXAMPLES,
        Language::JavaScript => JAVASCRIPT_EXAMPLES,
    };
    examples
        .iter()
        .find(|(ty, _)| *ty == data_type)
        .map(|(_, example)| *example)
        .unwrap_or("example_value")
}

/// Re-express a Java-typed record's declared types for another language:
/// the `dataType` field of every input item and of the expected output,
/// plus the record's own `input_type`/`output_type`. Unknown sibling
/// fields in the encoded payloads are preserved. If either payload fails
/// to decode the record is returned unchanged (best-effort, like tag
/// collection).
pub fn convert_test_case_for_language(record: &TestCaseRecord, target: Language) -> TestCaseRecord {
    match try_convert(record, target) {
        Some(converted) => converted,
        None => record.clone(),
    }
}

fn try_convert(record: &TestCaseRecord, target: Language) -> Option<TestCaseRecord> {
    let encoded_input = record.input_data.as_deref()?;
    let encoded_output = record.expected_output_data.as_deref()?;

    let input = match serde_json::from_str::<Value>(encoded_input) {
        Ok(value) => value,
        Err(err) => {
            debug!("leaving record unconverted, malformed input payload: {err}");
            return None;
        }
    };
    let output = match serde_json::from_str::<Value>(encoded_output) {
        Ok(value) => value,
        Err(err) => {
            debug!("leaving record unconverted, malformed output payload: {err}");
            return None;
        }
    };

    let Value::Array(mut items) = input else {
        debug!("leaving record unconverted, input payload is not an array");
        return None;
    };
    for item in &mut items {
        if let Value::Object(fields) = item {
            let original = fields.get("dataType").and_then(Value::as_str).unwrap_or("");
            let converted = convert_type(original, Language::Java, target);
            fields.insert("dataType".to_string(), Value::String(converted.to_string()));
        }
    }

    let Value::Object(mut output_fields) = output else {
        debug!("leaving record unconverted, output payload is not an object");
        return None;
    };
    let original = output_fields
        .get("dataType")
        .and_then(Value::as_str)
        .unwrap_or("");
    let converted = convert_type(original, Language::Java, target);
    output_fields.insert("dataType".to_string(), Value::String(converted.to_string()));

    let input_type = convert_type(record.input_type.as_deref().unwrap_or(""), Language::Java, target);
    let output_type = convert_type(record.output_type.as_deref().unwrap_or(""), Language::Java, target);

    let mut result = record.clone();
    result.input_data = Some(serde_json::to_string(&Value::Array(items)).ok()?);
    result.expected_output_data = Some(serde_json::to_string(&Value::Object(output_fields)).ok()?);
    result.input_type = Some(input_type.to_string());
    result.output_type = Some(output_type.to_string());
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reverse_mapping_resolves_preferred_and_alternate_spellings() {
        assert_eq!(to_universal(Language::Java, "int"), UniversalType::Integer);
        assert_eq!(to_universal(Language::Java, "ArrayList<Integer>"), UniversalType::IntegerList);
        assert_eq!(to_universal(Language::Cpp, "vector<string>"), UniversalType::StringList);
    }

    #[test]
    fn duplicate_spellings_resolve_to_the_last_row() {
        // Python spells both integer_array and integer_list as List[int];
        // the list row wins. JavaScript's number reads as float.
        assert_eq!(to_universal(Language::Python, "List[int]"), UniversalType::IntegerList);
        assert_eq!(to_universal(Language::JavaScript, "number"), UniversalType::Float);
    }

    #[test]
    fn unknown_spellings_fall_back_to_object() {
        assert_eq!(to_universal(Language::Java, "Widget"), UniversalType::Object);
        assert_eq!(to_language_type(UniversalType::Object, Language::Java), "object");
    }

    #[test]
    fn conversion_crosses_languages() {
        assert_eq!(convert_type("List<Integer>", Language::Java, Language::Python), "List[int]");
        assert_eq!(convert_type("int", Language::Java, Language::Cpp), "int");
        assert_eq!(convert_type("String", Language::Java, Language::JavaScript), "string");
        assert_eq!(convert_type("Dict[str,int]", Language::Python, Language::Java), "Map<String,Integer>");
    }

    #[test]
    fn detects_universal_type_by_shape() {
        assert_eq!(detect_universal_type(&json!(5)), UniversalType::Integer);
        assert_eq!(detect_universal_type(&json!(5.5)), UniversalType::Float);
        assert_eq!(detect_universal_type(&json!("hi")), UniversalType::String);
        assert_eq!(detect_universal_type(&json!(true)), UniversalType::Boolean);
        assert_eq!(detect_universal_type(&json!([])), UniversalType::IntegerList);
        assert_eq!(detect_universal_type(&json!([1, 2])), UniversalType::IntegerList);
        assert_eq!(detect_universal_type(&json!([1.5])), UniversalType::FloatList);
        assert_eq!(detect_universal_type(&json!(["a"])), UniversalType::StringList);
        assert_eq!(detect_universal_type(&json!([true])), UniversalType::BooleanArray);
        assert_eq!(detect_universal_type(&json!({"k": 1})), UniversalType::Object);
        assert_eq!(detect_universal_type(&Value::Null), UniversalType::Object);
    }

    #[test]
    fn type_tables_answer_membership_queries() {
        assert!(is_valid_type_for_language("List<String>", Language::Java));
        assert!(!is_valid_type_for_language("List<String>", Language::Python));
        assert!(valid_types_for_language(Language::Cpp).contains(&"vector<int>"));
        assert!(is_language_supported("JAVA"));
        assert!(!is_language_supported("fortran"));
    }

    #[test]
    fn examples_render_per_language() {
        assert_eq!(example_for_type("str", Language::Python), "'hello'");
        assert_eq!(example_for_type("int[]", Language::Java), "[1, 2, 3]");
        assert_eq!(example_for_type("Widget", Language::Java), "example_value");
    }

    #[test]
    fn converts_record_payload_types() {
        let record = TestCaseRecord {
            input_data: Some(
                json!([{"input": [1, 2], "dataType": "List<Integer>", "label": "xs"}]).to_string(),
            ),
            input_type: Some("List<Integer>".to_string()),
            output_type: Some("int".to_string()),
            expected_output_data: Some(json!({"expectedOutput": 3, "dataType": "int"}).to_string()),
            ..TestCaseRecord::empty()
        };

        let converted = convert_test_case_for_language(&record, Language::Python);
        assert_eq!(converted.input_type.as_deref(), Some("List[int]"));
        assert_eq!(converted.output_type.as_deref(), Some("int"));

        let items: Value = serde_json::from_str(converted.input_data.as_deref().unwrap()).unwrap();
        assert_eq!(items[0]["dataType"], json!("List[int]"));
        // Unknown sibling fields survive the rewrite.
        assert_eq!(items[0]["label"], json!("xs"));

        let output: Value =
            serde_json::from_str(converted.expected_output_data.as_deref().unwrap()).unwrap();
        assert_eq!(output["dataType"], json!("int"));
        assert_eq!(output["expectedOutput"], json!(3));
    }

    #[test]
    fn malformed_payloads_leave_record_unchanged() {
        let record = TestCaseRecord {
            input_data: Some("not json".to_string()),
            expected_output_data: Some("{}".to_string()),
            input_type: Some("int".to_string()),
            ..TestCaseRecord::empty()
        };
        assert_eq!(convert_test_case_for_language(&record, Language::Python), record);
    }
}
