//! Function signature validation per target language.
//!
//! Checks a declared solution-function shape: identifier rules for the
//! function name, at least one parameter, and parameter/return types
//! drawn from the language's allowed-type tables (return types
//! additionally allow the language's void spelling). First failure wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{Language, ValidationResult};

/// Declared shape of a solution function.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSignature {
    pub function_name: String,
    pub parameter_types: Vec<String>,
    pub return_type: String,
}

static JAVA_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").unwrap());
static PYTHON_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());
static JAVASCRIPT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z$_][a-zA-Z0-9$_]*$").unwrap());

/// Java custom classes (e.g. `TreeNode`) are accepted anywhere a built-in
/// type is.
static JAVA_CUSTOM_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9_]*$").unwrap());

const JAVA_PARAM_TYPES: &[&str] = &[
    "int", "Integer", "long", "Long", "short", "Short", "byte", "Byte",
    "float", "Float", "double", "Double",
    "boolean", "Boolean",
    "char", "Character",
    "String",
    "int[]", "Integer[]", "long[]", "Long[]", "double[]", "Double[]", "boolean[]", "Boolean[]",
    "String[]",
    "List<Integer>", "List<String>", "List<Boolean>", "List<Double>",
    "Map<String,Integer>", "Map<String,String>", "HashMap<String,Integer>", "HashMap<String,String>",
];

const PYTHON_PARAM_TYPES: &[&str] = &[
    "int", "float", "bool", "str",
    "List[int]", "List[float]", "List[bool]", "List[str]",
    "Dict[str,int]", "Dict[str,str]", "Dict[str,float]",
    "tuple", "set",
];

const JAVASCRIPT_PARAM_TYPES: &[&str] = &[
    "number", "string", "boolean",
    "Array<number>", "Array<string>", "Array<boolean>",
    "object", "Map", "Set",
];

const CPP_PARAM_TYPES: &[&str] = &[
    "int", "long", "short", "float", "double", "bool", "char", "string",
    "vector<int>", "vector<string>", "vector<bool>", "vector<double>",
    "map<string,int>", "map<string,string>",
];

const JAVA_VOID_TYPES: &[&str] = &["void"];
const PYTHON_VOID_TYPES: &[&str] = &["None"];
const JAVASCRIPT_VOID_TYPES: &[&str] = &["void", "undefined"];
const CPP_VOID_TYPES: &[&str] = &["void"];

fn name_pattern(language: Language) -> &'static Regex {
    match language {
        Language::Java | Language::Cpp => &JAVA_NAME,
        Language::Python => &PYTHON_NAME,
        Language::JavaScript => &JAVASCRIPT_NAME,
    }
}

fn param_types(language: Language) -> &'static [&'static str] {
    match language {
        Language::Java => JAVA_PARAM_TYPES,
        Language::Python => PYTHON_PARAM_TYPES,
        Language::JavaScript => JAVASCRIPT_PARAM_TYPES,
        Language::Cpp => CPP_PARAM_TYPES,
    }
}

fn void_types(language: Language) -> &'static [&'static str] {
    match language {
        Language::Java => JAVA_VOID_TYPES,
        Language::Python => PYTHON_VOID_TYPES,
        Language::JavaScript => JAVASCRIPT_VOID_TYPES,
        Language::Cpp => CPP_VOID_TYPES,
    }
}

/// Validate a declared function signature for a language.
pub fn validate_signature(language: Language, signature: &FunctionSignature) -> ValidationResult {
    let name = signature.function_name.trim();
    if name.is_empty() {
        return ValidationResult::invalid("Function name must not be empty");
    }

    let name_check = validate_function_name(language, name);
    if !name_check.is_valid {
        return name_check;
    }

    if signature.parameter_types.is_empty() {
        return ValidationResult::invalid("At least one parameter is required");
    }
    for (index, param_type) in signature.parameter_types.iter().enumerate() {
        let param_check = validate_parameter_type(language, param_type);
        if !param_check.is_valid {
            return ValidationResult::invalid(format!(
                "Parameter {}: {}",
                index + 1,
                param_check.message
            ));
        }
    }

    if signature.return_type.trim().is_empty() {
        return ValidationResult::invalid("Return type must not be empty");
    }
    let return_check = validate_return_type(language, &signature.return_type);
    if !return_check.is_valid {
        return return_check;
    }

    ValidationResult::valid("Function signature is valid")
}

fn validate_function_name(language: Language, function_name: &str) -> ValidationResult {
    if name_pattern(language).is_match(function_name) {
        return ValidationResult::valid("Function name is valid");
    }

    let rule = match language {
        Language::Java => "Java function names must start with a letter and contain only letters, digits, or underscores",
        Language::Python => "Python function names must start with a lowercase letter and contain only lowercase letters, digits, or underscores",
        Language::JavaScript => "JavaScript function names must start with a letter, $ or _ and contain only letters, digits, $ or _",
        Language::Cpp => "C++ function names must start with a letter and contain only letters, digits, or underscores",
    };
    ValidationResult::invalid(format!("Function name is not valid. {rule}"))
}

fn validate_parameter_type(language: Language, param_type: &str) -> ValidationResult {
    if param_type.trim().is_empty() {
        return ValidationResult::invalid("parameter type must not be empty");
    }
    if language == Language::Java && JAVA_CUSTOM_CLASS.is_match(param_type) {
        return ValidationResult::valid("custom parameter type is valid");
    }
    if !param_types(language).contains(&param_type) {
        return ValidationResult::invalid(format!(
            "type \"{param_type}\" is not valid for {language}"
        ));
    }
    ValidationResult::valid("parameter type is valid")
}

fn validate_return_type(language: Language, return_type: &str) -> ValidationResult {
    if language == Language::Java && JAVA_CUSTOM_CLASS.is_match(return_type) {
        return ValidationResult::valid("Custom return type is valid");
    }
    if !void_types(language).contains(&return_type) && !param_types(language).contains(&return_type)
    {
        return ValidationResult::invalid(format!(
            "Return type \"{return_type}\" is not valid for {language}"
        ));
    }
    ValidationResult::valid("Return type is valid")
}
