// Export modules for library usage
pub mod config;
pub mod core;
pub mod crosslang;
pub mod inference;
pub mod literal;
pub mod sanitize;
pub mod signature;
pub mod testcase;
pub mod topics;

// Re-export commonly used types
pub use crate::core::{
    CanonicalKind, Language, Problem, TestCaseRecord, TypeTag, ValidationResult,
};

pub use crate::literal::{element_descriptor, example, is_array_descriptor, normalize, validate};

pub use crate::inference::{collect_type_tags, infer_tag};

pub use crate::topics::{extract_topics, extract_topics_with, TOPIC_KEYWORDS};

pub use crate::sanitize::sanitize;

pub use crate::crosslang::{
    convert_test_case_for_language, convert_type, detect_universal_type, example_for_type,
    is_language_supported, is_valid_type_for_language, supported_languages, to_language_type,
    to_universal, valid_types_for_language, UniversalType,
};

pub use crate::signature::{validate_signature, FunctionSignature};

pub use crate::testcase::{
    complete_test_case, detect_literal_kind, format_test_cases, prepare_for_submission,
    prepare_for_submission_with, validate_structure, validate_structure_with, StructureReport,
    SubmissionReport,
};

pub use crate::config::{CaselintConfig, ConfigError, StructureLimits, TopicsConfig};
