//! Consolidated error codes and classification system
//!
//! Single source of truth for every code the compiler logs, with the
//! behavioral metadata used when formatting and classifying events.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const EMPTY_FILE: Code = Code::new("E008");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
}

/// Lexical diagnostic codes
pub mod lexical {
    use super::Code;

    pub const INVALID_SYMBOL: Code = Code::new("E020");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E023");
    pub const MISSING_EQUALS_AFTER_COLON: Code = Code::new("E027");
}

/// Syntax diagnostic and failure codes
pub mod syntax {
    use super::Code;

    pub const SYMBOL_NOT_FOUND: Code = Code::new("E040");
    pub const SYMBOL_NOT_MATCHED: Code = Code::new("E041");
    pub const SYMBOL_NOT_DEFINED: Code = Code::new("E042");
    pub const MALFORMED_VARIABLE_DECLARATION: Code = Code::new("E043");
}

/// Symbol table codes
pub mod symbols {
    use super::Code;

    pub const UNKNOWN_PROCEDURE: Code = Code::new("E050");
    pub const PROCEDURE_ALREADY_CLOSED: Code = Code::new("E051");
    pub const SLOT_OUT_OF_RANGE: Code = Code::new("E052");
}

/// Token hand-off file codes
pub mod handoff {
    use super::Code;

    pub const MALFORMED_RECORD: Code = Code::new("E060");
    pub const UNKNOWN_CATEGORY: Code = Code::new("E061");
    pub const HANDOFF_IO_ERROR: Code = Code::new("E062");
}

/// Report and configuration output codes
pub mod output {
    use super::Code;

    pub const REPORT_WRITE_FAILED: Code = Code::new("E070");
    pub const CONFIGURATION_INVALID: Code = Code::new("E071");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const PIPELINE_COMPLETE: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const HANDOFF_WRITTEN: Code = Code::new("I030");
    pub const HANDOFF_LOADED: Code = Code::new("I031");
    pub const SYNTAX_ANALYSIS_COMPLETE: Code = Code::new("I040");
    pub const REPORT_EXPORT_COMPLETE: Code = Code::new("I070");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

const REGISTERED_CODES: &[ErrorMetadata] = &[
    ErrorMetadata::new("ERR001", "System", Severity::Critical, false, true, "Critical internal error"),
    ErrorMetadata::new("ERR002", "System", Severity::Critical, false, true, "System initialization failure"),
    ErrorMetadata::new("E005", "FileProcessing", Severity::High, false, true, "Source file does not exist"),
    ErrorMetadata::new("E007", "FileProcessing", Severity::High, false, true, "Source file exceeds the maximum size"),
    ErrorMetadata::new("E008", "FileProcessing", Severity::Medium, false, true, "Source file is empty"),
    ErrorMetadata::new("E009", "FileProcessing", Severity::High, false, true, "Permission denied reading source"),
    ErrorMetadata::new("E010", "FileProcessing", Severity::High, false, true, "Source file is not valid UTF-8"),
    ErrorMetadata::new("E011", "FileProcessing", Severity::High, false, true, "I/O failure reading source"),
    ErrorMetadata::new("E012", "FileProcessing", Severity::High, false, true, "Path is empty or not a file"),
    ErrorMetadata::new("E020", "Lexical", Severity::Low, true, false, "Character outside the language alphabet"),
    ErrorMetadata::new("E023", "Lexical", Severity::Low, true, false, "Identifier or constant longer than 16 characters"),
    ErrorMetadata::new("E027", "Lexical", Severity::Low, true, false, "Colon not followed by '='"),
    ErrorMetadata::new("E040", "Syntax", Severity::Medium, true, false, "Expected symbol not found"),
    ErrorMetadata::new("E041", "Syntax", Severity::Medium, true, false, "Token does not start any statement"),
    ErrorMetadata::new("E042", "Syntax", Severity::Medium, true, false, "Name is not declared"),
    ErrorMetadata::new("E043", "Syntax", Severity::Critical, false, true, "Variable declaration without terminator aborts analysis"),
    ErrorMetadata::new("E050", "Symbols", Severity::Critical, false, true, "Procedure index not registered"),
    ErrorMetadata::new("E051", "Symbols", Severity::Critical, false, true, "Procedure last slot assigned twice"),
    ErrorMetadata::new("E052", "Symbols", Severity::Critical, false, true, "Slot outside the variable table"),
    ErrorMetadata::new("E060", "Handoff", Severity::High, false, true, "Hand-off record is incomplete"),
    ErrorMetadata::new("E061", "Handoff", Severity::High, false, true, "Hand-off record carries an unknown category code"),
    ErrorMetadata::new("E062", "Handoff", Severity::High, false, true, "I/O failure on the hand-off file"),
    ErrorMetadata::new("E070", "Output", Severity::High, false, true, "Report or log file could not be written"),
    ErrorMetadata::new("E071", "Output", Severity::High, false, true, "Runtime configuration is invalid"),
];

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        REGISTERED_CODES
            .iter()
            .map(|metadata| (metadata.code, metadata.clone()))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_code_has_metadata() {
        let codes = [
            system::INTERNAL_ERROR,
            file_processing::FILE_NOT_FOUND,
            file_processing::INVALID_ENCODING,
            lexical::INVALID_SYMBOL,
            lexical::IDENTIFIER_TOO_LONG,
            lexical::MISSING_EQUALS_AFTER_COLON,
            syntax::SYMBOL_NOT_FOUND,
            syntax::SYMBOL_NOT_MATCHED,
            syntax::SYMBOL_NOT_DEFINED,
            syntax::MALFORMED_VARIABLE_DECLARATION,
            symbols::PROCEDURE_ALREADY_CLOSED,
            handoff::UNKNOWN_CATEGORY,
            output::REPORT_WRITE_FAILED,
        ];

        for code in codes {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_diagnostics_are_recoverable_but_abort_is_not() {
        assert!(is_recoverable(lexical::INVALID_SYMBOL.as_str()));
        assert!(is_recoverable(syntax::SYMBOL_NOT_FOUND.as_str()));
        assert!(!is_recoverable(syntax::MALFORMED_VARIABLE_DECLARATION.as_str()));
        assert!(requires_halt(syntax::MALFORMED_VARIABLE_DECLARATION.as_str()));
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("Z999"), "Unknown error");
        assert_eq!(get_category("Z999"), "Unknown");
        assert_eq!(get_severity("Z999"), Severity::Medium);
    }
}
