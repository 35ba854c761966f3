//! Lexical analysis
//!
//! Splits source text into category-coded tokens with a table-driven
//! finite-state machine. The lookup data lives in an immutable [`Lexicon`]
//! built once per process; all mutable scan state is private to a single
//! call of [`LexicalAnalyzer::scan`].

pub mod analyzer;
pub mod classifier;
pub mod lexicon;
pub mod state;

pub use analyzer::{LexicalAnalyzer, LexicalMetrics, ScanOutput};
pub use classifier::{classify, CharCategory};
pub use lexicon::Lexicon;
pub use state::{transition, ScannerState, Transition};

use crate::file_processor::FileProcessingResult;

/// Scan source text with the given lexicon
pub fn scan(source: &str, lexicon: &Lexicon) -> ScanOutput {
    LexicalAnalyzer::new(lexicon).scan(source)
}

/// Scan a loaded file with the given lexicon
pub fn tokenize_file_result(file_result: &FileProcessingResult, lexicon: &Lexicon) -> ScanOutput {
    LexicalAnalyzer::new(lexicon).tokenize_file_result(file_result)
}

/// Check that every lexical code is registered with metadata
pub fn validate_lexical_codes() -> Result<(), String> {
    let lexical_codes = [
        crate::logging::codes::lexical::INVALID_SYMBOL,
        crate::logging::codes::lexical::IDENTIFIER_TOO_LONG,
        crate::logging::codes::lexical::MISSING_EQUALS_AFTER_COLON,
    ];

    for code in &lexical_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_api() {
        let lexicon = Lexicon::standard();
        let output = scan("read(x)", &lexicon);
        assert_eq!(output.tokens.len(), 5);
        assert!(validate_lexical_codes().is_ok());
    }
}
