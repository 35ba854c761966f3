//! Syntax analysis
//!
//! A recursive-descent parser over the scanned token sequence. It builds the
//! variable and procedure tables as declarations are recognized and reports
//! grammar problems as diagnostics. Only a variable declaration without its
//! terminating `;` stops the analysis.

mod cursor;
mod error;
mod parser;

pub use cursor::TokenCursor;
pub use error::{SyntaxAbort, SyntaxError, SyntaxResult};
pub use parser::{ResolvedReference, SyntaxAnalyzer, SyntaxOutput};

use crate::tokens::Token;

/// Analyze a token sequence with a fresh analyzer
pub fn analyze(tokens: &[Token]) -> Result<SyntaxOutput, SyntaxAbort> {
    SyntaxAnalyzer::new().analyze(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{handoff, TokenCategory};

    #[test]
    fn test_analyze_from_handoff_text() {
        let text = "begin 01\ninteger 03\nk 10\n; 23\nEOLN 24\nread 08\n( 21\nk 10\n) 22\nend 02\nEOF 25";
        let stream = handoff::parse(text).unwrap();
        let output = analyze(stream.as_slice()).unwrap();

        assert!(output.diagnostics.is_empty());
        assert_eq!(output.symbols.variable_count(), 1);
        assert!(output.reached_eof);
        assert_eq!(output.final_line, 2);
    }

    #[test]
    fn test_empty_input() {
        let output = analyze(&[Token::end_of_file()]).unwrap();
        assert_eq!(output.diagnostics.render(), "***1: begin not found.\n");
        assert!(output.reached_eof);

        let output = analyze(&[Token::new("x", TokenCategory::Identifier)]).unwrap();
        assert!(!output.reached_eof);
    }
}
