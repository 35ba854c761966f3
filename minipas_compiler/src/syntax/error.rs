//! Syntax analysis errors
//!
//! Almost every grammar problem is reported as a diagnostic and parsing
//! continues. The errors here stop the analysis outright.

use crate::diagnostics::DiagnosticLog;
use crate::logging::{codes, Code};
use crate::symbols::SymbolError;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Declaration of '{name}' at line {line} is not followed by ';' (found '{found}')")]
    MalformedVariableDeclaration {
        name: String,
        line: usize,
        found: String,
    },

    #[error("Symbol table error: {0}")]
    SymbolTable(#[from] SymbolError),
}

impl SyntaxError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::MalformedVariableDeclaration { .. } => {
                codes::syntax::MALFORMED_VARIABLE_DECLARATION
            }
            Self::SymbolTable(inner) => inner.error_code(),
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedVariableDeclaration { line, .. } => Some(*line),
            Self::SymbolTable(_) => None,
        }
    }
}

/// An aborted analysis, with the diagnostics recorded before it stopped
#[derive(Debug, Clone, thiserror::Error)]
#[error("{error}")]
pub struct SyntaxAbort {
    #[source]
    pub error: SyntaxError,
    pub diagnostics: DiagnosticLog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let error = SyntaxError::MalformedVariableDeclaration {
            name: "x".into(),
            line: 3,
            found: "integer".into(),
        };
        assert_eq!(error.error_code(), codes::syntax::MALFORMED_VARIABLE_DECLARATION);
        assert_eq!(error.line(), Some(3));

        let error: SyntaxError = SymbolError::UnknownProcedure { index: 2 }.into();
        assert_eq!(error.error_code(), codes::symbols::UNKNOWN_PROCEDURE);
        assert_eq!(error.line(), None);
    }
}
