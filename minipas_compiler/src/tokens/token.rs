//! Token values produced by the scanner

use super::category::TokenCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A lexeme with its category. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    lexeme: String,
    category: TokenCategory,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, category: TokenCategory) -> Self {
        Self {
            lexeme: lexeme.into(),
            category,
        }
    }

    /// Synthetic marker emitted once per physical newline
    pub fn end_of_line() -> Self {
        Self::marker(TokenCategory::EndOfLine)
    }

    /// Synthetic marker closing every token sequence
    pub fn end_of_file() -> Self {
        Self::marker(TokenCategory::EndOfFile)
    }

    fn marker(category: TokenCategory) -> Self {
        Self::new(category.spelling().unwrap_or_default(), category)
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }

    pub fn code(&self) -> &'static str {
        self.category.code()
    }

    pub fn is(&self, category: TokenCategory) -> bool {
        self.category == category
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.lexeme, self.category.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        let eoln = Token::end_of_line();
        assert_eq!(eoln.lexeme(), "EOLN");
        assert_eq!(eoln.code(), "24");

        let eof = Token::end_of_file();
        assert_eq!(eof.lexeme(), "EOF");
        assert!(eof.is(TokenCategory::EndOfFile));
    }

    #[test]
    fn test_display_pair() {
        let token = Token::new(":=", TokenCategory::Assign);
        assert_eq!(token.to_string(), "(:=,20)");
    }
}
