//! Reserved words, operators and the identifier length limit

use crate::config::compile_time::lexical::MAX_IDENTIFIER_LENGTH;
use crate::diagnostics::DiagnosticKind;
use crate::tokens::{Token, TokenCategory};
use std::collections::HashMap;

/// Immutable lookup data shared by every scan
#[derive(Debug, Clone)]
pub struct Lexicon {
    reserved: HashMap<&'static str, TokenCategory>,
    max_identifier_length: usize,
}

impl Lexicon {
    /// The language's nine keywords and twelve punctuation lexemes
    pub fn standard() -> Self {
        Self::with_max_identifier_length(MAX_IDENTIFIER_LENGTH)
    }

    pub fn with_max_identifier_length(max_identifier_length: usize) -> Self {
        let reserved = TokenCategory::ALL
            .into_iter()
            .filter(TokenCategory::is_reserved)
            .filter_map(|category| category.spelling().map(|text| (text, category)))
            .collect();

        Self {
            reserved,
            max_identifier_length,
        }
    }

    pub fn max_identifier_length(&self) -> usize {
        self.max_identifier_length
    }

    pub fn reserved(&self, text: &str) -> Option<TokenCategory> {
        self.reserved.get(text).copied()
    }

    pub fn reserved_count(&self) -> usize {
        self.reserved.len()
    }

    /// Turn a completed, non-empty lexeme into a token, or name the
    /// diagnostic it earns instead.
    pub fn resolve(&self, text: &str) -> Result<Token, DiagnosticKind> {
        if let Some(category) = self.reserved(text) {
            return Ok(Token::new(text, category));
        }

        if text.chars().count() > self.max_identifier_length {
            return Err(DiagnosticKind::IdentifierTooLong);
        }

        if text.starts_with(':') {
            return Err(DiagnosticKind::MissingEqualsAfterColon);
        }

        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Token::new(text, TokenCategory::Constant))
        } else {
            Ok(Token::new(text, TokenCategory::Identifier))
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_reserved_table() {
        let lexicon = Lexicon::standard();
        assert_eq!(lexicon.reserved_count(), 21);
        assert_eq!(lexicon.reserved("function"), Some(TokenCategory::Function));
        assert_eq!(lexicon.reserved("<>"), Some(TokenCategory::NotEqual));
        assert_eq!(lexicon.reserved(":="), Some(TokenCategory::Assign));
        assert_eq!(lexicon.reserved("EOF"), None);
        assert_eq!(lexicon.reserved("EOLN"), None);
        assert_eq!(lexicon.reserved("Begin"), None);
    }

    #[test]
    fn test_resolve() {
        let lexicon = Lexicon::standard();

        assert_eq!(
            lexicon.resolve("begin").unwrap().category(),
            TokenCategory::Begin
        );
        assert_eq!(
            lexicon.resolve("0042").unwrap().category(),
            TokenCategory::Constant
        );
        assert_eq!(
            lexicon.resolve("x1").unwrap().category(),
            TokenCategory::Identifier
        );
        assert_eq!(
            lexicon.resolve("EOF").unwrap().category(),
            TokenCategory::Identifier
        );
        assert_matches!(lexicon.resolve(":"), Err(DiagnosticKind::MissingEqualsAfterColon));
    }

    #[test]
    fn test_length_limit() {
        let lexicon = Lexicon::standard();
        assert!(lexicon.resolve("abcdefghijklmnop").is_ok());
        assert_matches!(
            lexicon.resolve("abcdefghijklmnopq"),
            Err(DiagnosticKind::IdentifierTooLong)
        );
        assert_matches!(
            lexicon.resolve("12345678901234567"),
            Err(DiagnosticKind::IdentifierTooLong)
        );

        let short = Lexicon::with_max_identifier_length(2);
        assert_matches!(short.resolve("abc"), Err(DiagnosticKind::IdentifierTooLong));
        assert!(short.resolve("begin").is_ok());
    }
}
