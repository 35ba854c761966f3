//! Ordered token sequence handed from the scanner to the analyzer

use super::category::TokenCategory;
use super::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete, already-scanned token sequence.
///
/// The scanner builds it once; afterwards it is only read. A well-formed
/// stream ends with exactly one end-of-file marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    pub fn count_of(&self, category: TokenCategory) -> usize {
        self.tokens.iter().filter(|t| t.is(category)).count()
    }

    /// Number of end-of-line markers, one per physical source line break
    pub fn line_break_count(&self) -> usize {
        self.count_of(TokenCategory::EndOfLine)
    }

    /// Tokens other than the two synthetic markers
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.category().is_marker())
    }

    pub fn ends_with_eof(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|t| t.is(TokenCategory::EndOfFile))
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
