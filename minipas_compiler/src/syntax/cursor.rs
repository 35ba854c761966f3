//! Position tracking over a scanned token sequence

use crate::tokens::{Token, TokenCategory};

/// Read position into a token slice that steps over end-of-line markers.
///
/// The line number starts at 1 and counts every marker stepped over. Reads
/// past the end of the slice yield an end-of-file token.
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
    line: usize,
    end: Token,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let mut cursor = Self {
            tokens,
            position: 0,
            line: 1,
            end: Token::end_of_file(),
        };
        cursor.skip_line_breaks();
        cursor
    }

    fn at(&self, index: usize) -> &Token {
        self.tokens.get(index).unwrap_or(&self.end)
    }

    fn skip_line_breaks(&mut self) {
        while self.at(self.position).is(TokenCategory::EndOfLine) {
            self.position += 1;
            self.line += 1;
        }
    }

    pub fn current(&self) -> &Token {
        self.at(self.position)
    }

    pub fn current_is(&self, category: TokenCategory) -> bool {
        self.current().is(category)
    }

    pub fn lexeme(&self) -> &str {
        self.current().lexeme()
    }

    /// Move to the next token that is not an end-of-line marker
    pub fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.skip_line_breaks();
    }

    /// The token directly after the current one, markers included
    pub fn peek_raw(&self) -> &Token {
        self.at(self.position + 1)
    }

    /// The token after the current one, looking past at most one
    /// end-of-line marker
    pub fn peek_past_line_break(&self) -> &Token {
        let next = self.at(self.position + 1);
        if next.is(TokenCategory::EndOfLine) {
            self.at(self.position + 2)
        } else {
            next
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn at_end(&self) -> bool {
        self.current_is(TokenCategory::EndOfFile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[(&str, TokenCategory)]) -> Vec<Token> {
        items.iter().map(|(l, c)| Token::new(*l, *c)).collect()
    }

    #[test]
    fn test_leading_and_repeated_line_breaks() {
        let tokens = tokens(&[
            ("EOLN", TokenCategory::EndOfLine),
            ("EOLN", TokenCategory::EndOfLine),
            ("begin", TokenCategory::Begin),
            ("EOLN", TokenCategory::EndOfLine),
            ("EOLN", TokenCategory::EndOfLine),
            ("EOLN", TokenCategory::EndOfLine),
            ("end", TokenCategory::End),
            ("EOF", TokenCategory::EndOfFile),
        ]);
        let mut cursor = TokenCursor::new(&tokens);

        assert_eq!(cursor.lexeme(), "begin");
        assert_eq!(cursor.line(), 3);

        cursor.advance();
        assert_eq!(cursor.lexeme(), "end");
        assert_eq!(cursor.line(), 6);

        cursor.advance();
        assert!(cursor.at_end());
    }

    #[test]
    fn test_reading_past_end() {
        let tokens = tokens(&[("x", TokenCategory::Identifier)]);
        let mut cursor = TokenCursor::new(&tokens);

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.lexeme(), "EOF");
        assert_eq!(cursor.current().category(), TokenCategory::EndOfFile);
        assert_eq!(cursor.position(), 1);

        let empty: Vec<Token> = Vec::new();
        assert!(TokenCursor::new(&empty).at_end());
    }

    #[test]
    fn test_lookahead() {
        let tokens = tokens(&[
            (";", TokenCategory::Semicolon),
            ("EOLN", TokenCategory::EndOfLine),
            ("integer", TokenCategory::Integer),
            ("(", TokenCategory::LeftParen),
        ]);
        let cursor = TokenCursor::new(&tokens);

        assert!(cursor.peek_raw().is(TokenCategory::EndOfLine));
        assert!(cursor.peek_past_line_break().is(TokenCategory::Integer));
    }
}
