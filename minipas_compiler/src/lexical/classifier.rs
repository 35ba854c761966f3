//! Character classes driving the scanner

use serde::Serialize;

/// Input class of a single source character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharCategory {
    Letter,
    Digit,
    Whitespace,
    Newline,
    Equals,
    Minus,
    Star,
    LeftParen,
    RightParen,
    Less,
    Greater,
    Colon,
    Semicolon,
    Other,
}

impl CharCategory {
    pub const ALL: [CharCategory; 14] = [
        Self::Letter,
        Self::Digit,
        Self::Whitespace,
        Self::Newline,
        Self::Equals,
        Self::Minus,
        Self::Star,
        Self::LeftParen,
        Self::RightParen,
        Self::Less,
        Self::Greater,
        Self::Colon,
        Self::Semicolon,
        Self::Other,
    ];
}

/// Classify one character. Only ASCII letters and digits count as such.
pub fn classify(ch: char) -> CharCategory {
    match ch {
        'a'..='z' | 'A'..='Z' => CharCategory::Letter,
        '0'..='9' => CharCategory::Digit,
        '\n' | '\r' => CharCategory::Newline,
        '=' => CharCategory::Equals,
        '-' => CharCategory::Minus,
        '*' => CharCategory::Star,
        '(' => CharCategory::LeftParen,
        ')' => CharCategory::RightParen,
        '<' => CharCategory::Less,
        '>' => CharCategory::Greater,
        ':' => CharCategory::Colon,
        ';' => CharCategory::Semicolon,
        c if c.is_ascii_whitespace() => CharCategory::Whitespace,
        _ => CharCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify('q'), CharCategory::Letter);
        assert_eq!(classify('Z'), CharCategory::Letter);
        assert_eq!(classify('7'), CharCategory::Digit);
        assert_eq!(classify(' '), CharCategory::Whitespace);
        assert_eq!(classify('\t'), CharCategory::Whitespace);
        assert_eq!(classify('\r'), CharCategory::Newline);
        assert_eq!(classify('\n'), CharCategory::Newline);
        assert_eq!(classify(':'), CharCategory::Colon);
        assert_eq!(classify('$'), CharCategory::Other);
        assert_eq!(classify('+'), CharCategory::Other);
        assert_eq!(classify('é'), CharCategory::Other);
        assert_eq!(classify('٣'), CharCategory::Other);
    }
}
