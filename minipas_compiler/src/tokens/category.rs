//! Two-digit category codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical class of a token, identified on disk by a two-digit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    Begin,
    End,
    Integer,
    If,
    Then,
    Else,
    Function,
    Read,
    Write,
    Identifier,
    Constant,
    Equal,
    NotEqual,
    LessOrEqual,
    Less,
    GreaterOrEqual,
    Greater,
    Minus,
    Multiply,
    Assign,
    LeftParen,
    RightParen,
    Semicolon,
    EndOfLine,
    EndOfFile,
}

impl TokenCategory {
    /// All categories in code order
    pub const ALL: [TokenCategory; 25] = [
        Self::Begin,
        Self::End,
        Self::Integer,
        Self::If,
        Self::Then,
        Self::Else,
        Self::Function,
        Self::Read,
        Self::Write,
        Self::Identifier,
        Self::Constant,
        Self::Equal,
        Self::NotEqual,
        Self::LessOrEqual,
        Self::Less,
        Self::GreaterOrEqual,
        Self::Greater,
        Self::Minus,
        Self::Multiply,
        Self::Assign,
        Self::LeftParen,
        Self::RightParen,
        Self::Semicolon,
        Self::EndOfLine,
        Self::EndOfFile,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Begin => "01",
            Self::End => "02",
            Self::Integer => "03",
            Self::If => "04",
            Self::Then => "05",
            Self::Else => "06",
            Self::Function => "07",
            Self::Read => "08",
            Self::Write => "09",
            Self::Identifier => "10",
            Self::Constant => "11",
            Self::Equal => "12",
            Self::NotEqual => "13",
            Self::LessOrEqual => "14",
            Self::Less => "15",
            Self::GreaterOrEqual => "16",
            Self::Greater => "17",
            Self::Minus => "18",
            Self::Multiply => "19",
            Self::Assign => "20",
            Self::LeftParen => "21",
            Self::RightParen => "22",
            Self::Semicolon => "23",
            Self::EndOfLine => "24",
            Self::EndOfFile => "25",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }

    /// Fixed spelling for categories that have one.
    ///
    /// Identifiers and constants carry arbitrary text. The two markers have
    /// a spelling used in the hand-off file but are not reserved in source.
    pub fn spelling(&self) -> Option<&'static str> {
        match self {
            Self::Begin => Some("begin"),
            Self::End => Some("end"),
            Self::Integer => Some("integer"),
            Self::If => Some("if"),
            Self::Then => Some("then"),
            Self::Else => Some("else"),
            Self::Function => Some("function"),
            Self::Read => Some("read"),
            Self::Write => Some("write"),
            Self::Identifier | Self::Constant => None,
            Self::Equal => Some("="),
            Self::NotEqual => Some("<>"),
            Self::LessOrEqual => Some("<="),
            Self::Less => Some("<"),
            Self::GreaterOrEqual => Some(">="),
            Self::Greater => Some(">"),
            Self::Minus => Some("-"),
            Self::Multiply => Some("*"),
            Self::Assign => Some(":="),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::Semicolon => Some(";"),
            Self::EndOfLine => Some("EOLN"),
            Self::EndOfFile => Some("EOF"),
        }
    }

    /// Whether source text spelled like this category resolves to it
    pub fn is_reserved(&self) -> bool {
        !matches!(
            self,
            Self::Identifier | Self::Constant | Self::EndOfLine | Self::EndOfFile
        )
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::Begin
                | Self::End
                | Self::Integer
                | Self::If
                | Self::Then
                | Self::Else
                | Self::Function
                | Self::Read
                | Self::Write
        )
    }

    pub fn is_relational_operator(&self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::LessOrEqual
                | Self::Less
                | Self::GreaterOrEqual
                | Self::Greater
        )
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Self::EndOfLine | Self::EndOfFile)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
