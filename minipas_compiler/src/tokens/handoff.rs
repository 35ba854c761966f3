//! Persisted token stream (`.dyd` files)
//!
//! One record per token: the lexeme right-aligned to a fixed width, a space,
//! then the two-digit category code. The final record (the end-of-file
//! marker) has no trailing newline. Reading only relies on whitespace
//! separation, so any record spacing round-trips.

use super::category::TokenCategory;
use super::token::Token;
use super::token_stream::TokenStream;
use crate::config::compile_time::handoff::LEXEME_WIDTH;
use crate::logging::{codes, Code};
use std::fs;
use std::path::Path;

/// Hand-off file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum HandoffError {
    #[error("Incomplete hand-off record: lexeme '{lexeme}' has no category code")]
    MissingCode { lexeme: String },

    #[error("Unknown category code '{code}' for lexeme '{lexeme}'")]
    UnknownCategory { lexeme: String, code: String },

    #[error("Hand-off I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl HandoffError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::MissingCode { .. } => codes::handoff::MALFORMED_RECORD,
            Self::UnknownCategory { .. } => codes::handoff::UNKNOWN_CATEGORY,
            Self::Io { .. } => codes::handoff::HANDOFF_IO_ERROR,
        }
    }
}

/// Render a token sequence in hand-off form
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| {
            format!(
                "{:>width$} {}",
                token.lexeme(),
                token.code(),
                width = LEXEME_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse hand-off text back into a token stream
pub fn parse(content: &str) -> Result<TokenStream, HandoffError> {
    let mut fields = content.split_whitespace();
    let mut stream = TokenStream::default();

    while let Some(lexeme) = fields.next() {
        let code = fields.next().ok_or_else(|| HandoffError::MissingCode {
            lexeme: lexeme.to_string(),
        })?;

        let category =
            TokenCategory::from_code(code).ok_or_else(|| HandoffError::UnknownCategory {
                lexeme: lexeme.to_string(),
                code: code.to_string(),
            })?;

        stream.push(Token::new(lexeme, category));
    }

    Ok(stream)
}

/// Write a token stream to `path`, replacing any previous file
pub fn write_file<P: AsRef<Path>>(path: P, stream: &TokenStream) -> Result<(), HandoffError> {
    let path = path.as_ref();
    fs::write(path, render(stream.as_slice())).map_err(|e| HandoffError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    crate::log_success!(codes::success::HANDOFF_WRITTEN, "Token stream persisted",
        "path" => path.display(),
        "tokens" => stream.len()
    );

    Ok(())
}

/// Load a token stream previously written with [`write_file`]
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<TokenStream, HandoffError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| HandoffError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let stream = parse(&content).inspect_err(|e| {
        crate::log_error!(e.error_code(), "Hand-off file rejected",
            "path" => path.display(),
            "reason" => e
        );
    })?;

    crate::log_success!(codes::success::HANDOFF_LOADED, "Token stream loaded",
        "path" => path.display(),
        "tokens" => stream.len()
    );

    Ok(stream)
}
