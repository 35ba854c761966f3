//! Diagnostic records shared by the scanner and the syntax analyzer
//!
//! Both stages report problems into a [`DiagnosticLog`] and carry on. The log
//! is append-only and keeps report order, so callers can assert on the exact
//! sequence produced for an input. Each record renders as
//! `***<line>: <message>.`

use crate::logging::{codes, Code};
use serde::Serialize;
use std::fmt;

/// Which log a diagnostic belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticChannel {
    Lexical,
    Syntax,
}

/// The six reportable problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    InvalidSymbol,
    IdentifierTooLong,
    MissingEqualsAfterColon,
    SymbolNotFound,
    SymbolNotMatched,
    SymbolNotDefined,
}

impl DiagnosticKind {
    pub fn channel(&self) -> DiagnosticChannel {
        match self {
            Self::InvalidSymbol | Self::IdentifierTooLong | Self::MissingEqualsAfterColon => {
                DiagnosticChannel::Lexical
            }
            Self::SymbolNotFound | Self::SymbolNotMatched | Self::SymbolNotDefined => {
                DiagnosticChannel::Syntax
            }
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::InvalidSymbol => codes::lexical::INVALID_SYMBOL,
            Self::IdentifierTooLong => codes::lexical::IDENTIFIER_TOO_LONG,
            Self::MissingEqualsAfterColon => codes::lexical::MISSING_EQUALS_AFTER_COLON,
            Self::SymbolNotFound => codes::syntax::SYMBOL_NOT_FOUND,
            Self::SymbolNotMatched => codes::syntax::SYMBOL_NOT_MATCHED,
            Self::SymbolNotDefined => codes::syntax::SYMBOL_NOT_DEFINED,
        }
    }

    /// Fill this kind's template with the offending or expected symbol
    pub fn message(&self, symbol: &str) -> String {
        match self {
            Self::InvalidSymbol => format!("invalid symbol '{}'", symbol),
            Self::IdentifierTooLong => format!("identifier '{}' is too long", symbol),
            Self::MissingEqualsAfterColon => format!("missing '=' after '{}'", symbol),
            Self::SymbolNotFound => format!("{} not found", symbol),
            Self::SymbolNotMatched => format!("{} not matched", symbol),
            Self::SymbolNotDefined => format!("{} not defined", symbol),
        }
    }
}

/// A single reported problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub symbol: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize, symbol: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            symbol: symbol.into(),
        }
    }

    pub fn message(&self) -> String {
        self.kind.message(&self.symbol)
    }

    /// Log-file form: `***<line>: <message>.`
    pub fn render(&self) -> String {
        format!("***{}: {}.", self.line, self.message())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Append-only, ordered collection of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic; reporting never interrupts the caller
    pub fn report(&mut self, kind: DiagnosticKind, line: usize, symbol: impl Into<String>) {
        let diagnostic = Diagnostic::new(kind, line, symbol);

        crate::log_debug!("Diagnostic recorded",
            "code" => kind.error_code(),
            "line" => line,
            "message" => diagnostic.message()
        );

        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    /// Every record in log-file form, one per line, newline terminated
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|d| format!("{}\n", d.render()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DiagnosticLog {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
