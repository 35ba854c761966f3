//! Lexical analyzer driving the scanner state machine
//!
//! Scanning never fails. Problems are reported into the returned
//! [`DiagnosticLog`] and the scan carries on to the end of input, so the
//! output always ends with exactly one end-of-file marker.

use super::classifier::classify;
use super::lexicon::Lexicon;
use super::state::{transition, ScannerState, Transition};
use crate::diagnostics::{DiagnosticKind, DiagnosticLog};
use crate::file_processor::FileProcessingResult;
use crate::logging::codes;
use crate::tokens::{Token, TokenCategory, TokenStream};
use crate::{log_debug, log_success};
use serde::Serialize;

/// Counters gathered over one scan
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub constant_tokens: usize,
    pub operator_tokens: usize,
    pub line_breaks: usize,
    pub invalid_symbols: usize,
    pub rejected_lexemes: usize,
}

impl LexicalMetrics {
    /// Token counts for an already scanned sequence, such as a loaded hand-off file
    pub fn from_tokens(tokens: &TokenStream) -> Self {
        let mut metrics = Self::default();
        for token in tokens {
            metrics.record_token(token);
        }
        metrics
    }

    pub(crate) fn record_token(&mut self, token: &Token) {
        self.total_tokens += 1;

        match token.category() {
            TokenCategory::Identifier => self.identifier_tokens += 1,
            TokenCategory::Constant => self.constant_tokens += 1,
            TokenCategory::EndOfLine => self.line_breaks += 1,
            TokenCategory::EndOfFile => {}
            c if c.is_keyword() => self.keyword_tokens += 1,
            _ => self.operator_tokens += 1,
        }
    }

    pub(crate) fn record_diagnostic(&mut self, kind: DiagnosticKind) {
        match kind {
            DiagnosticKind::InvalidSymbol => self.invalid_symbols += 1,
            _ => self.rejected_lexemes += 1,
        }
    }
}

/// Everything one scan produces
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub tokens: TokenStream,
    pub diagnostics: DiagnosticLog,
    pub metrics: LexicalMetrics,
}

/// Per-run scanner state: buffer, machine state and current line
struct ScanState<'l> {
    lexicon: &'l Lexicon,
    buffer: String,
    state: ScannerState,
    line: usize,
    tokens: TokenStream,
    diagnostics: DiagnosticLog,
    metrics: LexicalMetrics,
}

impl<'l> ScanState<'l> {
    fn new(lexicon: &'l Lexicon) -> Self {
        Self {
            lexicon,
            buffer: String::new(),
            state: ScannerState::Initial,
            line: 1,
            tokens: TokenStream::default(),
            diagnostics: DiagnosticLog::new(),
            metrics: LexicalMetrics::default(),
        }
    }

    fn emit(&mut self, token: Token) {
        self.metrics.record_token(&token);
        self.tokens.push(token);
    }

    fn report(&mut self, kind: DiagnosticKind, symbol: String) {
        self.metrics.record_diagnostic(kind);
        self.diagnostics.report(kind, self.line, symbol);
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let text = std::mem::take(&mut self.buffer);
        match self.lexicon.resolve(&text) {
            Ok(token) => self.emit(token),
            Err(kind) => self.report(kind, text),
        }
    }

    fn line_break(&mut self) {
        self.flush();
        self.emit(Token::end_of_line());
        self.line += 1;
    }

    fn finish(mut self) -> ScanOutput {
        self.flush();
        self.emit(Token::end_of_file());

        ScanOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
            metrics: self.metrics,
        }
    }
}

/// Scanner bound to a lexicon
pub struct LexicalAnalyzer<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> LexicalAnalyzer<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    /// Scan source text into tokens and lexical diagnostics
    pub fn scan(&self, source: &str) -> ScanOutput {
        let mut scan = ScanState::new(self.lexicon);
        let mut chars = source.chars().peekable();

        while let Some(ch) = chars.next() {
            match transition(scan.state, classify(ch)) {
                Transition::Skip => {}
                Transition::Flush => {
                    scan.flush();
                    scan.state = ScannerState::Initial;
                }
                Transition::Append(next) => {
                    scan.buffer.push(ch);
                    scan.state = next;
                }
                Transition::FlushAppend(next) => {
                    scan.flush();
                    scan.buffer.push(ch);
                    scan.state = next;
                }
                Transition::DiscardAppend(next) => {
                    let mut symbol = std::mem::take(&mut scan.buffer);
                    symbol.push(ch);
                    scan.report(DiagnosticKind::InvalidSymbol, symbol);
                    scan.buffer.push(ch);
                    scan.state = next;
                }
                Transition::AppendFlush => {
                    scan.buffer.push(ch);
                    scan.flush();
                    scan.state = ScannerState::Initial;
                }
                Transition::LineBreak => {
                    // A carriage return swallows the raw character after it
                    if ch == '\r' {
                        chars.next();
                    }
                    scan.line_break();
                }
                Transition::Reject => {
                    scan.report(DiagnosticKind::InvalidSymbol, ch.to_string());
                }
            }
        }

        let output = scan.finish();

        log_debug!("Scan finished",
            "tokens" => output.metrics.total_tokens,
            "line_breaks" => output.metrics.line_breaks,
            "diagnostics" => output.diagnostics.len()
        );

        output
    }

    /// Scan a loaded source file, logging completion against its path
    pub fn tokenize_file_result(&self, file_result: &FileProcessingResult) -> ScanOutput {
        let output = self.scan(&file_result.source);

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Lexical analysis completed",
            "file" => file_result.metadata.path.display(),
            "tokens" => output.metrics.total_tokens,
            "keywords" => output.metrics.keyword_tokens,
            "identifiers" => output.metrics.identifier_tokens,
            "constants" => output.metrics.constant_tokens,
            "operators" => output.metrics.operator_tokens,
            "lexical_errors" => output.diagnostics.len()
        );

        output
    }
}
