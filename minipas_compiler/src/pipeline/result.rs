use crate::diagnostics::DiagnosticLog;
use crate::lexical::LexicalMetrics;
use crate::syntax::SyntaxOutput;
use crate::tokens::TokenStream;
use std::path::PathBuf;
use std::time::Duration;

/// Everything a completed run produced
#[derive(Debug)]
pub struct PipelineResult {
    pub source_path: PathBuf,
    pub tokens: TokenStream,
    pub lexical_diagnostics: DiagnosticLog,
    pub lexical_metrics: LexicalMetrics,
    pub syntax: SyntaxOutput,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn diagnostic_count(&self) -> usize {
        self.lexical_diagnostics.len() + self.syntax.diagnostics.len()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostic_count() == 0
    }

    /// One-line summary printed by the command line
    pub fn summary(&self) -> String {
        format!(
            "tokens: {}, diagnostics: {}, variables: {}, procedures: {}",
            self.tokens.len(),
            self.diagnostic_count(),
            self.syntax.symbols.variable_count(),
            self.syntax.symbols.procedure_count()
        )
    }

    pub fn log_success(&self) {
        crate::log_success!(
            crate::logging::codes::success::PIPELINE_COMPLETE,
            "minipas pipeline completed",
            "file" => self.source_path.display(),
            "tokens" => self.tokens.len(),
            "lexical_errors" => self.lexical_diagnostics.len(),
            "syntax_errors" => self.syntax.diagnostics.len(),
            "duration_ms" => format!("{:.2}", self.processing_duration.as_secs_f64() * 1000.0)
        );
    }
}
