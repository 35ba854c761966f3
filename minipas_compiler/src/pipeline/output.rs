use super::error::PipelineError;
use super::result::PipelineResult;
use crate::diagnostics::Diagnostic;
use crate::lexical::LexicalMetrics;
use crate::report::ReportError;
use crate::symbols::{ProcedureEntry, VariableEntry};
use crate::syntax::ResolvedReference;
use crate::tokens::Token;
use serde::Serialize;
use std::path::Path;

/// Machine-readable summary of one run
#[derive(Debug, Serialize)]
pub struct PipelineOutput<'a> {
    pub source: String,
    pub tokens: &'a [Token],
    pub lexical_diagnostics: &'a [Diagnostic],
    pub syntax_diagnostics: &'a [Diagnostic],
    pub variables: &'a [VariableEntry],
    pub procedures: &'a [ProcedureEntry],
    pub resolutions: &'a [ResolvedReference],
    pub metrics: &'a LexicalMetrics,
    pub reached_eof: bool,
}

impl<'a> PipelineOutput<'a> {
    pub fn new(result: &'a PipelineResult) -> Self {
        Self {
            source: result.source_path.display().to_string(),
            tokens: result.tokens.as_slice(),
            lexical_diagnostics: result.lexical_diagnostics.entries(),
            syntax_diagnostics: result.syntax.diagnostics.entries(),
            variables: result.syntax.symbols.variables(),
            procedures: result.syntax.symbols.procedures(),
            resolutions: &result.syntax.resolutions,
            metrics: &result.lexical_metrics,
            reached_eof: result.syntax.reached_eof,
        }
    }

    pub fn to_json(&self) -> Result<String, PipelineError> {
        serde_json::to_string_pretty(self).map_err(|e| PipelineError::Pipeline {
            message: format!("Failed to serialize summary: {}", e),
        })
    }

    pub fn write_file(&self, path: &Path) -> Result<(), PipelineError> {
        std::fs::write(path, self.to_json()?).map_err(|e| ReportError::io(path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::Lexicon;
    use crate::pipeline::analyze_source;
    use assert_matches::assert_matches;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::tempdir;

    fn sample_result() -> PipelineResult {
        let outcome = analyze_source("begin integer x; x := 1 end", &Lexicon::standard());
        PipelineResult {
            source_path: PathBuf::from("tiny.pas"),
            tokens: outcome.scan.tokens,
            lexical_diagnostics: outcome.scan.diagnostics,
            lexical_metrics: outcome.scan.metrics,
            syntax: outcome.syntax.unwrap(),
            processing_duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_unwritable_summary_is_a_report_error() {
        let dir = tempdir().unwrap();
        let result = sample_result();
        let path = dir.path().join("missing").join("tiny.json");

        let error = PipelineOutput::new(&result).write_file(&path).unwrap_err();

        assert_matches!(error, PipelineError::Report(ReportError::Io { .. }));
        assert_eq!(error.stage(), "report output");
    }

    #[test]
    fn test_summary_lists_resolutions() {
        let result = sample_result();
        let json: serde_json::Value =
            serde_json::from_str(&PipelineOutput::new(&result).to_json().unwrap()).unwrap();

        assert_eq!(json["source"], "tiny.pas");
        assert_eq!(json["resolutions"][0]["name"], "x");
        assert_eq!(json["metrics"]["total_tokens"], 9);
    }
}
