//! End-to-end compilation runs
//!
//! [`process_file`] takes a source file through loading, scanning, the
//! optional `.dyd` hand-off, syntax analysis and table export, writing every
//! artifact under the configured output directory. [`analyze_source`] runs
//! the two analysis stages in memory with no I/O.

mod error;
pub mod output;
mod result;
mod validation;

pub use error::PipelineError;
pub use output::PipelineOutput;
pub use result::PipelineResult;
pub use validation::validate_pipeline;

use crate::config::compile_time::handoff::FILE_EXTENSION;
use crate::config::RuntimeConfig;
use crate::diagnostics::DiagnosticLog;
use crate::file_processor::FileProcessor;
use crate::lexical::{self, LexicalMetrics, Lexicon, ScanOutput};
use crate::logging;
use crate::report;
use crate::syntax::{self, SyntaxAbort, SyntaxOutput};
use crate::tokens::{handoff, TokenStream};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// In-memory result of scanning and parsing one source text
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub scan: ScanOutput,
    pub syntax: Result<SyntaxOutput, SyntaxAbort>,
}

impl AnalysisOutcome {
    pub fn is_aborted(&self) -> bool {
        self.syntax.is_err()
    }

    /// Syntax diagnostics, including those recorded before an abort
    pub fn syntax_diagnostics(&self) -> &DiagnosticLog {
        match &self.syntax {
            Ok(output) => &output.diagnostics,
            Err(abort) => &abort.diagnostics,
        }
    }
}

/// Scan and parse `source` without touching the file system
pub fn analyze_source(source: &str, lexicon: &Lexicon) -> AnalysisOutcome {
    let scan = lexical::scan(source, lexicon);
    let syntax = syntax::analyze(scan.tokens.as_slice());
    AnalysisOutcome { scan, syntax }
}

/// Compile one source file, writing logs and tables per `config`
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    config: &RuntimeConfig,
) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();
    let file_path = file_path.as_ref();

    logging::with_file_context(file_path.to_path_buf(), || {
        crate::log_info!("Starting minipas pipeline", "file" => file_path.display());

        let output = &config.output;
        report::ensure_output_dir(&output.output_dir)?;

        // Stage 1: File processing
        let file_result =
            FileProcessor::from_preferences(&config.file_processor).process_file(file_path)?;
        let stem = file_result.metadata.stem();

        // Stage 2: Lexical analysis
        let lexicon = Lexicon::standard();
        let scan = lexical::tokenize_file_result(&file_result, &lexicon);

        // Stage 3: Hand-off file
        if output.persist_handoff {
            let handoff_path = output
                .output_dir
                .join(format!("{}.{}", stem, FILE_EXTENSION));
            handoff::write_file(&handoff_path, &scan.tokens)?;
        }

        // Stage 4: Lexical log
        report::append_diagnostics(&output.lexical_log_path(), &scan.diagnostics)?;

        complete_run(
            file_result.metadata.path,
            &stem,
            scan.tokens,
            scan.diagnostics,
            scan.metrics,
            config,
            start_time,
        )
    })
}

/// Parse a persisted `.dyd` token stream and export its tables
pub fn process_handoff_file<P: AsRef<Path>>(
    handoff_path: P,
    config: &RuntimeConfig,
) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();
    let handoff_path = handoff_path.as_ref();

    logging::with_file_context(handoff_path.to_path_buf(), || {
        crate::log_info!("Starting minipas pipeline from hand-off file",
            "file" => handoff_path.display());

        report::ensure_output_dir(&config.output.output_dir)?;

        let tokens = handoff::read_file(handoff_path)?;
        let metrics = LexicalMetrics::from_tokens(&tokens);
        let stem = handoff_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "source".to_string());

        complete_run(
            handoff_path.to_path_buf(),
            &stem,
            tokens,
            DiagnosticLog::new(),
            metrics,
            config,
            start_time,
        )
    })
}

/// Syntax analysis, syntax log, tables and summary
fn complete_run(
    source_path: PathBuf,
    stem: &str,
    tokens: TokenStream,
    lexical_diagnostics: DiagnosticLog,
    lexical_metrics: LexicalMetrics,
    config: &RuntimeConfig,
    start_time: Instant,
) -> Result<PipelineResult, PipelineError> {
    let output = &config.output;

    // Stage 5: Syntax analysis, Stage 6: syntax log
    let syntax = match syntax::analyze(tokens.as_slice()) {
        Ok(syntax) => {
            report::append_diagnostics(&output.syntax_log_path(), &syntax.diagnostics)?;
            syntax
        }
        Err(abort) => {
            report::append_diagnostics(&output.syntax_log_path(), &abort.diagnostics)?;
            return Err(abort.error.into());
        }
    };

    if !syntax.reached_eof {
        crate::log_warning!("Tokens remain after the end of the program",
            "line" => syntax.final_line);
    }

    // Stage 7: Table export
    report::write_tables(
        &syntax.symbols,
        &output.variable_table_path(),
        &output.procedure_table_path(),
    )?;

    let result = PipelineResult {
        source_path,
        tokens,
        lexical_diagnostics,
        lexical_metrics,
        syntax,
        processing_duration: start_time.elapsed(),
    };

    // Stage 8: JSON summary
    if output.emit_json_summary {
        PipelineOutput::new(&result).write_file(&output.output_dir.join(format!("{}.json", stem)))?;
    }

    result.log_success();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::OutputPreferences;
    use crate::symbols::SymbolRef;
    use crate::syntax::SyntaxError;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    const FACTORIAL: &str = "begin
  integer k;
  integer function F(n);
  begin
    integer n;
    if n <= 0 then F := 1
    else F := n * F(n - 1)
  end;
  read(m);
  k := F(m);
  write(k)
end
";

    fn config_in(dir: &TempDir) -> RuntimeConfig {
        RuntimeConfig {
            output: OutputPreferences {
                persist_handoff: true,
                emit_json_summary: false,
                ..OutputPreferences::in_dir(dir.path())
            },
            ..RuntimeConfig::default()
        }
    }

    fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_analyze_source_in_memory() {
        let outcome = analyze_source("begin integer x; x:=1 end", &Lexicon::standard());

        assert!(!outcome.is_aborted());
        assert_eq!(outcome.scan.tokens.len(), 9);
        assert!(outcome.syntax_diagnostics().is_empty());

        let outcome = analyze_source("begin integer x integer y; x:=1 end", &Lexicon::standard());
        assert!(outcome.is_aborted());
        assert_eq!(outcome.syntax_diagnostics().len(), 1);
    }

    #[test]
    fn test_process_file_writes_artifacts() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        let source = write_source(&src, "fact.pas", FACTORIAL);

        let result = process_file(&source, &config_in(&out)).unwrap();

        assert!(result.lexical_diagnostics.is_empty());
        assert_eq!(result.tokens.line_break_count(), FACTORIAL.matches('\n').count());
        assert!(result.syntax.reached_eof);

        let procedures = result.syntax.symbols.procedures();
        assert_eq!(procedures.len(), 1);
        assert_eq!((procedures[0].first_slot, procedures[0].last_slot), (1, 2));

        // F := ... resolves to the procedure, k := ... to the main variable
        let targets: Vec<_> = result.syntax.resolutions.iter().map(|r| r.target).collect();
        assert_eq!(
            targets,
            vec![
                Some(SymbolRef::Procedure { index: 0 }),
                Some(SymbolRef::Procedure { index: 0 }),
                Some(SymbolRef::Variable { slot: 0 }),
            ]
        );
        assert_eq!(
            fs::read_to_string(out.path().join("grammarError.err")).unwrap(),
            ""
        );

        let handoff = fs::read_to_string(out.path().join("fact.dyd")).unwrap();
        assert!(handoff.starts_with("           begin 01\n"));
        assert!(handoff.ends_with("             EOF 25"));

        let variables = fs::read_to_string(out.path().join("variableList.var")).unwrap();
        assert_eq!(variables.lines().count(), 3);
        assert!(variables.starts_with("k         main      local     integer   0         0"));
        assert!(out.path().join("processList.pro").exists());
        assert!(out.path().join("lexicalError.err").exists());
        assert!(!out.path().join("fact.json").exists());

        assert_eq!(
            result.summary(),
            format!("tokens: {}, diagnostics: 0, variables: 3, procedures: 1", result.tokens.len())
        );
    }

    #[test]
    fn test_fatal_declaration_skips_tables() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        let source = write_source(&src, "bad.pas", "begin\n  integer x\n  x := 1\n end\n");

        let error = process_file(&source, &config_in(&out)).unwrap_err();

        assert_matches!(
            error,
            PipelineError::SyntaxAnalysis(SyntaxError::MalformedVariableDeclaration { line: 3, .. })
        );
        assert_eq!(
            fs::read_to_string(out.path().join("grammarError.err")).unwrap(),
            "***3: variable or function not found.\n"
        );
        assert!(!out.path().join("variableList.var").exists());
        assert!(!out.path().join("processList.pro").exists());
    }

    #[test]
    fn test_logs_accumulate_across_runs() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        let source = write_source(&src, "odd.pas", "begin integer x; x := 1 $ end");
        let config = config_in(&out);

        process_file(&source, &config).unwrap();
        process_file(&source, &config).unwrap();

        assert_eq!(
            fs::read_to_string(out.path().join("lexicalError.err")).unwrap(),
            "***1: invalid symbol '$'.\n***1: invalid symbol '$'.\n"
        );
        let variables = fs::read_to_string(out.path().join("variableList.var")).unwrap();
        assert_eq!(variables.lines().count(), 1);
    }

    #[test]
    fn test_handoff_round_trip_through_pipeline() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        let source = write_source(&src, "fact.pas", FACTORIAL);
        let config = config_in(&out);

        let direct = process_file(&source, &config).unwrap();
        let from_handoff = process_handoff_file(out.path().join("fact.dyd"), &config).unwrap();

        assert_eq!(from_handoff.tokens, direct.tokens);
        assert_eq!(from_handoff.syntax.symbols, direct.syntax.symbols);
        assert_eq!(from_handoff.lexical_metrics.total_tokens, direct.lexical_metrics.total_tokens);
    }

    #[test]
    fn test_json_summary_and_output_dir_creation() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        let nested = out.path().join("build").join("minipas");
        let source = write_source(&src, "tiny.pas", "begin integer x; x := 1 end");

        let mut config = RuntimeConfig::default();
        config.output = OutputPreferences {
            persist_handoff: false,
            emit_json_summary: true,
            ..OutputPreferences::in_dir(&nested)
        };

        process_file(&source, &config).unwrap();

        assert!(!nested.join("tiny.dyd").exists());
        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(nested.join("tiny.json")).unwrap()).unwrap();
        assert_eq!(summary["variables"][0]["name"], "x");
        assert_eq!(summary["variables"][0]["owner"], "Main");
        assert_eq!(summary["reached_eof"], true);
        assert_eq!(summary["tokens"].as_array().map(|t| t.len()), Some(9));
    }

    #[test]
    fn test_missing_source() {
        let out = tempdir().unwrap();
        let error = process_file(out.path().join("nope.pas"), &config_in(&out)).unwrap_err();
        assert_matches!(error, PipelineError::FileProcessing(_));
        assert_eq!(error.stage(), "file processing");
    }

    #[test]
    fn test_validate_pipeline() {
        assert!(validate_pipeline().is_ok());
    }
}
