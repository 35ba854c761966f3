use crate::file_processor::FileProcessorError;
use crate::logging::{codes, Code};
use crate::report::ReportError;
use crate::syntax::SyntaxError;
use crate::tokens::HandoffError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Token hand-off failed: {0}")]
    Handoff(#[from] HandoffError),

    #[error("Syntax analysis failed: {0}")]
    SyntaxAnalysis(#[from] SyntaxError),

    #[error("Report output failed: {0}")]
    Report(#[from] ReportError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::FileProcessing(e) => e.error_code(),
            Self::Handoff(e) => e.error_code(),
            Self::SyntaxAnalysis(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::Pipeline { .. } => codes::system::INTERNAL_ERROR,
        }
    }

    /// Which stage stopped the run
    pub fn stage(&self) -> &'static str {
        match self {
            Self::FileProcessing(_) => "file processing",
            Self::Handoff(_) => "token hand-off",
            Self::SyntaxAnalysis(_) => "syntax analysis",
            Self::Report(_) => "report output",
            Self::Pipeline { .. } => "pipeline",
        }
    }
}
