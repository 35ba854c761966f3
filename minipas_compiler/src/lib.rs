// Internal modules
pub mod config;
pub mod diagnostics;
pub mod file_processor;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod symbols;
pub mod syntax;
pub mod tokens;

// Re-export key types for library consumers
pub use pipeline::{PipelineError, PipelineResult};

// Re-export pipeline output for JSON consumers
pub use pipeline::output::PipelineOutput;
