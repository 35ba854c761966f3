//! Table and diagnostic log output
//!
//! Tables are rewritten on every run. Diagnostic logs are only ever
//! appended to, so repeated runs accumulate.

use crate::config::compile_time::report::COLUMN_WIDTH;
use crate::diagnostics::DiagnosticLog;
use crate::logging::{codes, Code};
use crate::symbols::{ProcedureEntry, SymbolTable, VariableEntry};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },
}

impl ReportError {
    pub(crate) fn io(path: &Path, error: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        codes::output::REPORT_WRITE_FAILED
    }
}

/// Create the output directory when it does not exist yet
pub fn ensure_output_dir(dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))
}

fn row(columns: &[&dyn std::fmt::Display]) -> String {
    let mut line: String = columns
        .iter()
        .map(|column| format!("{:<width$}", column.to_string(), width = COLUMN_WIDTH))
        .collect();
    line.push('\n');
    line
}

pub fn variable_row(entry: &VariableEntry) -> String {
    row(&[
        &entry.name,
        &entry.owner,
        &entry.kind,
        &entry.var_type,
        &entry.level,
        &entry.slot,
    ])
}

pub fn procedure_row(entry: &ProcedureEntry) -> String {
    row(&[
        &entry.name,
        &entry.return_type,
        &entry.level,
        &entry.first_slot,
        &entry.last_slot,
    ])
}

/// Variable table in registration order
pub fn render_variables(symbols: &SymbolTable) -> String {
    symbols.variables().iter().map(variable_row).collect()
}

/// Procedure table in registration order
pub fn render_procedures(symbols: &SymbolTable) -> String {
    symbols.procedures().iter().map(procedure_row).collect()
}

/// Replace both table files with the current tables
pub fn write_tables(
    symbols: &SymbolTable,
    variable_path: &Path,
    procedure_path: &Path,
) -> Result<(), ReportError> {
    fs::write(variable_path, render_variables(symbols))
        .map_err(|e| ReportError::io(variable_path, e))?;
    fs::write(procedure_path, render_procedures(symbols))
        .map_err(|e| ReportError::io(procedure_path, e))?;

    crate::log_success!(codes::success::REPORT_EXPORT_COMPLETE, "Symbol tables exported",
        "variables" => symbols.variable_count(),
        "procedures" => symbols.procedure_count(),
        "variable_table" => variable_path.display(),
        "procedure_table" => procedure_path.display()
    );

    Ok(())
}

/// Append every record of `log` to the file at `path`, creating it if needed
pub fn append_diagnostics(path: &Path, log: &DiagnosticLog) -> Result<(), ReportError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ReportError::io(path, e))?;

    file.write_all(log.render().as_bytes())
        .map_err(|e| ReportError::io(path, e))?;

    crate::log_debug!("Diagnostics appended",
        "path" => path.display(),
        "records" => log.len()
    );

    Ok(())
}
