//! Symbol table errors

use crate::logging::{codes, Code};

/// Result type for symbol table operations
pub type SymbolResult<T> = Result<T, SymbolError>;

/// Misuse of the symbol table's registration protocol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    #[error("No procedure registered at index {index}")]
    UnknownProcedure { index: usize },

    #[error("Procedure '{name}' already has its last slot set")]
    ProcedureAlreadyClosed { name: String },

    #[error("Slot {slot} out of range for {context}")]
    SlotOutOfRange { context: String, slot: usize },
}

impl SymbolError {
    pub fn slot_out_of_range(context: impl Into<String>, slot: usize) -> Self {
        Self::SlotOutOfRange {
            context: context.into(),
            slot,
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::UnknownProcedure { .. } => codes::symbols::UNKNOWN_PROCEDURE,
            Self::ProcedureAlreadyClosed { .. } => codes::symbols::PROCEDURE_ALREADY_CLOSED,
            Self::SlotOutOfRange { .. } => codes::symbols::SLOT_OUT_OF_RANGE,
        }
    }
}
