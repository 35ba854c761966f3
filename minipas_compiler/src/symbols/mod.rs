//! Symbol tables built during syntax analysis
//!
//! The syntax analyzer registers every declared variable and function here
//! while it parses; the report module exports the finished tables.

pub mod error;
pub mod table;

pub use error::{SymbolError, SymbolResult};
pub use table::{
    NameResolver, PrimitiveType, ProcedureEntry, SymbolRef, SymbolTable, VariableEntry,
    VariableKind, VariableOwner,
};
