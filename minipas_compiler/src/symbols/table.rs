//! Flat variable and procedure registries
//!
//! Variables are addressed by slot, their position in registration order.
//! Procedures record the contiguous slot range `[first_slot, last_slot]`
//! holding their parameter and locals. Both tables only grow.

use super::error::{SymbolError, SymbolResult};
use crate::config::compile_time::report::TOP_LEVEL_OWNER;
use serde::Serialize;
use std::fmt;

/// The language's only value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PrimitiveType {
    #[default]
    Integer,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Region a variable was declared in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum VariableOwner {
    Main,
    Procedure(String),
}

impl VariableOwner {
    pub fn name(&self) -> &str {
        match self {
            Self::Main => TOP_LEVEL_OWNER,
            Self::Procedure(name) => name,
        }
    }
}

impl fmt::Display for VariableOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VariableKind {
    Local,
    Parameter,
}

impl VariableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Parameter => "parameter",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableEntry {
    pub name: String,
    pub owner: VariableOwner,
    pub kind: VariableKind,
    pub var_type: PrimitiveType,
    pub level: usize,
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureEntry {
    pub name: String,
    pub return_type: PrimitiveType,
    pub level: usize,
    pub first_slot: usize,
    pub last_slot: usize,
    /// Set once the body has been parsed and `last_slot` is final
    pub closed: bool,
}

/// Entry a name resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolRef {
    Variable { slot: usize },
    Procedure { index: usize },
}

/// Name lookup used by the syntax analyzer for assignment targets
pub trait NameResolver {
    fn resolve(&self, name: &str) -> Option<SymbolRef>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    variables: Vec<VariableEntry>,
    procedures: Vec<ProcedureEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a variable, returning its slot
    pub fn register_variable(
        &mut self,
        name: impl Into<String>,
        owner: VariableOwner,
        kind: VariableKind,
        level: usize,
    ) -> usize {
        let slot = self.variables.len();
        self.variables.push(VariableEntry {
            name: name.into(),
            owner,
            kind,
            var_type: PrimitiveType::Integer,
            level,
            slot,
        });
        slot
    }

    /// Append a procedure whose range starts at an already registered slot.
    /// Returns the procedure's index.
    pub fn register_procedure(
        &mut self,
        name: impl Into<String>,
        level: usize,
        first_slot: usize,
    ) -> SymbolResult<usize> {
        let name = name.into();
        if first_slot >= self.variables.len() {
            return Err(SymbolError::slot_out_of_range(
                format!("first slot of procedure '{}'", name),
                first_slot,
            ));
        }

        let index = self.procedures.len();
        self.procedures.push(ProcedureEntry {
            name,
            return_type: PrimitiveType::Integer,
            level,
            first_slot,
            last_slot: first_slot,
            closed: false,
        });
        Ok(index)
    }

    /// Fix a procedure's last slot. Allowed once per procedure.
    pub fn close_procedure(&mut self, index: usize, last_slot: usize) -> SymbolResult<()> {
        let variable_count = self.variables.len();
        let procedure = self
            .procedures
            .get_mut(index)
            .ok_or(SymbolError::UnknownProcedure { index })?;

        if procedure.closed {
            return Err(SymbolError::ProcedureAlreadyClosed {
                name: procedure.name.clone(),
            });
        }

        if last_slot < procedure.first_slot || last_slot >= variable_count {
            return Err(SymbolError::slot_out_of_range(
                format!("last slot of procedure '{}'", procedure.name),
                last_slot,
            ));
        }

        procedure.last_slot = last_slot;
        procedure.closed = true;
        Ok(())
    }

    pub fn variables(&self) -> &[VariableEntry] {
        &self.variables
    }

    pub fn procedures(&self) -> &[ProcedureEntry] {
        &self.procedures
    }

    pub fn variable(&self, slot: usize) -> Option<&VariableEntry> {
        self.variables.get(slot)
    }

    pub fn procedure(&self, index: usize) -> Option<&ProcedureEntry> {
        self.procedures.get(index)
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn procedure_count(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.procedures.is_empty()
    }

    /// Check slot numbering and that each closed procedure's own
    /// variables lie inside its range.
    pub fn validate(&self) -> SymbolResult<()> {
        for (index, variable) in self.variables.iter().enumerate() {
            if variable.slot != index {
                return Err(SymbolError::slot_out_of_range(
                    format!("variable '{}' registered at position {}", variable.name, index),
                    variable.slot,
                ));
            }
        }

        for procedure in self.procedures.iter().filter(|p| p.closed) {
            let owned = self.variables.iter().filter(|v| {
                v.level == procedure.level
                    && matches!(&v.owner, VariableOwner::Procedure(owner) if *owner == procedure.name)
            });

            for variable in owned {
                if variable.slot < procedure.first_slot || variable.slot > procedure.last_slot {
                    return Err(SymbolError::slot_out_of_range(
                        format!("procedure '{}'", procedure.name),
                        variable.slot,
                    ));
                }
            }
        }

        Ok(())
    }
}

impl NameResolver for SymbolTable {
    /// Variables are searched before procedures; the earliest match wins
    fn resolve(&self, name: &str) -> Option<SymbolRef> {
        if let Some(variable) = self.variables.iter().find(|v| v.name == name) {
            return Some(SymbolRef::Variable {
                slot: variable.slot,
            });
        }

        self.procedures
            .iter()
            .position(|p| p.name == name)
            .map(|index| SymbolRef::Procedure { index })
    }
}
