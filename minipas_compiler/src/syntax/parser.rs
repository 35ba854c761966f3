//! Recursive-descent syntax analyzer
//!
//! One method per production. Each takes the cursor explicitly and leaves it
//! on the first token it did not consume. An unmet expectation is reported
//! at the cursor's line and the production returns without consuming the
//! offending token. Declarations register symbols as they are parsed.

use super::cursor::TokenCursor;
use super::error::{SyntaxAbort, SyntaxError, SyntaxResult};
use crate::diagnostics::{DiagnosticKind, DiagnosticLog};
use crate::logging::codes;
use crate::symbols::{NameResolver, SymbolRef, SymbolTable, VariableKind, VariableOwner};
use crate::tokens::{Token, TokenCategory};
use crate::{log_debug, log_error, log_success};
use serde::Serialize;

/// Binding of one assignment target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedReference {
    pub name: String,
    pub line: usize,
    pub target: Option<SymbolRef>,
}

/// Result of a completed analysis
#[derive(Debug, Clone)]
pub struct SyntaxOutput {
    pub symbols: SymbolTable,
    pub diagnostics: DiagnosticLog,
    pub resolutions: Vec<ResolvedReference>,
    /// Whether the program ended exactly at the end-of-file marker
    pub reached_eof: bool,
    /// Line of the first token after the program
    pub final_line: usize,
}

/// Parser state for one analysis run
#[derive(Debug, Default)]
pub struct SyntaxAnalyzer {
    symbols: SymbolTable,
    diagnostics: DiagnosticLog,
    level: usize,
    enclosing: Vec<String>,
    resolutions: Vec<ResolvedReference>,
}

impl SyntaxAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole program.
    ///
    /// Returns `Err` only when the analysis had to stop; the abort carries
    /// every diagnostic recorded up to that point.
    pub fn analyze(mut self, tokens: &[Token]) -> Result<SyntaxOutput, SyntaxAbort> {
        log_debug!("Starting syntax analysis", "tokens" => tokens.len());

        let mut cursor = TokenCursor::new(tokens);

        if let Err(error) = self.parse_program(&mut cursor) {
            log_error!(error.error_code(), "Syntax analysis aborted",
                "error" => &error,
                "diagnostics" => self.diagnostics.len()
            );
            return Err(SyntaxAbort {
                error,
                diagnostics: self.diagnostics,
            });
        }

        let output = SyntaxOutput {
            reached_eof: cursor.at_end(),
            final_line: cursor.line(),
            symbols: self.symbols,
            diagnostics: self.diagnostics,
            resolutions: self.resolutions,
        };

        log_success!(codes::success::SYNTAX_ANALYSIS_COMPLETE, "Syntax analysis completed",
            "variables" => output.symbols.variable_count(),
            "procedures" => output.symbols.procedure_count(),
            "syntax_errors" => output.diagnostics.len(),
            "reached_eof" => output.reached_eof
        );

        Ok(output)
    }

    fn report(&mut self, kind: DiagnosticKind, cursor: &TokenCursor<'_>, symbol: &str) {
        self.diagnostics.report(kind, cursor.line(), symbol);
    }

    fn expected(&mut self, cursor: &TokenCursor<'_>, symbol: &str) {
        self.report(DiagnosticKind::SymbolNotFound, cursor, symbol);
    }

    fn current_owner(&self) -> VariableOwner {
        match self.enclosing.last() {
            Some(name) if self.level > 0 => VariableOwner::Procedure(name.clone()),
            _ => VariableOwner::Main,
        }
    }

    // === PROGRAM STRUCTURE ===

    fn parse_program(&mut self, cursor: &mut TokenCursor<'_>) -> SyntaxResult<()> {
        self.parse_block(cursor)?;
        Ok(())
    }

    /// Block := "begin" DeclarationList ";" StatementList "end"
    ///
    /// Yields the slot of the last variable declared directly in this block.
    fn parse_block(&mut self, cursor: &mut TokenCursor<'_>) -> SyntaxResult<Option<usize>> {
        if !cursor.current_is(TokenCategory::Begin) {
            self.expected(cursor, "begin");
            return Ok(None);
        }
        cursor.advance();

        let last_local = self.parse_declaration_list(cursor)?;

        if !cursor.current_is(TokenCategory::Semicolon) {
            self.expected(cursor, ";");
            return Ok(last_local);
        }
        cursor.advance();

        self.parse_statement_list(cursor);

        if !cursor.current_is(TokenCategory::End) {
            self.expected(cursor, "end");
            return Ok(last_local);
        }
        cursor.advance();

        Ok(last_local)
    }

    // === DECLARATIONS ===

    fn parse_declaration_list(
        &mut self,
        cursor: &mut TokenCursor<'_>,
    ) -> SyntaxResult<Option<usize>> {
        let mut last_local = self.parse_declaration(cursor)?;

        while cursor.peek_past_line_break().is(TokenCategory::Integer) {
            cursor.advance();
            last_local = self.parse_declaration(cursor)?.or(last_local);
        }

        Ok(last_local)
    }

    fn parse_declaration(&mut self, cursor: &mut TokenCursor<'_>) -> SyntaxResult<Option<usize>> {
        if !cursor.current_is(TokenCategory::Integer) {
            self.expected(cursor, "variable or function");
            return Ok(None);
        }

        match cursor.peek_past_line_break().category() {
            TokenCategory::Identifier => self.parse_variable_declaration(cursor).map(Some),
            TokenCategory::Function => {
                self.parse_function_declaration(cursor)?;
                Ok(None)
            }
            _ => {
                self.expected(cursor, "variable or function");
                Ok(None)
            }
        }
    }

    fn parse_variable_declaration(&mut self, cursor: &mut TokenCursor<'_>) -> SyntaxResult<usize> {
        cursor.advance();

        let name = cursor.lexeme().to_string();
        let owner = self.current_owner();
        let slot = self
            .symbols
            .register_variable(name.clone(), owner, VariableKind::Local, self.level);

        log_debug!("Variable declared",
            "name" => &name,
            "level" => self.level,
            "slot" => slot
        );

        cursor.advance();

        if !cursor.current_is(TokenCategory::Semicolon) {
            self.expected(cursor, "variable or function");
            return Err(SyntaxError::MalformedVariableDeclaration {
                name,
                line: cursor.line(),
                found: cursor.lexeme().to_string(),
            });
        }

        Ok(slot)
    }

    /// FunctionDeclaration := "integer" "function" Identifier "(" Parameter ")" ";" Block
    fn parse_function_declaration(&mut self, cursor: &mut TokenCursor<'_>) -> SyntaxResult<()> {
        cursor.advance();

        if !cursor.current_is(TokenCategory::Function) {
            self.expected(cursor, "function");
            return Ok(());
        }
        cursor.advance();

        if !cursor.current_is(TokenCategory::Identifier) {
            self.report(DiagnosticKind::SymbolNotDefined, cursor, "function name");
            return Ok(());
        }
        let name = cursor.lexeme().to_string();
        cursor.advance();

        if !cursor.current_is(TokenCategory::LeftParen) {
            self.expected(cursor, "(");
            return Ok(());
        }
        cursor.advance();

        self.level += 1;
        let result = self.parse_function_rest(cursor, &name);
        self.level -= 1;

        result
    }

    /// Parameter onwards, at the function's own level
    fn parse_function_rest(&mut self, cursor: &mut TokenCursor<'_>, name: &str) -> SyntaxResult<()> {
        if !cursor.current_is(TokenCategory::Identifier) {
            self.expected(cursor, "parameter");
            return Ok(());
        }

        let first_slot = self.symbols.register_variable(
            cursor.lexeme(),
            VariableOwner::Procedure(name.to_string()),
            VariableKind::Parameter,
            self.level,
        );
        cursor.advance();

        if !cursor.current_is(TokenCategory::RightParen) {
            self.expected(cursor, ")");
            return Ok(());
        }
        cursor.advance();

        if !cursor.current_is(TokenCategory::Semicolon) {
            self.expected(cursor, ";");
            return Ok(());
        }
        cursor.advance();

        let index = self.symbols.register_procedure(name, self.level, first_slot)?;

        self.enclosing.push(name.to_string());
        let body = self.parse_block(cursor);
        self.enclosing.pop();

        let last_slot = body?.unwrap_or(first_slot);
        self.symbols.close_procedure(index, last_slot)?;

        log_debug!("Function declared",
            "name" => name,
            "level" => self.level,
            "first_slot" => first_slot,
            "last_slot" => last_slot
        );

        Ok(())
    }

    // === STATEMENTS ===

    fn parse_statement_list(&mut self, cursor: &mut TokenCursor<'_>) {
        self.parse_statement(cursor);

        while cursor.current_is(TokenCategory::Semicolon) {
            cursor.advance();
            self.parse_statement(cursor);
        }
    }

    fn parse_statement(&mut self, cursor: &mut TokenCursor<'_>) {
        match cursor.current().category() {
            TokenCategory::Read | TokenCategory::Write => {
                cursor.advance();
                self.parse_io_argument(cursor);
            }
            TokenCategory::Identifier => self.parse_assignment(cursor),
            TokenCategory::If => self.parse_conditional(cursor),
            _ => self.report(DiagnosticKind::SymbolNotMatched, cursor, "execution statement"),
        }
    }

    /// "(" Identifier ")" after read or write
    fn parse_io_argument(&mut self, cursor: &mut TokenCursor<'_>) {
        if !cursor.current_is(TokenCategory::LeftParen) {
            self.expected(cursor, "(");
            return;
        }
        cursor.advance();

        if !cursor.current_is(TokenCategory::Identifier) {
            self.expected(cursor, "variable");
            return;
        }
        cursor.advance();

        if !cursor.current_is(TokenCategory::RightParen) {
            self.expected(cursor, ")");
            return;
        }
        cursor.advance();
    }

    fn parse_assignment(&mut self, cursor: &mut TokenCursor<'_>) {
        let name = cursor.lexeme().to_string();
        let target = self.symbols.resolve(&name);

        if target.is_none() {
            self.report(
                DiagnosticKind::SymbolNotDefined,
                cursor,
                &format!("variable/process {}", name),
            );
        }
        self.resolutions.push(ResolvedReference {
            name,
            line: cursor.line(),
            target,
        });
        cursor.advance();

        if !cursor.current_is(TokenCategory::Assign) {
            self.expected(cursor, ":=");
            return;
        }
        cursor.advance();

        self.parse_expression(cursor);
    }

    fn parse_conditional(&mut self, cursor: &mut TokenCursor<'_>) {
        cursor.advance();
        self.parse_condition(cursor);

        if !cursor.current_is(TokenCategory::Then) {
            self.expected(cursor, "then");
            return;
        }
        cursor.advance();
        self.parse_statement(cursor);

        if cursor.current_is(TokenCategory::Else) {
            cursor.advance();
            self.parse_statement(cursor);
        }
    }

    // === EXPRESSIONS ===

    fn parse_condition(&mut self, cursor: &mut TokenCursor<'_>) {
        self.parse_expression(cursor);

        if !cursor.current().category().is_relational_operator() {
            self.expected(cursor, "relational operator");
            return;
        }
        cursor.advance();

        self.parse_expression(cursor);
    }

    fn parse_expression(&mut self, cursor: &mut TokenCursor<'_>) {
        self.parse_term(cursor);

        while cursor.current_is(TokenCategory::Minus) {
            cursor.advance();
            self.parse_term(cursor);
        }
    }

    fn parse_term(&mut self, cursor: &mut TokenCursor<'_>) {
        self.parse_factor(cursor);

        while cursor.current_is(TokenCategory::Multiply) {
            cursor.advance();
            self.parse_factor(cursor);
        }
    }

    /// Factor := Identifier [ "(" Expression ")" ] | Constant
    fn parse_factor(&mut self, cursor: &mut TokenCursor<'_>) {
        match cursor.current().category() {
            TokenCategory::Identifier => {
                let is_call = cursor.peek_raw().is(TokenCategory::LeftParen);
                cursor.advance();

                if is_call {
                    cursor.advance();
                    self.parse_expression(cursor);

                    if !cursor.current_is(TokenCategory::RightParen) {
                        self.expected(cursor, ")");
                        return;
                    }
                    cursor.advance();
                }
            }
            TokenCategory::Constant => cursor.advance(),
            _ => self.expected(cursor, "factor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::{scan, Lexicon};
    use crate::symbols::{PrimitiveType, VariableEntry};
    use assert_matches::assert_matches;

    fn analyze(source: &str) -> Result<SyntaxOutput, SyntaxAbort> {
        let scanned = scan(source, &Lexicon::standard());
        assert!(scanned.diagnostics.is_empty(), "{}", scanned.diagnostics.render());
        SyntaxAnalyzer::new().analyze(scanned.tokens.as_slice())
    }

    fn messages(log: &DiagnosticLog) -> Vec<String> {
        log.iter().map(|d| d.render()).collect()
    }

    #[test]
    fn test_single_variable_program() {
        let output = analyze("begin integer x; x:=1 end").unwrap();

        assert!(output.diagnostics.is_empty());
        assert_eq!(
            output.symbols.variables(),
            &[VariableEntry {
                name: "x".into(),
                owner: VariableOwner::Main,
                kind: VariableKind::Local,
                var_type: PrimitiveType::Integer,
                level: 0,
                slot: 0,
            }]
        );
        assert!(output.symbols.procedures().is_empty());
        assert!(output.reached_eof);
    }

    #[test]
    fn test_missing_relational_operator() {
        let output = analyze("begin\n integer x;\n if x then write(x)\nend").unwrap();

        assert_eq!(messages(&output.diagnostics), vec!["***3: relational operator not found."]);
        assert!(output.reached_eof);

        // The then branch is still parsed after the missing operator
        let output = analyze("begin\n integer x;\n if x then y := 1\n end").unwrap();

        assert_eq!(
            messages(&output.diagnostics),
            vec![
                "***3: relational operator not found.",
                "***3: variable/process y not defined.",
            ]
        );
        assert_eq!(output.resolutions.len(), 1);
        assert_eq!(output.resolutions[0].name, "y");
        assert!(output.reached_eof);
    }

    #[test]
    fn test_first_registered_name_wins() {
        let source = "begin
  integer x;
  integer function f(x);
  begin
    integer k;
    x := 1
  end;
  read(x)
end";
        let output = analyze(source).unwrap();

        assert!(output.diagnostics.is_empty());
        assert_eq!(output.resolutions.len(), 1);
        assert_eq!(output.resolutions[0].line, 6);
        assert_eq!(
            output.resolutions[0].target,
            Some(SymbolRef::Variable { slot: 0 })
        );

        let variables = output.symbols.variables();
        assert_eq!(variables.len(), 3);
        assert_eq!(variables[1].kind, VariableKind::Parameter);
        assert_eq!(variables[1].owner, VariableOwner::Procedure("f".into()));
        assert_eq!(variables[1].level, 1);
        assert_eq!(variables[2].owner, VariableOwner::Procedure("f".into()));

        let f = &output.symbols.procedures()[0];
        assert_eq!((f.level, f.first_slot, f.last_slot), (1, 1, 2));
        assert!(f.closed);
        assert!(output.symbols.validate().is_ok());
    }

    #[test]
    fn test_nested_functions_and_levels() {
        let source = "begin
  integer n;
  integer function f(a);
  begin
    integer b;
    integer function g(c);
    begin
      integer d;
      d := c
    end;
    integer e;
    e := g(a - 1) * b
  end;
  integer z;
  z := f(n)
end";
        let output = analyze(source).unwrap();
        assert!(output.diagnostics.is_empty(), "{:?}", messages(&output.diagnostics));

        let rows: Vec<(&str, &str, usize, usize)> = output
            .symbols
            .variables()
            .iter()
            .map(|v| (v.name.as_str(), v.owner.name(), v.level, v.slot))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("n", "main", 0, 0),
                ("a", "f", 1, 1),
                ("b", "f", 1, 2),
                ("c", "g", 2, 3),
                ("d", "g", 2, 4),
                ("e", "f", 1, 5),
                ("z", "main", 0, 6),
            ]
        );

        let procedures: Vec<(&str, usize, usize, usize)> = output
            .symbols
            .procedures()
            .iter()
            .map(|p| (p.name.as_str(), p.level, p.first_slot, p.last_slot))
            .collect();
        assert_eq!(procedures, vec![("f", 1, 1, 5), ("g", 2, 3, 4)]);
        assert!(output.symbols.validate().is_ok());
    }

    #[test]
    fn test_function_without_locals_keeps_first_slot() {
        let source = "begin integer function f(n); begin integer function g(m); begin integer q; q := m end; n := 1 end; integer r; r := 0 end";
        let output = analyze(source).unwrap();

        let f = &output.symbols.procedures()[0];
        assert_eq!((f.first_slot, f.last_slot), (0, 0));
    }

    #[test]
    fn test_level_restored_after_broken_header() {
        let output = analyze("begin integer function f(n; integer y; y := 1 end").unwrap();

        assert_eq!(messages(&output.diagnostics), vec!["***1: ) not found."]);
        assert!(output.symbols.procedures().is_empty());

        let y = &output.symbols.variables()[1];
        assert_eq!((y.name.as_str(), y.level, y.owner.name()), ("y", 0, "main"));
    }

    #[test]
    fn test_undefined_assignment_target() {
        let output = analyze("begin integer x;\ny := 1 end").unwrap();

        assert_eq!(messages(&output.diagnostics), vec!["***2: variable/process y not defined."]);
        assert_eq!(output.resolutions[0].target, None);
    }

    #[test]
    fn test_missing_semicolon_after_variable_aborts() {
        let abort = analyze("begin integer x;\n integer y\n integer z; y := 1 end").unwrap_err();

        assert_matches!(
            &abort.error,
            SyntaxError::MalformedVariableDeclaration { name, line: 3, found } if name == "y" && found == "integer"
        );
        assert_eq!(messages(&abort.diagnostics), vec!["***3: variable or function not found."]);
    }

    #[test]
    fn test_abort_inside_function_body() {
        let abort = analyze("begin integer function f(n); begin integer k n := 1 end; k := 1 end")
            .unwrap_err();
        assert_matches!(abort.error, SyntaxError::MalformedVariableDeclaration { .. });
    }

    #[test]
    fn test_statement_errors() {
        let output = analyze("begin integer x; write(x; x := ; ; read(x) end").unwrap();

        assert_eq!(
            messages(&output.diagnostics),
            vec![
                "***1: ) not found.",
                "***1: factor not found.",
                "***1: execution statement not matched.",
            ]
        );

        let output = analyze("begin integer x; read x end").unwrap();
        assert_eq!(
            messages(&output.diagnostics),
            vec!["***1: ( not found.", "***1: end not found."]
        );

        let output = analyze("begin integer x; read(1) end").unwrap();
        assert_eq!(messages(&output.diagnostics)[0], "***1: variable not found.");
    }

    #[test]
    fn test_call_missing_close_paren() {
        let output = analyze("begin integer x; x := x(1 end").unwrap();
        assert_eq!(messages(&output.diagnostics), vec!["***1: ) not found."]);
    }

    #[test]
    fn test_missing_begin_and_end() {
        let output = analyze("integer x; x := 1").unwrap();
        assert_eq!(messages(&output.diagnostics), vec!["***1: begin not found."]);
        assert!(output.symbols.is_empty());

        let output = analyze("begin integer x; x := 1").unwrap();
        assert_eq!(messages(&output.diagnostics), vec!["***1: end not found."]);
    }

    #[test]
    fn test_declaration_dispatch_errors() {
        let output = analyze("begin integer ; x := 1 end").unwrap();
        assert_eq!(
            messages(&output.diagnostics)[0],
            "***1: variable or function not found."
        );

        let output = analyze("begin integer function (n); x := 1 end").unwrap();
        assert_eq!(
            messages(&output.diagnostics)[0],
            "***1: function name not defined."
        );

        let output = analyze("begin integer function f(); begin integer k; k := 1 end; read(k) end")
            .unwrap();
        assert_eq!(messages(&output.diagnostics)[0], "***1: parameter not found.");
    }

    #[test]
    fn test_line_break_between_declarations() {
        let output = analyze("begin integer x;\ninteger y;\n\ninteger z; x := 1 end").unwrap();

        assert_eq!(output.symbols.variable_count(), 2);
        assert_eq!(messages(&output.diagnostics)[0], "***4: execution statement not matched.");
    }

    #[test]
    fn test_else_branch_and_trailing_tokens() {
        let output =
            analyze("begin integer x; if x <> 0 then x := x - 1 else read(x) end\nwrite(x)").unwrap();

        assert!(output.diagnostics.is_empty());
        assert!(!output.reached_eof);
        assert_eq!(output.final_line, 2);
    }
}
