use std::io::Write;
use tracing::trace;

use super::{Interpreter, InterpreterError};
use crate::frontend::ast::{ASTNode, StatementKind};
use crate::values::{is_truthy, Value};

// Removes one pair of matching quotes around a string literal, if present
pub(super) fn strip_quotes(text: &str) -> &str {
    let mut chars = text.chars();

    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && (first == '"' || first == '\'') => {
            chars.as_str()
        }
        _ => text,
    }
}

impl<W: Write> Interpreter<W> {
    // Runs statements in order. The result is the value of the last RETURN
    // executed, nested blocks included: a RETURN records a value but the
    // following statements still run and a later RETURN overwrites it.
    pub(super) fn execute_block(&mut self, nodes: &[ASTNode]) -> Result<Option<Value>, InterpreterError> {
        let mut returned = None;

        for node in nodes {
            if let Some(value) = self.resolve(node)? {
                returned = Some(value);
            }
        }

        Ok(returned)
    }

    pub(super) fn resolve(&mut self, node: &ASTNode) -> Result<Option<Value>, InterpreterError> {
        self.current_line = node.line;
        trace!(line = node.line + 1, depth = self.call_stack.depth(), "statement");

        match &node.node {
            StatementKind::PrintString { text } => {
                writeln!(self.out, "{}", strip_quotes(text))?;

                Ok(None)
            }
            StatementKind::PrintVariable { name } => {
                let value = self.call_stack.read_variable(name)?;
                writeln!(self.out, "{value}")?;

                Ok(None)
            }
            StatementKind::VarDeclaration { name, value } => {
                let declaration_value = self.evaluate(value)?;
                self.call_stack.write_variable(name.clone(), declaration_value);

                Ok(None)
            }
            StatementKind::VarAssignment {
                name,
                base,
                operations,
            } => {
                // Base first, then every operand left to right
                let base_value = self.evaluate(base)?;
                let chain = self.compose_operations(operations)?;
                let result = chain.apply(base_value)?;

                self.call_stack.write_variable(name.clone(), result);

                Ok(None)
            }
            StatementKind::AssignFromCall { name, caller, args } => {
                let result = self
                    .invoke(caller, args)?
                    .ok_or_else(|| InterpreterError::TypeMismatch(caller.clone()))?;

                self.call_stack.write_variable(name.clone(), result);

                Ok(None)
            }
            StatementKind::Return { name } => Ok(Some(self.call_stack.read_local_variable(name)?)),
            StatementKind::If {
                condition,
                then_body,
                else_body,
            } => {
                if is_truthy(self.evaluate(condition)?) {
                    self.execute_block(then_body)
                } else if let Some(body) = else_body {
                    self.execute_block(body)
                } else {
                    Ok(None)
                }
            }
            StatementKind::While { condition, body } => {
                let mut returned = None;

                loop {
                    // Condition errors belong to the WHILE line, not the last body line
                    self.current_line = node.line;

                    if !is_truthy(self.evaluate(condition)?) {
                        break;
                    }

                    if let Some(value) = self.execute_block(body)? {
                        returned = Some(value);
                    }
                }

                Ok(returned)
            }
            StatementKind::FunctionCall { name, args } => {
                let _ = self.invoke(name, args)?;

                Ok(None)
            }
        }
    }
}
