use std::io::Write;
use tracing::debug;

use super::{Interpreter, InterpreterError};
use crate::chain::{Operation, OperationChain};
use crate::environment::Frame;
use crate::frontend::ast::{ChainLink, ExpressionKind};
use crate::stack::ensure_sufficient_stack;
use crate::values::{from_bool, Value};

impl<W: Write> Interpreter<W> {
    pub(super) fn evaluate(&mut self, expr: &ExpressionKind) -> Result<Value, InterpreterError> {
        match expr {
            ExpressionKind::IntLiteral { value } => Ok(*value),
            ExpressionKind::BoolLiteral { value } => Ok(from_bool(*value)),
            ExpressionKind::Identifier { symbol } => Ok(self.call_stack.read_variable(symbol)?),
            ExpressionKind::FunctionCall { name, args } => self
                .invoke(name, args)?
                .ok_or_else(|| InterpreterError::TypeMismatch(name.clone())),
        }
    }

    // Operands are evaluated left to right before anything is applied, so an
    // operand that calls a function sees the variables as they were before
    // the assignment.
    pub(super) fn compose_operations(&mut self, links: &[ChainLink]) -> Result<OperationChain, InterpreterError> {
        links
            .iter()
            .map(|link| -> Result<Operation, InterpreterError> {
                let operand = self.evaluate(&link.operand)?;
                Ok(Operation::bind(link.operator, operand))
            })
            .collect()
    }

    // Runs a user function in a fresh frame. Arguments are evaluated in the
    // caller's frame, the callee only sees its parameters as locals but can
    // still read its callers' variables.
    pub(super) fn invoke(&mut self, name: &str, args: &[ExpressionKind]) -> Result<Option<Value>, InterpreterError> {
        let declaration = self.functions.lookup(name)?;

        if declaration.arity() != args.len() {
            return Err(InterpreterError::ArityMismatch(
                name.to_string(),
                declaration.arity(),
                args.len(),
            ));
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.evaluate(arg)?);
        }

        debug!(function = name, args = ?values, depth = self.call_stack.depth() + 1, "call");

        let frame = Frame::with_bindings(declaration.params.iter().cloned().zip(values));
        self.call_stack.push(frame)?;

        let call_line = self.current_line;

        // The frame goes away whatever happened in the body
        let returned = ensure_sufficient_stack(|| self.execute_block(&declaration.body));
        self.call_stack.pop();
        let returned = returned?;

        // Errors raised after a successful call belong to the calling statement
        self.current_line = call_line;

        debug!(function = name, returned = ?returned, "return");

        Ok(returned)
    }
}
