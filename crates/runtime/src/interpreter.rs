mod expr;
mod interp_errors;
mod stmt;

use std::io::{self, Write};
use tracing::debug;

use tools::errors::{CodeErr, ReportCodeErr};
pub use interp_errors::InterpreterError;

use crate::environment::{CallStack, DEFAULT_MAX_CALL_DEPTH};
use crate::frontend::ast::Program;
use crate::registry::FunctionRegistry;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    // Root frame included
    pub max_call_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

pub struct Interpreter<W: Write = io::Stdout> {
    functions: FunctionRegistry,
    call_stack: CallStack,
    out: W,
    // Line of the statement being executed, errors are reported there
    current_line: u64,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self::with_config(out, EvalConfig::default())
    }

    pub fn with_config(out: W, config: EvalConfig) -> Self {
        Self {
            functions: FunctionRegistry::new(),
            call_stack: CallStack::new(config.max_call_depth),
            out,
            current_line: 0,
        }
    }

    // Registers every function then runs MAIN directly in the root frame. A
    // RETURN in MAIN has no caller, its value is dropped.
    pub fn execute_program(&mut self, program: &Program) -> Result<(), CodeErr<InterpreterError>> {
        for declaration in &program.functions {
            let name = declaration.name.clone();

            match self.functions.register(declaration.clone()) {
                Some(_) => debug!(function = %name, "function redeclared, previous body replaced"),
                None => debug!(function = %name, params = declaration.arity(), "function registered"),
            }
        }

        let executed = self.execute_block(&program.main).map(|_| ());
        // Output produced before a failure must still reach the sink
        let flushed = self.out.flush().map_err(InterpreterError::from);

        executed
            .and(flushed)
            .map_err(|e| e.to_glob_err(self.current_line))
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
