use colored::*;
use std::collections::HashMap;
use std::iter;
use thiserror::Error;

use super::values::Value;

pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;

#[derive(Error, Debug, PartialEq)]
pub enum EnvError {
    #[error("{} undeclared variable: {0}", "Error".red().bold())]
    UndefinedVariable(String),

    #[error("{} undeclared variable in current function: {0}", "Error".red().bold())]
    UndefinedLocalVariable(String),

    #[error("{} maximum call depth of {0} exceeded", "Error".red().bold())]
    RecursionLimitExceeded(usize),
}

// Activation record of one in-flight call
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Frame {
    vars: HashMap<String, Value>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    // Frame of a new call, each parameter bound to its argument
    pub fn with_bindings<I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self {
            vars: bindings.into_iter().collect(),
        }
    }

    pub fn get(&self, var: &str) -> Option<Value> {
        self.vars.get(var).copied()
    }

    // Declaration and reassignment are the same operation
    pub fn set(&mut self, var: String, value: Value) {
        self.vars.insert(var, value);
    }

    pub fn contains(&self, var: &str) -> bool {
        self.vars.contains_key(var)
    }
}

// The root frame holds MAIN's variables and is never popped, so there is
// always a top frame to write into.
#[derive(Debug, PartialEq)]
pub struct CallStack {
    root: Frame,
    frames: Vec<Frame>,
    max_depth: usize,
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CALL_DEPTH)
    }
}

impl CallStack {
    // `max_depth` counts the root frame
    pub fn new(max_depth: usize) -> Self {
        Self {
            root: Frame::new(),
            frames: Vec::new(),
            max_depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len() + 1
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    // The frame is not pushed when the limit is reached
    pub fn push(&mut self, frame: Frame) -> Result<(), EnvError> {
        if self.depth() >= self.max_depth {
            return Err(EnvError::RecursionLimitExceeded(self.max_depth));
        }

        self.frames.push(frame);
        Ok(())
    }

    // Returns None instead of popping the root frame
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn top(&self) -> &Frame {
        self.frames.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut Frame {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.root,
        }
    }

    // Nearest call first, falling through to callers down to the root frame
    pub fn read_variable(&self, var: &str) -> Result<Value, EnvError> {
        self.frames
            .iter()
            .rev()
            .chain(iter::once(&self.root))
            .find_map(|frame| frame.get(var))
            .ok_or_else(|| EnvError::UndefinedVariable(var.to_string()))
    }

    // Only the current call, never its callers
    pub fn read_local_variable(&self, var: &str) -> Result<Value, EnvError> {
        self.top()
            .get(var)
            .ok_or_else(|| EnvError::UndefinedLocalVariable(var.to_string()))
    }

    // Always the top frame, creating the binding if needed
    pub fn write_variable(&mut self, var: String, value: Value) {
        self.top_mut().set(var, value);
    }
}
