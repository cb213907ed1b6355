use colored::*;
use thiserror::Error;

use tools::errors::ReportCodeErr;
use crate::environment::EnvError;
use crate::registry::RegistryError;
use crate::values::ValueError;

#[derive(Error, Debug)]
pub enum InterpreterError {
    // Functions
    #[error("{} during '{0}' function call: expected {1} argument(s) but found {2}", "Error".red().bold())]
    ArityMismatch(String, usize, usize),

    #[error("{} during '{0}' function call: function produced no value to use", "Error".red().bold())]
    TypeMismatch(String),

    #[error("{0}")]
    InterpFromRegistry(#[from] RegistryError),

    #[error("{0}")]
    InterpFromEnv(#[from] EnvError),

    #[error("{0}")]
    InterpFromValue(#[from] ValueError),

    #[error("{} while writing program output: {0}", "Error".red().bold())]
    Output(#[from] std::io::Error),
}

// Implement global trait for final error
impl ReportCodeErr for InterpreterError {}
