use colored::*;
use thiserror::Error;

use super::Value;

#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("{} while computing value. Division of {0} by zero", "Error".red().bold())]
    DivisionByZero(Value),
}
