use colored::*;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

use crate::frontend::ast::FnDeclaration;

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("{} call to undeclared function: {0}", "Error".red().bold())]
    UndefinedFunction(String),
}

// Every declared function, by name. Declarations are shared with the calls
// running them so a recursive call doesn't clone the body.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Rc<FnDeclaration>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Re-declaring a name silently replaces the previous function, which is returned
    pub fn register(&mut self, declaration: FnDeclaration) -> Option<Rc<FnDeclaration>> {
        self.functions
            .insert(declaration.name.clone(), Rc::new(declaration))
    }

    pub fn lookup(&self, name: &str) -> Result<Rc<FnDeclaration>, RegistryError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UndefinedFunction(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
