pub mod chain;
pub mod environment;
pub mod interpreter;
pub mod registry;
mod stack;
pub mod values;

extern crate tools;
extern crate frontend;

pub use frontend::ast::{
    ASTNode, ChainLink, ChainOperator, ExpressionKind, FnDeclaration, Program, StatementKind,
};
