use std::fmt::Display;

// Whole parsed script: every function declaration plus the single MAIN block
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub functions: Vec<FnDeclaration>,
    pub main: Vec<ASTNode>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct FnDeclaration {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<ASTNode>,
}

impl FnDeclaration {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ASTNode {
    pub node: StatementKind,
    pub line: u64,
}

impl ASTNode {
    pub fn new(node: StatementKind, line: u64) -> Self {
        Self { node, line }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum StatementKind {
    // Text is kept as written, quotes included
    PrintString {
        text: String,
    },
    PrintVariable {
        name: String,
    },
    VarDeclaration {
        name: String,
        value: ExpressionKind,
    },
    // x = base THEN op a THEN op b ...
    VarAssignment {
        name: String,
        base: ExpressionKind,
        operations: Vec<ChainLink>,
    },
    // x = f(a, b), the call must produce a value
    AssignFromCall {
        name: String,
        caller: String,
        args: Vec<ExpressionKind>,
    },
    Return {
        name: String,
    },
    If {
        condition: ExpressionKind,
        then_body: Vec<ASTNode>,
        else_body: Option<Vec<ASTNode>>,
    },
    While {
        condition: ExpressionKind,
        body: Vec<ASTNode>,
    },
    // Call on its own line, the result is thrown away
    FunctionCall {
        name: String,
        args: Vec<ExpressionKind>,
    },
}

#[derive(Debug, PartialEq, Clone)]
pub enum ExpressionKind {
    IntLiteral {
        value: i64,
    },
    BoolLiteral {
        value: bool,
    },
    Identifier {
        symbol: String,
    },
    FunctionCall {
        name: String,
        args: Vec<ExpressionKind>,
    },
}

// One `THEN <operator> <expression>` suffix of an assignment
#[derive(Debug, PartialEq, Clone)]
pub struct ChainLink {
    pub operator: ChainOperator,
    pub operand: ExpressionKind,
}

impl ChainLink {
    pub fn new(operator: ChainOperator, operand: ExpressionKind) -> Self {
        Self { operator, operand }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChainOperator {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Gt,
    And,
    Or,
}

impl ChainOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "==" => Some(Self::Eq),
            ">" => Some(Self::Gt),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            _ => None,
        }
    }
}

impl Display for ChainOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            ChainOperator::Add => "+",
            ChainOperator::Sub => "-",
            ChainOperator::Mul => "*",
            ChainOperator::Div => "/",
            ChainOperator::Eq => "==",
            ChainOperator::Gt => ">",
            ChainOperator::And => "AND",
            ChainOperator::Or => "OR",
        };

        write!(f, "{symbol}")
    }
}

impl ExpressionKind {
    // Name of the called function if the expression is a call
    pub fn as_call(&self) -> Option<(&str, &[ExpressionKind])> {
        match self {
            ExpressionKind::FunctionCall { name, args } => Some((name.as_str(), args.as_slice())),
            _ => None,
        }
    }
}
