use colored::*;
use thiserror::*;

use super::{Token, TokenKind};
use tools::errors::ReportCodeErr;

#[derive(Error, Debug, PartialEq)]
pub enum ParserError {
    // Token
    #[error("expected token: -{0:?}-, token found: -{1:?}-")]
    FoundWrongToken(TokenKind, TokenKind),

    #[error("Tryed to use non existant token")]
    EmptyTokenBufferUsed,

    #[error("{} parsing for this token is not implemented: {0:?}", "Error".red().bold())]
    UnrecognizedToken(Token),

    #[error("{} unexpected end of file, expected {0:?}", "Error".red().bold())]
    UnexpectedEof(TokenKind),

    #[error("{} expected end of line after statement, found: -{0}-", "Error".red().bold())]
    ExpectedEndOfLine(String),

    // Program structure
    #[error("{} only {} and {} blocks are allowed at top level, found: -{0}-", "Error".red().bold(), "FUNCTION".cyan(), "MAIN".cyan())]
    ExpectedTopLevelItem(String),

    #[error("{} a script must contain a {} block", "Error".red().bold(), "MAIN".cyan())]
    MissingMain,

    #[error("{} a script can only contain one {} block", "Error".red().bold(), "MAIN".cyan())]
    DuplicateMain,

    // Literals
    #[error("{} while parsing number -{0}-: not a valid integer", "Error".red().bold())]
    InvalidNumber(String),

    #[error("{} while parsing expression: expected a number, a boolean, a variable or a call, found -{0}-", "Error".red().bold())]
    ExpectedExpression(String),

    // Statements
    #[error("{} while parsing print statement: expected a string or a variable after {}, found -{0}-", "Error".red().bold(), "PRINT".cyan())]
    ExpectedPrintable(String),

    #[error("{} while parsing variable declaration: expected variable name after {}, found -{0}-", "Error".red().bold(), "DECLARE".cyan())]
    ExpectedVarNameAfterKw(String),

    #[error("{} while parsing return statement: {} must be followed by a variable name, found -{0}-", "Error".red().bold(), "RETURN".cyan())]
    ReturnNeedsIdentifier(String),

    #[error("{} after identifier -{0}-: expected '=' for an assignment or '(' for a call", "Error".red().bold())]
    DanglingIdentifier(String),

    #[error("{} while parsing operation chain: expected one of + - * / == > AND OR after {}, found -{0}-", "Error".red().bold(), "THEN".cyan())]
    ExpectedOperatorAfterThen(String),

    // Functions declaration
    #[error("{} while parsing function declaration: expected identifier after {} keyword.", "Error".red().bold(), "FUNCTION".cyan())]
    MissingIdentifierAfterFn,

    #[error("{} while parsing function. Expected '(' after function name.", "Error".red().bold())]
    MissingFnOpenParen,

    #[error("{} while parsing function. Expected ')' after arguments list.", "Error".red().bold())]
    MissingFnCloseParen,

    #[error("{} while parsing function arguments declaration: expected identifier after ','.", "Error".red().bold())]
    MissingIdentAfterComma,

    #[error("{} while parsing function arguments declaration: expected ',' between two arguments.", "Error".red().bold())]
    MissingCommaBetweenArgs,

    #[error("{} while parsing function declaration: arguments must be identifiers", "Error".red().bold())]
    FnDeclArgsNotString,

    #[error("{} while parsing function -{0}- declaration: parameter -{1}- is declared twice", "Error".red().bold())]
    DuplicateParameter(String, String),
}

// Implement global trait for final error
impl ReportCodeErr for ParserError {}
