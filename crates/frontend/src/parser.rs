use std::collections::VecDeque;

mod control_parser;
mod errors_parser;
mod fn_parser;
mod var_parser;

pub use crate::ast::{ASTNode, ChainLink, ChainOperator, ExpressionKind, FnDeclaration, Program, StatementKind};
pub use crate::lexer::{Token, TokenKind};
pub use self::errors_parser::ParserError;

use tools::errors::{CodeErr, ReportCodeErr};


#[derive(Default)]
pub struct Parser {
    tokens: VecDeque<Token>,
    // Returned by `at` once the buffer is drained
    eof: Option<Token>,
}

impl Parser {
    pub fn build_ast(&mut self, tokens: VecDeque<Token>) -> Result<Program, CodeErr<ParserError>> {
        let last_line = tokens.back().map(|t| t.line).unwrap_or(0);
        self.eof = Some(Token::new_eof(last_line));
        self.tokens = tokens;

        let mut functions: Vec<FnDeclaration> = vec![];
        let mut main: Option<Vec<ASTNode>> = None;

        loop {
            self.skip_end_lines();

            let line = self.at().line;

            match self.at().kind {
                TokenKind::EOF => break,
                TokenKind::Function => {
                    let decl = self
                        .parse_fn_declaration()
                        .map_err(|e| e.to_glob_err(self.at().line))?;
                    functions.push(decl);
                }
                TokenKind::Main => {
                    if main.is_some() {
                        return Err(ParserError::DuplicateMain.to_glob_err(line));
                    }

                    main = Some(
                        self.parse_main_block()
                            .map_err(|e| e.to_glob_err(self.at().line))?,
                    );
                }
                _ => {
                    return Err(
                        ParserError::ExpectedTopLevelItem(self.at().value.clone()).to_glob_err(line)
                    )
                }
            }
        }

        match main {
            Some(main) => Ok(Program { functions, main }),
            None => Err(ParserError::MissingMain.to_glob_err(self.at().line)),
        }
    }

    // MAIN
    //     ...statements
    // END
    fn parse_main_block(&mut self) -> Result<Vec<ASTNode>, ParserError> {
        let _ = self.expect_token(TokenKind::Main)?;
        self.expect_end_of_line()?;

        let body = self.parse_block(&[TokenKind::End])?;
        let _ = self.expect_token(TokenKind::End)?;
        self.expect_end_of_line()?;

        Ok(body)
    }

    // Parses statements until one of the terminators, which is left in the buffer
    pub(super) fn parse_block(&mut self, terminators: &[TokenKind]) -> Result<Vec<ASTNode>, ParserError> {
        let mut body: Vec<ASTNode> = vec![];

        loop {
            self.skip_end_lines();

            let kind = &self.at().kind;

            if terminators.contains(kind) {
                break;
            }

            if *kind == TokenKind::EOF {
                let expected = terminators.first().cloned().unwrap_or(TokenKind::End);
                return Err(ParserError::UnexpectedEof(expected));
            }

            body.push(self.parse_statement()?);
        }

        Ok(body)
    }

    // Entry point of statement parsing
    fn parse_statement(&mut self) -> Result<ASTNode, ParserError> {
        let line = self.at().line;

        let stmt = match self.at().kind {
            TokenKind::Print => self.parse_print()?,
            TokenKind::Declare => self.parse_var_declaration()?,
            TokenKind::Return => self.parse_return()?,
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Identifier => match self.peek_kind(1) {
                Some(TokenKind::Equals) => self.parse_assignment()?,
                Some(TokenKind::OpenParen) => {
                    let (name, args) = self.parse_call()?;
                    StatementKind::FunctionCall { name, args }
                }
                _ => return Err(ParserError::DanglingIdentifier(self.at().value.clone())),
            },
            _ => return Err(ParserError::UnrecognizedToken(self.at().clone())),
        };

        self.expect_end_of_line()?;

        Ok(ASTNode::new(stmt, line))
    }

    // Operand of declarations, assignments, conditions and call arguments
    pub(super) fn parse_expression(&mut self) -> Result<ExpressionKind, ParserError> {
        match self.at().kind {
            TokenKind::Number => self.parse_literal_number_expr(false),
            // Manages negative numbers
            TokenKind::BinaryOperator if self.at().value == "-" => {
                if self.peek_kind(1) != Some(&TokenKind::Number) {
                    return Err(ParserError::ExpectedExpression(self.at().value.clone()));
                }

                self.eat()?;
                self.parse_literal_number_expr(true)
            }
            TokenKind::True => {
                self.eat()?;
                Ok(ExpressionKind::BoolLiteral { value: true })
            }
            TokenKind::False => {
                self.eat()?;
                Ok(ExpressionKind::BoolLiteral { value: false })
            }
            TokenKind::Identifier => {
                if self.peek_kind(1) == Some(&TokenKind::OpenParen) {
                    let (name, args) = self.parse_call()?;
                    Ok(ExpressionKind::FunctionCall { name, args })
                } else {
                    Ok(ExpressionKind::Identifier {
                        symbol: self.eat()?.value,
                    })
                }
            }
            _ => Err(ParserError::ExpectedExpression(self.at().value.clone())),
        }
    }

    fn parse_literal_number_expr(&mut self, negative: bool) -> Result<ExpressionKind, ParserError> {
        let number = self.eat()?;

        let text = if negative {
            format!("-{}", number.value)
        } else {
            number.value
        };

        match text.parse::<i64>() {
            Ok(value) => Ok(ExpressionKind::IntLiteral { value }),
            Err(_) => Err(ParserError::InvalidNumber(text)),
        }
    }

    fn at(&self) -> &Token {
        match (self.tokens.front(), &self.eof) {
            (Some(tk), _) => tk,
            (None, Some(eof)) => eof,
            (None, None) => &EOF_TOKEN,
        }
    }

    fn peek_kind(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(offset).map(|t| &t.kind)
    }

    fn eat(&mut self) -> Result<Token, ParserError> {
        match self.tokens.pop_front() {
            Some(tk) => Ok(tk),
            None => Err(ParserError::EmptyTokenBufferUsed),
        }
    }

    fn expect_token(&mut self, token_kind: TokenKind) -> Result<Token, ParserError> {
        if self.at().kind == TokenKind::EOF && token_kind != TokenKind::EOF {
            return Err(ParserError::UnexpectedEof(token_kind));
        }

        let tk = self.eat()?;

        if tk.kind != token_kind {
            return Err(ParserError::FoundWrongToken(token_kind, tk.kind));
        }

        Ok(tk)
    }

    // Every statement ends its line
    fn expect_end_of_line(&mut self) -> Result<(), ParserError> {
        match self.at().kind {
            TokenKind::EndLine => {
                self.eat()?;
                Ok(())
            }
            TokenKind::EOF => Ok(()),
            _ => Err(ParserError::ExpectedEndOfLine(self.at().value.clone())),
        }
    }

    fn skip_end_lines(&mut self) {
        while self.at().kind == TokenKind::EndLine {
            let _ = self.eat();
        }
    }
}

static EOF_TOKEN: Token = Token {
    kind: TokenKind::EOF,
    value: String::new(),
    line: 0,
};
