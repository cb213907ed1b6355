use super::errors_parser::ParserError;
use super::Parser;
use super::TokenKind;
use super::{ChainLink, ChainOperator, StatementKind};

impl Parser {
    // PRINT "some text"   or   PRINT x
    pub(super) fn parse_print(&mut self) -> Result<StatementKind, ParserError> {
        let _ = self.expect_token(TokenKind::Print)?;

        match self.at().kind {
            TokenKind::String => Ok(StatementKind::PrintString {
                text: self.eat()?.value,
            }),
            TokenKind::Identifier => Ok(StatementKind::PrintVariable {
                name: self.eat()?.value,
            }),
            _ => Err(ParserError::ExpectedPrintable(self.at().value.clone())),
        }
    }

    // DECLARE x = <expression>
    pub(super) fn parse_var_declaration(&mut self) -> Result<StatementKind, ParserError> {
        let _ = self.expect_token(TokenKind::Declare)?;

        if self.at().kind != TokenKind::Identifier {
            return Err(ParserError::ExpectedVarNameAfterKw(self.at().value.clone()));
        }
        let name = self.eat()?.value;

        let _ = self.expect_token(TokenKind::Equals)?;
        let value = self.parse_expression()?;

        Ok(StatementKind::VarDeclaration { name, value })
    }

    // x = <expression> THEN <op> <expression> THEN ...
    // A lone call on the right side is an assignment from call
    pub(super) fn parse_assignment(&mut self) -> Result<StatementKind, ParserError> {
        let name = self.expect_token(TokenKind::Identifier)?.value;
        let _ = self.expect_token(TokenKind::Equals)?;

        let base = self.parse_expression()?;
        let operations = self.parse_operation_chain()?;

        if operations.is_empty() {
            if let Some((caller, args)) = base.as_call() {
                return Ok(StatementKind::AssignFromCall {
                    name,
                    caller: caller.to_string(),
                    args: args.to_vec(),
                });
            }
        }

        Ok(StatementKind::VarAssignment {
            name,
            base,
            operations,
        })
    }

    fn parse_operation_chain(&mut self) -> Result<Vec<ChainLink>, ParserError> {
        let mut operations = vec![];

        while self.at().kind == TokenKind::Then {
            self.eat()?;

            let operator = match self.at().kind {
                TokenKind::BinaryOperator => ChainOperator::from_symbol(&self.at().value),
                _ => None,
            }
            .ok_or_else(|| ParserError::ExpectedOperatorAfterThen(self.at().value.clone()))?;

            self.eat()?;
            operations.push(ChainLink::new(operator, self.parse_expression()?));
        }

        Ok(operations)
    }

    // RETURN x
    pub(super) fn parse_return(&mut self) -> Result<StatementKind, ParserError> {
        let _ = self.expect_token(TokenKind::Return)?;

        match self.at().kind {
            TokenKind::Identifier => Ok(StatementKind::Return {
                name: self.eat()?.value,
            }),
            _ => Err(ParserError::ReturnNeedsIdentifier(self.at().value.clone())),
        }
    }
}
