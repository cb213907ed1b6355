use super::errors_parser::ParserError;
use super::Parser;
use super::StatementKind;
use super::TokenKind;

impl Parser {
    // IF <expression>
    //     ...
    // ELSE
    //     ...
    // ENDIF
    // The ELSE part is optional
    pub(super) fn parse_if(&mut self) -> Result<StatementKind, ParserError> {
        let _ = self.expect_token(TokenKind::If)?;
        let condition = self.parse_expression()?;
        self.expect_end_of_line()?;

        let then_body = self.parse_block(&[TokenKind::EndIf, TokenKind::Else])?;

        let else_body = if self.at().kind == TokenKind::Else {
            self.eat()?;
            self.expect_end_of_line()?;
            Some(self.parse_block(&[TokenKind::EndIf])?)
        } else {
            None
        };

        let _ = self.expect_token(TokenKind::EndIf)?;

        Ok(StatementKind::If {
            condition,
            then_body,
            else_body,
        })
    }

    // WHILE <expression>
    //     ...
    // ENDWHILE
    pub(super) fn parse_while(&mut self) -> Result<StatementKind, ParserError> {
        let _ = self.expect_token(TokenKind::While)?;
        let condition = self.parse_expression()?;
        self.expect_end_of_line()?;

        let body = self.parse_block(&[TokenKind::EndWhile])?;
        let _ = self.expect_token(TokenKind::EndWhile)?;

        Ok(StatementKind::While { condition, body })
    }
}
