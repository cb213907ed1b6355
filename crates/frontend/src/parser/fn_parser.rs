use super::errors_parser::ParserError;
use super::Parser;

use super::TokenKind;
use super::{ExpressionKind, FnDeclaration};

impl Parser {
    // Function declaration. The syntax is:
    // FUNCTION add(x, y)
    //     DECLARE z = x
    //     z = z THEN + y
    //     RETURN z
    // END
    // The return is optional, a function without one is void
    pub(super) fn parse_fn_declaration(&mut self) -> Result<FnDeclaration, ParserError> {
        let _ = self.expect_token(TokenKind::Function)?;

        let name = self
            .expect_token(TokenKind::Identifier)
            .map_err(|_| ParserError::MissingIdentifierAfterFn)?
            .value;

        let params = match self.at().kind {
            TokenKind::OpenParen => self.parse_fn_decl_args(&name)?,
            _ => return Err(ParserError::MissingFnOpenParen),
        };

        let _ = self
            .expect_token(TokenKind::CloseParen)
            .map_err(|_| ParserError::MissingFnCloseParen)?;
        self.expect_end_of_line()?;

        let body = self.parse_block(&[TokenKind::End])?;
        let _ = self.expect_token(TokenKind::End)?;
        self.expect_end_of_line()?;

        Ok(FnDeclaration { name, params, body })
    }

    // Parse parameters in prototype like:
    //  FUNCTION a(x, y, z)
    fn parse_fn_decl_args(&mut self, fn_name: &str) -> Result<Vec<String>, ParserError> {
        let _ = self.expect_token(TokenKind::OpenParen)?;
        let mut params: Vec<String> = vec![];

        while self.at().kind != TokenKind::CloseParen {
            let param = match self.at().kind {
                TokenKind::Identifier => self.eat()?.value,
                _ => return Err(ParserError::FnDeclArgsNotString),
            };

            if params.contains(&param) {
                return Err(ParserError::DuplicateParameter(fn_name.to_string(), param));
            }
            params.push(param);

            if self.at().kind == TokenKind::Comma {
                let _ = self.eat()?;

                // Can't write: FUNCTION a(x, )
                if self.at().kind != TokenKind::Identifier {
                    return Err(ParserError::MissingIdentAfterComma);
                }
            }
            // Can't do FUNCTION a(x y) without comma
            else if self.at().kind == TokenKind::Identifier {
                return Err(ParserError::MissingCommaBetweenArgs);
            }
        }

        Ok(params)
    }

    // name(arg1, arg2, ...)
    pub(super) fn parse_call(&mut self) -> Result<(String, Vec<ExpressionKind>), ParserError> {
        let name = self.expect_token(TokenKind::Identifier)?.value;

        Ok((name, self.parse_fn_call_args()?))
    }

    fn parse_fn_call_args(&mut self) -> Result<Vec<ExpressionKind>, ParserError> {
        let _ = self.expect_token(TokenKind::OpenParen)?;

        let args: Vec<_> = if let TokenKind::CloseParen = self.at().kind {
            Vec::new()
        } else {
            self.parse_args_call_list()?
        };

        let _ = self
            .expect_token(TokenKind::CloseParen)
            .map_err(|_| ParserError::MissingFnCloseParen)?;

        Ok(args)
    }

    fn parse_args_call_list(&mut self) -> Result<Vec<ExpressionKind>, ParserError> {
        let mut args: Vec<ExpressionKind> = vec![self.parse_expression()?];

        while let TokenKind::Comma = self.at().kind {
            let _ = self.eat()?;
            args.push(self.parse_expression()?);
        }

        Ok(args)
    }
}
