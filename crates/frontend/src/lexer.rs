use colored::*;
use std::collections::{HashMap, VecDeque};
use thiserror::Error;

use tools::errors::{CodeErr, ReportCodeErr};

#[derive(Debug, Error, PartialEq)]
pub enum LexerError {
    #[error("{} while tokenizing code, unsupported character: -{0}-.", "Error".bold().red())]
    UnrecognizedToken(String),

    #[error("{} while tokenizing number -{0}-, numbers can only contain digits.", "Error".bold().red())]
    AlphaCharInNumberToken(String),

    #[error("{} while tokenizing string {0}, missing closing quote before end of line.", "Error".bold().red())]
    UnterminatedString(String),
}

impl ReportCodeErr for LexerError {}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literal types
    Number,
    Identifier,
    String,

    // Operator
    Equals,
    BinaryOperator,

    // Grouping
    OpenParen,  // (
    CloseParen, // )
    Comma,      // ,

    // Keywords
    Function,
    Main,
    End,
    Declare,
    Print,
    Return,
    If,
    Else,
    EndIf,
    While,
    EndWhile,
    Then,
    True,
    False,

    // File
    EndLine,
    EOF,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u64,
}

// Append a new line and a white space at the end of the code to allow the
// window to work correctly. Otherwise, last character is never in its own window.
fn append_space_and_eof(mut source_code: String) -> String {
    source_code.push('\n');
    source_code.push(' ');
    source_code
}

fn is_skippable(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Default)]
pub struct Lexer<'a> {
    pub tokens: VecDeque<Token>,
    reserved_keywords: HashMap<&'a str, Token>,
}

impl<'a> Lexer<'a> {
    fn generate_keywords(&mut self) {
        let keywords = [
            ("FUNCTION", TokenKind::Function),
            ("MAIN", TokenKind::Main),
            ("END", TokenKind::End),
            ("DECLARE", TokenKind::Declare),
            ("PRINT", TokenKind::Print),
            ("RETURN", TokenKind::Return),
            ("IF", TokenKind::If),
            ("ELSE", TokenKind::Else),
            ("ENDIF", TokenKind::EndIf),
            ("WHILE", TokenKind::While),
            ("ENDWHILE", TokenKind::EndWhile),
            ("THEN", TokenKind::Then),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            // Word operators behave like their symbol counterparts
            ("AND", TokenKind::BinaryOperator),
            ("OR", TokenKind::BinaryOperator),
        ];

        for (word, kind) in keywords {
            self.reserved_keywords
                .insert(word, Token::new(kind, word.to_string(), 0));
        }
    }

    pub fn tokenize(&mut self, source_code: String) -> Result<(), CodeErr<LexerError>> {
        self.generate_keywords();

        let modified_code = append_space_and_eof(source_code);
        let chars = modified_code.chars().collect::<Vec<char>>();
        let mut window = chars.windows(2);

        // We keep the count of the current line
        let mut line: u64 = 0;

        self.tokens.clear();

        while let Some(c) = window.next() {
            let first_char = c[0];

            if is_skippable(first_char) {
                continue;
            }

            match first_char {
                '+' | '-' | '*' | '>' => self.tokens.push_back(Token::new(
                    TokenKind::BinaryOperator,
                    first_char.to_string(),
                    line,
                )),
                '/' => {
                    // Comment until the end of the line, the new line itself is kept
                    if c[1] == '/' {
                        while let Some(s) = window.next() {
                            if s[1] == '\n' || s[1] == '\r' {
                                break;
                            }
                        }
                    } else {
                        self.tokens.push_back(Token::new(
                            TokenKind::BinaryOperator,
                            first_char.to_string(),
                            line,
                        ));
                    }
                }
                '=' => {
                    if c[1] == '=' {
                        self.tokens.push_back(Token::new_equality(line));
                        window.next();
                    } else {
                        self.tokens.push_back(Token::new_equal(line));
                    }
                }
                '(' => self.tokens.push_back(Token::new_open_paren(line)),
                ')' => self.tokens.push_back(Token::new_close_paren(line)),
                ',' => self.tokens.push_back(Token::new_comma(line)),
                '"' | '\'' => {
                    let mut val = String::from(first_char);
                    let mut closed = false;

                    while let Some(r) = window.next() {
                        if r[0] == '\n' || r[0] == '\r' {
                            break;
                        }

                        val.push(r[0]);

                        if r[0] == first_char {
                            closed = true;
                            break;
                        }
                    }

                    if !closed {
                        return Err(LexerError::UnterminatedString(val).to_glob_err(line));
                    }

                    self.tokens.push_back(Token::new_string(val, line));
                }
                // Linux new line
                '\n' => {
                    self.tokens.push_back(Token::new_end_line(line));
                    line += 1;
                }
                // Windows new line
                '\r' => {
                    if c[1] == '\n' {
                        window.next();
                    }
                    self.tokens.push_back(Token::new_end_line(line));
                    line += 1;
                }
                _ => {
                    let second_char = c[1];

                    if first_char.is_ascii_digit() {
                        let mut val = String::from(first_char);

                        if second_char.is_ascii_digit() {
                            while let Some(r) = window.next() {
                                val.push(r[0]);

                                if !r[1].is_ascii_digit() {
                                    if is_ident_char(r[1]) {
                                        val.push(r[1]);
                                        return Err(LexerError::AlphaCharInNumberToken(val)
                                            .to_glob_err(line));
                                    }
                                    break;
                                }
                            }
                        } else if is_ident_char(second_char) {
                            val.push(second_char);
                            return Err(LexerError::AlphaCharInNumberToken(val).to_glob_err(line));
                        }

                        self.tokens.push_back(Token::new_number(val, line));
                    } else if first_char.is_ascii_alphabetic() || first_char == '_' {
                        let mut val = String::from(first_char);

                        // Support for variable like init_pos and variable with number like vec2
                        if is_ident_char(second_char) {
                            while let Some(r) = window.next() {
                                val.push(r[0]);

                                if !is_ident_char(r[1]) {
                                    break;
                                }
                            }
                        }

                        if let Some(tk) = self.reserved_keywords.get(val.as_str()) {
                            self.tokens.push_back(tk.clone().set_line(line));
                        } else {
                            self.tokens.push_back(Token::new_identifier(val, line));
                        }
                    } else {
                        return Err(
                            LexerError::UnrecognizedToken(first_char.into()).to_glob_err(line)
                        );
                    }
                }
            }
        }

        self.tokens.push_back(Token::new_eof(line));
        Ok(())
    }
}

// ---------
//  Helpers
// ---------
impl Token {
    pub fn new(kind: TokenKind, value: String, line: u64) -> Self {
        Self { kind, value, line }
    }

    pub fn new_number(value: String, line: u64) -> Token {
        Token::new(TokenKind::Number, value, line)
    }
    pub fn new_identifier(value: String, line: u64) -> Token {
        Token::new(TokenKind::Identifier, value, line)
    }
    pub fn new_string(value: String, line: u64) -> Token {
        Token::new(TokenKind::String, value, line)
    }
    pub fn new_operator(symbol: &str, line: u64) -> Token {
        Token::new(TokenKind::BinaryOperator, symbol.to_string(), line)
    }
    pub fn new_equal(line: u64) -> Token {
        Token::new(TokenKind::Equals, '='.to_string(), line)
    }
    pub fn new_equality(line: u64) -> Token {
        Token::new_operator("==", line)
    }
    pub fn new_open_paren(line: u64) -> Token {
        Token::new(TokenKind::OpenParen, '('.to_string(), line)
    }
    pub fn new_close_paren(line: u64) -> Token {
        Token::new(TokenKind::CloseParen, ')'.to_string(), line)
    }
    pub fn new_comma(line: u64) -> Token {
        Token::new(TokenKind::Comma, ','.to_string(), line)
    }
    pub fn new_keyword(kind: TokenKind, word: &str, line: u64) -> Token {
        Token::new(kind, word.to_string(), line)
    }
    pub fn new_end_line(line: u64) -> Token {
        Token::new(TokenKind::EndLine, '\n'.to_string(), line)
    }
    pub fn new_eof(line: u64) -> Token {
        Token::new(TokenKind::EOF, "EOF".to_string(), line)
    }

    pub fn set_line(self, line: u64) -> Self {
        Self {
            kind: self.kind,
            value: self.value,
            line,
        }
    }
}
