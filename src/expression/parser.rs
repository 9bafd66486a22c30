//! Recursive-descent evaluation over the token stream
//!
//! Grammar:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | primary
//! primary:= NUMBER | '(' expr ')'
//! ```

use super::lexer::Token;
use crate::error::{TillError, TillResult};

/// Deepest allowed nesting of parentheses and unary signs
const MAX_DEPTH: usize = 64;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Evaluate the whole token stream; trailing tokens are an error
    pub fn evaluate(mut self) -> TillResult<f64> {
        if self.tokens.is_empty() {
            return Err(TillError::InvalidExpression("empty expression".into()));
        }

        let value = self.expr()?;

        if let Some(token) = self.peek() {
            return Err(unexpected(token));
        }

        Ok(value)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> TillResult<f64> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> TillResult<f64> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(TillError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> TillResult<f64> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.nested(|p| p.unary())
            }
            Some(Token::Minus) => {
                self.pos += 1;
                self.nested(|p| p.unary()).map(|v| -v)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> TillResult<f64> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.nested(|p| p.expr())?;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    Some(token) => Err(unexpected(token)),
                    None => Err(TillError::InvalidExpression("missing ')'".into())),
                }
            }
            Some(token) => Err(unexpected(token)),
            None => Err(TillError::InvalidExpression(
                "unexpected end of expression".into(),
            )),
        }
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> TillResult<f64>) -> TillResult<f64> {
        if self.depth >= MAX_DEPTH {
            return Err(TillError::InvalidExpression("expression nested too deeply".into()));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

fn unexpected(token: Token) -> TillError {
    let shown = match token {
        Token::Number(n) => n.to_string(),
        Token::Plus => "+".into(),
        Token::Minus => "-".into(),
        Token::Star => "*".into(),
        Token::Slash => "/".into(),
        Token::LParen => "(".into(),
        Token::RParen => ")".into(),
    };
    TillError::InvalidExpression(format!("unexpected '{}'", shown))
}
