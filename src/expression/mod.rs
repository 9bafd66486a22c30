//! Restricted arithmetic for calculator input
//!
//! Lets the user type `10*3+2` instead of a raw count. Only numeric literals,
//! `+ - * /`, unary signs and parentheses are accepted; everything else fails
//! with [`TillError::InvalidExpression`]. Division by zero fails with
//! [`TillError::DivisionByZero`] and no non-finite result is ever returned.
//!
//! # Example
//!
//! ```rust
//! use till_report::expression::ExpressionEvaluator;
//!
//! let calc = ExpressionEvaluator::new(true);
//! assert_eq!(calc.evaluate("3,5+1").unwrap(), 4.5);
//! ```

mod lexer;
mod parser;

use crate::config::Settings;
use crate::error::{TillError, TillResult};

use parser::Parser;

/// Evaluates calculator input
#[derive(Debug, Clone, Copy)]
pub struct ExpressionEvaluator {
    decimal_comma: bool,
}

impl Default for ExpressionEvaluator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ExpressionEvaluator {
    /// Create an evaluator; `decimal_comma` accepts `,` as decimal separator
    pub fn new(decimal_comma: bool) -> Self {
        Self { decimal_comma }
    }

    /// Create an evaluator following the user's settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.decimal_comma)
    }

    /// Whether `,` is accepted as decimal separator
    pub fn decimal_comma(&self) -> bool {
        self.decimal_comma
    }

    /// Evaluate an expression
    pub fn evaluate(&self, expression: &str) -> TillResult<f64> {
        if expression.trim().is_empty() {
            return Err(TillError::InvalidExpression("empty expression".into()));
        }

        let tokens = lexer::tokenize(expression, self.decimal_comma)?;
        let value = Parser::new(&tokens).evaluate()?;

        if !value.is_finite() {
            return Err(TillError::InvalidExpression("result out of range".into()));
        }

        Ok(value)
    }
}

/// Evaluate with the default locale handling (comma accepted)
pub fn evaluate(expression: &str) -> TillResult<f64> {
    ExpressionEvaluator::default().evaluate(expression)
}
