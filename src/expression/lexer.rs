//! Tokenizer for calculator input

use crate::error::{TillError, TillResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Split input into tokens
///
/// `decimal_comma` lets `,` stand in for the decimal point. Anything that is
/// not a digit, decimal separator, operator, parenthesis or whitespace is
/// rejected here, so identifiers and function calls never reach the parser.
pub fn tokenize(input: &str, decimal_comma: bool) -> TillResult<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        let token = match c {
            c if c.is_whitespace() => {
                pos += 1;
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || is_decimal_separator(c, decimal_comma) => {
                let (value, next) = read_number(&chars, pos, decimal_comma)?;
                tokens.push(Token::Number(value));
                pos = next;
                continue;
            }
            other => {
                return Err(TillError::InvalidExpression(format!(
                    "unexpected character '{}' at position {}",
                    other,
                    pos + 1
                )))
            }
        };
        tokens.push(token);
        pos += 1;
    }

    Ok(tokens)
}

fn is_decimal_separator(c: char, decimal_comma: bool) -> bool {
    c == '.' || (decimal_comma && c == ',')
}

/// Read a numeric literal starting at `start`; returns the value and the
/// index just past it
fn read_number(chars: &[char], start: usize, decimal_comma: bool) -> TillResult<(f64, usize)> {
    let mut literal = String::new();
    let mut seen_separator = false;
    let mut digits = 0;
    let mut pos = start;

    while pos < chars.len() {
        let c = chars[pos];
        if c.is_ascii_digit() {
            literal.push(c);
            digits += 1;
        } else if is_decimal_separator(c, decimal_comma) {
            if seen_separator {
                return Err(TillError::InvalidExpression(format!(
                    "malformed number at position {}",
                    start + 1
                )));
            }
            seen_separator = true;
            literal.push('.');
        } else {
            break;
        }
        pos += 1;
    }

    if digits == 0 {
        return Err(TillError::InvalidExpression(format!(
            "malformed number at position {}",
            start + 1
        )));
    }

    let value = literal.parse::<f64>().map_err(|_| {
        TillError::InvalidExpression(format!("malformed number at position {}", start + 1))
    })?;

    Ok((value, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        let tokens = tokenize("10*3 + 2", false).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(10.0),
                Token::Star,
                Token::Number(3.0),
                Token::Plus,
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(tokenize("2.5", false).unwrap(), vec![Token::Number(2.5)]);
        assert_eq!(tokenize(".5", false).unwrap(), vec![Token::Number(0.5)]);
        assert_eq!(tokenize("5.", false).unwrap(), vec![Token::Number(5.0)]);
        assert_eq!(tokenize("3,5", true).unwrap(), vec![Token::Number(3.5)]);
    }

    #[test]
    fn test_comma_rejected_without_locale() {
        assert!(tokenize("3,5", false).is_err());
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert!(tokenize("abc", true).is_err());
        assert!(tokenize("2**3", true).is_ok()); // the parser rejects this one
        assert!(tokenize("1e5", true).is_err());
        assert!(tokenize("2 < 3", true).is_err());
        assert!(tokenize("2^3", true).is_err());
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(tokenize("1.2.3", false).is_err());
        assert!(tokenize(".", false).is_err());
        assert!(tokenize("1,2.3", true).is_err());
    }
}
