//! Lexer for single-variable polynomial sides such as `-3x^2+x-4.5`.

use longhand_ast::{Span, VARIABLE};
use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1},
    combinator::{map_res, opt, recognize, value},
    sequence::pair,
    IResult,
};

use crate::error::EquationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Plus,
    Minus,
    Number(f64),
    Var,
    Caret,
    /// Superscript two, shorthand for `^2`.
    Squared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

// Numeric literals: 12, 1.5, 3., .25
fn number_literal(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))(input)
}

fn token_kind(input: &str) -> IResult<&str, TokenKind> {
    alt((
        value(TokenKind::Plus, char('+')),
        value(TokenKind::Minus, char('-')),
        value(TokenKind::Var, char(VARIABLE)),
        value(TokenKind::Caret, char('^')),
        value(TokenKind::Squared, char('²')),
        map_res(number_literal, |s: &str| s.parse::<f64>().map(TokenKind::Number)),
    ))(input)
}

/// Split `source` into tokens, skipping whitespace.
///
/// Spans are byte offsets into `source`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, EquationError> {
    let mut tokens = Vec::new();
    let mut rest = source;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let start = source.len() - rest.len();

        match token_kind(rest) {
            Ok((remaining, kind)) => {
                let end = source.len() - remaining.len();
                tokens.push(Token {
                    kind,
                    span: Span::new(start, end),
                });
                rest = remaining;
            }
            Err(_) => {
                let ch = rest.chars().next().unwrap_or_default();
                return Err(EquationError::UnexpectedChar {
                    ch,
                    span: Span::char_at(start, ch),
                });
            }
        }
    }

    Ok(tokens)
}
