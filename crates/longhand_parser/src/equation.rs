//! Equation splitting and term collection.
//!
//! A side is read as a flat sum of signed monomials:
//!
//! ```text
//! side := term (('+' | '-') term)*
//! term := ['+' | '-'] number? ('x' ('^' number | '²')?)?
//! ```
//!
//! with the constraint that a term has a number, an `x`, or both.

use longhand_ast::{EquationSides, Span, Term};

use crate::error::EquationError;
use crate::token::{tokenize, Token, TokenKind};

pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split `equation` on its single `=` after removing whitespace.
pub fn split_equation(equation: &str) -> Result<EquationSides, EquationError> {
    let cleaned = strip_whitespace(equation);
    let mut sides = cleaned.split('=');

    match (sides.next(), sides.next(), sides.next()) {
        (Some(left), Some(right), None) => {
            if left.is_empty() || right.is_empty() {
                return Err(EquationError::EmptySide);
            }
            Ok(EquationSides {
                left: left.to_string(),
                right: right.to_string(),
            })
        }
        (_, None, _) => Err(EquationError::MissingEquals),
        _ => Err(EquationError::MultipleEquals),
    }
}

struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> Option<&'t Token> {
        match self.peek() {
            Some(t) if t.kind == kind => self.bump(),
            _ => None,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// Collect the signed terms of one equation side, in source order.
pub fn parse_terms(source: &str) -> Result<Vec<Term>, EquationError> {
    let tokens = tokenize(source)?;
    let mut cursor = Cursor {
        tokens: &tokens,
        pos: 0,
    };
    let mut terms = Vec::new();

    while !cursor.at_end() {
        let term = parse_term(source, &mut cursor, terms.is_empty())?;
        terms.push(term);
    }

    Ok(terms)
}

fn parse_term(source: &str, cursor: &mut Cursor<'_>, first: bool) -> Result<Term, EquationError> {
    let Some(head) = cursor.peek() else {
        return Err(EquationError::IncompleteTerm {
            text: String::new(),
            span: Span::new(source.len(), source.len()),
        });
    };
    let start = head.span.start;
    let mut end = head.span.end;

    let sign = match head.kind {
        TokenKind::Plus => {
            cursor.bump();
            1.0
        }
        TokenKind::Minus => {
            cursor.bump();
            -1.0
        }
        _ if !first => {
            return Err(EquationError::MissingOperator {
                text: head.span.slice(source).to_string(),
                span: head.span,
            });
        }
        _ => 1.0,
    };

    let mut coeff = None;
    if let Some(Token {
        kind: TokenKind::Number(n),
        span,
    }) = cursor.peek()
    {
        coeff = Some(*n);
        end = span.end;
        cursor.bump();
    }

    let mut degree = 0;
    if let Some(var) = cursor.eat(TokenKind::Var) {
        degree = 1;
        end = var.span.end;

        if let Some(sq) = cursor.eat(TokenKind::Squared) {
            degree = 2;
            end = sq.span.end;
        } else if let Some(caret) = cursor.eat(TokenKind::Caret) {
            let (exponent, span) = match cursor.bump() {
                Some(Token {
                    kind: TokenKind::Number(n),
                    span,
                }) => (*n, *span),
                _ => return Err(EquationError::MissingExponent { span: caret.span }),
            };
            degree = match exponent {
                e if e == 1.0 => 1,
                e if e == 2.0 => 2,
                _ => {
                    return Err(EquationError::UnsupportedExponent {
                        exponent: span.slice(source).to_string(),
                        span,
                    })
                }
            };
            end = span.end;
        }
    }

    let span = Span::new(start, end);
    if coeff.is_none() && degree == 0 {
        return Err(EquationError::IncompleteTerm {
            text: span.slice(source).to_string(),
            span,
        });
    }

    Ok(Term {
        coeff: sign * coeff.unwrap_or(1.0),
        degree,
        text: span.slice(source).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(source: &str) -> Vec<(f64, u8, String)> {
        parse_terms(source)
            .unwrap()
            .into_iter()
            .map(|t| (t.coeff, t.degree, t.text))
            .collect()
    }

    #[test]
    fn test_split_equation() {
        let sides = split_equation("2x + 3 = 7").unwrap();
        assert_eq!(sides.left, "2x+3");
        assert_eq!(sides.right, "7");
    }

    #[test]
    fn test_split_equation_errors() {
        assert_eq!(split_equation("2x+3"), Err(EquationError::MissingEquals));
        assert_eq!(split_equation("x=1=2"), Err(EquationError::MultipleEquals));
        assert_eq!(split_equation(" = 7"), Err(EquationError::EmptySide));
        assert_eq!(split_equation("2x ="), Err(EquationError::EmptySide));
    }

    #[test]
    fn test_linear_terms() {
        assert_eq!(
            summary("2x+3"),
            vec![(2.0, 1, "2x".into()), (3.0, 0, "+3".into())]
        );
    }

    #[test]
    fn test_implicit_coefficients() {
        assert_eq!(
            summary("x-x+3"),
            vec![(1.0, 1, "x".into()), (-1.0, 1, "-x".into()), (3.0, 0, "+3".into())]
        );
    }

    #[test]
    fn test_double_sign_is_incomplete() {
        assert_eq!(
            parse_terms("x+-x"),
            Err(EquationError::IncompleteTerm {
                text: "+".into(),
                span: Span::new(1, 2)
            })
        );
    }

    #[test]
    fn test_quadratic_terms() {
        assert_eq!(
            summary("1x^2-5x+6"),
            vec![
                (1.0, 2, "1x^2".into()),
                (-5.0, 1, "-5x".into()),
                (6.0, 0, "+6".into())
            ]
        );
        assert_eq!(
            summary("-x²+x"),
            vec![(-1.0, 2, "-x²".into()), (1.0, 1, "+x".into())]
        );
    }

    #[test]
    fn test_decimal_coefficients() {
        assert_eq!(summary("0.5x-.25"), vec![(0.5, 1, "0.5x".into()), (-0.25, 0, "-.25".into())]);
    }

    #[test]
    fn test_term_errors() {
        assert_eq!(
            parse_terms("2x3"),
            Err(EquationError::MissingOperator {
                text: "3".into(),
                span: Span::new(2, 3)
            })
        );
        assert!(matches!(
            parse_terms("2x+"),
            Err(EquationError::IncompleteTerm { .. })
        ));
        assert!(matches!(
            parse_terms("x^"),
            Err(EquationError::MissingExponent { .. })
        ));
        assert_eq!(
            parse_terms("x^3").unwrap_err().to_string(),
            "Unsupported exponent '3' (only x and x^2 are supported)"
        );
        assert!(matches!(
            parse_terms("3^2"),
            Err(EquationError::MissingOperator { .. })
        ));
    }
}
