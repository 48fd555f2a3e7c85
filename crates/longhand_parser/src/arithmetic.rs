//! Two-operand arithmetic problems: `<digits> <op> <digits>`.
//!
//! Operator detection is a plain character scan over the whole input.
//! Every `-` counts as the subtraction operator, so signed operands are
//! not representable: `-5+3` reports two operations and `-5` reports an
//! invalid number.

use longhand_ast::{ArithmeticProblem, Operator};
use nom::character::complete::digit1;
use nom::combinator::all_consuming;
use num_bigint::BigUint;

use crate::error::ParseError;

pub fn parse_arithmetic(input: &str) -> Result<ArithmeticProblem, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let op = detect_operator(input)?;

    let mut sides = input.split(op.symbol());
    let (Some(lhs), Some(rhs), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(ParseError::InvalidNumber(input.trim().to_string()));
    };

    Ok(ArithmeticProblem {
        lhs: parse_operand(lhs)?,
        rhs: parse_operand(rhs)?,
        op,
    })
}

/// Find the single operator kind present in `input`.
fn detect_operator(input: &str) -> Result<Operator, ParseError> {
    let found: Vec<Operator> = Operator::ALL
        .into_iter()
        .filter(|op| input.contains(op.symbol()))
        .collect();

    match found.as_slice() {
        [] => Err(ParseError::NoOperation),
        [op] => Ok(*op),
        _ => Err(ParseError::MultipleOperations { found }),
    }
}

fn parse_operand(text: &str) -> Result<BigUint, ParseError> {
    let trimmed = text.trim();
    let invalid = || ParseError::InvalidNumber(trimmed.to_string());

    let (_, digits) =
        all_consuming(digit1::<&str, nom::error::Error<&str>>)(trimmed).map_err(|_| invalid())?;
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_parse_each_operator() {
        let p = parse_arithmetic("123+456").unwrap();
        assert_eq!((p.lhs, p.rhs, p.op), (big(123), big(456), Operator::Add));

        let p = parse_arithmetic(" 2000 - 999 ").unwrap();
        assert_eq!((p.lhs, p.rhs, p.op), (big(2000), big(999), Operator::Sub));

        let p = parse_arithmetic("12 * 34").unwrap();
        assert_eq!((p.lhs, p.rhs, p.op), (big(12), big(34), Operator::Mul));
    }

    #[test]
    fn test_leading_zeros_are_accepted() {
        let p = parse_arithmetic("007+1").unwrap();
        assert_eq!(p.lhs, big(7));
    }

    #[test]
    fn test_operands_wider_than_u128() {
        let p = parse_arithmetic("340282366920938463463374607431768211456*2").unwrap();
        assert_eq!(p.lhs.to_string(), "340282366920938463463374607431768211456");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_arithmetic(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_arithmetic("   "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_no_operation() {
        assert_eq!(parse_arithmetic("42"), Err(ParseError::NoOperation));
        assert_eq!(parse_arithmetic("8/2"), Err(ParseError::NoOperation));
    }

    #[test]
    fn test_multiple_operation_kinds() {
        let err = parse_arithmetic("123+456-789").unwrap_err();
        assert_eq!(
            err,
            ParseError::MultipleOperations {
                found: vec![Operator::Add, Operator::Sub]
            }
        );
        assert_eq!(err.to_string(), "Only one operation allowed per problem");
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(
            parse_arithmetic("abc+def"),
            Err(ParseError::InvalidNumber("abc".into()))
        );
        assert_eq!(
            parse_arithmetic("1.5*2"),
            Err(ParseError::InvalidNumber("1.5".into()))
        );
        // Repeating the same operator leaves more than two sides.
        assert_eq!(
            parse_arithmetic("1+2+3"),
            Err(ParseError::InvalidNumber("1+2+3".into()))
        );
        assert_eq!(parse_arithmetic("5+"), Err(ParseError::InvalidNumber("".into())));
    }

    #[test]
    fn test_unary_minus_is_not_a_sign() {
        // Documented limitation: a leading minus is always the operator.
        assert!(matches!(
            parse_arithmetic("-5+3"),
            Err(ParseError::MultipleOperations { .. })
        ));
        assert_eq!(parse_arithmetic("-5"), Err(ParseError::InvalidNumber("".into())));
        assert!(matches!(
            parse_arithmetic("5--3"),
            Err(ParseError::InvalidNumber(_))
        ));
    }
}
