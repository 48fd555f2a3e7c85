use longhand_parser::ParseError;
use num_bigint::BigUint;
use thiserror::Error;

/// A well-formed problem the engine still refuses to work.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("First number must be greater than or equal to second number")]
    SubtrahendExceedsMinuend {
        minuend: BigUint,
        subtrahend: BigUint,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
