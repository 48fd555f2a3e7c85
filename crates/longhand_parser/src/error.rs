use longhand_ast::{Operator, Span};
use thiserror::Error;

/// Why an arithmetic problem string could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Input must be a non-empty string")]
    EmptyInput,
    #[error("No supported operation found")]
    NoOperation,
    #[error("Only one operation allowed per problem")]
    MultipleOperations { found: Vec<Operator> },
    #[error("Invalid number format")]
    InvalidNumber(String),
}

/// Why an equation string could not be split or tokenized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquationError {
    #[error("Invalid equation format - missing equals sign (=)")]
    MissingEquals,
    #[error("Invalid equation format - more than one equals sign (=)")]
    MultipleEquals,
    #[error("Invalid equation format - empty side of equation")]
    EmptySide,
    #[error("Unexpected character '{}' at position {}", .ch, .span.start)]
    UnexpectedChar { ch: char, span: Span },
    #[error("Expected '+' or '-' before '{text}'")]
    MissingOperator { text: String, span: Span },
    #[error("Incomplete term '{text}'")]
    IncompleteTerm { text: String, span: Span },
    #[error("Expected an exponent after '^' at position {}", .span.start)]
    MissingExponent { span: Span },
    #[error("Unsupported exponent '{exponent}' (only x and x^2 are supported)")]
    UnsupportedExponent { exponent: String, span: Span },
}
