pub mod arithmetic;
pub mod equation;
pub mod error;
pub mod token;

pub use arithmetic::parse_arithmetic;
pub use equation::{parse_terms, split_equation, strip_whitespace};
pub use error::{EquationError, ParseError};
pub use token::{tokenize, Token, TokenKind};
