//! Shared problem types for the longhand solvers.

pub mod problem;
pub mod span;
pub mod term;

pub use problem::{ArithmeticProblem, EquationSides, Operator};
pub use span::Span;
pub use term::{Term, VARIABLE};
