use longhand_parser::EquationError;
use thiserror::Error;

/// Why an equation or geometry problem has no single numeric answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The input could not be read as the expected form.
    InvalidInput,
    /// `0x = 0`: every x works.
    InfiniteSolutions,
    /// `0x = c`, c ≠ 0: no x works.
    NoSolution,
    /// Negative discriminant.
    NoRealSolutions,
    /// x² coefficient is zero.
    NotQuadratic,
    /// A required measurement is absent.
    MissingValue,
    /// A measurement is not a number, or not positive.
    InvalidValue,
    /// Unknown geometry problem type.
    UnsupportedProblem,
}

/// A failed solve. Displays as the exact message shown to the learner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SolveFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl SolveFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Failure whose message is `Error: {detail}`.
    pub fn error(kind: FailureKind, detail: impl std::fmt::Display) -> Self {
        Self::new(kind, format!("Error: {}", detail))
    }
}

impl From<EquationError> for SolveFailure {
    fn from(err: EquationError) -> Self {
        Self::error(FailureKind::InvalidInput, err)
    }
}
