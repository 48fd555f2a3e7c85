//! Public solving API.
//!
//! Every entry point returns a [`Solved`] pair of answer and shown work.
//! The two failure styles stay distinct:
//!
//! - arithmetic failures are logged as an `Error: ...` step and the answer
//!   is `None`;
//! - equation and geometry failures come back as a [`SolveFailure`] whose
//!   `Display` is the learner-facing message.
//!
//! [`Session`] keeps the most recent trace around for callers that want
//! to ask for it after the fact.

mod session;

pub use longhand_ast::{ArithmeticProblem, Operator};
pub use longhand_didactic::{ascii, format_number, Solved, StepRecord, Trace};
pub use longhand_engine::{evaluate, ArithmeticError, ValidationError};
pub use longhand_parser::{EquationError, ParseError};
pub use longhand_solver_core::{FailureKind, GeometryKind, QuadraticCoefficients, SolveFailure};
pub use session::Session;

use num_bigint::BigUint;
use serde_json::{Map, Value};

/// Two-operand integer arithmetic such as `"999 + 1"` or `"12*34"`.
pub fn solve_arithmetic(problem: &str) -> Solved<Option<BigUint>> {
    longhand_engine::solve_arithmetic(problem)
}

/// Linear equation in x such as `"2x + 3 = 7"`.
pub fn solve_linear(equation: &str) -> Solved<Result<f64, SolveFailure>> {
    let mut trace = Trace::new();
    let value = longhand_solver_core::solve_linear_into(equation, &mut trace);
    Solved::new(value, trace)
}

/// Quadratic equation in standard form such as `"x^2 - 5x + 6 = 0"`.
pub fn solve_quadratic(equation: &str) -> Solved<Result<(f64, f64), SolveFailure>> {
    let mut trace = Trace::new();
    let value = longhand_solver_core::solve_quadratic_into(equation, &mut trace);
    Solved::new(value, trace)
}

/// Area formula `kind` (`triangle_area`, `circle_area`) over named values.
pub fn solve_geometry(kind: &str, values: &Map<String, Value>) -> Solved<Result<f64, SolveFailure>> {
    let mut trace = Trace::new();
    let value = longhand_solver_core::solve_geometry_into(kind, values, &mut trace);
    Solved::new(value, trace)
}
