//! Long-hand arithmetic engine.
//!
//! Column addition, subtraction with borrowing, and long multiplication,
//! each simulated digit by digit the way it is taught on paper. Every
//! column produces a [`StepRecord`](longhand_didactic::StepRecord) so the
//! caller can show how the answer was reached. Operands are
//! [`BigUint`](num_bigint::BigUint), so results never overflow.

pub mod arithmetic;
pub mod error;
pub mod orchestrator;

pub use arithmetic::{add, compute, multiply, subtract};
pub use error::{ArithmeticError, ValidationError};
pub use orchestrator::{evaluate, solve_arithmetic, solve_arithmetic_into};
