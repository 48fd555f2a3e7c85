//! Equation and geometry solvers.
//!
//! Each solver appends its shown work to a caller-owned
//! [`Trace`](longhand_didactic::Trace) and reports failure as a
//! [`SolveFailure`] whose text is the learner-facing message.

pub mod failure;
pub mod geometry;
pub mod linear;
pub mod quadratic;

pub use failure::{FailureKind, SolveFailure};
pub use geometry::{solve_geometry_into, GeometryKind};
pub use linear::solve_linear_into;
pub use quadratic::{discriminant, roots_from_discriminant, solve_quadratic_into, QuadraticCoefficients};
