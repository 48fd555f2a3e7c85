use longhand_didactic::Trace;
use longhand_solver_core::SolveFailure;
use num_bigint::BigUint;
use serde_json::{Map, Value};

/// A solver that remembers the current problem and its trace.
///
/// Every solve takes `&mut self`, so one session can never run two solves
/// at once; give each concurrent task its own session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    problem: Option<String>,
    trace: Trace,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a new arithmetic problem. The previous trace is discarded.
    pub fn receive(&mut self, problem: impl Into<String>) -> &mut Self {
        self.problem = Some(problem.into());
        self.trace.reset();
        self
    }

    pub fn problem(&self) -> Option<&str> {
        self.problem.as_deref()
    }

    /// Solve the received arithmetic problem. With nothing received this
    /// reports an empty-input error.
    pub fn solve_problem(&mut self) -> Option<BigUint> {
        self.trace.reset();
        let problem = self.problem.as_deref().unwrap_or("");
        longhand_engine::solve_arithmetic_into(problem, &mut self.trace)
    }

    pub fn solve_arithmetic(&mut self, problem: &str) -> Option<BigUint> {
        self.receive(problem).solve_problem()
    }

    /// Solve a linear equation. This replaces the trace but keeps the
    /// received arithmetic problem, as do the quadratic and geometry solves.
    pub fn solve_linear(&mut self, equation: &str) -> Result<f64, SolveFailure> {
        self.trace.reset();
        longhand_solver_core::solve_linear_into(equation, &mut self.trace)
    }

    pub fn solve_quadratic(&mut self, equation: &str) -> Result<(f64, f64), SolveFailure> {
        self.trace.reset();
        longhand_solver_core::solve_quadratic_into(equation, &mut self.trace)
    }

    pub fn solve_geometry(
        &mut self,
        kind: &str,
        values: &Map<String, Value>,
    ) -> Result<f64, SolveFailure> {
        self.trace.reset();
        longhand_solver_core::solve_geometry_into(kind, values, &mut self.trace)
    }

    /// Steps of the most recent solve.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receive_clears_previous_trace() {
        let mut session = Session::new();
        session.solve_arithmetic("1+1");
        assert!(!session.trace().is_empty());

        session.receive("2+2");
        assert!(session.trace().is_empty());
        assert_eq!(session.problem(), Some("2+2"));
    }

    #[test]
    fn test_repeated_solve_does_not_merge_traces() {
        let mut session = Session::new();
        session.receive("9+1");
        session.solve_problem();
        let first = session.trace().len();
        session.solve_problem();
        assert_eq!(session.trace().len(), first);
    }

    #[test]
    fn test_solve_without_problem_reports_empty_input() {
        let mut session = Session::new();
        assert_eq!(session.solve_problem(), None);
        assert_eq!(
            session.trace().last().unwrap().description,
            "Error: Input must be a non-empty string"
        );
    }

    #[test]
    fn test_equation_solve_keeps_received_problem() {
        let mut session = Session::new();
        session.receive("2+2");
        session.solve_linear("x = 1").unwrap();
        assert_eq!(session.problem(), Some("2+2"));
        assert_eq!(session.trace().steps()[0].description, "[START] Solving equation");

        assert_eq!(session.solve_problem(), Some(BigUint::from(4u8)));
        assert!(session
            .trace()
            .iter()
            .all(|s| !s.description.starts_with("Error: ")));
    }

    #[test]
    fn test_equation_solve_does_not_set_a_problem() {
        let mut session = Session::new();
        session.solve_quadratic("x^2-5x+6=0").unwrap();
        assert_eq!(session.problem(), None);
        assert_eq!(session.solve_problem(), None);
    }
}
