//! Top-level arithmetic solve: parse, work the columns, and turn failures
//! into an `Error: ...` step plus an absent answer.

use longhand_didactic::{Solved, Trace};
use longhand_parser::parse_arithmetic;
use num_bigint::BigUint;

use crate::arithmetic::compute;
use crate::error::ArithmeticError;

/// Solve a two-operand problem such as `"999 + 1"` with a fresh trace.
///
/// Parse and validation failures never escape: they are written to the
/// trace as an `Error: ...` step and the answer is `None`.
pub fn solve_arithmetic(problem: &str) -> Solved<Option<BigUint>> {
    let mut trace = Trace::new();
    let value = solve_arithmetic_into(problem, &mut trace);
    Solved::new(value, trace)
}

/// Like [`solve_arithmetic`], appending to a caller-owned trace.
pub fn solve_arithmetic_into(problem: &str, trace: &mut Trace) -> Option<BigUint> {
    tracing::debug!(target: "arithmetic", problem, "solve_start");
    trace.note(format!("Input received: {}", problem));

    match evaluate(problem, trace) {
        Ok(value) => {
            tracing::debug!(
                target: "arithmetic",
                result = %value,
                steps = trace.len(),
                "solve_complete"
            );
            Some(value)
        }
        Err(err) => {
            tracing::debug!(target: "arithmetic", error = %err, "solve_failed");
            trace.note(format!("Error: {}", err));
            None
        }
    }
}

/// Parse and compute, surfacing failures as a typed error.
pub fn evaluate(problem: &str, trace: &mut Trace) -> Result<BigUint, ArithmeticError> {
    let parsed = parse_arithmetic(problem)?;
    trace.record(
        "Understanding the problem",
        parsed.to_string(),
        format!("{} two numbers", parsed.op.verb()),
    );
    compute(&parsed, trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use longhand_parser::ParseError;

    #[test]
    fn test_solve_records_input_first() {
        let solved = solve_arithmetic("29+57");
        assert_eq!(solved.value, Some(BigUint::from(86u32)));
        assert_eq!(solved.trace.steps()[0].description, "Input received: 29+57");
        let understanding = &solved.trace.steps()[1];
        assert_eq!(understanding.work, "29 + 57");
        assert_eq!(understanding.result, "Adding two numbers");
    }

    #[test]
    fn test_parse_failure_becomes_error_step() {
        let solved = solve_arithmetic("abc+def");
        assert_eq!(solved.value, None);
        assert_eq!(
            solved.trace.last().unwrap().description,
            "Error: Invalid number format"
        );
    }

    #[test]
    fn test_validation_failure_becomes_error_step() {
        let solved = solve_arithmetic("100-200");
        assert_eq!(solved.value, None);
        assert_eq!(
            solved.trace.last().unwrap().description,
            "Error: First number must be greater than or equal to second number"
        );
    }

    #[test]
    fn test_evaluate_keeps_error_kind() {
        let mut trace = Trace::new();
        assert_eq!(
            evaluate("", &mut trace),
            Err(ArithmeticError::Parse(ParseError::EmptyInput))
        );
        assert!(matches!(
            evaluate("1-2", &mut trace),
            Err(ArithmeticError::Validation(_))
        ));
    }

    #[test]
    fn test_into_appends_to_existing_trace() {
        let mut trace = Trace::new();
        trace.note("earlier");
        let value = solve_arithmetic_into("2*3", &mut trace);
        assert_eq!(value, Some(BigUint::from(6u8)));
        assert_eq!(trace.steps()[0].description, "earlier");
    }
}
