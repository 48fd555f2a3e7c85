//! Linear equations in x: collect x terms on the left, numbers on the right,
//! then divide.

use longhand_didactic::{format_number, Trace};
use longhand_parser::{parse_terms, split_equation, strip_whitespace};

use crate::failure::{FailureKind, SolveFailure};

pub const INFINITE_SOLUTIONS: &str = "This equation has infinite solutions!";
pub const NO_SOLUTION: &str = "This equation has no solution!";

fn join_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Solve `equation` (e.g. `"2x + 3 = 7"`) for x, showing the work in `trace`.
pub fn solve_linear_into(equation: &str, trace: &mut Trace) -> Result<f64, SolveFailure> {
    tracing::debug!(target: "solve", equation, "linear_start");
    trace.work("[START] Solving equation", equation);

    let cleaned = strip_whitespace(equation);
    trace.work("Making equation easier to read", format!("Original: {}", cleaned));

    let sides = split_equation(&cleaned)?;
    trace.work(
        "Breaking equation into two parts",
        format!("Left: {}, Right: {}", sides.left, sides.right),
    );

    let mut x_coefficients = Vec::new();
    let mut numbers = Vec::new();

    for term in parse_terms(&sides.left)? {
        match term.degree {
            0 => {
                numbers.push(-term.coeff);
                trace.record(
                    "Moving number to right side",
                    term.text,
                    format!("Added {} to right side", format_number(-term.coeff)),
                );
            }
            1 => {
                x_coefficients.push(term.coeff);
                trace.record(
                    "Found an x term",
                    format!("Term: {}", term.text),
                    format!("Coefficient: {}", format_number(term.coeff)),
                );
            }
            _ => return Err(squared_term(&term.text)),
        }
    }

    for term in parse_terms(&sides.right)? {
        match term.degree {
            0 => {
                numbers.push(term.coeff);
                trace.work("Found a number on right side", term.text);
            }
            1 => {
                x_coefficients.push(-term.coeff);
                trace.record(
                    "Moving x term to left side",
                    term.text,
                    format!("Added {}x to left side", format_number(-term.coeff)),
                );
            }
            _ => return Err(squared_term(&term.text)),
        }
    }

    let x_coef: f64 = x_coefficients.iter().sum();
    let total: f64 = numbers.iter().sum();
    trace.record(
        "Adding like terms",
        format!(
            "x terms: [{}], numbers: [{}]",
            join_numbers(&x_coefficients),
            join_numbers(&numbers)
        ),
        format!("{}x = {}", format_number(x_coef), format_number(total)),
    );

    if x_coef == 0.0 {
        let failure = if total == 0.0 {
            SolveFailure::new(FailureKind::InfiniteSolutions, INFINITE_SOLUTIONS)
        } else {
            SolveFailure::new(FailureKind::NoSolution, NO_SOLUTION)
        };
        tracing::debug!(target: "solve", outcome = %failure, "linear_degenerate");
        return Err(failure);
    }

    // Adding 0.0 folds a -0.0 quotient into 0.0.
    let x = total / x_coef + 0.0;
    trace.record(
        "Solving for x",
        format!("{}x = {}", format_number(x_coef), format_number(total)),
        format!("x = {}", format_number(x)),
    );
    tracing::debug!(target: "solve", x, steps = trace.len(), "linear_complete");
    Ok(x)
}

fn squared_term(text: &str) -> SolveFailure {
    SolveFailure::error(
        FailureKind::InvalidInput,
        format!("'{}' is an x² term; this is not a linear equation", text),
    )
}
