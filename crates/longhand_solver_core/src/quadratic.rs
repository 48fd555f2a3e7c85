//! Quadratic equations in standard form `ax² + bx + c = 0`, solved with the
//! quadratic formula over the reals.

use longhand_ast::Term;
use longhand_didactic::{format_number, Trace};
use longhand_parser::{parse_terms, strip_whitespace};

use crate::failure::{FailureKind, SolveFailure};

pub const NO_REAL_SOLUTIONS: &str =
    "This equation has no real solutions (the answers would be imaginary numbers)";

/// `a`, `b`, `c` of `ax² + bx + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadraticCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticCoefficients {
    /// Sum like terms by degree.
    pub fn from_terms<'a>(terms: impl IntoIterator<Item = &'a Term>) -> Self {
        let mut coeffs = Self::default();
        for term in terms {
            match term.degree {
                2 => coeffs.a += term.coeff,
                1 => coeffs.b += term.coeff,
                _ => coeffs.c += term.coeff,
            }
        }
        coeffs
    }
}

/// The discriminant `b² - 4ac`.
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Both roots `((-b + √d) / 2a, (-b - √d) / 2a)` for a non-negative `d`.
pub fn roots_from_discriminant(a: f64, b: f64, d: f64) -> (f64, f64) {
    let root = d.sqrt();
    ((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
}

/// Solve `equation` (e.g. `"x^2 - 5x + 6 = 0"`), showing the work in `trace`.
pub fn solve_quadratic_into(
    equation: &str,
    trace: &mut Trace,
) -> Result<(f64, f64), SolveFailure> {
    tracing::debug!(target: "solve", equation, "quadratic_start");
    trace.work("[START] Solving quadratic equation", equation);

    let cleaned = strip_whitespace(equation).replace('²', "^2");
    trace.work("Making equation easier to read", cleaned.as_str());

    let Some(side) = cleaned.strip_suffix("=0") else {
        return Err(SolveFailure::error(
            FailureKind::InvalidInput,
            "Quadratic equation must be in standard form (ax² + bx + c = 0)",
        ));
    };

    let terms = parse_terms(side)?;
    if terms.is_empty() {
        return Err(SolveFailure::error(
            FailureKind::InvalidInput,
            "Invalid quadratic equation format",
        ));
    }

    for term in &terms {
        trace.record(
            format!("Found {}", term.kind_label()),
            format!("Term: {}", term.text),
            format!("Coefficient: {}", format_number(term.coeff)),
        );
    }

    let QuadraticCoefficients { a, b, c } = QuadraticCoefficients::from_terms(&terms);
    if a == 0.0 {
        return Err(SolveFailure::error(
            FailureKind::NotQuadratic,
            "This is not a quadratic equation (coefficient of x² is 0)",
        ));
    }

    trace.record(
        "Found the important numbers",
        format!("From: {}", side),
        format!(
            "a={}, b={}, c={}",
            format_number(a),
            format_number(b),
            format_number(c)
        ),
    );

    let d = discriminant(a, b, c);
    trace.record(
        "Calculating discriminant",
        format!(
            "b² - 4ac = {}² - 4({})({})",
            format_number(b),
            format_number(a),
            format_number(c)
        ),
        format_number(d),
    );

    if d < 0.0 {
        tracing::debug!(target: "solve", discriminant = d, "quadratic_no_real_roots");
        return Err(SolveFailure::new(
            FailureKind::NoRealSolutions,
            NO_REAL_SOLUTIONS,
        ));
    }

    let (x1, x2) = roots_from_discriminant(a, b, d);
    trace.record(
        "Using the quadratic formula",
        format!(
            "x = (-({}) ± √{}) / (2 × {})",
            format_number(b),
            format_number(d),
            format_number(a)
        ),
        format!("x₁ = {}, x₂ = {}", format_number(x1), format_number(x2)),
    );
    tracing::debug!(target: "solve", x1, x2, "quadratic_complete");
    Ok((x1, x2))
}
