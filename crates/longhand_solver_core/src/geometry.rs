//! Area formulas with validated, named measurements.

use longhand_didactic::{format_number, Trace};
use serde_json::{Map, Value};

use crate::failure::{FailureKind, SolveFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    TriangleArea,
    CircleArea,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 2] = [GeometryKind::TriangleArea, GeometryKind::CircleArea];

    pub const fn as_str(self) -> &'static str {
        match self {
            GeometryKind::TriangleArea => "triangle_area",
            GeometryKind::CircleArea => "circle_area",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Measurements the formula needs, in the order they are shown.
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            GeometryKind::TriangleArea => &["base", "height"],
            GeometryKind::CircleArea => &["radius"],
        }
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn supported_list() -> String {
    GeometryKind::ALL
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Evaluate the `kind` formula over `values`, showing the work in `trace`.
///
/// Every required field must be present, numeric, and strictly positive;
/// otherwise the failure names the violated condition.
pub fn solve_geometry_into(
    kind: &str,
    values: &Map<String, Value>,
    trace: &mut Trace,
) -> Result<f64, SolveFailure> {
    tracing::debug!(target: "solve", kind, "geometry_start");
    trace.work(
        "[START] Solving geometry problem",
        format!("Type: {}, Values: {}", kind, Value::Object(values.clone())),
    );

    let Some(geometry) = GeometryKind::from_name(kind) else {
        return Err(SolveFailure::error(
            FailureKind::UnsupportedProblem,
            format!(
                "Unsupported geometry problem type '{}'. Supported types: {}",
                kind,
                supported_list()
            ),
        ));
    };

    let area = match geometry {
        GeometryKind::TriangleArea => {
            let [base, height] = measurements::<2>(geometry, values)?;
            let area = 0.5 * base * height;
            trace.record(
                "Calculating triangle area",
                format!(
                    "Area = ½ × base × height = ½ × {} × {}",
                    values["base"], values["height"]
                ),
                format_number(area),
            );
            area
        }
        GeometryKind::CircleArea => {
            let [radius] = measurements::<1>(geometry, values)?;
            let area = std::f64::consts::PI * radius * radius;
            trace.record(
                "Calculating circle area",
                format!("Area = πr² = π × {}²", values["radius"]),
                format_number(area),
            );
            area
        }
    };

    tracing::debug!(target: "solve", %geometry, area, "geometry_complete");
    Ok(area)
}

/// Validate and read the `N` required fields of `kind`: presence first, then
/// numeric type, then positivity, each across all fields.
fn measurements<const N: usize>(
    kind: GeometryKind,
    values: &Map<String, Value>,
) -> Result<[f64; N], SolveFailure> {
    let fields = kind.required_fields();
    debug_assert_eq!(fields.len(), N);

    if !fields.iter().all(|f| values.contains_key(*f)) {
        return Err(violation(kind, FailureKind::MissingValue, Check::Present));
    }

    let mut out = [0.0; N];
    for (slot, field) in out.iter_mut().zip(fields) {
        *slot = values[*field]
            .as_f64()
            .ok_or_else(|| violation(kind, FailureKind::InvalidValue, Check::Numeric))?;
    }

    if out.iter().any(|v| *v <= 0.0) {
        return Err(violation(kind, FailureKind::InvalidValue, Check::Positive));
    }
    Ok(out)
}

#[derive(Clone, Copy)]
enum Check {
    Present,
    Numeric,
    Positive,
}

fn violation(kind: GeometryKind, failure: FailureKind, check: Check) -> SolveFailure {
    let detail = match (kind, check) {
        (GeometryKind::TriangleArea, Check::Present) => {
            "Triangle area calculation requires both 'base' and 'height' values"
        }
        (GeometryKind::TriangleArea, Check::Numeric) => "Base and height must be numbers",
        (GeometryKind::TriangleArea, Check::Positive) => "Base and height must be positive numbers",
        (GeometryKind::CircleArea, Check::Present) => {
            "Circle area calculation requires a 'radius' value"
        }
        (GeometryKind::CircleArea, Check::Numeric) => "Radius must be a number",
        (GeometryKind::CircleArea, Check::Positive) => "Radius must be a positive number",
    };
    SolveFailure::error(failure, detail)
}
