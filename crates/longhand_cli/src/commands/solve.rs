//! One-shot solve subcommands.

use clap::Args;
use serde_json::{Map, Value};

use longhand_solver::{solve_arithmetic, solve_geometry, solve_linear, solve_quadratic};

use crate::format::Report;

#[derive(Args, Debug)]
pub struct ArithArgs {
    /// Problem such as "29+57", "1000-1" or "12*34"
    #[arg(allow_hyphen_values = true)]
    pub problem: String,
}

#[derive(Args, Debug)]
pub struct EquationArgs {
    /// Equation in x such as "2x + 3 = 7" or "-x^2 + 4 = 0"
    #[arg(allow_hyphen_values = true)]
    pub equation: String,
}

#[derive(Args, Debug)]
pub struct GeometryArgs {
    /// Problem type: triangle_area, circle_area
    pub kind: String,

    /// Named values as key=value, e.g. base=6 height=4
    #[arg(value_parser = parse_key_value)]
    pub values: Vec<(String, Value)>,
}

impl GeometryArgs {
    pub fn value_map(&self) -> Map<String, Value> {
        self.values.iter().cloned().collect()
    }
}

/// Split `key=value`. The value is read as JSON when it parses as JSON and
/// kept as a plain string otherwise, so `base=abc` reaches the solver's
/// numeric check.
pub fn parse_key_value(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }
    let value = value.trim();
    let value = serde_json::from_str::<Value>(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

pub fn arith(args: &ArithArgs) -> Report {
    tracing::debug!(target: "cli", problem = %args.problem, "arith");
    Report::arithmetic(&args.problem, solve_arithmetic(&args.problem))
}

pub fn linear(args: &EquationArgs) -> Report {
    tracing::debug!(target: "cli", equation = %args.equation, "linear");
    Report::linear(&args.equation, solve_linear(&args.equation))
}

pub fn quadratic(args: &EquationArgs) -> Report {
    tracing::debug!(target: "cli", equation = %args.equation, "quadratic");
    Report::quadratic(&args.equation, solve_quadratic(&args.equation))
}

pub fn geometry(args: &GeometryArgs) -> Report {
    let values = args.value_map();
    tracing::debug!(target: "cli", kind = %args.kind, count = values.len(), "geometry");
    Report::geometry(&args.kind, solve_geometry(&args.kind, &values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_value_numbers_and_strings() {
        assert_eq!(parse_key_value("base=6").unwrap(), ("base".into(), json!(6)));
        assert_eq!(parse_key_value("r = 2.5").unwrap(), ("r".into(), json!(2.5)));
        assert_eq!(
            parse_key_value("base=abc").unwrap(),
            ("base".into(), json!("abc"))
        );
    }

    #[test]
    fn test_key_value_rejects_malformed() {
        assert!(parse_key_value("base").is_err());
        assert!(parse_key_value("=6").is_err());
    }

    #[test]
    fn test_geometry_uses_named_values() {
        let args = GeometryArgs {
            kind: "triangle_area".into(),
            values: vec![("base".into(), json!(6)), ("height".into(), json!(4))],
        };
        let report = geometry(&args);
        assert_eq!(report.final_answer_line(), ">>> Final Answer: Area = 12.0");
    }
}
