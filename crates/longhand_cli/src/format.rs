//! Text and JSON rendering of a finished solve.

use longhand_solver::{ascii, format_number, SolveFailure, Solved, Trace};
use num_bigint::BigUint;
use serde_json::{json, Value};

use crate::config::{LonghandConfig, OutputFormat};
use crate::json_types::{SolveJsonOutput, SCHEMA_VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    Arithmetic,
    Linear,
    Quadratic,
    Geometry,
}

impl ProblemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProblemKind::Arithmetic => "arithmetic",
            ProblemKind::Linear => "linear",
            ProblemKind::Quadratic => "quadratic",
            ProblemKind::Geometry => "geometry",
        }
    }

    /// Prefix on the final answer line, e.g. `x = ` for equations.
    fn answer_label(self) -> &'static str {
        match self {
            ProblemKind::Arithmetic => "",
            ProblemKind::Linear | ProblemKind::Quadratic => "x = ",
            ProblemKind::Geometry => "Area = ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Integer(BigUint),
    Value(f64),
    Roots(f64, f64),
    /// Arithmetic failure; the reason lives in the trace.
    NoAnswer,
    Failed(SolveFailure),
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        !matches!(self, Outcome::NoAnswer | Outcome::Failed(_))
    }

    fn answer_text(&self) -> String {
        match self {
            Outcome::Integer(n) => n.to_string(),
            Outcome::Value(v) => format_number(*v),
            Outcome::Roots(x1, x2) => format!("({}, {})", format_number(*x1), format_number(*x2)),
            Outcome::NoAnswer => "None".to_string(),
            Outcome::Failed(failure) => failure.to_string(),
        }
    }

    fn result_json(&self) -> Option<Value> {
        match self {
            Outcome::Integer(n) => Some(Value::String(n.to_string())),
            Outcome::Value(v) => Some(json!(v)),
            Outcome::Roots(x1, x2) => Some(json!([x1, x2])),
            Outcome::NoAnswer | Outcome::Failed(_) => None,
        }
    }
}

/// A solved problem ready to print.
#[derive(Debug, Clone)]
pub struct Report {
    pub kind: ProblemKind,
    pub input: String,
    pub outcome: Outcome,
    pub trace: Trace,
}

impl Report {
    pub fn arithmetic(input: &str, solved: Solved<Option<BigUint>>) -> Self {
        let (value, trace) = solved.into_parts();
        let outcome = value.map_or(Outcome::NoAnswer, Outcome::Integer);
        Self::new(ProblemKind::Arithmetic, input, outcome, trace)
    }

    pub fn linear(input: &str, solved: Solved<Result<f64, SolveFailure>>) -> Self {
        let (value, trace) = solved.into_parts();
        let outcome = value.map_or_else(Outcome::Failed, Outcome::Value);
        Self::new(ProblemKind::Linear, input, outcome, trace)
    }

    pub fn quadratic(input: &str, solved: Solved<Result<(f64, f64), SolveFailure>>) -> Self {
        let (value, trace) = solved.into_parts();
        let outcome = value.map_or_else(Outcome::Failed, |(x1, x2)| Outcome::Roots(x1, x2));
        Self::new(ProblemKind::Quadratic, input, outcome, trace)
    }

    pub fn geometry(input: &str, solved: Solved<Result<f64, SolveFailure>>) -> Self {
        let (value, trace) = solved.into_parts();
        let outcome = value.map_or_else(Outcome::Failed, Outcome::Value);
        Self::new(ProblemKind::Geometry, input, outcome, trace)
    }

    fn new(kind: ProblemKind, input: &str, outcome: Outcome, trace: Trace) -> Self {
        Self {
            kind,
            input: input.to_string(),
            outcome,
            trace,
        }
    }

    /// Error text for JSON output. Arithmetic failures only exist as the
    /// last logged step.
    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Failed(failure) => Some(failure.to_string()),
            Outcome::NoAnswer => self.trace.last().map(|step| step.description.clone()),
            _ => None,
        }
    }

    pub fn final_answer_line(&self) -> String {
        let label = if self.outcome.is_ok() {
            self.kind.answer_label()
        } else {
            ""
        };
        format!(">>> Final Answer: {}{}", label, self.outcome.answer_text())
    }

    pub fn render_text(&self, config: &LonghandConfig) -> String {
        let mut out = String::new();
        if config.show_steps {
            out.push_str(&self.trace.render_steps());
            out.push('\n');
        }
        if config.show_scratchpad {
            out.push_str(&self.trace.render_scratchpad());
            out.push('\n');
        }
        out.push_str(&self.final_answer_line());
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> SolveJsonOutput {
        SolveJsonOutput {
            schema_version: SCHEMA_VERSION,
            ok: self.outcome.is_ok(),
            kind: self.kind.as_str(),
            input: self.input.clone(),
            result: self.outcome.result_json(),
            error: self.error_message(),
            steps: self.trace.dump(),
        }
    }

    pub fn render(&self, config: &LonghandConfig) -> Result<String, serde_json::Error> {
        let text = match config.format {
            OutputFormat::Text => self.render_text(config),
            OutputFormat::Json => {
                let mut s = serde_json::to_string_pretty(&self.to_json())?;
                s.push('\n');
                s
            }
        };
        Ok(finish(text, config))
    }
}

/// Apply the ASCII-only setting to fully rendered output.
pub fn finish(text: String, config: &LonghandConfig) -> String {
    if config.ascii_only {
        ascii(&text)
    } else {
        text
    }
}
