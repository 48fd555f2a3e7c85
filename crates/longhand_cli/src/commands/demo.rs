//! The walk-through printed when no subcommand is given.

use anyhow::Result;
use serde_json::{json, Map};

use longhand_solver::{solve_arithmetic, solve_geometry, solve_linear, solve_quadratic};

use crate::config::{LonghandConfig, OutputFormat};
use crate::format::{finish, Report};

/// Every demo problem, in order, with its heading.
pub fn demo_reports() -> Vec<(String, Report)> {
    let mut reports = Vec::new();

    for problem in ["29+57", "123+456", "999+1", "abc+def"] {
        reports.push((
            format!("Arithmetic: {}", problem),
            Report::arithmetic(problem, solve_arithmetic(problem)),
        ));
    }

    let linear = "2x + 3 = 7";
    reports.push((
        format!("Solving Linear Equation: {}", linear),
        Report::linear(linear, solve_linear(linear)),
    ));

    let quadratic = "1x^2-5x+6=0";
    reports.push((
        "Solving Quadratic Equation: x² - 5x + 6 = 0".to_string(),
        Report::quadratic(quadratic, solve_quadratic(quadratic)),
    ));

    let mut values = Map::new();
    values.insert("base".to_string(), json!(6));
    values.insert("height".to_string(), json!(4));
    reports.push((
        "Calculating Triangle Area".to_string(),
        Report::geometry("triangle_area", solve_geometry("triangle_area", &values)),
    ));

    reports
}

pub fn render(config: &LonghandConfig) -> Result<String> {
    let reports = demo_reports();
    if config.format == OutputFormat::Json {
        let all: Vec<_> = reports.iter().map(|(_, report)| report.to_json()).collect();
        let mut out = serde_json::to_string_pretty(&all)?;
        out.push('\n');
        return Ok(finish(out, config));
    }

    let mut out = String::from("Welcome to the Longhand demo!\n");
    for (i, (title, report)) in reports.iter().enumerate() {
        let heading = format!("[Example {}] {}", i + 1, title);
        out.push('\n');
        out.push_str(&heading);
        out.push('\n');
        out.push_str(&"-".repeat(heading.chars().count()));
        out.push_str("\n\n");
        out.push_str(&report.render_text(config));
    }
    Ok(finish(out, config))
}
