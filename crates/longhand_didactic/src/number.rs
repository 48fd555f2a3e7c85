/// Format a float for shown work.
///
/// Whole values keep one decimal place (`2.0`, `-5.0`) so a
/// learner can tell a computed float from an integer operand; everything
/// else uses the shortest representation that round-trips.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
