use longhand_didactic::Trace;
use num_bigint::BigUint;

use super::digits::{column_label, decimal_digits, from_digits, zero_pad};
use crate::error::ValidationError;

/// Column subtraction with borrowing. The minuend must not be smaller than
/// the subtrahend; the engine never produces negative results.
pub fn subtract(
    minuend: &BigUint,
    subtrahend: &BigUint,
    trace: &mut Trace,
) -> Result<BigUint, ValidationError> {
    if subtrahend > minuend {
        tracing::debug!(
            target: "arithmetic",
            %minuend,
            %subtrahend,
            "subtraction_rejected"
        );
        return Err(ValidationError::SubtrahendExceedsMinuend {
            minuend: minuend.clone(),
            subtrahend: subtrahend.clone(),
        });
    }

    let a = decimal_digits(minuend);
    let width = a.len();
    let b = zero_pad(decimal_digits(subtrahend), width);

    let mut borrow = false;
    let mut written = Vec::with_capacity(width);

    for col in (0..width).rev() {
        let original = i16::from(a[col]);
        let lower = i16::from(b[col]);
        let mut upper = original;

        if borrow {
            upper -= 1;
            trace.note(format!("Applied borrow: {} becomes {}", original, upper));
        }

        borrow = upper < lower;
        if borrow {
            upper += 10;
            trace.note(format!("Need to borrow: {} becomes {}", upper - 10, upper));
        }

        let diff = upper - lower;
        trace.record(
            format!("Subtracting {}", column_label(width - 1 - col)),
            format!("{} - {} = {}", upper, lower, diff),
            format!("write {}", diff),
        );
        // upper >= lower here, and upper <= 19, so diff is a single digit.
        written.push(diff as u8);
    }

    written.reverse();
    let difference = from_digits(&written);
    trace.record(
        "Final result",
        format!("{} - {}", minuend, subtrahend),
        difference.to_string(),
    );
    tracing::trace!(target: "arithmetic", columns = width, "subtraction_complete");
    Ok(difference)
}
