use longhand_didactic::Trace;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use super::digits::{decimal_digits, from_digits};

/// Long multiplication: one partial product per digit of `rhs`, shifted by
/// its place value, then summed.
pub fn multiply(lhs: &BigUint, rhs: &BigUint, trace: &mut Trace) -> BigUint {
    let top = decimal_digits(lhs);
    let bottom = decimal_digits(rhs);
    let mut partials = Vec::with_capacity(bottom.len());

    for (shift, &d2) in bottom.iter().rev().enumerate() {
        trace.note(format!("Multiplying by {} at position {}", d2, shift));

        let mut carry = 0u8;
        let mut written = Vec::with_capacity(top.len() + 1 + shift);

        for &d1 in top.iter().rev() {
            let carry_in = carry;
            let product = d1 * d2 + carry_in;
            let (carry_out, digit) = product.div_rem(&10);
            carry = carry_out;

            trace.record(
                format!("Multiply {} by {}", d1, d2),
                format!("{} × {} + carry({}) = {}", d1, d2, carry_in, product),
                format!("write {}, carry {}", digit, carry),
            );
            written.push(digit);
        }

        if carry != 0 {
            written.push(carry);
            trace.note(format!("Final carry: {}", carry));
        }

        written.reverse();
        written.extend(std::iter::repeat(0).take(shift));
        let partial = from_digits(&written);

        let place_value = format!("{}{}", d2, "0".repeat(shift));
        trace.record(
            "Partial result",
            format!("{} × {}", lhs, place_value),
            partial.to_string(),
        );
        partials.push(partial);
    }

    let mut total = BigUint::zero();
    for partial in &partials {
        let before = total.clone();
        total += partial;
        trace.record(
            "Adding partial result",
            format!("{} + {}", before, partial),
            total.to_string(),
        );
    }

    trace.record(
        "Final result",
        format!("{} × {}", lhs, rhs),
        total.to_string(),
    );
    tracing::trace!(
        target: "arithmetic",
        partial_products = partials.len(),
        "multiplication_complete"
    );
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: u64, b: u64) -> (BigUint, Trace) {
        let mut trace = Trace::new();
        let total = multiply(&BigUint::from(a), &BigUint::from(b), &mut trace);
        (total, trace)
    }

    #[test]
    fn test_multiply_two_digit_operands() {
        let (total, trace) = run(12, 34);
        assert_eq!(total, BigUint::from(408u32));

        let partials: Vec<_> = trace
            .iter()
            .filter(|s| s.description == "Partial result")
            .map(|s| (s.work.as_str(), s.result.as_str()))
            .collect();
        assert_eq!(partials, [("12 × 4", "48"), ("12 × 30", "360")]);
    }

    #[test]
    fn test_multiply_records_each_digit_with_carry() {
        let (total, trace) = run(999, 9);
        assert_eq!(total, BigUint::from(8991u32));

        let digit_steps: Vec<_> = trace
            .iter()
            .filter(|s| s.description == "Multiply 9 by 9")
            .map(|s| s.work.as_str())
            .collect();
        assert_eq!(
            digit_steps,
            [
                "9 × 9 + carry(0) = 81",
                "9 × 9 + carry(8) = 89",
                "9 × 9 + carry(8) = 89"
            ]
        );
        assert!(trace.iter().any(|s| s.description == "Final carry: 8"));
    }

    #[test]
    fn test_multiply_three_by_three() {
        let (total, trace) = run(999, 999);
        assert_eq!(total, BigUint::from(998001u32));
        assert_eq!(
            trace
                .iter()
                .filter(|s| s.description.starts_with("Multiplying by"))
                .count(),
            3
        );
    }

    #[test]
    fn test_multiply_by_zero_either_side() {
        assert_eq!(run(0, 1000).0, BigUint::from(0u8));
        assert_eq!(run(1000, 0).0, BigUint::from(0u8));
        assert_eq!(run(120, 3).0, BigUint::from(360u32));
    }
}
