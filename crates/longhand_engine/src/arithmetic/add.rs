use longhand_didactic::Trace;
use num_bigint::BigUint;
use num_integer::Integer;

use super::digits::{column_label, decimal_digits, from_digits, zero_pad};

/// Column addition, right to left, carrying into the next column.
pub fn add(lhs: &BigUint, rhs: &BigUint, trace: &mut Trace) -> BigUint {
    let a = decimal_digits(lhs);
    let b = decimal_digits(rhs);
    let width = a.len().max(b.len());
    let a = zero_pad(a, width);
    let b = zero_pad(b, width);

    let mut carry = 0u8;
    let mut written = Vec::with_capacity(width + 1);

    for col in (0..width).rev() {
        let carry_in = carry;
        let sum = a[col] + b[col] + carry_in;
        let (carry_out, digit) = sum.div_rem(&10);
        carry = carry_out;

        trace.record(
            format!("Adding {}", column_label(width - 1 - col)),
            format!("{} + {} + carry({}) = {}", a[col], b[col], carry_in, sum),
            format!("write {}", digit),
        );
        if carry != 0 {
            trace.note(format!("Set carry to {}", carry));
        }
        written.push(digit);
    }

    if carry != 0 {
        written.push(carry);
        trace.note(format!("Final carry: {}", carry));
    }

    written.reverse();
    let total = from_digits(&written);
    trace.record(
        "Final result",
        format!("{} + {}", lhs, rhs),
        total.to_string(),
    );
    tracing::trace!(target: "arithmetic", columns = width, "addition_complete");
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: u64, b: u64) -> (BigUint, Trace) {
        let mut trace = Trace::new();
        let total = add(&BigUint::from(a), &BigUint::from(b), &mut trace);
        (total, trace)
    }

    #[test]
    fn test_add_without_carry() {
        let (total, trace) = run(123, 456);
        assert_eq!(total, BigUint::from(579u32));
        assert!(trace.iter().all(|s| !s.description.starts_with("Set carry")));
    }

    #[test]
    fn test_add_carries_into_new_digit() {
        let (total, trace) = run(999, 1);
        assert_eq!(total, BigUint::from(1000u32));

        let units = &trace.steps()[0];
        assert_eq!(units.description, "Adding units");
        assert_eq!(units.work, "9 + 1 + carry(0) = 10");
        assert_eq!(units.result, "write 0");
        assert_eq!(trace.steps()[1].description, "Set carry to 1");

        let tens = &trace.steps()[2];
        assert_eq!(tens.description, "Adding position 2");
        assert_eq!(tens.work, "9 + 0 + carry(1) = 10");

        assert!(trace.iter().any(|s| s.description == "Final carry: 1"));
        let last = trace.last().unwrap();
        assert_eq!((last.description.as_str(), last.result.as_str()), ("Final result", "1000"));
    }

    #[test]
    fn test_add_pads_shorter_operand() {
        let (total, trace) = run(1, 9999);
        assert_eq!(total, BigUint::from(10000u32));
        let columns = trace
            .iter()
            .filter(|s| s.description.starts_with("Adding"))
            .count();
        assert_eq!(columns, 4);
    }

    #[test]
    fn test_add_zeros() {
        let (total, trace) = run(0, 0);
        assert_eq!(total, BigUint::from(0u8));
        assert_eq!(trace.steps()[0].work, "0 + 0 + carry(0) = 0");
    }
}
