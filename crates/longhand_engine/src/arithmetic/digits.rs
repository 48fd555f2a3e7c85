//! Decimal digit helpers shared by the column algorithms.

use num_bigint::BigUint;

/// Most-significant-first decimal digits of `n` (`0` is `[0]`).
pub(crate) fn decimal_digits(n: &BigUint) -> Vec<u8> {
    n.to_str_radix(10).bytes().map(|b| b - b'0').collect()
}

/// Left-pad `digits` with zeros up to `width`.
pub(crate) fn zero_pad(mut digits: Vec<u8>, width: usize) -> Vec<u8> {
    if digits.len() < width {
        let mut padded = vec![0; width - digits.len()];
        padded.append(&mut digits);
        padded
    } else {
        digits
    }
}

/// Read most-significant-first digits back into a number. Leading zeros
/// are fine.
pub(crate) fn from_digits(digits: &[u8]) -> BigUint {
    BigUint::from_radix_be(digits, 10).unwrap_or_default()
}

/// Column name counted from the right: `units`, `position 2`, ...
pub(crate) fn column_label(from_right: usize) -> String {
    if from_right == 0 {
        "units".to_string()
    } else {
        format!("position {}", from_right + 1)
    }
}
