/// The single variable name equations may use.
pub const VARIABLE: char = 'x';

/// One signed monomial `coeff·x^degree` found on a side of an equation.
///
/// `text` keeps the source slice the term came from so the trace can
/// quote it back to the learner.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coeff: f64,
    pub degree: u8,
    pub text: String,
}

impl Term {
    /// Human label for the term kind, as used in step descriptions.
    pub fn kind_label(&self) -> &'static str {
        match self.degree {
            0 => "number",
            1 => "x term",
            _ => "x² term",
        }
    }
}
