use num_bigint::BigUint;

/// Column-arithmetic operation recognized in a two-operand problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
}

impl Operator {
    /// Every supported operator, in detection order.
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mul];

    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
        }
    }

    /// Verb used when narrating a column step ("Adding units: ...").
    pub const fn verb(self) -> &'static str {
        match self {
            Operator::Add => "Adding",
            Operator::Sub => "Subtracting",
            Operator::Mul => "Multiplying",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parsed two-operand arithmetic problem.
///
/// Operands are non-negative: a leading `-` is always read as the
/// subtraction operator, never as a sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticProblem {
    pub lhs: BigUint,
    pub rhs: BigUint,
    pub op: Operator,
}

impl std::fmt::Display for ArithmeticProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

/// The two sides of an equation, whitespace already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationSides {
    pub left: String,
    pub right: String,
}
