mod add;
mod digits;
mod mul;
mod sub;

pub use add::add;
pub use mul::multiply;
pub use sub::subtract;

use longhand_ast::{ArithmeticProblem, Operator};
use longhand_didactic::Trace;
use num_bigint::BigUint;

use crate::error::ArithmeticError;

/// Work `problem` column by column, appending every step to `trace`.
pub fn compute(problem: &ArithmeticProblem, trace: &mut Trace) -> Result<BigUint, ArithmeticError> {
    match problem.op {
        Operator::Add => Ok(add(&problem.lhs, &problem.rhs, trace)),
        Operator::Sub => subtract(&problem.lhs, &problem.rhs, trace).map_err(ArithmeticError::from),
        Operator::Mul => Ok(multiply(&problem.lhs, &problem.rhs, trace)),
    }
}
