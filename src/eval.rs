//! Evaluation of expression trees under a variable assignment.

use thiserror::Error;

use crate::expr::Expr;
use crate::table::Assignment;
use crate::token::OpKind;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum EvalError {
    /// The assignment has no value for a variable the expression references.
    ///
    /// The table builder always supplies a complete assignment, so this can
    /// only surface when the evaluator is called directly.
    #[error("no value for variable '{0}' in assignment")]
    MissingVariable(String),
}

/// Evaluates `expr` under `assignment` with standard two-valued semantics.
///
/// Implication is material (`a -> b` = `!a || b`) and `a <-> b` holds when
/// both sides agree.
pub fn evaluate(expr: &Expr, assignment: &Assignment) -> Result<bool, EvalError> {
    match expr {
        Expr::Var(name) => assignment
            .value(name)
            .ok_or_else(|| EvalError::MissingVariable(name.clone())),
        Expr::Not(operand) => Ok(!evaluate(operand, assignment)?),
        Expr::Binary { op, lhs, rhs } => {
            let a = evaluate(lhs, assignment)?;
            let b = evaluate(rhs, assignment)?;
            let value = match op {
                OpKind::And => a && b,
                OpKind::Or => a || b,
                OpKind::Xor => a ^ b,
                OpKind::Implies => !a || b,
                OpKind::Iff => a == b,
                // The parser only builds binary nodes from binary operators.
                OpKind::Not => unreachable!("Not is unary"),
            };
            Ok(value)
        }
    }
}
