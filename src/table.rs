//! Enumeration of all variable assignments and the resulting table rows.

use log::debug;
use thiserror::Error;

use crate::eval::{evaluate, EvalError};
use crate::expr::{Expr, VarSet};

/// Default cap on distinct variables; 2^20 rows is already a practical
/// ceiling for a printed table.
pub const MAX_VARIABLES: usize = 20;

// Row indices are u64, so no cap above 63 bits is representable.
const HARD_MAX_VARIABLES: usize = 63;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TableError {
    #[error("expression references {count} variables, more than the maximum of {max}")]
    TooManyVariables { count: usize, max: usize },
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// One mapping of 0/1 values to every variable, derived from a row index.
///
/// The index's bits are the per-variable values, most-significant bit first:
/// for variables `A,B`, index 0 is `(0,0)`, 1 is `(0,1)`, 2 is `(1,0)` and
/// 3 is `(1,1)`.
#[derive(Debug, Copy, Clone)]
pub struct Assignment<'a> {
    vars: &'a VarSet,
    index: u64,
}

impl<'a> Assignment<'a> {
    pub fn new(vars: &'a VarSet, index: u64) -> Self {
        Self { vars, index }
    }

    /// The value assigned to `name`, or `None` if the variable is unknown.
    pub fn value(&self, name: &str) -> Option<bool> {
        let i = self.vars.index_of(name)?;
        let shift = self.vars.len() - 1 - i;
        Some((self.index >> shift) & 1 == 1)
    }

    /// Per-variable values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        let n = self.vars.len();
        (0..n).map(move |i| (self.index >> (n - 1 - i)) & 1 == 1)
    }
}

/// One line of the truth table: the assignment's values in declaration
/// order, plus the expression's result under that assignment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TableRow {
    pub values: Vec<bool>,
    pub result: bool,
}

/// Builds the complete truth table for an expression.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    max_vars: usize,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            max_vars: MAX_VARIABLES,
        }
    }

    pub fn with_max_vars(max_vars: usize) -> Self {
        Self {
            max_vars: max_vars.min(HARD_MAX_VARIABLES),
        }
    }

    /// Enumerates all `2^n` assignments in increasing index order and
    /// evaluates `expr` under each. The cap is checked before any
    /// allocation, so an oversized variable set fails fast.
    pub fn build(&self, expr: &Expr, vars: &VarSet) -> Result<Vec<TableRow>, TableError> {
        let n = vars.len();
        if n > self.max_vars {
            return Err(TableError::TooManyVariables {
                count: n,
                max: self.max_vars,
            });
        }

        let row_count = 1u64 << n;
        debug!("building table: {} variables, {} rows", n, row_count);

        let mut rows = Vec::with_capacity(row_count as usize);
        for index in 0..row_count {
            let assignment = Assignment::new(vars, index);
            let result = evaluate(expr, &assignment)?;
            rows.push(TableRow {
                values: assignment.values().collect(),
                result,
            });
        }
        Ok(rows)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the truth table with the default variable cap.
pub fn build_table(expr: &Expr, vars: &VarSet) -> Result<Vec<TableRow>, TableError> {
    TableBuilder::new().build(expr, vars)
}
