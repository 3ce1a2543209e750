//! Expression trees and the ordered set of variables they reference.

use std::fmt;

use crate::token::OpKind;

/// A boolean expression tree.
///
/// Each node exclusively owns its children, so the structure is strictly
/// tree-shaped: no sharing, no cycles. Built once by the parser and
/// read-only afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Var(String),
    Not(Box<Expr>),
    Binary {
        op: OpKind,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn not(operand: Self) -> Self {
        Expr::Not(Box::new(operand))
    }

    /// Builds a binary node.
    ///
    /// # Panics
    ///
    /// Panics if `op` is not a binary operator.
    pub fn binary(op: OpKind, lhs: Self, rhs: Self) -> Self {
        assert!(op.is_binary(), "{:?} is not a binary operator", op);
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::binary(OpKind::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::binary(OpKind::Or, lhs, rhs)
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::binary(OpKind::Xor, lhs, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::binary(OpKind::Implies, lhs, rhs)
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::binary(OpKind::Iff, lhs, rhs)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Not(operand) => write!(f, "!{}", operand),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

/// Ordered set of distinct variable names.
///
/// The order is first occurrence in a left-to-right scan of the expression
/// text; it fixes both the column order of the truth table and the
/// bit-assignment order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct VarSet {
    names: Vec<String>,
}

impl VarSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` unless already present; returns its index either way.
    pub fn insert(&mut self, name: &str) -> usize {
        match self.index_of(name) {
            Some(index) => index,
            None => {
                self.names.push(name.to_string());
                self.names.len() - 1
            }
        }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for VarSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vars = VarSet::new();
        for name in iter {
            vars.insert(&name.into());
        }
        vars
    }
}
