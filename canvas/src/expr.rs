//! Two-operand vector expressions over the named vectors.
//!
//! The grammar is fixed: `<name><op><name>` where a name is `A` or `B` (either
//! case) and the operator is `+` or `-`. Whitespace anywhere is ignored. Any
//! other input has no result, which callers treat the same as an empty
//! expression.

#[cfg(test)]
#[path = "expr_test.rs"]
mod expr_test;

use std::fmt;

use serde::Serialize;

use crate::doc::{VectorName, VectorSet};
use crate::vector::Vector2;

/// Binary operator between two named vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Op {
    Add,
    Sub,
}

impl Op {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            _ => None,
        }
    }

    #[must_use]
    pub fn apply(self, lhs: Vector2, rhs: Vector2) -> Vector2 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
        }
    }
}

/// A parsed `<name><op><name>` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expression {
    pub lhs: VectorName,
    pub op: Op,
    pub rhs: VectorName,
}

impl Expression {
    /// Parse `text`, or `None` if it is not exactly one name, one operator, one name.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars().filter(|c| !c.is_whitespace());
        let lhs = VectorName::from_char(chars.next()?)?;
        let op = Op::from_char(chars.next()?)?;
        let rhs = VectorName::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self { lhs, op, rhs })
    }

    /// Apply the operator to the current values of both operands.
    #[must_use]
    pub fn evaluate(&self, set: &VectorSet) -> Vector2 {
        self.op.apply(set.get(self.lhs), set.get(self.rhs))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.op {
            Op::Add => '+',
            Op::Sub => '-',
        };
        write!(f, "{} {op} {}", self.lhs, self.rhs)
    }
}

/// Parse and evaluate in one step.
#[must_use]
pub fn evaluate_expression(text: &str, set: &VectorSet) -> Option<Vector2> {
    Expression::parse(text).map(|expr| expr.evaluate(set))
}
