//! Constraints.

use std::fmt;

use trellis_core::{Relation, Strength};

use crate::expression::Expression;

/// Handle to a constraint registered with a [`Solver`](crate::Solver).
///
/// Two structurally identical constraints added twice get distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId(pub(crate) usize);

impl ConstraintId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A linear constraint `expression <relation> 0` with a strength.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub expression: Expression,
    pub relation: Relation,
    pub strength: Strength,
}

impl Constraint {
    /// Create a new constraint.
    pub fn new(expression: Expression, relation: Relation, strength: Strength) -> Self {
        Self {
            expression,
            relation,
            strength,
        }
    }

    /// Build `lhs <relation> rhs`, normalized to `lhs - rhs <relation> 0`.
    pub fn from_sides(
        lhs: impl Into<Expression>,
        relation: Relation,
        rhs: impl Into<Expression>,
        strength: Strength,
    ) -> Self {
        Self::new(lhs.into().minus(rhs), relation, strength)
    }

    /// `lhs == rhs`
    pub fn equal(
        lhs: impl Into<Expression>,
        rhs: impl Into<Expression>,
        strength: Strength,
    ) -> Self {
        Self::from_sides(lhs, Relation::Eq, rhs, strength)
    }

    /// `lhs <= rhs`
    pub fn less_eq(
        lhs: impl Into<Expression>,
        rhs: impl Into<Expression>,
        strength: Strength,
    ) -> Self {
        Self::from_sides(lhs, Relation::LessEq, rhs, strength)
    }

    /// `lhs >= rhs`
    pub fn greater_eq(
        lhs: impl Into<Expression>,
        rhs: impl Into<Expression>,
        strength: Strength,
    ) -> Self {
        Self::from_sides(lhs, Relation::GreaterEq, rhs, strength)
    }

    /// Same constraint with another strength.
    pub fn with_strength(mut self, strength: Strength) -> Self {
        self.strength = strength;
        self
    }
}
