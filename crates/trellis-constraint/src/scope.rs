//! The constraint-editing surface shared by solvers and their wrappers.

use trellis_core::{Relation, Result, Strength};

use crate::constraint::{Constraint, ConstraintId};
use crate::expression::Expression;
use crate::solver::Solver;
use crate::variable::{ConstraintVariable, Variable};

/// Anything constraints can be added to and edited through.
pub trait ConstraintScope {
    fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId>;

    fn remove_constraint(&mut self, id: ConstraintId) -> Result<()>;

    fn add_constraint_variable(&mut self, variable: Variable) -> Result<()>;

    fn remove_constraint_variable(&mut self, variable: Variable) -> Result<()>;

    fn set_constraint_variable(&mut self, variable: Variable, value: f64) -> Result<()>;

    /// Build `lhs <relation> rhs` without adding it.
    fn constraint(
        &self,
        lhs: impl Into<Expression>,
        relation: Relation,
        rhs: impl Into<Expression>,
        strength: Strength,
    ) -> Constraint
    where
        Self: Sized,
    {
        Constraint::from_sides(lhs, relation, rhs, strength)
    }
}

impl<V: ConstraintVariable> ConstraintScope for Solver<V> {
    fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId> {
        Solver::add_constraint(self, constraint)
    }

    fn remove_constraint(&mut self, id: ConstraintId) -> Result<()> {
        Solver::remove_constraint(self, id)
    }

    fn add_constraint_variable(&mut self, variable: Variable) -> Result<()> {
        Solver::add_constraint_variable(self, variable)
    }

    fn remove_constraint_variable(&mut self, variable: Variable) -> Result<()> {
        Solver::remove_constraint_variable(self, variable)
    }

    fn set_constraint_variable(&mut self, variable: Variable, value: f64) -> Result<()> {
        Solver::set_constraint_variable(self, variable, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin_width(
        scope: &mut impl ConstraintScope,
        width: Variable,
        value: f64,
    ) -> Result<ConstraintId> {
        let c = scope.constraint(width, Relation::Eq, value, Strength::REQUIRED);
        scope.add_constraint(c)
    }

    #[test]
    fn test_scope_drives_solver() {
        let mut solver = Solver::new();
        let width = solver.new_slot("width");
        let half = solver.new_slot("half");

        let c = ConstraintScope::constraint(
            &solver,
            half * 2.0,
            Relation::Eq,
            width,
            Strength::REQUIRED,
        );
        ConstraintScope::add_constraint(&mut solver, c).unwrap();
        let id = pin_width(&mut solver, width, 80.0).unwrap();

        assert!((solver.value(half) - 40.0).abs() < 1e-6);

        ConstraintScope::remove_constraint(&mut solver, id).unwrap();
        ConstraintScope::add_constraint_variable(&mut solver, width).unwrap();
        ConstraintScope::set_constraint_variable(&mut solver, width, 10.0).unwrap();
        assert!((solver.value(half) - 5.0).abs() < 1e-6);
        ConstraintScope::remove_constraint_variable(&mut solver, width).unwrap();
    }
}
