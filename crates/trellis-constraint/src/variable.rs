//! Variables and the contract between the solver and the values it drives.

use trellis_core::Strength;

use crate::constraint::ConstraintId;

/// Handle to a variable owned by a [`Solver`](crate::Solver).
///
/// Handles are indices into the solver's variable storage and are only
/// meaningful for the solver that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(pub(crate) usize);

impl Variable {
    /// The index of this variable within its solver.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A value slot driven by the solver.
///
/// Implementors receive reference-counting notifications as constraints
/// mentioning them come and go, and are pushed their solved value whenever
/// it changes.
pub trait ConstraintVariable {
    /// Strength used when this variable is registered as an edit variable.
    fn strength(&self) -> Strength {
        Strength::STRONG
    }

    /// A constraint referencing this variable was added.
    fn add_constraint_condition(&mut self, _constraint: ConstraintId) {}

    /// A constraint referencing this variable was removed.
    fn remove_constraint_condition(&mut self, _constraint: ConstraintId) {}

    /// The solved value of this variable changed.
    fn update_constraint_solution(&mut self, value: f64);
}

impl<T: ConstraintVariable + ?Sized> ConstraintVariable for Box<T> {
    fn strength(&self) -> Strength {
        (**self).strength()
    }

    fn add_constraint_condition(&mut self, constraint: ConstraintId) {
        (**self).add_constraint_condition(constraint)
    }

    fn remove_constraint_condition(&mut self, constraint: ConstraintId) {
        (**self).remove_constraint_condition(constraint)
    }

    fn update_constraint_solution(&mut self, value: f64) {
        (**self).update_constraint_solution(value)
    }
}

/// A plain named value slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    name: String,
    strength: Strength,
    value: f64,
    conditions: usize,
    revision: u64,
}

impl Slot {
    /// Create a slot with the default edit strength.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_strength(name, Strength::STRONG)
    }

    /// Create a slot with a custom edit strength.
    pub fn with_strength(name: impl Into<String>, strength: Strength) -> Self {
        Self {
            name: name.into(),
            strength,
            value: 0.0,
            conditions: 0,
            revision: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The last value pushed by the solver.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of live constraints referencing this slot.
    pub fn conditions(&self) -> usize {
        self.conditions
    }

    /// Number of solution updates received.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl ConstraintVariable for Slot {
    fn strength(&self) -> Strength {
        self.strength
    }

    fn add_constraint_condition(&mut self, _constraint: ConstraintId) {
        self.conditions += 1;
    }

    fn remove_constraint_condition(&mut self, _constraint: ConstraintId) {
        self.conditions = self.conditions.saturating_sub(1);
    }

    fn update_constraint_solution(&mut self, value: f64) {
        self.value = value;
        self.revision += 1;
    }
}
