//! Trellis Constraint - Incremental linear constraint solving.
//!
//! This crate provides:
//! - Linear expressions and constraints over solver-owned variables
//! - An incremental Cassowary solver with required and weighted preferences
//! - Edit variables for interactive, per-frame value updates
//!
//! # Example
//!
//! ```
//! use trellis_constraint::{Constraint, Solver, Strength};
//!
//! let mut solver = Solver::new();
//! let x = solver.new_slot("x");
//! let y = solver.new_slot("y");
//!
//! solver.add_constraint(Constraint::equal(x + y, 10.0, Strength::REQUIRED)).unwrap();
//! solver.add_constraint(Constraint::equal(x, 2.0, Strength::WEAK)).unwrap();
//!
//! assert!((solver.value(y) - 8.0).abs() < 1e-6);
//! ```

mod constraint;
mod expression;
mod row;
mod scope;
mod solver;
mod symbol;
mod variable;

pub use constraint::{Constraint, ConstraintId};
pub use expression::{Expression, Term};
pub use row::EPSILON;
pub use scope::ConstraintScope;
pub use solver::Solver;
pub use variable::{ConstraintVariable, Slot, Variable};

pub use trellis_core::{ConfigError, Relation, SolverConfig, SolverError, Strength};
