//! Cassowary constraint solver implementation.
//!
//! This is an implementation of the Cassowary linear constraint solving algorithm,
//! as described in "The Cassowary Linear Arithmetic Constraint Solving Algorithm"
//! by Greg J. Badros and Alan Borning.
//!
//! The solver keeps a simplex tableau that is feasible and optimal after every
//! public operation. Constraints are added and removed by incremental pivots;
//! edit variables are moved with the dual simplex method, so each edit only
//! touches the rows it actually affects.

use std::collections::{BTreeMap, HashMap};

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace, warn};
use trellis_core::{Relation, Result, SolverConfig, SolverError, Strength};

use crate::constraint::{Constraint, ConstraintId};
use crate::expression::Expression;
use crate::row::{near_zero, Row, EPSILON};
use crate::symbol::{Symbol, SymbolKind, Tag};
use crate::variable::{ConstraintVariable, Slot, Variable};

#[derive(Debug)]
struct VariableEntry<V> {
    slot: V,
    symbol: Symbol,
    /// Number of live constraint terms referencing the variable
    conditions: usize,
    /// Last value pushed to the slot
    value: f64,
}

#[derive(Debug, Clone)]
struct ConstraintInfo {
    constraint: Constraint,
    tag: Tag,
}

#[derive(Debug, Clone, Copy)]
struct EditInfo {
    constraint: ConstraintId,
    tag: Tag,
    state: f64,
}

/// The Cassowary constraint solver.
///
/// The solver owns its variables: each one is a caller-supplied
/// [`ConstraintVariable`] that is pushed its new value at the end of every
/// operation that changed it.
#[derive(Debug)]
pub struct Solver<V = Slot> {
    config: SolverConfig,
    /// Counter for generating unique symbol IDs
    symbol_counter: u64,
    /// Counter for constraint IDs
    constraint_counter: usize,
    variables: Vec<VariableEntry<V>>,
    var_for_symbol: HashMap<Symbol, Variable>,
    constraints: IndexMap<ConstraintId, ConstraintInfo>,
    edits: IndexMap<Variable, EditInfo>,
    /// The tableau rows, keyed by their basic symbol
    rows: BTreeMap<Symbol, Row>,
    /// The objective function row
    objective: Row,
    /// Rows that may have gone infeasible since the last dual pass
    infeasible_rows: Vec<Symbol>,
    /// External symbols whose value may have changed in this operation
    invalidated: IndexSet<Symbol>,
}

impl<V: ConstraintVariable> Default for Solver<V> {
    fn default() -> Self {
        Self::from_config(SolverConfig::default())
    }
}

impl Solver {
    /// Create a new solver over [`Slot`] variables.
    pub fn new() -> Self {
        Self::from_config(SolverConfig::default())
    }

    /// Create a new solver over [`Slot`] variables with a configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self::from_config(config)
    }

    /// Create a named slot variable using the configured edit strength.
    pub fn new_slot(&mut self, name: impl Into<String>) -> Variable {
        let strength = self.config.edit_strength;
        self.new_variable(Slot::with_strength(name, strength))
    }
}

impl<V: ConstraintVariable> Solver<V> {
    /// Create a solver for any variable type.
    pub fn from_config(config: SolverConfig) -> Self {
        Self {
            config,
            symbol_counter: 1,
            constraint_counter: 0,
            variables: Vec::new(),
            var_for_symbol: HashMap::new(),
            constraints: IndexMap::new(),
            edits: IndexMap::new(),
            rows: BTreeMap::new(),
            objective: Row::default(),
            infeasible_rows: Vec::new(),
            invalidated: IndexSet::new(),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Register a new variable.
    pub fn new_variable(&mut self, slot: V) -> Variable {
        let variable = Variable(self.variables.len());
        let symbol = self.new_symbol(SymbolKind::External);
        self.variables.push(VariableEntry {
            slot,
            symbol,
            conditions: 0,
            value: 0.0,
        });
        self.var_for_symbol.insert(symbol, variable);
        variable
    }

    pub fn variable(&self, variable: Variable) -> Option<&V> {
        self.variables.get(variable.0).map(|entry| &entry.slot)
    }

    pub fn variable_mut(&mut self, variable: Variable) -> Option<&mut V> {
        self.variables.get_mut(variable.0).map(|entry| &mut entry.slot)
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of live constraint terms referencing a variable.
    pub fn references(&self, variable: Variable) -> usize {
        self.variables
            .get(variable.0)
            .map_or(0, |entry| entry.conditions)
    }

    /// Get the current solved value of a variable.
    pub fn value(&self, variable: Variable) -> f64 {
        self.variables
            .get(variable.0)
            .and_then(|entry| self.rows.get(&entry.symbol))
            .map_or(0.0, |row| row.constant)
    }

    /// Add a constraint to the solver.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId> {
        self.insert_constraint(constraint).map_err(|err| {
            warn!(event = "add_constraint_failed", error = %err);
            err
        })
    }

    /// Remove a constraint from the solver.
    pub fn remove_constraint(&mut self, id: ConstraintId) -> Result<()> {
        self.delete_constraint(id).map_err(|err| {
            warn!(event = "remove_constraint_failed", constraint = %id, error = %err);
            err
        })
    }

    pub fn has_constraint(&self, id: ConstraintId) -> bool {
        self.constraints.contains_key(&id)
    }

    pub fn constraint(&self, id: ConstraintId) -> Option<&Constraint> {
        self.constraints.get(&id).map(|info| &info.constraint)
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Register a variable as an edit variable.
    ///
    /// The variable's own strength is used for the edit constraint and must
    /// be weaker than required. The edit starts at 0.
    pub fn add_constraint_variable(&mut self, variable: Variable) -> Result<()> {
        let entry = self
            .variables
            .get(variable.0)
            .ok_or(SolverError::UnknownVariable)?;
        if self.edits.contains_key(&variable) {
            return Err(SolverError::DuplicateVariable);
        }
        let strength = entry.slot.strength();
        if strength.is_required() {
            return Err(SolverError::InvalidVariableStrength);
        }

        let expression = Expression::from_variable(variable);
        let constraint = Constraint::new(expression, Relation::Eq, strength);
        let id = self.add_constraint(constraint)?;
        let tag = self
            .constraints
            .get(&id)
            .map(|info| info.tag)
            .ok_or(SolverError::InternalError("edit constraint vanished"))?;
        self.edits.insert(
            variable,
            EditInfo {
                constraint: id,
                tag,
                state: 0.0,
            },
        );
        debug!(event = "edit_variable_added", variable = variable.0, strength = %strength);
        Ok(())
    }

    /// Unregister an edit variable.
    pub fn remove_constraint_variable(&mut self, variable: Variable) -> Result<()> {
        let info = self
            .edits
            .shift_remove(&variable)
            .ok_or(SolverError::UnboundVariable)?;
        self.remove_constraint(info.constraint)?;
        debug!(event = "edit_variable_removed", variable = variable.0);
        Ok(())
    }

    pub fn has_constraint_variable(&self, variable: Variable) -> bool {
        self.edits.contains_key(&variable)
    }

    /// Push a new target value for an edit variable.
    pub fn set_constraint_variable(&mut self, variable: Variable, value: f64) -> Result<()> {
        self.suggest_value(variable, value).map_err(|err| {
            warn!(event = "edit_failed", variable = variable.0, value, error = %err);
            err
        })
    }

    /// Reset the solver to the empty starting condition.
    ///
    /// Every constraint and edit variable is dropped. Variables stay
    /// registered and are pushed back to 0; handles issued before the reset
    /// never alias constraints added after it.
    pub fn reset(&mut self) {
        let basic: Vec<Symbol> = self
            .rows
            .keys()
            .copied()
            .filter(|s| s.is_external())
            .collect();
        self.invalidated.extend(basic);
        self.rows.clear();

        let constraints = std::mem::take(&mut self.constraints);
        for (id, info) in constraints {
            self.release_variables(id, &info.constraint);
        }

        self.edits.clear();
        self.infeasible_rows.clear();
        self.objective = Row::default();
        self.update_solution();
        debug!(event = "reset", variables = self.variables.len());
    }

    /// Verify the feasibility and optimality invariants of the tableau.
    pub fn check_invariants(&self) -> Result<()> {
        let infeasible = self
            .rows
            .iter()
            .any(|(symbol, row)| symbol.is_restricted() && row.constant < -EPSILON);
        if infeasible {
            return Err(SolverError::InternalError("tableau is infeasible"));
        }

        if self.loose_dummy().is_some() {
            return Err(SolverError::InternalError("required equality is not enforced"));
        }

        let suboptimal = self
            .objective
            .cells()
            .any(|(symbol, coeff)| !symbol.is_dummy() && coeff < -EPSILON);
        if suboptimal {
            return Err(SolverError::InternalError("objective is not optimal"));
        }

        Ok(())
    }

    fn insert_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId> {
        self.check_variables(&constraint.expression)?;

        let (row, tag) = self.create_row(&constraint);
        if !self.install_constraint_row(row, tag)? {
            // The artificial pass may have moved to another vertex.
            self.optimize_objective()?;
            self.infeasible_rows.clear();
            self.update_solution();
            return Err(SolverError::UnsatisfiableConstraint);
        }

        let id = ConstraintId(self.constraint_counter);
        self.constraint_counter += 1;

        self.optimize_objective()?;
        self.infeasible_rows.clear();
        self.retain_variables(id, &constraint);

        debug!(
            event = "constraint_added",
            constraint = %id,
            relation = %constraint.relation,
            strength = %constraint.strength,
            rows = self.rows.len()
        );

        self.constraints.insert(id, ConstraintInfo { constraint, tag });
        self.update_solution();
        self.assert_invariants()?;
        Ok(id)
    }

    /// Install a constraint row built by `create_row`.
    ///
    /// Returns `false` when the row cannot be satisfied; the tableau then
    /// still describes the constraints it held before the call.
    fn install_constraint_row(&mut self, mut row: Row, tag: Tag) -> Result<bool> {
        let mut subject = choose_subject(&row, &tag);

        // A row made only of dummies is either redundant (zero constant) or
        // contradicts the required equalities already in the tableau.
        if !subject.is_valid() && row.all_dummies() {
            if !near_zero(row.constant) {
                return Ok(false);
            }
            subject = tag.marker;
        }

        if subject.is_valid() {
            row.solve_for(subject);
            self.substitute(subject, &row);
            self.install_row(subject, row);
            Ok(true)
        } else {
            self.add_with_artificial_variable(&row)
        }
    }

    /// The first basic dummy whose row no longer pins it to zero.
    fn loose_dummy(&self) -> Option<Symbol> {
        self.rows
            .iter()
            .find(|(symbol, row)| {
                symbol.is_dummy() && !(row.all_dummies() && near_zero(row.constant))
            })
            .map(|(&symbol, _)| symbol)
    }

    /// Re-pin redundant required equalities after a removal.
    ///
    /// A redundant required equality is basic on its own dummy with a row of
    /// dummies only. Pivoting a removed marker out can fold slack or external
    /// symbols into that row, which would leave the equality bounded below
    /// only. Such a row is taken out and installed again under the same tag.
    fn restore_required_equalities(&mut self) -> Result<()> {
        while let Some(marker) = self.loose_dummy() {
            let Some(mut row) = self.rows.remove(&marker) else {
                break;
            };
            // marker = row  =>  row - marker = 0
            row.insert_symbol(marker, -1.0);
            if row.constant < 0.0 {
                row.negate();
            }
            if !self.install_constraint_row(row, Tag::new(marker, Symbol::INVALID))? {
                return Err(SolverError::InternalError("required equality lost on removal"));
            }
            trace!(event = "equality_restored", marker = ?marker);
        }
        Ok(())
    }

    fn delete_constraint(&mut self, id: ConstraintId) -> Result<()> {
        let info = self
            .constraints
            .shift_remove(&id)
            .ok_or(SolverError::UnknownConstraint)?;
        self.edits.retain(|_, edit| edit.constraint != id);

        // The objective must lose the error terms before any pivot, or the
        // substitutions below would fold them back in.
        self.remove_constraint_effects(&info);

        let marker = info.tag.marker;
        if self.rows.remove(&marker).is_none() {
            let (leaving, mut row) = self
                .get_marker_leaving_row(marker)
                .ok_or(SolverError::InternalError("failed to find leaving row"))?;
            row.solve_for_ex(leaving, marker);
            self.substitute(marker, &row);
            trace!(event = "pivot", entering = ?marker, leaving = ?leaving);
            self.restore_required_equalities()?;
        }

        self.optimize_objective()?;
        self.infeasible_rows.clear();
        self.release_variables(id, &info.constraint);

        debug!(event = "constraint_removed", constraint = %id, rows = self.rows.len());

        self.update_solution();
        self.assert_invariants()
    }

    fn suggest_value(&mut self, variable: Variable, value: f64) -> Result<()> {
        let info = self
            .edits
            .get_mut(&variable)
            .ok_or(SolverError::UnboundVariable)?;
        let delta = value - info.state;
        info.state = value;
        let tag = info.tag;

        if let Some(row) = self.rows.get_mut(&tag.marker) {
            if row.add(-delta) < 0.0 {
                self.infeasible_rows.push(tag.marker);
            }
        } else if let Some(row) = self.rows.get_mut(&tag.other) {
            if row.add(delta) < 0.0 {
                self.infeasible_rows.push(tag.other);
            }
        } else {
            for (&symbol, row) in self.rows.iter_mut() {
                let coeff = row.coefficient_for(tag.marker);
                if coeff == 0.0 {
                    continue;
                }
                let constant = row.add(delta * coeff);
                if symbol.is_external() {
                    self.invalidated.insert(symbol);
                } else if constant < 0.0 {
                    self.infeasible_rows.push(symbol);
                }
            }
        }

        self.dual_optimize()?;

        debug!(event = "edit", variable = variable.0, value, delta);

        self.update_solution();
        self.assert_invariants()
    }

    fn check_variables(&self, expression: &Expression) -> Result<()> {
        let known = expression
            .terms()
            .iter()
            .all(|term| term.variable.0 < self.variables.len());
        if known {
            Ok(())
        } else {
            Err(SolverError::UnknownVariable)
        }
    }

    /// Generate a new symbol.
    fn new_symbol(&mut self, kind: SymbolKind) -> Symbol {
        let id = self.symbol_counter;
        self.symbol_counter += 1;
        Symbol::new(id, kind)
    }

    /// Create a row for a constraint.
    ///
    /// Basic variables are substituted by their rows, and the slack, error
    /// and dummy symbols the relation needs are added. The row is negated if
    /// needed so that its constant is non-negative.
    fn create_row(&mut self, constraint: &Constraint) -> (Row, Tag) {
        let expression = &constraint.expression;
        let mut row = Row::new(expression.constant);

        for term in expression.terms() {
            if near_zero(term.coefficient) {
                continue;
            }
            let symbol = self.variables[term.variable.0].symbol;
            match self.rows.get(&symbol) {
                Some(basic) => row.insert_row(basic, term.coefficient),
                None => row.insert_symbol(symbol, term.coefficient),
            }
        }

        let strength = constraint.strength;
        let tag = match constraint.relation {
            Relation::LessEq | Relation::GreaterEq => {
                let coeff = if constraint.relation == Relation::LessEq {
                    1.0
                } else {
                    -1.0
                };
                let slack = self.new_symbol(SymbolKind::Slack);
                row.insert_symbol(slack, coeff);
                if strength.is_required() {
                    Tag::new(slack, Symbol::INVALID)
                } else {
                    let error = self.new_symbol(SymbolKind::Error);
                    row.insert_symbol(error, -coeff);
                    self.objective.insert_symbol(error, strength.value());
                    Tag::new(slack, error)
                }
            }
            Relation::Eq => {
                if strength.is_required() {
                    let dummy = self.new_symbol(SymbolKind::Dummy);
                    row.insert_symbol(dummy, 1.0);
                    Tag::new(dummy, Symbol::INVALID)
                } else {
                    // expression = errplus - errminus
                    let errplus = self.new_symbol(SymbolKind::Error);
                    let errminus = self.new_symbol(SymbolKind::Error);
                    row.insert_symbol(errplus, -1.0);
                    row.insert_symbol(errminus, 1.0);
                    self.objective.insert_symbol(errplus, strength.value());
                    self.objective.insert_symbol(errminus, strength.value());
                    Tag::new(errplus, errminus)
                }
            }
        };

        if row.constant < 0.0 {
            row.negate();
        }

        (row, tag)
    }

    /// Add a row to the tableau through a temporary artificial variable.
    ///
    /// Returns `false` when the row cannot be satisfied; the tableau then
    /// still describes the constraints it held before the call.
    fn add_with_artificial_variable(&mut self, row: &Row) -> Result<bool> {
        let art = self.new_symbol(SymbolKind::Slack);
        self.rows.insert(art, row.clone());

        // Minimizing the artificial row drives it to zero if the constraint
        // is satisfiable.
        let mut artificial = row.clone();
        if let Err(err) = self.optimize(&mut artificial) {
            self.rows.remove(&art);
            self.strip_symbol(art);
            return Err(err);
        }
        let success = near_zero(artificial.constant);

        // A failed artificial is always basic and appears in no other row.
        if let Some(mut art_row) = self.rows.remove(&art) {
            if !success || art_row.is_constant() {
                return Ok(success);
            }
            let entering = art_row.any_pivotable_symbol();
            if !entering.is_valid() {
                return Ok(false);
            }
            art_row.solve_for_ex(art, entering);
            self.substitute(entering, &art_row);
            self.install_row(entering, art_row);
            trace!(event = "pivot", entering = ?entering, leaving = ?art);
        }

        self.strip_symbol(art);
        Ok(success)
    }

    /// Remove a parametric symbol from every row and the objective.
    fn strip_symbol(&mut self, symbol: Symbol) {
        for row in self.rows.values_mut() {
            row.remove(symbol);
        }
        self.objective.remove(symbol);
    }

    fn install_row(&mut self, symbol: Symbol, row: Row) {
        if symbol.is_external() {
            self.invalidated.insert(symbol);
        }
        self.rows.insert(symbol, row);
    }

    fn take_row(&mut self, symbol: Symbol) -> Option<Row> {
        let row = self.rows.remove(&symbol)?;
        if symbol.is_external() {
            self.invalidated.insert(symbol);
        }
        Some(row)
    }

    /// Substitute a symbol throughout the tableau.
    fn substitute(&mut self, symbol: Symbol, row: &Row) {
        for (&basic, other) in self.rows.iter_mut() {
            let before = other.constant;
            other.substitute(symbol, row);
            if basic.is_external() {
                if other.constant != before {
                    self.invalidated.insert(basic);
                }
            } else if other.constant < 0.0 {
                self.infeasible_rows.push(basic);
            }
        }
        self.objective.substitute(symbol, row);
    }

    fn optimize_objective(&mut self) -> Result<()> {
        let mut objective = std::mem::take(&mut self.objective);
        let result = self.optimize(&mut objective);
        self.objective = objective;
        result
    }

    /// Optimize the objective function using the primal simplex method.
    fn optimize(&mut self, objective: &mut Row) -> Result<()> {
        loop {
            let entering = objective.entering_symbol();
            if !entering.is_valid() {
                return Ok(());
            }

            let (leaving, mut row) = self
                .get_leaving_row(entering)
                .ok_or(SolverError::ObjectiveUnbounded)?;

            row.solve_for_ex(leaving, entering);
            self.substitute(entering, &row);
            objective.substitute(entering, &row);
            self.install_row(entering, row);
            trace!(event = "pivot", entering = ?entering, leaving = ?leaving);
        }
    }

    /// Re-establish feasibility after an edit using the dual simplex method.
    fn dual_optimize(&mut self) -> Result<()> {
        while let Some(leaving) = self.infeasible_rows.pop() {
            let entering = match self.rows.get(&leaving) {
                Some(row) if row.constant < -EPSILON => self.get_dual_entering_symbol(row),
                _ => continue,
            };
            if !entering.is_valid() {
                self.infeasible_rows.clear();
                return Err(SolverError::DualOptimizeFailed);
            }
            let Some(mut row) = self.rows.remove(&leaving) else {
                continue;
            };
            row.solve_for_ex(leaving, entering);
            self.substitute(entering, &row);
            self.install_row(entering, row);
            trace!(event = "dual_pivot", entering = ?entering, leaving = ?leaving);
        }
        Ok(())
    }

    /// The entering symbol for a dual pivot: the positive, non-dummy cell
    /// minimizing `objective_coeff / cell_coeff`.
    fn get_dual_entering_symbol(&self, row: &Row) -> Symbol {
        let mut entering = Symbol::INVALID;
        let mut ratio = f64::INFINITY;
        for (symbol, coeff) in row.cells() {
            if coeff > 0.0 && !symbol.is_dummy() {
                let r = self.objective.coefficient_for(symbol) / coeff;
                if r < ratio {
                    ratio = r;
                    entering = symbol;
                }
            }
        }
        entering
    }

    /// Find the row to leave the basis (minimum ratio test).
    fn get_leaving_row(&mut self, entering: Symbol) -> Option<(Symbol, Row)> {
        let mut ratio = f64::INFINITY;
        let mut leaving = None;

        for (&symbol, row) in &self.rows {
            if symbol.is_external() {
                continue;
            }
            let coeff = row.coefficient_for(entering);
            if coeff < 0.0 {
                let r = -row.constant / coeff;
                if r < ratio {
                    ratio = r;
                    leaving = Some(symbol);
                }
            }
        }

        let symbol = leaving?;
        self.rows.remove(&symbol).map(|row| (symbol, row))
    }

    /// Find the row to pivot a non-basic marker into.
    ///
    /// Precedence:
    /// 1. a restricted row with a negative marker coefficient and the
    ///    smallest `-constant / coefficient`
    /// 2. a restricted row with the smallest `constant / coefficient`
    /// 3. the last unrestricted row containing the marker
    fn get_marker_leaving_row(&mut self, marker: Symbol) -> Option<(Symbol, Row)> {
        let mut r1 = f64::INFINITY;
        let mut r2 = f64::INFINITY;
        let mut first = None;
        let mut second = None;
        let mut third = None;

        for (&symbol, row) in &self.rows {
            let coeff = row.coefficient_for(marker);
            if coeff == 0.0 {
                continue;
            }
            if symbol.is_external() {
                third = Some(symbol);
            } else if coeff < 0.0 {
                let r = -row.constant / coeff;
                if r < r1 {
                    r1 = r;
                    first = Some(symbol);
                }
            } else {
                let r = row.constant / coeff;
                if r < r2 {
                    r2 = r;
                    second = Some(symbol);
                }
            }
        }

        let symbol = first.or(second).or(third)?;
        self.take_row(symbol).map(|row| (symbol, row))
    }

    /// Remove the objective contributions of a constraint's error symbols.
    fn remove_constraint_effects(&mut self, info: &ConstraintInfo) {
        let strength = info.constraint.strength;
        if info.tag.marker.is_error() {
            self.remove_marker_effects(info.tag.marker, strength);
        }
        if info.tag.other.is_error() {
            self.remove_marker_effects(info.tag.other, strength);
        }
    }

    fn remove_marker_effects(&mut self, marker: Symbol, strength: Strength) {
        match self.rows.get(&marker) {
            Some(row) => self.objective.insert_row(row, -strength.value()),
            None => self.objective.insert_symbol(marker, -strength.value()),
        }
    }

    fn retain_variables(&mut self, id: ConstraintId, constraint: &Constraint) {
        for term in constraint.expression.terms() {
            let entry = &mut self.variables[term.variable.0];
            entry.conditions += 1;
            entry.slot.add_constraint_condition(id);
        }
    }

    fn release_variables(&mut self, id: ConstraintId, constraint: &Constraint) {
        for term in constraint.expression.terms() {
            let entry = &mut self.variables[term.variable.0];
            entry.conditions = entry.conditions.saturating_sub(1);
            entry.slot.remove_constraint_condition(id);
        }
    }

    /// Push new values to every variable invalidated by this operation.
    fn update_solution(&mut self) {
        let invalidated = std::mem::take(&mut self.invalidated);
        let mut updated = 0usize;

        for symbol in invalidated {
            let Some(&variable) = self.var_for_symbol.get(&symbol) else {
                continue;
            };
            let value = self.rows.get(&symbol).map_or(0.0, |row| row.constant);
            let entry = &mut self.variables[variable.0];
            if entry.value != value {
                entry.value = value;
                entry.slot.update_constraint_solution(value);
                updated += 1;
            }
        }

        if updated > 0 {
            trace!(event = "solution_updated", variables = updated);
        }
    }

    fn assert_invariants(&self) -> Result<()> {
        if self.config.assertions {
            self.check_invariants()
        } else {
            Ok(())
        }
    }
}

/// Choose the subject for a new row.
///
/// An external symbol is preferred. Otherwise the marker or the paired
/// error symbol may be used if it is pivotable and has a negative
/// coefficient.
fn choose_subject(row: &Row, tag: &Tag) -> Symbol {
    if let Some((symbol, _)) = row.cells().find(|(s, _)| s.is_external()) {
        return symbol;
    }
    if tag.marker.is_pivotable() && row.coefficient_for(tag.marker) < 0.0 {
        return tag.marker;
    }
    if tag.other.is_pivotable() && row.coefficient_for(tag.other) < 0.0 {
        return tag.other;
    }
    Symbol::INVALID
}
