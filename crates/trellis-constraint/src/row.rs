//! Sparse tableau rows.

use std::collections::BTreeMap;

use crate::symbol::Symbol;

/// Tolerance for floating-point comparisons against zero.
pub const EPSILON: f64 = 1.0e-8;

/// Near-zero check for floating point values.
pub(crate) fn near_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// A row in the simplex tableau: `basic = constant + Σ(coefficient * symbol)`.
///
/// Cells whose coefficient cancels to near zero are pruned as soon as they
/// appear. The same type serves as the objective function.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Row {
    pub constant: f64,
    cells: BTreeMap<Symbol, f64>,
}

impl Row {
    pub(crate) fn new(constant: f64) -> Self {
        Self {
            constant,
            cells: BTreeMap::new(),
        }
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        self.cells.iter().map(|(&symbol, &coeff)| (symbol, coeff))
    }

    pub(crate) fn is_constant(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every cell is a dummy symbol.
    pub(crate) fn all_dummies(&self) -> bool {
        self.cells.keys().all(|s| s.is_dummy())
    }

    /// Shift the constant, returning the new value.
    pub(crate) fn add(&mut self, value: f64) -> f64 {
        self.constant += value;
        self.constant
    }

    /// Accumulate a coefficient for a symbol.
    pub(crate) fn insert_symbol(&mut self, symbol: Symbol, coefficient: f64) {
        let entry = self.cells.entry(symbol).or_insert(0.0);
        *entry += coefficient;
        if near_zero(*entry) {
            self.cells.remove(&symbol);
        }
    }

    /// Fold another row into this one, scaled by `coefficient`.
    pub(crate) fn insert_row(&mut self, other: &Row, coefficient: f64) {
        self.constant += other.constant * coefficient;
        for (&symbol, &coeff) in &other.cells {
            self.insert_symbol(symbol, coeff * coefficient);
        }
    }

    pub(crate) fn remove(&mut self, symbol: Symbol) {
        self.cells.remove(&symbol);
    }

    /// Flip the sign of the constant and every cell.
    pub(crate) fn negate(&mut self) {
        self.constant = -self.constant;
        for coeff in self.cells.values_mut() {
            *coeff = -*coeff;
        }
    }

    /// Rewrite the row so that `symbol` becomes its implicit subject.
    ///
    /// Given `a*x + b*y + c = 0`, solving for `x` yields `x = -b/a*y - c/a`.
    /// The symbol must be present in the row.
    pub(crate) fn solve_for(&mut self, symbol: Symbol) {
        let coeff = self.cells.remove(&symbol).unwrap_or(1.0);
        let multiplier = -1.0 / coeff;
        self.constant *= multiplier;
        for c in self.cells.values_mut() {
            *c *= multiplier;
        }
    }

    /// Solve `lhs = row` for `rhs`, the pivot step.
    pub(crate) fn solve_for_ex(&mut self, lhs: Symbol, rhs: Symbol) {
        self.insert_symbol(lhs, -1.0);
        self.solve_for(rhs);
    }

    pub(crate) fn coefficient_for(&self, symbol: Symbol) -> f64 {
        self.cells.get(&symbol).copied().unwrap_or(0.0)
    }

    /// Replace `symbol` with an already-solved row wherever it appears.
    pub(crate) fn substitute(&mut self, symbol: Symbol, row: &Row) {
        if let Some(coeff) = self.cells.remove(&symbol) {
            self.insert_row(row, coeff);
        }
    }

    /// The first non-dummy cell with a negative coefficient.
    pub(crate) fn entering_symbol(&self) -> Symbol {
        self.cells
            .iter()
            .find(|&(s, &c)| !s.is_dummy() && c < 0.0)
            .map(|(&s, _)| s)
            .unwrap_or(Symbol::INVALID)
    }

    /// The first slack or error symbol in the row.
    pub(crate) fn any_pivotable_symbol(&self) -> Symbol {
        self.cells
            .keys()
            .copied()
            .find(|s| s.is_pivotable())
            .unwrap_or(Symbol::INVALID)
    }
}
