//! Linear expressions over solver variables.

use std::ops::{Add, Div, Mul, Neg, Sub};

use smallvec::SmallVec;

use crate::variable::Variable;

/// A single `coefficient * variable` term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub variable: Variable,
    pub coefficient: f64,
}

impl Term {
    pub fn new(variable: Variable, coefficient: f64) -> Self {
        Self {
            variable,
            coefficient,
        }
    }
}

/// A linear expression in the form: constant + Σ(coefficient * variable)
///
/// Expressions are values: every combinator returns a new expression and
/// leaves its operands untouched. Repeated variables are allowed and are
/// folded together when the expression is turned into a tableau row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    terms: SmallVec<[Term; 4]>,
    pub constant: f64,
}

impl Expression {
    pub fn new(terms: impl IntoIterator<Item = Term>, constant: f64) -> Self {
        Self {
            terms: terms.into_iter().collect(),
            constant,
        }
    }

    /// Create a constant expression.
    pub fn from_constant(value: f64) -> Self {
        Self {
            terms: SmallVec::new(),
            constant: value,
        }
    }

    /// Create an expression from a single variable.
    pub fn from_variable(variable: Variable) -> Self {
        Self::from_term(Term::new(variable, 1.0))
    }

    pub fn from_term(term: Term) -> Self {
        let mut terms = SmallVec::new();
        terms.push(term);
        Self {
            terms,
            constant: 0.0,
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Sum of this expression and another.
    pub fn plus(&self, other: impl Into<Expression>) -> Expression {
        let other = other.into();
        let mut terms = self.terms.clone();
        terms.extend_from_slice(&other.terms);
        Expression {
            terms,
            constant: self.constant + other.constant,
        }
    }

    /// This expression minus another.
    pub fn minus(&self, other: impl Into<Expression>) -> Expression {
        self.plus(other.into().negative())
    }

    /// Scale every term and the constant.
    pub fn times(&self, scalar: f64) -> Expression {
        Expression {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(t.variable, t.coefficient * scalar))
                .collect(),
            constant: self.constant * scalar,
        }
    }

    pub fn divide(&self, scalar: f64) -> Expression {
        self.times(1.0 / scalar)
    }

    pub fn negative(&self) -> Expression {
        self.times(-1.0)
    }

    /// Whether the expression has no variable terms.
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::from_constant(value)
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Expression::from_variable(variable)
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Expression::from_term(term)
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Term::new(variable, 1.0)
    }
}

macro_rules! expression_ops {
    ($($ty:ty),*) => {$(
        impl<T: Into<Expression>> Add<T> for $ty {
            type Output = Expression;

            fn add(self, rhs: T) -> Expression {
                Expression::from(self).plus(rhs)
            }
        }

        impl<T: Into<Expression>> Sub<T> for $ty {
            type Output = Expression;

            fn sub(self, rhs: T) -> Expression {
                Expression::from(self).minus(rhs)
            }
        }

        impl Mul<f64> for $ty {
            type Output = Expression;

            fn mul(self, rhs: f64) -> Expression {
                Expression::from(self).times(rhs)
            }
        }

        impl Div<f64> for $ty {
            type Output = Expression;

            fn div(self, rhs: f64) -> Expression {
                Expression::from(self).divide(rhs)
            }
        }

        impl Neg for $ty {
            type Output = Expression;

            fn neg(self) -> Expression {
                Expression::from(self).negative()
            }
        }

        impl Add<$ty> for f64 {
            type Output = Expression;

            fn add(self, rhs: $ty) -> Expression {
                Expression::from(rhs).plus(self)
            }
        }

        impl Sub<$ty> for f64 {
            type Output = Expression;

            fn sub(self, rhs: $ty) -> Expression {
                Expression::from(rhs).negative().plus(self)
            }
        }

        impl Mul<$ty> for f64 {
            type Output = Expression;

            fn mul(self, rhs: $ty) -> Expression {
                Expression::from(rhs).times(self)
            }
        }
    )*};
}

expression_ops!(Expression, Term, Variable);
