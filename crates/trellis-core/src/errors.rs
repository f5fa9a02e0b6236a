//! Error types for the Trellis solver.

use thiserror::Error;

/// Errors raised by solver operations.
///
/// Every variant is fatal to the operation that produced it; the tableau is
/// left in the consistent state it had before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("Unsatisfiable required constraint")]
    UnsatisfiableConstraint,

    #[error("The constraint is not in the solver")]
    UnknownConstraint,

    #[error("The objective is unbounded")]
    ObjectiveUnbounded,

    #[error("Dual optimize failed")]
    DualOptimizeFailed,

    #[error("Internal solver error: {0}")]
    InternalError(&'static str),

    #[error("Edit variables cannot have required strength")]
    InvalidVariableStrength,

    #[error("The variable is already registered as an edit variable")]
    DuplicateVariable,

    #[error("The variable is not registered as an edit variable")]
    UnboundVariable,

    #[error("Unknown variable handle")]
    UnknownVariable,
}

/// Errors while loading a solver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;
