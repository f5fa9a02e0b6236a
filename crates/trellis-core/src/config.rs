//! Solver configuration.
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```
//! use trellis_core::{SolverConfig, Strength};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     assertions = true
//!     edit_strength = "medium"
//! "#).unwrap();
//!
//! assert!(config.assertions);
//! assert_eq!(config.edit_strength, Strength::MEDIUM);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::Strength;

/// Solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Verify the feasibility and optimality invariants after every public
    /// operation.
    #[serde(default)]
    pub assertions: bool,

    /// Strength given to slot variables created by the solver.
    #[serde(default = "default_edit_strength")]
    pub edit_strength: Strength,
}

fn default_edit_strength() -> Strength {
    Strength::STRONG
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            assertions: false,
            edit_strength: default_edit_strength(),
        }
    }
}

impl SolverConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Enable or disable invariant assertions.
    pub fn with_assertions(mut self, assertions: bool) -> Self {
        self.assertions = assertions;
        self
    }

    /// Set the strength used for slot variables.
    pub fn with_edit_strength(mut self, strength: Strength) -> Self {
        self.edit_strength = strength;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.edit_strength.is_required() {
            return Err(ConfigError::Invalid(
                "edit_strength must be weaker than required".to_string(),
            ));
        }
        Ok(())
    }
}
