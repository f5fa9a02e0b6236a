//! Core types, errors, and configuration for the Trellis constraint solver.
//!
//! This crate provides the foundational types shared by the solver crates:
//! - Constraint strengths and relations
//! - Error types
//! - Solver configuration

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
