//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a macro for declaring machine
//! definitions with minimal boilerplate. Every definition is validated when
//! it is built.

pub mod machine;
pub mod macros;

pub use crate::core::ConfigurationError;
pub use machine::MachineBuilder;
