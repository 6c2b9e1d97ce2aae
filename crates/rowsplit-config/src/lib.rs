//! # Rowsplit Config
//!
//! Type-safe configuration management for rowsplit.
//!
//! This crate provides the configuration schema, its defaults, loading from
//! YAML or TOML files with environment overrides, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
