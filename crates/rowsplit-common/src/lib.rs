//! # Rowsplit Common
//!
//! Shared types, utilities, and common functionality for rowsplit.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the workspace: the shared error type, clock/time conversion helpers,
//! source-format and column-layout descriptions, and logging bootstrap.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use clock::*;
pub use error::*;
pub use types::*;
