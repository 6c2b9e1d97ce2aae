//! # Rowsplit
//!
//! Command-line front end: reads practice tables from workbooks or CSV
//! exports, builds performance records and draws split comparison charts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;
pub mod input;

pub use app::*;
pub use error::*;
pub use input::*;
