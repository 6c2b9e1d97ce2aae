//! # Rowsplit Records
//!
//! Turns practice-table rows into per-athlete performance records.
//!
//! A [`Table`] of [`Cell`]s is read through a [`ColumnLayout`](rowsplit_common::ColumnLayout)
//! into a [`RecordSet`] keyed by athlete (or by date, for one athlete's
//! history). Times are normalized to elapsed seconds and optionally weight
//! adjusted.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod cell;
pub mod filter;
pub mod handicap;
pub mod record;
pub mod weight;

pub use builder::*;
pub use cell::*;
pub use filter::*;
pub use handicap::*;
pub use record::*;
pub use weight::*;
