//! # Rowsplit Graphs
//!
//! Split comparison charts for rowing records.
//!
//! The axis parameters are pure functions of the record set:
//! [`compute_bounds`] picks y-axis limits on 5-second boundaries and
//! [`compute_ticks`] lays major/minor gridlines on fixed intervals.
//! [`plot_splits`] assembles everything into a [`ChartHandle`], which renders
//! through plotters when saved.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bounds;
pub mod chart;
pub mod labels;
pub mod palette;
pub mod ticks;

pub use bounds::*;
pub use chart::*;
pub use labels::*;
pub use palette::*;
pub use ticks::*;
