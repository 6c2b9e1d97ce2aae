//! Age handicaps for masters rowing.
//!
//! Uses the US Rowing handicap model: a quadratic penalty around age 27,
//! steepened past 80, scaled linearly with distance. Coefficients depend on
//! the number of oars in the boat.

use rowsplit_common::{Result, RowsplitError};
use serde::{Deserialize, Serialize};

/// Oars in the boat, which selects the handicap coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OarCount {
    /// Single scull, or any two-oar boat.
    #[default]
    Two,
    /// Four oars.
    Four,
    /// Eight oars.
    Eight,
}

impl OarCount {
    /// Quadratic coefficient.
    const fn k(self) -> f64 {
        match self {
            Self::Two => 0.025,
            Self::Four => 0.0216,
            Self::Eight => 0.020,
        }
    }

    /// Extra seconds per year of age above 80.
    const fn past_eighty(self) -> f64 {
        match self {
            Self::Two => 2.7,
            Self::Four => 2.3,
            Self::Eight => 2.0,
        }
    }
}

impl TryFrom<u8> for OarCount {
    type Error = RowsplitError;

    fn try_from(oars: u8) -> Result<Self> {
        match oars {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            other => Err(RowsplitError::invalid_parameter(
                "oars",
                format!("{other} oars has no handicap table, expected 2, 4 or 8"),
            )),
        }
    }
}

/// Handicap in seconds for an age over a distance in meters.
///
/// Fractional ages are floored.
pub fn age_handicap(age: f64, distance: f64, oars: OarCount) -> Result<f64> {
    if !(age.is_finite() && age >= 0.0) {
        return Err(RowsplitError::invalid_parameter(
            "age",
            format!("{age} is not a valid age"),
        ));
    }
    if !(distance.is_finite() && distance > 0.0) {
        return Err(RowsplitError::invalid_parameter(
            "distance",
            format!("{distance} is not a positive distance"),
        ));
    }

    let age = age.floor();
    let mut handicap = (age - 27.0).powi(2) * oars.k();
    if age > 80.0 {
        handicap += oars.past_eighty() * (age - 80.0);
    }
    Ok(handicap * distance / 1000.0)
}
