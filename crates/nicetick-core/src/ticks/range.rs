//! Range normalization
//!
//! Every generator computes as if the axis runs bottom-to-top or
//! left-to-right. [`DataRange`] swaps reversed endpoints into ascending order
//! and records the swap so the result can be flipped back afterwards.

use super::{AxisError, AxisResult};

/// An ascending data range with a record of whether it was swapped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRange {
    /// Smaller endpoint
    pub low: f64,
    /// Larger endpoint
    pub high: f64,
    /// `true` if the caller supplied the endpoints in descending order
    pub reversed: bool,
}

impl DataRange {
    /// Normalize two raw endpoints into an ascending range
    ///
    /// Fails with [`AxisError::DegenerateRange`] when the endpoints are equal
    /// and with [`AxisError::InvalidRange`] when either is NaN or infinite.
    pub fn new(xmin0: f64, xmax0: f64) -> AxisResult<Self> {
        if !xmin0.is_finite() || !xmax0.is_finite() {
            return Err(AxisError::InvalidRange {
                low: xmin0,
                high: xmax0,
            });
        }

        if xmin0 == xmax0 {
            return Err(AxisError::DegenerateRange { value: xmin0 });
        }

        Ok(Self::ordered(xmin0, xmax0))
    }

    /// Order two endpoints without validating them
    pub(crate) fn ordered(a: f64, b: f64) -> Self {
        if a > b {
            Self {
                low: b,
                high: a,
                reversed: true,
            }
        } else {
            Self {
                low: a,
                high: b,
                reversed: false,
            }
        }
    }

    /// Width of the range (`high - low`)
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Endpoints in the order the caller originally supplied them
    pub fn endpoints(&self) -> (f64, f64) {
        if self.reversed {
            (self.high, self.low)
        } else {
            (self.low, self.high)
        }
    }
}

/// Normalize raw endpoints; shorthand for [`DataRange::new`]
pub fn normalize(xmin0: f64, xmax0: f64) -> AxisResult<DataRange> {
    DataRange::new(xmin0, xmax0)
}
