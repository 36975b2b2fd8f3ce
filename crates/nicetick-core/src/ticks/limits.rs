//! Nice axis limits
//!
//! Rounds a data range outwards to whole multiples of a power-of-ten
//! increment chosen from the data's own order of magnitude.

use super::{AxisError, AxisResult};

/// Rounded bounds and increment for a linear axis
///
/// `low_limit` and `high_limit` are whole multiples of `increment` and
/// enclose the range they were computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiceLimits {
    /// Largest multiple of `increment` not above the data minimum
    pub low_limit: f64,
    /// Smallest multiple of `increment` not below the data maximum
    pub high_limit: f64,
    /// Tick spacing, always positive
    pub increment: f64,
}

/// Compute nice limits for the ascending range `[low, high]`
///
/// `nearness` picks the increment relative to the dominant decade of the
/// endpoints: a non-negative value divides it by `10^nearness`, a negative
/// value scales it to `|nearness|` percent.
///
/// # Errors
///
/// - [`AxisError::InvalidRange`] unless `low < high` and both are finite
/// - [`AxisError::InvalidNearness`] if the increment underflows to zero or
///   overflows to infinity
pub fn find_limits(low: f64, high: f64, nearness: i32) -> AxisResult<NiceLimits> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(AxisError::InvalidRange { low, high });
    }

    // A zero endpoint has no decade of its own and borrows the other one
    let (p_low, p_high) = match (decade_of(low), decade_of(high)) {
        (Some(p_low), Some(p_high)) => (p_low, p_high),
        (None, Some(p_high)) => (p_high, p_high),
        (Some(p_low), None) => (p_low, p_low),
        (None, None) => return Err(AxisError::InvalidRange { low, high }),
    };

    let dominant = pow10(p_low.max(p_high));
    let increment = if nearness < 0 {
        dominant * f64::from(nearness.unsigned_abs()) / 100.0
    } else {
        dominant / pow10(nearness)
    };

    if !(increment > 0.0 && increment.is_finite()) {
        return Err(AxisError::InvalidNearness { nearness });
    }

    Ok(NiceLimits {
        low_limit: largest_multiple_at_most(low, increment),
        high_limit: smallest_multiple_at_least(high, increment),
        increment,
    })
}

/// `10^exponent`, dividing for negative exponents so that values such as
/// `0.1` and `0.001` come out correctly rounded
pub(crate) fn pow10(exponent: i32) -> f64 {
    if exponent >= 0 {
        10f64.powi(exponent)
    } else if exponent >= -f64::MAX_10_EXP {
        1.0 / 10f64.powi(-exponent)
    } else {
        // Subnormal territory: the reciprocal of an overflowed power is zero
        10f64.powf(f64::from(exponent))
    }
}

/// `floor(log10(value))`, corrected for rounding in `log10`
///
/// `value` must be positive and finite.
pub(crate) fn decade_floor(value: f64) -> i32 {
    let mut exponent = value.log10().floor() as i32;
    if pow10(exponent) > value {
        exponent -= 1;
    } else if pow10(exponent + 1) <= value {
        exponent += 1;
    }
    exponent
}

/// Decade of `|value|`, or `None` for zero
fn decade_of(value: f64) -> Option<i32> {
    if value == 0.0 {
        None
    } else {
        Some(decade_floor(value.abs()))
    }
}

/// Largest `k * increment <= value` for integral `k`
///
/// The multiple index is tracked as a whole number and the limit recomputed
/// from it, so repeated steps never accumulate rounding error.
fn largest_multiple_at_most(value: f64, increment: f64) -> f64 {
    let mut k = (value / increment).floor();
    while k * increment > value && k - 1.0 != k {
        k -= 1.0;
    }
    while (k + 1.0) * increment <= value && k + 1.0 != k {
        k += 1.0;
    }
    k * increment
}

/// Smallest `k * increment >= value` for integral `k`
fn smallest_multiple_at_least(value: f64, increment: f64) -> f64 {
    let mut k = (value / increment).ceil();
    while k * increment < value && k + 1.0 != k {
        k += 1.0;
    }
    while (k - 1.0) * increment >= value && k - 1.0 != k {
        k -= 1.0;
    }
    k * increment
}
