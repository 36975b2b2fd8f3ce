//! Logarithmic tick generation
//!
//! Emits the multiples `1..=9` of every decade spanned by the data, closing
//! on the first power of ten at or above the maximum.

use log::debug;

use super::constants::{LOG_FLOOR, LOG_MULTIPLES_PER_DECADE};
use super::label_set::LabelSet;
use super::limits::{decade_floor, pow10};
use super::range::DataRange;
use super::{AxisError, AxisResult};

/// Generate decade ticks for a logarithmic axis between `xmin0` and `xmax0`
///
/// A non-positive minimum is clamped to [`LOG_FLOOR`]. The lowest decade is
/// the one containing the (clamped) minimum; the last tick is the smallest
/// power of ten not below the maximum, with no minor ticks past it.
///
/// # Errors
///
/// [`AxisError::InvalidRange`] when the endpoints are equal or non-finite,
/// when the larger endpoint is not positive (including both endpoints
/// negative), or when the clamped minimum is not below the maximum.
pub fn find_log_labels(xmin0: f64, xmax0: f64) -> AxisResult<LabelSet> {
    let invalid = AxisError::InvalidRange {
        low: xmin0,
        high: xmax0,
    };

    if !xmin0.is_finite() || !xmax0.is_finite() || xmin0 == xmax0 {
        return Err(invalid);
    }

    let range = DataRange::ordered(xmin0, xmax0);
    if range.high <= 0.0 {
        return Err(invalid);
    }

    let low = if range.low <= 0.0 {
        debug!("log axis minimum {} clamped to {}", range.low, LOG_FLOOR);
        LOG_FLOOR
    } else {
        range.low
    };
    if low >= range.high {
        return Err(invalid);
    }

    let p_low = decade_floor(low);
    let mut p_high = decade_floor(range.high);
    if pow10(p_high) < range.high {
        p_high += 1;
    }

    let decades = (p_high - p_low) as usize;
    let mut ticks = Vec::with_capacity(decades * LOG_MULTIPLES_PER_DECADE as usize + 1);
    for exponent in p_low..p_high {
        for multiple in 1..=LOG_MULTIPLES_PER_DECADE {
            ticks.push(decade_multiple(multiple, exponent));
        }
    }
    ticks.push(pow10(p_high));

    Ok(LabelSet::oriented(ticks, range.reversed))
}

/// `multiple * 10^exponent`, dividing for negative exponents so that minor
/// ticks such as `0.3` are correctly rounded
fn decade_multiple(multiple: u32, exponent: i32) -> f64 {
    let multiple = f64::from(multiple);
    if (-f64::MAX_10_EXP..0).contains(&exponent) {
        multiple / pow10(-exponent)
    } else {
        multiple * pow10(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(ticks: &[f64], value: f64) -> bool {
        ticks
            .iter()
            .any(|&t| (t - value).abs() <= 1e-12 * value.abs().max(1.0))
    }

    #[test]
    fn test_partial_decades_close_on_next_power() {
        let ticks = find_log_labels(0.3, 10.5).unwrap();

        for j in 1..=9 {
            assert!(contains(&ticks, f64::from(j) / 10.0), "missing {}", j);
            assert!(contains(&ticks, f64::from(j)), "missing {}", j);
        }
        assert!(contains(&ticks, 10.0));

        assert_eq!(ticks.first(), Some(&0.1));
        assert_eq!(ticks.last(), Some(&100.0));
        assert!(ticks.iter().all(|&t| (0.1..=100.0).contains(&t)));
        assert!(ticks.is_increasing());
    }

    #[test]
    fn test_exact_decades() {
        let ticks = find_log_labels(1.0, 1000.0).unwrap();
        assert_eq!(ticks.len(), 3 * 9 + 1);
        assert_eq!(ticks.first(), Some(&1.0));
        assert_eq!(ticks.last(), Some(&1000.0));
        assert!(contains(&ticks, 20.0));
        assert!(contains(&ticks, 900.0));
    }

    #[test]
    fn test_minor_ticks_are_correctly_rounded() {
        let ticks = find_log_labels(0.01, 1.0).unwrap();
        assert!(ticks.contains(&0.3));
        assert!(ticks.contains(&0.07));
    }

    #[test]
    fn test_reversed_range_is_mirrored() {
        let ascending = find_log_labels(2.0, 500.0).unwrap();
        let descending = find_log_labels(500.0, 2.0).unwrap();

        let mut mirrored = ascending.into_vec();
        mirrored.reverse();
        assert_eq!(descending.as_slice(), mirrored.as_slice());
        assert!(descending.is_decreasing());
    }

    #[test]
    fn test_non_positive_minimum_is_clamped() {
        let ticks = find_log_labels(-5.0, 100.0).unwrap();
        assert_eq!(ticks.first(), Some(&LOG_FLOOR));
        assert_eq!(ticks.last(), Some(&100.0));

        let ticks = find_log_labels(0.0, 1.0).unwrap();
        assert_eq!(ticks.first(), Some(&LOG_FLOOR));
    }

    #[test]
    fn test_invalid_ranges_are_rejected() {
        for (a, b) in [(2.0, 2.0), (-5.0, -1.0), (-1.0, 0.0), (-1.0, 0.0005)] {
            assert_eq!(
                find_log_labels(a, b),
                Err(AxisError::InvalidRange { low: a, high: b })
            );
        }
        assert!(find_log_labels(f64::NAN, 10.0).is_err());
    }
}
