//! Bounded label count search
//!
//! Finds a tick set whose length falls inside a requested window. The
//! search first tries a fixed, priority-ordered list of nearness selectors
//! through [`find_labels`]. When none of them produces an acceptable count it
//! falls back to rounding the raw spacing up to a nice number
//! ([`choose_labels`]), and as a last resort divides the range evenly.

use log::{debug, trace};

use super::constants::{
    CANDIDATE_RATIO_THRESHOLD, COARSE_NEARNESS_CANDIDATES, FINE_NEARNESS_CANDIDATES,
    NEARNESS_CANDIDATE_COUNT,
};
use super::label_set::LabelSet;
use super::limits::{decade_floor, pow10};
use super::linear::find_labels;
use super::range::DataRange;
use super::{AxisError, AxisResult};

/// Tick layout picked by the nice-number bisection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionChoice {
    /// First tick, at or below the data minimum
    pub t_min: f64,
    /// Last tick, at or above the data maximum
    pub t_max: f64,
    /// Spacing between ticks
    pub increment: f64,
    /// Number of ticks from `t_min` to `t_max` inclusive
    pub count: usize,
}

/// Generate between `min_count` and `max_count` ticks for `xmin0..xmax0`
///
/// Unlike the other generators this one never rejects a degenerate range;
/// equal endpoints are widened so the axis stays drawable:
///
/// - both zero becomes `[0, 1]`
/// - a positive value `x` becomes `[0, x]`
/// - a negative value `x` becomes `[x, 0]`
///
/// With `include_endpoints` the first and last ticks are the data endpoints.
/// Ticks come back descending if `xmin0 > xmax0`. Ticks are always distinct,
/// so a range narrower than `min_count` representable values yields fewer
/// than `min_count` ticks.
///
/// # Errors
///
/// - [`AxisError::InvalidCountRange`] if `min_count >= max_count` or
///   `max_count < 2`
/// - [`AxisError::InvalidRange`] if either endpoint is not finite
pub fn find_n_labels(
    xmin0: f64,
    xmax0: f64,
    include_endpoints: bool,
    min_count: usize,
    max_count: usize,
) -> AxisResult<LabelSet> {
    if min_count >= max_count || max_count < 2 {
        return Err(AxisError::InvalidCountRange {
            min: min_count,
            max: max_count,
        });
    }
    if !xmin0.is_finite() || !xmax0.is_finite() {
        return Err(AxisError::InvalidRange {
            low: xmin0,
            high: xmax0,
        });
    }

    let range = repaired_range(xmin0, xmax0);
    let ascending = DataRange {
        reversed: false,
        ..range
    };

    // Each candidate's tick set is independent of the target count, so it is
    // generated once and matched against every target
    let candidates = CandidateList::for_range(&ascending).nearness();
    let mut attempts: Vec<Option<Vec<f64>>> = candidates
        .iter()
        .map(|&nearness| {
            let attempt = find_labels(&ascending, include_endpoints, nearness);
            match &attempt {
                Ok(ticks) => trace!("nearness {} gives {} ticks", nearness, ticks.len()),
                Err(e) => trace!("nearness {} rejected: {}", nearness, e),
            }
            attempt.ok().map(LabelSet::into_vec)
        })
        .collect();

    let hit = (min_count..=max_count).rev().find_map(|target| {
        attempts.iter().position(|attempt| {
            attempt
                .as_ref()
                .is_some_and(|ticks| ticks.len() == target)
        })
    });

    if let Some(index) = hit
        && let Some(ticks) = attempts[index].take()
    {
        debug!(
            "nearness {} gives {} ticks for [{}, {}]",
            candidates[index],
            ticks.len(),
            range.low,
            range.high
        );
        return Ok(LabelSet::oriented(ticks, range.reversed));
    }

    debug!(
        "no nearness candidate gives {}..={} ticks for [{}, {}], bisecting",
        min_count, max_count, range.low, range.high
    );

    let mut ticks = match choose_labels(range.low, range.high, min_count, max_count) {
        Some(choice) => stepped_ticks(&choice),
        None => {
            debug!("bisection failed, dividing range into {} ticks", max_count);
            divided_ticks(range.low, range.high, max_count)
        }
    };

    if include_endpoints {
        let last = ticks.len() - 1;
        ticks[0] = range.low;
        ticks[last] = range.high;
    }

    Ok(LabelSet::oriented(ticks, range.reversed))
}

/// Search label counts from `max_count` down for the nice increment that
/// overshoots the data the least
///
/// For each count the raw spacing is rounded up with [`nice_double`] and the
/// range is widened outwards to multiples of it. Layouts whose resulting
/// count lies in `[min_count, count]` compete on
/// `max(low - t_min, t_max - high)`; the search stops at the first layout
/// with fewer than `min_count` ticks. Returns `None` if no layout qualified.
pub fn choose_labels(
    low: f64,
    high: f64,
    min_count: usize,
    max_count: usize,
) -> Option<BisectionChoice> {
    let range = high - low;
    let mut best: Option<(f64, BisectionChoice)> = None;

    for num_labels in (min_count.max(2)..=max_count).rev() {
        let increment = nice_double(range / (num_labels - 1) as f64);
        if !(increment > 0.0 && increment.is_finite()) {
            continue;
        }

        let t_max = (high / increment).ceil() * increment;
        let t_min = (low / increment).floor() * increment;
        if !t_min.is_finite() || !t_max.is_finite() {
            continue;
        }

        // Steps below float resolution at either end would repeat ticks
        if t_min + increment == t_min || t_max - increment == t_max {
            continue;
        }

        let count = ((t_max - t_min) / increment).round() as usize + 1;

        if count < min_count {
            break;
        }
        if count > num_labels {
            continue;
        }

        let overshoot = (low - t_min).max(t_max - high);
        trace!(
            "bisection: {} labels, increment {}, overshoot {}",
            count, increment, overshoot
        );
        if best.is_none_or(|(smallest, _)| overshoot < smallest) {
            best = Some((
                overshoot,
                BisectionChoice {
                    t_min,
                    t_max,
                    increment,
                    count,
                },
            ));
        }
    }

    best.map(|(_, choice)| choice)
}

/// Ticks `t_min, t_min + increment, ..., t_max` for a bisection layout
fn stepped_ticks(choice: &BisectionChoice) -> Vec<f64> {
    let last = choice.count - 1;
    (0..choice.count)
        .map(|i| {
            if i == last {
                choice.t_max
            } else {
                choice.t_min + i as f64 * choice.increment
            }
        })
        .collect()
}

/// Divide `[low, high]` evenly into at most `max_count` ticks
///
/// Ticks are interpolated between the endpoints rather than stepped from
/// `low`, so ranges whose width overflows `f64` still give finite ticks.
/// When the endpoints are too close together for `max_count` distinct
/// values at their magnitude, the count is lowered until every tick is
/// distinct; two ticks always are.
fn divided_ticks(low: f64, high: f64, max_count: usize) -> Vec<f64> {
    for count in (3..=max_count).rev() {
        let last = count - 1;
        let ticks: Vec<f64> = (0..count)
            .map(|i| {
                if i == last {
                    high
                } else {
                    let t = i as f64 / last as f64;
                    low * (1.0 - t) + high * t
                }
            })
            .collect();

        if ticks.windows(2).all(|w| w[0] < w[1]) {
            return ticks;
        }
        trace!("even division into {} ticks repeats values, retrying", count);
    }

    vec![low, high]
}

/// Round `value` up to a whole mantissa in its decade
///
/// `nice_double(3.2) == 4.0`, `nice_double(0.071) == 0.08`,
/// `nice_double(300.0) == 300.0`. Non-positive or non-finite input is
/// returned unchanged.
pub fn nice_double(value: f64) -> f64 {
    if !(value > 0.0 && value.is_finite()) {
        return value;
    }

    let scale = pow10(decade_floor(value));
    let mantissa = value / scale;
    mantissa.ceil() * scale
}

/// Widen a degenerate range, or order a regular one
fn repaired_range(xmin0: f64, xmax0: f64) -> DataRange {
    if xmin0 != xmax0 {
        return DataRange::ordered(xmin0, xmax0);
    }

    let (low, high) = if xmin0 == 0.0 {
        (0.0, 1.0)
    } else if xmin0 > 0.0 {
        (0.0, xmin0)
    } else {
        (xmin0, 0.0)
    };
    debug!(
        "degenerate range at {} widened to [{}, {}]",
        xmin0, low, high
    );

    DataRange {
        low,
        high,
        reversed: false,
    }
}

/// Which nearness candidate list the count search uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CandidateList {
    /// `range / average` below [`CANDIDATE_RATIO_THRESHOLD`]
    Fine,
    /// `range / average` at or above [`CANDIDATE_RATIO_THRESHOLD`]
    Coarse,
}

impl CandidateList {
    /// Pick the list for `range` from its `range / average` ratio
    fn for_range(range: &DataRange) -> Self {
        let average = (range.low + range.high) / 2.0;
        if range.span() / average < CANDIDATE_RATIO_THRESHOLD {
            Self::Fine
        } else {
            Self::Coarse
        }
    }

    /// Nearness selectors in priority order
    fn nearness(self) -> &'static [i32; NEARNESS_CANDIDATE_COUNT] {
        match self {
            Self::Fine => &FINE_NEARNESS_CANDIDATES,
            Self::Coarse => &COARSE_NEARNESS_CANDIDATES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_within_window() {
        let ticks = find_n_labels(0.0, 100.0, true, 5, 10).unwrap();
        assert!((5..=10).contains(&ticks.len()));
        assert_eq!(ticks.as_slice(), &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_reversed_input_gives_descending_ticks() {
        let ticks = find_n_labels(100.0, 0.0, true, 5, 10).unwrap();
        assert_eq!(ticks.as_slice(), &[100.0, 80.0, 60.0, 40.0, 20.0, 0.0]);
        assert!(ticks.is_decreasing());
    }

    #[test]
    fn test_degenerate_positive_range_is_repaired() {
        let ticks = find_n_labels(5.0, 5.0, true, 2, 5).unwrap();
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&5.0));
        assert!((2..=5).contains(&ticks.len()));
        assert!(ticks.is_increasing());
    }

    #[test]
    fn test_degenerate_zero_and_negative_ranges_are_repaired() {
        let ticks = find_n_labels(0.0, 0.0, true, 2, 6).unwrap();
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&1.0));

        let ticks = find_n_labels(-3.0, -3.0, true, 2, 6).unwrap();
        assert_eq!(ticks.first(), Some(&-3.0));
        assert_eq!(ticks.last(), Some(&0.0));
        assert!(ticks.is_increasing());
    }

    #[test]
    fn test_bisection_fallback() {
        // No candidate increment gives 9 or 10 ticks over [0, 27], but a
        // spacing of 3 gives exactly 10
        let ticks = find_n_labels(0.0, 27.0, false, 9, 10).unwrap();
        let expected: Vec<f64> = (0..10).map(|i| f64::from(i) * 3.0).collect();
        assert_eq!(ticks.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_even_division_when_bisection_fails() {
        let ticks = find_n_labels(0.0, 100.0, true, 7, 8).unwrap();
        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&100.0));
        assert!(ticks.is_increasing());
        assert!((ticks[1] - 100.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_range_with_rounded_limits() {
        let ticks = find_n_labels(5.0, 5.0, false, 2, 5).unwrap();
        assert_eq!(ticks.as_slice(), &[0.0, 2.0, 4.0, 6.0]);
        assert!(ticks[0] <= 0.0);
        assert!(ticks[ticks.len() - 1] >= 5.0);
    }

    #[test]
    fn test_overflowing_width_gives_finite_ticks() {
        for include_endpoints in [true, false] {
            let ticks = find_n_labels(-f64::MAX, f64::MAX, include_endpoints, 2, 5).unwrap();
            assert_eq!(ticks.len(), 5);
            assert!(ticks.iter().all(|t| t.is_finite()), "{:?}", ticks);
            assert!(ticks.is_increasing(), "{:?}", ticks);
            assert_eq!(ticks.first(), Some(&-f64::MAX));
            assert_eq!(ticks.last(), Some(&f64::MAX));
            assert_eq!(ticks[2], 0.0);
        }
    }

    #[test]
    fn test_spacing_below_float_resolution_never_repeats_ticks() {
        let low = 1.0e16;
        let high = 1.0e16 + 4.0;
        for include_endpoints in [true, false] {
            let ticks = find_n_labels(low, high, include_endpoints, 5, 10).unwrap();
            assert!(ticks.len() >= 2);
            assert!(ticks.is_increasing(), "{:?}", ticks);
            assert!(ticks[0] <= low);
            assert!(ticks[ticks.len() - 1] >= high);
        }
    }

    #[test]
    fn test_choose_labels_rejects_unrepresentable_spacing() {
        // Spacing 0.5 is below the float resolution at 1e16
        let low = 1.0e16;
        let high = 1.0e16 + 4.0;
        assert_eq!(choose_labels(low, high, 5, 10), None);
    }

    #[test]
    fn test_invalid_count_window() {
        assert_eq!(
            find_n_labels(0.0, 1.0, true, 5, 5),
            Err(AxisError::InvalidCountRange { min: 5, max: 5 })
        );
        assert_eq!(
            find_n_labels(0.0, 1.0, true, 6, 3),
            Err(AxisError::InvalidCountRange { min: 6, max: 3 })
        );
        assert_eq!(
            find_n_labels(0.0, 1.0, true, 0, 1),
            Err(AxisError::InvalidCountRange { min: 0, max: 1 })
        );
    }

    #[test]
    fn test_non_finite_endpoints_are_rejected() {
        assert!(matches!(
            find_n_labels(f64::NEG_INFINITY, 1.0, true, 2, 5),
            Err(AxisError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_candidate_lists_are_identical() {
        // The ratio selects a different list, but both lists hold the same
        // entries, so the choice never changes the result
        assert_eq!(FINE_NEARNESS_CANDIDATES, COARSE_NEARNESS_CANDIDATES);

        let narrow = DataRange::new(1.0, 3.0).unwrap();
        let wide = DataRange::new(-1.0, 1.02).unwrap();
        assert_eq!(CandidateList::for_range(&narrow), CandidateList::Fine);
        assert_eq!(CandidateList::for_range(&wide), CandidateList::Coarse);
        assert_eq!(
            CandidateList::Fine.nearness(),
            CandidateList::Coarse.nearness()
        );

        // Ranges on both sides of the ratio threshold are searched the same way
        let below = find_n_labels(1.0, 3.0, false, 3, 8).unwrap();
        let above = find_n_labels(-1.0, 1.0, false, 3, 8).unwrap();
        assert!((3..=8).contains(&below.len()));
        assert!((3..=8).contains(&above.len()));
    }

    #[test]
    fn test_choose_labels_prefers_smallest_overshoot() {
        let choice = choose_labels(0.0, 70.0, 3, 8).unwrap();
        assert_eq!(choice.increment, 10.0);
        assert_eq!(choice.t_min, 0.0);
        assert_eq!(choice.t_max, 70.0);
        assert_eq!(choice.count, 8);
    }

    #[test]
    fn test_choose_labels_stops_below_minimum() {
        assert_eq!(choose_labels(0.0, 100.0, 7, 8), None);
    }

    #[test]
    fn test_nice_double() {
        assert_eq!(nice_double(3.2), 4.0);
        assert_eq!(nice_double(300.0), 300.0);
        assert_eq!(nice_double(14.2), 20.0);
        assert!((nice_double(0.071) - 0.08).abs() < 1e-15);
        assert_eq!(nice_double(0.0), 0.0);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let a = find_n_labels(-2.7, 13.4, false, 4, 9).unwrap();
        let b = find_n_labels(-2.7, 13.4, false, 4, 9).unwrap();
        assert_eq!(a, b);
    }
}
