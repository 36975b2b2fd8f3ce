//! Linear tick generation
//!
//! Walks the increment chosen by [`find_limits`] across a range.

use super::constants::MAX_TICK_COUNT;
use super::label_set::LabelSet;
use super::limits::{NiceLimits, find_limits};
use super::range::DataRange;
use super::{AxisError, AxisResult};

/// Generate linear ticks for `range`
///
/// The sequence starts at the data minimum when `include_endpoints` is set,
/// otherwise at the rounded lower limit, and steps by the nice increment for
/// `nearness`. It closes on the data maximum or the rounded upper limit.
/// A final step that lands within half an increment of the closing value is
/// dropped so the last two ticks never crowd each other.
///
/// Ticks come back descending when `range` was built from descending
/// endpoints.
///
/// # Errors
///
/// Propagates [`find_limits`] failures, and returns
/// [`AxisError::TooManyTicks`] if the walk would exceed [`MAX_TICK_COUNT`].
pub fn find_labels(
    range: &DataRange,
    include_endpoints: bool,
    nearness: i32,
) -> AxisResult<LabelSet> {
    let NiceLimits {
        low_limit,
        high_limit,
        increment,
    } = find_limits(range.low, range.high, nearness)?;

    let steps = (high_limit - low_limit) / increment;
    if !(steps < MAX_TICK_COUNT as f64) {
        return Err(AxisError::TooManyTicks {
            max: MAX_TICK_COUNT,
        });
    }

    let (first, last) = if include_endpoints {
        (range.low, range.high)
    } else {
        (low_limit, high_limit)
    };

    let mut ticks = Vec::with_capacity(steps as usize + 2);
    ticks.push(first);

    // Interior ticks are recomputed from their multiple index rather than
    // accumulated, matching how the limits themselves were derived. Near the
    // float resolution of the endpoints neighbouring indices can round to the
    // same value; those repeats are skipped.
    let base = (low_limit / increment).round();
    for k in 1..=steps.ceil() as usize {
        let value = (base + k as f64) * increment;
        if value >= range.high {
            break;
        }
        if ticks.last().is_some_and(|&previous| value <= previous) {
            continue;
        }
        ticks.push(value);
    }

    if ticks.len() > 1
        && ticks
            .last()
            .is_some_and(|&previous| last - previous < increment / 2.0)
    {
        ticks.pop();
    }
    ticks.push(last);

    Ok(LabelSet::oriented(ticks, range.reversed))
}
