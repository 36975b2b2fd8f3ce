//! Constants for tick computation
//!
//! All magic numbers used by the tick generators are defined here with
//! descriptive names.

/// Smallest positive value a logarithmic axis is clamped to
///
/// A non-positive lower endpoint has no logarithm, so it is raised to this
/// value before decades are enumerated.
pub const LOG_FLOOR: f64 = 0.001;

/// Number of minor multiples emitted per decade on a logarithmic axis (1..=9)
pub const LOG_MULTIPLES_PER_DECADE: u32 = 9;

/// Maximum number of ticks a single generator call may produce
///
/// Guards against nearness selectors that would walk a tiny increment
/// across an enormous range.
pub const MAX_TICK_COUNT: usize = 100_000;

/// Maximum length of a formatted label (characters)
pub const MAX_LABEL_LENGTH: usize = 24;

/// Decimal places used by the automatic formatter for values below one
pub const AUTO_SMALL_VALUE_PRECISION: usize = 1;

/// Decimal places used by the automatic formatter for values of one or more
pub const AUTO_LARGE_VALUE_PRECISION: usize = 0;

/// `range / average` ratio at which the count search switches candidate lists
pub const CANDIDATE_RATIO_THRESHOLD: f64 = 100.0;

/// Number of nearness candidates tried by the count search
pub const NEARNESS_CANDIDATE_COUNT: usize = 16;

/// Nearness candidates for ranges whose `range / average` is below
/// [`CANDIDATE_RATIO_THRESHOLD`], in priority order
///
/// Negative entries are percentages of the dominant decade, non-negative
/// entries are decades below it.
pub const FINE_NEARNESS_CANDIDATES: [i32; NEARNESS_CANDIDATE_COUNT] = [
    0, -50, -20, -25, -200, -500, -250, 1, -5, -2, 2, -1000, 3, -2000, -5000, 4,
];

/// Nearness candidates for ranges whose `range / average` is at or above
/// [`CANDIDATE_RATIO_THRESHOLD`], in priority order
///
/// Identical to [`FINE_NEARNESS_CANDIDATES`]: the ratio split currently
/// has no effect on which tick set the search returns.
pub const COARSE_NEARNESS_CANDIDATES: [i32; NEARNESS_CANDIDATE_COUNT] = [
    0, -50, -20, -25, -200, -500, -250, 1, -5, -2, 2, -1000, 3, -2000, -5000, 4,
];

/// Default minimum label count for [`crate::TickStrategy::Count`]
pub const DEFAULT_MIN_LABEL_COUNT: usize = 4;

/// Default maximum label count for [`crate::TickStrategy::Count`]
pub const DEFAULT_MAX_LABEL_COUNT: usize = 10;
