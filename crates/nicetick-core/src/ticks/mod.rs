//! Tick value and label computation
//!
//! The pipeline is a handful of pure functions:
//!
//! - [`DataRange`] normalizes raw endpoints into an ascending range and
//!   remembers whether they were swapped
//! - [`find_limits`] rounds a range out to multiples of a power-of-ten increment
//! - [`find_labels`] walks that increment across the range
//! - [`find_log_labels`] enumerates decade ticks for a logarithmic axis
//! - [`find_n_labels`] searches for a tick set with a label count inside a
//!   requested window, falling back to [`choose_labels`]
//! - [`format_labels`] renders tick values as short strings
//!
//! Nothing here keeps state between calls, so every function may be called
//! from any thread.

use thiserror_no_std::Error;

// Module declarations
pub mod bounded;
pub mod constants;
pub mod format;
pub mod label_set;
pub mod limits;
pub mod linear;
pub mod logarithmic;
pub mod range;

// Re-export main types
pub use bounded::{choose_labels, find_n_labels, nice_double, BisectionChoice};
pub use format::{format_labels, Label, LabelFormatter};
pub use label_set::LabelSet;
pub use limits::{find_limits, NiceLimits};
pub use linear::find_labels;
pub use logarithmic::find_log_labels;
pub use range::{normalize, DataRange};

/// Error types for tick computation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AxisError {
    /// Both endpoints are equal and the caller has no repair path
    #[error("Degenerate range: both endpoints are {value}")]
    DegenerateRange {
        /// The shared endpoint value
        value: f64,
    },

    /// Range is not ascending, not finite, or not usable for the requested scale
    #[error("Invalid range [{low}, {high}]")]
    InvalidRange {
        /// Lower endpoint as received
        low: f64,
        /// Upper endpoint as received
        high: f64,
    },

    /// Label count window is empty or too small to describe a range
    #[error("Invalid label count range (min: {min}, max: {max})")]
    InvalidCountRange {
        /// Requested minimum label count
        min: usize,
        /// Requested maximum label count
        max: usize,
    },

    /// Nearness selector produces a zero or non-finite increment
    #[error("Nearness {nearness} produces an unusable increment")]
    InvalidNearness {
        /// The rejected nearness selector
        nearness: i32,
    },

    /// Tick generation would exceed the tick capacity
    #[error("Tick count exceeds capacity (max: {max})")]
    TooManyTicks {
        /// Maximum number of ticks a single call may produce
        max: usize,
    },
}

/// Result type for tick computation
pub type AxisResult<T> = Result<T, AxisError>;
