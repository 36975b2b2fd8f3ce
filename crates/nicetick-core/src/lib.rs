//! Rendering-independent axis annotation for nicetick
//!
//! This crate turns an arbitrary numeric data range into "nice",
//! human-readable tick values and short display labels for a plotted axis.
//! It contains no drawing code: the rendering layer takes the ordered tick
//! sequence produced here and places lines and text itself.
//!
//! Three strategies are available:
//!
//! - Nearness-driven linear ticks ([`ticks::find_limits`] + [`ticks::find_labels`])
//! - Logarithmic decade ticks ([`ticks::find_log_labels`])
//! - A bounded label count search ([`ticks::find_n_labels`])
//!
//! [`config::AxisConfig`] selects one of them and pairs the ticks with
//! formatted labels.
//!
//! # Examples
//!
//! ```
//! use nicetick_core::ticks::find_n_labels;
//!
//! let ticks = find_n_labels(0.0, 100.0, true, 5, 10).unwrap();
//! assert!((5..=10).contains(&ticks.len()));
//! assert_eq!(ticks.first(), Some(&0.0));
//! assert_eq!(ticks.last(), Some(&100.0));
//! ```

pub mod config;
pub mod ticks;

pub use config::{AxisConfig, AxisLabels, TickStrategy};
pub use ticks::{AxisError, AxisResult, Label, LabelFormatter, LabelSet};
