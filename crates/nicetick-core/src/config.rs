//! Axis configuration
//!
//! Selects a tick strategy and a label formatter for one axis, and runs them
//! together to produce ticks paired with display labels.

use serde::{Deserialize, Serialize};

use crate::ticks::constants::{DEFAULT_MAX_LABEL_COUNT, DEFAULT_MIN_LABEL_COUNT};
use crate::ticks::{
    AxisResult, DataRange, Label, LabelFormatter, LabelSet, find_labels, find_log_labels,
    find_n_labels,
};

/// How tick values are chosen for an axis
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum TickStrategy {
    /// Linear ticks at a fixed nearness to the data's dominant decade
    Nearness {
        /// Decades finer than the dominant one, or a negative percentage of it
        nearness: i32,
        /// Use the data endpoints as first and last tick
        include_endpoints: bool,
    },
    /// Decade ticks for a logarithmic axis
    Logarithmic,
    /// Linear ticks with a label count inside `[min_count, max_count]`
    Count {
        /// Fewest acceptable labels
        min_count: usize,
        /// Most acceptable labels
        max_count: usize,
        /// Use the data endpoints as first and last tick
        include_endpoints: bool,
    },
}

impl Default for TickStrategy {
    fn default() -> Self {
        Self::Count {
            min_count: DEFAULT_MIN_LABEL_COUNT,
            max_count: DEFAULT_MAX_LABEL_COUNT,
            include_endpoints: true,
        }
    }
}

/// Complete axis configuration
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy)]
pub struct AxisConfig {
    /// Tick strategy
    pub strategy: TickStrategy,
    /// Label formatter; not persisted, restored as [`LabelFormatter::Auto`]
    #[serde(skip)]
    pub formatter: LabelFormatter,
}

/// Tick values paired with their formatted labels
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    /// Tick values in the caller's axis direction
    pub values: LabelSet,
    /// One label per entry in `values`
    pub labels: Vec<Label>,
}

impl AxisConfig {
    /// Create a configuration with the automatic label formatter
    pub const fn new(strategy: TickStrategy) -> Self {
        Self {
            strategy,
            formatter: LabelFormatter::Auto,
        }
    }

    /// Replace the label formatter
    pub const fn with_formatter(mut self, formatter: LabelFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Compute tick values for the axis running from `xmin0` to `xmax0`
    pub fn ticks(&self, xmin0: f64, xmax0: f64) -> AxisResult<LabelSet> {
        match self.strategy {
            TickStrategy::Nearness {
                nearness,
                include_endpoints,
            } => find_labels(&DataRange::new(xmin0, xmax0)?, include_endpoints, nearness),
            TickStrategy::Logarithmic => find_log_labels(xmin0, xmax0),
            TickStrategy::Count {
                min_count,
                max_count,
                include_endpoints,
            } => find_n_labels(xmin0, xmax0, include_endpoints, min_count, max_count),
        }
    }

    /// Compute tick values and format a label for each
    pub fn annotate(&self, xmin0: f64, xmax0: f64) -> AxisResult<AxisLabels> {
        let values = self.ticks(xmin0, xmax0)?;
        let labels = self.formatter.format_all(&values);
        Ok(AxisLabels { values, labels })
    }
}
