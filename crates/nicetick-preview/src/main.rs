//! Desktop preview for the nicetick axis helpers.
//!
//! Runs every strategy in `nicetick-core` over a fixed table of sample
//! ranges and logs the resulting ticks and labels. Nothing is drawn; the
//! output is what a rendering layer would receive.
//!
//! Set `RUST_LOG=debug` to see the count search and range repairs, or
//! `RUST_LOG=trace` for every nearness candidate.

use log::{error, info};

use nicetick_core::ticks::LabelFormatter;
use nicetick_core::{AxisConfig, TickStrategy};

// ---------------------------------------------------------------------------
// Scenario table
// ---------------------------------------------------------------------------

/// One preview run: a named axis configuration applied to a range.
struct Scenario {
    name: &'static str,
    config: AxisConfig,
    xmin0: f64,
    xmax0: f64,
}

const fn nearness(nearness: i32, include_endpoints: bool) -> AxisConfig {
    AxisConfig::new(TickStrategy::Nearness {
        nearness,
        include_endpoints,
    })
}

const fn count(min_count: usize, max_count: usize, include_endpoints: bool) -> AxisConfig {
    AxisConfig::new(TickStrategy::Count {
        min_count,
        max_count,
        include_endpoints,
    })
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "nearness 1, rounded limits",
        config: nearness(1, false),
        xmin0: 3.0,
        xmax0: 97.0,
    },
    Scenario {
        name: "nearness 0, data endpoints",
        config: nearness(0, true),
        xmin0: 3.0,
        xmax0: 97.0,
    },
    Scenario {
        name: "nearness -25, reversed axis",
        config: nearness(-25, false),
        xmin0: 100.0,
        xmax0: -50.0,
    },
    Scenario {
        name: "logarithmic",
        config: AxisConfig::new(TickStrategy::Logarithmic),
        xmin0: 0.3,
        xmax0: 10.5,
    },
    Scenario {
        name: "logarithmic, non-positive minimum",
        config: AxisConfig::new(TickStrategy::Logarithmic),
        xmin0: -5.0,
        xmax0: 100.0,
    },
    Scenario {
        name: "5 to 10 labels",
        config: count(5, 10, true),
        xmin0: 0.0,
        xmax0: 100.0,
    },
    Scenario {
        name: "9 to 10 labels, bisection",
        config: count(9, 10, false),
        xmin0: 0.0,
        xmax0: 27.0,
    },
    Scenario {
        name: "7 to 8 labels, even division",
        config: count(7, 8, true),
        xmin0: 0.0,
        xmax0: 100.0,
    },
    Scenario {
        name: "degenerate range, repaired",
        config: count(2, 5, true),
        xmin0: 5.0,
        xmax0: 5.0,
    },
    Scenario {
        name: "humidity in percent",
        config: count(4, 8, false).with_formatter(LabelFormatter::Numeric {
            precision: 1,
            unit: "%",
        }),
        xmin0: 38.2,
        xmax0: 61.7,
    },
    Scenario {
        name: "degenerate range, strict",
        config: nearness(0, true),
        xmin0: 2.0,
        xmax0: 2.0,
    },
];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("nicetick preview: {} scenarios", SCENARIOS.len());

    for scenario in SCENARIOS {
        match scenario.config.annotate(scenario.xmin0, scenario.xmax0) {
            Ok(axis) => {
                let labels: Vec<&str> = axis.labels.iter().map(|label| label.as_str()).collect();
                info!(
                    "{} [{}, {}]: {} ticks {:?}",
                    scenario.name,
                    scenario.xmin0,
                    scenario.xmax0,
                    axis.values.len(),
                    axis.values.as_slice()
                );
                info!("    labels {:?}", labels);
            }
            Err(e) => {
                error!(
                    "{} [{}, {}]: {}",
                    scenario.name, scenario.xmin0, scenario.xmax0, e
                );
            }
        }
    }
}
