//! Label formatting
//!
//! Renders tick values as short display strings. Labels use a fixed-capacity
//! heapless string so a label set costs one allocation for the outer vector
//! and none per label.

use core::fmt::Write;

use heapless::String;

use super::constants::{AUTO_LARGE_VALUE_PRECISION, AUTO_SMALL_VALUE_PRECISION, MAX_LABEL_LENGTH};

/// A formatted tick label
pub type Label = String<MAX_LABEL_LENGTH>;

/// Label formatter for tick values
#[derive(Debug, Clone, Copy, Default)]
pub enum LabelFormatter {
    /// One decimal place below magnitude one, whole numbers otherwise
    #[default]
    Auto,
    /// Format as numeric value with optional unit
    Numeric {
        /// Number of decimal places
        precision: usize,
        /// Unit suffix (e.g., "%", "ms", "dB")
        unit: &'static str,
    },
    /// Custom formatter using function pointer
    Custom(fn(f64) -> Label),
}

impl LabelFormatter {
    /// Format a single tick value
    ///
    /// Values too long for a [`Label`] in fixed-point notation are written in
    /// scientific notation instead, so formatting never fails.
    pub fn format(&self, value: f64) -> Label {
        match self {
            Self::Auto => {
                let precision = if value.abs() < 1.0 {
                    AUTO_SMALL_VALUE_PRECISION
                } else {
                    AUTO_LARGE_VALUE_PRECISION
                };
                render(value, precision, "")
            }
            Self::Numeric { precision, unit } => render(value, *precision, unit),
            Self::Custom(func) => func(value),
        }
    }

    /// Format every value in order
    pub fn format_all(&self, values: &[f64]) -> Vec<Label> {
        values.iter().map(|&value| self.format(value)).collect()
    }
}

/// Format tick values with [`LabelFormatter::Auto`]
///
/// The output has one label per input value. Neighbouring values that round
/// to the same text are not de-duplicated.
pub fn format_labels(values: &[f64]) -> Vec<Label> {
    LabelFormatter::Auto.format_all(values)
}

fn render(value: f64, precision: usize, unit: &str) -> Label {
    let mut s = Label::new();
    if write!(s, "{:.*}{}", precision, value, unit).is_ok() {
        return s;
    }

    s.clear();
    if write!(s, "{:.1e}{}", value, unit).is_ok() {
        return s;
    }

    // Unit does not fit either
    s.clear();
    let _ = write!(s, "{:.1e}", value);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(labels: &[Label]) -> Vec<&str> {
        labels.iter().map(|label| label.as_str()).collect()
    }

    #[test]
    fn test_auto_precision_rule() {
        let labels = format_labels(&[0.05, 100.0, -3.2]);
        assert_eq!(texts(&labels), vec!["0.1", "100", "-3"]);
    }

    #[test]
    fn test_auto_precision_boundary() {
        let labels = format_labels(&[0.5, -0.7, 1.0, 999.6, 0.0]);
        assert_eq!(texts(&labels), vec!["0.5", "-0.7", "1", "1000", "0.0"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(format_labels(&[]).is_empty());
    }

    #[test]
    fn test_nearby_values_are_not_deduplicated() {
        let labels = format_labels(&[0.11, 0.12, 0.2]);
        assert_eq!(texts(&labels), vec!["0.1", "0.1", "0.2"]);
    }

    #[test]
    fn test_numeric_with_unit() {
        let formatter = LabelFormatter::Numeric {
            precision: 1,
            unit: "%",
        };
        assert_eq!(formatter.format(12.5).as_str(), "12.5%");
        assert_eq!(formatter.format(-4.0).as_str(), "-4.0%");
    }

    #[test]
    fn test_custom_formatter() {
        fn kilo(value: f64) -> Label {
            let mut s = Label::new();
            let _ = write!(s, "{}k", value / 1000.0);
            s
        }

        let formatter = LabelFormatter::Custom(kilo);
        assert_eq!(
            texts(&formatter.format_all(&[0.0, 2500.0])),
            vec!["0k", "2.5k"]
        );
    }

    #[test]
    fn test_oversized_value_falls_back_to_scientific() {
        let label = LabelFormatter::Auto.format(1.0e30);
        assert_eq!(label.as_str(), "1.0e30");
        assert!(label.len() <= MAX_LABEL_LENGTH);
    }
}
