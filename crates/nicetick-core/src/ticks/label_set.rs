//! Ordered tick sequences

use core::ops::Deref;

/// A strictly monotonic sequence of tick values
///
/// Built fresh by each generator call and never mutated afterwards.
/// Dereferences to `[f64]` for read access.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelSet {
    values: Vec<f64>,
}

impl LabelSet {
    /// Wrap an ascending buffer, reversing it when the caller's range was
    /// supplied in descending order
    pub(crate) fn oriented(mut values: Vec<f64>, reversed: bool) -> Self {
        if reversed {
            values.reverse();
        }
        values.shrink_to_fit();
        Self { values }
    }

    /// Tick values as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consume the set and return the underlying vector
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// `true` if every tick is strictly larger than the one before it
    pub fn is_increasing(&self) -> bool {
        self.values.windows(2).all(|w| w[0] < w[1])
    }

    /// `true` if every tick is strictly smaller than the one before it
    pub fn is_decreasing(&self) -> bool {
        self.values.windows(2).all(|w| w[0] > w[1])
    }
}

impl Deref for LabelSet {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl IntoIterator for LabelSet {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
