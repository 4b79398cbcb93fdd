use num_traits::Float;

use crate::Kbn;

/// Running mean and variance of a sequence of values
///
/// NaN values are treated as missing entries and skipped, so `len` counts
/// only the values that contributed. The mean divides a compensated
/// (Kahan-Babuska-Neumaier) sum by that count; the variance follows Welford's
/// update, which avoids the cancellation of the raw sum of squares.
#[derive(Debug, Clone)]
pub struct Moments<T> {
    /// Number of values accumulated
    len: usize,
    /// Sum of values
    sum: Kbn<T>,
    /// Running Welford mean
    mean: T,
    /// Sum of squared deviations from the running mean
    m2: T,
}

impl<T: Float> Moments<T> {
    /// Creates an empty accumulator
    pub fn new() -> Self {
        Self {
            len: 0,
            sum: Kbn::default(),
            mean: T::zero(),
            m2: T::zero(),
        }
    }

    /// Accumulates a value, skipping NaN
    ///
    /// # Arguments
    ///
    /// * `value` - The value to accumulate
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The accumulator
    pub fn next(&mut self, value: T) -> &mut Self {
        if value.is_nan() {
            return self;
        }

        self.len += 1;
        self.sum += value;

        let Some(n) = T::from(self.len) else {
            return self;
        };
        let delta = value - self.mean;
        self.mean = self.mean + delta / n;
        self.m2 = self.m2 + delta * (value - self.mean);
        self
    }

    /// Returns the arithmetic mean, or `None` if nothing was accumulated
    pub fn mean(&self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        T::from(self.len).map(|n| self.sum.total() / n)
    }

    /// Returns the sample variance (`n - 1` denominator), or `None` for fewer than two values
    pub fn variance(&self) -> Option<T> {
        if self.len < 2 {
            return None;
        }
        T::from(self.len - 1).map(|n| self.m2 / n)
    }

    /// Returns the sample standard deviation, or `None` for fewer than two values
    pub fn deviation(&self) -> Option<T> {
        self.variance().map(T::sqrt)
    }
}

impl<T: Float> Default for Moments<T> {
    fn default() -> Self {
        Self::new()
    }
}
