use num_traits::Float;

use rand::{Rng, distributions::uniform::SampleUniform};

use crate::{Error, Result};

/// Normal variate sampler using the Marsaglia polar method
///
/// Each attempt draws a point uniformly from the square `[-1, 1) x [-1, 1)`
/// and keeps it only if it falls strictly inside the unit circle, excluding
/// the origin. An attempt is accepted with probability `pi / 4`, so about
/// 1.27 attempts are needed per accepted point and the number of attempts is
/// geometrically distributed.
///
/// The sampler holds no state beyond its parameters; all randomness comes
/// from the source passed into each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal<T> {
    mean: T,
    deviation: T,
}

impl<T: Float + SampleUniform> Normal<T> {
    /// Consecutive rejected attempts after which the random source is deemed broken
    pub const MAX_REJECTIONS: usize = 1024;

    /// Creates a sampler for `Normal(mean, deviation)`
    ///
    /// # Arguments
    ///
    /// * `mean` - Mean of the distribution
    /// * `deviation` - Standard deviation of the distribution
    ///
    /// # Returns
    ///
    /// * `Self` - The sampler
    pub const fn new(mean: T, deviation: T) -> Self {
        Self { mean, deviation }
    }

    /// Creates a sampler for the standard normal distribution `Normal(0, 1)`
    pub fn standard() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Returns the mean of the distribution
    pub const fn mean(&self) -> T {
        self.mean
    }

    /// Returns the standard deviation of the distribution
    pub const fn deviation(&self) -> T {
        self.deviation
    }

    /// Draws one value from the distribution
    ///
    /// The companion value produced by the polar method is discarded.
    ///
    /// # Arguments
    ///
    /// * `rng` - Uniform random source
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The value, or [`Error::RejectionLimit`] if the source
    ///   never lands inside the unit circle
    ///
    /// # Examples
    ///
    /// ```
    /// use array_correl::Normal;
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let normal = Normal::new(100.0, 0.0);
    /// assert_eq!(normal.sample(&mut rng).unwrap(), 100.0);
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T> {
        self.sample_pair(rng).map(|(a, _)| a)
    }

    /// Draws two independent values from the distribution
    ///
    /// # Arguments
    ///
    /// * `rng` - Uniform random source
    ///
    /// # Returns
    ///
    /// * `Result<(T, T)>` - The values, or [`Error::RejectionLimit`] if the
    ///   source never lands inside the unit circle
    pub fn sample_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(T, T)> {
        let (a, b) = polar(rng)?;
        Ok((
            self.deviation * a + self.mean,
            self.deviation * b + self.mean,
        ))
    }
}

/// Returns two independent standard normal deviates
fn polar<T, R>(rng: &mut R) -> Result<(T, T)>
where
    T: Float + SampleUniform,
    R: Rng + ?Sized,
{
    let _1 = T::one();
    let _2 = _1 + _1;

    for attempt in 0..Normal::<T>::MAX_REJECTIONS {
        let a: T = rng.gen_range(-_1.._1);
        let b: T = rng.gen_range(-_1.._1);
        let r = a * a + b * b;

        if r >= _1 || r.is_zero() {
            log::trace!("polar draw rejected on attempt {attempt}");
            continue;
        }

        let factor = (-_2 * r.ln() / r).sqrt();
        return Ok((a * factor, b * factor));
    }

    Err(Error::RejectionLimit(Normal::<T>::MAX_REJECTIONS))
}
