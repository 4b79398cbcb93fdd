use alloc::vec::Vec;

use num_traits::Float;

use rand::{Rng, distributions::uniform::SampleUniform};

use crate::{Error, Normal, Pair, Result, utils::helper::{cast, parse_finite}};

/// How unset and zero parameters are replaced by their defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultPolicy {
    /// A zero value counts as unset: zero `correlation` and `deviation` take
    /// their defaults and a zero `count` is a missing argument
    #[default]
    Falsy,
    /// Only unset values take their defaults; explicit zeroes are kept and a
    /// zero `count` produces no pairs
    Absent,
}

/// Parameters of a single generation call
///
/// `count` is required; `correlation`, `mean` and `deviation` fall back to
/// [`Parameters::DEFAULT_CORRELATION`], [`Parameters::DEFAULT_MEAN`] and
/// [`Parameters::DEFAULT_DEVIATION`] according to the [`DefaultPolicy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters<T> {
    count: Option<usize>,
    /// Set when a textual count was negative; resolves to no pairs under any policy
    negative_count: bool,
    correlation: Option<T>,
    mean: Option<T>,
    deviation: Option<T>,
    policy: DefaultPolicy,
}

/// Parameters with defaults applied and every value validated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<T> {
    /// Number of pairs to generate
    pub count: usize,
    /// Target Pearson correlation coefficient
    pub correlation: T,
    /// Common mean of both axes
    pub mean: T,
    /// Common standard deviation of both axes
    pub deviation: T,
}

impl<T> Default for Parameters<T> {
    fn default() -> Self {
        Self {
            count: None,
            negative_count: false,
            correlation: None,
            mean: None,
            deviation: None,
            policy: DefaultPolicy::default(),
        }
    }
}

impl<T: Float> Parameters<T> {
    /// Correlation used when none is given
    pub const DEFAULT_CORRELATION: f64 = 0.7;
    /// Mean used when none is given
    pub const DEFAULT_MEAN: f64 = 0.0;
    /// Deviation used when none is given
    pub const DEFAULT_DEVIATION: f64 = 1.0;

    /// Creates parameters generating `count` pairs with default settings
    ///
    /// # Arguments
    ///
    /// * `count` - Number of pairs to generate
    ///
    /// # Returns
    ///
    /// * `Self` - The parameters
    pub fn new(count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::default()
        }
    }

    /// Builds parameters from textual arguments
    ///
    /// Every present argument must parse as a finite number. A fractional
    /// `count` is rounded up to whole pairs. A negative `count` produces no
    /// pairs under any policy, while a zero one is handled by the
    /// [`DefaultPolicy`].
    ///
    /// # Arguments
    ///
    /// * `count` - Number of pairs to generate
    /// * `correlation` - Target correlation coefficient
    /// * `mean` - Common mean of both axes
    /// * `deviation` - Common standard deviation of both axes
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The parameters, [`Error::MissingArgument`] if
    ///   `count` is absent or blank, or [`Error::InvalidArgument`] naming the
    ///   first argument that is not a finite number
    ///
    /// # Examples
    ///
    /// ```
    /// use array_correl::{Error, Parameters};
    ///
    /// let params = Parameters::<f64>::from_args(Some("10"), Some("abc"), None, None);
    /// assert_eq!(params, Err(Error::InvalidArgument("correlation")));
    ///
    /// let params = Parameters::<f64>::from_args(None, None, None, None);
    /// assert_eq!(params, Err(Error::MissingArgument("count")));
    /// ```
    pub fn from_args(
        count: Option<&str>,
        correlation: Option<&str>,
        mean: Option<&str>,
        deviation: Option<&str>,
    ) -> Result<Self> {
        let count = count
            .filter(|c| !c.trim().is_empty())
            .ok_or(Error::MissingArgument("count"))?;
        let count = parse_finite::<f64>(count).ok_or(Error::InvalidArgument("count"))?;

        let parse = |arg: Option<&str>, name: &'static str| -> Result<Option<T>> {
            arg.map(|text| parse_finite(text).ok_or(Error::InvalidArgument(name)))
                .transpose()
        };

        Ok(Self {
            count: Some(count.max(0.0).ceil() as usize),
            negative_count: count < 0.0,
            correlation: parse(correlation, "correlation")?,
            mean: parse(mean, "mean")?,
            deviation: parse(deviation, "deviation")?,
            policy: DefaultPolicy::default(),
        })
    }

    /// Sets the number of pairs to generate
    pub fn set_count(&mut self, count: usize) -> &mut Self {
        self.count = Some(count);
        self.negative_count = false;
        self
    }

    /// Sets the target correlation coefficient
    ///
    /// Values outside `[-1, 1]` are accepted; they make every `y` NaN.
    pub fn set_correlation(&mut self, correlation: T) -> &mut Self {
        self.correlation = Some(correlation);
        self
    }

    /// Sets the common mean of both axes
    pub fn set_mean(&mut self, mean: T) -> &mut Self {
        self.mean = Some(mean);
        self
    }

    /// Sets the common standard deviation of both axes
    pub fn set_deviation(&mut self, deviation: T) -> &mut Self {
        self.deviation = Some(deviation);
        self
    }

    /// Sets how unset and zero values are defaulted
    pub fn set_policy(&mut self, policy: DefaultPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Returns the default policy
    pub const fn policy(&self) -> DefaultPolicy {
        self.policy
    }

    /// Returns the largest count whose pairs fit in a single allocation
    pub fn max_count() -> usize {
        isize::MAX as usize / core::mem::size_of::<Pair<T>>().max(1)
    }

    /// Validates the parameters and applies defaults
    ///
    /// # Returns
    ///
    /// * `Result<Resolved<T>>` - The resolved parameters,
    ///   [`Error::MissingArgument`] if `count` is unset (or zero under
    ///   [`DefaultPolicy::Falsy`]), or [`Error::InvalidArgument`] naming the
    ///   first value that is NaN or infinite, or `count` if its pairs would
    ///   not fit in a single allocation
    ///
    /// # Examples
    ///
    /// ```
    /// use array_correl::{DefaultPolicy, Parameters};
    ///
    /// let mut params = Parameters::new(5);
    /// params.set_correlation(0.0).set_mean(10.0);
    ///
    /// let resolved = params.resolve().unwrap();
    /// assert_eq!(resolved.correlation, 0.7);
    /// assert_eq!(resolved.mean, 10.0);
    /// assert_eq!(resolved.deviation, 1.0);
    ///
    /// let resolved = params.set_policy(DefaultPolicy::Absent).resolve().unwrap();
    /// assert_eq!(resolved.correlation, 0.0);
    /// ```
    pub fn resolve(&self) -> Result<Resolved<T>> {
        let falsy = self.policy == DefaultPolicy::Falsy;

        let count = match self.count {
            Some(_) if self.negative_count => 0,
            Some(c) if c > Self::max_count() => return Err(Error::InvalidArgument("count")),
            Some(c) if !(falsy && c == 0) => c,
            _ => return Err(Error::MissingArgument("count")),
        };

        let resolve = |value: Option<T>, name: &'static str, default: f64| -> Result<T> {
            match value {
                Some(v) if !v.is_finite() => Err(Error::InvalidArgument(name)),
                Some(v) if falsy && v.is_zero() => Ok(cast(default)),
                Some(v) => Ok(v),
                None => Ok(cast(default)),
            }
        };

        Ok(Resolved {
            count,
            correlation: resolve(self.correlation, "correlation", Self::DEFAULT_CORRELATION)?,
            mean: resolve(self.mean, "mean", Self::DEFAULT_MEAN)?,
            deviation: resolve(self.deviation, "deviation", Self::DEFAULT_DEVIATION)?,
        })
    }
}

/// Generates correlated pairs drawing randomness from `rng`
///
/// Each pair takes two independent standard normal deviates `x1` and `y1`
/// and emits
///
/// ```text
/// x = mean + deviation * x1
/// y = mean + deviation * (correlation * x1 + sqrt(1 - correlation^2) * y1)
/// ```
///
/// so both axes follow `Normal(mean, deviation)` and their Pearson
/// correlation tends to `correlation`.
///
/// # Arguments
///
/// * `rng` - Uniform random source
/// * `params` - Generation parameters
///
/// # Returns
///
/// * `Result<Vec<Pair<T>>>` - Exactly `count` pairs in generation order, or
///   the error from [`Parameters::resolve`] or the sampler
///
/// # Examples
///
/// ```
/// use array_correl::{Parameters, generate_with, inspect_pairs};
/// use assert_approx_eq::assert_approx_eq;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(2024);
/// let mut params = Parameters::<f64>::new(5_000);
/// params.set_correlation(-0.5).set_mean(20.0).set_deviation(2.0);
///
/// let pairs = generate_with(&mut rng, &params).unwrap();
/// assert_eq!(pairs.len(), 5_000);
///
/// let stats = inspect_pairs(&pairs);
/// assert_approx_eq!(stats.r, -0.5, 0.06);
/// assert_approx_eq!(stats.x_mean.unwrap(), 20.0, 0.15);
/// ```
pub fn generate_with<T, R>(rng: &mut R, params: &Parameters<T>) -> Result<Vec<Pair<T>>>
where
    T: Float + SampleUniform,
    R: Rng + ?Sized,
{
    let Resolved {
        count,
        correlation,
        mean,
        deviation,
    } = params.resolve()?;

    log::debug!(
        "generating {count} pairs (correlation {:?}, mean {:?}, deviation {:?})",
        correlation.to_f64(),
        mean.to_f64(),
        deviation.to_f64()
    );

    let normal = Normal::<T>::standard();
    let coupling = (T::one() - correlation * correlation).sqrt();

    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        let (x1, y1) = normal.sample_pair(rng)?;
        pairs.push(Pair {
            x: mean + deviation * x1,
            y: mean + deviation * (correlation * x1 + coupling * y1),
        });
    }

    Ok(pairs)
}

/// Generates correlated pairs using the thread local random source
///
/// See [`generate_with`] for the construction.
///
/// # Arguments
///
/// * `params` - Generation parameters
///
/// # Returns
///
/// * `Result<Vec<Pair<T>>>` - Exactly `count` pairs in generation order
#[cfg(feature = "std")]
pub fn generate<T>(params: &Parameters<T>) -> Result<Vec<Pair<T>>>
where
    T: Float + SampleUniform,
{
    generate_with(&mut rand::thread_rng(), params)
}
