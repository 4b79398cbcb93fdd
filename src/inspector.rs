use alloc::vec::Vec;

use num_traits::Float;

use crate::{
    Element, Error, Pair, Result, pearson,
    utils::{Extent, Moments},
};

/// Descriptive statistics of a paired sample
///
/// Entries that are undefined for the sample are `None`: means and extents
/// when an axis has no numeric values, deviations when it has fewer than two.
/// NaN values are skipped by those statistics but propagate into `r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inspection<T> {
    /// Pearson correlation coefficient, NaN when undefined
    pub r: T,
    /// Arithmetic mean of the x values
    pub x_mean: Option<T>,
    /// Arithmetic mean of the y values
    pub y_mean: Option<T>,
    /// Sample standard deviation of the x values
    pub x_deviation: Option<T>,
    /// Sample standard deviation of the y values
    pub y_deviation: Option<T>,
    /// `[min, max]` of the x values
    pub x_extent: Option<[T; 2]>,
    /// `[min, max]` of the y values
    pub y_extent: Option<[T; 2]>,
}

/// Inspects a collection of elements given in either shape
///
/// The shape of the whole collection is taken from its first element. Later
/// elements of the other shape are not rejected; they read as NaN on both
/// axes, and a warning names the first of them.
///
/// # Arguments
///
/// * `input` - The elements to inspect; never modified
///
/// # Returns
///
/// * `Result<Inspection<T>>` - The statistics, [`Error::EmptyInput`] for an
///   empty collection, or [`Error::InvalidShape`] if the first element is
///   positional but not of length 2
///
/// # Examples
///
/// ```
/// use array_correl::{Element, Error, Pair, inspect};
///
/// let positional: Vec<Element<f64>> = vec![[1.0, 2.0].into(), [2.0, 4.0].into(), [3.0, 7.0].into()];
/// let keyed: Vec<Element<f64>> = vec![
///     Pair::new(1.0, 2.0).into(),
///     Pair::new(2.0, 4.0).into(),
///     Pair::new(3.0, 7.0).into(),
/// ];
///
/// let stats = inspect(&positional).unwrap();
/// assert_eq!(stats, inspect(&keyed).unwrap());
/// assert_eq!(stats.x_mean, Some(2.0));
/// assert_eq!(stats.y_extent, Some([2.0, 7.0]));
///
/// let malformed = vec![Element::Positional(vec![1.0, 2.0, 3.0])];
/// assert_eq!(inspect(&malformed), Err(Error::InvalidShape { index: 0, len: 3 }));
/// ```
pub fn inspect<T: Float>(input: &[Element<T>]) -> Result<Inspection<T>> {
    let first = input.first().ok_or(Error::EmptyInput)?;
    if first.len() != 2 {
        return Err(Error::InvalidShape {
            index: 0,
            len: first.len(),
        });
    }

    let shape = first.shape();
    if let Some(index) = input.iter().position(|e| e.shape() != shape) {
        log::warn!("element at index {index} does not match the {shape:?} shape of element 0");
    }

    let (x, y): (Vec<T>, Vec<T>) = input
        .iter()
        .map(|element| {
            let Pair { x, y } = shape.read(element);
            (x, y)
        })
        .unzip();

    Ok(summarize(&x, &y))
}

/// Inspects pairs already in keyed form, such as generator output
///
/// An empty slice is not an error here; it yields a NaN `r` and `None` for
/// every other statistic.
///
/// # Arguments
///
/// * `pairs` - The pairs to inspect
///
/// # Returns
///
/// * `Inspection<T>` - The statistics
pub fn inspect_pairs<T: Float>(pairs: &[Pair<T>]) -> Inspection<T> {
    let (x, y): (Vec<T>, Vec<T>) = pairs.iter().map(|&p| p.into()).unzip();
    summarize(&x, &y)
}

fn summarize<T: Float>(x: &[T], y: &[T]) -> Inspection<T> {
    let (x_moments, x_extent) = describe(x);
    let (y_moments, y_extent) = describe(y);

    Inspection {
        r: pearson(x, y).r,
        x_mean: x_moments.mean(),
        y_mean: y_moments.mean(),
        x_deviation: x_moments.deviation(),
        y_deviation: y_moments.deviation(),
        x_extent: x_extent.get(),
        y_extent: y_extent.get(),
    }
}

fn describe<T: Float>(values: &[T]) -> (Moments<T>, Extent<T>) {
    let mut moments = Moments::new();
    let mut extent = Extent::new();
    for &value in values {
        moments.next(value);
        extent.next(value);
    }
    (moments, extent)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    const VALUES: [[f64; 2]; 8] = [
        [2.0, 1.0],
        [4.0, 3.0],
        [6.0, 2.0],
        [8.0, 5.0],
        [10.0, 7.0],
        [1.5, -2.0],
        [-3.25, 0.5],
        [7.0, 6.5],
    ];

    fn positional() -> Vec<Element<f64>> {
        VALUES.iter().map(|&v| Element::from(v)).collect()
    }

    fn keyed() -> Vec<Element<f64>> {
        VALUES.iter().map(|&v| Element::from(Pair::from(v))).collect()
    }

    #[test]
    fn statistics_work() {
        let stats = inspect(&keyed()).unwrap();

        assert_approx_eq!(stats.r, 0.812_168_5, 1e-6);
        assert_approx_eq!(stats.x_mean.unwrap(), 4.40625, 1e-12);
        assert_approx_eq!(stats.y_mean.unwrap(), 2.875, 1e-12);
        assert_approx_eq!(stats.x_deviation.unwrap(), 4.250_919, 1e-6);
        assert_approx_eq!(stats.y_deviation.unwrap(), 3.125_357, 1e-6);
        assert_eq!(stats.x_extent, Some([-3.25, 10.0]));
        assert_eq!(stats.y_extent, Some([-2.0, 7.0]));
    }

    #[test]
    fn shapes_are_equivalent() {
        let a = inspect(&positional()).unwrap();
        let b = inspect(&keyed()).unwrap();

        assert_eq!(a.r.to_bits(), b.r.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn keyed_pairs_match_elements() {
        let pairs: Vec<Pair<f64>> = VALUES.iter().map(|&v| Pair::from(v)).collect();
        assert_eq!(inspect_pairs(&pairs), inspect(&keyed()).unwrap());
    }

    #[test]
    fn inspection_is_idempotent_and_pure() {
        let input = positional();
        let before = input.clone();

        let first = inspect(&input).unwrap();
        let second = inspect(&input).unwrap();

        assert_eq!(first, second);
        assert_eq!(input, before);
    }

    #[test]
    fn empty_input_fails() {
        let empty: Vec<Element<f64>> = vec![];
        assert_eq!(inspect(&empty), Err(Error::EmptyInput));
    }

    #[test]
    fn malformed_first_element_fails() {
        let input = vec![Element::Positional(vec![1.0, 2.0, 3.0])];
        assert_eq!(
            inspect(&input),
            Err(Error::InvalidShape { index: 0, len: 3 })
        );

        let input = vec![Element::Positional(vec![1.0]), [2.0, 3.0].into()];
        assert_eq!(
            inspect(&input),
            Err(Error::InvalidShape { index: 0, len: 1 })
        );
    }

    #[test]
    fn malformed_later_element_is_absorbed() {
        let input: Vec<Element<f64>> = vec![
            [1.0, 2.0].into(),
            [2.0, 4.0].into(),
            Element::Positional(vec![3.0]),
            Element::Positional(vec![4.0, 8.0, 99.0]),
        ];
        let stats = inspect(&input).unwrap();

        assert!(stats.r.is_nan());
        assert_eq!(stats.x_mean, Some(2.5));
        assert_eq!(stats.x_extent, Some([1.0, 4.0]));
        assert_eq!(stats.y_mean, Some(14.0 / 3.0));
        assert_eq!(stats.y_extent, Some([2.0, 8.0]));
    }

    #[test]
    fn mixed_shapes_read_as_nan() {
        let input: Vec<Element<f64>> = vec![
            Pair::new(1.0, 1.0).into(),
            Pair::new(3.0, 2.0).into(),
            [100.0, 100.0].into(),
        ];
        let stats = inspect(&input).unwrap();

        assert!(stats.r.is_nan());
        assert_eq!(stats.x_mean, Some(2.0));
        assert_eq!(stats.y_extent, Some([1.0, 2.0]));
    }

    #[test]
    fn single_element_has_no_deviation() {
        let input: Vec<Element<f64>> = vec![[5.0, -1.0].into()];
        let stats = inspect(&input).unwrap();

        assert!(stats.r.is_nan());
        assert_eq!(stats.x_mean, Some(5.0));
        assert_eq!(stats.x_deviation, None);
        assert_eq!(stats.y_deviation, None);
        assert_eq!(stats.x_extent, Some([5.0, 5.0]));
    }

    #[test]
    fn constant_axis_has_nan_correlation() {
        let pairs = [Pair::new(1.0, 4.0), Pair::new(2.0, 4.0), Pair::new(3.0, 4.0)];
        let stats = inspect_pairs(&pairs);

        assert!(stats.r.is_nan());
        assert_eq!(stats.y_deviation, Some(0.0));
    }

    #[test]
    fn inexact_constant_axis_has_nan_correlation() {
        for (c, n) in [(0.1, 10_u32), (100.1, 3), (1.0 / 3.0, 100)] {
            let pairs: Vec<Pair<f64>> = (0..n).map(|i| Pair::new(c, f64::from(i))).collect();
            let stats = inspect_pairs(&pairs);

            assert!(stats.r.is_nan());
            assert_eq!(stats.x_deviation, Some(0.0));
            assert_eq!(stats.x_extent, Some([c, c]));
        }
    }

        #[test]
    fn empty_pairs_are_undefined() {
        let stats = inspect_pairs::<f64>(&[]);

        assert!(stats.r.is_nan());
        assert_eq!(stats.x_mean, None);
        assert_eq!(stats.x_deviation, None);
        assert_eq!(stats.x_extent, None);
    }
}
