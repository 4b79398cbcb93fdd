use num_traits::Float;

use crate::Kbn;

/// Which input of [`pearson`] was longer, and by how many trailing items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncated {
    /// `x` was longer; its last `n` items were ignored
    X(usize),
    /// `y` was longer; its last `n` items were ignored
    Y(usize),
}

impl Truncated {
    /// Returns the number of ignored trailing items
    pub const fn ignored(&self) -> usize {
        match self {
            Self::X(n) | Self::Y(n) => *n,
        }
    }
}

/// Pearson correlation coefficient of two sequences
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation<T> {
    /// The coefficient, NaN when undefined
    pub r: T,
    /// Number of leading items paired up
    pub len: usize,
    /// Present when the inputs differed in length
    pub truncated: Option<Truncated>,
}

/// Computes the Pearson correlation coefficient of `x` and `y`
///
/// Uses the sum of products form
///
/// ```text
/// r = (n*Sxy - Sx*Sy) / sqrt((n*Sxx - Sx^2) * (n*Syy - Sy^2))
/// ```
///
/// over compensated sums, where `n` is the length of the shorter input. When
/// the inputs differ in length the tail of the longer one is ignored and a
/// warning is logged. A constant input, an empty input or a NaN item yields
/// NaN rather than an error. Constancy is checked on the values themselves,
/// since rounding can leave a residue in `n*Sxx - Sx^2` for values such as
/// `0.1`.
///
/// # Arguments
///
/// * `x` - Values on the x axis
/// * `y` - Values on the y axis
///
/// # Returns
///
/// * `Correlation<T>` - The coefficient and how the inputs were paired
///
/// # Examples
///
/// ```
/// use array_correl::{Truncated, pearson};
/// use assert_approx_eq::assert_approx_eq;
///
/// let x: [f64; 5] = [0.496714, -0.138264, 0.647689, 1.523030, -0.234153];
/// let y = [0.115991, -0.329650, 0.574363, 0.109481, -1.026366, 0.5];
///
/// let correlation = pearson(&x, &y);
/// assert_approx_eq!(correlation.r, 0.66566, 0.0001);
/// assert_eq!(correlation.len, 5);
/// assert_eq!(correlation.truncated, Some(Truncated::Y(1)));
/// ```
pub fn pearson<T: Float>(x: &[T], y: &[T]) -> Correlation<T> {
    let len = x.len().min(y.len());
    let truncated = match x.len().cmp(&y.len()) {
        core::cmp::Ordering::Equal => None,
        core::cmp::Ordering::Greater => Some(Truncated::X(x.len() - len)),
        core::cmp::Ordering::Less => Some(Truncated::Y(y.len() - len)),
    };

    match truncated {
        Some(Truncated::X(n)) => {
            log::warn!("x has more items in it, the last {n} item(s) will be ignored")
        }
        Some(Truncated::Y(n)) => {
            log::warn!("y has more items in it, the last {n} item(s) will be ignored")
        }
        None => {}
    }

    let mut sum_x = Kbn::<T>::default();
    let mut sum_y = Kbn::<T>::default();
    let mut sum_xy = Kbn::<T>::default();
    let mut sum_x2 = Kbn::<T>::default();
    let mut sum_y2 = Kbn::<T>::default();

    let (mut flat_x, mut flat_y) = (true, true);

    for (&xi, &yi) in x.iter().zip(y) {
        flat_x &= xi == x[0];
        flat_y &= yi == y[0];
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_x2 += xi * xi;
        sum_y2 += yi * yi;
    }

    if flat_x || flat_y {
        return Correlation {
            r: T::nan(),
            len,
            truncated,
        };
    }

    let r = T::from(len).map_or_else(T::nan, |n| {
        let (sx, sy) = (sum_x.total(), sum_y.total());
        let cov = n * sum_xy.total() - sx * sy;
        let var_x = n * sum_x2.total() - sx * sx;
        let var_y = n * sum_y2.total() - sy * sy;
        let denom = (var_x * var_y).sqrt();
        if denom.is_zero() { T::nan() } else { cov / denom }
    });

    Correlation { r, len, truncated }
}
