use alloc::vec::Vec;

use num_traits::Float;

/// An ordered `(x, y)` pair of values
///
/// This is the keyed form every inspected element is normalized into, and the
/// form produced by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pair<T> {
    /// Value on the x axis
    pub x: T,
    /// Value on the y axis
    pub y: T,
}

impl<T> Pair<T> {
    /// Creates a new pair
    ///
    /// # Arguments
    ///
    /// * `x` - Value on the x axis
    /// * `y` - Value on the y axis
    ///
    /// # Returns
    ///
    /// * `Self` - The pair
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Pair<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<[T; 2]> for Pair<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Pair<T>> for (T, T) {
    fn from(pair: Pair<T>) -> Self {
        (pair.x, pair.y)
    }
}

/// A single element of an inspected collection, in either accepted shape
///
/// Positional elements carry any number of values so that a malformed
/// element can be represented and rejected at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<T> {
    /// Element exposing named `x` and `y` fields
    Keyed(Pair<T>),
    /// Element given as an ordered sequence `[x, y]`
    Positional(Vec<T>),
}

impl<T> From<Pair<T>> for Element<T> {
    fn from(pair: Pair<T>) -> Self {
        Self::Keyed(pair)
    }
}

impl<T> From<[T; 2]> for Element<T> {
    fn from(values: [T; 2]) -> Self {
        Self::Positional(values.into())
    }
}

impl<T> From<Vec<T>> for Element<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Positional(values)
    }
}

impl<T> Element<T> {
    /// Returns the number of values the element carries, always 2 when keyed
    pub fn len(&self) -> usize {
        match self {
            Self::Keyed(_) => 2,
            Self::Positional(values) => values.len(),
        }
    }

    /// Returns the shape of this element
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Keyed(_) => Shape::Keyed,
            Self::Positional(_) => Shape::Positional,
        }
    }
}

/// Shape of an inspected collection, decided once from its first element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Elements expose `x` and `y` fields
    Keyed,
    /// Elements are `[x, y]` sequences
    Positional,
}

impl Shape {
    /// Reads an element as a pair under this shape
    ///
    /// An element of the other shape has neither `x`/`y` fields nor indices,
    /// so both of its values read as NaN. A positional element missing an
    /// index reads NaN for it; indices past the second are ignored.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to read
    ///
    /// # Returns
    ///
    /// * `Pair<T>` - The element in keyed form
    pub fn read<T: Float>(self, element: &Element<T>) -> Pair<T> {
        match (self, element) {
            (Self::Keyed, Element::Keyed(pair)) => *pair,
            (Self::Positional, Element::Positional(values)) => Pair {
                x: values.first().copied().unwrap_or_else(T::nan),
                y: values.get(1).copied().unwrap_or_else(T::nan),
            },
            _ => Pair {
                x: T::nan(),
                y: T::nan(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use super::*;

    #[test]
    fn conversions_work() {
        assert_eq!(Pair::from((1.0, 2.0)), Pair::new(1.0, 2.0));
        assert_eq!(Pair::from([3.0, 4.0]), Pair::new(3.0, 4.0));
        assert_eq!(<(f64, f64)>::from(Pair::new(5.0, 6.0)), (5.0, 6.0));
        assert_eq!(
            Element::from([1.0, 2.0]),
            Element::Positional(vec![1.0, 2.0])
        );
        assert_eq!(Element::from(Pair::new(1.0, 2.0)).shape(), Shape::Keyed);
        assert_eq!(Element::from(Pair::new(1.0, 2.0)).len(), 2);
        assert_eq!(Element::Positional(vec![1.0; 3]).len(), 3);
    }

    #[test]
    fn read_matching_shape() {
        let keyed = Element::Keyed(Pair::new(1.0, 2.0));
        let positional = Element::Positional(vec![3.0, 4.0, 5.0]);

        assert_eq!(Shape::Keyed.read(&keyed), Pair::new(1.0, 2.0));
        assert_eq!(Shape::Positional.read(&positional), Pair::new(3.0, 4.0));
    }

    #[test]
    fn read_short_positional_yields_nan() {
        let pair = Shape::Positional.read(&Element::Positional(vec![7.0_f64]));
        assert_eq!(pair.x, 7.0);
        assert!(pair.y.is_nan());
    }

    #[test]
    fn read_mismatched_shape_yields_nan() {
        let pair = Shape::Keyed.read(&Element::Positional(vec![1.0_f64, 2.0]));
        assert!(pair.x.is_nan() && pair.y.is_nan());

        let pair = Shape::Positional.read(&Element::Keyed(Pair::new(1.0_f64, 2.0)));
        assert!(pair.x.is_nan() && pair.y.is_nan());
    }
}
