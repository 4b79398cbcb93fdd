use num_traits::Float;

/// Running `[min, max]` of a sequence of values, skipping NaN
#[derive(Debug, Clone, Copy, Default)]
pub struct Extent<T> {
    bounds: Option<[T; 2]>,
}

impl<T: Float> Extent<T> {
    /// Creates an empty extent
    pub const fn new() -> Self {
        Self { bounds: None }
    }

    /// Widens the extent to include `value`, skipping NaN
    ///
    /// # Arguments
    ///
    /// * `value` - The value to include
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The extent
    pub fn next(&mut self, value: T) -> &mut Self {
        if value.is_nan() {
            return self;
        }

        self.bounds = Some(match self.bounds {
            None => [value, value],
            Some([min, max]) => [
                if value < min { value } else { min },
                if value > max { value } else { max },
            ],
        });
        self
    }

    /// Returns `[min, max]`, or `None` if no value was included
    pub const fn get(&self) -> Option<[T; 2]> {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_works() {
        let mut extent = Extent::new();
        assert_eq!(extent.get(), None);

        [3.0, -1.0, f64::NAN, 7.5, 2.0].iter().for_each(|v| {
            extent.next(*v);
        });
        assert_eq!(extent.get(), Some([-1.0, 7.5]));
    }

    #[test]
    fn only_nan_is_undefined() {
        let mut extent = Extent::new();
        extent.next(f64::NAN).next(f64::NAN);
        assert_eq!(extent.get(), None);
    }
}
