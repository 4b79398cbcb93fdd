use num_traits::Float;

/// Converts a constant into `T`, yielding NaN if it is not representable
///
/// # Arguments
///
/// * `value` - The constant to convert
///
/// # Returns
///
/// * `T` - The converted value
#[inline]
pub fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Parses a textual argument as a finite real number
///
/// Surrounding whitespace is ignored. Text that does not parse, or parses to
/// an infinite or NaN value once converted into `T`, yields `None`.
///
/// # Arguments
///
/// * `text` - The argument text
///
/// # Returns
///
/// * `Option<T>` - The parsed value, or `None` if it is not a finite number
pub fn parse_finite<T: Float>(text: &str) -> Option<T> {
    text.trim()
        .parse::<f64>()
        .ok()
        .and_then(T::from)
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_finite_works() {
        assert_eq!(parse_finite::<f64>(" 0.5 "), Some(0.5));
        assert_eq!(parse_finite::<f64>("-12"), Some(-12.0));
        assert_eq!(parse_finite::<f64>("1e3"), Some(1000.0));
        assert_eq!(parse_finite::<f64>("abc"), None);
        assert_eq!(parse_finite::<f64>(""), None);
        assert_eq!(parse_finite::<f64>("12abc"), None);
        assert_eq!(parse_finite::<f64>("inf"), None);
        assert_eq!(parse_finite::<f64>("NaN"), None);
        assert_eq!(parse_finite::<f32>("1e300"), None);
    }

    #[test]
    fn cast_works() {
        assert_eq!(cast::<f64>(0.25), 0.25);
        assert_eq!(cast::<f32>(0.25), 0.25_f32);
    }
}
