use num_traits::{One, Zero};

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing membership of the lower-open unit interval
/// `0 < x <= 1`.
///
/// Process efficiencies and yield fractions that appear as divisors use this
/// constraint: zero is inadmissible, one is the ideal process.
///
/// # Examples
///
/// ```
/// use isru_models::support::constraint::UnitIntervalLowerOpen;
///
/// assert!(UnitIntervalLowerOpen::new(0.72).is_ok());
/// assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
/// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
/// assert!(UnitIntervalLowerOpen::new(1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Constructs a [`Constrained<T, UnitIntervalLowerOpen>`] if the value
    /// lies in `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside the interval or `NaN`.
    pub fn new<T: PartialOrd + Zero + One>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLowerOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLowerOpen>::new(value)
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.partial_cmp(&T::zero()).is_none() {
            return Err(ConstraintError::NotANumber);
        }
        if *value > T::zero() && *value <= T::one() {
            Ok(())
        } else {
            Err(ConstraintError::OutOfInterval)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_lower_open_upper_closed() {
        assert!(UnitIntervalLowerOpen::new(f64::MIN_POSITIVE).is_ok());
        assert!(UnitIntervalLowerOpen::new(1.0).is_ok());

        assert_eq!(
            UnitIntervalLowerOpen::new(0.0).unwrap_err(),
            ConstraintError::OutOfInterval
        );
        assert_eq!(
            UnitIntervalLowerOpen::new(1.0 + f64::EPSILON).unwrap_err(),
            ConstraintError::OutOfInterval
        );
        assert_eq!(
            UnitIntervalLowerOpen::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
