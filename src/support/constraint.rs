//! Type-level numeric constraints checked at construction time.
//!
//! A [`Constrained<T, C>`] wraps a value that has been verified against the
//! marker constraint `C` when it was built. After construction the wrapper
//! has no runtime cost; the type records that the check already happened.
//!
//! Two constraints are provided, matching what the plant models need:
//!
//! - [`StrictlyPositive`]: greater than zero.
//! - [`UnitIntervalLowerOpen`]: in the interval `0 < x <= 1`.
//!
//! Custom invariants can be added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod strictly_positive;
mod unit_interval_lower_open;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval_lower_open::UnitIntervalLowerOpen;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must be greater than zero")]
    NotPositive,
    #[error("value is outside the required interval")]
    OutOfInterval,
    #[error("value is not a number")]
    NotANumber,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types or your own
/// [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use isru_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let x = Constrained::<f64, StrictlyPositive>::new(0.72).unwrap();
/// assert_eq!(x.into_inner(), 0.72);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
