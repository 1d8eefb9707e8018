//! Bridges between domain results and `Result`-based control flow.
//!
//! Service code that prefers `?` can convert a result with `into_result`,
//! propagate [`DomainFailure`], and turn it back into a result at the
//! boundary.

use thiserror::Error;

use crate::{DomainOutcome, DomainResult, OperationStatus, ValueResult};

/// A non-success domain outcome, usable as a `std::error::Error`.
///
/// # Examples
/// ```
/// use domain_results::{DomainFailure, DomainResult, OperationStatus, ValueResult};
///
/// fn load(id: u32) -> Result<String, DomainFailure> {
///     let found: ValueResult<String> = if id == 1 {
///         "ada".to_owned().into()
///     } else {
///         ValueResult::not_found(format!("user {id}"))
///     };
///     found.into_result()
/// }
///
/// assert_eq!(load(1).as_deref(), Ok("ada"));
/// let failure = load(2).unwrap_err();
/// assert_eq!(failure.to_string(), "domain operation failed with not_found: user 2");
/// assert_eq!(DomainResult::from(failure).status(), OperationStatus::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("domain operation failed with {outcome}")]
pub struct DomainFailure {
    outcome: DomainResult,
}

impl DomainFailure {
    /// Payload-free view of the failed outcome.
    #[must_use]
    pub const fn outcome(&self) -> &DomainResult {
        &self.outcome
    }

    /// Moves the failure into a typed result slot.
    #[must_use]
    pub fn into_value_result<T>(self) -> ValueResult<T> {
        ValueResult::from_failure(self)
    }
}

impl DomainOutcome for DomainFailure {
    fn status(&self) -> OperationStatus {
        self.outcome.status()
    }

    fn errors(&self) -> &[String] {
        self.outcome.errors()
    }
}

impl From<DomainFailure> for DomainResult {
    fn from(failure: DomainFailure) -> Self {
        failure.outcome
    }
}

/// Errors raised when moving an outcome into a [`ValueResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueConversionError {
    /// A successful outcome cannot become a value result without a payload.
    #[error("successful outcome carries no value to move into a value result")]
    MissingValue,
}

impl DomainResult {
    /// Converts into `Ok(())` on success, otherwise [`DomainFailure`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainFailure`] wrapping this result when the status is not
    /// [`OperationStatus::Success`].
    pub fn into_result(self) -> Result<(), DomainFailure> {
        if self.is_success() {
            Ok(())
        } else {
            Err(DomainFailure { outcome: self })
        }
    }
}

impl<T> ValueResult<T> {
    /// Rebuilds a payload-free result from a propagated failure.
    #[must_use]
    pub fn from_failure(failure: DomainFailure) -> Self {
        Self::from_outcome_unchecked(failure.outcome)
    }

    /// Carries a failed outcome over into a typed result.
    ///
    /// # Errors
    ///
    /// Returns [`ValueConversionError::MissingValue`] when `outcome` is a
    /// success, since there is no payload to attach.
    pub fn try_from_outcome(outcome: DomainResult) -> Result<Self, ValueConversionError> {
        if outcome.is_success() {
            return Err(ValueConversionError::MissingValue);
        }
        Ok(Self::from_outcome_unchecked(outcome))
    }

    /// Converts into `Ok(value)` on success, otherwise [`DomainFailure`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainFailure`] carrying the status and errors when the
    /// status is not [`OperationStatus::Success`].
    pub fn into_result(self) -> Result<T, DomainFailure> {
        match self.into_parts() {
            (Some(value), outcome) if outcome.is_success() => Ok(value),
            (_, outcome) => Err(DomainFailure { outcome }),
        }
    }
}
