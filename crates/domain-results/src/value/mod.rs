//! Domain results that carry a success payload.

use std::borrow::Borrow;

use serde::Serialize;

use crate::{DomainOutcome, DomainResult, IntoMessage, OperationStatus, ValidationFailure};

/// A [`DomainResult`] that also carries a payload on success.
///
/// The payload is reachable only when the status is
/// [`OperationStatus::Success`]; failure results hold no value at all, so
/// there is no default payload to read by mistake.
///
/// Any bare `T` converts into a successful result, as sugar for
/// [`ValueResult::success`]:
///
/// ```
/// use domain_results::ValueResult;
///
/// fn answer() -> ValueResult<u32> {
///     42.into()
/// }
///
/// let result = answer();
/// assert!(result.is_success());
/// assert_eq!(result.value(), Some(&42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValueResult<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
    #[serde(flatten)]
    outcome: DomainResult,
}

impl<T> ValueResult<T> {
    pub(crate) const fn from_outcome_unchecked(outcome: DomainResult) -> Self {
        Self {
            value: None,
            outcome,
        }
    }

    /// Successful outcome holding `value`.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self {
            value: Some(value),
            outcome: DomainResult::success(),
        }
    }

    /// The addressed resource does not exist.
    #[must_use]
    pub fn not_found(message: impl IntoMessage) -> Self {
        Self::from_outcome_unchecked(DomainResult::not_found(message))
    }

    /// The addressed resource does not exist, with several messages.
    #[must_use]
    pub fn not_found_all<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::from_outcome_unchecked(DomainResult::not_found_all(messages))
    }

    /// The caller is not allowed to perform the operation.
    #[must_use]
    pub fn unauthorized(message: impl IntoMessage) -> Self {
        Self::from_outcome_unchecked(DomainResult::unauthorized(message))
    }

    /// The operation conflicts with the current state.
    #[must_use]
    pub fn conflict(message: impl IntoMessage) -> Self {
        Self::from_outcome_unchecked(DomainResult::conflict(message))
    }

    /// The operation failed on caller input.
    #[must_use]
    pub fn failed(error: impl IntoMessage) -> Self {
        Self::from_outcome_unchecked(DomainResult::failed(error))
    }

    /// The operation failed on caller input, with several messages.
    #[must_use]
    pub fn failed_all<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::from_outcome_unchecked(DomainResult::failed_all(errors))
    }

    /// The operation failed validation; one message per failure.
    #[must_use]
    pub fn failed_validation<I>(failures: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<ValidationFailure>,
    {
        Self::from_outcome_unchecked(DomainResult::failed_validation(failures))
    }

    /// An upstream dependency the operation relies on failed.
    #[must_use]
    pub fn critical_dependency_error(error: impl IntoMessage) -> Self {
        Self::from_outcome_unchecked(DomainResult::critical_dependency_error(error))
    }

    /// The payload, present only on success.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Outcome of the operation.
    #[must_use]
    pub const fn status(&self) -> OperationStatus {
        self.outcome.status()
    }

    /// Error messages in the order they were supplied.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        self.outcome.errors()
    }

    /// `true` iff the status is [`OperationStatus::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Borrowed view of the same outcome without the payload.
    #[must_use]
    pub const fn outcome(&self) -> &DomainResult {
        &self.outcome
    }

    /// Splits the result into its payload and a payload-free view.
    ///
    /// # Examples
    /// ```
    /// use domain_results::{OperationStatus, ValueResult};
    ///
    /// let (value, details) = ValueResult::success(10).into_parts();
    /// assert_eq!(value, Some(10));
    /// assert_eq!(details.status(), OperationStatus::Success);
    /// ```
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, DomainResult) {
        (self.value, self.outcome)
    }

    /// Transforms the payload, keeping status and errors.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ValueResult<U>
    where
        F: FnOnce(T) -> U,
    {
        ValueResult {
            value: self.value.map(f),
            outcome: self.outcome,
        }
    }
}

impl<T> From<T> for ValueResult<T> {
    fn from(value: T) -> Self {
        Self::success(value)
    }
}

impl<T> From<ValueResult<T>> for (Option<T>, DomainResult) {
    fn from(result: ValueResult<T>) -> Self {
        result.into_parts()
    }
}

impl<T> DomainOutcome for ValueResult<T> {
    fn status(&self) -> OperationStatus {
        self.outcome.status()
    }

    fn errors(&self) -> &[String] {
        self.outcome.errors()
    }
}
