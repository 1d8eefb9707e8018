//! Shared read-only contract over every result shape.

use crate::OperationStatus;

/// Read access to the status and error messages of a domain outcome.
///
/// Implemented by [`crate::DomainResult`], [`crate::ValueResult`] and
/// [`crate::DomainFailure`], so translators can accept any of them without
/// caring whether a payload is attached.
///
/// # Examples
/// ```
/// use domain_results::{DomainOutcome, DomainResult, OperationStatus, ValueResult};
///
/// fn describe(outcome: &dyn DomainOutcome) -> String {
///     format!("{} ({} errors)", outcome.status(), outcome.errors().len())
/// }
///
/// assert_eq!(describe(&DomainResult::not_found("gone")), "not_found (1 errors)");
/// assert_eq!(describe(&ValueResult::success(7)), "success (0 errors)");
/// ```
pub trait DomainOutcome {
    /// Outcome of the operation.
    fn status(&self) -> OperationStatus;

    /// Human-readable messages, in the order they were supplied.
    fn errors(&self) -> &[String];

    /// `true` iff [`DomainOutcome::status`] is [`OperationStatus::Success`].
    fn is_success(&self) -> bool {
        self.status().is_success()
    }
}
