//! The payload-free domain result and its factories.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::message::collect_messages;
use crate::{DomainOutcome, IntoMessage, OperationStatus, ValidationFailure};

/// Immutable record of a domain operation's outcome.
///
/// Holds the [`OperationStatus`] and zero or more human-readable error
/// messages. Build one through the outcome-named factories; the factories
/// never pair [`OperationStatus::Success`] with error messages.
///
/// ## Invariants
/// - `errors` keeps the order messages were supplied in, duplicates included.
/// - A single optional message that is absent or empty yields no errors.
///
/// # Examples
/// ```
/// use domain_results::{DomainResult, OperationStatus};
///
/// let result = DomainResult::conflict("email already registered");
/// assert_eq!(result.status(), OperationStatus::Conflict);
/// assert_eq!(result.errors(), ["email already registered"]);
/// assert!(!result.is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResult {
    status: OperationStatus,
    errors: Vec<String>,
}

impl DomainResult {
    /// Builds a result from an explicit status and message sequence.
    ///
    /// Intended for generic or bulk construction; prefer the outcome-named
    /// factories elsewhere. The sequence is copied as-is.
    #[must_use]
    pub fn new<I>(status: OperationStatus, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            status,
            errors: collect_messages(errors),
        }
    }

    fn with_message(status: OperationStatus, message: impl IntoMessage) -> Self {
        Self {
            status,
            errors: message.into_message().into_iter().collect(),
        }
    }

    /// Successful outcome with no errors.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            status: OperationStatus::Success,
            errors: Vec::new(),
        }
    }

    /// The addressed resource does not exist.
    #[must_use]
    pub fn not_found(message: impl IntoMessage) -> Self {
        Self::with_message(OperationStatus::NotFound, message)
    }

    /// The addressed resource does not exist, with several messages.
    #[must_use]
    pub fn not_found_all<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new(OperationStatus::NotFound, messages)
    }

    /// The caller is not allowed to perform the operation.
    #[must_use]
    pub fn unauthorized(message: impl IntoMessage) -> Self {
        Self::with_message(OperationStatus::Unauthorized, message)
    }

    /// The operation conflicts with the current state.
    #[must_use]
    pub fn conflict(message: impl IntoMessage) -> Self {
        Self::with_message(OperationStatus::Conflict, message)
    }

    /// The operation failed on caller input.
    #[must_use]
    pub fn failed(error: impl IntoMessage) -> Self {
        Self::with_message(OperationStatus::Failed, error)
    }

    /// The operation failed on caller input, with several messages.
    #[must_use]
    pub fn failed_all<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new(OperationStatus::Failed, errors)
    }

    /// The operation failed validation; one message per failure.
    ///
    /// # Examples
    /// ```
    /// use domain_results::{DomainResult, ValidationFailure};
    ///
    /// let result = DomainResult::failed_validation([
    ///     ValidationFailure::new("Required").with_members(["Name"]),
    ///     ValidationFailure::new("Must be positive"),
    /// ]);
    /// assert_eq!(result.errors(), ["Required (Name)", "Must be positive"]);
    /// ```
    #[must_use]
    pub fn failed_validation<I>(failures: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<ValidationFailure>,
    {
        let errors: Vec<String> = failures
            .into_iter()
            .map(|failure| failure.borrow().to_string())
            .collect();
        debug!(
            failures = errors.len(),
            "validation failures folded into failed result"
        );
        Self {
            status: OperationStatus::Failed,
            errors,
        }
    }

    /// An upstream dependency the operation relies on failed.
    #[must_use]
    pub fn critical_dependency_error(error: impl IntoMessage) -> Self {
        Self::with_message(OperationStatus::CriticalDependencyError, error)
    }

    /// Outcome of the operation.
    #[must_use]
    pub const fn status(&self) -> OperationStatus {
        self.status
    }

    /// Error messages in the order they were supplied.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// `true` iff the status is [`OperationStatus::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Consumes the result and hands back its error messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl Default for DomainResult {
    fn default() -> Self {
        Self::success()
    }
}

impl DomainOutcome for DomainResult {
    fn status(&self) -> OperationStatus {
        self.status
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Renders `status` or `status: first; second` for logs.
///
/// Messages are joined verbatim, so a message that itself contains `"; "`
/// makes the output ambiguous. Use [`DomainResult::errors`] or the serde
/// form when the messages must be recovered.
impl fmt::Display for DomainResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        if !self.errors.is_empty() {
            write!(f, ": {}", self.errors.join("; "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
