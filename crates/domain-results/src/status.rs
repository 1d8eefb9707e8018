//! Outcome statuses for domain operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of outcomes a domain operation can report.
///
/// Each variant documents the transport response it is intended to become.
/// The mapping is informative; see [`crate::StatusCodeMap`] for a ready-made
/// numeric table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    /// The operation completed. Intended as "success, no content" (204).
    Success,
    /// Generic client error or unprocessable input (400/422).
    Failed,
    /// The addressed resource does not exist (404).
    NotFound,
    /// The caller lacks the rights to perform the operation (403).
    Unauthorized,
    /// The operation conflicts with the current state (409).
    Conflict,
    /// An upstream dependency failed (503).
    CriticalDependencyError,
}

impl OperationStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Success,
        Self::Failed,
        Self::NotFound,
        Self::Unauthorized,
        Self::Conflict,
        Self::CriticalDependencyError,
    ];

    /// Stable `snake_case` identifier, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::NotFound => "not_found",
            Self::Unauthorized => "unauthorized",
            Self::Conflict => "conflict",
            Self::CriticalDependencyError => "critical_dependency_error",
        }
    }

    /// Returns `true` only for [`OperationStatus::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
