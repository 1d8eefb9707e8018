//! Intended HTTP status codes for each outcome, plus their configuration.
//!
//! Nothing here talks to an HTTP framework. Translators read the numeric
//! code and build whatever response their stack needs.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{DomainOutcome, OperationStatus};

/// `400 Bad Request`, the default code for [`OperationStatus::Failed`].
pub const BAD_REQUEST: u16 = 400;
/// `422 Unprocessable Entity`, the alternative code for failed input.
pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// Lookup from [`OperationStatus`] to its intended HTTP status code.
///
/// | Status | Code |
/// |---|---|
/// | `Success` | 204 |
/// | `Failed` | 400, or 422 via [`StatusCodeMap::unprocessable`] |
/// | `NotFound` | 404 |
/// | `Unauthorized` | 403 |
/// | `Conflict` | 409 |
/// | `CriticalDependencyError` | 503 |
///
/// # Examples
/// ```
/// use domain_results::{DomainResult, OperationStatus, StatusCodeMap};
///
/// let map = StatusCodeMap::default();
/// assert_eq!(map.code(OperationStatus::NotFound), 404);
/// assert_eq!(map.code_for(&DomainResult::failed("bad")), 400);
/// assert_eq!(StatusCodeMap::unprocessable().code(OperationStatus::Failed), 422);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCodeMap {
    failed: u16,
}

impl StatusCodeMap {
    /// Map that reports failed input as `422 Unprocessable Entity`.
    #[must_use]
    pub const fn unprocessable() -> Self {
        Self {
            failed: UNPROCESSABLE_ENTITY,
        }
    }

    /// Intended code for `status`.
    #[must_use]
    pub const fn code(&self, status: OperationStatus) -> u16 {
        match status {
            OperationStatus::Success => 204,
            OperationStatus::Failed => self.failed,
            OperationStatus::NotFound => 404,
            OperationStatus::Unauthorized => 403,
            OperationStatus::Conflict => 409,
            OperationStatus::CriticalDependencyError => 503,
        }
    }

    /// Intended code for an outcome, logging what is being translated.
    #[must_use]
    pub fn code_for<O>(&self, outcome: &O) -> u16
    where
        O: DomainOutcome + ?Sized,
    {
        let status = outcome.status();
        let code = self.code(status);
        if status == OperationStatus::CriticalDependencyError {
            warn!(
                %status,
                code,
                errors = ?outcome.errors(),
                "critical dependency failure translated"
            );
        } else {
            debug!(%status, code, "domain outcome translated");
        }
        code
    }
}

impl Default for StatusCodeMap {
    fn default() -> Self {
        Self {
            failed: BAD_REQUEST,
        }
    }
}

/// Errors raised when building a [`StatusCodeMap`] from settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusCodeSettingsError {
    /// Failed input may only be reported as 400 or 422.
    #[error("unsupported status code for failed outcomes: {code} (expected 400 or 422)")]
    UnsupportedFailedStatus {
        /// The rejected code.
        code: u16,
    },
}

/// Status-code settings loaded via `OrthoConfig`.
///
/// Reads `DOMAIN_RESULTS_FAILED_STATUS_CODE` from the environment, the
/// `failed_status_code` key of a configuration file, or
/// `--failed-status-code`. Unconfigured settings report failed input as 400.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DOMAIN_RESULTS")]
pub struct StatusCodeSettings {
    /// Code reported for failed input.
    #[ortho_config(default = 400)]
    pub failed_status_code: u16,
}

impl Default for StatusCodeSettings {
    fn default() -> Self {
        Self {
            failed_status_code: BAD_REQUEST,
        }
    }
}

impl StatusCodeSettings {
    /// Builds the lookup table described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`StatusCodeSettingsError::UnsupportedFailedStatus`] when the
    /// configured code is neither 400 nor 422.
    pub const fn status_code_map(&self) -> Result<StatusCodeMap, StatusCodeSettingsError> {
        match self.failed_status_code {
            BAD_REQUEST => Ok(StatusCodeMap {
                failed: BAD_REQUEST,
            }),
            UNPROCESSABLE_ENTITY => Ok(StatusCodeMap::unprocessable()),
            code => Err(StatusCodeSettingsError::UnsupportedFailedStatus { code }),
        }
    }
}
