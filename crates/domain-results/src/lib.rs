//! Transport-agnostic results for domain operations.
//!
//! A domain operation reports its outcome as data rather than as a fault.
//! This crate models that outcome so an inbound adapter can translate it into
//! an HTTP response, a WebSocket frame, or any other envelope later on.
//!
//! # Overview
//!
//! - [`OperationStatus`]: the closed set of outcomes.
//! - [`DomainResult`]: status plus ordered error messages.
//! - [`ValueResult`]: the same, carrying a payload on success.
//! - [`DomainOutcome`]: read-only contract shared by both shapes.
//! - `*_deferred` factories: already-resolved futures for async call chains.
//! - [`DomainFailure`]: bridge to `Result` and the `?` operator.
//! - [`StatusCodeMap`]: the intended HTTP status code for each outcome.
//!
//! # Example
//!
//! ```
//! use domain_results::{OperationStatus, ValidationFailure, ValueResult};
//!
//! fn register(name: &str) -> ValueResult<u64> {
//!     if name.is_empty() {
//!         return ValueResult::failed_validation([
//!             ValidationFailure::new("Required").with_members(["Name"]),
//!         ]);
//!     }
//!     42.into()
//! }
//!
//! let rejected = register("");
//! assert_eq!(rejected.status(), OperationStatus::Failed);
//! assert_eq!(rejected.errors(), ["Required (Name)"]);
//!
//! let (id, details) = register("ada").into_parts();
//! assert_eq!(id, Some(42));
//! assert!(details.is_success());
//! ```

mod deferred;
mod failure;
mod message;
mod outcome;
mod result;
mod status;
mod status_code;
mod validation;
mod value;

pub use failure::{DomainFailure, ValueConversionError};
pub use message::IntoMessage;
pub use outcome::DomainOutcome;
pub use result::DomainResult;
pub use status::OperationStatus;
pub use status_code::{
    BAD_REQUEST, StatusCodeMap, StatusCodeSettings, StatusCodeSettingsError, UNPROCESSABLE_ENTITY,
};
pub use validation::ValidationFailure;
pub use value::ValueResult;
