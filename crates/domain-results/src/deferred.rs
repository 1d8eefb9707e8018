//! Already-completed futures for code inside an async call chain.
//!
//! Every factory has a `*_deferred` twin returning [`Ready`]. The future is
//! resolved on construction; awaiting it never suspends.

use std::borrow::Borrow;
use std::future::{Ready, ready};

use crate::{DomainResult, IntoMessage, OperationStatus, ValidationFailure, ValueResult};

impl DomainResult {
    /// [`DomainResult::new`], already resolved.
    pub fn new_deferred<I>(status: OperationStatus, errors: I) -> Ready<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        ready(Self::new(status, errors))
    }

    /// [`DomainResult::success`], already resolved.
    pub fn success_deferred() -> Ready<Self> {
        ready(Self::success())
    }

    /// [`DomainResult::not_found`], already resolved.
    pub fn not_found_deferred(message: impl IntoMessage) -> Ready<Self> {
        ready(Self::not_found(message))
    }

    /// [`DomainResult::not_found_all`], already resolved.
    pub fn not_found_all_deferred<I>(messages: I) -> Ready<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        ready(Self::not_found_all(messages))
    }

    /// [`DomainResult::unauthorized`], already resolved.
    pub fn unauthorized_deferred(message: impl IntoMessage) -> Ready<Self> {
        ready(Self::unauthorized(message))
    }

    /// [`DomainResult::conflict`], already resolved.
    pub fn conflict_deferred(message: impl IntoMessage) -> Ready<Self> {
        ready(Self::conflict(message))
    }

    /// [`DomainResult::failed`], already resolved.
    pub fn failed_deferred(error: impl IntoMessage) -> Ready<Self> {
        ready(Self::failed(error))
    }

    /// [`DomainResult::failed_all`], already resolved.
    pub fn failed_all_deferred<I>(errors: I) -> Ready<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        ready(Self::failed_all(errors))
    }

    /// [`DomainResult::failed_validation`], already resolved.
    pub fn failed_validation_deferred<I>(failures: I) -> Ready<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<ValidationFailure>,
    {
        ready(Self::failed_validation(failures))
    }

    /// [`DomainResult::critical_dependency_error`], already resolved.
    pub fn critical_dependency_error_deferred(error: impl IntoMessage) -> Ready<Self> {
        ready(Self::critical_dependency_error(error))
    }
}

impl<T> ValueResult<T> {
    /// [`ValueResult::success`], already resolved.
    ///
    /// # Examples
    /// ```
    /// use domain_results::ValueResult;
    ///
    /// async fn lookup() -> ValueResult<u32> {
    ///     ValueResult::success_deferred(7).await
    /// }
    /// # let _ = lookup();
    /// ```
    pub fn success_deferred(value: T) -> Ready<Self> {
        ready(Self::success(value))
    }

    /// [`ValueResult::not_found`], already resolved.
    pub fn not_found_deferred(message: impl IntoMessage) -> Ready<Self> {
        ready(Self::not_found(message))
    }

    /// [`ValueResult::not_found_all`], already resolved.
    pub fn not_found_all_deferred<I>(messages: I) -> Ready<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        ready(Self::not_found_all(messages))
    }

    /// [`ValueResult::unauthorized`], already resolved.
    pub fn unauthorized_deferred(message: impl IntoMessage) -> Ready<Self> {
        ready(Self::unauthorized(message))
    }

    /// [`ValueResult::conflict`], already resolved.
    pub fn conflict_deferred(message: impl IntoMessage) -> Ready<Self> {
        ready(Self::conflict(message))
    }

    /// [`ValueResult::failed`], already resolved.
    pub fn failed_deferred(error: impl IntoMessage) -> Ready<Self> {
        ready(Self::failed(error))
    }

    /// [`ValueResult::failed_all`], already resolved.
    pub fn failed_all_deferred<I>(errors: I) -> Ready<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        ready(Self::failed_all(errors))
    }

    /// [`ValueResult::failed_validation`], already resolved.
    pub fn failed_validation_deferred<I>(failures: I) -> Ready<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<ValidationFailure>,
    {
        ready(Self::failed_validation(failures))
    }

    /// [`ValueResult::critical_dependency_error`], already resolved.
    pub fn critical_dependency_error_deferred(error: impl IntoMessage) -> Ready<Self> {
        ready(Self::critical_dependency_error(error))
    }
}
