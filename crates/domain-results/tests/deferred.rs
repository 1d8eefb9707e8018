//! Deferred factories must resolve to exactly what their synchronous twins
//! return, without ever suspending.

use std::future::Ready;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use domain_results::{DomainResult, OperationStatus, ValidationFailure, ValueResult};
use rstest::rstest;

fn failures() -> [ValidationFailure; 2] {
    [
        ValidationFailure::new("Required").with_members(["Name"]),
        ValidationFailure::new("Too short"),
    ]
}

#[rstest]
#[case::explicit(
    DomainResult::new_deferred(OperationStatus::Conflict, ["a", "b"]),
    DomainResult::new(OperationStatus::Conflict, ["a", "b"])
)]
#[case::success(DomainResult::success_deferred(), DomainResult::success())]
#[case::not_found(DomainResult::not_found_deferred("x"), DomainResult::not_found("x"))]
#[case::not_found_absent(
    DomainResult::not_found_deferred(None::<&str>),
    DomainResult::not_found(None::<&str>)
)]
#[case::not_found_all(
    DomainResult::not_found_all_deferred(["1", "2"]),
    DomainResult::not_found_all(["1", "2"])
)]
#[case::unauthorized(
    DomainResult::unauthorized_deferred("1"),
    DomainResult::unauthorized("1")
)]
#[case::conflict(DomainResult::conflict_deferred("1"), DomainResult::conflict("1"))]
#[case::failed(DomainResult::failed_deferred(""), DomainResult::failed(""))]
#[case::failed_all(
    DomainResult::failed_all_deferred(["1", "2"]),
    DomainResult::failed_all(["1", "2"])
)]
#[case::failed_validation(
    DomainResult::failed_validation_deferred(failures()),
    DomainResult::failed_validation(failures())
)]
#[case::critical(
    DomainResult::critical_dependency_error_deferred("db down"),
    DomainResult::critical_dependency_error("db down")
)]
#[tokio::test]
async fn base_deferred_matches_sync(
    #[case] deferred: Ready<DomainResult>,
    #[case] expected: DomainResult,
) {
    assert_eq!(deferred.await, expected);
}

#[rstest]
#[case::success(ValueResult::success_deferred(10), ValueResult::success(10))]
#[case::not_found(ValueResult::not_found_deferred("1"), ValueResult::not_found("1"))]
#[case::not_found_all(
    ValueResult::not_found_all_deferred(["1", "2"]),
    ValueResult::not_found_all(["1", "2"])
)]
#[case::unauthorized(
    ValueResult::unauthorized_deferred("1"),
    ValueResult::unauthorized("1")
)]
#[case::conflict(ValueResult::conflict_deferred("1"), ValueResult::conflict("1"))]
#[case::failed(ValueResult::failed_deferred("1"), ValueResult::failed("1"))]
#[case::failed_all(
    ValueResult::failed_all_deferred(["1", "2"]),
    ValueResult::failed_all(["1", "2"])
)]
#[case::failed_validation(
    ValueResult::failed_validation_deferred(failures()),
    ValueResult::failed_validation(failures())
)]
#[case::critical(
    ValueResult::critical_dependency_error_deferred("1"),
    ValueResult::critical_dependency_error("1")
)]
#[tokio::test]
async fn value_deferred_matches_sync(
    #[case] deferred: Ready<ValueResult<i32>>,
    #[case] expected: ValueResult<i32>,
) {
    assert_eq!(deferred.await, expected);
}

#[rstest]
fn deferred_results_are_ready_on_first_poll() {
    let mut cx = Context::from_waker(Waker::noop());
    let mut deferred = pin!(DomainResult::conflict_deferred("taken"));

    match deferred.as_mut().poll(&mut cx) {
        Poll::Ready(result) => assert_eq!(result, DomainResult::conflict("taken")),
        Poll::Pending => panic!("deferred results must never suspend"),
    }
}
