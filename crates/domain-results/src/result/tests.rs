//! Tests for the payload-free result factories and their serialised form.

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;

fn build_with_message(status: OperationStatus, message: Option<&str>) -> DomainResult {
    match status {
        OperationStatus::NotFound => DomainResult::not_found(message),
        OperationStatus::Unauthorized => DomainResult::unauthorized(message),
        OperationStatus::Conflict => DomainResult::conflict(message),
        OperationStatus::Failed => DomainResult::failed(message),
        OperationStatus::CriticalDependencyError => {
            DomainResult::critical_dependency_error(message)
        }
        OperationStatus::Success => DomainResult::success(),
    }
}

#[fixture]
fn validation_failures() -> Vec<ValidationFailure> {
    vec![
        ValidationFailure::new("Required").with_members(["Name"]),
        ValidationFailure::new("Required"),
        ValidationFailure::new("Out of range").with_members(["Min", "Max"]),
    ]
}

#[rstest]
fn success_has_no_errors() {
    let result = DomainResult::success();
    assert!(result.is_success());
    assert_eq!(result.status(), OperationStatus::Success);
    assert!(result.errors().is_empty());
}

#[rstest]
fn single_message_factories(
    #[values(
        OperationStatus::NotFound,
        OperationStatus::Unauthorized,
        OperationStatus::Conflict,
        OperationStatus::Failed,
        OperationStatus::CriticalDependencyError
    )]
    status: OperationStatus,
    #[values(None, Some(""), Some("x"), Some(" padded "))] message: Option<&str>,
) {
    let result = build_with_message(status, message);

    assert_eq!(result.status(), status);
    assert!(!result.is_success());
    match message.filter(|m| !m.is_empty()) {
        Some(m) => assert_eq!(result.errors(), [m]),
        None => assert!(result.errors().is_empty()),
    }
}

#[rstest]
fn sequence_factories_keep_order_duplicates_and_empties() {
    let messages = ["b", "a", "", "b"];

    let not_found = DomainResult::not_found_all(messages);
    assert_eq!(not_found.status(), OperationStatus::NotFound);
    assert_eq!(not_found.errors(), messages);

    let failed = DomainResult::failed_all(messages.map(String::from));
    assert_eq!(failed.status(), OperationStatus::Failed);
    assert_eq!(failed.errors(), messages);
}

#[rstest]
fn sequence_factories_read_lazy_iterators_once() {
    let mut calls = 0;
    let result = DomainResult::failed_all((1..=3).map(|n| {
        calls += 1;
        n.to_string()
    }));
    assert_eq!(calls, 3);
    assert_eq!(result.errors(), ["1", "2", "3"]);
}

#[rstest]
fn empty_sequence_still_fails() {
    let result = DomainResult::failed_all(Vec::<String>::new());
    assert!(!result.is_success());
    assert!(result.errors().is_empty());
}

#[rstest]
fn validation_failures_render_one_message_each(validation_failures: Vec<ValidationFailure>) {
    let expected = ["Required (Name)", "Required", "Out of range (Min, Max)"];

    let by_ref = DomainResult::failed_validation(&validation_failures);
    let owned = DomainResult::failed_validation(validation_failures);

    assert_eq!(owned.status(), OperationStatus::Failed);
    assert_eq!(owned.errors(), expected);
    assert_eq!(by_ref, owned);
}

#[rstest]
fn explicit_constructor_accepts_any_pairing() {
    let result = DomainResult::new(OperationStatus::Conflict, ["a", "b"]);
    assert_eq!(result.status(), OperationStatus::Conflict);
    assert_eq!(result.errors(), ["a", "b"]);
    assert_eq!(result.clone().into_errors(), vec!["a", "b"]);
}

#[rstest]
fn default_is_success() {
    assert_eq!(DomainResult::default(), DomainResult::success());
}

#[rstest]
fn display_joins_errors() {
    assert_eq!(DomainResult::success().to_string(), "success");
    assert_eq!(
        DomainResult::not_found_all(["a", "b"]).to_string(),
        "not_found: a; b"
    );
}

#[rstest]
fn serialises_status_and_errors() {
    let value = serde_json::to_value(DomainResult::conflict("taken"))
        .unwrap_or_else(|err| panic!("result serialises: {err}"));
    assert_eq!(value, json!({ "status": "conflict", "errors": ["taken"] }));
}

#[rstest]
fn display_joins_messages_verbatim() {
    let result = DomainResult::failed_all(["a; b", "c"]);
    assert_eq!(result.to_string(), "failed: a; b; c");
    assert_eq!(result.errors(), ["a; b", "c"]);
}
