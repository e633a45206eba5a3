use crate::client::Response;
use crate::client::TransportError;
use crate::session::QuerySession;
use crate::session::RequestState;
use crate::session::SessionError;
use serde_json::json;
use std::sync::Arc;

fn session_with_known_identifiers(ids: &[&str]) -> QuerySession {
    let mut session = QuerySession::new();
    session.inject_known_identifiers(
        ids.iter().map(|id| id.to_string()).collect(),
    );
    session
}

fn transport_failure() -> TransportError {
    let malformed = serde_json::from_str::<Response>("not json").unwrap_err();
    TransportError::MalformedResponseBody(Arc::new(malformed))
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn student_request_requires_a_selection() {
    let mut session = QuerySession::new();

    assert_eq!(
        session.begin_student_request(),
        Err(SessionError::NoFieldsSelected {
            entity_name: "students",
        }),
    );
    assert_eq!(session.student_request_state(), &RequestState::Idle);
    assert_eq!(session.student_frozen_query(), None);
}

#[test]
fn breed_request_requires_an_identifier() {
    let mut session = session_with_known_identifiers(&["abys"]);
    session.toggle_breed_field("name").unwrap();

    assert_eq!(
        session.begin_breed_request(""),
        Err(SessionError::MissingIdentifier),
    );
    assert_eq!(
        session.begin_breed_request("   "),
        Err(SessionError::MissingIdentifier),
    );
    assert_eq!(session.breed_request_state(), &RequestState::Idle);
}

#[test]
fn breed_request_rejects_unknown_identifiers() {
    let mut session = session_with_known_identifiers(&["abys", "beng"]);
    session.toggle_breed_field("name").unwrap();

    assert_eq!(
        session.begin_breed_request("sphy"),
        Err(SessionError::UnknownIdentifier {
            identifier: "sphy".to_string(),
        }),
    );
    assert_eq!(session.breed_request_state(), &RequestState::Idle);
}

#[test]
fn known_identifier_match_is_case_sensitive() {
    let mut session = session_with_known_identifiers(&["abys"]);
    session.toggle_breed_field("name").unwrap();

    assert!(matches!(
        session.begin_breed_request("ABYS"),
        Err(SessionError::UnknownIdentifier { .. }),
    ));
}

#[test]
fn breed_request_requires_a_selection() {
    let mut session = session_with_known_identifiers(&["abys"]);

    assert_eq!(
        session.begin_breed_request("abys"),
        Err(SessionError::NoFieldsSelected {
            entity_name: "catBreed",
        }),
    );
}

#[test]
fn toggling_an_undefined_field_is_an_error() {
    let mut session = QuerySession::new();

    assert!(matches!(
        session.toggle_student_field("favoriteColor"),
        Err(SessionError::Selection(_)),
    ));
    assert!(session.student_selection().is_empty());
}

// =============================================================================
// State machine
// =============================================================================

#[test]
fn begin_transitions_to_loading_and_freezes_the_query() {
    let mut session = QuerySession::new();
    session.toggle_student_field("name").unwrap();
    session.toggle_student_field("career").unwrap();

    let pending = session.begin_student_request().unwrap();

    assert!(session.student_request_state().is_loading());
    assert_eq!(pending.query(), session.student_query_preview());
    assert_eq!(session.student_frozen_query(), Some(pending.query()));
    assert_eq!(pending.variables(), None);
}

#[test]
fn frozen_query_survives_later_selection_edits() {
    let mut session = QuerySession::new();
    session.toggle_student_field("name").unwrap();

    let pending = session.begin_student_request().unwrap();
    let frozen = session.student_frozen_query().unwrap().to_string();

    session.toggle_student_field("career").unwrap();
    session.complete_student_request(pending.seq(), Ok(None));

    assert_eq!(session.student_frozen_query(), Some(frozen.as_str()));
    assert_ne!(session.student_query_preview(), frozen);
}

#[test]
fn successful_completion_carries_the_envelope() {
    let mut session = QuerySession::new();
    session.toggle_student_field("name").unwrap();

    let pending = session.begin_student_request().unwrap();
    let envelope: Response = serde_json::from_value(
        json!({"data": {"students": [{"name": "Ada"}]}}),
    ).unwrap();
    session.complete_student_request(pending.seq(), Ok(Some(envelope.clone())));

    assert_eq!(
        session.student_request_state(),
        &RequestState::Succeeded(Some(envelope)),
    );
    assert_eq!(session.student_error(), None);
}

#[test]
fn empty_body_succeeds_with_an_absent_envelope() {
    let mut session = QuerySession::new();
    session.toggle_student_field("name").unwrap();

    let pending = session.begin_student_request().unwrap();
    session.complete_student_request(pending.seq(), Ok(None));

    assert_eq!(
        session.student_request_state(),
        &RequestState::Succeeded(None),
    );
}

#[test]
fn transport_failure_fails_with_a_network_error_message() {
    let mut session = QuerySession::new();
    session.toggle_student_field("name").unwrap();

    let pending = session.begin_student_request().unwrap();
    session.complete_student_request(pending.seq(), Err(transport_failure()));

    match session.student_request_state() {
        RequestState::Failed(message) => {
            assert!(message.contains("network error"), "{message}");
        },
        other => panic!("Expected Failed, got {other:?}"),
    }
}

#[test]
fn envelope_errors_surface_without_overriding_success() {
    let mut session = QuerySession::new();
    session.toggle_student_field("name").unwrap();

    let pending = session.begin_student_request().unwrap();
    let envelope: Response = serde_json::from_value(
        json!({"errors": [{"message": "entity not found"}]}),
    ).unwrap();
    session.complete_student_request(pending.seq(), Ok(Some(envelope.clone())));

    assert_eq!(session.student_error(), Some("entity not found"));
    assert_eq!(
        session.student_request_state(),
        &RequestState::Succeeded(Some(envelope)),
    );
}

#[test]
fn only_the_first_envelope_error_is_surfaced() {
    let mut session = QuerySession::new();
    session.toggle_student_field("name").unwrap();

    let pending = session.begin_student_request().unwrap();
    let envelope: Response = serde_json::from_value(
        json!({"errors": [{"message": "first"}, {"message": "second"}]}),
    ).unwrap();
    session.complete_student_request(pending.seq(), Ok(Some(envelope)));

    assert_eq!(session.student_error(), Some("first"));
}

#[test]
fn a_new_request_clears_the_error_slot() {
    let mut session = QuerySession::new();
    session.toggle_student_field("name").unwrap();

    let pending = session.begin_student_request().unwrap();
    let envelope: Response = serde_json::from_value(
        json!({"errors": [{"message": "entity not found"}]}),
    ).unwrap();
    session.complete_student_request(pending.seq(), Ok(Some(envelope)));
    assert!(session.student_error().is_some());

    session.begin_student_request().unwrap();
    assert_eq!(session.student_error(), None);
    assert!(session.student_request_state().is_loading());
}

#[test]
fn flows_keep_independent_error_slots() {
    let mut session = session_with_known_identifiers(&["abys"]);
    session.toggle_student_field("name").unwrap();
    session.toggle_breed_field("name").unwrap();

    let student_pending = session.begin_student_request().unwrap();
    let breed_pending = session.begin_breed_request("abys").unwrap();

    let student_envelope: Response = serde_json::from_value(
        json!({"errors": [{"message": "students unavailable"}]}),
    ).unwrap();
    session.complete_student_request(
        student_pending.seq(),
        Ok(Some(student_envelope)),
    );
    session.complete_breed_request(breed_pending.seq(), Err(transport_failure()));

    assert_eq!(session.student_error(), Some("students unavailable"));
    assert!(session.breed_error().unwrap().contains("network error"));
    assert!(matches!(
        session.student_request_state(),
        RequestState::Succeeded(_),
    ));
    assert!(matches!(
        session.breed_request_state(),
        RequestState::Failed(_),
    ));
}

// =============================================================================
// Overlapping requests
// =============================================================================

#[test]
fn stale_resolutions_are_discarded() {
    let mut session = QuerySession::new();
    session.toggle_student_field("name").unwrap();

    let first = session.begin_student_request().unwrap();
    let second = session.begin_student_request().unwrap();
    assert!(second.seq() > first.seq());

    let second_envelope: Response = serde_json::from_value(
        json!({"data": {"students": []}}),
    ).unwrap();
    session.complete_student_request(
        second.seq(),
        Ok(Some(second_envelope.clone())),
    );

    // The first request resolves after the second; its outcome must not
    // overwrite the newer one.
    session.complete_student_request(first.seq(), Err(transport_failure()));

    assert_eq!(
        session.student_request_state(),
        &RequestState::Succeeded(Some(second_envelope)),
    );
    assert_eq!(session.student_error(), None);
}

#[test]
fn the_latest_request_still_applies_after_a_stale_discard() {
    let mut session = QuerySession::new();
    session.toggle_student_field("name").unwrap();

    let first = session.begin_student_request().unwrap();
    let second = session.begin_student_request().unwrap();

    session.complete_student_request(first.seq(), Ok(None));
    assert!(session.student_request_state().is_loading());

    session.complete_student_request(second.seq(), Ok(None));
    assert_eq!(
        session.student_request_state(),
        &RequestState::Succeeded(None),
    );
}

// =============================================================================
// By-id dispatches
// =============================================================================

#[test]
fn breed_request_binds_the_identifier_variable() {
    let mut session = session_with_known_identifiers(&["abys"]);
    session.toggle_breed_field("name").unwrap();

    let pending = session.begin_breed_request("abys").unwrap();

    assert_eq!(pending.variables(), Some(&json!({"id": "abys"})));
    assert!(pending.query().contains("catBreed(id: $id)"));
}
