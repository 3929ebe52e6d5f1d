//! End-to-end check-in flow tests.
//!
//! Drives the full service through the same ports the terminal frontend
//! uses: sequential ticket ids plus a recording display sink.

use std::sync::Arc;

use frontdesk_core::application::{CheckInService, RegisterRequest};
use frontdesk_core::domain::{Classification, DomainError};
use frontdesk_core::port::display_sink::mocks::RecordingDisplaySink;
use frontdesk_core::port::{NullDisplaySink, SequentialIdProvider};
use frontdesk_core::AppError;

fn observed_service() -> (CheckInService, Arc<RecordingDisplaySink>) {
    let sink = Arc::new(RecordingDisplaySink::new());
    let service = CheckInService::new(Arc::new(SequentialIdProvider::new()), sink.clone());
    (service, sink)
}

fn headless_service() -> CheckInService {
    CheckInService::new(
        Arc::new(SequentialIdProvider::new()),
        Arc::new(NullDisplaySink),
    )
}

/// A mixed morning at the desk: normal, special and vip arrivals are
/// served by tier first, arrival order second.
#[test]
fn test_full_check_in_scenario() {
    let mut service = headless_service();

    service
        .check_in(RegisterRequest::new("Ana", "normal"))
        .unwrap();
    service
        .check_in(RegisterRequest::new("Luis", "especial"))
        .unwrap();
    service
        .check_in(RegisterRequest::new("Eva", "vip"))
        .unwrap();

    let names: Vec<&str> = service.waiting().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Luis", "Eva", "Ana"]);

    let served = service.serve_next().expect("queue is not empty");
    assert_eq!(served.name(), "Luis");
    assert_eq!(served.id(), 2);
    assert_eq!(served.classification(), Classification::Special);

    assert_eq!(service.waiting_count(), 2);

    println!("✅ Check-in scenario served clients in tier order");
}

/// Rejected registrations must not consume ticket ids: the first
/// accepted client still gets ticket 1.
#[test]
fn test_failed_check_ins_do_not_consume_ticket_ids() {
    let mut service = headless_service();

    let err = service
        .check_in(RegisterRequest::new("   ", "vip"))
        .unwrap_err();
    assert!(matches!(err, AppError::Domain(DomainError::EmptyName)));

    let err = service
        .check_in(RegisterRequest::new("Ana", "platinum"))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::UnknownClassification(_))
    ));

    let id = service
        .check_in(RegisterRequest::new("Ana", "vip"))
        .unwrap();
    assert_eq!(id, 1, "failed check-ins must not advance the ticket counter");

    println!("✅ Ticket counter untouched by rejected check-ins");
}

/// The display sink hears about every effective mutation and nothing
/// else: no snapshot for serving an empty queue or cancelling an
/// unknown ticket.
#[test]
fn test_display_notified_only_on_effective_mutations() {
    let (mut service, sink) = observed_service();

    assert!(service.serve_next().is_none());
    assert!(!service.cancel(42));
    assert_eq!(sink.notifications(), 0);

    service
        .check_in(RegisterRequest::new("Ana", "normal"))
        .unwrap();
    service
        .check_in(RegisterRequest::new("Luis", "vip"))
        .unwrap();
    assert_eq!(sink.notifications(), 2);

    service.serve_next().unwrap();
    assert_eq!(sink.notifications(), 3);

    assert!(service.cancel(1));
    assert_eq!(sink.notifications(), 4);
    assert_eq!(sink.last_snapshot(), Some(vec![]));

    println!("✅ Display sink notified exactly once per mutation");
}

/// Cancelling an unknown ticket is a no-op that leaves the waiting
/// list exactly as it was.
#[test]
fn test_cancel_unknown_ticket_leaves_queue_intact() {
    let (mut service, sink) = observed_service();

    service
        .check_in(RegisterRequest::new("Ana", "vip"))
        .unwrap();
    service
        .check_in(RegisterRequest::new("Luis", "normal"))
        .unwrap();

    assert!(!service.cancel(99));
    assert_eq!(service.waiting_count(), 2);
    assert_eq!(sink.last_snapshot(), Some(vec![1, 2]));

    assert!(service.cancel(1));
    let names: Vec<&str> = service.waiting().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Luis"]);

    println!("✅ Unknown-ticket cancel left the queue untouched");
}

/// Classification labels survive a serde round trip, and a queued
/// client serializes with all its public fields.
#[test]
fn test_client_snapshot_serialization() {
    let json = serde_json::to_string(&Classification::Special).unwrap();
    assert_eq!(json, "\"special\"");
    let back: Classification = serde_json::from_str("\"vip\"").unwrap();
    assert_eq!(back, Classification::Vip);

    let mut service = headless_service();
    service
        .check_in(RegisterRequest::new("Eva", "vip"))
        .unwrap();

    let snapshot = serde_json::to_value(service.waiting()).unwrap();
    assert_eq!(snapshot[0]["id"], 1);
    assert_eq!(snapshot[0]["name"], "Eva");
    assert_eq!(snapshot[0]["classification"], "vip");
    assert_eq!(snapshot[0]["tier"], "medium");

    println!("✅ Queue snapshot serializes cleanly");
}
