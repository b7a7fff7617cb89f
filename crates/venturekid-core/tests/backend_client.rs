//! HTTP tests for the hosted backend client against a mock server.

use mockito::Matcher;
use venturekid_core::form::fields::{FieldMap, FieldValue};
use venturekid_core::{FlowKind, HostedBackendClient, LeadRecord, LeadSink, SubmissionError};

fn sample_lead() -> LeadRecord {
    let mut fields = FieldMap::new();
    fields.insert("child_name".into(), FieldValue::text("Ada"));
    fields.insert("parent_email".into(), FieldValue::text("sam@example.com"));
    LeadRecord::new(FlowKind::Enrollment, &fields, None)
}

#[test]
fn submit_posts_json_and_reads_ack() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/leads")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJsonString(
            r#"{"child_name": "Ada", "flow": "enrollment"}"#.to_string(),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "lead-42"}"#)
        .create();

    let client = HostedBackendClient::new(&server.url(), 5).unwrap();
    let ack = client.submit(&sample_lead()).unwrap();

    assert_eq!(ack.backend_id, "lead-42");
    mock.assert();
}

#[test]
fn ack_without_id_falls_back_to_client_id() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/leads")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create();

    let client = HostedBackendClient::new(&server.url(), 5).unwrap();
    let lead = sample_lead();
    let ack = client.submit(&lead).unwrap();
    assert_eq!(ack.backend_id, lead.id);
}

#[test]
fn server_error_maps_to_rejected() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/leads")
        .with_status(503)
        .with_body("upstream down")
        .create();

    let client = HostedBackendClient::new(&server.url(), 5).unwrap();
    let err = client.submit(&sample_lead()).unwrap_err();
    match err {
        SubmissionError::Rejected { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("upstream down"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[test]
fn unreachable_host_maps_to_transport() {
    // Nothing listens on this port.
    let client = HostedBackendClient::new("http://127.0.0.1:9", 1).unwrap();
    let err = client.submit(&sample_lead()).unwrap_err();
    assert!(matches!(err, SubmissionError::Transport(_)));
}
