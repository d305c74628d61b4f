use std::sync::mpsc;
use std::time::Duration;

use super::worker::{LookupRequest, LookupResponse, spawn_worker};
use crate::lookup::{LookupError, Suggestion, SuggestionSource};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Source that answers every query with `count` numbered suggestions,
/// or fails when `count` is None.
struct StubSource {
    count: Option<usize>,
}

impl SuggestionSource for StubSource {
    fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        match self.count {
            Some(count) => Ok((0..count)
                .map(|i| Suggestion {
                    id: i.to_string(),
                    title: format!("{} {}", query, i),
                    summary: String::new(),
                })
                .collect()),
            None => Err(LookupError::Network("connection refused".to_string())),
        }
    }
}

#[test]
fn test_worker_completes_lookup_with_batch() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(StubSource { count: Some(3) }, request_rx, response_tx);

    request_tx
        .send(LookupRequest {
            query: "rust".to_string(),
        })
        .unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        LookupResponse::Completed { query, batch } => {
            assert_eq!(query, "rust");
            assert_eq!(batch.len(), 3);
            assert_eq!(batch[0].title, "rust 0");
        }
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn test_worker_reports_failure() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(StubSource { count: None }, request_rx, response_tx);

    request_tx
        .send(LookupRequest {
            query: "rust".to_string(),
        })
        .unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        LookupResponse::Failed { query, error } => {
            assert_eq!(query, "rust");
            assert!(matches!(error, LookupError::Network(_)));
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_worker_processes_requests_in_order() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(StubSource { count: Some(1) }, request_rx, response_tx);

    for query in ["first", "second", "third"] {
        request_tx
            .send(LookupRequest {
                query: query.to_string(),
            })
            .unwrap();
    }

    for expected in ["first", "second", "third"] {
        match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
            LookupResponse::Completed { query, .. } => assert_eq!(query, expected),
            other => panic!("expected completion, got {:?}", other),
        }
    }
}

#[test]
fn test_worker_shuts_down_when_request_channel_closes() {
    let (request_tx, request_rx) = mpsc::channel::<LookupRequest>();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(StubSource { count: Some(1) }, request_rx, response_tx);

    drop(request_tx);

    // The worker drops its response sender on exit, disconnecting the channel
    assert!(matches!(
        response_rx.recv_timeout(RECV_TIMEOUT),
        Err(mpsc::RecvTimeoutError::Disconnected)
    ));
}
