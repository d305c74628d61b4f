//! Lookup worker thread
//!
//! Handles suggestion lookups in a background thread so the event loop never
//! blocks on the network. Receives requests via channel, performs the HTTP
//! call, and sends the completed batch (or the failure) back to the owning
//! suggester.
//!
//! Lookups have no cancellation: once issued a request runs to completion and
//! its result can only be ignored by whatever the suggester applies after it.

use std::sync::mpsc::{Receiver, Sender};

use crate::lookup::{LookupError, Suggestion, SuggestionSource};

/// Request messages sent to the lookup worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// The trimmed query the debounce period settled on
    pub query: String,
}

/// Response messages received from the lookup worker thread
#[derive(Debug)]
pub enum LookupResponse {
    /// The lookup completed; `batch` answers `query`
    Completed {
        query: String,
        batch: Vec<Suggestion>,
    },
    /// The lookup failed; logged by the suggester, panel left unchanged
    Failed { query: String, error: LookupError },
}

/// Spawn the lookup worker thread.
///
/// The thread processes requests one at a time until the request channel
/// closes. Responses the main thread no longer cares about are dropped when
/// the response channel disconnects.
pub fn spawn_worker<S>(
    source: S,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) where
    S: SuggestionSource + Send + 'static,
{
    std::thread::spawn(move || {
        worker_loop(&source, &request_rx, &response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop<S: SuggestionSource>(
    source: &S,
    request_rx: &Receiver<LookupRequest>,
    response_tx: &Sender<LookupResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = match source.suggestions(&request.query) {
            Ok(batch) => LookupResponse::Completed {
                query: request.query,
                batch,
            },
            Err(error) => LookupResponse::Failed {
                query: request.query,
                error,
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected, stop processing
            return;
        }
    }

    log::debug!("Lookup worker thread shutting down");
}
