//! Search suggester state management
//!
//! Owns the debounce timer slot, the recorded query, the rendered panel, and
//! the channel handles for communication with the lookup worker. All state is
//! instance-owned: a page with several search widgets gets one `SuggestState`
//! per widget instead of sharing a module-global timer handle.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use super::panel::SuggestionPanel;
use super::worker::{LookupRequest, LookupResponse};
use crate::lookup::{LookupError, Suggestion};
use crate::routes;

/// Suggestions are only requested for queries at least this long (trimmed).
pub const MIN_QUERY_LEN: usize = 2;

/// Default quiet period before a lookup is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default number of suggestion rows the panel renders.
pub const DEFAULT_MAX_ROWS: usize = 5;

/// Where an interaction landed, relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionTarget {
    /// The search input field itself
    SearchInput,
    /// The results panel
    ResultsPanel,
    /// Anywhere else on the page
    Other,
}

/// Coarse lifecycle phase of the suggester.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No timer armed, panel empty
    Idle,
    /// Debounce timer running (or lookup issued), panel unchanged
    Pending,
    /// Panel holds a rendered batch
    Displaying,
}

/// Incremental search suggester state
pub struct SuggestState {
    base_url: String,
    max_rows: usize,
    /// The single timer slot; a new keystroke always cancels and replaces it
    debouncer: Debouncer,
    /// Query recorded when the timer was armed, consumed when it fires
    pending_query: Option<String>,
    panel: SuggestionPanel,
    phase: Phase,
    /// Channel to send lookup requests to the worker thread
    request_tx: Option<Sender<LookupRequest>>,
    /// Channel to receive lookup responses from the worker thread
    response_rx: Option<Receiver<LookupResponse>>,
}

impl SuggestState {
    /// Create a suggester for the given base address with default timing.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_settings(base_url, DEFAULT_DEBOUNCE, DEFAULT_MAX_ROWS)
    }

    /// Create a suggester from the loaded configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::with_settings(
            config.server.base_url.clone(),
            Duration::from_millis(config.search.debounce_ms),
            config.search.max_rows,
        )
    }

    /// Create a suggester with explicit debounce delay and row limit.
    pub fn with_settings(
        base_url: impl Into<String>,
        debounce: Duration,
        max_rows: usize,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            max_rows,
            debouncer: Debouncer::new(debounce),
            pending_query: None,
            panel: SuggestionPanel::new(),
            phase: Phase::Idle,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Handle a change of the input field content.
    ///
    /// Cancels any pending timer. A trimmed query shorter than
    /// [`MIN_QUERY_LEN`] clears and hides the panel without issuing a lookup;
    /// anything longer arms the timer and records the query.
    pub fn input_changed(&mut self, raw: &str, now: Instant) {
        self.debouncer.cancel();
        self.pending_query = None;

        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            self.panel.clear();
            self.phase = Phase::Idle;
            return;
        }

        self.debouncer.arm(now);
        self.pending_query = Some(query.to_string());
        self.phase = Phase::Pending;
    }

    /// Fire the debounce deadline if it has elapsed.
    ///
    /// Issues exactly one lookup for the recorded query per quiet period.
    /// Returns true if a lookup was sent.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.debouncer.poll(now) {
            return false;
        }

        let Some(query) = self.pending_query.take() else {
            return false;
        };

        match &self.request_tx {
            Some(tx) => {
                log::debug!("Issuing lookup for {:?}", query);
                if tx.send(LookupRequest { query }).is_err() {
                    log::error!("Lookup worker disconnected");
                    return false;
                }
                true
            }
            None => {
                log::warn!("No lookup channel configured, dropping query {:?}", query);
                false
            }
        }
    }

    /// Drain and apply all responses waiting on the channel.
    ///
    /// Responses are applied in arrival order, so with several lookups in
    /// flight the panel ends in the state of whichever completed last.
    /// Returns true if the panel changed.
    pub fn drain_responses(&mut self) -> bool {
        let mut changed = false;
        loop {
            let response = match &self.response_rx {
                Some(rx) => match rx.try_recv() {
                    Ok(response) => response,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        log::error!("Lookup worker disconnected");
                        break;
                    }
                },
                None => break,
            };

            match response {
                LookupResponse::Completed { query, batch } => {
                    self.lookup_completed(batch, &query);
                    changed = true;
                }
                LookupResponse::Failed { query, error } => {
                    self.lookup_failed(&query, &error);
                }
            }
        }
        changed
    }

    /// Apply one completed lookup.
    ///
    /// No request identity is checked against the current field content:
    /// whichever response is applied last overwrites the panel
    /// (last-response-wins, not last-request-wins).
    pub fn lookup_completed(&mut self, batch: Vec<Suggestion>, for_query: &str) {
        self.panel
            .show_batch(&self.base_url, for_query, &batch, self.max_rows);
        self.phase = if self.panel.is_empty() {
            Phase::Idle
        } else {
            Phase::Displaying
        };
    }

    /// Record a failed lookup.
    ///
    /// Best-effort contract: the failure is logged and the panel keeps its
    /// prior state. No retry, no user-visible message.
    pub fn lookup_failed(&mut self, query: &str, error: &LookupError) {
        log::error!("Lookup for {:?} failed: {}", query, error);
    }

    /// Handle an interaction somewhere on the page.
    ///
    /// A target outside both the input and the panel hides the panel without
    /// clearing it, so it can reappear when the field regains focus.
    pub fn outside_interaction(&mut self, target: InteractionTarget) {
        if target == InteractionTarget::Other {
            self.panel.hide();
        }
    }

    /// Handle the input field regaining focus: re-show hidden content.
    pub fn focus_gained(&mut self) {
        self.panel.reveal();
    }

    /// Handle submission of the enclosing form.
    ///
    /// An empty trimmed query suppresses submission. Otherwise returns the
    /// full-results address the navigation should proceed to.
    pub fn submit(&self, raw: &str) -> Option<String> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }
        Some(routes::search(&self.base_url, query))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn panel(&self) -> &SuggestionPanel {
        &self.panel
    }

    /// The query the armed timer will look up when it fires.
    pub fn pending_query(&self) -> Option<&str> {
        self.pending_query.as_deref()
    }

    pub fn is_timer_armed(&self) -> bool {
        self.debouncer.is_armed()
    }
}
