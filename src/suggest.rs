//! Incremental search suggester
//!
//! Converts a noisy, high-frequency input-change signal into a low-frequency,
//! debounced lookup request, and renders exactly the most recent result set.
//! Single-threaded and poll-driven: the owner calls [`SuggestState::input_changed`]
//! on every keystroke, [`SuggestState::tick`] from its event loop to fire the
//! debounce deadline, and [`SuggestState::drain_responses`] to apply completed
//! lookups in arrival order (last response wins).

mod debouncer;
mod panel;
mod suggest_state;
mod worker;

pub use debouncer::Debouncer;
pub use panel::{PanelRow, SuggestionPanel, ViewAllRow};
pub use suggest_state::{
    DEFAULT_DEBOUNCE, DEFAULT_MAX_ROWS, InteractionTarget, MIN_QUERY_LEN, Phase, SuggestState,
};
pub use worker::{LookupRequest, LookupResponse, spawn_worker};


#[cfg(test)]
#[path = "suggest/panel_tests.rs"]
mod panel_tests;


#[cfg(test)]
#[path = "suggest/worker_tests.rs"]
mod worker_tests;
