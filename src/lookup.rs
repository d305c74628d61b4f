//! Suggestion lookup
//!
//! Defines the suggestion record, the lookup error taxonomy, and the
//! `SuggestionSource` seam between the suggester and the transport.

mod client;

pub use client::{HttpLookup, LookupError, Suggestion, SuggestionSource};
