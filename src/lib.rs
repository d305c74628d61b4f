//! Client-side interaction layer for the knowledge-base web application.
//!
//! The core is the incremental search suggester ([`suggest`]): it owns one
//! text input's change stream, debounces it, issues lookup requests to a
//! background worker, and renders exactly the most recent result set.
//! Collaborator modules cover the favorite-toggle endpoint ([`favorites`]),
//! the pure client-side label filter ([`labels`]), transient notifications
//! ([`notification`]), and the address builders shared by all of them
//! ([`routes`]).

pub mod config;
pub mod error;
pub mod favorites;
pub mod labels;
pub mod lookup;
pub mod notification;
pub mod routes;
pub mod suggest;

pub use error::KbError;
pub use lookup::{HttpLookup, LookupError, Suggestion, SuggestionSource};
pub use suggest::{Debouncer, SuggestState};
