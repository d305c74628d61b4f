//! Favorite-toggle collaborator
//!
//! Thin client for the per-article favorite endpoint plus an explicit button
//! registry. Registration replaces the DOM-observer re-scan of the original
//! page script: whatever code injects new content calls
//! [`FavoriteRegistry::register`] for the buttons it added.

mod client;
mod registry;

pub use client::{FavoriteClient, FavoriteError};
pub use registry::{FavoriteButton, FavoriteRegistry};
