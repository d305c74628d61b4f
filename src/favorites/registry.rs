//! Explicit favorite-button registry.
//!
//! A container component owns the mapping from button identity to state;
//! code that injects new content registers the buttons it added. This
//! replaces the observer-based re-scan of the original page script with an
//! explicit registration call.

use std::collections::HashMap;
use std::time::Instant;

use super::client::FavoriteError;
use crate::notification::{Level, NotificationState};

/// Message surfaced when a toggle fails, matching the page script.
const TOGGLE_FAILED_MESSAGE: &str = "Error updating favorite status. Please try again.";

/// State of one registered favorite button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteButton {
    /// Article the button toggles
    pub article_id: String,
    /// Current favorited state
    pub favorited: bool,
    /// Disabled while a toggle request is in flight
    pub enabled: bool,
}

impl FavoriteButton {
    /// Tooltip text for the current state.
    pub fn tooltip(&self) -> &'static str {
        if self.favorited {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    }
}

/// Registry of favorite buttons, keyed by element identity.
#[derive(Debug, Default)]
pub struct FavoriteRegistry {
    buttons: HashMap<String, FavoriteButton>,
}

impl FavoriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a button.
    ///
    /// Invoked by whatever code injects new content. Re-registering a known
    /// button id is a no-op, so a full re-scan after partial injection is
    /// harmless and cannot re-enable a button with a toggle in flight.
    pub fn register(
        &mut self,
        button_id: impl Into<String>,
        article_id: impl Into<String>,
        favorited: bool,
    ) {
        self.buttons
            .entry(button_id.into())
            .or_insert_with(|| FavoriteButton {
                article_id: article_id.into(),
                favorited,
                enabled: true,
            });
    }

    /// Begin a toggle: disable the button for the duration of the request.
    ///
    /// Returns the article id to POST to, or None when the button is unknown
    /// or already has a request in flight (fire once per click).
    pub fn begin_toggle(&mut self, button_id: &str) -> Option<String> {
        let button = self.buttons.get_mut(button_id)?;
        if !button.enabled {
            return None;
        }
        button.enabled = false;
        Some(button.article_id.clone())
    }

    /// Complete a toggle with the endpoint's outcome.
    ///
    /// The button is re-enabled regardless of outcome. Success updates the
    /// favorited state; failure leaves it unchanged and surfaces a transient
    /// error notification (best-effort, non-fatal).
    pub fn complete_toggle(
        &mut self,
        button_id: &str,
        outcome: Result<bool, FavoriteError>,
        notifications: &mut NotificationState,
        now: Instant,
    ) {
        let Some(button) = self.buttons.get_mut(button_id) else {
            log::warn!("Toggle completed for unknown button {:?}", button_id);
            return;
        };

        button.enabled = true;

        match outcome {
            Ok(favorited) => {
                button.favorited = favorited;
            }
            Err(error) => {
                log::error!(
                    "Toggle for article {:?} failed: {}",
                    button.article_id,
                    error
                );
                notifications.push(TOGGLE_FAILED_MESSAGE, Level::Error, now);
            }
        }
    }

    pub fn button(&self, button_id: &str) -> Option<&FavoriteButton> {
        self.buttons.get(button_id)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}
