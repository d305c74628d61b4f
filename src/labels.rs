//! Label-based space filter
//!
//! Pure client-side visibility toggle over a list of spaces, keyed by an
//! optional label id. No network call is involved; filtering only recomputes
//! which items are shown and which filter button is active.

mod filter_state;

pub use filter_state::{LabelFilter, Selection, SpaceItem};
