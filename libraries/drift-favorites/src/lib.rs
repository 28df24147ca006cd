//! Drift Player - Favorites
//!
//! Persisted favorite tracks with a free-tier cap, plus the subscription
//! session state the cap is gated on.
//!
//! Free users keep up to [`FREE_TIER_LIMIT`] favorites; premium users are
//! uncapped. Hitting the cap rejects the add without mutating anything, so
//! the UI can surface an upgrade prompt with the list intact.

mod error;
mod favorite;
mod session;
mod store;

pub use error::{FavoritesError, Result};
pub use favorite::Favorite;
pub use session::SessionState;
pub use store::{FavoritesStore, FREE_TIER_LIMIT};
