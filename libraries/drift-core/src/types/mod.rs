//! Domain types for Drift Player

mod ids;
mod station;
mod tier;
mod track;

pub use ids::{StationId, TrackId};
pub use station::RadioStation;
pub use tier::Tier;
pub use track::Track;
