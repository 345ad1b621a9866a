//! Type-safe wrappers for cricket identifiers.

pub mod ids;

pub use ids::{DeliveryId, MatchId};
