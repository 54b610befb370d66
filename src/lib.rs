//! RouteZero - reverse-pickup pairing service
//!
//! Consolidates vehicle trips by pairing each delivery stop with the nearest
//! free return pickup inside a proximity radius. The pairing core is a pure,
//! greedy, order-dependent pass; the HTTP layer validates requests and wraps
//! the result.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{PairingEngine, distance::{haversine_distance, distance_km_between}};
pub use error::ApiError;
pub use models::{Coordinate, Stop, DeliveryStop, ReturnStop, PairedRoute, PairingResult, RouteType, ReverseLogisticsRequest};
