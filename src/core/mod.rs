// Core algorithm exports
pub mod distance;
pub mod metrics;
pub mod pairing;

pub use distance::{haversine_distance, distance_km_between};
pub use metrics::{pairing_efficiency, round_to};
pub use pairing::{PairingEngine, DEFAULT_THRESHOLD_KM};
