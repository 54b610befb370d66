use std::collections::HashSet;

use crate::models::{DeliveryStop, ReturnStop, PairedRoute, PairingResult, RouteType};
use crate::core::{
    distance::distance_km_between,
    metrics::{pairing_efficiency, round_to},
};

/// Default proximity radius for pairing, in kilometers
pub const DEFAULT_THRESHOLD_KM: f64 = 3.0;

/// Reverse-pickup pairing engine
///
/// Walks the deliveries in the order given and attaches to each one the
/// closest return that is still free and lies within `threshold_km`.
///
/// # Matching rules
/// 1. A return can serve at most one delivery.
/// 2. Among qualifying returns the nearest wins; on equal distance the one
///    listed first wins.
/// 3. Earlier deliveries are never revisited, so a later delivery may lose a
///    return it was closer to. Results depend on input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairingEngine {
    threshold_km: f64,
}

impl PairingEngine {
    /// Create an engine pairing stops up to `threshold_km` apart
    ///
    /// The radius is snapped to the 0.01 km grid used for reported distances,
    /// so a rounded `distance_km` never exceeds it.
    pub fn new(threshold_km: f64) -> Self {
        Self {
            threshold_km: round_to(threshold_km, 2),
        }
    }

    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    /// Pair deliveries with return pickups
    ///
    /// # Arguments
    /// * `deliveries` - Delivery stops, in processing order
    /// * `returns` - Return stops, in tie-break order
    ///
    /// # Returns
    /// PairingResult with paired routes, leftovers on both sides and totals
    pub fn pair(&self, deliveries: &[DeliveryStop], returns: &[ReturnStop]) -> PairingResult {
        let mut paired_routes = Vec::new();
        let mut unpaired_deliveries = Vec::new();

        let mut used_deliveries: HashSet<&str> = HashSet::new();
        let mut used_returns: HashSet<&str> = HashSet::new();

        for delivery in deliveries {
            // A repeated id of an already paired delivery is skipped outright
            if used_deliveries.contains(delivery.id.as_str()) {
                continue;
            }

            let delivery_coordinate = delivery.coordinate();
            let mut best_return: Option<&ReturnStop> = None;
            let mut best_distance = f64::INFINITY;

            for candidate in returns {
                if used_returns.contains(candidate.id.as_str()) {
                    continue;
                }

                let distance = distance_km_between(delivery_coordinate, candidate.coordinate());

                if distance <= self.threshold_km && distance < best_distance {
                    best_return = Some(candidate);
                    best_distance = distance;
                }
            }

            match best_return {
                Some(return_stop) => {
                    paired_routes.push(PairedRoute {
                        delivery_id: delivery.id.clone(),
                        return_id: return_stop.id.clone(),
                        delivery_coordinate,
                        return_coordinate: return_stop.coordinate(),
                        distance_km: round_to(best_distance, 2),
                        route_type: RouteType::PairedDeliveryReturn,
                    });

                    used_deliveries.insert(delivery.id.as_str());
                    used_returns.insert(return_stop.id.as_str());
                }
                None => unpaired_deliveries.push(delivery.clone()),
            }
        }

        let unpaired_returns: Vec<ReturnStop> = returns
            .iter()
            .filter(|return_stop| !used_returns.contains(return_stop.id.as_str()))
            .cloned()
            .collect();

        let total_pairs = paired_routes.len();

        PairingResult {
            paired_routes,
            unpaired_deliveries,
            unpaired_returns,
            total_pairs,
            total_deliveries: deliveries.len(),
            total_returns: returns.len(),
            pairing_efficiency: pairing_efficiency(total_pairs, deliveries.len(), returns.len()),
        }
    }
}

impl Default for PairingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_KM)
    }
}
