use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Latitude/longitude pair in degrees
///
/// Serialized as a `[lat, lon]` array. No range checks happen here; the HTTP
/// layer validates stops before they reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.lat, coordinate.lon)
    }
}

/// A delivery or return-pickup location
///
/// Fields beyond `id`, `lat` and `lon` are kept as-is so unpaired stops can be
/// handed back exactly as the caller sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Stop {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Stop {
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            extra: Map::new(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Stop where a parcel is dropped off
pub type DeliveryStop = Stop;

/// Stop where a returned parcel is collected
pub type ReturnStop = Stop;

/// Kind of consolidated trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    PairedDeliveryReturn,
}

/// A delivery and a return served by the same trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedRoute {
    pub delivery_id: String,
    pub return_id: String,
    #[serde(rename = "delivery_coords")]
    pub delivery_coordinate: Coordinate,
    #[serde(rename = "return_coords")]
    pub return_coordinate: Coordinate,
    /// Straight-line distance, rounded to 2 decimals
    pub distance_km: f64,
    pub route_type: RouteType,
}

/// Outcome of one pairing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairingResult {
    pub paired_routes: Vec<PairedRoute>,
    pub unpaired_deliveries: Vec<DeliveryStop>,
    pub unpaired_returns: Vec<ReturnStop>,
    pub total_pairs: usize,
    pub total_deliveries: usize,
    pub total_returns: usize,
    /// Percentage of `min(total_deliveries, total_returns)` that was paired
    pub pairing_efficiency: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinate_serializes_as_array() {
        let value = serde_json::to_value(Coordinate::new(12.9716, 77.6413)).unwrap();
        assert_eq!(value, json!([12.9716, 77.6413]));

        let parsed: Coordinate = serde_json::from_value(json!([1.5, -2.5])).unwrap();
        assert_eq!(parsed, Coordinate::new(1.5, -2.5));
    }

    #[test]
    fn test_route_type_tag() {
        let value = serde_json::to_value(RouteType::PairedDeliveryReturn).unwrap();
        assert_eq!(value, json!("paired_delivery_return"));
    }

    #[test]
    fn test_stop_keeps_extra_fields() {
        let raw = json!({"id": "d1", "lat": 12.9716, "lon": 77.6413, "address": "MG Road", "parcels": 2});
        let stop: Stop = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(stop.id, "d1");
        assert_eq!(stop.coordinate(), Coordinate::new(12.9716, 77.6413));
        assert_eq!(stop.extra.get("address"), Some(&json!("MG Road")));
        assert_eq!(serde_json::to_value(&stop).unwrap(), raw);
    }

    #[test]
    fn test_stop_accepts_integer_coordinates() {
        let stop: Stop = serde_json::from_value(json!({"id": "r1", "lat": 13, "lon": 77})).unwrap();
        assert_eq!(stop.coordinate(), Coordinate::new(13.0, 77.0));
        assert!(stop.extra.is_empty());
    }

    #[test]
    fn test_stop_requires_coordinates() {
        let result: Result<Stop, _> = serde_json::from_value(json!({"id": "r1", "lat": 13.0}));
        assert!(result.is_err());
    }

    #[test]
    fn test_stop_validation() {
        assert!(Stop::new("d1", 12.0, 77.0).validate().is_ok());
        assert!(Stop::new("", 12.0, 77.0).validate().is_err());
        assert!(Stop::new("d1", 91.0, 77.0).validate().is_err());
        assert!(Stop::new("d1", 12.0, -181.0).validate().is_err());
    }

    #[test]
    fn test_paired_route_wire_format() {
        let route = PairedRoute {
            delivery_id: "d1".to_string(),
            return_id: "r1".to_string(),
            delivery_coordinate: Coordinate::new(12.9716, 77.6413),
            return_coordinate: Coordinate::new(12.975, 77.645),
            distance_km: 0.55,
            route_type: RouteType::PairedDeliveryReturn,
        };

        let value = serde_json::to_value(&route).unwrap();
        assert_eq!(
            value,
            json!({
                "delivery_id": "d1",
                "return_id": "r1",
                "delivery_coords": [12.9716, 77.6413],
                "return_coords": [12.975, 77.645],
                "distance_km": 0.55,
                "route_type": "paired_delivery_return"
            })
        );
    }
}
