use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;
use crate::error::ApiError;
use crate::models::domain::{DeliveryStop, ReturnStop, Stop};

/// Fields every stop object must carry
const REQUIRED_STOP_FIELDS: [&str; 3] = ["id", "lat", "lon"];

/// Reverse-logistics body as received, before stops are typed
///
/// Stops stay loose JSON objects so a missing field can be reported per list
/// instead of as a generic parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseLogisticsPayload {
    pub deliveries: Vec<Map<String, Value>>,
    pub returns: Vec<Map<String, Value>>,
    #[serde(default, alias = "thresholdKm")]
    pub threshold_km: Option<f64>,
}

impl TryFrom<ReverseLogisticsPayload> for ReverseLogisticsRequest {
    type Error = ApiError;

    fn try_from(payload: ReverseLogisticsPayload) -> Result<Self, Self::Error> {
        if payload.deliveries.is_empty() || payload.returns.is_empty() {
            return Err(ApiError::EmptyStops);
        }

        let deliveries = parse_stops(payload.deliveries, "delivery")?;
        let returns = parse_stops(payload.returns, "return")?;

        Ok(Self {
            deliveries,
            returns,
            threshold_km: payload.threshold_km,
        })
    }
}

fn parse_stops(raw: Vec<Map<String, Value>>, kind: &'static str) -> Result<Vec<Stop>, ApiError> {
    if raw.iter().any(|stop| REQUIRED_STOP_FIELDS.iter().any(|field| !stop.contains_key(*field))) {
        return Err(ApiError::MissingStopFields(kind));
    }

    raw.into_iter()
        .map(|stop| {
            serde_json::from_value(Value::Object(stop))
                .map_err(|e| ApiError::InvalidStop { kind, reason: e.to_string() })
        })
        .collect()
}

/// Request to pair deliveries with return pickups
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReverseLogisticsRequest {
    #[validate(nested)]
    pub deliveries: Vec<DeliveryStop>,
    #[validate(nested)]
    pub returns: Vec<ReturnStop>,
    /// Overrides the configured proximity radius for this request
    #[serde(default, alias = "thresholdKm")]
    #[validate(range(min = 0.0, max = 50.0))]
    pub threshold_km: Option<f64>,
}

impl ReverseLogisticsRequest {
    pub fn has_empty_side(&self) -> bool {
        self.deliveries.is_empty() || self.returns.is_empty()
    }

    /// Size of the larger of the two stop lists
    pub fn largest_side(&self) -> usize {
        self.deliveries.len().max(self.returns.len())
    }
}
