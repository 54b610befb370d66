use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use tracing::Instrument;
use validator::Validate;

use crate::core::PairingEngine;
use crate::error::ApiError;
use crate::models::{HealthResponse, ReverseLogisticsPayload, ReverseLogisticsRequest, ReverseLogisticsResponse};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: PairingEngine,
    pub max_stops: usize,
}

/// Configure reverse-logistics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/reverse-logistics", web::post().to(reverse_logistics));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    let services = BTreeMap::from([("reverse_logistics".to_string(), "available".to_string())]);

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        services,
    })
}

/// Reverse-logistics pairing endpoint
///
/// POST /api/v1/reverse-logistics
///
/// Request body:
/// ```json
/// {
///   "deliveries": [{"id": "d1", "lat": 12.9716, "lon": 77.6413}],
///   "returns": [{"id": "r1", "lat": 12.9750, "lon": 77.6450}],
///   "threshold_km": 3.0
/// }
/// ```
///
/// Pairing runs on the blocking pool; at `max_stops` per side it is
/// `max_stops²` distance evaluations.
async fn reverse_logistics(
    state: web::Data<AppState>,
    payload: web::Json<ReverseLogisticsPayload>,
) -> Result<HttpResponse, ApiError> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("reverse_logistics", %request_id);

    async move {
        let req = ReverseLogisticsRequest::try_from(payload.into_inner()).map_err(|e| {
            tracing::info!("Rejected reverse-logistics payload: {}", e);
            e
        })?;
        check_request(&req, state.max_stops)?;

        let engine = match req.threshold_km {
            Some(threshold_km) => PairingEngine::new(threshold_km),
            None => state.engine,
        };

        tracing::info!(
            "Pairing {} deliveries with {} returns (threshold {} km)",
            req.deliveries.len(),
            req.returns.len(),
            engine.threshold_km()
        );

        let result = web::block(move || engine.pair(&req.deliveries, &req.returns)).await?;

        tracing::info!(
            "Paired {} of {} deliveries, efficiency {}%",
            result.total_pairs,
            result.total_deliveries,
            result.pairing_efficiency
        );

        Ok(HttpResponse::Ok().json(ReverseLogisticsResponse {
            success: true,
            request_id: request_id.to_string(),
            data: result,
        }))
    }
    .instrument(span)
    .await
}

/// Reject requests the engine should not see
fn check_request(req: &ReverseLogisticsRequest, max_stops: usize) -> Result<(), ApiError> {
    if req.has_empty_side() {
        tracing::info!(
            "Rejected request with {} deliveries and {} returns",
            req.deliveries.len(),
            req.returns.len()
        );
        return Err(ApiError::EmptyStops);
    }

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for reverse-logistics request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let given = req.largest_side();
    if given > max_stops {
        tracing::warn!("Rejected request with {} stops (limit {})", given, max_stops);
        return Err(ApiError::TooManyStops { given, limit: max_stops });
    }

    Ok(())
}
