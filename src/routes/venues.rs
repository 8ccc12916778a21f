use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::SearchSettings;
use crate::core::{classify_fix, filter_by_sport, find_nearby, validate_query, SearchError};
use crate::models::{ErrorResponse, HealthResponse, NearbyRequest, NearbyResponse};
use crate::services::{StoreError, VenueCache, VenueStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<VenueStore>,
    pub cache: Arc<VenueCache>,
    pub search: SearchSettings,
}

/// Configure all venue-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/venues/nearby", web::post().to(find_nearby_venues))
        .route("/venues/{id}", web::get().to(get_venue));
}

fn search_error_response(err: &SearchError) -> HttpResponse {
    let error = match err {
        SearchError::InvalidCoordinate { .. } => "Invalid coordinate",
        SearchError::InvalidRadius(_) => "Invalid radius",
    };
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

fn store_error_response(context: &str, err: &StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        _ => HttpResponse::InternalServerError().json(ErrorResponse {
            error: context.to_string(),
            message: err.to_string(),
            status_code: 500,
        }),
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await;

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find nearby venues endpoint
///
/// POST /api/v1/venues/nearby
///
/// Request body:
/// ```json
/// {
///   "latitude": 28.6139,
///   "longitude": 77.2090,
///   "accuracy": 35.0,
///   "timestamp": "2024-05-01T10:00:00Z",
///   "radiusKm": 10,
///   "sport": "Tennis",
///   "limit": 20
/// }
/// ```
async fn find_nearby_venues(
    state: web::Data<AppState>,
    req: web::Json<NearbyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for nearby request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let settings = &state.search;
    let radius_km = req
        .radius_km
        .unwrap_or(settings.default_radius_km)
        .min(settings.max_radius_km);
    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(settings.max_results)
        .min(settings.max_results);

    // Reject bad input before touching the store
    if let Err(e) = validate_query(req.reference(), radius_km) {
        return search_error_response(&e);
    }

    let freshness = classify_fix(&req.fix(), chrono::Utc::now(), settings.max_fix_age());
    if freshness.is_stale() {
        tracing::info!(
            "Searching from a stale fix ({:?} minutes old)",
            freshness.age_minutes()
        );
    }

    let venues = match state.cache.all_venues(&state.store).await {
        Ok(venues) => venues,
        Err(e) => {
            tracing::error!("Failed to load venues: {}", e);
            return store_error_response("Failed to load venues", &e);
        }
    };

    let candidates = filter_by_sport(&venues, req.sport.as_deref());

    let mut result = match find_nearby(req.reference(), &candidates, radius_km) {
        Ok(result) => result,
        Err(e) => return search_error_response(&e),
    };

    if result.skipped > 0 {
        tracing::warn!("Skipped {} venues with invalid coordinates", result.skipped);
    }

    let total_results = result.venues.len();
    result.venues.truncate(limit);

    tracing::info!(
        "Returning {} venues within {}km of ({}, {}) (from {} candidates)",
        result.venues.len(),
        radius_km,
        req.latitude,
        req.longitude,
        candidates.len()
    );

    HttpResponse::Ok().json(NearbyResponse {
        venues: result.venues,
        total_results,
        skipped: result.skipped,
        radius_km,
        location_age_minutes: freshness.age_minutes(),
        stale: freshness.is_stale(),
    })
}

/// Get a single venue
///
/// GET /api/v1/venues/{id}
async fn get_venue(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get_venue(&id).await {
        Ok(venue) => HttpResponse::Ok().json(venue),
        Err(e) => {
            tracing::error!("Failed to fetch venue {}: {}", id, e);
            store_error_response("Failed to fetch venue", &e)
        }
    }
}
