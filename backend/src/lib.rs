pub mod distance;
pub mod error;
pub mod narrative;
pub mod optimizer;
pub mod tour;

use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use tower_http::cors::{Any, CorsLayer};

use shared::{ApiError, OptimizeRequest, OptimizeResponse, Waypoint};

use crate::error::ValidationError;
use crate::narrative::NarrativeClient;

const MIN_WAYPOINTS: usize = 2;
/// Hard request ceiling: the improvement loop is cubic in the worst case.
pub const MAX_WAYPOINTS: usize = 300;

#[derive(Clone)]
pub struct AppState {
    pub narrator: Arc<NarrativeClient>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/optimize", post(optimize_handler))
        .layer(cors)
        .with_state(state)
}

async fn optimize_handler(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    validate_waypoints(&req.waypoints).map_err(bad_request)?;

    tracing::info!("optimizing a route over {} waypoints", req.waypoints.len());
    let route = optimizer::optimize_route(&req.waypoints);
    let narrative = state.narrator.describe(&route).await;

    Ok(Json(OptimizeResponse { route, narrative }))
}

fn validate_waypoints(waypoints: &[Waypoint]) -> Result<(), ValidationError> {
    if waypoints.len() < MIN_WAYPOINTS {
        return Err(ValidationError::NotEnoughWaypoints(waypoints.len()));
    }
    if waypoints.len() > MAX_WAYPOINTS {
        return Err(ValidationError::TooManyWaypoints {
            got: waypoints.len(),
            max: MAX_WAYPOINTS,
        });
    }
    for waypoint in waypoints {
        let lat_ok = waypoint.lat.is_finite() && (-90.0..=90.0).contains(&waypoint.lat);
        let lon_ok = waypoint.lon.is_finite() && (-180.0..=180.0).contains(&waypoint.lon);
        if !lat_ok || !lon_ok {
            return Err(ValidationError::InvalidCoordinate {
                id: waypoint.id.clone(),
                lat: waypoint.lat,
                lon: waypoint.lon,
            });
        }
    }
    Ok(())
}

fn bad_request(err: ValidationError) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError {
            message: err.to_string(),
        }),
    )
}
