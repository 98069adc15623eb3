use serde::{Deserialize, Serialize};

/// A named geographic point to visit, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub waypoints: Vec<Waypoint>,
}

/// A waypoint annotated with its 1-based visiting order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedStop {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub order: usize,
}

/// One travel segment between two consecutive stops.
///
/// Distances are rounded to one decimal for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLeg {
    pub from_id: String,
    pub from_name: String,
    pub to_id: String,
    pub to_name: String,
    pub km: f64,
    pub miles: f64,
}

/// The optimized visiting order with its distance breakdown.
///
/// The route is an open path: there is no return leg to the first stop, so
/// `legs` holds one entry fewer than `stops`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    pub stops: Vec<OptimizedStop>,
    pub legs: Vec<RouteLeg>,
    pub total_km: f64,
    pub total_miles: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub route: RoutePlan,
    pub narrative: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}
