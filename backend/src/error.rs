use thiserror::Error;

/// Rejections produced by request validation, before the optimizer runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("at least 2 waypoints are required, got {0}")]
    NotEnoughWaypoints(usize),
    #[error("too many waypoints: {got} exceeds the supported maximum of {max}")]
    TooManyWaypoints { got: usize, max: usize },
    #[error("waypoint `{id}` has an invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate { id: String, lat: f64, lon: f64 },
}
