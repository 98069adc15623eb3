//! Optimization pipeline: distance matrix, greedy construction, 2-opt
//! refinement, then the reported route with per-leg statistics.

use shared::{OptimizedStop, RouteLeg, RoutePlan, Waypoint};

use crate::distance::DistanceMatrix;
use crate::tour::{nearest_neighbor_tour, tour_length, two_opt};

const MILES_PER_KM: f64 = 0.621371;

/// Computes an approximately shortest visiting order over the given
/// waypoints and reports it with distance totals and a per-leg breakdown.
///
/// Pure function of its input; callers enforce the minimum of two waypoints
/// at the API boundary. The route is an open path with no return leg.
pub fn optimize_route(waypoints: &[Waypoint]) -> RoutePlan {
    let matrix = DistanceMatrix::from_waypoints(waypoints);
    let mut tour = nearest_neighbor_tour(&matrix);
    let constructed_km = tour_length(&tour, &matrix);
    two_opt(&mut tour, &matrix);
    let improved_km = tour_length(&tour, &matrix);

    tracing::debug!(
        "optimized {} waypoints: {:.1} km greedy, {:.1} km after refinement",
        waypoints.len(),
        constructed_km,
        improved_km
    );

    build_plan(waypoints, &tour, &matrix)
}

fn build_plan(waypoints: &[Waypoint], tour: &[usize], matrix: &DistanceMatrix) -> RoutePlan {
    let stops = tour
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            let waypoint = &waypoints[index];
            OptimizedStop {
                id: waypoint.id.clone(),
                name: waypoint.name.clone(),
                lat: waypoint.lat,
                lon: waypoint.lon,
                order: position + 1,
            }
        })
        .collect();

    let legs = tour
        .windows(2)
        .map(|pair| {
            let from = &waypoints[pair[0]];
            let to = &waypoints[pair[1]];
            let km = matrix.get(pair[0], pair[1]);
            RouteLeg {
                from_id: from.id.clone(),
                from_name: from.name.clone(),
                to_id: to.id.clone(),
                to_name: to.name.clone(),
                km: round_one_decimal(km),
                miles: round_one_decimal(km * MILES_PER_KM),
            }
        })
        .collect();

    // Totals sum the raw leg distances, not the display-rounded ones
    let total_km = tour_length(tour, matrix);

    RoutePlan {
        stops,
        legs,
        total_km: round_one_decimal(total_km),
        total_miles: round_one_decimal(total_km * MILES_PER_KM),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
