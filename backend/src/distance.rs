use shared::Waypoint;

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Great-circle distance between two waypoints in kilometers.
pub fn haversine_km(a: &Waypoint, b: &Waypoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Dense N×N matrix of pairwise waypoint distances, stored row-major.
///
/// Built once per optimization run and read-only afterwards.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the pairwise haversine distances for the given waypoints.
    ///
    /// The diagonal stays 0 without going through the distance model; each
    /// unordered pair is computed once and mirrored.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let n = waypoints.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(&waypoints[i], &waypoints[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Distance from waypoint `from` to waypoint `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of waypoints covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp(lat: f64, lon: f64) -> Waypoint {
        Waypoint {
            id: "wp".to_string(),
            name: "wp".to_string(),
            lat,
            lon,
        }
    }

    #[test]
    fn test_haversine_same_point() {
        let point = wp(45.0, 5.0);
        assert_eq!(haversine_km(&point, &point), 0.0);
    }

    #[test]
    fn test_haversine_symmetry() {
        let a = wp(45.0, 5.0);
        let b = wp(46.0, 6.0);
        assert_eq!(haversine_km(&a, &b), haversine_km(&b, &a));
    }

    #[test]
    fn test_haversine_one_degree_at_equator() {
        // One degree of longitude at the equator is ~111.19 km
        let d = haversine_km(&wp(0.0, 0.0), &wp(0.0, 1.0));
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Paris to London is ~343 km
        let d = haversine_km(&wp(48.8566, 2.3522), &wp(51.5074, -0.1278));
        assert!((d - 343.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn test_matrix_zero_diagonal() {
        let points = vec![wp(0.0, 0.0), wp(0.0, 1.0), wp(1.0, 1.0)];
        let matrix = DistanceMatrix::from_waypoints(&points);
        for i in 0..matrix.size() {
            assert_eq!(matrix.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_matrix_mirrors_pairs() {
        let points = vec![wp(0.0, 0.0), wp(0.0, 1.0), wp(1.0, 1.0), wp(1.0, 0.0)];
        let matrix = DistanceMatrix::from_waypoints(&points);
        assert_eq!(matrix.size(), 4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
                assert_eq!(
                    matrix.get(i, j),
                    if i == j {
                        0.0
                    } else {
                        haversine_km(&points[i], &points[j])
                    }
                );
            }
        }
    }

    #[test]
    fn test_matrix_coincident_points() {
        let points = vec![wp(45.0, 5.0); 3];
        let matrix = DistanceMatrix::from_waypoints(&points);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), 0.0);
            }
        }
    }

    // Property-based tests using proptest
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn valid_waypoint() -> impl Strategy<Value = Waypoint> {
            (-90.0..=90.0, -180.0..=180.0).prop_map(|(lat, lon)| wp(lat, lon))
        }

        proptest! {
            #[test]
            fn prop_haversine_non_negative(a in valid_waypoint(), b in valid_waypoint()) {
                prop_assert!(haversine_km(&a, &b) >= 0.0);
            }

            #[test]
            fn prop_haversine_symmetric(a in valid_waypoint(), b in valid_waypoint()) {
                let dist_ab = haversine_km(&a, &b);
                let dist_ba = haversine_km(&b, &a);
                prop_assert!((dist_ab - dist_ba).abs() < 1e-10);
            }

            #[test]
            fn prop_haversine_same_point_is_zero(point in valid_waypoint()) {
                prop_assert_eq!(haversine_km(&point, &point), 0.0);
            }

            #[test]
            fn prop_haversine_bounded_by_half_earth_circumference(
                a in valid_waypoint(),
                b in valid_waypoint()
            ) {
                let dist = haversine_km(&a, &b);
                // Antipodal points are half the circumference apart
                let max_distance = std::f64::consts::PI * EARTH_RADIUS_KM;
                prop_assert!(dist <= max_distance + 0.1);
            }

            #[test]
            fn prop_matrix_symmetric_with_zero_diagonal(
                points in prop::collection::vec(valid_waypoint(), 2..12)
            ) {
                let matrix = DistanceMatrix::from_waypoints(&points);
                prop_assert!(matrix.is_symmetric(1e-10));
                for i in 0..matrix.size() {
                    prop_assert_eq!(matrix.get(i, i), 0.0);
                    for j in 0..matrix.size() {
                        prop_assert!(matrix.get(i, j) >= 0.0);
                    }
                }
            }
        }
    }
}
