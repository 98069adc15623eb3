//! Visiting-order construction and local-search improvement.
//!
//! A tour is a permutation of `[0, N)` over the waypoint indices, traversed
//! as an open path: the last stop has no edge back to the first.

use crate::distance::DistanceMatrix;

/// Builds an initial tour greedily, always extending to the closest
/// unvisited waypoint.
///
/// The start is fixed at index 0 and ties resolve to the lowest candidate
/// index, so the result is deterministic for a given input order. O(N²).
pub fn nearest_neighbor_tour(matrix: &DistanceMatrix) -> Vec<usize> {
    let n = matrix.size();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    visited[0] = true;
    tour.push(0);

    while tour.len() < n {
        let current = tour[tour.len() - 1];
        let mut best: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let d = matrix.get(current, candidate);
            let closer = match best {
                Some((_, best_d)) => d < best_d,
                None => true,
            };
            if closer {
                best = Some((candidate, d));
            }
        }
        match best {
            Some((next, _)) => {
                visited[next] = true;
                tour.push(next);
            }
            None => break,
        }
    }

    tour
}

/// Shortens a tour in place with first-improvement 2-opt moves until no
/// swap helps any more.
///
/// For edge pairs `(tour[i], tour[i+1])` and `(tour[k], tour[k+1])` with
/// `k >= i + 2`, a strictly cheaper reconnection reverses `tour[i+1..=k]`
/// and restarts the scan. When `k + 1` falls past the end, the comparison
/// borrows the tour's first stop as a virtual successor, which slightly
/// biases against moves touching the final edge. Each accepted swap strictly
/// decreases the tour length plus that virtual closing edge, so the loop
/// terminates. O(N³) worst case over the full convergence.
pub fn two_opt(tour: &mut [usize], matrix: &DistanceMatrix) {
    let n = tour.len();
    if n < 3 {
        return;
    }

    let mut improved = true;
    while improved {
        improved = false;
        'scan: for i in 0..n - 2 {
            for k in i + 2..n {
                let a = tour[i];
                let b = tour[i + 1];
                let c = tour[k];
                let d = if k + 1 < n { tour[k + 1] } else { tour[0] };

                let current = matrix.get(a, b) + matrix.get(c, d);
                let swapped = matrix.get(a, c) + matrix.get(b, d);
                if swapped < current {
                    tour[i + 1..=k].reverse();
                    improved = true;
                    break 'scan;
                }
            }
        }
    }
}

/// Total open-path length of a tour.
pub fn tour_length(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    tour.windows(2).map(|pair| matrix.get(pair[0], pair[1])).sum()
}
