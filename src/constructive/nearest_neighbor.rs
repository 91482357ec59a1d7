//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from an origin city, always move to the
//! nearest unvisited city, then return to the origin.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use std::time::Instant;

use crate::distance::DistanceMatrix;
use crate::error::{require_cities, TspError, TspResult};
use crate::models::{Construction, Tour};

/// Constructs a tour with the nearest-neighbor heuristic starting at city 0.
///
/// Ties between equidistant cities go to the lowest index. A single city
/// yields the degenerate tour `[0, 0]` with distance 0.
///
/// # Errors
///
/// Returns [`TspError::InvalidInput`] for an empty matrix.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::Point;
/// use tsp_construct::distance::DistanceMatrix;
/// use tsp_construct::constructive::nearest_neighbor;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let result = nearest_neighbor(&dm).unwrap();
/// assert_eq!(result.tour().cities(), &[0, 1, 2, 3, 0]);
/// assert!((result.distance() - 4.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> TspResult<Construction> {
    nearest_neighbor_from(distances, 0)
}

/// Constructs a nearest-neighbor tour starting and ending at `start`.
///
/// # Errors
///
/// Returns [`TspError::InvalidInput`] for an empty matrix or if `start` is
/// not a city of the matrix.
pub fn nearest_neighbor_from(distances: &DistanceMatrix, start: usize) -> TspResult<Construction> {
    let n = distances.size();
    require_cities("nearest neighbor", n, 1)?;
    if start >= n {
        return Err(TspError::invalid_input(format!(
            "start city {start} is out of range for {n} cities"
        )));
    }

    let started = Instant::now();
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut order = Vec::with_capacity(n + 1);
    order.push(start);
    let mut current = start;

    while let Some(next) = nearest_unvisited(distances, current, &visited) {
        visited[next] = true;
        order.push(next);
        current = next;
    }

    Ok(Construction::finish(Tour::closed(order), distances, started))
}

/// Returns the unvisited city closest to `from`.
///
/// Only a strictly smaller distance replaces the incumbent, so the first
/// city scanned wins ties.
fn nearest_unvisited(distances: &DistanceMatrix, from: usize, visited: &[bool]) -> Option<usize> {
    visited
        .iter()
        .enumerate()
        .filter(|&(_, &v)| !v)
        .map(|(city, _)| (city, distances.get(from, city)))
        .fold(None, |best: Option<(usize, f64)>, (city, d)| match best {
            Some((_, best_d)) if d < best_d => Some((city, d)),
            Some(_) => best,
            None => Some((city, d)),
        })
        .map(|(city, _)| city)
}
