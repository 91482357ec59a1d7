//! Cheapest-insertion constructive heuristic.
//!
//! # Algorithm
//!
//! Starting from the two-city circuit `[0, 1, 0]`, each round evaluates every
//! pair of unplaced city `c` and tour edge `(a, b)`:
//!
//! ```text
//! cost = d(a, c) + d(c, b) - d(a, b)
//! ```
//!
//! and inserts the pair with the globally smallest cost. The city is not
//! chosen first: city and position are minimised together over everything
//! still unplaced.
//!
//! # Complexity
//!
//! O(n³): n rounds × O(n) cities × O(n) positions.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use std::time::Instant;

use crate::distance::DistanceMatrix;
use crate::error::{require_cities, TspResult};
use crate::models::{Construction, Tour};

/// A candidate insertion of `city` between tour positions `position` and
/// `position + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Insertion {
    city: usize,
    position: usize,
    cost: f64,
}

/// Constructs a tour with the cheapest-insertion heuristic.
///
/// Ties go to the lowest city index, then the lowest position.
///
/// # Errors
///
/// Returns [`TspError::InvalidInput`](crate::error::TspError::InvalidInput)
/// for fewer than two cities, since the seed circuit needs two.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::Point;
/// use tsp_construct::distance::DistanceMatrix;
/// use tsp_construct::constructive::cheapest_insertion;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let result = cheapest_insertion(&dm).unwrap();
/// assert!(result.tour().is_valid(4));
/// assert!((result.distance() - 4.0).abs() < 1e-10);
/// ```
pub fn cheapest_insertion(distances: &DistanceMatrix) -> TspResult<Construction> {
    let n = distances.size();
    require_cities("cheapest insertion", n, 2)?;

    let started = Instant::now();
    let mut tour = Vec::with_capacity(n + 1);
    tour.extend([0, 1, 0]);
    let mut unvisited: Vec<usize> = (2..n).collect();

    while let Some(best) = cheapest_insertion_pair(distances, &tour, &unvisited) {
        tour.insert(best.position + 1, best.city);
        unvisited.retain(|&c| c != best.city);
    }

    Ok(Construction::finish(
        Tour::from_closed(tour),
        distances,
        started,
    ))
}

/// Finds the minimum-cost (city, position) pair over all unvisited cities
/// and all edges of the closed `tour`.
///
/// `unvisited` must be sorted ascending; a candidate replaces the incumbent
/// only when strictly cheaper, so scan order decides ties.
fn cheapest_insertion_pair(
    distances: &DistanceMatrix,
    tour: &[usize],
    unvisited: &[usize],
) -> Option<Insertion> {
    unvisited
        .iter()
        .flat_map(|&city| {
            tour.windows(2).enumerate().map(move |(position, edge)| {
                let (a, b) = (edge[0], edge[1]);
                Insertion {
                    city,
                    position,
                    cost: distances.get(a, city) + distances.get(city, b) - distances.get(a, b),
                }
            })
        })
        .fold(None, |best: Option<Insertion>, candidate| match best {
            Some(b) if candidate.cost < b.cost => Some(candidate),
            Some(_) => best,
            None => Some(candidate),
        })
}
