//! Closed tour type.

use serde::{Deserialize, Serialize};

use crate::error::TspError;

use crate::distance::DistanceMatrix;

/// A closed circuit over city indices.
///
/// Holds `n + 1` indices: every city exactly once, followed by the start
/// city again. Tours are built by the heuristics in
/// [`constructive`](crate::constructive) and are never mutated afterwards.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::Tour;
///
/// let tour = Tour::closed(vec![0, 2, 1]);
/// assert_eq!(tour.cities(), &[0, 2, 1, 0]);
/// assert_eq!(tour.num_cities(), 3);
/// assert!(tour.is_valid(3));
/// ```
///
/// Serialized as the plain closed index sequence; deserializing rejects
/// anything that is not a valid closed tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Closes an open visiting order by appending its first city.
    ///
    /// An empty order yields an empty tour.
    pub fn closed(mut order: Vec<usize>) -> Self {
        if let Some(&first) = order.first() {
            order.push(first);
        }
        Self { cities: order }
    }

    /// Wraps a sequence that is already closed (first == last).
    pub(crate) fn from_closed(cities: Vec<usize>) -> Self {
        debug_assert!(cities.len() >= 2 && cities.first() == cities.last());
        Self { cities }
    }

    /// The full closed sequence, including the repeated start city.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of distinct cities visited.
    pub fn num_cities(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// The city the tour starts and ends at.
    pub fn start(&self) -> Option<usize> {
        self.cities.first().copied()
    }

    /// Returns `true` if this is a closed tour over exactly cities `0..n`.
    pub fn is_valid(&self, n: usize) -> bool {
        if n == 0 || self.cities.len() != n + 1 || self.cities[0] != self.cities[n] {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.cities[..n] {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }

    /// Sum of consecutive edge distances, including the closing edge.
    pub fn total_distance(&self, distances: &DistanceMatrix) -> f64 {
        distances.tour_length(&self.cities)
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = TspError;

    /// Accepts a closed sequence over cities `0..n`, where `n = len - 1`.
    fn try_from(cities: Vec<usize>) -> Result<Self, Self::Error> {
        let tour = Self { cities };
        if !tour.is_valid(tour.num_cities()) {
            return Err(TspError::invalid_input(format!(
                "{:?} is not a closed tour",
                tour.cities
            )));
        }
        Ok(tour)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.cities
    }
}
