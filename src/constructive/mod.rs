//! Constructive heuristics for building closed TSP tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor tour, O(n²)
//! - [`cheapest_insertion`] — Global cheapest (city, position) insertion, O(n³)
//!
//! Both read a shared [`DistanceMatrix`] and own all of their working state,
//! so they can run concurrently on the same matrix.

mod cheapest_insertion;
mod nearest_neighbor;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use cheapest_insertion::cheapest_insertion;
pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_from};

use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::models::Construction;

/// A tour construction heuristic, selectable at runtime.
///
/// # Examples
///
/// ```
/// use tsp_construct::constructive::Heuristic;
/// use tsp_construct::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 2.0, 2.0, 0.0]).unwrap();
/// for h in Heuristic::ALL {
///     let result = h.run(&dm).unwrap();
///     assert_eq!(result.distance(), 4.0);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// See [`nearest_neighbor`].
    NearestNeighbor,
    /// See [`cheapest_insertion`].
    CheapestInsertion,
}

impl Heuristic {
    /// Every available heuristic, in reporting order.
    pub const ALL: [Heuristic; 2] = [Heuristic::NearestNeighbor, Heuristic::CheapestInsertion];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::NearestNeighbor => "nearest neighbor",
            Heuristic::CheapestInsertion => "cheapest insertion",
        }
    }

    /// Smallest city count the heuristic accepts.
    pub fn min_cities(&self) -> usize {
        match self {
            Heuristic::NearestNeighbor => 1,
            Heuristic::CheapestInsertion => 2,
        }
    }

    /// Builds a tour over `distances`.
    pub fn run(&self, distances: &DistanceMatrix) -> TspResult<Construction> {
        match self {
            Heuristic::NearestNeighbor => nearest_neighbor(distances),
            Heuristic::CheapestInsertion => cheapest_insertion(distances),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
