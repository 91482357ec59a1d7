//! Heuristic output type.

use std::time::{Duration, Instant};

use serde::Serialize;

use super::Tour;
use crate::distance::DistanceMatrix;

/// The result of one heuristic run: a closed tour, its length, and the wall
/// time spent building it.
///
/// `elapsed` is informational only; two runs on the same matrix produce
/// identical `tour` and `distance` but generally different `elapsed`.
#[derive(Debug, Clone, Serialize)]
pub struct Construction {
    tour: Tour,
    distance: f64,
    elapsed: Duration,
}

impl Construction {
    /// Wraps a finished tour, measuring its length and the time since `started`.
    pub(crate) fn finish(tour: Tour, distances: &DistanceMatrix, started: Instant) -> Self {
        let distance = tour.total_distance(distances);
        Self {
            tour,
            distance,
            elapsed: started.elapsed(),
        }
    }

    /// The constructed tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Total tour length, including the closing edge.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Wall time spent constructing the tour.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Consumes the construction, returning the tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }
}
