//! Tour evaluator that runs heuristics and grades them against the MST bound.

use log::{debug, warn};

use super::{quality_ratio, Comparison, RunReport};
use crate::bound::mst_lower_bound;
use crate::constructive::Heuristic;
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::models::Construction;

/// Runs heuristics on one instance and compares them to its lower bound.
///
/// The bound is computed once in [`new`](Self::new) and reused for every
/// run.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::Point;
/// use tsp_construct::distance::DistanceMatrix;
/// use tsp_construct::constructive::Heuristic;
/// use tsp_construct::evaluation::TourEvaluator;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let evaluator = TourEvaluator::new(&dm).unwrap();
/// assert!((evaluator.lower_bound() - 3.0).abs() < 1e-10);
///
/// let report = evaluator.evaluate(Heuristic::NearestNeighbor).unwrap();
/// assert!((report.quality_ratio.unwrap() - 4.0 / 3.0).abs() < 1e-10);
/// ```
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
    lower_bound: f64,
}

impl<'a> TourEvaluator<'a> {
    /// Creates an evaluator, computing the MST bound of `distances`.
    ///
    /// # Errors
    ///
    /// Fails with [`TspError::InvalidInput`](crate::error::TspError::InvalidInput)
    /// for an empty matrix.
    pub fn new(distances: &'a DistanceMatrix) -> TspResult<Self> {
        let lower_bound = mst_lower_bound(distances)?;
        debug!(
            "MST lower bound for {} cities: {lower_bound:.4}",
            distances.size()
        );
        Ok(Self {
            distances,
            lower_bound,
        })
    }

    /// The MST lower bound of this instance.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Runs one heuristic and grades its tour.
    pub fn evaluate(&self, heuristic: Heuristic) -> TspResult<RunReport> {
        let construction = heuristic.run(self.distances)?;
        debug!(
            "{heuristic}: distance {:.4} in {:?}",
            construction.distance(),
            construction.elapsed()
        );
        Ok(self.grade(heuristic, construction))
    }

    /// Runs every heuristic in `heuristics`, skipping those that need more
    /// cities than the instance has.
    pub fn compare(&self, heuristics: &[Heuristic]) -> TspResult<Comparison> {
        let n = self.distances.size();
        let mut runs = Vec::with_capacity(heuristics.len());
        let mut skipped = Vec::new();

        for &heuristic in heuristics {
            if n < heuristic.min_cities() {
                warn!(
                    "skipping {heuristic}: needs at least {} cities, instance has {n}",
                    heuristic.min_cities()
                );
                skipped.push(heuristic);
                continue;
            }
            runs.push(self.evaluate(heuristic)?);
        }

        Ok(Comparison {
            num_cities: n,
            lower_bound: self.lower_bound,
            runs,
            skipped,
        })
    }

    fn grade(&self, heuristic: Heuristic, construction: Construction) -> RunReport {
        let distance = construction.distance();
        let elapsed_ms = construction.elapsed().as_secs_f64() * 1e3;
        RunReport {
            heuristic,
            distance,
            elapsed_ms,
            quality_ratio: quality_ratio(distance, self.lower_bound),
            tour: construction.into_tour(),
        }
    }
}

/// Computes the lower bound and runs `heuristics` on `distances`.
///
/// Shorthand for [`TourEvaluator::new`] followed by
/// [`TourEvaluator::compare`].
pub fn compare(distances: &DistanceMatrix, heuristics: &[Heuristic]) -> TspResult<Comparison> {
    TourEvaluator::new(distances)?.compare(heuristics)
}
