//! Comparison report types.

use std::fmt;

use serde::Serialize;

use crate::constructive::Heuristic;
use crate::models::Tour;

/// Ratio of a tour length to the lower bound.
///
/// Returns `None` when the bound is not strictly positive (a single city, or
/// all cities coincident), where the ratio is undefined.
///
/// # Examples
///
/// ```
/// use tsp_construct::evaluation::quality_ratio;
///
/// assert_eq!(quality_ratio(4.0, 3.0), Some(4.0 / 3.0));
/// assert_eq!(quality_ratio(0.0, 0.0), None);
/// ```
pub fn quality_ratio(distance: f64, lower_bound: f64) -> Option<f64> {
    (lower_bound > 0.0).then(|| distance / lower_bound)
}

/// One graded heuristic run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Heuristic that produced the tour.
    pub heuristic: Heuristic,
    /// Total tour length.
    pub distance: f64,
    /// Construction wall time in milliseconds.
    pub elapsed_ms: f64,
    /// `distance / lower_bound`, if defined.
    pub quality_ratio: Option<f64>,
    /// The closed tour.
    pub tour: Tour,
}

/// Results of running several heuristics on one instance.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Number of cities in the instance.
    pub num_cities: usize,
    /// MST lower bound.
    pub lower_bound: f64,
    /// Graded runs, in the order requested.
    pub runs: Vec<RunReport>,
    /// Heuristics not run because the instance was too small.
    pub skipped: Vec<Heuristic>,
}

impl Comparison {
    /// The run with the shortest tour. Earlier runs win ties.
    pub fn best(&self) -> Option<&RunReport> {
        self.runs.iter().fold(None, |best, run| match best {
            Some(b) if run.distance < b.distance => Some(run),
            Some(_) => best,
            None => Some(run),
        })
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cities: {}", self.num_cities)?;
        writeln!(f, "MST lower bound: {:.4}", self.lower_bound)?;
        writeln!(
            f,
            "{:<20} {:>12} {:>8} {:>12}",
            "heuristic", "distance", "ratio", "time (ms)"
        )?;
        for run in &self.runs {
            let ratio = run
                .quality_ratio
                .map_or_else(|| "-".to_string(), |r| format!("{r:.4}"));
            writeln!(
                f,
                "{:<20} {:>12.4} {:>8} {:>12.3}",
                run.heuristic.name(),
                run.distance,
                ratio,
                run.elapsed_ms
            )?;
        }
        for h in &self.skipped {
            writeln!(f, "{:<20} skipped (too few cities)", h.name())?;
        }
        if let Some(best) = self.best() {
            write!(f, "best: {} {:?}", best.heuristic, best.tour.cities())?;
        }
        Ok(())
    }
}
