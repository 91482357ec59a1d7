//! Tour evaluation and heuristic comparison.
//!
//! Runs the constructive heuristics on one instance, grades each tour by its
//! ratio to the MST lower bound, and collects the results in a
//! [`Comparison`] that can be printed or serialized.

mod evaluator;
mod report;

pub use evaluator::{compare, TourEvaluator};
pub use report::{quality_ratio, Comparison, RunReport};
