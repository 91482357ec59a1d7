//! Domain model types for Euclidean TSP instances.
//!
//! Points are the immutable inputs; tours are the closed circuits the
//! heuristics produce, wrapped in a [`Construction`] with their length and
//! build time.

mod construction;
mod point;
mod tour;

pub use construction::Construction;
pub use point::{generate_points, Point};
pub use tour::Tour;
