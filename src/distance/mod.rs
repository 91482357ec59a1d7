//! Distance matrices.
//!
//! Provides the dense Euclidean distance matrix every algorithm reads from.

mod matrix;

pub use matrix::DistanceMatrix;
