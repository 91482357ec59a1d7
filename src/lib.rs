//! # tsp-construct
//!
//! Constructive heuristics for the Euclidean Traveling Salesman Problem,
//! with a minimum spanning tree lower bound to grade the tours they build.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Tour, Construction) and point generation
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor, Cheapest Insertion)
//! - [`bound`] — MST lower bound (Prim)
//! - [`evaluation`] — Quality ratios and heuristic comparison
//! - [`config`] — Instance configuration
//! - [`error`] — Error type shared by all of the above

pub mod bound;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
