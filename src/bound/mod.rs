//! Lower bounds on the optimal tour length.
//!
//! - [`mst_lower_bound`] — Minimum spanning tree weight (Prim, 1957), O(n² log n)

mod mst;

pub use mst::{mst_lower_bound, mst_lower_bound_from};
