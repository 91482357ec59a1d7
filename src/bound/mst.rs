//! Minimum spanning tree lower bound.
//!
//! # Algorithm
//!
//! Prim's algorithm with a binary min-heap and lazy deletion: whenever a
//! cheaper connection to a non-tree city is found it is pushed as a new heap
//! entry, and entries for cities already in the tree are discarded when
//! popped.
//!
//! Removing any edge from a tour leaves a spanning path, so the MST weight
//! never exceeds the optimal tour length.
//!
//! # Complexity
//!
//! O(n² log n) on a dense matrix.
//!
//! # Reference
//!
//! Prim, R.C. (1957). "Shortest connection networks and some
//! generalizations", *Bell System Technical Journal* 36(6), 1389-1401.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::distance::DistanceMatrix;
use crate::error::{require_cities, TspError, TspResult};

/// Heap entry ordered so that `BinaryHeap` pops the lightest edge first.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    weight: f64,
    city: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.city.cmp(&self.city))
    }
}

/// Computes the minimum spanning tree weight of the complete graph
/// described by `distances`, rooted at city 0.
///
/// # Errors
///
/// Returns [`TspError::InvalidInput`] for an empty matrix.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::Point;
/// use tsp_construct::distance::DistanceMatrix;
/// use tsp_construct::bound::mst_lower_bound;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((mst_lower_bound(&dm).unwrap() - 3.0).abs() < 1e-10);
/// ```
pub fn mst_lower_bound(distances: &DistanceMatrix) -> TspResult<f64> {
    mst_lower_bound_from(distances, 0)
}

/// Computes the minimum spanning tree weight, growing the tree from `root`.
///
/// The weight does not depend on the root beyond floating-point summation
/// order.
///
/// # Errors
///
/// Returns [`TspError::InvalidInput`] for an empty matrix or if `root` is
/// not a city of the matrix.
pub fn mst_lower_bound_from(distances: &DistanceMatrix, root: usize) -> TspResult<f64> {
    let n = distances.size();
    require_cities("MST lower bound", n, 1)?;
    if root >= n {
        return Err(TspError::invalid_input(format!(
            "root city {root} is out of range for {n} cities"
        )));
    }

    let mut min_edge = vec![f64::INFINITY; n];
    let mut in_tree = vec![false; n];
    let mut heap = BinaryHeap::with_capacity(n);
    let mut total = 0.0;

    min_edge[root] = 0.0;
    heap.push(Frontier {
        weight: 0.0,
        city: root,
    });

    while let Some(Frontier { weight, city }) = heap.pop() {
        if in_tree[city] {
            continue; // stale
        }
        in_tree[city] = true;
        total += weight;

        for next in 0..n {
            if in_tree[next] {
                continue;
            }
            let d = distances.get(city, next);
            if d < min_edge[next] {
                min_edge[next] = d;
                heap.push(Frontier {
                    weight: d,
                    city: next,
                });
            }
        }
    }

    Ok(total)
}
