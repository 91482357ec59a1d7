//! Dense distance matrix.

use crate::error::{TspError, TspResult};
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per instance and shared read-only by every algorithm. Matrices
/// built from points are symmetric with a zero diagonal; explicit data can be
/// checked with [`validate`](Self::validate).
///
/// # Examples
///
/// ```
/// use tsp_construct::models::Point;
/// use tsp_construct::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self {
        let len = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("matrix size {size} overflows"));
        Self {
            data: vec![0.0; len],
            size,
        }
    }

    /// Computes the pairwise Euclidean distance matrix of `points`.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidInput`] if `size * size` overflows or the
    /// data length doesn't match it.
    pub fn from_data(size: usize, data: Vec<f64>) -> TspResult<Self> {
        let expected = size
            .checked_mul(size)
            .ok_or_else(|| TspError::invalid_input(format!("matrix size {size} overflows")))?;
        if data.len() != expected {
            return Err(TspError::invalid_input(format!(
                "matrix of size {size} needs {expected} entries, got {}",
                data.len()
            )));
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidInput`] if any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> TspResult<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(TspError::invalid_input(format!(
                "matrix is not square: row {i} has {} entries, expected {size}",
                row.len()
            )));
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            size,
        })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks that every entry is finite and non-negative, the diagonal is
    /// zero and the matrix is symmetric within `tol`.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidInput`] describing the first problem found.
    pub fn validate(&self, tol: f64) -> TspResult<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                let d = self.get(i, j);
                if !d.is_finite() || d < 0.0 {
                    return Err(TspError::invalid_input(format!(
                        "distance ({i}, {j}) = {d} is not a finite non-negative number"
                    )));
                }
                if i == j && d > tol {
                    return Err(TspError::invalid_input(format!(
                        "diagonal entry ({i}, {i}) = {d} is not zero"
                    )));
                }
            }
        }
        if !self.is_symmetric(tol) {
            return Err(TspError::invalid_input("matrix is not symmetric"));
        }
        Ok(())
    }

    /// Sum of distances between consecutive cities of `path`.
    ///
    /// The path is not closed implicitly: pass a closed sequence to get a
    /// tour length.
    pub fn tour_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
        assert!(dm.validate(1e-10).is_ok());
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_data_overflowing_size() {
        let err = DistanceMatrix::from_data(usize::MAX, vec![]).unwrap_err();
        assert!(err.is_invalid_input());
        let err = DistanceMatrix::from_data(1usize << (usize::BITS / 2), vec![]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_new_overflowing_size() {
        let _ = DistanceMatrix::new(usize::MAX);
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 2.0], vec![2.0, 0.0]]).expect("square");
        assert_eq!(dm.size(), 2);
        assert_eq!(dm.get(1, 0), 2.0);
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 2.0], vec![2.0]]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::from_points(&[]);
        assert_eq!(dm.size(), 0);
        assert!(dm.validate(1e-10).is_ok());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
        assert!(dm.validate(1e-10).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        let negative = DistanceMatrix::from_data(2, vec![0.0, -1.0, -1.0, 0.0]).expect("sized");
        assert!(negative.validate(1e-10).is_err());

        let nan = DistanceMatrix::from_data(2, vec![0.0, f64::NAN, f64::NAN, 0.0]).expect("sized");
        assert!(nan.validate(1e-10).is_err());

        let diagonal = DistanceMatrix::from_data(2, vec![1.0, 2.0, 2.0, 0.0]).expect("sized");
        assert!(diagonal.validate(1e-10).is_err());
    }

    #[test]
    fn test_tour_length() {
        let dm = DistanceMatrix::from_points(&sample_points());
        // 0→1 (5) + 1→2 (5) + 2→0 (8)
        assert!((dm.tour_length(&[0, 1, 2, 0]) - 18.0).abs() < 1e-10);
        assert_eq!(dm.tour_length(&[1]), 0.0);
        assert_eq!(dm.tour_length(&[]), 0.0);
    }
}
