//! City coordinates and random instance generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{TspError, TspResult};

/// A city location on the Euclidean plane.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Generates `n` points uniformly distributed in `[0, width) × [0, height)`.
///
/// The same `seed` always yields the same points. With `None` the generator
/// is seeded from OS entropy.
///
/// # Errors
///
/// Returns [`TspError::InvalidInput`] if either extent is not a positive
/// finite number.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::generate_points;
///
/// let points = generate_points(10, 100.0, 100.0, Some(7)).unwrap();
/// assert_eq!(points.len(), 10);
/// assert!(points.iter().all(|p| (0.0..100.0).contains(&p.x())));
/// ```
pub fn generate_points(
    n: usize,
    width: f64,
    height: f64,
    seed: Option<u64>,
) -> TspResult<Vec<Point>> {
    for (name, extent) in [("width", width), ("height", height)] {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(TspError::invalid_input(format!(
                "{name} must be positive and finite, got {extent}"
            )));
        }
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    Ok((0..n)
        .map(|_| Point::new(rng.random_range(0.0..width), rng.random_range(0.0..height)))
        .collect())
}
