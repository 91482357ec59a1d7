//! Property-based tests for the constructive heuristics and the MST bound.

use proptest::prelude::*;

use tsp_construct::bound::{mst_lower_bound, mst_lower_bound_from};
use tsp_construct::constructive::{cheapest_insertion, nearest_neighbor, Heuristic};
use tsp_construct::distance::DistanceMatrix;
use tsp_construct::models::Point;

fn points(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), min..max)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

proptest! {
    /// Both heuristics visit every city exactly once and return to the start.
    #[test]
    fn prop_tours_are_permutations(pts in points(2, 30)) {
        let dm = DistanceMatrix::from_points(&pts);
        for h in Heuristic::ALL {
            let result = h.run(&dm).unwrap();
            let tour = result.tour();
            prop_assert!(tour.is_valid(pts.len()), "{h}: {:?}", tour.cities());
            prop_assert_eq!(tour.cities().len(), pts.len() + 1);
            prop_assert_eq!(tour.cities().first(), tour.cities().last());
        }
    }

    /// The reported distance matches an independent edge sum.
    #[test]
    fn prop_distance_matches_edges(pts in points(2, 30)) {
        let dm = DistanceMatrix::from_points(&pts);
        for h in Heuristic::ALL {
            let result = h.run(&dm).unwrap();
            let cities = result.tour().cities();
            let recomputed: f64 = cities
                .windows(2)
                .map(|w| pts[w[0]].distance_to(&pts[w[1]]))
                .sum();
            prop_assert!(
                (result.distance() - recomputed).abs() < 1e-9,
                "{h}: {} vs {recomputed}",
                result.distance()
            );
        }
    }

    /// The MST weight never exceeds either heuristic's tour length.
    #[test]
    fn prop_mst_is_lower_bound(pts in points(1, 30)) {
        let dm = DistanceMatrix::from_points(&pts);
        let bound = mst_lower_bound(&dm).unwrap();
        prop_assert!(bound >= 0.0);
        let nn = nearest_neighbor(&dm).unwrap();
        prop_assert!(bound <= nn.distance() + 1e-9, "{bound} > {}", nn.distance());
        if pts.len() >= 2 {
            let ci = cheapest_insertion(&dm).unwrap();
            prop_assert!(bound <= ci.distance() + 1e-9, "{bound} > {}", ci.distance());
        }
    }

    /// Growing the tree from any root yields the same weight.
    #[test]
    fn prop_mst_root_invariant(pts in points(1, 25), root_seed in any::<usize>()) {
        let dm = DistanceMatrix::from_points(&pts);
        let root = root_seed % pts.len();
        let base = mst_lower_bound(&dm).unwrap();
        let other = mst_lower_bound_from(&dm, root).unwrap();
        prop_assert!((base - other).abs() < 1e-9, "{base} vs {other}");
    }

    /// Repeated runs are bit-identical.
    #[test]
    fn prop_deterministic(pts in points(2, 20)) {
        let dm = DistanceMatrix::from_points(&pts);
        for h in Heuristic::ALL {
            let a = h.run(&dm).unwrap();
            let b = h.run(&dm).unwrap();
            prop_assert_eq!(a.tour(), b.tour());
            prop_assert_eq!(a.distance().to_bits(), b.distance().to_bits());
        }
        prop_assert_eq!(
            mst_lower_bound(&dm).unwrap().to_bits(),
            mst_lower_bound(&dm).unwrap().to_bits()
        );
    }
}
