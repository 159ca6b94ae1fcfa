// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use clearway::escape::face_graph::OUTSIDE;
use clearway::{EscapeConfig, EscapeMap, Exact, ExteriorWeight, Point2, Width};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn pts(raw: &[(i64, i64)]) -> Vec<Point2> {
    raw.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

fn random_points(rng: &mut StdRng, n: usize, span: i64) -> Vec<Point2> {
    (0..n)
        .map(|_| Point2::new(rng.random_range(-span..span), rng.random_range(-span..span)))
        .collect()
}

#[test]
fn far_outside_query_escapes() {
    let cluster = pts(&[(0, 0), (3, 1), (1, 4), (5, 5), (2, 2), (6, 0), (4, 3)]);
    let map = EscapeMap::build(&cluster).unwrap();
    let r = Exact::from(1);
    let s = Exact::from(0);
    assert!(map.can_escape(&Point2::new(1000, -1000), &(&r + &s)));
    assert_eq!(map.face_at(&Point2::new(1000, -1000)), OUTSIDE);
}

#[test]
fn two_obstacles_gap_of_ten() {
    let map = EscapeMap::build(&pts(&[(0, 0), (10, 0)])).unwrap();
    let midpoint = Point2::new(5, 0);
    assert!(!map.can_escape(&midpoint, &Exact::from(6)));
    assert!(map.can_escape(&midpoint, &Exact::from(4)));
}

#[test]
fn triangle_escape_width_bounds_inner_queries() {
    let obstacles = pts(&[(0, 0), (10, 0), (5, 9)]);
    let map = EscapeMap::build(&obstacles).unwrap();
    assert_eq!(map.face_count(), 1);
    assert_eq!(
        *map.bottleneck(1),
        Width::Finite(Exact::from_num_den(2809, 81))
    );

    let inside = Point2::new(5, 3);
    assert_eq!(map.face_at(&inside), 1);
    assert!(map.can_escape(&inside, &Exact::from(2)));
    assert!(!map.can_escape(&inside, &Exact::from(3)));
}

#[test]
fn hull_edge_weighting_lets_wide_gaps_through() {
    let obstacles = pts(&[(0, 0), (10, 0), (5, 9)]);
    let config = EscapeConfig {
        exterior_weight: ExteriorWeight::HullEdge,
        ..EscapeConfig::default()
    };
    let map = EscapeMap::build_with(&obstacles, &config).unwrap();
    assert_eq!(*map.bottleneck(1), Width::Finite(Exact::from(106)));

    let inside = Point2::new(5, 3);
    assert!(map.can_escape(&inside, &Exact::from(3)));
    assert!(map.can_escape(&inside, &Exact::from(5)));
    assert!(!map.can_escape(&inside, &Exact::from_num_den(26, 5)));
}

#[test]
fn proximity_fails_regardless_of_bottleneck() {
    let obstacles = pts(&[(0, 0), (100, 0), (50, 90)]);
    let map = EscapeMap::build(&obstacles).unwrap();
    // outside the hull, unbounded bottleneck, but too close to (0, 0)
    let q = Point2::new(-3, -4);
    assert_eq!(*map.bottleneck(map.face_at(&q)), Width::Unbounded);
    assert!(!map.can_escape(&q, &Exact::from_num_den(51, 10)));
    assert!(map.can_escape(&q, &Exact::from(5)));
}

#[test]
fn dense_grid_traps_wide_agents() {
    // spacing 2: every face has squared circumradius 2, every hull edge squared length 4
    let mut grid = Vec::new();
    for x in (0..=10).step_by(2) {
        for y in (0..=10).step_by(2) {
            grid.push((x, y));
        }
    }
    let grid = pts(&grid);
    let cell_center = Point2::new(5, 5);

    let map = EscapeMap::build(&grid).unwrap();
    assert!(map.can_escape(&cell_center, &Exact::from_num_den(1, 2)));
    assert!(!map.can_escape(&cell_center, &Exact::from(1)));

    let config = EscapeConfig {
        exterior_weight: ExteriorWeight::HullEdge,
        ..EscapeConfig::default()
    };
    let map = EscapeMap::build_with(&grid, &config).unwrap();
    assert!(map.can_escape(&cell_center, &Exact::from(1)));
    assert!(!map.can_escape(&cell_center, &Exact::from_num_den(11, 10)));
    assert!(map.can_escape(&Point2::new(-50, 5), &Exact::from(10)));
}

#[test]
fn queries_on_hull_and_shared_edges_use_the_face() {
    let obstacles = pts(&[(0, 0), (4, 0), (4, 4), (0, 5)]);
    let map = EscapeMap::build(&obstacles).unwrap();

    for q in [Point2::new(2, 2), Point2::new(2, 0), Point2::new(0, 2)] {
        let id = map.face_at(&q);
        assert_ne!(id, OUTSIDE, "query {q}");
        assert!(matches!(map.bottleneck(id), Width::Finite(_)));
    }
    // two units from both hull endpoints
    let on_hull = Point2::new(2, 0);
    assert!(map.can_escape(&on_hull, &Exact::from(0)));
    assert!(!map.can_escape(&on_hull, &Exact::from_num_den(21, 10)));
    assert_eq!(map.face_at(&Point2::new(2, -1)), OUTSIDE);
}

#[test]
fn outside_dominates_every_face() {
    let mut rng = StdRng::seed_from_u64(3);
    let map = EscapeMap::build(&random_points(&mut rng, 300, 10_000)).unwrap();
    let all = map.bottlenecks();
    assert_eq!(all[0], Width::Unbounded);
    assert_eq!(all[0].finite(), None);
    assert!(all.iter().skip(1).all(|w| w.finite().is_some()));
    assert!(all.iter().all(|w| *w <= all[0]));
}

#[test]
fn tree_bottleneck_never_exceeds_own_edges() {
    let mut rng = StdRng::seed_from_u64(4);
    let map = EscapeMap::build(&random_points(&mut rng, 200, 1_000)).unwrap();
    let tree = map.spanning_tree();
    assert_eq!(tree.edges().len(), map.face_count());
    for e in tree.edges() {
        let (a, b) = (map.bottleneck(e.a), map.bottleneck(e.b));
        let deeper = a.min(b);
        assert!(*deeper <= Width::Finite(e.weight.clone()));
    }
}

#[test]
fn rebuilding_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(5);
    let obstacles = random_points(&mut rng, 250, 50);
    let a = EscapeMap::build(&obstacles).unwrap();
    let b = EscapeMap::build(&obstacles).unwrap();
    assert_eq!(a.bottlenecks(), b.bottlenecks());
}

#[test]
fn answers_do_not_depend_on_obstacle_order() {
    let mut rng = StdRng::seed_from_u64(6);
    let obstacles = random_points(&mut rng, 150, 1_000_000);
    let queries: Vec<(Point2, Exact)> = (0..200)
        .map(|_| {
            let p = Point2::new(
                rng.random_range(-1_100_000..1_100_000i64),
                rng.random_range(-1_100_000..1_100_000i64),
            );
            (p, Exact::from(rng.random_range(0..150_000i64)))
        })
        .collect();

    let base = EscapeMap::build(&obstacles).unwrap();
    let expected: Vec<bool> = queries.iter().map(|(p, c)| base.can_escape(p, c)).collect();

    for seed in 0..3 {
        let mut shuffled = obstacles.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(100 + seed));
        let config = EscapeConfig {
            shuffle_insertion: false,
            ..EscapeConfig::default()
        };
        let map = EscapeMap::build_with(&shuffled, &config).unwrap();
        let got: Vec<bool> = queries.iter().map(|(p, c)| map.can_escape(p, c)).collect();
        assert_eq!(got, expected, "permutation {seed}");
    }
}

#[test]
fn degenerate_inputs_connect_to_outside() {
    for raw in [
        vec![],
        vec![(3, 3)],
        vec![(0, 0), (0, 0), (0, 0)],
        vec![(0, 0), (1, 2), (2, 4), (3, 6)],
    ] {
        let map = EscapeMap::build(&pts(&raw)).unwrap();
        assert_eq!(map.face_count(), 0);
        assert_eq!(map.bottlenecks(), &[Width::Unbounded]);
    }
}
