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

use crate::error::EscapeError;
use crate::escape::face_graph::OUTSIDE;
use crate::escape::spanning_tree::SpanningTree;
use crate::numeric::Exact;

/// Squared corridor width. `Unbounded` sorts above every finite width and
/// marks the outside node.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    Finite(Exact),
    Unbounded,
}

impl Width {
    pub fn finite(&self) -> Option<&Exact> {
        match self {
            Width::Finite(w) => Some(w),
            Width::Unbounded => None,
        }
    }
}

/// Bottleneck value of every node: the smallest edge weight on its tree path
/// to the outside node. Uses an explicit stack, so chain-shaped trees are fine.
pub fn propagate(tree: &SpanningTree) -> Result<Vec<Width>, EscapeError> {
    let n = tree.node_count();
    let mut bottleneck = vec![Width::Unbounded; n];
    if n == 0 {
        return Ok(bottleneck);
    }

    let mut visited = vec![false; n];
    visited[OUTSIDE as usize] = true;
    let mut stack = vec![OUTSIDE];
    while let Some(node) = stack.pop() {
        for (child, weight) in tree.neighbors(node) {
            if visited[child as usize] {
                continue;
            }
            visited[child as usize] = true;
            let through = Width::Finite(weight.clone());
            bottleneck[child as usize] = through.min(bottleneck[node as usize].clone());
            stack.push(child);
        }
    }

    if let Some(face) = visited.iter().position(|&v| !v) {
        return Err(EscapeError::UnreachableFace { face: face as u32 });
    }
    Ok(bottleneck)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::escape::face_graph::FaceEdge;

    /// Widest path from the outside node by repeated relaxation.
    fn brute_force(n: usize, edges: &[FaceEdge]) -> Vec<Option<Width>> {
        let mut best: Vec<Option<Width>> = vec![None; n];
        best[0] = Some(Width::Unbounded);
        for _ in 0..n {
            for e in edges {
                for (from, to) in [(e.a, e.b), (e.b, e.a)] {
                    if let Some(reach) = best[from as usize].clone() {
                        let cand = reach.min(Width::Finite(e.weight.clone()));
                        if best[to as usize].as_ref().is_none_or(|cur| cand > *cur) {
                            best[to as usize] = Some(cand);
                        }
                    }
                }
            }
        }
        best
    }

    #[test]
    fn outside_is_never_the_bottleneck() {
        let edges = vec![
            FaceEdge { a: 1, b: 0, weight: Exact::from(4) },
            FaceEdge { a: 2, b: 1, weight: Exact::from(9) },
        ];
        let tree = SpanningTree::maximum(3, &edges).unwrap();
        let b = propagate(&tree).unwrap();
        assert_eq!(b[0], Width::Unbounded);
        assert_eq!(b[1], Width::Finite(Exact::from(4)));
        assert_eq!(b[2], Width::Finite(Exact::from(4)));
        assert!(b.iter().all(|w| *w <= b[0]));
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let n = 200_000u32;
        let edges: Vec<FaceEdge> = (1..n)
            .map(|i| FaceEdge {
                a: i,
                b: i - 1,
                weight: Exact::from(i64::from(n - i)),
            })
            .collect();
        let tree = SpanningTree::maximum(n as usize, &edges).unwrap();
        let b = propagate(&tree).unwrap();
        assert_eq!(b[n as usize - 1], Width::Finite(Exact::from(1)));
    }

    #[test]
    fn matches_widest_path_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..200 {
            let n = rng.random_range(2..12usize);
            let mut edges = Vec::new();
            // guarantee connectivity through a random spine to node 0
            for v in 1..n {
                let u = rng.random_range(0..v);
                edges.push(FaceEdge {
                    a: v as u32,
                    b: u as u32,
                    weight: Exact::from(rng.random_range(0..20i64)),
                });
            }
            for _ in 0..rng.random_range(0..3 * n) {
                let a = rng.random_range(0..n) as u32;
                let b = rng.random_range(0..n) as u32;
                if a != b {
                    edges.push(FaceEdge {
                        a,
                        b,
                        weight: Exact::from(rng.random_range(0..20i64)),
                    });
                }
            }

            let tree = SpanningTree::maximum(n, &edges).unwrap();
            let got = propagate(&tree).unwrap();
            let want = brute_force(n, &edges);
            for v in 0..n {
                assert_eq!(Some(got[v].clone()), want[v], "node {v}");
            }
        }
    }
}
