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

//! Maximum-weight spanning tree (Kruskal over decreasing weights).
//!
//! For any two nodes, the smallest weight on their tree path equals the
//! widest-path (maximin) value between them in the full graph.

use smallvec::SmallVec;

use crate::error::EscapeError;
use crate::escape::face_graph::FaceEdge;
use crate::escape::union_find::UnionFind;
use crate::numeric::Exact;

#[derive(Clone, Debug)]
pub struct SpanningTree {
    edges: Vec<FaceEdge>,
    adjacency: Vec<SmallVec<[usize; 4]>>,
}

impl SpanningTree {
    /// Errors if `edges` do not connect all `node_count` nodes.
    pub fn maximum(node_count: usize, edges: &[FaceEdge]) -> Result<Self, EscapeError> {
        let mut order: Vec<&FaceEdge> = edges.iter().collect();
        // stable, so equal weights keep their input order
        order.sort_by(|x, y| y.weight.cmp(&x.weight));

        let needed = node_count.saturating_sub(1);
        let mut uf = UnionFind::new(node_count);
        let mut tree = SpanningTree {
            edges: Vec::with_capacity(needed),
            adjacency: vec![SmallVec::new(); node_count],
        };

        for e in order {
            if tree.edges.len() == needed {
                break;
            }
            if uf.union(e.a, e.b) {
                let k = tree.edges.len();
                tree.adjacency[e.a as usize].push(k);
                tree.adjacency[e.b as usize].push(k);
                tree.edges.push(e.clone());
            }
        }

        if tree.edges.len() < needed {
            return Err(EscapeError::DisconnectedFaceGraph {
                nodes: node_count,
                components: node_count - tree.edges.len(),
            });
        }

        log::debug!(
            "spanning tree: {} of {} edges kept",
            tree.edges.len(),
            edges.len()
        );
        Ok(tree)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edges(&self) -> &[FaceEdge] {
        &self.edges
    }

    /// Tree neighbors of `node` with the weight of the connecting edge.
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, &Exact)> + '_ {
        self.adjacency[node as usize].iter().map(move |&k| {
            let e = &self.edges[k];
            let other = if e.a == node { e.b } else { e.a };
            (other, &e.weight)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: u32, b: u32, w: i64) -> FaceEdge {
        FaceEdge {
            a,
            b,
            weight: Exact::from(w),
        }
    }

    #[test]
    fn keeps_the_widest_edges() {
        let edges = [
            edge(1, 0, 1),
            edge(2, 1, 9),
            edge(2, 0, 5),
            edge(3, 2, 7),
            edge(3, 0, 2),
        ];
        let tree = SpanningTree::maximum(4, &edges).unwrap();
        let mut kept: Vec<i64> = tree
            .edges()
            .iter()
            .map(|e| num_traits::ToPrimitive::to_i64(&e.weight).unwrap())
            .collect();
        kept.sort_unstable();
        assert_eq!(kept, vec![5, 7, 9]);
        assert_eq!(tree.neighbors(2).count(), 3);
    }

    #[test]
    fn disconnected_graph_is_an_error() {
        let edges = [edge(1, 0, 3), edge(3, 2, 4)];
        let err = SpanningTree::maximum(4, &edges).unwrap_err();
        assert_eq!(
            err,
            EscapeError::DisconnectedFaceGraph {
                nodes: 4,
                components: 2
            }
        );
    }

    #[test]
    fn single_node_needs_no_edges() {
        let tree = SpanningTree::maximum(1, &[]).unwrap();
        assert_eq!(tree.node_count(), 1);
        assert!(tree.edges().is_empty());
    }
}
