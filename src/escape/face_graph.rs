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

//! Weighted adjacency graph over the finite faces of a triangulation.
//!
//! Node `0` is the unbounded outside; finite faces get ids `1..=F` in slot
//! order. A weight is the squared width of the narrowest gap crossed when
//! moving between the two nodes.

use crate::config::ExteriorWeight;
use crate::numeric::Exact;
use crate::operations::triangulation::Delaunay;

/// Id of the virtual node for unbounded free space.
pub const OUTSIDE: u32 = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceEdge {
    pub a: u32,
    pub b: u32,
    pub weight: Exact,
}

#[derive(Clone, Debug)]
pub struct FaceGraph {
    slot_ids: Vec<u32>,
    escape_widths: Vec<Exact>,
    edges: Vec<FaceEdge>,
}

impl FaceGraph {
    pub fn build(dt: &Delaunay, exterior: ExteriorWeight) -> Self {
        let mut slot_ids = vec![OUTSIDE; dt.face_slots()];
        let mut escape_widths = Vec::with_capacity(dt.num_finite_faces());
        for (k, f) in dt.finite_faces().enumerate() {
            slot_ids[f] = k as u32 + 1;
            let [a, _, _] = dt.vertices(f);
            escape_widths.push(dt.dual(f).squared_distance(dt.point(a)));
        }

        let mut edges = Vec::with_capacity(4 * escape_widths.len());
        for f in dt.finite_faces() {
            let id = slot_ids[f];
            let escape = &escape_widths[id as usize - 1];
            let v = dt.vertices(f);
            for i in 0..3 {
                let g = dt.neighbor(f, i);
                let next = if dt.is_infinite(g) { OUTSIDE } else { slot_ids[g] };
                // each shared edge once, from the higher id
                if next > id {
                    continue;
                }
                let weight = if next == OUTSIDE && exterior == ExteriorWeight::EscapeWidth {
                    escape.clone()
                } else {
                    dt.point(v[(i + 1) % 3])
                        .squared_distance(dt.point(v[(i + 2) % 3]))
                };
                edges.push(FaceEdge { a: id, b: next, weight });
            }
            edges.push(FaceEdge {
                a: id,
                b: OUTSIDE,
                weight: escape.clone(),
            });
        }

        log::debug!(
            "face graph: {} faces, {} edges",
            escape_widths.len(),
            edges.len()
        );

        FaceGraph {
            slot_ids,
            escape_widths,
            edges,
        }
    }

    /// Number of finite faces, `F`.
    pub fn num_faces(&self) -> usize {
        self.escape_widths.len()
    }

    /// `F + 1`, counting the outside node.
    pub fn node_count(&self) -> usize {
        self.escape_widths.len() + 1
    }

    /// Face id of a triangulation slot; `OUTSIDE` for ghost or dead slots.
    pub fn face_id(&self, slot: usize) -> u32 {
        self.slot_ids.get(slot).copied().unwrap_or(OUTSIDE)
    }

    /// Squared circumradius of face `id`; `None` for the outside node.
    pub fn escape_width(&self, id: u32) -> Option<&Exact> {
        let idx = id.checked_sub(1)?;
        self.escape_widths.get(idx as usize)
    }

    pub fn edges(&self) -> &[FaceEdge] {
        &self.edges
    }
}
