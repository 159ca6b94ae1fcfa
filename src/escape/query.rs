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

use crate::escape::EscapeMap;
use crate::escape::bottleneck::Width;
use crate::escape::face_graph::OUTSIDE;
use crate::geometry::Point2;
use crate::numeric::Exact;
use crate::operations::triangulation::Locate;

/// Squared corridor width needed by an agent with this clearance: `(2r)^2`.
pub fn required_gap(clearance: &Exact) -> Exact {
    &Exact::from(4) * &clearance.square()
}

impl EscapeMap {
    /// Face id containing `p`, or `OUTSIDE` beyond the convex hull.
    pub fn face_at(&self, p: &Point2) -> u32 {
        match self.triangulation.locate(p) {
            Locate::Face(slot) => self.faces.face_id(slot),
            Locate::Outside => OUTSIDE,
        }
    }

    /// Whether an agent at `p` can reach open space while staying at least
    /// `clearance` away from every obstacle.
    pub fn can_escape(&self, p: &Point2, clearance: &Exact) -> bool {
        let needed = clearance.square();
        if let Some(v) = self.triangulation.nearest_vertex(p) {
            if self.triangulation.point(v).squared_distance(p) < needed {
                return false;
            }
        }

        let id = self.face_at(p);
        Width::Finite(required_gap(clearance)) <= *self.bottleneck(id)
    }
}
