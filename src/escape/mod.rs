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

//! Escape-feasibility structure over a fixed obstacle set.
//!
//! Built once per obstacle set: triangulate, derive the face graph, keep its
//! maximum spanning tree and push bottleneck widths out from the outside node.
//! Queries are read-only afterwards.

pub mod bottleneck;
pub mod face_graph;
pub mod query;
pub mod spanning_tree;
pub mod union_find;

use crate::config::EscapeConfig;
use crate::error::EscapeError;
use crate::geometry::Point2;
use crate::operations::triangulation::Delaunay;

use bottleneck::{Width, propagate};
use face_graph::FaceGraph;
use spanning_tree::SpanningTree;

#[derive(Clone, Debug)]
pub struct EscapeMap {
    triangulation: Delaunay,
    faces: FaceGraph,
    tree: SpanningTree,
    bottleneck: Vec<Width>,
}

impl EscapeMap {
    /// Build with default settings.
    pub fn build(obstacles: &[Point2]) -> Result<Self, EscapeError> {
        Self::build_with(obstacles, &EscapeConfig::default())
    }

    pub fn build_with(obstacles: &[Point2], config: &EscapeConfig) -> Result<Self, EscapeError> {
        let triangulation = Delaunay::build_with(obstacles, config.shuffle_seed());
        let faces = FaceGraph::build(&triangulation, config.exterior_weight);
        let tree = SpanningTree::maximum(faces.node_count(), faces.edges())?;
        let bottleneck = propagate(&tree)?;

        Ok(EscapeMap {
            triangulation,
            faces,
            tree,
            bottleneck,
        })
    }

    pub fn triangulation(&self) -> &Delaunay {
        &self.triangulation
    }

    pub fn face_graph(&self) -> &FaceGraph {
        &self.faces
    }

    pub fn spanning_tree(&self) -> &SpanningTree {
        &self.tree
    }

    /// Number of finite faces.
    pub fn face_count(&self) -> usize {
        self.faces.num_faces()
    }

    /// Widest squared corridor from face `id` to the outside; index 0 is the outside.
    pub fn bottleneck(&self, id: u32) -> &Width {
        &self.bottleneck[id as usize]
    }

    pub fn bottlenecks(&self) -> &[Width] {
        &self.bottleneck
    }
}
