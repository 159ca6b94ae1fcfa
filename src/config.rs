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

//! Build-time knobs for the escape structure.

/// Weight given to a face-graph edge that crosses a hull edge into the exterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExteriorWeight {
    /// The face's own escape width (squared circumradius).
    #[default]
    EscapeWidth,
    /// Squared length of the hull edge being crossed.
    HullEdge,
}

/// Configuration for [`EscapeMap::build_with`](crate::EscapeMap::build_with).
#[derive(Debug, Clone)]
pub struct EscapeConfig {
    /// If true, obstacles are inserted into the triangulation in a shuffled order.
    ///
    /// Randomised insertion keeps point-location walks short on sorted or
    /// clustered inputs. The shuffle is seeded, so builds stay reproducible.
    pub shuffle_insertion: bool,
    /// Seed for the insertion shuffle.
    pub seed: u64,
    /// How edges crossing the hull into the exterior are weighted; see [`ExteriorWeight`].
    pub exterior_weight: ExteriorWeight,
}

impl EscapeConfig {
    pub(crate) fn shuffle_seed(&self) -> Option<u64> {
        self.shuffle_insertion.then_some(self.seed)
    }
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self {
            shuffle_insertion: true,
            seed: 0x5eed_c1ea,
            exterior_weight: ExteriorWeight::default(),
        }
    }
}
