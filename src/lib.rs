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

//! Exact escape-feasibility queries among point obstacles in the plane.
//!
//! An agent at a query point must keep a clearance from every obstacle. The
//! obstacles are Delaunay-triangulated once; faces become nodes of a graph
//! whose edge weights are squared gap widths, and a maximum spanning tree
//! gives every face the widest corridor leading to open space. A query is then
//! a nearest-obstacle check, one point location and one comparison.
//!
//! All arithmetic is exact (GMP rationals): no epsilon appears anywhere.
//!
//! # Example
//!
//! ```
//! use clearway::{EscapeMap, Exact, Point2};
//!
//! let obstacles = vec![Point2::new(0, 0), Point2::new(10, 0), Point2::new(5, 9)];
//! let map = EscapeMap::build(&obstacles).expect("construction should succeed");
//!
//! assert!(map.can_escape(&Point2::new(5, 3), &Exact::from(2)));
//! assert!(!map.can_escape(&Point2::new(5, 3), &Exact::from(3)));
//! assert!(map.can_escape(&Point2::new(100, 100), &Exact::from(3)));
//! ```

pub mod config;
pub mod error;
pub mod escape;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod numeric;
pub mod operations;

pub use config::{EscapeConfig, ExteriorWeight};
pub use error::{Error, EscapeError, ParseError, ParseExactError};
pub use escape::EscapeMap;
pub use escape::bottleneck::Width;
pub use geometry::Point2;
pub use numeric::Exact;

/// Answer every test case in `input`, one `y`/`n` line per case.
///
/// Fails on the first malformed token or invariant violation; no partial
/// output is produced.
pub fn run(input: &str, config: &EscapeConfig) -> Result<String, Error> {
    let cases = io::parse_cases(input)?;
    log::debug!("parsed {} test cases", cases.len());

    let mut out = String::new();
    for case in &cases {
        out.push_str(&case.solve(config)?);
        out.push('\n');
    }
    Ok(out)
}
