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

use std::str::{FromStr, SplitAsciiWhitespace};

use crate::config::EscapeConfig;
use crate::error::{EscapeError, ParseError};
use crate::escape::EscapeMap;
use crate::geometry::Point2;
use crate::numeric::Exact;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub point: Point2,
    pub margin: Exact,
}

/// Obstacles, the agent's base radius and the escape queries of one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub radius: Exact,
    pub obstacles: Vec<Point2>,
    pub queries: Vec<Query>,
}

impl TestCase {
    /// One `y`/`n` per query, in input order.
    pub fn solve(&self, config: &EscapeConfig) -> Result<String, EscapeError> {
        let map = EscapeMap::build_with(&self.obstacles, config)?;
        log::debug!(
            "case: {} obstacles, {} faces, {} queries",
            self.obstacles.len(),
            map.face_count(),
            self.queries.len()
        );

        Ok(self
            .queries
            .iter()
            .map(|q| {
                let clearance = &self.radius + &q.margin;
                if map.can_escape(&q.point, &clearance) { 'y' } else { 'n' }
            })
            .collect())
    }
}

struct Tokens<'a> {
    iter: SplitAsciiWhitespace<'a>,
    index: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens {
            iter: input.split_ascii_whitespace(),
            index: 0,
        }
    }

    fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        let token = self
            .iter
            .next()
            .ok_or(ParseError::UnexpectedEof { expected })?;
        let index = self.index;
        self.index += 1;
        token.parse().map_err(|_| ParseError::InvalidToken {
            expected,
            index,
            token: token.to_string(),
        })
    }

    fn point(&mut self) -> Result<Point2, ParseError> {
        let x: i64 = self.value("x coordinate")?;
        let y: i64 = self.value("y coordinate")?;
        Ok(Point2::new(x, y))
    }
}

/// Parse the leading case count followed by that many cases.
pub fn parse_cases(input: &str) -> Result<Vec<TestCase>, ParseError> {
    let mut tokens = Tokens::new(input);
    let count: usize = tokens.value("test case count")?;

    let mut cases = Vec::with_capacity(count.min(1 << 16));
    for _ in 0..count {
        let n: usize = tokens.value("obstacle count")?;
        let m: usize = tokens.value("query count")?;
        let radius: Exact = tokens.value("radius")?;

        let obstacles = (0..n)
            .map(|_| tokens.point())
            .collect::<Result<Vec<_>, _>>()?;
        let queries = (0..m)
            .map(|_| -> Result<Query, ParseError> {
                let point = tokens.point()?;
                let margin: Exact = tokens.value("safety margin")?;
                Ok(Query { point, margin })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        cases.push(TestCase {
            radius,
            obstacles,
            queries,
        });
    }
    Ok(cases)
}
