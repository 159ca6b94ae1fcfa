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

//! Error types for parsing and escape-map construction.

use thiserror::Error;

/// A numeric literal that is not an integer, fraction or plain decimal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid exact number {0:?}")]
pub struct ParseExactError(pub String);

/// Input that does not follow the test-case grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Ran out of tokens.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A token of the wrong shape.
    #[error("invalid {expected} at token {index}: {token:?}")]
    InvalidToken {
        expected: &'static str,
        index: usize,
        token: String,
    },
}

/// Invariant violations while building the bottleneck structure.
///
/// These indicate a geometry-construction bug, never bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    /// The maximum spanning forest did not connect every node.
    #[error("face graph is disconnected: {components} components over {nodes} nodes")]
    DisconnectedFaceGraph { nodes: usize, components: usize },

    /// A face was never reached while walking the spanning tree from the outside node.
    #[error("face {face} is unreachable from the outside node")]
    UnreachableFace { face: u32 },
}

/// Umbrella error for the batch driver.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Escape(#[from] EscapeError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
