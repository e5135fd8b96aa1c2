// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module (and its submodules) provide the concrete implementations of
//! the abstractions: the branching scheme of the knapsack problem with width
//! and conflicts, the fringe, the dominance checkers, the cutoff heuristics
//! and the tree-search drivers. It also provides the exact dynamic programming
//! algorithm which solves the conflict free variant of the problem.

mod branching;
mod dp;
mod heuristics {
    mod cutoff;
    mod utils;

    pub use cutoff::*;
    pub use utils::*;
}
mod fringe {
    mod simple;

    pub use simple::*;
}
mod dominance {
    mod simple;
    mod empty;

    pub use simple::*;
    pub use empty::*;
}
mod solver;

pub use branching::*;
pub use dp::*;
pub use heuristics::*;
pub use fringe::*;
pub use dominance::*;
pub use solver::*;
