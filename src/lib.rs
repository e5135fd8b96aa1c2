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

//! # Knapwidth
//! Knapwidth solves the *knapsack problem with width*: given a knapsack of
//! limited capacity and a set of items, each of which has a weight, a width
//! and a profit, pick a subset of the items whose total weight fits in the
//! knapsack and which maximizes its total profit minus the width of its
//! widest item. Optionally, some pairs of items may be declared conflicting,
//! in which case they may never be picked together.
//!
//! The library offers two ways of solving the problem:
//!
//! * The conflict free variant is solved to optimality by a pseudo polynomial
//!   dynamic program (see `dynamic_programming`).
//! * The variant with conflicts is described as a search tree (see the
//!   `KnapsackWithWidthBranching` scheme) which is explored by generic
//!   tree-search drivers: `Greedy`, `BestFirstSearch` and
//!   `IterativeBeamSearch`. These drivers know nothing about knapsacks: they
//!   can explore the tree of any `BranchingScheme`.
//!
//! ## Quick Example
//! The following solves a tiny instance with a best-first search which is
//! allowed to run for at most a minute.
//!
//! ```
//! # use knapwidth::*;
//! use std::time::Duration;
//!
//! let instance = InstanceBuilder::new(10)
//!     .item(5, 3, 10)
//!     .item(5, 4, 10)
//!     .item(6, 1, 11)
//!     .conflict(0, 1)
//!     .build()
//!     .unwrap();
//!
//! let scheme = KnapsackWithWidthBranching::new(&instance);
//! let parameters = SearchParametersBuilder::default()
//!     .time_limit(Duration::from_secs(60))
//!     .build()
//!     .unwrap();
//!
//! let output = best_first_search(&scheme, &parameters);
//! let selection = scheme.to_solution(output.solution_pool.best());
//!
//! // {2} beats both {0} and {1}, and {0, 1} is forbidden
//! assert_eq!(None, output.reason);
//! assert_eq!(vec![2], selection);
//!
//! let evaluation = instance.evaluate(&selection).unwrap();
//! assert!(evaluation.is_feasible());
//! assert_eq!(10, evaluation.objective());
//! ```
//!
//! ## Without conflicts
//! ```
//! # use knapwidth::*;
//! let instance = InstanceBuilder::new(10)
//!     .item(5, 3, 10)
//!     .item(5, 4, 10)
//!     .item(6, 1, 11)
//!     .build()
//!     .unwrap();
//!
//! let selection = dynamic_programming(&instance).unwrap();
//! assert_eq!(16, instance.evaluate(&selection).unwrap().objective());
//! ```

mod common;
mod error;
mod model;
mod abstraction;
mod implementation;

pub use common::*;
pub use error::*;
pub use model::*;
pub use abstraction::*;
pub use implementation::*;
