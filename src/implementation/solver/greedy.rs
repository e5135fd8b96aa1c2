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

//! This module provides the greedy tree search: a single descent from the
//! root which always follows the child that comes first in the expansion
//! order of the branching scheme.

use std::time::Instant;

use tracing::{debug, info};

use crate::{BranchingScheme, Cutoff, Reason, SearchOutput, SolutionPool, Solver};

/// The greedy search never backtracks. As such, it offers no optimality
/// guarantee whatsoever: it is only meant to quickly find a decent solution.
pub struct Greedy<'a, B: BranchingScheme> {
    /// The scheme describing the search tree
    scheme: &'a B,
    /// A cutoff heuristic meant to decide when to stop the descent
    cutoff: &'a (dyn Cutoff),
    /// How many nodes are kept in the solution pool
    pool_size: usize,
}

impl<'a, B: BranchingScheme> Greedy<'a, B> {
    pub fn new(scheme: &'a B, cutoff: &'a (dyn Cutoff), pool_size: usize) -> Self {
        Self { scheme, cutoff, pool_size }
    }
}

impl<B: BranchingScheme> Solver<B> for Greedy<'_, B> {
    fn search(&mut self) -> SearchOutput<B::Node> {
        let start = Instant::now();
        self.scheme.reset();

        let mut node = self.scheme.root();
        let mut pool = SolutionPool::new(self.pool_size, node.clone());
        let mut explored = 0;
        let mut reason = None;
        info!(strategy = "greedy", "search start");

        loop {
            if self.cutoff.must_stop() {
                reason = Some(Reason::CutoffOccurred);
                break;
            }
            explored += 1;

            let mut next: Option<B::Node> = None;
            while !self.scheme.infertile(&node) {
                if let Some(child) = self.scheme.next_child(&mut node) {
                    if pool.add(self.scheme, child.clone()) {
                        debug!(value = %self.scheme.display(pool.best()), explored, "new best");
                    }
                    next = match next {
                        Some(best) if self.scheme.compare(&best, &child).is_le() => Some(best),
                        _ => Some(child),
                    };
                }
            }
            match next {
                Some(child) => node = child,
                None => break,
            }
        }

        info!(strategy = "greedy", explored, value = %self.scheme.display(pool.best()), "search end");
        SearchOutput {
            solution_pool: pool,
            nb_explored: explored,
            is_exact: false,
            reason,
            duration: start.elapsed(),
        }
    }
}

#[cfg(test)]
mod test_greedy {
    use crate::*;

    #[test]
    fn greedy_follows_the_lowest_guide() {
        // root guides: 1.5 for item 0, 2 for item 1 and 1 for item 2
        let instance = InstanceBuilder::new(7)
            .item(6, 1, 5)
            .item(2, 1, 2)
            .item(1, 1, 2)
            .build()
            .unwrap();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let output = Greedy::new(&scheme, &NoCutoff, 1).search();

        // the descent goes root -> {2} -> {1, 2} but {0, 2} was met on the way
        let mut solution = scheme.to_solution(output.solution_pool.best());
        solution.sort_unstable();
        assert_eq!(vec![0, 2], solution);
        assert_eq!(6, output.solution_pool.best().value());
        assert_eq!(3, output.nb_explored);
        assert!(!output.is_exact);
        assert_eq!(None, output.reason);
    }
    #[test]
    fn greedy_returns_the_root_when_nothing_fits() {
        let instance = InstanceBuilder::new(0).item(1, 1, 1).build().unwrap();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let output = Greedy::new(&scheme, &NoCutoff, 1).search();
        assert!(scheme.to_solution(output.solution_pool.best()).is_empty());
        assert_eq!(1, output.nb_explored);
    }
    #[test]
    fn greedy_honors_the_cutoff() {
        struct Stop;
        impl Cutoff for Stop {
            fn must_stop(&self) -> bool { true }
        }
        let instance = InstanceBuilder::new(10).item(1, 1, 5).build().unwrap();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let output = Greedy::new(&scheme, &Stop, 1).search();
        assert_eq!(0, output.nb_explored);
        assert_eq!(Some(Reason::CutoffOccurred), output.reason);
        assert_eq!(0, output.solution_pool.best().value());
    }
}
