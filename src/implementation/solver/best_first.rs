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

//! This module provides the best-first tree search. It keeps every open node
//! in a fringe ordered by the `compare` method of the branching scheme and
//! always expands the most promising one first. When it is allowed to run to
//! completion with an exact dominance checker, the best node it found is
//! proved optimal.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::{BranchingScheme, Cutoff, DominanceChecker, Fringe, Reason, SearchOutput, SimpleFringe, SolutionPool, Solver};

/// The best-first search driver.
///
/// # Example
/// ```
/// # use knapwidth::*;
/// let instance = InstanceBuilder::new(10)
///     .item(5, 3, 10)
///     .item(5, 4, 10)
///     .item(6, 1, 11)
///     .build()
///     .unwrap();
/// let scheme = KnapsackWithWidthBranching::new(&instance);
/// let dominance = EmptyDominanceChecker::<Node>::default();
///
/// let output = BestFirstSearch::new(&scheme, &dominance, &NoCutoff, 1).search();
/// let mut solution = scheme.to_solution(output.solution_pool.best());
/// solution.sort_unstable();
///
/// assert!(output.is_exact);
/// assert_eq!(vec![0, 1], solution);
/// ```
pub struct BestFirstSearch<'a, B: BranchingScheme> {
    /// The scheme describing the search tree
    scheme: &'a B,
    /// The dominance checker used to discard duplicate or hopeless nodes
    dominance: &'a (dyn DominanceChecker<Node = B::Node>),
    /// A cutoff heuristic meant to decide when to stop the search
    cutoff: &'a (dyn Cutoff),
    /// The nodes which remain to be expanded
    fringe: SimpleFringe<'a, B>,
    /// How many nodes are kept in the solution pool
    pool_size: usize,
}

impl<'a, B: BranchingScheme> BestFirstSearch<'a, B> {
    pub fn new(
        scheme: &'a B,
        dominance: &'a (dyn DominanceChecker<Node = B::Node>),
        cutoff: &'a (dyn Cutoff),
        pool_size: usize,
    ) -> Self {
        Self {
            scheme,
            dominance,
            cutoff,
            fringe: SimpleFringe::new(scheme),
            pool_size,
        }
    }

    /// Enumerates all the children of `node`: each of them is offered to the
    /// pool and the ones which might lead to a better solution are pushed
    /// onto the fringe.
    fn expand(&mut self, mut node: B::Node, pool: &mut SolutionPool<B::Node>, explored: usize) {
        while !self.scheme.infertile(&node) {
            if let Some(child) = self.scheme.next_child(&mut node) {
                if pool.add(self.scheme, child.clone()) {
                    debug!(value = %self.scheme.display(pool.best()), explored, "new best");
                }
                if self.scheme.leaf(&child)
                    || self.scheme.bound(&child, pool.best())
                    || self.dominance.is_dominated_or_insert(&child)
                {
                    trace!("child discarded");
                    continue;
                }
                self.fringe.push(child);
            }
        }
    }
}

impl<B: BranchingScheme> Solver<B> for BestFirstSearch<'_, B> {
    fn search(&mut self) -> SearchOutput<B::Node> {
        let start = Instant::now();
        self.scheme.reset();
        self.dominance.clear();
        self.fringe.clear();

        let root = self.scheme.root();
        let mut pool = SolutionPool::new(self.pool_size, root.clone());
        let mut explored = 0;
        let mut reason = None;
        info!(strategy = "best-first", "search start");

        if !self.scheme.leaf(&root) {
            self.dominance.is_dominated_or_insert(&root);
            self.fringe.push(root);
        }

        while !self.fringe.is_empty() {
            if self.cutoff.must_stop() {
                reason = Some(Reason::CutoffOccurred);
                break;
            }
            let node = match self.fringe.pop() {
                Some(node) => node,
                None => break,
            };
            // the incumbent may have improved since the node was pushed
            if self.scheme.bound(&node, pool.best()) {
                trace!("node pruned");
                continue;
            }
            explored += 1;
            self.expand(node, &mut pool, explored);
        }

        let is_exact = reason.is_none() && self.dominance.is_exact();
        info!(strategy = "best-first", explored, is_exact, value = %self.scheme.display(pool.best()), "search end");
        SearchOutput {
            solution_pool: pool,
            nb_explored: explored,
            is_exact,
            reason,
            duration: start.elapsed(),
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
