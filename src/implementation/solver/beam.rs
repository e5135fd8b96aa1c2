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

//! This module provides the iterative beam search. Each iteration is a
//! breadth-first exploration of the tree in which only the `width` most
//! promising nodes of every layer are kept. The width grows from one
//! iteration to the next until some beam completes without ever having
//! dropped a node: at that point, the best node is proved optimal provided
//! that the dominance checker is exact.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::{BranchingScheme, Cutoff, DominanceChecker, Reason, SearchOutput, SearchParameters, SolutionPool, Solver};

/// The outcome of a single beam
enum BeamStatus {
    /// No node was ever left out of the beam
    Complete,
    /// Some nodes were left out because the beam was too narrow
    Truncated,
    /// The cutoff fired while the beam was being explored
    Interrupted,
}

/// The iterative beam search driver.
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
/// let parameters = SearchParametersBuilder::default()
///     .initial_beam_width(4)
///     .build()
///     .unwrap();
///
/// let output = IterativeBeamSearch::new(&scheme, &dominance, &NoCutoff, &parameters).search();
/// assert!(output.is_exact);
/// assert_eq!(16, output.solution_pool.best().value());
/// ```
pub struct IterativeBeamSearch<'a, B: BranchingScheme> {
    /// The scheme describing the search tree
    scheme: &'a B,
    /// The dominance checker used to discard duplicate or hopeless nodes
    dominance: &'a (dyn DominanceChecker<Node = B::Node>),
    /// A cutoff heuristic meant to decide when to stop the search
    cutoff: &'a (dyn Cutoff),
    /// The pool size and the beam widths
    parameters: &'a SearchParameters,
}

impl<'a, B: BranchingScheme> IterativeBeamSearch<'a, B> {
    pub fn new(
        scheme: &'a B,
        dominance: &'a (dyn DominanceChecker<Node = B::Node>),
        cutoff: &'a (dyn Cutoff),
        parameters: &'a SearchParameters,
    ) -> Self {
        Self { scheme, dominance, cutoff, parameters }
    }

    /// The width of the beam following one of the given `width`. It always
    /// grows by at least one node.
    fn next_width(&self, width: usize) -> usize {
        let grown = (width as f64 * self.parameters.beam_growth_factor).ceil();
        let grown = if grown >= usize::MAX as f64 { usize::MAX } else { grown as usize };
        grown.max(width.saturating_add(1))
    }

    /// Explores the tree one layer at a time, keeping at most `width` nodes
    /// per layer.
    fn beam(&self, width: usize, pool: &mut SolutionPool<B::Node>, explored: &mut usize) -> BeamStatus {
        self.dominance.clear();
        let mut status = BeamStatus::Complete;

        let root = self.scheme.root();
        let mut layer = if self.scheme.leaf(&root) { vec![] } else { vec![root] };

        while !layer.is_empty() {
            let mut next = vec![];
            for mut node in layer.drain(..) {
                if self.cutoff.must_stop() {
                    return BeamStatus::Interrupted;
                }
                if self.scheme.bound(&node, pool.best()) {
                    trace!("node pruned");
                    continue;
                }
                *explored += 1;

                while !self.scheme.infertile(&node) {
                    if let Some(child) = self.scheme.next_child(&mut node) {
                        if pool.add(self.scheme, child.clone()) {
                            debug!(value = %self.scheme.display(pool.best()), width, "new best");
                        }
                        if self.scheme.leaf(&child)
                            || self.scheme.bound(&child, pool.best())
                            || self.dominance.is_dominated_or_insert(&child)
                        {
                            trace!("child discarded");
                            continue;
                        }
                        next.push(child);
                    }
                }
            }

            next.sort_unstable_by(|a, b| self.scheme.compare(a, b));
            if next.len() > width {
                next.truncate(width);
                status = BeamStatus::Truncated;
            }
            layer = next;
        }
        status
    }
}

impl<B: BranchingScheme> Solver<B> for IterativeBeamSearch<'_, B> {
    fn search(&mut self) -> SearchOutput<B::Node> {
        let start = Instant::now();
        self.scheme.reset();

        let mut pool = SolutionPool::new(self.parameters.solution_pool_size, self.scheme.root());
        let mut explored = 0;
        let mut is_exact = false;
        let mut reason = None;
        let maximum = self.parameters.maximum_beam_width.unwrap_or(usize::MAX);
        let mut width = self.parameters.initial_beam_width.clamp(1, maximum.max(1));
        info!(strategy = "iterative-beam", "search start");

        loop {
            debug!(width, "beam start");
            match self.beam(width, &mut pool, &mut explored) {
                BeamStatus::Complete => {
                    is_exact = self.dominance.is_exact();
                    break;
                },
                BeamStatus::Interrupted => {
                    reason = Some(Reason::CutoffOccurred);
                    break;
                },
                BeamStatus::Truncated => {
                    if width >= maximum {
                        reason = Some(Reason::MaximumWidthReached);
                        break;
                    }
                    width = self.next_width(width).min(maximum);
                },
            }
        }

        info!(strategy = "iterative-beam", explored, is_exact, width, value = %self.scheme.display(pool.best()), "search end");
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

#[cfg(test)]
mod test_beam {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::*;

    fn scenario_instance() -> Instance {
        InstanceBuilder::new(10)
            .item(5, 3, 10)
            .item(5, 4, 10)
            .conflict(0, 1)
            .build()
            .unwrap()
    }

    #[test]
    fn widths_grow_geometrically() {
        let instance = scenario_instance();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let dominance = EmptyDominanceChecker::<Node>::default();
        let parameters = SearchParametersBuilder::default().beam_growth_factor(1.5).build().unwrap();
        let solver = IterativeBeamSearch::new(&scheme, &dominance, &NoCutoff, &parameters);

        assert_eq!(2, solver.next_width(1));
        assert_eq!(3, solver.next_width(2));
        assert_eq!(5, solver.next_width(3));
        assert_eq!(usize::MAX, solver.next_width(usize::MAX - 1));
    }
    #[test]
    fn conflicting_items_are_never_taken_together() {
        let instance = scenario_instance();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let dominance = EmptyDominanceChecker::<Node>::default();
        let parameters = SearchParameters::default();
        let output = IterativeBeamSearch::new(&scheme, &dominance, &NoCutoff, &parameters).search();

        assert_eq!(vec![0], scheme.to_solution(output.solution_pool.best()));
        assert!(output.is_exact);
        assert_eq!(None, output.reason);
    }
    #[test]
    fn complete_beam_with_inexact_dominance_is_not_a_proof() {
        let instance = scenario_instance();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let dominance = SimpleDominanceChecker::new(&scheme);
        let parameters = SearchParameters::default();
        let output = IterativeBeamSearch::new(&scheme, &dominance, &NoCutoff, &parameters).search();

        assert_eq!(vec![0], scheme.to_solution(output.solution_pool.best()));
        assert!(!output.is_exact);
        assert_eq!(None, output.reason);
    }
    #[test]
    fn empty_instance_completes_at_once() {
        let instance = InstanceBuilder::new(3).with_conflicts().build().unwrap();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let dominance = EmptyDominanceChecker::<Node>::default();
        let parameters = SearchParameters::default();
        let output = IterativeBeamSearch::new(&scheme, &dominance, &NoCutoff, &parameters).search();

        assert!(output.is_exact);
        assert_eq!(0, output.nb_explored);
        assert!(scheme.to_solution(output.solution_pool.best()).is_empty());
    }
    #[test]
    fn maximum_width_stops_the_iterations() {
        let mut rng = StdRng::seed_from_u64(42);
        let instance = generate(12, &mut rng).unwrap();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let dominance = SimpleDominanceChecker::new(&scheme);
        let parameters = SearchParametersBuilder::default()
            .maximum_beam_width(1)
            .build()
            .unwrap();
        let output = IterativeBeamSearch::new(&scheme, &dominance, &NoCutoff, &parameters).search();

        assert!(!output.is_exact);
        assert_eq!(Some(Reason::MaximumWidthReached), output.reason);
        let solution = scheme.to_solution(output.solution_pool.best());
        assert!(instance.evaluate(&solution).unwrap().is_feasible());
    }
    #[test]
    fn cutoff_interrupts_the_search() {
        struct Stop;
        impl Cutoff for Stop {
            fn must_stop(&self) -> bool { true }
        }
        let instance = scenario_instance();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let dominance = SimpleDominanceChecker::new(&scheme);
        let parameters = SearchParameters::default();
        let output = IterativeBeamSearch::new(&scheme, &dominance, &Stop, &parameters).search();

        assert!(!output.is_exact);
        assert_eq!(Some(Reason::CutoffOccurred), output.reason);
        assert_eq!(0, output.nb_explored);
    }
    #[test]
    fn wider_beams_never_do_worse() {
        let mut rng = StdRng::seed_from_u64(5);
        let instance = generate(10, &mut rng).unwrap();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let dominance = SimpleDominanceChecker::new(&scheme);

        let narrow = SearchParametersBuilder::default().maximum_beam_width(1).build().unwrap();
        let narrow = IterativeBeamSearch::new(&scheme, &dominance, &NoCutoff, &narrow).search();
        let wide = SearchParametersBuilder::default().maximum_beam_width(64).build().unwrap();
        let wide = IterativeBeamSearch::new(&scheme, &dominance, &NoCutoff, &wide).search();

        assert!(wide.solution_pool.best().value() >= narrow.solution_pool.best().value());
    }
}
