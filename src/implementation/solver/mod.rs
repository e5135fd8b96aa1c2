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

//! This module and its sub modules provide the actual tree-search drivers.
//! The `greedy` module provides a single greedy descent, the `best_first`
//! module provides an exact best-first search and the `beam` module
//! provides an anytime (and eventually exact) iterative beam search. All of
//! them implement the `Solver` trait.
//!
//! The free functions of this module are shorthands which configure the
//! drivers (cutoff and dominance checker) from a set of `SearchParameters`.
mod parameters;
mod greedy;
mod best_first;
mod beam;

pub use parameters::*;
pub use greedy::*;
pub use best_first::*;
pub use beam::*;

use crate::{BranchingScheme, Cutoff, NoCutoff, SearchOutput, SimpleDominanceChecker, Solver, TimeBudget};

/// The cutoff enforcing the time limit of the given parameters
fn cutoff(parameters: &SearchParameters) -> Box<dyn Cutoff> {
    match parameters.time_limit {
        Some(budget) => Box::new(TimeBudget::new(budget)),
        None => Box::new(NoCutoff),
    }
}

/// Runs a greedy descent of the tree of the given scheme
pub fn greedy<B: BranchingScheme>(scheme: &B, parameters: &SearchParameters) -> SearchOutput<B::Node> {
    let cutoff = cutoff(parameters);
    Greedy::new(scheme, cutoff.as_ref(), parameters.solution_pool_size).search()
}

/// Runs a best-first search of the tree of the given scheme, discarding the
/// nodes rejected by a `SimpleDominanceChecker`. That checker is not exact,
/// so the output never claims optimality. Use `BestFirstSearch` with an
/// `EmptyDominanceChecker` to obtain a proof.
pub fn best_first_search<B: BranchingScheme>(scheme: &B, parameters: &SearchParameters) -> SearchOutput<B::Node> {
    let cutoff = cutoff(parameters);
    let dominance = SimpleDominanceChecker::new(scheme);
    BestFirstSearch::new(scheme, &dominance, cutoff.as_ref(), parameters.solution_pool_size).search()
}

/// Runs an iterative beam search of the tree of the given scheme, discarding
/// the nodes rejected by a `SimpleDominanceChecker`. As for
/// `best_first_search`, the output never claims optimality.
pub fn iterative_beam_search<B: BranchingScheme>(scheme: &B, parameters: &SearchParameters) -> SearchOutput<B::Node> {
    let cutoff = cutoff(parameters);
    let dominance = SimpleDominanceChecker::new(scheme);
    IterativeBeamSearch::new(scheme, &dominance, cutoff.as_ref(), parameters).search()
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_solver {
    use std::time::Duration;

    use crate::*;

    fn instance() -> Instance {
        InstanceBuilder::new(10)
            .item(5, 3, 10)
            .item(5, 4, 10)
            .item(6, 1, 11)
            .with_conflicts()
            .build()
            .unwrap()
    }

    #[test]
    fn all_drivers_agree_on_a_tiny_instance() {
        let instance = instance();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let parameters = SearchParameters::default();

        let best_first = best_first_search(&scheme, &parameters);
        let beam = iterative_beam_search(&scheme, &parameters);
        assert!(!best_first.is_exact);
        assert!(!beam.is_exact);
        assert_eq!(None, best_first.reason);
        assert_eq!(None, beam.reason);
        assert_eq!(16, best_first.solution_pool.best().value());
        assert_eq!(16, beam.solution_pool.best().value());

        let greedy = greedy(&scheme, &parameters);
        assert!(!greedy.is_exact);
        assert!(greedy.solution_pool.best().value() <= 16);
    }
    #[test]
    fn time_limit_is_honored() {
        let instance = instance();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let parameters = SearchParametersBuilder::default()
            .time_limit(Duration::from_secs(60))
            .build()
            .unwrap();

        let output = best_first_search(&scheme, &parameters);
        assert_eq!(None, output.reason);
        assert!(output.duration < Duration::from_secs(60));
    }
}
