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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::time::Duration;

// ----------------------------------------------------------------------------
// --- SELECTION --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A selection is the sequence of item identities picked by a solver (or read
/// from a certificate). Its order is irrelevant to the evaluation but it is
/// preserved so that runs remain reproducible.
///
/// # Note:
/// A selection is never trusted on its own: its feasibility and objective are
/// always recomputed against an `Instance` (see `Instance::evaluate`).
pub type Selection = Vec<usize>;

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why a search stopped before it could prove optimality
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred,
    /// It stopped because the maximum beam width was reached without
    /// completing a beam
    MaximumWidthReached,
}

/// The outcome of a tree search
#[derive(Debug, Clone)]
pub struct SearchOutput<N> {
    /// The best nodes found during the search. The pool is never empty: it
    /// holds at least the root node (the trivial empty selection).
    pub solution_pool: SolutionPool<N>,
    /// The number of nodes that have been expanded
    pub nb_explored: usize,
    /// Is the best solution proved optimal ? When this is false, `reason`
    /// tells why the proof was aborted (if the strategy is not simply a
    /// heuristic one).
    pub is_exact: bool,
    /// If the search was interrupted, this is why
    pub reason: Option<Reason>,
    /// How long the search took
    pub duration: Duration,
}

// ----------------------------------------------------------------------------
// --- SOLUTION POOL ----------------------------------------------------------
// ----------------------------------------------------------------------------
/// The solution pool tracks the `size` best nodes encountered during a search.
/// The nodes are kept sorted, best first, according to the `better` relation
/// of the branching scheme and no two pooled nodes are `equals` to one another.
#[derive(Debug, Clone)]
pub struct SolutionPool<N> {
    size: usize,
    nodes: Vec<N>,
}

impl<N> SolutionPool<N> {
    /// Creates a new pool seeded with the given node (usually the root of the
    /// search tree, which is always a valid solution).
    pub fn new(size: usize, seed: N) -> Self {
        Self { size: size.max(1), nodes: vec![seed] }
    }
    /// The incumbent: the best node found so far
    pub fn best(&self) -> &N {
        &self.nodes[0]
    }
    /// The pooled nodes, best first
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }
    /// The number of pooled nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    /// Always false: a pool holds at least its seed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// The maximum number of nodes kept in this pool
    pub fn size(&self) -> usize {
        self.size
    }
    /// Consumes the pool and yields its best node
    pub fn into_best(mut self) -> N {
        self.nodes.swap_remove(0)
    }

    /// Offers a node to the pool. The node is discarded when it is equivalent
    /// to some pooled node or when the pool is full and the node is not better
    /// than the worst pooled node.
    ///
    /// Returns true iff the node became the new incumbent.
    pub fn add<B>(&mut self, scheme: &B, node: N) -> bool
    where B: crate::BranchingScheme<Node = N> + ?Sized
    {
        if self.nodes.iter().any(|pooled| scheme.equals(pooled, &node)) {
            return false;
        }
        let position = self.nodes.iter()
            .position(|pooled| scheme.better(&node, pooled))
            .unwrap_or(self.nodes.len());

        if position >= self.size {
            return false;
        }
        self.nodes.insert(position, node);
        self.nodes.truncate(self.size);
        position == 0
    }
}
