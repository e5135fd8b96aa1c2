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

//! This module defines the `BranchingScheme` trait: the contract between a
//! problem model and the tree-search drivers which explore it.

use std::{cmp::Ordering, hash::Hash};

/// This is the main abstraction that should be provided by any user of our
/// tree-search drivers. A branching scheme describes a search tree: it tells
/// how to create the root node, how to enumerate the children of a node
/// (one at a time), how to bound and compare nodes, and how to translate a
/// node into a solution of the problem.
///
/// # Note:
/// The search tree needs not be a strict enumeration tree: several nodes may
/// stand for the same semantic state. Such duplicates are handled by the
/// drivers through the `equals`, `comparable`, `bucket` and `dominates`
/// methods.
pub trait BranchingScheme {
    /// The type of the nodes of the search tree
    type Node: Clone;
    /// The key used to gather mutually comparable nodes in dominance buckets
    type Key: Eq + Hash;
    /// What a node is turned into when the search is over
    type Solution;

    /// Restarts whatever bookkeeping (e.g. node identifiers) the scheme keeps
    /// across calls. The drivers call it at the beginning of every search.
    fn reset(&self) {}
    /// Creates the root node of the search tree
    fn root(&self) -> Self::Node;
    /// Advances the enumeration of the children of `father` by one step and
    /// returns the child produced by that step (if any). Returning `None`
    /// does not mean that `father` has no more children: use `infertile` to
    /// know when the enumeration is over.
    ///
    /// # Note:
    /// This method mutates the father. It must never be called concurrently
    /// on the same node.
    fn next_child(&self, father: &mut Self::Node) -> Option<Self::Node>;
    /// Returns true iff `next_child` cannot yield anything anymore
    fn infertile(&self, node: &Self::Node) -> bool;
    /// Returns true iff the node is terminal
    fn leaf(&self, node: &Self::Node) -> bool;
    /// Returns true iff no descendant of `node_1` can be better than `node_2`
    fn bound(&self, node_1: &Self::Node, node_2: &Self::Node) -> bool;

    // --- solution pool ------------------------------------------------------
    /// Returns true iff `node_1` is a strictly better solution than `node_2`
    fn better(&self, node_1: &Self::Node, node_2: &Self::Node) -> bool;
    /// Returns true iff both nodes are equivalent solutions
    fn equals(&self, node_1: &Self::Node, node_2: &Self::Node) -> bool;

    // --- dominances ---------------------------------------------------------
    /// Returns true iff the node takes part in dominance checks
    fn comparable(&self, _node: &Self::Node) -> bool {
        true
    }
    /// The dominance bucket of the node. Only nodes sharing a bucket are
    /// compared with one another.
    fn bucket(&self, node: &Self::Node) -> Self::Key;
    /// Returns true iff `node_1` dominates `node_2` (both being in the same
    /// bucket): discarding `node_2` does not hurt the search.
    fn dominates(&self, node_1: &Self::Node, node_2: &Self::Node) -> bool;

    // --- ordering -----------------------------------------------------------
    /// The order in which nodes should be expanded: `Less` means that
    /// `node_1` should be expanded before `node_2`. This order must be total.
    fn compare(&self, node_1: &Self::Node, node_2: &Self::Node) -> Ordering;

    // --- outputs ------------------------------------------------------------
    /// Turns a node into a solution of the problem
    fn to_solution(&self, node: &Self::Node) -> Self::Solution;
    /// A human readable value of the node, used to report progress
    fn display(&self, node: &Self::Node) -> String;
}
