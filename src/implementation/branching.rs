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

//! This module provides the branching scheme of the knapsack problem with
//! width and conflicts.
//!
//! A node of the search tree stands for a partial selection. Its children are
//! obtained by taking one more item, any item, which is neither taken nor
//! excluded yet. As a consequence, the same set of items may be reached by
//! several paths (taking `a` then `b`, or `b` then `a`). This is intended:
//! those duplicates are weeded out by the dominance checks of the drivers.

use std::{cmp::Ordering, sync::atomic::{AtomicUsize, Ordering::Relaxed}};

use bit_set::BitSet;

use crate::{BranchingScheme, Instance, Selection};

/// A node of the search tree
#[derive(Debug, Clone)]
pub struct Node {
    /// A unique identifier (in a given search) which is used to break ties
    /// when ordering the nodes
    id: usize,
    /// The identifier of the node this one was derived from. This is a mere
    /// back reference: a node never owns its father.
    father: Option<usize>,
    /// The items that have been selected
    taken: BitSet,
    /// The items that may not be selected anymore, either because they are
    /// conflicting with a taken item, or because they were found too heavy
    /// while enumerating the children of this node
    conflicts: BitSet,
    weight: usize,
    profit: isize,
    max_width: isize,
    /// profit - max_width
    value: isize,
    /// An optimistic estimate of the profit that can still be collected
    potential_increase: isize,
    /// The lower, the sooner the node gets expanded
    guide: f64,
    /// The next item to consider when enumerating the children of this node
    next_child: usize,
}

impl Node {
    pub fn id(&self) -> usize {
        self.id
    }
    pub fn father(&self) -> Option<usize> {
        self.father
    }
    pub fn taken(&self) -> &BitSet {
        &self.taken
    }
    pub fn conflicts(&self) -> &BitSet {
        &self.conflicts
    }
    pub fn weight(&self) -> usize {
        self.weight
    }
    pub fn profit(&self) -> isize {
        self.profit
    }
    pub fn max_width(&self) -> isize {
        self.max_width
    }
    pub fn value(&self) -> isize {
        self.value
    }
    pub fn potential_increase(&self) -> isize {
        self.potential_increase
    }
    pub fn guide(&self) -> f64 {
        self.guide
    }
    pub fn next_child(&self) -> usize {
        self.next_child
    }
    /// The items that are either taken or excluded. Two nodes having the same
    /// signature have the very same set of items left to decide upon.
    pub fn signature(&self) -> BitSet {
        let mut signature = self.taken.clone();
        signature.union_with(&self.conflicts);
        signature
    }
}

/// The branching scheme of the knapsack problem with width and conflicts.
///
/// # Example
/// ```
/// # use knapwidth::*;
/// let instance = InstanceBuilder::new(10)
///     .item(5, 3, 10)
///     .item(5, 4, 10)
///     .conflict(0, 1)
///     .build()
///     .unwrap();
///
/// let scheme = KnapsackWithWidthBranching::new(&instance);
/// let output = iterative_beam_search(&scheme, &SearchParameters::default());
/// let solution = scheme.to_solution(output.solution_pool.best());
///
/// assert_eq!(vec![0], solution);
/// assert_eq!(7, instance.evaluate(&solution).unwrap().objective());
/// ```
#[derive(Debug)]
pub struct KnapsackWithWidthBranching<'a> {
    instance: &'a Instance,
    /// The source of node identifiers. It is reset at the start of each search
    ids: AtomicUsize,
}

impl<'a> KnapsackWithWidthBranching<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance, ids: AtomicUsize::new(0) }
    }
    pub fn instance(&self) -> &Instance {
        self.instance
    }
    fn next_id(&self) -> usize {
        self.ids.fetch_add(1, Relaxed)
    }
}

impl BranchingScheme for KnapsackWithWidthBranching<'_> {
    type Node = Node;
    type Key = BitSet;
    type Solution = Selection;

    fn reset(&self) {
        self.ids.store(0, Relaxed);
    }

    fn root(&self) -> Node {
        let nb_items = self.instance.nb_items();
        Node {
            id: self.next_id(),
            father: None,
            taken: BitSet::with_capacity(nb_items),
            conflicts: BitSet::with_capacity(nb_items),
            weight: 0,
            profit: 0,
            max_width: 0,
            value: 0,
            potential_increase: self.instance.total_profit() as isize,
            guide: 0.0,
            next_child: 0,
        }
    }

    fn next_child(&self, father: &mut Node) -> Option<Node> {
        let i = father.next_child;
        if i >= self.instance.nb_items() {
            return None;
        }
        father.next_child += 1;

        if father.taken.contains(i) || father.conflicts.contains(i) {
            return None;
        }
        let item = self.instance.item(i);
        // profits and widths fit in an isize (see `Instance`)
        let weight = match father.weight.checked_add(item.weight) {
            Some(weight) if weight <= self.instance.capacity() => weight,
            _ => {
                // none of the descendants of father can take this item
                father.conflicts.insert(i);
                father.potential_increase -= item.profit as isize;
                return None;
            }
        };

        let mut taken = father.taken.clone();
        taken.insert(i);
        let mut conflicts = father.conflicts.clone();
        conflicts.extend(item.conflicts.iter().copied());

        let profit = father.profit + item.profit as isize;
        let max_width = father.max_width.max(item.width as isize);
        let value = profit - max_width;

        Some(Node {
            id: self.next_id(),
            father: Some(father.id),
            taken,
            conflicts,
            weight,
            profit,
            max_width,
            value,
            potential_increase: father.potential_increase - item.profit as isize,
            guide: weight as f64 / value.max(1) as f64,
            next_child: 0,
        })
    }

    fn infertile(&self, node: &Node) -> bool {
        node.next_child >= self.instance.nb_items()
    }

    fn leaf(&self, node: &Node) -> bool {
        node.next_child >= self.instance.nb_items()
    }

    fn bound(&self, node_1: &Node, node_2: &Node) -> bool {
        node_1.value + node_1.potential_increase <= node_2.value
    }

    fn better(&self, node_1: &Node, node_2: &Node) -> bool {
        node_1.value > node_2.value
    }

    fn equals(&self, node_1: &Node, node_2: &Node) -> bool {
        node_1.value == node_2.value
            && node_1.weight == node_2.weight
            && node_1.signature() == node_2.signature()
    }

    fn bucket(&self, node: &Node) -> BitSet {
        node.signature()
    }

    fn dominates(&self, node_1: &Node, node_2: &Node) -> bool {
        node_1.value >= node_2.value && node_1.weight <= node_2.weight
    }

    fn compare(&self, node_1: &Node, node_2: &Node) -> Ordering {
        node_1.guide.total_cmp(&node_2.guide)
            .then_with(|| node_1.id.cmp(&node_2.id))
    }

    fn to_solution(&self, node: &Node) -> Selection {
        if node.value < 0 {
            vec![]
        } else {
            node.taken.iter().collect()
        }
    }

    fn display(&self, node: &Node) -> String {
        node.value.max(0).to_string()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
