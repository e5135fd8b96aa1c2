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

//! This module provide some convenient utilities to work with the orderings
//! defined by a branching scheme.

use std::cmp::Ordering;

use compare::Compare;

use crate::BranchingScheme;


/// This is a thin wrapper to convert the expansion order of a branching scheme
/// into a `Compare` object as is required to configure the order of a binary
/// heap.
///
/// Because `binary_heap_plus` heaps pop their *greatest* element first, the
/// comparator reverses the expansion order: the node that must be expanded
/// first is the greatest one.
///
/// # Example
/// ```
/// # use knapwidth::*;
/// # use binary_heap_plus::BinaryHeap;
/// let instance = InstanceBuilder::new(10)
///     .item(5, 3, 10)
///     .item(4, 4, 10)
///     .build()
///     .unwrap();
/// let scheme = KnapsackWithWidthBranching::new(&instance);
///
/// let mut root = scheme.root();
/// let first = scheme.next_child(&mut root).unwrap();  // guide 5/7
/// let second = scheme.next_child(&mut root).unwrap(); // guide 4/6
///
/// let mut heap = BinaryHeap::from_vec_cmp(vec![], CompareNode::new(&scheme));
/// heap.push(first);
/// heap.push(second);
/// assert_eq!(vec![1], heap.pop().unwrap().taken().iter().collect::<Vec<_>>());
/// assert_eq!(vec![0], heap.pop().unwrap().taken().iter().collect::<Vec<_>>());
/// ```
#[derive(Debug)]
pub struct CompareNode<'a, B: BranchingScheme>(&'a B);
impl <'a, B: BranchingScheme> CompareNode<'a, B> {
    /// Creates a new instance
    pub fn new(scheme: &'a B) -> Self {
        Self(scheme)
    }
}
impl <B: BranchingScheme> Clone for CompareNode<'_, B> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl <B: BranchingScheme> Compare<B::Node> for CompareNode<'_, B> {
    fn compare(&self, l: &B::Node, r: &B::Node) -> Ordering {
        self.0.compare(l, r).reverse()
    }
}
