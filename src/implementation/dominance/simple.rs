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

use dashmap::{DashMap, mapref::entry::Entry};

use crate::{BranchingScheme, DominanceChecker};

/// Simple implementation of a dominance checker that stores a vector of
/// non-dominated nodes for each distinct bucket of the branching scheme.
pub struct SimpleDominanceChecker<'a, B>
where
    B: BranchingScheme,
{
    scheme: &'a B,
    data: DashMap<B::Key, Vec<B::Node>, fxhash::FxBuildHasher>,
}

impl<'a, B> SimpleDominanceChecker<'a, B>
where
    B: BranchingScheme,
{
    pub fn new(scheme: &'a B) -> Self {
        Self { scheme, data: Default::default() }
    }
}

impl<B> DominanceChecker for SimpleDominanceChecker<'_, B>
where
    B: BranchingScheme,
{
    type Node = B::Node;

    fn is_dominated_or_insert(&self, node: &Self::Node) -> bool {
        if !self.scheme.comparable(node) {
            return false;
        }
        match self.data.entry(self.scheme.bucket(node)) {
            Entry::Occupied(mut e) => {
                if e.get().iter().any(|other| self.scheme.dominates(other, node)) {
                    return true;
                }
                e.get_mut().retain(|other| !self.scheme.dominates(node, other));
                e.get_mut().push(node.clone());
                false
            },
            Entry::Vacant(e) => {
                e.insert(vec![node.clone()]);
                false
            },
        }
    }

    fn clear(&self) {
        self.data.clear()
    }

    /// The comparison ignores the widest item of the nodes, so a rejected
    /// node could still have been completed into a better solution.
    fn is_exact(&self) -> bool {
        false
    }
}
