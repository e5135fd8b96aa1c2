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

/// A fringe is the priority queue of a best-first search: it holds the open
/// nodes of the search tree, that is, the nodes which were generated but not
/// expanded yet.
pub trait Fringe {
    type Node;

    /// Adds an open node.
    fn push(&mut self, node: Self::Node);
    /// Removes the node which must be expanded next.
    /// # Note:
    /// Best-first search is only correct if the nodes come out in the
    /// expansion order defined by `BranchingScheme::compare` (smallest
    /// first). Every implementation must honor that order.
    fn pop(&mut self) -> Option<Self::Node>;
    /// Drops all the open nodes.
    fn clear(&mut self);
    /// The number of open nodes.
    fn len(&self) -> usize;
    /// Returns true iff no node is open (len == 0)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
