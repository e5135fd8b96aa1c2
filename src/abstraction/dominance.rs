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

/// A dominance checker remembers the nodes a driver has accepted so far and
/// rejects the new nodes which cannot lead to anything better than one of
/// them. Only the nodes sharing a bucket (see `BranchingScheme::bucket`) are
/// compared with one another.
pub trait DominanceChecker {
    type Node;

    /// Returns true if the node is dominated by a stored one
    /// and stores it otherwise (evicting the stored nodes it dominates)
    fn is_dominated_or_insert(&self, node: &Self::Node) -> bool;

    /// Forgets all the stored nodes
    fn clear(&self);

    /// Returns true iff a node rejected by this checker can never lead to a
    /// strictly better solution than the node which rejected it. A driver
    /// may only claim its incumbent is optimal when this holds.
    fn is_exact(&self) -> bool;
}
