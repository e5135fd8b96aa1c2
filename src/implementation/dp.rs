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

//! This module provides the exact dynamic programming algorithm for the
//! knapsack problem with width (without conflicts).
//!
//! The idea is the following: when the items are sorted by increasing width,
//! any subset of the first `i` items has a width of at most the width of the
//! `i`-th item. Hence, solving a classical knapsack over each prefix of the
//! sorted items and subtracting the width of the last item of the prefix
//! gives an upper bound on the objective of the subsets of that prefix which
//! is reached by the best of them. The best prefix yields the optimum.

use tracing::debug;

use crate::{Error, Instance, Selection};

/// Solves the given (conflict free) instance to optimality and returns the
/// selected items.
///
/// # Example
/// ```
/// # use knapwidth::*;
/// let instance = InstanceBuilder::new(10)
///     .item(5, 3, 10)
///     .item(5, 4, 10)
///     .build()
///     .unwrap();
///
/// let mut selection = dynamic_programming(&instance).unwrap();
/// selection.sort_unstable();
/// assert_eq!(vec![0, 1], selection);
/// ```
///
/// # Errors
/// This fails with `Error::UnsupportedConflicts` when some conflict is
/// declared in the instance.
pub fn dynamic_programming(instance: &Instance) -> Result<Selection, Error> {
    let nb_conflicts = instance.nb_conflicts();
    if nb_conflicts > 0 {
        return Err(Error::UnsupportedConflicts { nb_conflicts });
    }

    let sorted = sorted_by_width(instance);
    let table = fill_table(instance, &sorted);
    let prefix = best_prefix(instance, &sorted, &table);
    debug!(nb_items = sorted.len(), capacity = instance.capacity(), prefix, "dp table filled");

    Ok(backtrack(instance, &sorted, &table, prefix))
}

/// The item identities sorted by non-decreasing width
fn sorted_by_width(instance: &Instance) -> Vec<usize> {
    let mut sorted = (0..instance.nb_items()).collect::<Vec<_>>();
    sorted.sort_by_key(|&id| instance.item(id).width);
    sorted
}

/// `table[i][c]` is the maximum profit of the subsets of the first `i` sorted
/// items whose weight does not exceed `c`
fn fill_table(instance: &Instance, sorted: &[usize]) -> Vec<Vec<usize>> {
    let capacity = instance.capacity();
    let mut table = vec![vec![0; capacity + 1]; sorted.len() + 1];

    for (i, &id) in sorted.iter().enumerate() {
        let item = instance.item(id);
        // some items are heavier than the knapsack itself
        let light = item.weight.min(capacity + 1);
        for c in 0..light {
            table[i + 1][c] = table[i][c];
        }
        for c in light..=capacity {
            table[i + 1][c] = table[i][c].max(table[i][c - item.weight] + item.profit);
        }
    }
    table
}

/// The length of the prefix of the sorted items that yields the best
/// objective (the first one in case of ties)
fn best_prefix(instance: &Instance, sorted: &[usize], table: &[Vec<usize>]) -> usize {
    let capacity = instance.capacity();
    let objective = |i: usize| {
        let width = if i == 0 { 0 } else { instance.item(sorted[i - 1]).width };
        table[i][capacity] as isize - width as isize
    };

    let mut best = 0;
    for i in 1..=sorted.len() {
        if objective(i) > objective(best) {
            best = i;
        }
    }
    best
}

/// Rebuilds the subset of the first `prefix` sorted items reaching
/// `table[prefix][capacity]`. The rows must be visited backwards.
fn backtrack(instance: &Instance, sorted: &[usize], table: &[Vec<usize>], prefix: usize) -> Selection {
    let mut selection = vec![];
    let mut c = instance.capacity();
    for i in (1..=prefix).rev() {
        if table[i][c] != table[i - 1][c] {
            let id = sorted[i - 1];
            selection.push(id);
            c -= instance.item(id).weight;
        }
    }
    selection
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
