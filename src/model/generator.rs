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

//! This module generates synthetic instances of the knapsack problem with
//! width and conflicts.

use std::collections::BTreeSet;

use rand::Rng;

use crate::{Error, Instance, InstanceBuilder};

/// Generates a random instance with `nb_items` items (and conflicts).
///
/// * weights, widths and profits are drawn uniformly in [100, 200];
/// * the capacity is drawn uniformly between one fourth and one half of the
///   total weight;
/// * a density `d` is drawn uniformly in [1, 25] and `n(n-1)/2 * d / 100`
///   random pairs of distinct items are declared conflicting (repeated pairs
///   are merged).
pub fn generate<R: Rng>(nb_items: usize, rng: &mut R) -> Result<Instance, Error> {
    let mut items = Vec::with_capacity(nb_items);
    let mut total_weight = 0;
    for _ in 0..nb_items {
        let profit = rng.random_range(100..=200);
        let width = rng.random_range(100..=200);
        let weight = rng.random_range(100..=200);
        total_weight += weight;
        items.push((weight, width, profit));
    }
    let capacity = rng.random_range(total_weight / 4..=total_weight / 2);

    let mut conflicts = BTreeSet::new();
    let nb_pairs = nb_items * nb_items.saturating_sub(1) / 2;
    let density = rng.random_range(1..=25);
    for _ in 0..nb_pairs * density / 100 {
        let a = rng.random_range(0..nb_items);
        let mut b = rng.random_range(0..nb_items - 1);
        if b >= a {
            b += 1;
        }
        conflicts.insert((a.min(b), a.max(b)));
    }

    let mut builder = InstanceBuilder::new(capacity).with_conflicts();
    for (weight, width, profit) in items {
        builder = builder.item(weight, width, profit);
    }
    for (a, b) in conflicts {
        builder = builder.conflict(a, b);
    }
    builder.build()
}
