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

//! This module provides the instance model of the knapsack problem with width
//! (with or without conflicts) along with its json representation.

use std::{fs::File, io::{BufReader, BufWriter, Read, Write}, path::Path};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Tells whether an instance belongs to the conflict-free variant of the
/// problem or to the variant with conflicts. This affects the file format
/// (presence of the `conflicts` field) and the checker report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    WithoutConflicts,
    WithConflicts,
}

/// An item that may be put in the knapsack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The identity of the item (its position in the instance)
    pub id: usize,
    pub weight: usize,
    pub width: usize,
    pub profit: usize,
    /// The identities of the items conflicting with this one (sorted, without
    /// duplicates)
    pub conflicts: Vec<usize>,
}

/// An instance of the knapsack problem with width. It owns all its items and
/// is never modified once it has been built.
///
/// # Invariant
/// The conflict relation is symmetric and irreflexive. Every width, every
/// profit and the total profit fit in an `isize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    capacity: usize,
    items: Vec<Item>,
    variant: Variant,
}

impl Instance {
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }
    pub fn variant(&self) -> Variant {
        self.variant
    }
    /// The sum of the profits of all items
    pub fn total_profit(&self) -> usize {
        self.items.iter().map(|item| item.profit).sum()
    }
    /// Returns true iff items `a` and `b` may not be selected together
    pub fn are_conflicting(&self, a: usize, b: usize) -> bool {
        self.items[a].conflicts.binary_search(&b).is_ok()
    }
    /// The number of (unordered) conflicting pairs
    pub fn nb_conflicts(&self) -> usize {
        self.conflict_pairs().count()
    }
    /// Iterates over the conflicting pairs, each pair being listed once with
    /// the smaller identity first.
    pub fn conflict_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.items.iter().flat_map(|item| {
            item.conflicts.iter()
                .copied()
                .filter(move |other| item.id < *other)
                .map(move |other| (item.id, other))
        })
    }

    /// Loads an instance from the json file at the given location
    pub fn from_file<P: AsRef<Path>>(fname: P) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(File::open(fname)?))
    }
    /// Loads an instance from a json document
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let data: InstanceData = serde_json::from_reader(reader)?;
        Self::try_from(data)
    }
    /// Writes this instance to the json file at the given location
    pub fn write<P: AsRef<Path>>(&self, fname: P) -> Result<(), Error> {
        let mut out = BufWriter::new(File::create(fname)?);
        self.to_writer(&mut out)?;
        out.flush()?;
        Ok(())
    }
    /// Serializes this instance as a json document
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer(writer, &InstanceData::from(self))?;
        Ok(())
    }
}

/// The on-disk representation of an instance
#[derive(Debug, Clone, Serialize, Deserialize)]
struct InstanceData {
    capacity: usize,
    item_weights: Vec<usize>,
    item_widths: Vec<usize>,
    item_profits: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conflicts: Option<Vec<(usize, usize)>>,
}

impl TryFrom<InstanceData> for Instance {
    type Error = Error;

    fn try_from(data: InstanceData) -> Result<Self, Error> {
        let weights = data.item_weights.len();
        let widths = data.item_widths.len();
        let profits = data.item_profits.len();
        if weights != widths || weights != profits {
            return Err(Error::LengthMismatch { weights, widths, profits });
        }

        let mut builder = InstanceBuilder::new(data.capacity);
        let items = data.item_weights.iter()
            .zip(data.item_widths.iter())
            .zip(data.item_profits.iter());
        for ((weight, width), profit) in items {
            builder = builder.item(*weight, *width, *profit);
        }
        if let Some(conflicts) = data.conflicts {
            builder = builder.with_conflicts();
            for (a, b) in conflicts {
                builder = builder.conflict(a, b);
            }
        }
        builder.build()
    }
}

impl From<&Instance> for InstanceData {
    fn from(instance: &Instance) -> Self {
        let conflicts = match instance.variant {
            Variant::WithoutConflicts => None,
            Variant::WithConflicts => Some(instance.conflict_pairs().collect()),
        };
        InstanceData {
            capacity: instance.capacity,
            item_weights: instance.items.iter().map(|item| item.weight).collect(),
            item_widths: instance.items.iter().map(|item| item.width).collect(),
            item_profits: instance.items.iter().map(|item| item.profit).collect(),
            conflicts,
        }
    }
}

/// This is how you build an instance programmatically.
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
/// assert_eq!(2, instance.nb_items());
/// assert!(instance.are_conflicting(1, 0));
/// assert_eq!(Variant::WithConflicts, instance.variant());
/// ```
#[derive(Debug, Clone)]
pub struct InstanceBuilder {
    capacity: usize,
    items: Vec<(usize, usize, usize)>,
    conflicts: Vec<(usize, usize)>,
    variant: Variant,
}

impl InstanceBuilder {
    pub fn new(capacity: usize) -> Self {
        Self { capacity, items: vec![], conflicts: vec![], variant: Variant::WithoutConflicts }
    }
    /// Appends an item (its identity is the number of items added before it)
    pub fn item(mut self, weight: usize, width: usize, profit: usize) -> Self {
        self.items.push((weight, width, profit));
        self
    }
    /// Marks the instance as belonging to the variant with conflicts even if
    /// no conflict gets declared.
    pub fn with_conflicts(mut self) -> Self {
        self.variant = Variant::WithConflicts;
        self
    }
    /// Declares that items `a` and `b` may not be selected together. The
    /// relation is symmetric: declaring (a, b) or (b, a) is the same.
    pub fn conflict(mut self, a: usize, b: usize) -> Self {
        self.variant = Variant::WithConflicts;
        self.conflicts.push((a, b));
        self
    }
    /// Validates the conflicts and creates the instance
    pub fn build(self) -> Result<Instance, Error> {
        let nb_items = self.items.len();
        let mut items = self.items.iter().enumerate()
            .map(|(id, &(weight, width, profit))| Item { id, weight, width, profit, conflicts: vec![] })
            .collect::<Vec<_>>();

        for (a, b) in self.conflicts {
            for item in [a, b] {
                if item >= nb_items {
                    return Err(Error::ItemOutOfRange { item, nb_items });
                }
            }
            if a == b {
                return Err(Error::SelfConflict { item: a });
            }
            items[a].conflicts.push(b);
            items[b].conflicts.push(a);
        }
        for item in items.iter_mut() {
            item.conflicts.sort_unstable();
            item.conflicts.dedup();
        }

        let mut total_profit = 0_isize;
        for item in items.iter() {
            for value in [item.width, item.profit] {
                if isize::try_from(value).is_err() {
                    return Err(Error::ValueTooLarge { item: item.id, value });
                }
            }
            total_profit = isize::try_from(item.profit).ok()
                .and_then(|profit| total_profit.checked_add(profit))
                .ok_or(Error::ProfitOverflow)?;
        }

        Ok(Instance { capacity: self.capacity, items, variant: self.variant })
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_instance {
    use crate::*;

    const WITH_CONFLICTS: &str = r#"{
        "capacity": 10,
        "item_weights": [5, 5, 3],
        "item_widths": [3, 4, 1],
        "item_profits": [10, 10, 2],
        "conflicts": [[0, 1], [2, 1]]
    }"#;

    #[test]
    fn conflicts_are_symmetric() {
        let instance = Instance::from_reader(WITH_CONFLICTS.as_bytes()).unwrap();
        assert!(instance.are_conflicting(0, 1));
        assert!(instance.are_conflicting(1, 0));
        assert!(instance.are_conflicting(1, 2));
        assert!(instance.are_conflicting(2, 1));
        assert!(!instance.are_conflicting(0, 2));
        assert_eq!(2, instance.nb_conflicts());
    }
    #[test]
    fn repeated_conflicts_are_merged() {
        let instance = InstanceBuilder::new(3)
            .item(1, 1, 1)
            .item(1, 1, 1)
            .conflict(0, 1)
            .conflict(1, 0)
            .build()
            .unwrap();
        assert_eq!(vec![1], instance.item(0).conflicts);
        assert_eq!(1, instance.nb_conflicts());
    }
    #[test]
    fn missing_conflicts_means_no_conflict_variant() {
        let json = r#"{"capacity": 4, "item_weights": [1], "item_widths": [2], "item_profits": [3]}"#;
        let instance = Instance::from_reader(json.as_bytes()).unwrap();
        assert_eq!(Variant::WithoutConflicts, instance.variant());
        assert_eq!(4, instance.capacity());
        assert_eq!(Item { id: 0, weight: 1, width: 2, profit: 3, conflicts: vec![] }, *instance.item(0));
    }
    #[test]
    fn mismatched_lengths_are_rejected() {
        let json = r#"{"capacity": 4, "item_weights": [1, 2], "item_widths": [2], "item_profits": [3]}"#;
        let error = Instance::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(error, Error::LengthMismatch { weights: 2, widths: 1, profits: 1 }));
    }
    #[test]
    fn out_of_range_conflicts_are_rejected() {
        let error = InstanceBuilder::new(1).item(1, 1, 1).conflict(0, 3).build().unwrap_err();
        assert!(matches!(error, Error::ItemOutOfRange { item: 3, nb_items: 1 }));
    }
    #[test]
    fn self_conflicts_are_rejected() {
        let error = InstanceBuilder::new(1).item(1, 1, 1).conflict(0, 0).build().unwrap_err();
        assert!(matches!(error, Error::SelfConflict { item: 0 }));
    }
    #[test]
    fn values_beyond_isize_are_rejected() {
        let huge = isize::MAX as usize + 1;
        let error = InstanceBuilder::new(1).item(1, 1, 1).item(1, huge, 1).build().unwrap_err();
        assert!(matches!(error, Error::ValueTooLarge { item: 1, value } if value == huge));
        let error = InstanceBuilder::new(1).item(1, 1, huge).build().unwrap_err();
        assert!(matches!(error, Error::ValueTooLarge { item: 0, value } if value == huge));
    }
    #[test]
    fn total_profit_must_fit_in_isize() {
        let half = isize::MAX as usize / 2 + 1;
        let error = InstanceBuilder::new(1).item(1, 1, half).item(1, 1, half).build().unwrap_err();
        assert!(matches!(error, Error::ProfitOverflow));

        let instance = InstanceBuilder::new(1).item(1, 1, half).item(1, 1, half - 1).build().unwrap();
        assert_eq!(isize::MAX as usize, instance.total_profit());
    }
    #[test]
    fn huge_weights_are_accepted() {
        let instance = InstanceBuilder::new(usize::MAX).item(usize::MAX, 1, 1).build().unwrap();
        assert_eq!(usize::MAX, instance.item(0).weight);
    }
    #[test]
    fn garbage_is_a_json_error() {
        let error = Instance::from_reader("this is my next paper".as_bytes()).unwrap_err();
        assert!(matches!(error, Error::Json(_)));
    }
    #[test]
    fn written_instance_can_be_read_back() {
        let instance = Instance::from_reader(WITH_CONFLICTS.as_bytes()).unwrap();
        let mut buffer = vec![];
        instance.to_writer(&mut buffer).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(serde_json::json!([[0, 1], [1, 2]]), json["conflicts"]);
        assert_eq!(instance, Instance::from_reader(buffer.as_slice()).unwrap());
    }
    #[test]
    fn conflicts_field_is_omitted_for_the_conflict_free_variant() {
        let instance = InstanceBuilder::new(2).item(1, 1, 1).build().unwrap();
        let mut buffer = vec![];
        instance.to_writer(&mut buffer).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!(json.get("conflicts").is_none());
    }
}
