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

//! This module provides the objective evaluator. This is the one and only
//! place where the feasibility and objective value of a selection get
//! computed; the checker and the tests all rely on it.

use std::{collections::HashSet, fmt};

use crate::{Error, Instance, Variant};

/// The outcome of the evaluation of a selection against some instance.
/// An evaluation is computed even when the selection is infeasible so that
/// bad certificates remain diagnosable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub profit: usize,
    pub weight: usize,
    pub capacity: usize,
    /// The maximum width of the selected items (0 for an empty selection)
    pub width: usize,
    /// How many identities appear more than once in the selection
    pub nb_duplicates: usize,
    /// How many pairs of selected items are conflicting. This is only
    /// reported for instances of the variant with conflicts.
    pub nb_conflicts: Option<usize>,
}

impl Evaluation {
    pub fn is_feasible(&self) -> bool {
        self.nb_duplicates == 0
            && self.nb_conflicts.unwrap_or(0) == 0
            && self.weight <= self.capacity
    }
    /// profit - width (whether the selection is feasible or not). Saturates
    /// when repeated items push the profit beyond `isize::MAX`.
    pub fn objective(&self) -> isize {
        let profit = isize::try_from(self.profit).unwrap_or(isize::MAX);
        let width = isize::try_from(self.width).unwrap_or(isize::MAX);
        profit.saturating_sub(width)
    }
}

impl Instance {
    /// Evaluates the given selection. This only fails when the selection
    /// mentions an item which does not belong to the instance.
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
    /// let evaluation = instance.evaluate(&[0, 1]).unwrap();
    /// assert!(evaluation.is_feasible());
    /// assert_eq!(16, evaluation.objective());
    ///
    /// let evaluation = instance.evaluate(&[1, 1]).unwrap();
    /// assert!(!evaluation.is_feasible());
    /// assert_eq!(1, evaluation.nb_duplicates);
    /// ```
    pub fn evaluate(&self, selection: &[usize]) -> Result<Evaluation, Error> {
        let nb_items = self.nb_items();
        if let Some(&item) = selection.iter().find(|&&item| item >= nb_items) {
            return Err(Error::ItemOutOfRange { item, nb_items });
        }

        let items = selection.iter().map(|&id| self.item(id));
        let profit = items.clone().fold(0, |sum, item| usize::saturating_add(sum, item.profit));
        let weight = items.clone().fold(0, |sum, item| usize::saturating_add(sum, item.weight));
        let width = items.map(|item| item.width).max().unwrap_or(0);

        let distinct = selection.iter().collect::<HashSet<_>>().len();
        let nb_duplicates = selection.len() - distinct;

        let nb_conflicts = match self.variant() {
            Variant::WithoutConflicts => None,
            Variant::WithConflicts => {
                let mut count = 0;
                for (i, &a) in selection.iter().enumerate() {
                    count += selection[i + 1..].iter()
                        .filter(|&&b| self.are_conflicting(a, b))
                        .count();
                }
                Some(count)
            }
        };

        Ok(Evaluation { profit, weight, capacity: self.capacity(), width, nb_duplicates, nb_conflicts })
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checker")?;
        writeln!(f, "-------")?;
        writeln!(f, "Profit: {}", self.profit)?;
        writeln!(f, "Weight: {} / {}", self.weight, self.capacity)?;
        writeln!(f, "Width: {}", self.width)?;
        writeln!(f, "Number of duplicates: {}", self.nb_duplicates)?;
        if let Some(nb_conflicts) = self.nb_conflicts {
            writeln!(f, "Number of conflicts: {}", nb_conflicts)?;
        }
        writeln!(f, "Feasible: {}", self.is_feasible())?;
        write!(f, "Objective value: {}", self.objective())
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
