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

//! This module groups the errors which can be raised by this library.

/// This enumeration simply groups the kind of errors that might occur when
/// loading an instance or a certificate, or when a solver is handed an
/// instance it cannot deal with.
///
/// # Note:
/// An infeasible selection (duplicate items, conflicting items or a capacity
/// overrun) is *never* an error. It is reported by an `Evaluation` whose
/// `is_feasible()` method returns false.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The file was not a valid json document (or lacked a mandatory field)
    #[error("json error {0}")]
    Json(#[from] serde_json::Error),
    /// The item arrays of an instance do not have the same length
    #[error("ill formed instance: {weights} weights, {widths} widths and {profits} profits")]
    LengthMismatch {
        weights: usize,
        widths: usize,
        profits: usize,
    },
    /// Some identity does not designate any item of the instance
    #[error("item {item} does not exist (the instance has {nb_items} items)")]
    ItemOutOfRange { item: usize, nb_items: usize },
    /// An item was declared conflicting with itself
    #[error("item {item} cannot conflict with itself")]
    SelfConflict { item: usize },
    /// The width or the profit of some item does not fit in an `isize`
    #[error("item {item} has a value ({value}) too large to be handled")]
    ValueTooLarge { item: usize, value: usize },
    /// The profits of all the items add up to more than an `isize` can hold
    #[error("the total profit of the instance is too large to be handled")]
    ProfitOverflow,
    /// The dynamic programming algorithm was asked to solve an instance with
    /// conflicts
    #[error("dynamic programming cannot handle conflicts ({nb_conflicts} declared)")]
    UnsupportedConflicts { nb_conflicts: usize },
}
