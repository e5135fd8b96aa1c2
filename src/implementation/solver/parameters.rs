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

//! This module provides the parameters which tune the behavior of the
//! tree-search drivers.

use std::time::Duration;

use derive_builder::Builder;

/// The parameters of a tree search. These are usually created with the
/// generated `SearchParametersBuilder`.
///
/// # Example
/// ```
/// # use knapwidth::*;
/// use std::time::Duration;
///
/// let parameters = SearchParametersBuilder::default()
///     .time_limit(Duration::from_secs(30))
///     .solution_pool_size(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(Some(Duration::from_secs(30)), parameters.time_limit);
/// assert_eq!(1, parameters.initial_beam_width);
///
/// // a beam which never grows makes no sense
/// assert!(SearchParametersBuilder::default().beam_growth_factor(1.0).build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct SearchParameters {
    /// The maximum duration of the search (unlimited when absent)
    #[builder(default, setter(strip_option))]
    pub time_limit: Option<Duration>,
    /// How many of the best nodes are kept in the solution pool
    #[builder(default = "1")]
    pub solution_pool_size: usize,
    /// The width of the first beam of an iterative beam search
    #[builder(default = "1")]
    pub initial_beam_width: usize,
    /// The factor by which the beam width grows between two iterations
    #[builder(default = "2.0")]
    pub beam_growth_factor: f64,
    /// The width of the widest beam an iterative beam search may try
    #[builder(default, setter(strip_option))]
    pub maximum_beam_width: Option<usize>,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            time_limit: None,
            solution_pool_size: 1,
            initial_beam_width: 1,
            beam_growth_factor: 2.0,
            maximum_beam_width: None,
        }
    }
}

impl SearchParametersBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.solution_pool_size == Some(0) {
            return Err("the solution pool must hold at least one node".to_string());
        }
        if self.initial_beam_width == Some(0) || self.maximum_beam_width == Some(Some(0)) {
            return Err("a beam must hold at least one node".to_string());
        }
        if let Some(factor) = self.beam_growth_factor {
            if factor.is_nan() || factor <= 1.0 {
                return Err(format!("the beam growth factor must be greater than 1 (got {factor})"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_parameters {
    use crate::*;

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(SearchParameters::default(), SearchParametersBuilder::default().build().unwrap());
    }
    #[test]
    fn empty_pool_is_rejected() {
        assert!(SearchParametersBuilder::default().solution_pool_size(0).build().is_err());
    }
    #[test]
    fn empty_beams_are_rejected() {
        assert!(SearchParametersBuilder::default().initial_beam_width(0).build().is_err());
        assert!(SearchParametersBuilder::default().maximum_beam_width(0).build().is_err());
    }
    #[test]
    fn shrinking_beams_are_rejected() {
        assert!(SearchParametersBuilder::default().beam_growth_factor(0.5).build().is_err());
        assert!(SearchParametersBuilder::default().beam_growth_factor(1.5).build().is_ok());
    }
}
