// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Open and closed intervals over a partially ordered set.
//!
//! An interval is a container bounded by two points of a poset. Membership
//! is decided by comparison with the bounds, so intervals over `f64` describe
//! uncountable sets without enumerating them.

use std::fmt::Debug;

use crate::container::Container;
use crate::error::{Error, Result};

/// A set of points between two bounds.
pub trait Interval<T>: Container<T> {}

/// An interval with a lower and an upper bound.
pub trait BoundedInterval<T>: Interval<T> {
    fn lower_bound(&self) -> &T;
    fn upper_bound(&self) -> &T;
}

fn check_bounds<T: PartialOrd + Debug>(lower: &T, upper: &T) -> Result<()> {
    // NaN bounds compare false and are rejected here
    if lower < upper {
        Ok(())
    } else {
        Err(Error::InvalidInterval {
            lower: format!("{lower:?}"),
            upper: format!("{upper:?}"),
        })
    }
}

/// `(lower, upper)`: points strictly between the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenInterval<T> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + Debug> OpenInterval<T> {
    /// Fails with [`Error::InvalidInterval`] unless `lower < upper`.
    pub fn new(lower: T, upper: T) -> Result<Self> {
        check_bounds(&lower, &upper)?;
        Ok(Self { lower, upper })
    }
}

impl<T: PartialOrd> Container<T> for OpenInterval<T> {
    fn contains(&self, item: &T) -> bool {
        self.lower < *item && *item < self.upper
    }
}

impl<T: PartialOrd> Interval<T> for OpenInterval<T> {}

impl<T: PartialOrd> BoundedInterval<T> for OpenInterval<T> {
    fn lower_bound(&self) -> &T {
        &self.lower
    }

    fn upper_bound(&self) -> &T {
        &self.upper
    }
}

/// `[lower, upper]`: points between the bounds, bounds included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedInterval<T> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + Debug> ClosedInterval<T> {
    /// Fails with [`Error::InvalidInterval`] unless `lower < upper`.
    pub fn new(lower: T, upper: T) -> Result<Self> {
        check_bounds(&lower, &upper)?;
        Ok(Self { lower, upper })
    }
}

impl<T: PartialOrd> Container<T> for ClosedInterval<T> {
    fn contains(&self, item: &T) -> bool {
        self.lower <= *item && *item <= self.upper
    }
}

impl<T: PartialOrd> Interval<T> for ClosedInterval<T> {}

impl<T: PartialOrd> BoundedInterval<T> for ClosedInterval<T> {
    fn lower_bound(&self) -> &T {
        &self.lower
    }

    fn upper_bound(&self) -> &T {
        &self.upper
    }
}
