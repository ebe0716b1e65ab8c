// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The standard topology on the real line.
//!
//! Elements are the finite `f64` values and open sets are unions of open
//! intervals. Only membership is modeled: subsets are the empty set, the whole
//! line, or a single interval, which is enough to tell open from closed.

use crate::container::Container;
use crate::error::Result;
use crate::intervals::{ClosedInterval, OpenInterval};
use crate::topology::Topology;

/// A subset of the real line that [`RealLine`] can classify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RealSubset {
    Empty,
    Whole,
    Open(OpenInterval<f64>),
    Closed(ClosedInterval<f64>),
}

impl Container<f64> for RealSubset {
    fn contains(&self, item: &f64) -> bool {
        match self {
            RealSubset::Empty => false,
            RealSubset::Whole => item.is_finite(),
            RealSubset::Open(interval) => interval.contains(item),
            RealSubset::Closed(interval) => interval.contains(item),
        }
    }
}

/// The real numbers with the topology of open intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealLine;

impl RealLine {
    /// The open ball `(center - radius, center + radius)`.
    pub fn open_ball(&self, center: f64, radius: f64) -> Result<OpenInterval<f64>> {
        OpenInterval::new(center - radius, center + radius)
    }
}

impl Topology<f64> for RealLine {
    type Subset = RealSubset;

    fn contains_point(&self, point: &f64) -> bool {
        point.is_finite()
    }

    fn is_open(&self, subset: &RealSubset) -> bool {
        matches!(
            subset,
            RealSubset::Empty | RealSubset::Whole | RealSubset::Open(_)
        )
    }

    fn is_closed(&self, subset: &RealSubset) -> bool {
        matches!(
            subset,
            RealSubset::Empty | RealSubset::Whole | RealSubset::Closed(_)
        )
    }
}
