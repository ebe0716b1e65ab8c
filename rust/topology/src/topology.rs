// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The most general notion of a topological space.
//!
//! A topology is a pair `(S, O)` where `O` is a collection of subsets of `S`
//! (the open sets) such that the empty set and `S` are open, and unions and
//! finite intersections of open sets are open.
//!
//! This trait can only ask membership questions. That keeps it implementable
//! by uncountable spaces such as [`RealLine`](crate::RealLine); finite spaces
//! refine it in [`FiniteTopology`](crate::FiniteTopology) and get this trait
//! for free.

use crate::finite::FiniteTopology;
use crate::set::{Point, PointSet};

/// A topological space that can answer membership questions.
pub trait Topology<T> {
    /// The representation of subsets of this space.
    type Subset;

    /// Returns `true` if the point is an element of the space.
    fn contains_point(&self, point: &T) -> bool;

    /// Returns `true` if the subset is one of the open sets.
    fn is_open(&self, subset: &Self::Subset) -> bool;

    /// Returns `true` if the subset is closed, i.e. its complement is open.
    fn is_closed(&self, subset: &Self::Subset) -> bool;
}

impl<T: Point, F: FiniteTopology<T>> Topology<T> for F {
    type Subset = PointSet<T>;

    fn contains_point(&self, point: &T) -> bool {
        self.elements().contains(point)
    }

    fn is_open(&self, subset: &PointSet<T>) -> bool {
        self.open_sets().contains(subset)
    }

    fn is_closed(&self, subset: &PointSet<T>) -> bool {
        subset.is_subset(self.elements()) && self.open_sets().contains(&self.complement(subset))
    }
}
