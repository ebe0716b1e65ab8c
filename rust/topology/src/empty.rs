// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The empty topology: no elements, and the empty set as its only open set.

use crate::finite::FiniteTopology;
use crate::set::{Point, PointSet, SetFamily};

/// The topology on the empty set.
///
/// Its only open set, and its only closed set, is `{}`. Closure, interior and
/// boundary all map `{}` to `{}`, and the product with any space is again
/// empty because `{} × Y = {}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTopology<T: Point> {
    elements: PointSet<T>,
    open_sets: SetFamily<T>,
}

impl<T: Point> EmptyTopology<T> {
    /// The empty space, whose only open set is `{}`.
    pub fn new() -> Self {
        Self {
            elements: PointSet::new(),
            open_sets: [PointSet::new()].into(),
        }
    }
}

impl<T: Point> Default for EmptyTopology<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Point> FiniteTopology<T> for EmptyTopology<T> {
    fn elements(&self) -> &PointSet<T> {
        &self.elements
    }

    fn open_sets(&self) -> &SetFamily<T> {
        &self.open_sets
    }
}
