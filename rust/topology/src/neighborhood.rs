// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Neighborhood predicates (Abraham & Marsden, definition 1.1.1).

use crate::finite::FiniteTopology;
use crate::set::{Point, PointSet};

/// Returns `true` if `set` is a neighborhood of `point`, i.e. contains it.
pub fn is_neighborhood<T: Point>(point: &T, set: &PointSet<T>) -> bool {
    set.contains(point)
}

/// Returns `true` if `set` contains `point` and is open in `topology`.
pub fn is_open_neighborhood<T: Point, F: FiniteTopology<T>>(
    point: &T,
    set: &PointSet<T>,
    topology: &F,
) -> bool {
    is_neighborhood(point, set) && topology.open_sets().contains(set)
}

/// Returns `true` if `set` is an open neighborhood of `subset`: `set` is open
/// and `subset ⊆ set`.
pub fn is_set_open_neighborhood<T: Point, F: FiniteTopology<T>>(
    subset: &PointSet<T>,
    set: &PointSet<T>,
    topology: &F,
) -> bool {
    subset.is_subset(set) && topology.open_sets().contains(set)
}
