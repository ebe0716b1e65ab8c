// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Set types shared by every topology.
//!
//! Sets of points are ordered (`BTreeSet`) so that a set of sets is itself an
//! ordered, comparable value. Two families of open sets are then equal exactly
//! when they contain the same sets, which is the equality axiom of set theory.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Anything that can be a point of a finite topological space.
pub trait Point: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> Point for T {}

/// A finite set of points.
pub type PointSet<T> = BTreeSet<T>;

/// A finite collection of point sets, e.g. the open sets of a topology.
pub type SetFamily<T> = BTreeSet<PointSet<T>>;

/// Renders a set for error messages, e.g. `{1, 2}`.
pub(crate) fn describe<T: Debug>(set: &PointSet<T>) -> String {
    let items: Vec<String> = set.iter().map(|p| format!("{p:?}")).collect();
    format!("{{{}}}", items.join(", "))
}

/// Renders a family of sets for error messages, e.g. `{{}, {1}}`.
pub(crate) fn describe_family<T: Debug>(family: &SetFamily<T>) -> String {
    let items: Vec<String> = family.iter().map(describe).collect();
    format!("{{{}}}", items.join(", "))
}
