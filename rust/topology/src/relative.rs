// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relative (subspace) topologies.

use crate::error::{Error, Result};
use crate::finite::FiniteTopology;
use crate::set::{describe, Point, PointSet, SetFamily};

/// The topology induced on a subset `A` of a space: its open sets are
/// `A ∩ U` for every open `U` of the parent space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeTopology<T: Point> {
    elements: PointSet<T>,
    open_sets: SetFamily<T>,
    parent_elements: PointSet<T>,
}

impl<T: Point> RelativeTopology<T> {
    /// Restricts `topology` to `subset`.
    ///
    /// Fails with [`Error::InvalidSubset`] if `subset` has points that are not
    /// elements of `topology`.
    pub fn new<F: FiniteTopology<T>>(subset: PointSet<T>, topology: &F) -> Result<Self> {
        if !subset.is_subset(topology.elements()) {
            tracing::warn!(subset = %describe(&subset), "relative topology on a non-subset");
            return Err(Error::InvalidSubset {
                subset: describe(&subset),
                space: describe(topology.elements()),
            });
        }

        let open_sets: SetFamily<T> = topology
            .open_sets()
            .iter()
            .map(|open| subset.intersection(open).cloned().collect())
            .collect();

        Ok(Self {
            elements: subset,
            open_sets,
            parent_elements: topology.elements().clone(),
        })
    }

    /// The elements of the space this topology was restricted from.
    pub fn parent_elements(&self) -> &PointSet<T> {
        &self.parent_elements
    }
}

impl<T: Point> FiniteTopology<T> for RelativeTopology<T> {
    fn elements(&self) -> &PointSet<T> {
        &self.elements
    }

    fn open_sets(&self) -> &SetFamily<T> {
        &self.open_sets
    }
}
