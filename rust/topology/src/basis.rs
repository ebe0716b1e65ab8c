// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bases for finite topologies.
//!
//! A basis is a collection of open sets such that every open set is a union of
//! basis sets. Equivalently, for every open `U` and every `x ∈ U` there is a
//! basis set `B` with `x ∈ B ⊆ U`.

use std::collections::btree_set;

use crate::custom::CustomTopology;
use crate::error::{Error, Result};
use crate::finite::FiniteTopology;
use crate::generate::close_under_unions;
use crate::set::{describe, Point, PointSet, SetFamily};

/// A collection of open sets generating a topology by unions.
pub trait Basis<T: Point> {
    /// The space this basis generates.
    type Space: FiniteTopology<T>;

    /// The topology with which this basis is associated.
    fn topology(&self) -> &Self::Space;

    /// The basis sets.
    fn basis_sets(&self) -> &SetFamily<T>;

    /// The number of basis sets.
    fn len(&self) -> usize {
        self.basis_sets().len()
    }

    /// Returns `true` if there are no basis sets.
    fn is_empty(&self) -> bool {
        self.basis_sets().is_empty()
    }

    /// Returns `true` if `set` is one of the basis sets.
    fn contains(&self, set: &PointSet<T>) -> bool {
        self.basis_sets().contains(set)
    }

    /// Iterates over the basis sets in order.
    fn iter(&self) -> btree_set::Iter<'_, PointSet<T>> {
        self.basis_sets().iter()
    }
}

/// A basis whose sets are supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBasis<T: Point, S: FiniteTopology<T>> {
    basis_sets: SetFamily<T>,
    topology: S,
}

impl<T: Point, S: FiniteTopology<T>> CustomBasis<T, S> {
    /// Checks that every basis set is open in `topology` and that every open
    /// set of `topology` is a union of basis sets.
    pub fn new(basis_sets: SetFamily<T>, topology: S) -> Result<Self> {
        if let Some(stray) = basis_sets
            .iter()
            .find(|set| !topology.open_sets().contains(*set))
        {
            tracing::warn!(basis_set = %describe(stray), "basis set is not open");
            return Err(Error::BasisSetNotOpen(describe(stray)));
        }

        for open in topology.open_sets() {
            let covered = basis_sets
                .iter()
                .filter(|set| set.is_subset(open))
                .fold(PointSet::new(), |mut acc, set| {
                    acc.extend(set.iter().cloned());
                    acc
                });
            if &covered != open {
                tracing::warn!(open_set = %describe(open), "open set not covered by basis");
                return Err(Error::NotABasis(describe(open)));
            }
        }

        Ok(Self {
            basis_sets,
            topology,
        })
    }

    /// Rebuilds the topology as the set of all unions of basis sets.
    pub fn generated_topology(&self) -> CustomTopology<T> {
        let open_sets = close_under_unions(&self.basis_sets);
        CustomTopology::from_parts(self.topology.elements().clone(), open_sets)
    }

    /// Consumes the basis, returning the topology it was checked against.
    pub fn into_topology(self) -> S {
        self.topology
    }
}

impl<T: Point, S: FiniteTopology<T>> Basis<T> for CustomBasis<T, S> {
    type Space = S;

    fn topology(&self) -> &S {
        &self.topology
    }

    fn basis_sets(&self) -> &SetFamily<T> {
        &self.basis_sets
    }
}

impl<'a, T: Point, S: FiniteTopology<T>> IntoIterator for &'a CustomBasis<T, S> {
    type Item = &'a PointSet<T>;
    type IntoIter = btree_set::Iter<'a, PointSet<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.basis_sets.iter()
    }
}
