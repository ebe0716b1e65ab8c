// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A finite topology whose elements and open sets are given by the user.
//!
//! Construction checks the axioms of a topological space and rejects any
//! collection of open sets that violates them, so every `CustomTopology` in
//! existence is a valid topology.

use std::fmt;
use std::ops::Mul;

use crate::error::{Error, Result};
use crate::finite::FiniteTopology;
use crate::generate::generate_topology;
use crate::product::FiniteProductTopology;
use crate::set::{describe, describe_family, Point, PointSet, SetFamily};

/// A finite topology with user-supplied elements and open sets.
///
/// # Example
///
/// ```
/// use fom_topology::{CustomTopology, Error, PointSet};
///
/// let elements: PointSet<&str> = ["x1", "x2"].into();
/// let valid = CustomTopology::new(
///     elements.clone(),
///     [PointSet::new(), ["x1"].into(), elements.clone()].into(),
/// );
/// assert!(valid.is_ok());
///
/// let missing_empty = CustomTopology::new(elements.clone(), [elements].into());
/// assert_eq!(missing_empty.unwrap_err(), Error::MissingEmptySet);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTopology<T: Point> {
    elements: PointSet<T>,
    open_sets: SetFamily<T>,
}

impl<T: Point> CustomTopology<T> {
    /// Creates a topology, checking that
    ///
    /// 1. every open set is a subset of the elements,
    /// 2. the empty set and the set of all elements are open,
    /// 3. the intersection of any two open sets is open,
    /// 4. the union of any two open sets is open.
    pub fn new(elements: PointSet<T>, open_sets: SetFamily<T>) -> Result<Self> {
        if let Err(err) = check_axioms(&elements, &open_sets) {
            tracing::warn!(
                elements = %describe(&elements),
                open_sets = %describe_family(&open_sets),
                error = %err,
                "rejected open sets"
            );
            return Err(err);
        }
        tracing::debug!(
            elements = elements.len(),
            open_sets = open_sets.len(),
            "built custom topology"
        );
        Ok(Self {
            elements,
            open_sets,
        })
    }

    /// The discrete topology: every subset is open.
    pub fn discrete(elements: PointSet<T>) -> Self {
        let singletons: SetFamily<T> = elements.iter().map(|p| [p.clone()].into()).collect();
        let open_sets = generate_topology(&elements, &singletons);
        Self::from_parts(elements, open_sets)
    }

    /// The indiscrete (trivial) topology: only the empty set and the whole set are open.
    pub fn indiscrete(elements: PointSet<T>) -> Self {
        let open_sets = [PointSet::new(), elements.clone()].into();
        Self::from_parts(elements, open_sets)
    }

    /// The smallest topology on `elements` in which every set of `subbasis` is open.
    ///
    /// Fails with [`Error::InvalidSubset`] if a subbasis set has points outside
    /// `elements`.
    pub fn generated_by(elements: PointSet<T>, subbasis: &SetFamily<T>) -> Result<Self> {
        if let Some(stray) = subbasis.iter().find(|s| !s.is_subset(&elements)) {
            return Err(Error::InvalidSubset {
                subset: describe(stray),
                space: describe(&elements),
            });
        }
        let open_sets = generate_topology(&elements, subbasis);
        Ok(Self::from_parts(elements, open_sets))
    }

    /// Copies any finite topology into a `CustomTopology`.
    pub fn from_topology<F: FiniteTopology<T>>(topology: &F) -> Self {
        Self::from_parts(topology.elements().clone(), topology.open_sets().clone())
    }

    /// Wraps parts that are already known to satisfy the axioms.
    pub(crate) fn from_parts(elements: PointSet<T>, open_sets: SetFamily<T>) -> Self {
        Self {
            elements,
            open_sets,
        }
    }
}

/// Checks the axioms of a topological space on finite data.
pub(crate) fn check_axioms<T: Point>(elements: &PointSet<T>, open_sets: &SetFamily<T>) -> Result<()> {
    if let Some(stray) = open_sets.iter().find(|s| !s.is_subset(elements)) {
        return Err(Error::OpenSetOutsideSpace(describe(stray)));
    }
    if !open_sets.contains(&PointSet::new()) {
        return Err(Error::MissingEmptySet);
    }
    if !open_sets.contains(elements) {
        return Err(Error::MissingWholeSet);
    }

    for (i, first) in open_sets.iter().enumerate() {
        for second in open_sets.iter().skip(i + 1) {
            let meet: PointSet<T> = first.intersection(second).cloned().collect();
            if !open_sets.contains(&meet) {
                return Err(Error::NotClosedUnderIntersection {
                    first: describe(first),
                    second: describe(second),
                });
            }
            let join: PointSet<T> = first.union(second).cloned().collect();
            if !open_sets.contains(&join) {
                return Err(Error::NotClosedUnderUnion {
                    first: describe(first),
                    second: describe(second),
                });
            }
        }
    }
    Ok(())
}

impl<T: Point> FiniteTopology<T> for CustomTopology<T> {
    fn elements(&self) -> &PointSet<T> {
        &self.elements
    }

    fn open_sets(&self) -> &SetFamily<T> {
        &self.open_sets
    }
}

impl<T: Point> fmt::Display for CustomTopology<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CustomTopology(elements={}, open_sets={})",
            describe(&self.elements),
            describe_family(&self.open_sets)
        )
    }
}

impl<'a, 'b, T: Point, U: Point> Mul<&'b CustomTopology<U>> for &'a CustomTopology<T> {
    type Output = FiniteProductTopology<T, U>;

    fn mul(self, rhs: &'b CustomTopology<U>) -> Self::Output {
        self.product(rhs)
    }
}
