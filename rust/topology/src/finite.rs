// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topologies with a finite number of elements.
//!
//! A finite space has finitely many open sets, so every derived notion of
//! section 1.1 of Abraham & Marsden can be computed directly:
//!
//! * the **closed sets** are the complements of the open sets,
//! * the **closure** of `A` is the intersection of all closed sets containing `A`,
//! * the **interior** of `A` is the union of all open sets contained in `A`,
//! * the **boundary** of `A` is `cl(A) ∩ cl(S \ A)`.
//!
//! Implementors only provide [`FiniteTopology::elements`] and
//! [`FiniteTopology::open_sets`]; everything else is derived.

use crate::error::{Error, Result};
use crate::product::FiniteProductTopology;
use crate::set::{describe, Point, PointSet, SetFamily};

/// A topology with finitely many elements, and therefore finitely many open sets.
pub trait FiniteTopology<T: Point> {
    /// The elements of the space.
    fn elements(&self) -> &PointSet<T>;

    /// The open sets of the space.
    fn open_sets(&self) -> &SetFamily<T>;

    /// The closed sets: complements of the open sets.
    fn closed_sets(&self) -> SetFamily<T> {
        self.open_sets()
            .iter()
            .map(|open| self.complement(open))
            .collect()
    }

    /// The open neighborhoods of a point (definition 1.1.1): all open sets that
    /// contain it. Empty if the point is not an element.
    fn open_neighborhoods(&self, point: &T) -> SetFamily<T> {
        self.open_sets()
            .iter()
            .filter(|open| open.contains(point))
            .cloned()
            .collect()
    }

    /// The open neighborhoods of a set: all open sets that contain every
    /// point of it. For instance `{2, 3, 4}` is an open neighborhood of
    /// `{2, 3}` if `{2, 3, 4}` is open.
    fn open_neighborhoods_of_set(&self, set: &PointSet<T>) -> SetFamily<T> {
        self.open_sets()
            .iter()
            .filter(|open| open.is_superset(set))
            .cloned()
            .collect()
    }

    /// The elements of the space that are not in `subset`.
    fn complement(&self, subset: &PointSet<T>) -> PointSet<T> {
        self.elements().difference(subset).cloned().collect()
    }

    /// The smallest closed set containing `subset`.
    fn closure(&self, subset: &PointSet<T>) -> Result<PointSet<T>> {
        self.check_subset(subset)?;
        Ok(self
            .closed_sets()
            .into_iter()
            .filter(|closed| closed.is_superset(subset))
            .fold(self.elements().clone(), |acc, closed| {
                acc.intersection(&closed).cloned().collect()
            }))
    }

    /// The largest open set contained in `subset`.
    fn interior(&self, subset: &PointSet<T>) -> Result<PointSet<T>> {
        self.check_subset(subset)?;
        Ok(self
            .open_sets()
            .iter()
            .filter(|open| open.is_subset(subset))
            .fold(PointSet::new(), |mut acc, open| {
                acc.extend(open.iter().cloned());
                acc
            }))
    }

    /// The points in the closure of both `subset` and its complement.
    fn boundary(&self, subset: &PointSet<T>) -> Result<PointSet<T>> {
        let inner = self.closure(subset)?;
        let outer = self.closure(&self.complement(subset))?;
        Ok(inner.intersection(&outer).cloned().collect())
    }

    /// Returns `true` if the closure of `subset` is the whole space.
    fn is_dense(&self, subset: &PointSet<T>) -> Result<bool> {
        Ok(&self.closure(subset)? == self.elements())
    }

    /// The accumulation points of `subset`: points whose every open
    /// neighborhood meets `subset` in a point other than themselves.
    fn accumulation_points(&self, subset: &PointSet<T>) -> Result<PointSet<T>> {
        self.check_subset(subset)?;
        Ok(self
            .elements()
            .iter()
            .filter(|point| {
                self.open_neighborhoods(point)
                    .iter()
                    .all(|open| open.iter().any(|q| q != *point && subset.contains(q)))
            })
            .cloned()
            .collect())
    }

    /// The product topology of `self` and `other`.
    fn product<U: Point, O: FiniteTopology<U>>(&self, other: &O) -> FiniteProductTopology<T, U>
    where
        Self: Sized,
    {
        FiniteProductTopology::new(self, other)
    }

    /// Two topologies are equal iff their elements and open sets are equal.
    fn same_topology<O: FiniteTopology<T>>(&self, other: &O) -> bool
    where
        Self: Sized,
    {
        self.elements() == other.elements() && self.open_sets() == other.open_sets()
    }

    /// Returns [`Error::InvalidSubset`] unless `subset` is a subset of the elements.
    fn check_subset(&self, subset: &PointSet<T>) -> Result<()> {
        if subset.is_subset(self.elements()) {
            Ok(())
        } else {
            tracing::warn!(subset = %describe(subset), "rejected set outside the space");
            Err(Error::InvalidSubset {
                subset: describe(subset),
                space: describe(self.elements()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom::CustomTopology;
    use crate::topology::Topology;

    /// `{a, b, c}` with open sets `{}, {a}, {a, b}, {a, b, c}`.
    fn chain() -> CustomTopology<char> {
        CustomTopology::new(
            ['a', 'b', 'c'].into(),
            [
                PointSet::new(),
                ['a'].into(),
                ['a', 'b'].into(),
                ['a', 'b', 'c'].into(),
            ]
            .into(),
        )
        .unwrap()
    }

    fn set(points: &[char]) -> PointSet<char> {
        points.iter().copied().collect()
    }

    #[test]
    fn closed_sets_are_complements() {
        let space = chain();
        let closed = space.closed_sets();
        let expected: SetFamily<char> =
            [set(&[]), set(&['c']), set(&['b', 'c']), set(&['a', 'b', 'c'])].into();
        assert_eq!(closed, expected);
        for closed_set in &closed {
            assert!(space.open_sets().contains(&space.complement(closed_set)));
        }
    }

    #[test]
    fn open_neighborhoods_of_point() {
        let space = chain();
        let hoods = space.open_neighborhoods(&'b');
        assert_eq!(hoods, SetFamily::from([set(&['a', 'b']), set(&['a', 'b', 'c'])]));
        assert!(space.open_neighborhoods(&'z').is_empty());
    }

    #[test]
    fn open_neighborhoods_of_set() {
        let space = chain();
        let hoods = space.open_neighborhoods_of_set(&set(&['a', 'b']));
        assert_eq!(hoods, SetFamily::from([set(&['a', 'b']), set(&['a', 'b', 'c'])]));
        let whole = space.open_neighborhoods_of_set(&set(&['c']));
        assert_eq!(whole, SetFamily::from([set(&['a', 'b', 'c'])]));
    }

    #[test]
    fn complement_is_an_involution_on_open_sets() {
        let space = chain();
        for open in space.open_sets() {
            assert_eq!(&space.complement(&space.complement(open)), open);
        }
    }

    #[test]
    fn closure_is_smallest_closed_superset() {
        let space = chain();
        assert_eq!(space.closure(&set(&['a'])).unwrap(), set(&['a', 'b', 'c']));
        assert_eq!(space.closure(&set(&['b'])).unwrap(), set(&['b', 'c']));
        assert_eq!(space.closure(&set(&['c'])).unwrap(), set(&['c']));
        assert_eq!(space.closure(&set(&[])).unwrap(), set(&[]));
    }

    #[test]
    fn interior_is_largest_open_subset() {
        let space = chain();
        assert_eq!(space.interior(&set(&['a', 'c'])).unwrap(), set(&['a']));
        assert_eq!(space.interior(&set(&['b', 'c'])).unwrap(), set(&[]));
        assert_eq!(
            space.interior(&set(&['a', 'b', 'c'])).unwrap(),
            set(&['a', 'b', 'c'])
        );
    }

    #[test]
    fn boundary_of_open_set() {
        let space = chain();
        // cl{a, b} = S, cl{c} = {c}
        assert_eq!(space.boundary(&set(&['a', 'b'])).unwrap(), set(&['c']));
        assert_eq!(space.boundary(&set(&['b'])).unwrap(), set(&['b', 'c']));
    }

    #[test]
    fn boundary_is_closed_and_symmetric() {
        let space = chain();
        for subset in [set(&['a']), set(&['b']), set(&['a', 'c']), set(&[])] {
            let boundary = space.boundary(&subset).unwrap();
            assert!(space.is_closed(&boundary));
            assert_eq!(boundary, space.boundary(&space.complement(&subset)).unwrap());
        }
    }

    #[test]
    fn operations_reject_foreign_sets() {
        let space = chain();
        let stray = set(&['a', 'q']);
        assert!(matches!(
            space.closure(&stray),
            Err(Error::InvalidSubset { .. })
        ));
        assert!(space.interior(&stray).is_err());
        assert!(space.boundary(&stray).is_err());
        assert!(space.accumulation_points(&stray).is_err());
    }

    #[test]
    fn dense_sets() {
        let space = chain();
        assert!(space.is_dense(&set(&['a'])).unwrap());
        assert!(!space.is_dense(&set(&['b'])).unwrap());
    }

    #[test]
    fn accumulation_points_exclude_isolated_witnesses() {
        let space = chain();
        // every neighborhood of b or c contains a; the only neighborhood
        // {a} of a contains nothing else
        assert_eq!(space.accumulation_points(&set(&['a'])).unwrap(), set(&['b', 'c']));
        assert_eq!(space.accumulation_points(&set(&['c'])).unwrap(), set(&[]));
    }

    #[test]
    fn same_topology_compares_elements_and_open_sets() {
        let a = chain();
        let b = chain();
        assert!(a.same_topology(&b));
        let indiscrete = CustomTopology::indiscrete(set(&['a', 'b', 'c']));
        assert!(!a.same_topology(&indiscrete));
    }
}
