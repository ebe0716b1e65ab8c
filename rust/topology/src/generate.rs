// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closing families of sets under unions and intersections.
//!
//! The topology generated by a collection of subsets (a subbasis) is obtained
//! by first taking all finite intersections, which yields a basis, and then all
//! unions of basis sets. On a finite space both steps terminate.

use crate::set::{Point, PointSet, SetFamily};

/// Every union of members of `family`, including the empty union `{}`.
///
/// Only the join-irreducible members are folded in; each one adds its union
/// with everything collected so far.
pub fn close_under_unions<T: Point>(family: &SetFamily<T>) -> SetFamily<T> {
    let mut closed: SetFamily<T> = [PointSet::new()].into();
    for member in join_irreducible(family) {
        if closed.contains(member) {
            continue;
        }
        let grown: Vec<PointSet<T>> = closed
            .iter()
            .map(|existing| existing.union(member).cloned().collect())
            .collect();
        closed.extend(grown);
    }
    closed
}

/// Members that are not the union of the other members they contain.
/// Their unions are exactly the unions of the whole family.
fn join_irreducible<T: Point>(family: &SetFamily<T>) -> Vec<&PointSet<T>> {
    family
        .iter()
        .filter(|member| {
            let covered: PointSet<T> = family
                .iter()
                .filter(|other| other.len() < member.len() && other.is_subset(member))
                .flat_map(|other| other.iter().cloned())
                .collect();
            &covered != *member
        })
        .collect()
}

/// Every finite intersection of members of `family` taken inside `universe`,
/// including the empty intersection, which is `universe` itself.
pub fn close_under_intersections<T: Point>(
    universe: &PointSet<T>,
    family: &SetFamily<T>,
) -> SetFamily<T> {
    let mut closed: SetFamily<T> = [universe.clone()].into();
    for member in family {
        let shrunk: Vec<PointSet<T>> = closed
            .iter()
            .map(|existing| existing.intersection(member).cloned().collect())
            .collect();
        closed.extend(shrunk);
    }
    closed
}

/// The smallest topology on `elements` in which every set of `subbasis` is open.
///
/// Points of subbasis sets outside `elements` are discarded.
pub fn generate_topology<T: Point>(
    elements: &PointSet<T>,
    subbasis: &SetFamily<T>,
) -> SetFamily<T> {
    let basis = close_under_intersections(elements, subbasis);
    let open_sets = close_under_unions(&basis);
    tracing::debug!(
        elements = elements.len(),
        subbasis = subbasis.len(),
        basis = basis.len(),
        open_sets = open_sets.len(),
        "generated topology"
    );
    open_sets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(points: &[u8]) -> PointSet<u8> {
        points.iter().copied().collect()
    }

    #[test]
    fn unions_include_empty_set() {
        let family: SetFamily<u8> = [set(&[1]), set(&[2])].into();
        let closed = close_under_unions(&family);
        assert_eq!(
            closed,
            SetFamily::from([set(&[]), set(&[1]), set(&[2]), set(&[1, 2])])
        );
    }

    #[test]
    fn reducible_members_are_skipped() {
        let family: SetFamily<u8> = [set(&[1]), set(&[2]), set(&[1, 2]), set(&[3])].into();
        let irreducible: Vec<&PointSet<u8>> = join_irreducible(&family);
        assert_eq!(irreducible, vec![&set(&[1]), &set(&[2]), &set(&[3])]);
        assert_eq!(close_under_unions(&family).len(), 8);
    }

    #[test]
    fn intersections_include_universe() {
        let universe = set(&[1, 2, 3]);
        let family: SetFamily<u8> = [set(&[1, 2]), set(&[2, 3])].into();
        let closed = close_under_intersections(&universe, &family);
        assert_eq!(
            closed,
            SetFamily::from([set(&[1, 2, 3]), set(&[1, 2]), set(&[2, 3]), set(&[2])])
        );
    }

    #[test]
    fn generated_topology_of_overlapping_sets() {
        let elements = set(&[1, 2, 3]);
        let subbasis: SetFamily<u8> = [set(&[1, 2]), set(&[2, 3])].into();
        let open = generate_topology(&elements, &subbasis);
        let expected: SetFamily<u8> = [
            set(&[]),
            set(&[2]),
            set(&[1, 2]),
            set(&[2, 3]),
            set(&[1, 2, 3]),
        ]
        .into();
        assert_eq!(open, expected);
    }

    #[test]
    fn empty_subbasis_gives_indiscrete_topology() {
        let elements = set(&[1, 2]);
        let open = generate_topology(&elements, &SetFamily::new());
        assert_eq!(open, SetFamily::from([set(&[]), set(&[1, 2])]));
    }

    #[test]
    fn stray_points_are_dropped() {
        let elements = set(&[1, 2]);
        let subbasis: SetFamily<u8> = [set(&[1, 9])].into();
        let open = generate_topology(&elements, &subbasis);
        assert_eq!(open, SetFamily::from([set(&[]), set(&[1]), set(&[1, 2])]));
    }
}
