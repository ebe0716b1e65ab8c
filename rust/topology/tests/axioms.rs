// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property tests: the axioms and the identities of closure, interior and
//! boundary hold on randomly generated finite topologies.

use fom_topology::continuity::is_continuous;
use fom_topology::{
    CustomBasis, CustomTopology, FiniteTopology, PointSet, RandomTopology, RelativeTopology,
    Topology, TopologyProperties,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;

fn topology(max_points: usize) -> impl Strategy<Value = CustomTopology<u8>> {
    (
        prop::collection::btree_set(0u8..16, 0..=max_points),
        any::<u64>(),
        0usize..6,
    )
        .prop_map(|(elements, seed, rounds)| {
            let mut rng = StdRng::seed_from_u64(seed);
            RandomTopology::generate(elements, rounds, &mut rng).into_custom()
        })
}

/// Picks the points of `set` whose position has its bit set in `mask`.
fn pick(set: &PointSet<u8>, mask: u16) -> PointSet<u8> {
    set.iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, p)| *p)
        .collect()
}

fn topology_and_subset() -> impl Strategy<Value = (CustomTopology<u8>, PointSet<u8>)> {
    (topology(6), any::<u16>()).prop_map(|(space, mask)| {
        let subset = pick(space.elements(), mask);
        (space, subset)
    })
}

proptest! {
    #[test]
    fn generated_topologies_satisfy_axioms(space in topology(6)) {
        let rebuilt = CustomTopology::new(space.elements().clone(), space.open_sets().clone());
        prop_assert_eq!(rebuilt, Ok(space));
    }

    #[test]
    fn complements_of_closed_sets_are_open(space in topology(6)) {
        for closed in space.closed_sets() {
            prop_assert!(space.open_sets().contains(&space.complement(&closed)));
        }
    }

    #[test]
    fn complement_is_an_involution(space in topology(6)) {
        for open in space.open_sets() {
            prop_assert_eq!(&space.complement(&space.complement(open)), open);
        }
    }

    #[test]
    fn interior_inside_set_inside_closure((space, subset) in topology_and_subset()) {
        let interior = space.interior(&subset).unwrap();
        let closure = space.closure(&subset).unwrap();
        prop_assert!(interior.is_subset(&subset));
        prop_assert!(subset.is_subset(&closure));
        prop_assert!(space.is_open(&interior));
        prop_assert!(space.is_closed(&closure));
    }

    #[test]
    fn closure_is_idempotent((space, subset) in topology_and_subset()) {
        let once = space.closure(&subset).unwrap();
        prop_assert_eq!(space.closure(&once).unwrap(), once);
    }

    #[test]
    fn boundary_is_closed_and_symmetric((space, subset) in topology_and_subset()) {
        let boundary = space.boundary(&subset).unwrap();
        prop_assert!(space.is_closed(&boundary));
        prop_assert_eq!(&boundary, &space.boundary(&space.complement(&subset)).unwrap());
    }

    #[test]
    fn boundary_is_closure_minus_interior((space, subset) in topology_and_subset()) {
        let closure = space.closure(&subset).unwrap();
        let interior = space.interior(&subset).unwrap();
        let difference: PointSet<u8> = closure.difference(&interior).copied().collect();
        prop_assert_eq!(space.boundary(&subset).unwrap(), difference);
    }

    #[test]
    fn every_point_has_a_neighborhood(space in topology(6)) {
        for point in space.elements() {
            prop_assert!(!space.open_neighborhoods(point).is_empty());
        }
    }

    #[test]
    fn subspaces_are_topologies((space, subset) in topology_and_subset()) {
        let relative = RelativeTopology::new(subset.clone(), &space).unwrap();
        prop_assert_eq!(relative.elements(), &subset);
        prop_assert!(
            CustomTopology::new(subset, relative.open_sets().clone()).is_ok()
        );
    }

    #[test]
    fn products_are_topologies(left in topology(3), right in topology(3)) {
        let product = left.product(&right);
        prop_assert_eq!(
            product.elements().len(),
            left.elements().len() * right.elements().len()
        );
        prop_assert!(
            CustomTopology::new(product.elements().clone(), product.open_sets().clone()).is_ok()
        );
    }

    #[test]
    fn minimal_neighborhoods_form_a_basis(space in topology(6)) {
        let basis = CustomBasis::new(space.minimal_basis(), space.clone());
        prop_assert!(basis.is_ok());
    }

    #[test]
    fn identity_is_continuous(space in topology(6)) {
        let identity: FxHashMap<u8, u8> = space.elements().iter().map(|p| (*p, *p)).collect();
        prop_assert!(is_continuous(&identity, &space, &space).unwrap());
    }
}
