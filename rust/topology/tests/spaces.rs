// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fom_topology::container::{materialize, Container};
use fom_topology::neighborhood::{is_open_neighborhood, is_set_open_neighborhood};
use fom_topology::serialization::to_json;
use fom_topology::{
    Basis, CustomBasis, CustomTopology, EmptyTopology, Error, FiniteTopology, OpenInterval,
    PointSet, RandomConfig, RandomTopology, RealLine, RealSubset, RelativeTopology, SetFamily,
    Topology, TopologyProperties,
};

fn set(points: &[&'static str]) -> PointSet<&'static str> {
    points.iter().copied().collect()
}

/// Open sets `{}, {a}, {b}, {a, b}, {a, b, c}`: `c` is only reachable through
/// the whole space.
fn space() -> CustomTopology<&'static str> {
    CustomTopology::new(
        set(&["a", "b", "c"]),
        [
            set(&[]),
            set(&["a"]),
            set(&["b"]),
            set(&["a", "b"]),
            set(&["a", "b", "c"]),
        ]
        .into(),
    )
    .unwrap()
}

#[test]
fn closure_interior_boundary() {
    let space = space();
    assert_eq!(space.closure(&set(&["a"])).unwrap(), set(&["a", "c"]));
    assert_eq!(space.interior(&set(&["a", "c"])).unwrap(), set(&["a"]));
    assert_eq!(space.boundary(&set(&["a"])).unwrap(), set(&["c"]));
    assert_eq!(space.boundary(&set(&["c"])).unwrap(), set(&["c"]));
    assert!(space.is_dense(&set(&["a", "b"])).unwrap());
}

#[test]
fn neighborhoods() {
    let space = space();
    assert_eq!(
        space.open_neighborhoods(&"c"),
        SetFamily::from([set(&["a", "b", "c"])])
    );
    assert!(is_open_neighborhood(&"a", &set(&["a", "b"]), &space));
    assert!(!is_open_neighborhood(&"c", &set(&["a", "c"]), &space));
    assert!(is_set_open_neighborhood(&set(&["a"]), &set(&["a", "b"]), &space));
}

#[test]
fn subspace_of_a_and_c_is_sierpinski() {
    let relative = RelativeTopology::new(set(&["a", "c"]), &space()).unwrap();
    let expected: SetFamily<&str> = [set(&[]), set(&["a"]), set(&["a", "c"])].into();
    assert_eq!(relative.open_sets(), &expected);
    assert!(relative.is_t0());
    assert!(!relative.is_t1());
}

#[test]
fn product_with_a_point_is_homeomorphic_copy() {
    let point = CustomTopology::discrete([0u8].into());
    let product = space().product(&point);
    assert_eq!(product.open_sets().len(), space().open_sets().len());
    let closure = product.closure(&[("a", 0)].into()).unwrap();
    assert_eq!(closure, PointSet::from([("a", 0), ("c", 0)]));
}

#[test]
fn basis_regenerates_topology() {
    let sets: SetFamily<&str> = [set(&["a"]), set(&["b"]), set(&["a", "b", "c"])].into();
    let basis = CustomBasis::new(sets, space()).unwrap();
    assert_eq!(basis.len(), 3);
    assert_eq!(basis.generated_topology(), space());
    assert_eq!(basis.topology(), &space());
}

#[test]
fn empty_topology_behaves() {
    let empty = EmptyTopology::<&str>::new();
    assert!(empty.elements().is_empty());
    assert!(empty.closure(&PointSet::new()).unwrap().is_empty());
    assert!(empty.is_connected());
}

#[test]
fn random_topology_from_config() {
    let config = RandomConfig::default().with_seed(2024).with_rounds(4);
    let random = RandomTopology::with_config(set(&["a", "b", "c", "d"]), &config);
    assert!(CustomTopology::new(random.elements().clone(), random.open_sets().clone()).is_ok());
}

#[test]
fn json_round_trip_through_strings() {
    let json = to_json(&space()).unwrap();
    let parsed = CustomTopology::<String>::from_json(&json).unwrap();
    assert_eq!(parsed.elements().len(), 3);
    assert_eq!(parsed.open_sets().len(), 5);
}

#[test]
fn invalid_subset_message() {
    let err = space().closure(&set(&["z"])).unwrap_err();
    assert_eq!(err.to_string(), "the set {\"z\"} is not a subset of {\"a\", \"b\", \"c\"}");
    assert!(matches!(err, Error::InvalidSubset { .. }));
}

#[test]
fn real_line_is_membership_only() {
    let unit = OpenInterval::new(0.0, 1.0).unwrap();
    assert!(RealLine.is_open(&RealSubset::Open(unit)));
    assert!(RealLine.contains_point(&0.25));

    let grid: PointSet<i64> = (-4..=4).collect();
    let positive = OpenInterval::new(0, 10).unwrap();
    assert_eq!(materialize(&grid, &positive), (1..=4).collect::<PointSet<i64>>());
    assert!(positive.contains(&9));
}
