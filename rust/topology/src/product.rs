// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Product topologies of two finite spaces.
//!
//! The elements of `X × Y` are pairs `(x, y)`. An open rectangle is a set
//! `U × V` with `U` open in `X` and `V` open in `Y`. Rectangles are closed under
//! intersection, `(U × V) ∩ (U' × V') = (U ∩ U') × (V ∩ V')`, so they form a
//! basis, and the open sets of the product are all unions of open rectangles.
//!
//! Only the rectangles are built eagerly. The union closure can be
//! exponentially larger and is computed on the first call to `open_sets`.
//!
//! Multiplication does not commute: `X × Y` and `Y × X` have differently
//! ordered pairs as points. Products nest, so `(X × Y) × Z` has points of the
//! form `((x, y), z)`.

use std::fmt;
use std::sync::OnceLock;

use crate::custom::CustomTopology;
use crate::finite::FiniteTopology;
use crate::generate::close_under_unions;
use crate::set::{describe, describe_family, Point, PointSet, SetFamily};

/// The product of two finite topologies.
#[derive(Debug, Clone)]
pub struct FiniteProductTopology<X: Point, Y: Point> {
    first: CustomTopology<X>,
    second: CustomTopology<Y>,
    elements: PointSet<(X, Y)>,
    open_rectangles: SetFamily<(X, Y)>,
    open_sets: OnceLock<SetFamily<(X, Y)>>,
}

impl<X: Point, Y: Point> FiniteProductTopology<X, Y> {
    /// Multiplies `first` (the left factor) by `second` (the right factor).
    pub fn new<F, G>(first: &F, second: &G) -> Self
    where
        F: FiniteTopology<X>,
        G: FiniteTopology<Y>,
    {
        let elements = rectangle(first.elements(), second.elements());

        let mut open_rectangles = SetFamily::new();
        for u in first.open_sets() {
            for v in second.open_sets() {
                open_rectangles.insert(rectangle(u, v));
            }
        }
        tracing::debug!(
            elements = elements.len(),
            open_rectangles = open_rectangles.len(),
            "multiplied topologies"
        );

        Self {
            first: CustomTopology::from_topology(first),
            second: CustomTopology::from_topology(second),
            elements,
            open_rectangles,
            open_sets: OnceLock::new(),
        }
    }

    /// The open rectangles `U × V`; a basis for the open sets.
    pub fn open_rectangles(&self) -> &SetFamily<(X, Y)> {
        &self.open_rectangles
    }

    /// The left factor.
    pub fn first_factor(&self) -> &CustomTopology<X> {
        &self.first
    }

    /// The right factor.
    pub fn second_factor(&self) -> &CustomTopology<Y> {
        &self.second
    }

    /// The image of `set` under the projection onto the left factor.
    pub fn project_first(&self, set: &PointSet<(X, Y)>) -> PointSet<X> {
        set.iter().map(|(x, _)| x.clone()).collect()
    }

    /// The image of `set` under the projection onto the right factor.
    pub fn project_second(&self, set: &PointSet<(X, Y)>) -> PointSet<Y> {
        set.iter().map(|(_, y)| y.clone()).collect()
    }
}

/// The Cartesian product `u × v`.
fn rectangle<X: Point, Y: Point>(u: &PointSet<X>, v: &PointSet<Y>) -> PointSet<(X, Y)> {
    u.iter()
        .flat_map(|x| v.iter().map(move |y| (x.clone(), y.clone())))
        .collect()
}

impl<X: Point, Y: Point> FiniteTopology<(X, Y)> for FiniteProductTopology<X, Y> {
    fn elements(&self) -> &PointSet<(X, Y)> {
        &self.elements
    }

    fn open_sets(&self) -> &SetFamily<(X, Y)> {
        self.open_sets.get_or_init(|| {
            let open_sets = close_under_unions(&self.open_rectangles);
            tracing::debug!(
                open_sets = open_sets.len(),
                "closed product rectangles under unions"
            );
            open_sets
        })
    }
}

/// Products are equal when their factors are; the open sets follow.
impl<X: Point, Y: Point> PartialEq for FiniteProductTopology<X, Y> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<X: Point, Y: Point> Eq for FiniteProductTopology<X, Y> {}

impl<X: Point, Y: Point> fmt::Display for FiniteProductTopology<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FiniteProductTopology(elements={}, open_sets={})",
            describe(&self.elements),
            describe_family(self.open_sets())
        )
    }
}
