// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Analysis queries on finite spaces: minimal neighborhoods, the
//! specialization preorder, separation axioms and connectedness.
//!
//! Every point `x` of a finite space has a smallest open neighborhood `U(x)`,
//! the intersection of all of its open neighborhoods. These sets form the
//! minimal basis of the space and most questions reduce to them:
//!
//! * `x` specializes `y` (`x ∈ cl{y}`) iff `y ∈ U(x)`,
//! * the space is T0 iff `U(x) ≠ U(y)` whenever `x ≠ y`,
//! * it is T1 (and, being finite, discrete) iff `U(x) = {x}` for every `x`,
//! * connected components are the components of the graph joining `x` to
//!   every point of `U(x)`.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::finite::FiniteTopology;
use crate::set::{Point, PointSet, SetFamily};

/// Analysis queries available on every finite topology.
pub trait TopologyProperties<T: Point>: FiniteTopology<T> {
    /// The smallest open neighborhood of each point.
    fn minimal_neighborhoods(&self) -> FxHashMap<T, PointSet<T>> {
        self.elements()
            .iter()
            .map(|point| {
                let smallest = self
                    .open_neighborhoods(point)
                    .into_iter()
                    .fold(self.elements().clone(), |acc, open| {
                        acc.intersection(&open).cloned().collect()
                    });
                (point.clone(), smallest)
            })
            .collect()
    }

    /// The minimal basis: the distinct smallest open neighborhoods.
    fn minimal_basis(&self) -> SetFamily<T> {
        self.minimal_neighborhoods().into_values().collect()
    }

    /// Returns `true` if `x` lies in the closure of `{y}`. Points outside the
    /// space specialize nothing.
    fn specializes(&self, x: &T, y: &T) -> bool {
        if !self.elements().contains(x) || !self.elements().contains(y) {
            return false;
        }
        self.open_neighborhoods(x).iter().all(|open| open.contains(y))
    }

    /// Kolmogorov: distinct points have distinct open neighborhoods.
    fn is_t0(&self) -> bool {
        let minimal = self.minimal_neighborhoods();
        let distinct: FxHashSet<&PointSet<T>> = minimal.values().collect();
        distinct.len() == minimal.len()
    }

    /// Every singleton is closed.
    fn is_t1(&self) -> bool {
        self.elements()
            .iter()
            .all(|point| self.open_sets().contains(&self.complement(&[point.clone()].into())))
    }

    /// Distinct points have disjoint open neighborhoods.
    fn is_hausdorff(&self) -> bool {
        let minimal = self.minimal_neighborhoods();
        let points: Vec<&T> = self.elements().iter().collect();
        points.iter().enumerate().all(|(i, x)| {
            points[i + 1..]
                .iter()
                .all(|y| minimal[*x].is_disjoint(&minimal[*y]))
        })
    }

    /// Every subset is open.
    fn is_discrete(&self) -> bool {
        self.elements()
            .iter()
            .all(|point| self.open_sets().contains(&PointSet::from([point.clone()])))
    }

    /// Only the empty set and the whole space are open.
    fn is_indiscrete(&self) -> bool {
        self.open_sets()
            .iter()
            .all(|open| open.is_empty() || open == self.elements())
    }

    /// The maximal connected subsets, each of which is clopen.
    fn connected_components(&self) -> SetFamily<T> {
        let minimal = self.minimal_neighborhoods();

        let mut adjacent: FxHashMap<&T, FxHashSet<&T>> = FxHashMap::default();
        for (point, smallest) in &minimal {
            for other in smallest {
                adjacent.entry(point).or_default().insert(other);
                adjacent.entry(other).or_default().insert(point);
            }
        }

        let mut seen: FxHashSet<&T> = FxHashSet::default();
        let mut components = SetFamily::new();
        for start in self.elements() {
            if !seen.insert(start) {
                continue;
            }
            let mut component = PointSet::new();
            let mut queue = VecDeque::from([start]);
            while let Some(point) = queue.pop_front() {
                component.insert(point.clone());
                for next in adjacent.get(point).into_iter().flatten() {
                    if seen.insert(*next) {
                        queue.push_back(*next);
                    }
                }
            }
            components.insert(component);
        }
        components
    }

    /// The space cannot be split into two disjoint non-empty open sets. The
    /// empty space is connected.
    fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }
}

impl<T: Point, F: FiniteTopology<T>> TopologyProperties<T> for F {}
