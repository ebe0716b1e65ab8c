// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Randomly generated finite topologies.
//!
//! Generation starts from `{{}, S}` and runs a number of rounds. Each round
//! draws two subsets of random size with randomly sampled points and adds both,
//! their union and their intersection. The collected family is finally closed
//! under unions and intersections, so the result always satisfies the axioms.

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use crate::config::RandomConfig;
use crate::custom::CustomTopology;
use crate::finite::FiniteTopology;
use crate::generate::generate_topology;
use crate::set::{Point, PointSet, SetFamily};

/// A finite topology whose open sets are generated at random.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomTopology<T: Point> {
    inner: CustomTopology<T>,
    rounds: usize,
}

impl<T: Point> RandomTopology<T> {
    /// Generates a topology on `elements` with the given number of rounds.
    pub fn generate<R: Rng + ?Sized>(elements: PointSet<T>, rounds: usize, rng: &mut R) -> Self {
        let points: Vec<T> = elements.iter().cloned().collect();
        let mut seeds: SetFamily<T> = [PointSet::new(), elements.clone()].into();

        for _ in 0..rounds {
            let first = random_subset(&points, rng);
            let second = random_subset(&points, rng);
            seeds.insert(first.union(&second).cloned().collect());
            seeds.insert(first.intersection(&second).cloned().collect());
            seeds.insert(first);
            seeds.insert(second);
        }

        let open_sets = generate_topology(&elements, &seeds);
        tracing::debug!(
            elements = elements.len(),
            rounds,
            open_sets = open_sets.len(),
            "generated random topology"
        );

        Self {
            inner: CustomTopology::from_parts(elements, open_sets),
            rounds,
        }
    }

    /// Generates a topology using the rounds and seed of `config`.
    pub fn with_config(elements: PointSet<T>, config: &RandomConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate(elements, config.rounds, &mut rng)
    }

    /// Generates a topology with the rounds and seed read from the environment.
    pub fn from_env(elements: PointSet<T>) -> Self {
        Self::with_config(elements, &RandomConfig::from_env())
    }

    /// The number of randomizing rounds used.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Consumes the random topology, keeping only its elements and open sets.
    pub fn into_custom(self) -> CustomTopology<T> {
        self.inner
    }
}

/// A subset of random size whose points are sampled without replacement.
fn random_subset<T: Point, R: Rng + ?Sized>(points: &[T], rng: &mut R) -> PointSet<T> {
    let size = rng.gen_range(0..=points.len());
    sample(rng, points.len(), size)
        .iter()
        .map(|i| points[i].clone())
        .collect()
}

impl<T: Point> FiniteTopology<T> for RandomTopology<T> {
    fn elements(&self) -> &PointSet<T> {
        self.inner.elements()
    }

    fn open_sets(&self) -> &SetFamily<T> {
        self.inner.open_sets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom::check_axioms;

    #[test]
    fn random_topologies_satisfy_axioms() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in 0..7u32 {
            let elements: PointSet<u32> = (0..size).collect();
            let topology = RandomTopology::generate(elements, 5, &mut rng);
            assert!(check_axioms(topology.elements(), topology.open_sets()).is_ok());
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = RandomConfig::default().with_seed(99).with_rounds(3);
        let elements: PointSet<char> = ['a', 'b', 'c', 'd'].into();
        let first = RandomTopology::with_config(elements.clone(), &config);
        let second = RandomTopology::with_config(elements, &config);
        assert_eq!(first, second);
        assert_eq!(first.rounds(), 3);
    }

    #[test]
    fn zero_rounds_is_indiscrete() {
        let mut rng = StdRng::seed_from_u64(1);
        let elements: PointSet<u8> = [1, 2, 3].into();
        let topology = RandomTopology::generate(elements.clone(), 0, &mut rng);
        assert!(topology.same_topology(&CustomTopology::indiscrete(elements)));
    }

    #[test]
    fn empty_elements_give_empty_topology() {
        let mut rng = StdRng::seed_from_u64(1);
        let topology = RandomTopology::<u8>::generate(PointSet::new(), 4, &mut rng);
        assert_eq!(topology.open_sets().len(), 1);
    }

    #[test]
    fn into_custom_keeps_open_sets() {
        let mut rng = StdRng::seed_from_u64(3);
        let topology = RandomTopology::generate([1u8, 2].into(), 2, &mut rng);
        let open = topology.open_sets().clone();
        assert_eq!(topology.into_custom().open_sets(), &open);
    }
}
