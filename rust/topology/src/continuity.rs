// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Continuous maps between finite spaces.
//!
//! A map `f: X → Y` is continuous iff the preimage of every open set of `Y`
//! is open in `X`. A homeomorphism is a continuous bijection whose inverse is
//! continuous. Maps are given as tables from domain points to codomain points.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::finite::FiniteTopology;
use crate::set::{Point, PointSet};

/// The points of `map`'s domain that are sent into `set`.
pub fn preimage<X: Point, Y: Point>(map: &FxHashMap<X, Y>, set: &PointSet<Y>) -> PointSet<X> {
    map.iter()
        .filter(|(_, image)| set.contains(*image))
        .map(|(point, _)| point.clone())
        .collect()
}

/// Returns `true` if the preimage of every open set of `codomain` is open in `domain`.
///
/// Fails with [`Error::MapNotTotal`] if `map` misses a point of `domain`, maps
/// a point outside `domain`, or sends a point outside `codomain`.
pub fn is_continuous<X, Y, D, C>(map: &FxHashMap<X, Y>, domain: &D, codomain: &C) -> Result<bool>
where
    X: Point,
    Y: Point,
    D: FiniteTopology<X>,
    C: FiniteTopology<Y>,
{
    check_total(map, domain, codomain)?;
    Ok(codomain
        .open_sets()
        .iter()
        .all(|open| domain.open_sets().contains(&preimage(map, open))))
}

/// Returns `true` if `map` is a bijection that is continuous in both directions.
pub fn is_homeomorphism<X, Y, D, C>(
    map: &FxHashMap<X, Y>,
    domain: &D,
    codomain: &C,
) -> Result<bool>
where
    X: Point,
    Y: Point,
    D: FiniteTopology<X>,
    C: FiniteTopology<Y>,
{
    check_total(map, domain, codomain)?;

    let inverse: FxHashMap<Y, X> = map.iter().map(|(x, y)| (y.clone(), x.clone())).collect();
    if inverse.len() != map.len() || inverse.len() != codomain.elements().len() {
        return Ok(false);
    }

    Ok(is_continuous(map, domain, codomain)? && is_continuous(&inverse, codomain, domain)?)
}

fn check_total<X, Y, D, C>(map: &FxHashMap<X, Y>, domain: &D, codomain: &C) -> Result<()>
where
    X: Point,
    Y: Point,
    D: FiniteTopology<X>,
    C: FiniteTopology<Y>,
{
    if let Some(missing) = domain.elements().iter().find(|p| !map.contains_key(*p)) {
        return Err(Error::MapNotTotal(format!("{missing:?} has no image")));
    }
    for (point, image) in map {
        if !domain.elements().contains(point) {
            return Err(Error::MapNotTotal(format!(
                "{point:?} is not in the domain"
            )));
        }
        if !codomain.elements().contains(image) {
            return Err(Error::MapNotTotal(format!(
                "{point:?} maps to {image:?} outside the codomain"
            )));
        }
    }
    Ok(())
}
