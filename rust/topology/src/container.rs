// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lazy membership containers.
//!
//! The most general topological spaces cannot enumerate their elements or
//! open sets (the real line has uncountably many of both). What they can do is
//! answer "is this item in that set?". [`Container`] captures exactly that,
//! and the combinators in this module build intersections, unions, complements
//! and Cartesian products of containers without materializing anything.
//!
//! A lazy container becomes a concrete [`PointSet`] by filtering a finite
//! universe through it with [`materialize`].

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::set::{Point, PointSet};

/// A set that can only answer membership queries.
pub trait Container<T: ?Sized> {
    /// Returns `true` if the item is in this container.
    fn contains(&self, item: &T) -> bool;

    /// Items in both `self` and `other`.
    fn and<B>(self, other: B) -> Intersection<Self, B>
    where
        Self: Sized,
    {
        Intersection::new(self, other)
    }

    /// Items in either `self` or `other`.
    fn or<B>(self, other: B) -> Union<Self, B>
    where
        Self: Sized,
    {
        Union::new(self, other)
    }

    /// Items in `self` but not in `other`.
    fn without<B>(self, other: B) -> Complement<Self, B>
    where
        Self: Sized,
    {
        Complement::new(self, other)
    }

    /// Pairs `(x, y)` with `x` in `self` and `y` in `other`.
    fn times<B>(self, other: B) -> Product<Self, B>
    where
        Self: Sized,
    {
        Product::new(self, other)
    }
}

impl<T: Ord> Container<T> for BTreeSet<T> {
    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Container<T> for HashSet<T, S> {
    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }
}

impl<T: PartialEq> Container<T> for [T] {
    fn contains(&self, item: &T) -> bool {
        self.iter().any(|x| x == item)
    }
}

impl<T: PartialEq> Container<T> for Vec<T> {
    fn contains(&self, item: &T) -> bool {
        self.iter().any(|x| x == item)
    }
}

impl<T: ?Sized, C: Container<T> + ?Sized> Container<T> for &C {
    fn contains(&self, item: &T) -> bool {
        (**self).contains(item)
    }
}

/// A container defined by a membership predicate.
#[derive(Clone, Copy)]
pub struct Predicate<F>(pub F);

impl<T: ?Sized, F: Fn(&T) -> bool> Container<T> for Predicate<F> {
    fn contains(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<F> std::fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// The container with no items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nothing;

impl<T: ?Sized> Container<T> for Nothing {
    fn contains(&self, _item: &T) -> bool {
        false
    }
}

/// Membership is the logical and of membership in both operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection<A, B> {
    first: A,
    second: B,
}

impl<A, B> Intersection<A, B> {
    /// Items in both `first` and `second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Container<T>, B: Container<T>> Container<T> for Intersection<A, B> {
    fn contains(&self, item: &T) -> bool {
        self.first.contains(item) && self.second.contains(item)
    }
}

/// Membership is the logical or of membership in either operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Union<A, B> {
    first: A,
    second: B,
}

impl<A, B> Union<A, B> {
    /// Items in `first` or `second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Container<T>, B: Container<T>> Container<T> for Union<A, B> {
    fn contains(&self, item: &T) -> bool {
        self.first.contains(item) || self.second.contains(item)
    }
}

/// Items of a universe that are not in a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complement<U, S> {
    universe: U,
    subset: S,
}

impl<U, S> Complement<U, S> {
    /// Items of `universe` outside `subset`.
    pub fn new(universe: U, subset: S) -> Self {
        Self { universe, subset }
    }
}

impl<T: ?Sized, U: Container<T>, S: Container<T>> Container<T> for Complement<U, S> {
    fn contains(&self, item: &T) -> bool {
        self.universe.contains(item) && !self.subset.contains(item)
    }
}

/// Cartesian product: `(x, y)` is a member iff `x` is in the first container
/// and `y` is in the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product<A, B> {
    first: A,
    second: B,
}

impl<A, B> Product<A, B> {
    /// Pairs drawn from `first` and `second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<X, Y, A: Container<X>, B: Container<Y>> Container<(X, Y)> for Product<A, B> {
    fn contains(&self, item: &(X, Y)) -> bool {
        self.first.contains(&item.0) && self.second.contains(&item.1)
    }
}

/// Collects the points of a finite universe that are members of `container`.
pub fn materialize<T: Point, C: Container<T> + ?Sized>(
    universe: &PointSet<T>,
    container: &C,
) -> PointSet<T> {
    universe
        .iter()
        .filter(|p| container.contains(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn evens() -> Predicate<impl Fn(&i32) -> bool> {
        Predicate(|x: &i32| x % 2 == 0)
    }

    #[test]
    fn intersection_requires_both() {
        let small: PointSet<i32> = (0..5).collect();
        let both = Intersection::new(&small, evens());
        assert!(both.contains(&2));
        assert!(!both.contains(&3));
        assert!(!both.contains(&6));
    }

    #[test]
    fn union_accepts_either() {
        let small: PointSet<i32> = (0..5).collect();
        let either = small.clone().or(evens());
        assert!(either.contains(&3));
        assert!(either.contains(&100));
        assert!(!either.contains(&7));
    }

    #[test]
    fn complement_stays_inside_universe() {
        let universe: PointSet<i32> = (0..6).collect();
        let odd = Complement::new(&universe, evens());
        assert_eq!(materialize(&universe, &odd), PointSet::from([1, 3, 5]));
        assert!(!odd.contains(&7_i32));
    }

    #[test]
    fn product_checks_each_coordinate() {
        let xs: FxHashSet<char> = ['a', 'b'].into_iter().collect();
        let ys = vec![1, 2];
        let rect = xs.times(ys);
        assert!(rect.contains(&('a', 2)));
        assert!(!rect.contains(&('c', 1)));
        assert!(!rect.contains(&('b', 3)));
    }

    #[test]
    fn nothing_is_empty() {
        assert!(!Container::<u8>::contains(&Nothing, &0));
        let universe: PointSet<u8> = [1, 2].into();
        assert!(materialize(&universe, &Nothing).is_empty());
    }

    #[test]
    fn debug_shows_operands() {
        let a: PointSet<u8> = [1].into();
        let b: PointSet<u8> = [2].into();
        let text = format!("{:?}", Union::new(a, b));
        assert_eq!(text, "Union { first: {1}, second: {2} }");
    }
}
