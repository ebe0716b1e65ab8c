// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for topology operations.

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a topology.
///
/// Sets are carried as rendered strings so that the error type does not
/// depend on the point type of the space that raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The open sets do not contain the empty set.
    #[error("the open sets do not contain the empty set")]
    MissingEmptySet,

    /// The open sets do not contain the set of all elements.
    #[error("the open sets do not contain the set of all elements")]
    MissingWholeSet,

    /// The intersection of two open sets is not open.
    #[error("the intersection of {first} and {second} is not an open set")]
    NotClosedUnderIntersection { first: String, second: String },

    /// The union of two open sets is not open.
    #[error("the union of {first} and {second} is not an open set")]
    NotClosedUnderUnion { first: String, second: String },

    /// An open set contains a point that is not an element of the space.
    #[error("open set {0} is not a subset of the elements")]
    OpenSetOutsideSpace(String),

    /// A set passed to an operation is not a subset of the space.
    #[error("the set {subset} is not a subset of {space}")]
    InvalidSubset { subset: String, space: String },

    /// A basis set is not an open set of its topology.
    #[error("the basis set {0} is not an open set of the topology")]
    BasisSetNotOpen(String),

    /// An open set is not a union of basis sets.
    #[error("the open set {0} is not a union of basis sets")]
    NotABasis(String),

    /// The bounds of an interval are out of order.
    #[error("the lower bound {lower} is not less than the upper bound {upper}")]
    InvalidInterval { lower: String, upper: String },

    /// A map between finite spaces is not a total function into the codomain.
    #[error("map is not total: {0}")]
    MapNotTotal(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
